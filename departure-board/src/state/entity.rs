//! Tagged entity state.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::domain::Departure;

/// What a configured entity currently holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntityState {
    /// A departure sensor with its list of departures.
    Departures(DepartureData),

    /// A disruption notice sensor.
    Deviations(DeviationData),

    /// No such entity, or nothing the board can show.
    Absent,
}

static ABSENT: EntityState = EntityState::Absent;

/// The departure list of one sensor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartureData {
    pub friendly_name: String,

    /// In the order the integration published them.
    pub departures: Vec<Departure>,

    /// Epoch if the sensor never reported one.
    pub last_updated: DateTime<Utc>,

    pub last_changed: DateTime<Utc>,
}

/// Disruption notices for a stop.
///
/// The board doesn't render these yet; only the count is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviationData {
    pub friendly_name: String,
    pub count: usize,
}

/// Anything that can answer "what does this entity hold right now?".
pub trait StateSource {
    /// The state of `entity_id`, or [`EntityState::Absent`].
    fn state(&self, entity_id: &str) -> &EntityState;
}

impl StateSource for HashMap<String, EntityState> {
    fn state(&self, entity_id: &str) -> &EntityState {
        self.get(entity_id).unwrap_or(&ABSENT)
    }
}
