//! Raw entity state DTOs.
//!
//! These map directly to the JSON the dashboard publishes for an entity.
//! Almost everything is optional because integrations omit fields freely.

use serde::Deserialize;

/// One entity's state as published by the dashboard.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawEntityState {
    /// Present when states are loaded in bulk.
    #[serde(default)]
    pub entity_id: Option<String>,

    /// The entity's primary state value. Unused by the board.
    #[serde(default)]
    pub state: Option<serde_json::Value>,

    /// When the integration last refreshed the entity (RFC 3339).
    #[serde(default)]
    pub last_updated: Option<String>,

    /// When the entity's state last changed (RFC 3339).
    #[serde(default)]
    pub last_changed: Option<String>,

    #[serde(default)]
    pub attributes: serde_json::Map<String, serde_json::Value>,
}

/// Attributes of a departure sensor.
#[derive(Debug, Clone, Deserialize)]
pub struct RawDepartureAttributes {
    #[serde(default)]
    pub friendly_name: Option<String>,

    /// Kept as raw values so one bad entry can be skipped on its own.
    pub departures: Vec<serde_json::Value>,
}

/// Attributes of a deviations (disruption notice) sensor.
#[derive(Debug, Clone, Deserialize)]
pub struct RawDeviationAttributes {
    #[serde(default)]
    pub friendly_name: Option<String>,

    pub deviations: Vec<serde_json::Value>,
}

/// A departure as published by the transit integration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawDeparture {
    pub destination: Option<String>,

    pub direction: Option<String>,

    pub direction_code: Option<i64>,

    /// Provider state, e.g. "EXPECTED". Unused by the board.
    pub state: Option<String>,

    /// Provider's own display text, e.g. "3 min". Unused by the board.
    pub display: Option<String>,

    pub stop_point: Option<RawStopPoint>,

    pub line: Option<RawLine>,

    /// Timetabled departure time.
    pub scheduled: Option<String>,

    /// Predicted departure time.
    pub expected: Option<String>,
}

/// Line descriptor within a departure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawLine {
    pub id: Option<i64>,

    pub designation: Option<String>,

    /// "METRO", "BUS", "TRAM", "TRAIN", "SHIP", or something new.
    pub transport_mode: Option<String>,

    pub group_of_lines: Option<String>,
}

/// Stop point within a departure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawStopPoint {
    pub name: Option<String>,

    pub designation: Option<String>,
}
