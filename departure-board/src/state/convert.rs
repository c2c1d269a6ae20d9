//! Conversion from raw entity state to tagged domain state.

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::domain::{Departure, Line, StopPoint, TransportMode, UNSET, parse_timestamp};

use super::entity::{DepartureData, DeviationData, EntityState};
use super::types::{
    RawDeparture, RawDepartureAttributes, RawDeviationAttributes, RawEntityState,
};

/// Error during raw state to domain conversion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// Failed to parse a timestamp
    #[error("invalid time in {field}: {source}")]
    InvalidTime {
        field: &'static str,
        source: crate::domain::TimeError,
    },

    /// Missing required field
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// JSON didn't have the expected shape
    #[error("malformed {what}: {message}")]
    Malformed { what: &'static str, message: String },
}

/// Convert one entity's raw state into an [`EntityState`].
///
/// Fails only when the entity-level timestamps are unreadable or the
/// `departures`/`deviations` attribute has the wrong shape. Individual
/// departures that fail to convert are skipped with a warning.
pub fn convert_entity_state(
    entity_id: &str,
    raw: &RawEntityState,
) -> Result<EntityState, ConversionError> {
    let last_updated = parse_entity_time(raw.last_updated.as_deref(), "last_updated")?;
    let last_changed = parse_entity_time(raw.last_changed.as_deref(), "last_changed")?;
    let attributes = serde_json::Value::Object(raw.attributes.clone());

    if raw.attributes.contains_key("departures") {
        let attrs: RawDepartureAttributes =
            serde_json::from_value(attributes).map_err(|e| ConversionError::Malformed {
                what: "departure attributes",
                message: e.to_string(),
            })?;

        let mut departures = Vec::with_capacity(attrs.departures.len());
        for (index, value) in attrs.departures.into_iter().enumerate() {
            let converted = serde_json::from_value::<RawDeparture>(value)
                .map_err(|e| ConversionError::Malformed {
                    what: "departure",
                    message: e.to_string(),
                })
                .and_then(|raw| convert_departure(&raw));

            match converted {
                Ok(departure) => departures.push(departure),
                Err(e) => {
                    // Skip the bad entry rather than losing the whole board
                    warn!(entity_id, index, error = %e, "skipping departure");
                }
            }
        }

        return Ok(EntityState::Departures(DepartureData {
            friendly_name: attrs.friendly_name.unwrap_or_default(),
            departures,
            last_updated,
            last_changed,
        }));
    }

    if raw.attributes.contains_key("deviations") {
        let attrs: RawDeviationAttributes =
            serde_json::from_value(attributes).map_err(|e| ConversionError::Malformed {
                what: "deviation attributes",
                message: e.to_string(),
            })?;

        return Ok(EntityState::Deviations(DeviationData {
            friendly_name: attrs.friendly_name.unwrap_or_default(),
            count: attrs.deviations.len(),
        }));
    }

    debug!(entity_id, "entity has neither departures nor deviations");
    Ok(EntityState::Absent)
}

/// Convert a single raw departure.
pub fn convert_departure(raw: &RawDeparture) -> Result<Departure, ConversionError> {
    let expected = raw
        .expected
        .as_deref()
        .ok_or(ConversionError::MissingField("expected"))?;
    let expected = parse_timestamp(expected).map_err(|source| ConversionError::InvalidTime {
        field: "expected",
        source,
    })?;

    // A missing timetable time means the departure runs as expected
    let scheduled = match raw.scheduled.as_deref() {
        Some(s) => parse_timestamp(s).map_err(|source| ConversionError::InvalidTime {
            field: "scheduled",
            source,
        })?,
        None => expected,
    };

    let raw_line = raw
        .line
        .as_ref()
        .ok_or(ConversionError::MissingField("line"))?;

    let line = Line {
        id: raw_line.id.unwrap_or_default(),
        designation: raw_line.designation.clone().unwrap_or_default(),
        transport_mode: TransportMode::from_code(
            raw_line.transport_mode.as_deref().unwrap_or_default(),
        ),
        group_of_lines: raw_line.group_of_lines.clone().unwrap_or_default(),
    };

    let stop_point = raw
        .stop_point
        .as_ref()
        .map(|sp| StopPoint {
            name: sp.name.clone().unwrap_or_default(),
            designation: sp.designation.clone().unwrap_or_default(),
        })
        .unwrap_or_default();

    let destination = raw.destination.clone().unwrap_or_default();

    Ok(Departure {
        direction: raw.direction.clone().unwrap_or_else(|| destination.clone()),
        destination,
        direction_code: raw.direction_code.unwrap_or_default(),
        scheduled,
        expected,
        line,
        stop_point,
    })
}

/// Parse an entity-level timestamp; absent means never.
fn parse_entity_time(
    value: Option<&str>,
    field: &'static str,
) -> Result<DateTime<Utc>, ConversionError> {
    match value {
        None => Ok(UNSET),
        Some(s) => parse_timestamp(s)
            .map(|t| t.with_timezone(&Utc))
            .map_err(|source| ConversionError::InvalidTime { field, source }),
    }
}
