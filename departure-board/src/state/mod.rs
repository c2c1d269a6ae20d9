//! Entity state boundary.
//!
//! The dashboard publishes entity state as loosely shaped JSON. This module
//! converts it once into a tagged [`EntityState`] so the board engine can
//! match on what an entity holds instead of probing for fields.
//!
//! Key characteristics:
//! - Unknown attribute shapes become [`EntityState::Absent`]
//! - A departure that fails to convert is skipped, not the whole entity
//! - Departure times without an offset are read as host local time

mod convert;
mod entity;
mod store;
mod types;

pub use convert::{ConversionError, convert_departure, convert_entity_state};
pub use entity::{DepartureData, DeviationData, EntityState, StateSource};
pub use store::{IngestSummary, StateSnapshot, StateStore};
pub use types::{RawDeparture, RawEntityState, RawLine, RawStopPoint};
