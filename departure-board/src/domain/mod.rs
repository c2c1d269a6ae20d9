//! Domain types for the departure board.
//!
//! This module contains the value types the board engine works on. They are
//! produced once at the state boundary (see [`crate::state`]) and never
//! mutated by the engine afterwards.

mod departure;
mod error;
mod time;
mod transport;

pub use departure::Departure;
pub use error::ConfigError;
pub use time::{TimeError, UNSET, diff_minutes, is_unset, parse_timestamp};
pub use transport::{Line, StopPoint, TransportMode};
