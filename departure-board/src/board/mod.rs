//! Departure presentation engine.
//!
//! Turns (departures × effective config × now) into display rows:
//!
//! 1. [`filter_departures`] drops departed entries and applies the cap
//! 2. [`LineRules::classify`] picks an icon and color category per line
//! 3. [`departure_label`] renders the relative or clock-time label
//! 4. [`BoardEngine`] composes these per entity and per card
//!
//! Every function here is pure. The caller reads the clock once per render
//! pass and hands the same `now` to everything.

mod assemble;
mod classify;
mod filter;
mod label;
mod tap;

#[cfg(test)]
mod scenario_tests;

pub use assemble::{BoardEngine, BoardHeader, CardView, DisplayRow, EntityBoard, UpdatedFooter};
pub use classify::{ColorCategory, LineClass, LineIcon, LineRules, badge_classes, classify};
pub use filter::{filter_departures, is_visible};
pub use label::{PLACEHOLDER, departure_label};
pub use tap::{Intent, dispatch};
