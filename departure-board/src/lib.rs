//! Public-transit departure board.
//!
//! Turns the departure state published by a transit integration into the
//! rows a dashboard card shows: which departures are still relevant, how
//! each one's time reads ("Nu", "5 min", "13:05"), and which icon and line
//! color it gets.

pub mod board;
pub mod clock;
pub mod config;
pub mod domain;
pub mod settings;
pub mod state;
pub mod translations;
pub mod web;
