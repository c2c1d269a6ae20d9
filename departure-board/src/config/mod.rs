//! Card and entity configuration.
//!
//! A card configuration is authored by the user and merged over defaults as
//! a whole. For each entity on the card it is narrowed to an
//! [`EntityConfig`], which is what the board engine consumes.

mod card;
mod entity;

pub use card::{CardConfig, DEFAULT_LANGUAGE, ServiceConfig, TapAction};
pub use entity::{EntityConfig, PartialEntityConfig};
