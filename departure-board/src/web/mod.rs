//! Web layer for the departure board.
//!
//! Serves the rendered board and accepts entity state and card
//! configuration updates.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
pub use templates::*;
