//! Data transfer objects for web requests and responses.

use serde::Serialize;

use crate::config::CardConfig;

/// Response after a card configuration update.
#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    /// The configuration now in effect, defaults filled in.
    pub config: CardConfig,

    /// Layout height hint.
    pub card_size: usize,
}

/// Response after loading entity states in bulk.
#[derive(Debug, Serialize)]
pub struct StatesLoadedResponse {
    /// How many entities were stored
    pub stored: usize,

    /// Entries without an id or that failed to convert
    pub skipped: usize,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

impl ConfigResponse {
    pub fn new(config: CardConfig) -> Self {
        let card_size = config.card_size();
        Self { config, card_size }
    }
}
