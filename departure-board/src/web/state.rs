//! Application state for the web layer.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::board::{BoardEngine, CardView};
use crate::clock::Clock;
use crate::config::CardConfig;
use crate::state::StateStore;

/// Shared application state.
///
/// The card configuration is swapped whole on update; renders hold the
/// `Arc` they started with.
#[derive(Clone)]
pub struct AppState {
    /// Latest entity states
    pub states: StateStore,

    /// Card configuration
    pub card: Arc<RwLock<Arc<CardConfig>>>,

    /// Display row builder
    pub engine: Arc<BoardEngine>,

    /// Source of "now"
    pub clock: Arc<dyn Clock>,

    /// Host language, used when the card sets none
    pub host_language: Option<String>,

    /// Page refresh interval in seconds
    pub refresh_secs: u64,
}

impl AppState {
    /// Create a new app state.
    pub fn new(
        states: StateStore,
        card: CardConfig,
        clock: Arc<dyn Clock>,
        host_language: Option<String>,
        refresh_secs: u64,
    ) -> Self {
        Self {
            states,
            card: Arc::new(RwLock::new(Arc::new(card))),
            engine: Arc::new(BoardEngine::new()),
            clock,
            host_language,
            refresh_secs,
        }
    }

    /// Current card configuration.
    pub async fn card(&self) -> Arc<CardConfig> {
        self.card.read().await.clone()
    }

    /// Replace the card configuration.
    pub async fn replace_card(&self, card: CardConfig) {
        *self.card.write().await = Arc::new(card);
    }

    /// Render the card once.
    ///
    /// The clock and the states are each read once, so every entity on the
    /// card sees the same instant.
    pub async fn render(&self) -> CardView {
        let card = self.card().await;
        self.render_card(&card).await
    }

    /// Render with a card configuration the caller already holds.
    pub async fn render_card(&self, card: &CardConfig) -> CardView {
        let snapshot = self.states.snapshot().await;
        let now = self.clock.now();
        self.engine
            .assemble(card, &snapshot, self.host_language.as_deref(), now)
    }
}
