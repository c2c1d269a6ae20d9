//! Tap action dispatch.

use serde::Serialize;

use crate::config::{CardConfig, TapAction};

/// A side effect requested by tapping the card.
///
/// The board only describes it; the dashboard performs it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Intent {
    /// Open the details dialog for an entity.
    ShowDetails { entity_id: String },

    /// Call a backend service.
    InvokeService {
        domain: String,
        service: String,
        data: serde_json::Map<String, serde_json::Value>,
    },
}

/// The intent for a tap on a card with this configuration.
///
/// `None` means the tap does nothing, including when the configured action
/// lacks its target.
pub fn dispatch(config: &CardConfig) -> Option<Intent> {
    match config.tap_action {
        TapAction::Info => config
            .tap_action_entity
            .as_ref()
            .filter(|e| !e.is_empty())
            .map(|entity_id| Intent::ShowDetails {
                entity_id: entity_id.clone(),
            }),
        TapAction::Service => config.service_config.as_ref().map(|s| Intent::InvokeService {
            domain: s.domain.clone(),
            service: s.service.clone(),
            data: s.data.clone(),
        }),
        TapAction::None => None,
    }
}
