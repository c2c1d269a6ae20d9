//! User-authored card configuration.

use serde::{Deserialize, Serialize};

use crate::domain::ConfigError;
use crate::state::DepartureData;

use super::entity::{EntityConfig, PartialEntityConfig};

/// Language used when neither the card nor the host names one.
pub const DEFAULT_LANGUAGE: &str = "sv-SE";

/// What tapping the card does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TapAction {
    /// Open the details dialog for `tap_action_entity`.
    Info,
    /// Call `service_config`.
    Service,
    /// Anything else, including "none".
    #[default]
    #[serde(other)]
    None,
}

/// A service call target.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub domain: String,
    pub service: String,
    #[serde(default)]
    pub data: serde_json::Map<String, serde_json::Value>,
}

/// Configuration for a departure card.
///
/// Deserializing fills every missing field from [`CardConfig::default`], so a
/// card configuration is always complete. Edits replace the whole value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardConfig {
    /// Entity ids to show, in display order.
    pub entities: Vec<String>,

    /// Card title.
    pub name: Option<String>,

    /// Show the card title.
    pub show_name: bool,

    /// Show departure lists at all.
    pub show_departures: bool,

    /// Show column headers in each list.
    pub show_header: bool,

    /// Show transport-mode icons.
    pub show_icon: bool,

    /// Show the "last updated" footer.
    pub show_updated: bool,

    /// Show each entity's friendly name.
    pub show_entity_name: bool,

    pub hide_departed: bool,

    /// Signed minutes. Older configs spell this `show_departed_offeset`.
    #[serde(alias = "show_departed_offeset")]
    pub show_departed_offset: i64,

    pub adjust_departure_time: bool,

    pub show_time_always: bool,

    /// Zero or absent means no limit.
    pub max_departures: Option<usize>,

    /// Falls back to the host locale.
    pub language: Option<String>,

    pub tap_action: TapAction,

    pub tap_action_entity: Option<String>,

    pub service_config: Option<ServiceConfig>,
}

impl CardConfig {
    /// Parse a card configuration from JSON, merging over defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Malformed(e.to_string()))
    }

    /// Parse a card configuration from JSON bytes, merging over defaults.
    pub fn from_slice(json: &[u8]) -> Result<Self, ConfigError> {
        serde_json::from_slice(json).map_err(|e| ConfigError::Malformed(e.to_string()))
    }

    /// Configuration for a freshly added card.
    pub fn stub() -> Self {
        Self::default()
    }

    /// Rows the card occupies in the dashboard grid.
    pub fn card_size(&self) -> usize {
        self.entities.len() + 1
    }

    /// Check the configuration for mistakes the editor should report.
    ///
    /// Rendering never calls this; a card with an invalid tap action simply
    /// does nothing when tapped.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.tap_action {
            TapAction::Info => {
                if self
                    .tap_action_entity
                    .as_deref()
                    .is_none_or(|e| e.trim().is_empty())
                {
                    return Err(ConfigError::MissingTapEntity);
                }
            }
            TapAction::Service => {
                let service = self
                    .service_config
                    .as_ref()
                    .ok_or(ConfigError::MissingServiceConfig)?;
                if service.domain.trim().is_empty() {
                    return Err(ConfigError::EmptyServiceField("domain"));
                }
                if service.service.trim().is_empty() {
                    return Err(ConfigError::EmptyServiceField("service"));
                }
            }
            TapAction::None => {}
        }
        Ok(())
    }

    /// The language to render in: the card's, else the host's, else Swedish.
    pub fn language(&self, host_language: Option<&str>) -> String {
        self.language
            .as_deref()
            .filter(|l| !l.is_empty())
            .or(host_language.filter(|l| !l.is_empty()))
            .unwrap_or(DEFAULT_LANGUAGE)
            .to_string()
    }

    /// The partial entity configuration this card implies for one entity.
    pub fn partial_entity_config(
        &self,
        language: &str,
        data: &DepartureData,
    ) -> PartialEntityConfig {
        PartialEntityConfig {
            language: Some(language.to_string()),
            show_header: Some(self.show_header),
            show_updated: Some(self.show_updated),
            show_name: Some(self.show_entity_name),
            show_icon: Some(self.show_icon),
            friendly_name: Some(data.friendly_name.clone()),
            hide_departed: Some(self.hide_departed),
            departed_offset: Some(self.show_departed_offset),
            last_updated: Some(data.last_updated),
            last_changed: Some(data.last_changed),
            adjust_time: Some(self.adjust_departure_time),
            always_time: Some(self.show_time_always),
            max_departures: self.max_departures,
        }
    }

    /// The effective configuration for one entity on this card.
    pub fn entity_config(&self, language: &str, data: &DepartureData) -> EntityConfig {
        EntityConfig::resolve(self.partial_entity_config(language, data))
    }
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            entities: Vec::new(),
            name: None,
            show_name: true,
            show_departures: true,
            show_header: true,
            show_icon: true,
            show_updated: true,
            show_entity_name: true,
            hide_departed: true,
            show_departed_offset: 5,
            adjust_departure_time: false,
            show_time_always: false,
            max_departures: None,
            language: None,
            tap_action: TapAction::None,
            tap_action_entity: None,
            service_config: None,
        }
    }
}
