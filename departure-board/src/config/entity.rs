//! Effective per-entity configuration.

use chrono::{DateTime, Utc};

use crate::domain::UNSET;

use super::card::DEFAULT_LANGUAGE;

/// Fully resolved configuration for one entity's departure list.
///
/// Every field has a value. Build one with [`EntityConfig::resolve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityConfig {
    /// BCP 47 language tag for labels and clock formatting.
    pub language: String,

    /// Show the "line / departure" column headers.
    pub show_header: bool,

    /// Show the "last updated" footer.
    pub show_updated: bool,

    /// Show the entity's friendly name above its list.
    pub show_name: bool,

    /// Show the transport-mode icon column.
    pub show_icon: bool,

    pub friendly_name: String,

    /// Drop departures that have already left (see `departed_offset`).
    pub hide_departed: bool,

    /// Minutes added to each departure's diff before deciding whether it has
    /// left. Positive keeps departed entries visible longer; negative hides
    /// imminent ones sooner.
    pub departed_offset: i64,

    /// When the entity's data was last refreshed. Epoch means never.
    pub last_updated: DateTime<Utc>,

    /// When the entity's departures last changed.
    pub last_changed: DateTime<Utc>,

    /// Measure against `last_updated` instead of the wall clock.
    pub adjust_time: bool,

    /// Show clock times instead of relative minutes.
    pub always_time: bool,

    /// Maximum departures to show. `None` or `Some(0)` means no limit.
    pub max_departures: Option<usize>,
}

/// A partially specified [`EntityConfig`].
///
/// `Some` values always win over defaults, including `Some(false)` and
/// `Some(0)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialEntityConfig {
    pub language: Option<String>,
    pub show_header: Option<bool>,
    pub show_updated: Option<bool>,
    pub show_name: Option<bool>,
    pub show_icon: Option<bool>,
    pub friendly_name: Option<String>,
    pub hide_departed: Option<bool>,
    pub departed_offset: Option<i64>,
    pub last_updated: Option<DateTime<Utc>>,
    pub last_changed: Option<DateTime<Utc>>,
    pub adjust_time: Option<bool>,
    pub always_time: Option<bool>,
    pub max_departures: Option<usize>,
}

impl EntityConfig {
    /// Merge `partial` over the defaults.
    ///
    /// # Examples
    ///
    /// ```
    /// use departure_board::config::{EntityConfig, PartialEntityConfig};
    ///
    /// let config = EntityConfig::resolve(PartialEntityConfig {
    ///     show_header: Some(false),
    ///     departed_offset: Some(0),
    ///     ..Default::default()
    /// });
    ///
    /// assert!(!config.show_header);
    /// assert_eq!(config.departed_offset, 0);
    /// assert_eq!(config.language, "sv-SE");
    /// ```
    pub fn resolve(partial: PartialEntityConfig) -> Self {
        let defaults = Self::default();
        Self {
            language: partial.language.unwrap_or(defaults.language),
            show_header: partial.show_header.unwrap_or(defaults.show_header),
            show_updated: partial.show_updated.unwrap_or(defaults.show_updated),
            show_name: partial.show_name.unwrap_or(defaults.show_name),
            show_icon: partial.show_icon.unwrap_or(defaults.show_icon),
            friendly_name: partial.friendly_name.unwrap_or(defaults.friendly_name),
            hide_departed: partial.hide_departed.unwrap_or(defaults.hide_departed),
            departed_offset: partial.departed_offset.unwrap_or(defaults.departed_offset),
            last_updated: partial.last_updated.unwrap_or(defaults.last_updated),
            last_changed: partial.last_changed.unwrap_or(defaults.last_changed),
            adjust_time: partial.adjust_time.unwrap_or(defaults.adjust_time),
            always_time: partial.always_time.unwrap_or(defaults.always_time),
            max_departures: partial.max_departures.or(defaults.max_departures),
        }
    }

    /// The instant relative times are measured against.
    pub fn reference_time(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        if self.adjust_time {
            self.last_updated
        } else {
            now
        }
    }

    /// The departure cap, if one applies.
    pub fn cap(&self) -> Option<usize> {
        self.max_departures.filter(|&n| n > 0)
    }
}

impl Default for EntityConfig {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            show_header: true,
            show_updated: false,
            show_name: true,
            show_icon: true,
            friendly_name: String::new(),
            hide_departed: false,
            departed_offset: 0,
            last_updated: UNSET,
            last_changed: UNSET,
            adjust_time: false,
            always_time: false,
            max_departures: None,
        }
    }
}

impl From<PartialEntityConfig> for EntityConfig {
    fn from(partial: PartialEntityConfig) -> Self {
        Self::resolve(partial)
    }
}
