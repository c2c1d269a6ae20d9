//! Composition of filter, classifier and labeler into display rows.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use crate::config::{CardConfig, EntityConfig};
use crate::domain::{Departure, TransportMode, is_unset};
use crate::state::{DepartureData, EntityState, StateSource};
use crate::translations::{Translations, Translator, format_updated_time, keys};

use super::classify::{ColorCategory, LineIcon, LineRules, badge_classes};
use super::filter::filter_departures;
use super::label::departure_label;

/// One row of a departure list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayRow {
    /// List identity; see [`Departure::key`].
    pub key: String,
    pub destination: String,
    /// Line designation.
    pub line: String,
    pub transport_mode: TransportMode,
    pub icon: LineIcon,
    pub color: ColorCategory,
    /// CSS classes for the line badge.
    pub badge_classes: String,
    /// Time column text.
    pub label: String,
    /// Minutes behind the timetable; negative when early.
    pub delay_minutes: i64,
}

/// Column headers of a departure list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardHeader {
    pub line: String,
    pub departure: String,
}

/// "Last updated" footer of a departure list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdatedFooter {
    pub label: String,
    pub time: String,
}

/// One entity's departure list, ready to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntityBoard {
    pub entity_id: String,
    /// Friendly name, when shown.
    pub name: Option<String>,
    pub header: Option<BoardHeader>,
    pub show_icon: bool,
    pub rows: Vec<DisplayRow>,
    pub updated: Option<UpdatedFooter>,
}

/// A whole card, ready to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardView {
    pub title: Option<String>,
    pub entities: Vec<EntityBoard>,
    /// The `now` this view was computed for.
    pub rendered_at: DateTime<Utc>,
}

/// Builds display rows from entity state.
///
/// Holds only immutable rules and a translator; every call is independent.
#[derive(Debug, Clone)]
pub struct BoardEngine<T = Translations> {
    rules: LineRules,
    translator: T,
}

impl BoardEngine<Translations> {
    /// Engine with the default line rules and the built-in translations.
    pub fn new() -> Self {
        Self::with_parts(LineRules::default(), Translations)
    }
}

impl Default for BoardEngine<Translations> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Translator> BoardEngine<T> {
    pub fn with_parts(rules: LineRules, translator: T) -> Self {
        Self { rules, translator }
    }

    pub fn rules(&self) -> &LineRules {
        &self.rules
    }

    /// Display rows for one entity's departures, in filtered order.
    pub fn rows(
        &self,
        departures: &[Departure],
        config: &EntityConfig,
        now: DateTime<Utc>,
    ) -> Vec<DisplayRow> {
        filter_departures(departures, now, config)
            .into_iter()
            .map(|d| self.row(d, config, now))
            .collect()
    }

    fn row(&self, departure: &Departure, config: &EntityConfig, now: DateTime<Utc>) -> DisplayRow {
        let line = &departure.line;
        let class = self
            .rules
            .classify(line.transport_mode, &line.designation, &line.group_of_lines);

        DisplayRow {
            key: departure.key(),
            destination: departure.destination.clone(),
            line: line.designation.clone(),
            transport_mode: line.transport_mode,
            icon: class.icon,
            color: class.color,
            badge_classes: badge_classes(line.transport_mode, &line.designation, class.color),
            label: departure_label(departure, now, config, &self.translator),
            delay_minutes: departure.delay_minutes(),
        }
    }

    /// One entity's list with its name, header and footer.
    pub fn entity(
        &self,
        entity_id: &str,
        data: &DepartureData,
        config: &EntityConfig,
        now: DateTime<Utc>,
    ) -> EntityBoard {
        let lang = config.language.as_str();

        let name = (config.show_name && !config.friendly_name.is_empty())
            .then(|| config.friendly_name.clone());

        let header = config.show_header.then(|| BoardHeader {
            line: self.translator.translate(lang, keys::LINE),
            departure: self.translator.translate(lang, keys::DEPARTURE),
        });

        let updated = (config.show_updated && !is_unset(config.last_changed)).then(|| {
            UpdatedFooter {
                label: self.translator.translate(lang, keys::LAST_UPDATED),
                time: format_updated_time(config.last_changed, lang),
            }
        });

        let rows = self.rows(&data.departures, config, now);
        debug!(
            entity_id,
            total = data.departures.len(),
            shown = rows.len(),
            "assembled departures"
        );

        EntityBoard {
            entity_id: entity_id.to_string(),
            name,
            header,
            show_icon: config.show_icon,
            rows,
            updated,
        }
    }

    /// Assemble a whole card.
    ///
    /// Entities are visited in configured order. Absent entities and
    /// deviation sensors contribute nothing; they never stop the rest of the
    /// card from rendering.
    pub fn assemble<S: StateSource + ?Sized>(
        &self,
        card: &CardConfig,
        states: &S,
        host_language: Option<&str>,
        now: DateTime<Utc>,
    ) -> CardView {
        let title = card
            .name
            .as_ref()
            .filter(|n| card.show_name && !n.is_empty())
            .cloned();

        let mut entities = Vec::new();
        if card.show_departures {
            let language = card.language(host_language);
            for entity_id in &card.entities {
                match states.state(entity_id) {
                    EntityState::Departures(data) => {
                        let config = card.entity_config(&language, data);
                        entities.push(self.entity(entity_id, data, &config, now));
                    }
                    EntityState::Deviations(d) => {
                        debug!(entity_id, count = d.count, "deviations are not displayed");
                    }
                    EntityState::Absent => {
                        debug!(entity_id, "entity absent, skipping");
                    }
                }
            }
        }

        CardView {
            title,
            entities,
            rendered_at: now,
        }
    }
}
