//! Label translations and locale-aware time formatting.
//!
//! The board only needs a handful of strings. Swedish is used for any `sv`
//! language tag, English for everything else.

use chrono::{DateTime, FixedOffset, Local, Utc};

/// Keys the board looks up.
pub mod keys {
    pub const NOW: &str = "now";
    pub const MIN: &str = "min";
    pub const DEPARTED: &str = "departed";
    pub const LINE: &str = "line";
    pub const DEPARTURE: &str = "departure";
    pub const LAST_UPDATED: &str = "last_updated";
}

/// String lookup by language tag and key.
///
/// Implementations must be total: an unknown key returns something
/// displayable (the built-in table returns the key itself).
pub trait Translator {
    fn translate(&self, language: &str, key: &str) -> String;
}

/// The built-in Swedish/English table.
#[derive(Debug, Clone, Copy, Default)]
pub struct Translations;

impl Translator for Translations {
    fn translate(&self, language: &str, key: &str) -> String {
        let table = if primary_subtag(language) == "sv" {
            SWEDISH
        } else {
            ENGLISH
        };

        table
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| (*v).to_string())
            .unwrap_or_else(|| key.to_string())
    }
}

const SWEDISH: &[(&str, &str)] = &[
    (keys::NOW, "Nu"),
    (keys::MIN, "min"),
    (keys::DEPARTED, "Avgått"),
    (keys::LINE, "Linje"),
    (keys::DEPARTURE, "Avgång"),
    (keys::LAST_UPDATED, "Senast uppdaterad"),
];

const ENGLISH: &[(&str, &str)] = &[
    (keys::NOW, "Now"),
    (keys::MIN, "min"),
    (keys::DEPARTED, "Departed"),
    (keys::LINE, "Line"),
    (keys::DEPARTURE, "Departure"),
    (keys::LAST_UPDATED, "Last updated"),
];

/// Regions whose English convention is a 12-hour clock.
const TWELVE_HOUR_REGIONS: &[&str] = &["US", "CA", "AU", "NZ", "PH", "IN"];

/// Lowercased language part of a BCP 47 tag ("sv-SE" -> "sv").
fn primary_subtag(language: &str) -> String {
    language
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase()
}

/// Whether `language` formats times with a 12-hour clock.
pub fn uses_twelve_hour_clock(language: &str) -> bool {
    let mut parts = language.split(['-', '_']);
    let primary = parts.next().unwrap_or_default();
    if !primary.eq_ignore_ascii_case("en") {
        return false;
    }
    parts.any(|p| {
        TWELVE_HOUR_REGIONS
            .iter()
            .any(|r| r.eq_ignore_ascii_case(p))
    })
}

/// Hour and minute of `t` as read on its own wall clock.
///
/// # Examples
///
/// ```
/// use chrono::{FixedOffset, TimeZone};
/// use departure_board::translations::format_clock_time;
///
/// let cet = FixedOffset::east_opt(3600).unwrap();
/// let t = cet.with_ymd_and_hms(2024, 3, 15, 14, 5, 0).unwrap();
///
/// assert_eq!(format_clock_time(t, "sv-SE"), "14:05");
/// assert_eq!(format_clock_time(t, "en-US"), "2:05 PM");
/// ```
pub fn format_clock_time(t: DateTime<FixedOffset>, language: &str) -> String {
    if uses_twelve_hour_clock(language) {
        t.format("%-I:%M %p").to_string()
    } else {
        t.format("%H:%M").to_string()
    }
}

/// Date and time of `t` in host local time, for the "last updated" footer.
pub fn format_updated_time(t: DateTime<Utc>, language: &str) -> String {
    let local = t.with_timezone(&Local).fixed_offset();
    format!(
        "{} {}",
        local.format("%Y-%m-%d"),
        format_clock_time(local, language)
    )
}
