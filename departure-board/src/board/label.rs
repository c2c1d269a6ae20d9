//! Departure time labels.

use chrono::{DateTime, Utc};

use crate::config::EntityConfig;
use crate::domain::{Departure, diff_minutes, is_unset};
use crate::translations::{Translator, format_clock_time, keys};

/// Shown instead of a relative time when the reference time was never set.
pub const PLACEHOLDER: &str = "—";

/// The label for a departure's time column.
///
/// With `always_time` set this is the expected clock time and nothing else
/// is read. Otherwise it is relative to the reference time:
///
/// | diff | label |
/// |------|-------|
/// | `0`  | "now" |
/// | `> 0`| "{diff} min" |
/// | `< 0`| "departed" |
///
/// An epoch reference time yields [`PLACEHOLDER`].
pub fn departure_label<T: Translator + ?Sized>(
    departure: &Departure,
    now: DateTime<Utc>,
    config: &EntityConfig,
    translator: &T,
) -> String {
    if config.always_time {
        return format_clock_time(departure.expected, &config.language);
    }

    let reference = config.reference_time(now);
    if is_unset(reference) {
        return PLACEHOLDER.to_string();
    }

    let diff = diff_minutes(departure.expected, reference);
    match diff {
        0 => translator.translate(&config.language, keys::NOW),
        d if d > 0 => format!(
            "{} {}",
            d,
            translator.translate(&config.language, keys::MIN)
        ),
        _ => translator.translate(&config.language, keys::DEPARTED),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Line, StopPoint, TransportMode, UNSET};
    use crate::translations::Translations;
    use chrono::{Duration, FixedOffset, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 13, 0, 0).unwrap()
    }

    fn departure(offset_secs: i64) -> Departure {
        let cet = FixedOffset::east_opt(3600).unwrap();
        let expected = (now() + Duration::seconds(offset_secs)).with_timezone(&cet);
        Departure {
            destination: "Hässelby strand".into(),
            direction: "Hässelby strand".into(),
            direction_code: 1,
            scheduled: expected,
            expected,
            line: Line {
                id: 19,
                designation: "19".into(),
                transport_mode: TransportMode::Metro,
                group_of_lines: String::new(),
            },
            stop_point: StopPoint::default(),
        }
    }

    fn english() -> EntityConfig {
        EntityConfig {
            language: "en-GB".into(),
            ..Default::default()
        }
    }

    fn label(offset_secs: i64, config: &EntityConfig) -> String {
        departure_label(&departure(offset_secs), now(), config, &Translations)
    }

    #[test]
    fn relative_labels() {
        let config = english();
        assert_eq!(label(0, &config), "Now");
        assert_eq!(label(30, &config), "Now");
        assert_eq!(label(-30, &config), "Now");
        assert_eq!(label(60, &config), "1 min");
        assert_eq!(label(5 * 60 + 59, &config), "5 min");
        assert_eq!(label(-60, &config), "Departed");
        assert_eq!(label(-3600, &config), "Departed");
    }

    #[test]
    fn swedish_labels() {
        let config = EntityConfig::default();
        assert_eq!(label(0, &config), "Nu");
        assert_eq!(label(180, &config), "3 min");
        assert_eq!(label(-180, &config), "Avgått");
    }

    #[test]
    fn clock_time_label() {
        let config = EntityConfig {
            always_time: true,
            ..english()
        };
        // 13:00 UTC + 5 minutes, shown on the departure's own CET clock
        assert_eq!(label(300, &config), "14:05");

        let config = EntityConfig {
            always_time: true,
            language: "en-US".into(),
            ..Default::default()
        };
        assert_eq!(label(300, &config), "2:05 PM");
    }

    #[test]
    fn clock_time_ignores_reference() {
        let config = EntityConfig {
            always_time: true,
            adjust_time: true,
            last_updated: UNSET,
            ..Default::default()
        };
        let d = departure(300);
        let a = departure_label(&d, now(), &config, &Translations);
        let b = departure_label(&d, now() + Duration::hours(7), &config, &Translations);
        assert_eq!(a, "14:05");
        assert_eq!(a, b);
    }

    #[test]
    fn unset_reference_gives_placeholder() {
        let config = EntityConfig {
            adjust_time: true,
            last_updated: UNSET,
            ..Default::default()
        };
        assert_eq!(label(300, &config), PLACEHOLDER);
        assert_eq!(label(-300, &config), PLACEHOLDER);
        assert_eq!(label(0, &config), "—");
    }

    #[test]
    fn adjust_time_measures_from_last_updated() {
        let config = EntityConfig {
            adjust_time: true,
            last_updated: now() - Duration::minutes(2),
            ..english()
        };
        assert_eq!(label(180, &config), "5 min");
    }

    #[test]
    fn custom_translator() {
        struct Upper;
        impl Translator for Upper {
            fn translate(&self, _language: &str, key: &str) -> String {
                key.to_uppercase()
            }
        }

        let config = EntityConfig::default();
        let d = departure(120);
        assert_eq!(departure_label(&d, now(), &config, &Upper), "2 MIN");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::{Line, StopPoint, TransportMode};
    use crate::translations::Translations;
    use chrono::{Duration, TimeZone};
    use proptest::prelude::*;

    fn departure_at(expected: DateTime<Utc>) -> Departure {
        Departure {
            destination: "X".into(),
            direction: "X".into(),
            direction_code: 1,
            scheduled: expected.fixed_offset(),
            expected: expected.fixed_offset(),
            line: Line {
                id: 1,
                designation: "1".into(),
                transport_mode: TransportMode::Bus,
                group_of_lines: String::new(),
            },
            stop_point: StopPoint::default(),
        }
    }

    proptest! {
        /// Same arguments, same label
        #[test]
        fn idempotent(
            offset in -100_000i64..100_000,
            always_time in any::<bool>(),
            adjust_time in any::<bool>(),
        ) {
            let now = Utc.with_ymd_and_hms(2024, 3, 15, 13, 0, 0).unwrap();
            let d = departure_at(now + Duration::seconds(offset));
            let config = EntityConfig {
                always_time,
                adjust_time,
                last_updated: now - Duration::minutes(1),
                ..Default::default()
            };
            prop_assert_eq!(
                departure_label(&d, now, &config, &Translations),
                departure_label(&d, now, &config, &Translations)
            );
        }

        /// Clock-time labels don't depend on now or last_updated
        #[test]
        fn clock_time_independent_of_reference(
            offset in -100_000i64..100_000,
            now_shift in -100_000i64..100_000,
            updated_shift in -100_000i64..100_000,
            adjust_time in any::<bool>(),
        ) {
            let base = Utc.with_ymd_and_hms(2024, 3, 15, 13, 0, 0).unwrap();
            let d = departure_at(base + Duration::seconds(offset));
            let config = EntityConfig {
                always_time: true,
                adjust_time,
                last_updated: base,
                ..Default::default()
            };
            let moved = EntityConfig {
                last_updated: base + Duration::seconds(updated_shift),
                ..config.clone()
            };
            prop_assert_eq!(
                departure_label(&d, base, &config, &Translations),
                departure_label(&d, base + Duration::seconds(now_shift), &moved, &Translations)
            );
        }
    }
}
