//! Departure filtering and capping.

use chrono::{DateTime, Utc};

use crate::config::EntityConfig;
use crate::domain::{Departure, diff_minutes};

/// Whether a departure is still shown when departed entries are hidden.
///
/// Kept iff `diff_minutes(expected, reference) + departed_offset >= 0`.
/// The sum saturates, so extreme offsets keep or drop everything.
pub fn is_visible(departure: &Departure, reference: DateTime<Utc>, departed_offset: i64) -> bool {
    diff_minutes(departure.expected, reference).saturating_add(departed_offset) >= 0
}

/// Departures to display, in input order.
///
/// With `hide_departed` off every departure passes. The cap is applied after
/// filtering, so it counts only entries that will actually show.
pub fn filter_departures<'a>(
    departures: &'a [Departure],
    now: DateTime<Utc>,
    config: &EntityConfig,
) -> Vec<&'a Departure> {
    let reference = config.reference_time(now);
    let limit = config.cap().unwrap_or(usize::MAX);

    departures
        .iter()
        .filter(|d| !config.hide_departed || is_visible(d, reference, config.departed_offset))
        .take(limit)
        .collect()
}
