//! Timestamp handling for departure data.
//!
//! Departure times arrive either as RFC 3339 strings or as naive local
//! wall-clock strings ("2024-03-15T14:30:00"). Both are normalised into a
//! `DateTime<FixedOffset>` that keeps the wall-clock reading the stop
//! published, so clock-time labels show what the provider showed.

use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, TimeZone, Utc};

/// Error returned when parsing an invalid timestamp string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid timestamp {input:?}: {reason}")]
pub struct TimeError {
    input: String,
    reason: &'static str,
}

impl TimeError {
    fn new(input: &str, reason: &'static str) -> Self {
        Self {
            input: input.to_string(),
            reason,
        }
    }
}

/// The "never updated" instant.
///
/// A reference time equal to this is treated as invalid by the labeler.
pub const UNSET: DateTime<Utc> = DateTime::<Utc>::UNIX_EPOCH;

/// Returns true if `t` is the Unix epoch.
pub fn is_unset(t: DateTime<Utc>) -> bool {
    t.timestamp_millis() == 0
}

/// Whole minutes from `reference` until `expected`.
///
/// Positive means `expected` lies in the future. The result is truncated
/// toward zero, so `0` means less than one minute away in either direction.
///
/// # Examples
///
/// ```
/// use chrono::{Duration, TimeZone, Utc};
/// use departure_board::domain::diff_minutes;
///
/// let now = Utc.with_ymd_and_hms(2024, 3, 15, 14, 0, 0).unwrap();
/// let soon = (now + Duration::seconds(150)).fixed_offset();
/// let gone = (now - Duration::seconds(90)).fixed_offset();
///
/// assert_eq!(diff_minutes(soon, now), 2);
/// assert_eq!(diff_minutes(gone, now), -1);
/// ```
pub fn diff_minutes(expected: DateTime<FixedOffset>, reference: DateTime<Utc>) -> i64 {
    expected
        .with_timezone(&Utc)
        .signed_duration_since(reference)
        .num_minutes()
}

/// Parse a timestamp string.
///
/// Accepts RFC 3339 (`2024-03-15T14:30:00+01:00`) or a naive ISO 8601
/// date-time (`2024-03-15T14:30:00`, optional fractional seconds), which is
/// read as host local time.
pub fn parse_timestamp(s: &str) -> Result<DateTime<FixedOffset>, TimeError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(TimeError::new(s, "empty"));
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt);
    }

    let naive = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f"))
        .map_err(|_| TimeError::new(s, "expected RFC 3339 or YYYY-MM-DDTHH:MM:SS"))?;

    // Ambiguous local times (DST fall-back) take the earlier reading.
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.fixed_offset())
        .ok_or_else(|| TimeError::new(s, "local time does not exist"))
}
