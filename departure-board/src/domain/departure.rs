//! A single departure from a stop.

use chrono::{DateTime, FixedOffset};

use super::transport::{Line, StopPoint};

/// One vehicle leaving the stop.
///
/// `expected` is always present. `scheduled` is the timetabled time and may
/// precede or equal `expected`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Departure {
    pub destination: String,

    /// Free-text direction, often the same as the destination.
    pub direction: String,

    /// Provider direction code (1 or 2 for most lines).
    pub direction_code: i64,

    pub scheduled: DateTime<FixedOffset>,

    pub expected: DateTime<FixedOffset>,

    pub line: Line,

    pub stop_point: StopPoint,
}

impl Departure {
    /// List identity for this departure: line id, destination and expected time.
    ///
    /// Not persisted anywhere; only stable for as long as the expected time is.
    pub fn key(&self) -> String {
        format!(
            "{}-{}-{}",
            self.line.id,
            self.destination,
            self.expected.to_rfc3339()
        )
    }

    /// Minutes the expected time lies after the scheduled one.
    pub fn delay_minutes(&self) -> i64 {
        self.expected
            .signed_duration_since(self.scheduled)
            .num_minutes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TransportMode;
    use chrono::{Duration, TimeZone};

    fn departure(line_id: i64, destination: &str, delay_mins: i64) -> Departure {
        let cet = FixedOffset::east_opt(3600).unwrap();
        let scheduled = cet.with_ymd_and_hms(2024, 3, 15, 14, 30, 0).unwrap();
        Departure {
            destination: destination.to_string(),
            direction: destination.to_string(),
            direction_code: 1,
            scheduled,
            expected: scheduled + Duration::minutes(delay_mins),
            line: Line {
                id: line_id,
                designation: line_id.to_string(),
                transport_mode: TransportMode::Metro,
                group_of_lines: String::new(),
            },
            stop_point: StopPoint::default(),
        }
    }

    #[test]
    fn key_includes_line_destination_and_time() {
        let d = departure(14, "Mörby centrum", 0);
        assert_eq!(d.key(), "14-Mörby centrum-2024-03-15T14:30:00+01:00");
    }

    #[test]
    fn key_changes_with_expected_time() {
        let on_time = departure(14, "Fruängen", 0);
        let late = departure(14, "Fruängen", 2);
        assert_ne!(on_time.key(), late.key());
    }

    #[test]
    fn key_distinguishes_lines() {
        assert_ne!(departure(13, "Ropsten", 0).key(), departure(14, "Ropsten", 0).key());
    }

    #[test]
    fn delay() {
        assert_eq!(departure(10, "Kungsträdgården", 0).delay_minutes(), 0);
        assert_eq!(departure(10, "Kungsträdgården", 4).delay_minutes(), 4);
    }
}
