//! Transport mode and line descriptors.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Mode of transport a line runs as.
///
/// Any mode string the board doesn't know deserializes to
/// [`TransportMode::Unknown`] instead of failing.
///
/// # Examples
///
/// ```
/// use departure_board::domain::TransportMode;
///
/// assert_eq!(TransportMode::from_code("METRO"), TransportMode::Metro);
/// assert_eq!(TransportMode::from_code("FUNICULAR"), TransportMode::Unknown);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransportMode {
    Metro,
    Bus,
    Tram,
    Train,
    Ship,
    #[default]
    #[serde(other)]
    Unknown,
}

impl TransportMode {
    /// Map a provider mode code to a mode. Total: unknown codes map to `Unknown`.
    pub fn from_code(code: &str) -> Self {
        match code {
            "METRO" => TransportMode::Metro,
            "BUS" => TransportMode::Bus,
            "TRAM" => TransportMode::Tram,
            "TRAIN" => TransportMode::Train,
            "SHIP" => TransportMode::Ship,
            _ => TransportMode::Unknown,
        }
    }

    /// Returns the provider code, or `UNKNOWN`.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportMode::Metro => "METRO",
            TransportMode::Bus => "BUS",
            TransportMode::Tram => "TRAM",
            TransportMode::Train => "TRAIN",
            TransportMode::Ship => "SHIP",
            TransportMode::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The line a departure runs on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Line {
    /// Provider line id.
    pub id: i64,

    /// Public designation, e.g. "14" or "172X".
    pub designation: String,

    pub transport_mode: TransportMode,

    /// Group of lines, e.g. "blåbuss" or "Tunnelbanans röda linje".
    pub group_of_lines: String,
}

/// Where a departure leaves from within the stop area.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StopPoint {
    pub name: String,

    /// Platform or stand designation.
    pub designation: String,
}
