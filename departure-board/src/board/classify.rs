//! Line classification: icon and color category per transit line.

use serde::Serialize;

use crate::domain::TransportMode;

/// Icon shown for a departure's transport mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LineIcon {
    #[serde(rename = "mdi:subway")]
    Subway,
    #[serde(rename = "mdi:bus")]
    Bus,
    #[serde(rename = "mdi:tram")]
    Tram,
    #[serde(rename = "mdi:train")]
    Train,
    #[serde(rename = "mdi:ferry")]
    Ferry,
}

impl LineIcon {
    /// Total over modes; anything unmapped gets the train icon.
    pub fn for_mode(mode: TransportMode) -> Self {
        match mode {
            TransportMode::Metro => LineIcon::Subway,
            TransportMode::Bus => LineIcon::Bus,
            TransportMode::Tram => LineIcon::Tram,
            TransportMode::Train => LineIcon::Train,
            TransportMode::Ship => LineIcon::Ferry,
            TransportMode::Unknown => LineIcon::Train,
        }
    }

    /// Material Design icon id.
    pub fn as_str(&self) -> &'static str {
        match self {
            LineIcon::Subway => "mdi:subway",
            LineIcon::Bus => "mdi:bus",
            LineIcon::Tram => "mdi:tram",
            LineIcon::Train => "mdi:train",
            LineIcon::Ferry => "mdi:ferry",
        }
    }

    /// Plain-text stand-in for the icon.
    pub fn glyph(&self) -> &'static str {
        match self {
            LineIcon::Subway => "Ⓣ",
            LineIcon::Bus => "🚌",
            LineIcon::Tram => "🚋",
            LineIcon::Train => "🚆",
            LineIcon::Ferry => "⛴",
        }
    }
}

/// Semantic color group of a line. Not a raw color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ColorCategory {
    #[serde(rename = "bus")]
    Bus,
    #[serde(rename = "bus-blue")]
    BusBlue,
    #[serde(rename = "metro-blue")]
    MetroBlue,
    #[serde(rename = "metro-red")]
    MetroRed,
    #[serde(rename = "metro-green")]
    MetroGreen,
    #[serde(rename = "tram")]
    Tram,
    #[serde(rename = "train")]
    Train,
    #[serde(rename = "")]
    Neutral,
}

impl ColorCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorCategory::Bus => "bus",
            ColorCategory::BusBlue => "bus-blue",
            ColorCategory::MetroBlue => "metro-blue",
            ColorCategory::MetroRed => "metro-red",
            ColorCategory::MetroGreen => "metro-green",
            ColorCategory::Tram => "tram",
            ColorCategory::Train => "train",
            ColorCategory::Neutral => "",
        }
    }
}

/// Result of classifying a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineClass {
    pub icon: LineIcon,
    pub color: ColorCategory,
}

/// The line color conventions to classify by.
///
/// The default is Stockholm's: blue express buses, and the blue, red and
/// green metro lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineRules {
    /// Group-of-lines value marking an express bus. Compared exactly.
    pub express_bus_group: String,

    /// Metro designations on the blue line.
    pub metro_blue_lines: Vec<String>,

    /// Metro designations on the red line. Everything else is green.
    pub metro_red_lines: Vec<String>,
}

impl Default for LineRules {
    fn default() -> Self {
        Self {
            express_bus_group: "blåbuss".to_string(),
            metro_blue_lines: vec!["10".to_string(), "11".to_string()],
            metro_red_lines: vec!["13".to_string(), "14".to_string()],
        }
    }
}

impl LineRules {
    /// Classify a line. Never fails; unknown modes get neutral styling.
    pub fn classify(&self, mode: TransportMode, designation: &str, group: &str) -> LineClass {
        let color = match mode {
            TransportMode::Bus => {
                if group == self.express_bus_group {
                    ColorCategory::BusBlue
                } else {
                    ColorCategory::Bus
                }
            }
            TransportMode::Metro => {
                if self.metro_blue_lines.iter().any(|l| l == designation) {
                    ColorCategory::MetroBlue
                } else if self.metro_red_lines.iter().any(|l| l == designation) {
                    ColorCategory::MetroRed
                } else {
                    ColorCategory::MetroGreen
                }
            }
            TransportMode::Tram => ColorCategory::Tram,
            TransportMode::Train => ColorCategory::Train,
            TransportMode::Ship | TransportMode::Unknown => ColorCategory::Neutral,
        };

        LineClass {
            icon: LineIcon::for_mode(mode),
            color,
        }
    }
}

/// Classify with the default rules.
///
/// # Examples
///
/// ```
/// use departure_board::board::{ColorCategory, LineIcon, classify};
/// use departure_board::domain::TransportMode;
///
/// let class = classify(TransportMode::Metro, "13", "");
/// assert_eq!(class.icon, LineIcon::Subway);
/// assert_eq!(class.color, ColorCategory::MetroRed);
/// ```
pub fn classify(mode: TransportMode, designation: &str, group: &str) -> LineClass {
    LineRules::default().classify(mode, designation, group)
}

/// CSS classes for a line badge, e.g. `metro metro_13 red`.
///
/// Matches the class names the line stylesheet targets.
pub fn badge_classes(mode: TransportMode, designation: &str, color: ColorCategory) -> String {
    let base = match mode {
        TransportMode::Bus => "bus",
        TransportMode::Metro => "metro",
        TransportMode::Tram => "tram",
        TransportMode::Train => "train",
        TransportMode::Ship | TransportMode::Unknown => return String::new(),
    };

    let shade = match color {
        ColorCategory::BusBlue | ColorCategory::MetroBlue => Some("blue"),
        ColorCategory::MetroRed => Some("red"),
        ColorCategory::MetroGreen => Some("green"),
        _ => None,
    };

    match shade {
        Some(shade) => format!("{base} {base}_{designation} {shade}"),
        None => format!("{base} {base}_{designation}"),
    }
}
