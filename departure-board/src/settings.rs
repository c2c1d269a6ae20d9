//! Host settings read from the environment.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use crate::config::CardConfig;
use crate::domain::ConfigError;
use crate::state::RawEntityState;

/// Default listen address.
pub const DEFAULT_BIND: &str = "127.0.0.1:3000";

/// Default page refresh interval (seconds). Relative labels move once a minute.
pub const DEFAULT_REFRESH_SECS: u64 = 30;

/// Errors reading host settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// An environment variable has an unusable value
    #[error("invalid value for {var}: {value:?}")]
    InvalidValue { var: &'static str, value: String },

    /// A configured file couldn't be read
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The card configuration file is invalid
    #[error("card configuration in {path}: {source}")]
    Card { path: PathBuf, source: ConfigError },

    /// The initial states file is invalid
    #[error("initial states in {path}: {message}")]
    States { path: PathBuf, message: String },
}

/// Settings for the board host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// `BOARD_BIND`
    pub bind: SocketAddr,

    /// `BOARD_CONFIG`: JSON card configuration.
    pub card_config: Option<PathBuf>,

    /// `BOARD_STATES`: JSON array of entity states to start with.
    pub initial_states: Option<PathBuf>,

    /// `BOARD_STATIC_DIR`
    pub static_dir: PathBuf,

    /// `BOARD_LANGUAGE`, else derived from `LANG`.
    pub language: Option<String>,

    /// `BOARD_REFRESH_SECS`
    pub refresh_secs: u64,
}

impl Settings {
    /// Read settings from the process environment.
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read settings through `lookup`, which returns a variable's value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SettingsError> {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let bind_value = get("BOARD_BIND").unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind = bind_value
            .parse()
            .map_err(|_| SettingsError::InvalidValue {
                var: "BOARD_BIND",
                value: bind_value.clone(),
            })?;

        let refresh_secs = match get("BOARD_REFRESH_SECS") {
            None => DEFAULT_REFRESH_SECS,
            Some(v) => v
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|&n| n > 0)
                .ok_or(SettingsError::InvalidValue {
                    var: "BOARD_REFRESH_SECS",
                    value: v,
                })?,
        };

        let language = get("BOARD_LANGUAGE").or_else(|| get("LANG").and_then(|l| posix_to_bcp47(&l)));

        Ok(Self {
            bind,
            card_config: get("BOARD_CONFIG").map(PathBuf::from),
            initial_states: get("BOARD_STATES").map(PathBuf::from),
            static_dir: get("BOARD_STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("static")),
            language,
            refresh_secs,
        })
    }

    /// Load the card configuration, or the defaults when none is configured.
    ///
    /// The file is merged over defaults and validated.
    pub fn load_card_config(&self) -> Result<CardConfig, SettingsError> {
        let Some(path) = &self.card_config else {
            return Ok(CardConfig::stub());
        };

        let json = read(path)?;
        let card = CardConfig::from_json(&json).map_err(|source| SettingsError::Card {
            path: path.clone(),
            source,
        })?;
        card.validate().map_err(|source| SettingsError::Card {
            path: path.clone(),
            source,
        })?;
        Ok(card)
    }

    /// Load the initial entity states, if configured.
    pub fn load_initial_states(&self) -> Result<Vec<RawEntityState>, SettingsError> {
        let Some(path) = &self.initial_states else {
            return Ok(Vec::new());
        };

        let json = read(path)?;
        serde_json::from_str(&json).map_err(|e| SettingsError::States {
            path: path.clone(),
            message: e.to_string(),
        })
    }
}

fn read(path: &Path) -> Result<String, SettingsError> {
    std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// "sv_SE.UTF-8" -> "sv-SE". `C` and `POSIX` carry no language.
fn posix_to_bcp47(locale: &str) -> Option<String> {
    let tag = locale.split(['.', '@']).next().unwrap_or_default();
    if tag.is_empty() || tag == "C" || tag == "POSIX" {
        return None;
    }
    Some(tag.replace('_', "-"))
}
