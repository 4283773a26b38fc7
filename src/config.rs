//! Terminal front-end configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

use crate::types::Mark;

/// Symbols drawn for each mark.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Symbols {
    /// Symbol for the first player.
    #[serde(default = "default_first_symbol")]
    first: String,
    /// Symbol for the second player.
    #[serde(default = "default_second_symbol")]
    second: String,
}

impl Symbols {
    /// Returns the symbol configured for `mark`.
    pub fn of(&self, mark: Mark) -> &str {
        match mark {
            Mark::First => &self.first,
            Mark::Second => &self.second,
        }
    }
}

impl Default for Symbols {
    fn default() -> Self {
        Self {
            first: default_first_symbol(),
            second: default_second_symbol(),
        }
    }
}

fn default_first_symbol() -> String {
    Mark::First.symbol().to_string()
}

fn default_second_symbol() -> String {
    Mark::Second.symbol().to_string()
}

fn default_log_filter() -> String {
    "warn".to_string()
}

fn default_show_coordinates() -> bool {
    true
}

/// Settings for the terminal front end.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct FrontendConfig {
    /// Tracing filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Print row and column numbers around the board.
    #[serde(default = "default_show_coordinates")]
    show_coordinates: bool,

    /// Mark symbols.
    #[serde(default)]
    symbols: Symbols,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            show_coordinates: default_show_coordinates(),
            symbols: Symbols::default(),
        }
    }
}

impl FrontendConfig {
    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(log_filter = %config.log_filter, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` when given, otherwise returns defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
