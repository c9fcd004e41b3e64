//! Configuration file loading for the terminal front-end.
//!
//! Settings live in a TOML file (`chess-term.toml` by default). A missing
//! file is not an error: every field has a default.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::Level;

/// Errors that can occur when loading or parsing configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    /// The log level is not one of trace, debug, info, warn or error.
    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),
}

/// How the board is drawn.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Draw pieces with Unicode chess symbols instead of FEN letters.
    #[serde(default)]
    pub unicode: bool,
    /// Print rank and file labels around the board.
    #[serde(default = "default_true")]
    pub coordinates: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            unicode: false,
            coordinates: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Top-level front-end configuration.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct TermConfig {
    /// Starting position as FEN placement plus optional side to move.
    /// Defaults to the standard starting position.
    #[serde(default)]
    pub start_fen: Option<String>,
    /// Maximum log level written to stderr. Defaults to "info".
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub display: DisplayConfig,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TermConfig {
    fn default() -> Self {
        TermConfig {
            start_fen: None,
            log_level: default_log_level(),
            display: DisplayConfig::default(),
        }
    }
}

impl TermConfig {
    /// Default location of the configuration file.
    pub fn default_path() -> PathBuf {
        PathBuf::from("chess-term.toml")
    }

    /// Loads the configuration from `path`, or defaults if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
    /// or [`ConfigError::ParseError`] if the file contains invalid TOML.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Ok(toml::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Parses the configured log level.
    pub fn level(&self) -> Result<Level, ConfigError> {
        self.log_level
            .parse()
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))
    }
}
