//! Configuration file loading for the replay driver.
//!
//! Settings live in an optional `connect4.toml`. Every field has a default,
//! so a missing file or a partial file is fine.

use clap::ValueEnum;
use connect4_core::Color;
use connect4_engine::RenderStyle;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading or parsing configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// The color that plays the first move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FirstPlayer {
    #[default]
    Red,
    Yellow,
}

impl From<FirstPlayer> for Color {
    fn from(first: FirstPlayer) -> Self {
        match first {
            FirstPlayer::Red => Color::Red,
            FirstPlayer::Yellow => Color::Yellow,
        }
    }
}

/// Characters used when printing the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SymbolConfig {
    pub red: char,
    pub yellow: char,
    pub empty: char,
}

impl Default for SymbolConfig {
    fn default() -> Self {
        let style = RenderStyle::default();
        SymbolConfig {
            red: style.red,
            yellow: style.yellow,
            empty: style.empty,
        }
    }
}

impl From<SymbolConfig> for RenderStyle {
    fn from(symbols: SymbolConfig) -> Self {
        RenderStyle {
            red: symbols.red,
            yellow: symbols.yellow,
            empty: symbols.empty,
        }
    }
}

/// Main driver configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Color that plays the first move. Defaults to red.
    pub first_player: FirstPlayer,
    /// Whether to print the board after a replay. Defaults to true.
    pub show_board: bool,
    /// Board symbols.
    pub symbols: SymbolConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            first_player: FirstPlayer::default(),
            show_board: true,
            symbols: SymbolConfig::default(),
        }
    }
}

impl Config {
    /// Returns the default configuration file path.
    pub fn default_path() -> PathBuf {
        PathBuf::from("connect4.toml")
    }

    /// Loads the configuration at `path`, falling back to defaults if the
    /// file does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
    /// or [`ConfigError::ParseError`] if it contains invalid TOML.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }
}
