//! Host configuration loaded from TOML.
//!
//! ```toml
//! share_base_url = "https://example.com/ultimate/"
//! replay_interval_ms = 500
//! x_glyph = "X"
//! o_glyph = "O"
//! special_x_glyph = "🐱"
//! special_o_glyph = "🐶"
//! ```
//!
//! Every key is optional.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};
use ultimate_tictactoe::Player;

/// Settings for the terminal host.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct CliConfig {
    /// Page that share links point at.
    #[serde(default = "default_share_base_url")]
    share_base_url: String,

    /// Delay between replay frames.
    #[serde(default = "default_replay_interval_ms")]
    replay_interval_ms: u64,

    /// Glyph for X marks.
    #[serde(default = "default_x_glyph")]
    x_glyph: String,

    /// Glyph for O marks.
    #[serde(default = "default_o_glyph")]
    o_glyph: String,

    /// Glyph for X marks while special icons are on.
    #[serde(default = "default_special_x_glyph")]
    special_x_glyph: String,

    /// Glyph for O marks while special icons are on.
    #[serde(default = "default_special_o_glyph")]
    special_o_glyph: String,
}

#[instrument]
fn default_share_base_url() -> String {
    "http://localhost/ultimate-tictactoe/".to_string()
}

#[instrument]
fn default_replay_interval_ms() -> u64 {
    700
}

#[instrument]
fn default_x_glyph() -> String {
    "X".to_string()
}

#[instrument]
fn default_o_glyph() -> String {
    "O".to_string()
}

#[instrument]
fn default_special_x_glyph() -> String {
    "🐱".to_string()
}

#[instrument]
fn default_special_o_glyph() -> String {
    "🐶".to_string()
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            share_base_url: default_share_base_url(),
            replay_interval_ms: default_replay_interval_ms(),
            x_glyph: default_x_glyph(),
            o_glyph: default_o_glyph(),
            special_x_glyph: default_special_x_glyph(),
            special_o_glyph: default_special_o_glyph(),
        }
    }
}

impl CliConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(share_base_url = %config.share_base_url, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Like [`from_file`](Self::from_file), but a missing file yields the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if !path.as_ref().exists() {
            debug!("No config file, using defaults");
            return Ok(Self::default());
        }
        Self::from_file(path)
    }

    /// Returns a copy with the command-line overrides applied.
    pub fn with_overrides(
        mut self,
        share_base_url: Option<String>,
        replay_interval_ms: Option<u64>,
    ) -> Self {
        if let Some(url) = share_base_url {
            self.share_base_url = url;
        }
        if let Some(interval) = replay_interval_ms {
            self.replay_interval_ms = interval;
        }
        self
    }

    /// Glyph drawn for `player`'s marks.
    pub fn glyph(&self, player: Player, special_icons: bool) -> &str {
        match (player, special_icons) {
            (Player::X, false) => &self.x_glyph,
            (Player::O, false) => &self.o_glyph,
            (Player::X, true) => &self.special_x_glyph,
            (Player::O, true) => &self.special_o_glyph,
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
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
