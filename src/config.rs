//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use noughts_core::PlayerKind;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Who sits at each mark and how the session behaves.
///
/// Every field is optional in the file; missing ones take the defaults
/// below. Command-line flags override file values.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Player seated as X (moves first).
    #[serde(default = "default_player_x")]
    player_x: PlayerKind,

    /// Player seated as O.
    #[serde(default = "default_player_o")]
    player_o: PlayerKind,

    /// Seed for random players; entropy when absent.
    #[serde(default)]
    seed: Option<u64>,

    /// Tracing filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Consecutive invalid proposals tolerated before a turn is abandoned.
    #[serde(default)]
    max_rejections: Option<usize>,

    /// Number of games played by `series`.
    #[serde(default = "default_games")]
    games: usize,
}

fn default_player_x() -> PlayerKind {
    PlayerKind::Human
}

fn default_player_o() -> PlayerKind {
    PlayerKind::Minimax
}

fn default_log_filter() -> String {
    "warn".to_string()
}

fn default_games() -> usize {
    10
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_x: default_player_x(),
            player_o: default_player_o(),
            seed: None,
            log_filter: default_log_filter(),
            max_rejections: None,
            games: default_games(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(player_x = %config.player_x, player_o = %config.player_o, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Serializes the configuration back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string(self).map_err(|e| ConfigError::new(format!("Failed to write config: {}", e)))
    }

    /// Replaces the X player when `kind` is given.
    pub fn with_player_x(mut self, kind: Option<PlayerKind>) -> Self {
        if let Some(kind) = kind {
            self.player_x = kind;
        }
        self
    }

    /// Replaces the O player when `kind` is given.
    pub fn with_player_o(mut self, kind: Option<PlayerKind>) -> Self {
        if let Some(kind) = kind {
            self.player_o = kind;
        }
        self
    }

    /// Replaces the seed when one is given.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    /// Replaces the number of series games when one is given.
    pub fn with_games(mut self, games: Option<usize>) -> Self {
        if let Some(games) = games {
            self.games = games;
        }
        self
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
