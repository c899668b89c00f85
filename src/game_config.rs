//! Game configuration loaded from TOML.

use crate::games::tictactoe::{
    DEFAULT_DIMENSION, FirstTurn, Game, GameError, MarkAssignment, Player, Side,
};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for a series of games against the engine.
///
/// ```toml
/// dimension = 3
/// human_mark = "X"
/// first_turn = "alternate"
/// level = 2
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board side length.
    #[serde(default = "default_dimension")]
    dimension: usize,

    /// Mark played by the human; the engine takes the other one.
    #[serde(default = "default_human_mark")]
    human_mark: Player,

    /// Which side opens each game.
    #[serde(default)]
    first_turn: FirstTurn,

    /// Opponent level. When set, its parity picks the first opener:
    /// even levels let the human open, odd levels the engine.
    #[serde(default)]
    level: Option<u32>,
}

fn default_dimension() -> usize {
    DEFAULT_DIMENSION
}

fn default_human_mark() -> Player {
    Player::X
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            dimension: default_dimension(),
            human_mark: default_human_mark(),
            first_turn: FirstTurn::default(),
            level: None,
        }
    }
}

impl GameConfig {
    /// Creates a configuration.
    pub fn new(dimension: usize, human_mark: Player, first_turn: FirstTurn, level: Option<u32>) -> Self {
        Self {
            dimension,
            human_mark,
            first_turn,
            level,
        }
    }

    /// Loads configuration from TOML file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(dimension = config.dimension, human_mark = %config.human_mark, "Config loaded successfully");
        Ok(config)
    }

    /// Mark assignment implied by `human_mark`.
    pub fn marks(&self) -> MarkAssignment {
        MarkAssignment::against(self.human_mark)
    }

    /// Side that opens the first game.
    pub fn opener(&self) -> Side {
        match (self.level, self.first_turn) {
            (Some(level), _) if level % 2 == 0 => Side::Human,
            (Some(_), _) => Side::Automated,
            (None, FirstTurn::Automated) => Side::Automated,
            (None, _) => Side::Human,
        }
    }

    /// Starts the first game described by this configuration.
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidConfiguration` for a zero or oversized dimension.
    #[instrument(skip(self))]
    pub fn start(&self) -> Result<Game, GameError> {
        Game::with_opener(self.dimension, self.marks(), self.opener(), self.first_turn)
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
