use std::path::Path;

use crate::error::InvalidConfiguration;
use crate::{MIN_BOARD_SIZE, MIN_MATCH_LENGTH};

/// Game configuration, loadable from TOML.
///
/// Both fields default to 3, i.e. standard tic-tac-toe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side length of the square board.
    pub board_size: usize,
    /// Consecutive marks required to win.
    pub match_length: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            board_size: MIN_BOARD_SIZE,
            match_length: MIN_MATCH_LENGTH,
        }
    }
}

impl GameConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: GameConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    ///
    /// Requires `board_size >= match_length >= 3`.
    pub fn validate(&self) -> Result<(), InvalidConfiguration> {
        if self.board_size < MIN_BOARD_SIZE {
            return Err(InvalidConfiguration::BoardTooSmall(self.board_size));
        }
        if self.match_length < MIN_MATCH_LENGTH {
            return Err(InvalidConfiguration::MatchTooShort(self.match_length));
        }
        if self.board_size < self.match_length {
            return Err(InvalidConfiguration::MatchExceedsBoard {
                board_size: self.board_size,
                match_length: self.match_length,
            });
        }
        Ok(())
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: std::path::PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(#[from] InvalidConfiguration),
}
