//! Configuration file loading for the replay tool.
//!
//! Settings are read from `gamechat.toml` in the current directory unless
//! another path is given on the command line.

use gamechat_core::{ChessKind, GameKind};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading the configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    /// The default promotion is not a piece a pawn can become.
    #[error("Invalid promotion piece: {0}")]
    InvalidPromotion(String),
}

/// Replay settings.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct GameChatConfig {
    /// Name shown for the Primary side.
    #[serde(default = "default_primary_name")]
    pub primary_name: String,
    /// Name shown for the Secondary side.
    #[serde(default = "default_secondary_name")]
    pub secondary_name: String,
    /// Game to play when none is given on the command line.
    #[serde(default)]
    pub game: GameKind,
    /// Print the board after every move.
    #[serde(default = "default_show_board")]
    pub show_board: bool,
    /// Piece a pawn becomes when the script does not say.
    #[serde(default = "default_promotion")]
    pub promotion: String,
}

fn default_primary_name() -> String {
    "Player 1".to_string()
}

fn default_secondary_name() -> String {
    "Player 2".to_string()
}

fn default_show_board() -> bool {
    true
}

fn default_promotion() -> String {
    "queen".to_string()
}

impl Default for GameChatConfig {
    fn default() -> Self {
        GameChatConfig {
            primary_name: default_primary_name(),
            secondary_name: default_secondary_name(),
            game: GameKind::default(),
            show_board: default_show_board(),
            promotion: default_promotion(),
        }
    }
}

impl GameChatConfig {
    /// Loads the configuration from `path`.
    ///
    /// A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
    /// [`ConfigError::ParseError`] if it is not valid TOML, or
    /// [`ConfigError::InvalidPromotion`] if the promotion piece is unknown.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let config: Self = if path.exists() {
            let content = std::fs::read_to_string(path)?;
            toml::from_str(&content)?
        } else {
            Self::default()
        };
        config.promotion_kind()?;
        Ok(config)
    }

    /// Returns the default configuration file path.
    pub fn default_path() -> PathBuf {
        PathBuf::from("gamechat.toml")
    }

    /// Returns the configured default promotion piece.
    pub fn promotion_kind(&self) -> Result<ChessKind, ConfigError> {
        ChessKind::from_name(&self.promotion)
            .filter(|kind| kind.is_promotion_choice())
            .ok_or_else(|| ConfigError::InvalidPromotion(self.promotion.clone()))
    }
}
