//! Which board game a session is playing.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a game name cannot be parsed.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown game '{0}': expected 'checkers' or 'chess'")]
pub struct ParseGameKindError(String);

/// The games the engine knows how to referee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameKind {
    #[default]
    Checkers,
    Chess,
}

impl GameKind {
    /// Both games in order.
    pub const ALL: [GameKind; 2] = [GameKind::Checkers, GameKind::Chess];

    /// Returns the lowercase name of the game.
    pub const fn name(self) -> &'static str {
        match self {
            GameKind::Checkers => "checkers",
            GameKind::Chess => "chess",
        }
    }
}

impl fmt::Display for GameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for GameKind {
    type Err = ParseGameKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "checkers" | "draughts" => Ok(GameKind::Checkers),
            "chess" => Ok(GameKind::Chess),
            _ => Err(ParseGameKindError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_names() {
        assert_eq!("checkers".parse::<GameKind>(), Ok(GameKind::Checkers));
        assert_eq!("Chess".parse::<GameKind>(), Ok(GameKind::Chess));
        assert!("go".parse::<GameKind>().is_err());
    }

    #[test]
    fn display_roundtrip() {
        for kind in GameKind::ALL {
            assert_eq!(kind.to_string().parse::<GameKind>(), Ok(kind));
        }
    }

    #[test]
    fn error_mentions_input() {
        let err = "go".parse::<GameKind>().unwrap_err();
        assert!(err.to_string().contains("go"));
    }
}
