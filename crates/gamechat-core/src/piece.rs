//! Piece representation for both games.

use crate::{GameKind, Side};
use serde::{Deserialize, Serialize};

/// The two kinds of checkers piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum CheckersKind {
    Man = 0,
    King = 1,
}

impl CheckersKind {
    const fn code(self) -> char {
        match self {
            CheckersKind::Man => 'm',
            CheckersKind::King => 'k',
        }
    }

    const fn from_code(c: char) -> Option<Self> {
        match c {
            'm' => Some(CheckersKind::Man),
            'k' => Some(CheckersKind::King),
            _ => None,
        }
    }
}

/// The six kinds of chess piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum ChessKind {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}

impl ChessKind {
    /// Kinds a pawn may promote to.
    pub const PROMOTIONS: [ChessKind; 4] = [
        ChessKind::Queen,
        ChessKind::Rook,
        ChessKind::Bishop,
        ChessKind::Knight,
    ];

    /// Returns true if a pawn may promote to this kind.
    #[inline]
    pub const fn is_promotion_choice(self) -> bool {
        matches!(
            self,
            ChessKind::Queen | ChessKind::Rook | ChessKind::Bishop | ChessKind::Knight
        )
    }

    const fn code(self) -> char {
        match self {
            ChessKind::Pawn => 'p',
            ChessKind::Knight => 'n',
            ChessKind::Bishop => 'b',
            ChessKind::Rook => 'r',
            ChessKind::Queen => 'q',
            ChessKind::King => 'k',
        }
    }

    const fn from_code(c: char) -> Option<Self> {
        match c {
            'p' => Some(ChessKind::Pawn),
            'n' => Some(ChessKind::Knight),
            'b' => Some(ChessKind::Bishop),
            'r' => Some(ChessKind::Rook),
            'q' => Some(ChessKind::Queen),
            'k' => Some(ChessKind::King),
            _ => None,
        }
    }

    /// Parses a user-facing name such as "queen" or "q".
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "pawn" | "p" => Some(ChessKind::Pawn),
            "knight" | "n" => Some(ChessKind::Knight),
            "bishop" | "b" => Some(ChessKind::Bishop),
            "rook" | "r" => Some(ChessKind::Rook),
            "queen" | "q" => Some(ChessKind::Queen),
            "king" | "k" => Some(ChessKind::King),
            _ => None,
        }
    }
}

impl std::fmt::Display for ChessKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ChessKind::Pawn => "Pawn",
            ChessKind::Knight => "Knight",
            ChessKind::Bishop => "Bishop",
            ChessKind::Rook => "Rook",
            ChessKind::Queen => "Queen",
            ChessKind::King => "King",
        };
        write!(f, "{}", name)
    }
}

/// A piece kind tagged with the game it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Checkers(CheckersKind),
    Chess(ChessKind),
}

impl PieceKind {
    /// Returns the game this kind belongs to.
    #[inline]
    pub const fn game(self) -> GameKind {
        match self {
            PieceKind::Checkers(_) => GameKind::Checkers,
            PieceKind::Chess(_) => GameKind::Chess,
        }
    }

    /// Returns true for the piece whose loss ends a chess game.
    #[inline]
    pub const fn is_chess_king(self) -> bool {
        matches!(self, PieceKind::Chess(ChessKind::King))
    }
}

/// A piece on the board: a kind and the side that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub side: Side,
}

impl Piece {
    /// Creates a piece.
    #[inline]
    pub const fn new(kind: PieceKind, side: Side) -> Self {
        Piece { kind, side }
    }

    /// Creates a checkers piece.
    #[inline]
    pub const fn checkers(kind: CheckersKind, side: Side) -> Self {
        Piece::new(PieceKind::Checkers(kind), side)
    }

    /// Creates a chess piece.
    #[inline]
    pub const fn chess(kind: ChessKind, side: Side) -> Self {
        Piece::new(PieceKind::Chess(kind), side)
    }

    /// Returns the single-character code used by the sparse board format.
    ///
    /// Primary pieces are uppercase, Secondary pieces lowercase.
    pub const fn code(self) -> char {
        let c = match self.kind {
            PieceKind::Checkers(k) => k.code(),
            PieceKind::Chess(k) => k.code(),
        };
        match self.side {
            Side::Primary => c.to_ascii_uppercase(),
            Side::Secondary => c,
        }
    }

    /// Parses a piece code for the given game.
    pub const fn from_code(game: GameKind, c: char) -> Option<Self> {
        let side = if c.is_ascii_uppercase() {
            Side::Primary
        } else {
            Side::Secondary
        };
        let lower = c.to_ascii_lowercase();
        let kind = match game {
            GameKind::Checkers => match CheckersKind::from_code(lower) {
                Some(k) => PieceKind::Checkers(k),
                None => return None,
            },
            GameKind::Chess => match ChessKind::from_code(lower) {
                Some(k) => PieceKind::Chess(k),
                None => return None,
            },
        };
        Some(Piece { kind, side })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn piece_codes() {
        assert_eq!(Piece::checkers(CheckersKind::Man, Side::Primary).code(), 'M');
        assert_eq!(Piece::checkers(CheckersKind::King, Side::Secondary).code(), 'k');
        assert_eq!(Piece::chess(ChessKind::Knight, Side::Secondary).code(), 'n');
        assert_eq!(Piece::chess(ChessKind::Queen, Side::Primary).code(), 'Q');
    }

    #[test]
    fn piece_from_code_depends_on_game() {
        assert_eq!(
            Piece::from_code(GameKind::Checkers, 'K'),
            Some(Piece::checkers(CheckersKind::King, Side::Primary))
        );
        assert_eq!(
            Piece::from_code(GameKind::Chess, 'K'),
            Some(Piece::chess(ChessKind::King, Side::Primary))
        );
        assert_eq!(Piece::from_code(GameKind::Checkers, 'q'), None);
        assert_eq!(Piece::from_code(GameKind::Chess, 'm'), None);
        assert_eq!(Piece::from_code(GameKind::Chess, 'x'), None);
    }

    #[test]
    fn promotion_choices() {
        assert!(ChessKind::Queen.is_promotion_choice());
        assert!(ChessKind::Knight.is_promotion_choice());
        assert!(!ChessKind::Pawn.is_promotion_choice());
        assert!(!ChessKind::King.is_promotion_choice());
        assert!(ChessKind::PROMOTIONS.iter().all(|k| k.is_promotion_choice()));
    }

    #[test]
    fn kind_from_name() {
        assert_eq!(ChessKind::from_name("Queen"), Some(ChessKind::Queen));
        assert_eq!(ChessKind::from_name(" n "), Some(ChessKind::Knight));
        assert_eq!(ChessKind::from_name("dragon"), None);
    }
}
