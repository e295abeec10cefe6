//! Error types returned by session operations.

use gamechat_core::{Cell, ChessKind, Side};
use thiserror::Error;

/// Reasons a move is rejected. A rejected move never changes the session.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum MoveError {
    #[error("the game is over; start a new game to keep playing")]
    GameOver,

    #[error("no piece on cell {0}")]
    EmptySource(Cell),

    #[error("it is {turn}'s turn")]
    NotYourTurn { turn: Side },

    #[error("cell {to} is not a legal destination from {from}")]
    IllegalDestination { from: Cell, to: Cell },

    #[error("the piece on cell {cell} must keep jumping")]
    MustContinueJump { cell: Cell },

    #[error("the pawn on cell {cell} is waiting for a promotion choice")]
    PromotionPending { cell: Cell },
}

/// Errors from completing a deferred pawn promotion.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum PromotionError {
    #[error("no promotion is pending")]
    NothingPending,

    #[error("promotion is pending on cell {expected}, not {got}")]
    WrongCell { expected: Cell, got: Cell },

    #[error("a pawn cannot promote to {0}")]
    InvalidKind(ChessKind),
}
