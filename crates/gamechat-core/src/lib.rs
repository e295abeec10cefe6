//! Core types for the GameChat board games.
//!
//! This crate provides the plain value types shared by the rule engines:
//! - [`Side`] for the two players
//! - [`Cell`] for the 64 board positions
//! - [`Piece`], [`PieceKind`], [`CheckersKind`], and [`ChessKind`]
//! - [`GameKind`] to pick a rule set

mod cell;
mod game_kind;
mod piece;
mod side;

pub use cell::Cell;
pub use game_kind::{GameKind, ParseGameKindError};
pub use piece::{CheckersKind, ChessKind, Piece, PieceKind};
pub use side::Side;
