//! Rule set abstraction for the supported games.
//!
//! This module provides the [`RuleSet`] trait which abstracts over the games
//! the engine referees. The [`Session`](crate::Session) is rule-agnostic: it
//! owns turn order and terminal state, and delegates piece movement,
//! captures, and win conditions to the active rule set.

mod checkers;
mod chess;

pub use checkers::Checkers;
pub use chess::Chess;

use crate::board::RookSide;
use crate::{Board, CellSet};
use gamechat_core::{Cell, GameKind, Piece, Side};

/// Result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameResult {
    PrimaryWins,
    SecondaryWins,
    /// Neither side won.
    Tie,
}

impl GameResult {
    /// Returns the result in which `side` wins.
    #[inline]
    pub const fn win_for(side: Side) -> Self {
        match side {
            Side::Primary => GameResult::PrimaryWins,
            Side::Secondary => GameResult::SecondaryWins,
        }
    }

    /// Returns the winning side, or `None` for a tie.
    #[inline]
    pub const fn winner(self) -> Option<Side> {
        match self {
            GameResult::PrimaryWins => Some(Side::Primary),
            GameResult::SecondaryWins => Some(Side::Secondary),
            GameResult::Tie => None,
        }
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::PrimaryWins => write!(f, "Primary wins"),
            GameResult::SecondaryWins => write!(f, "Secondary wins"),
            GameResult::Tie => write!(f, "Tie"),
        }
    }
}

/// What happened on the board when a move was executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Execution {
    /// The captured piece and the cell it was taken from.
    pub captured: Option<(Cell, Piece)>,
    /// Set when the move was a castle; the rook has already been moved.
    pub castled: Option<RookSide>,
    /// A checkers man was crowned.
    pub crowned: bool,
    /// A chess pawn reached the far row and waits for a promotion choice.
    pub promotion_pending: bool,
}

/// Trait implemented by each game's rules.
///
/// Move generation is a pure query over a [`Board`]. Execution assumes the
/// move has already been validated against [`legal_destinations`].
///
/// [`legal_destinations`]: RuleSet::legal_destinations
pub trait RuleSet {
    /// Returns which game these rules referee.
    fn kind(&self) -> GameKind;

    /// Returns the board a new game starts from.
    fn initial_board(&self) -> Board;

    /// Returns the side that moves first.
    fn starting_side(&self) -> Side;

    /// Returns every cell the piece on `from` may move to.
    ///
    /// An empty cell, or a piece from another game, yields the empty set.
    fn legal_destinations(&self, board: &Board, from: Cell) -> CellSet;

    /// Applies a validated move to the board.
    fn execute(&self, board: &mut Board, from: Cell, to: Cell) -> Execution;

    /// Destinations the piece now on `at` must continue to before the turn
    /// passes. Empty for games without multi-step moves.
    fn continuation(&self, _board: &Board, _at: Cell, _execution: &Execution) -> CellSet {
        CellSet::EMPTY
    }

    /// Returns the winner if one side has been eliminated.
    fn winner(&self, board: &Board) -> Option<Side>;

    /// Returns true if `side_to_move` being stuck ends the game in a tie.
    fn is_exhausted(&self, _board: &Board, _side_to_move: Side) -> bool {
        false
    }

    /// Returns true if any piece of `side` has at least one legal destination.
    fn has_any_move(&self, board: &Board, side: Side) -> bool {
        board
            .pieces_of(side)
            .any(|(cell, _)| !self.legal_destinations(board, cell).is_empty())
    }
}

/// One of the supported rule sets, selected by [`GameKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Engine {
    Checkers(Checkers),
    Chess(Chess),
}

impl Engine {
    /// Returns the rule set for a game.
    pub const fn for_game(kind: GameKind) -> Self {
        match kind {
            GameKind::Checkers => Engine::Checkers(Checkers),
            GameKind::Chess => Engine::Chess(Chess),
        }
    }

    fn rules(&self) -> &dyn RuleSet {
        match self {
            Engine::Checkers(rules) => rules,
            Engine::Chess(rules) => rules,
        }
    }
}

impl RuleSet for Engine {
    fn kind(&self) -> GameKind {
        self.rules().kind()
    }

    fn initial_board(&self) -> Board {
        self.rules().initial_board()
    }

    fn starting_side(&self) -> Side {
        self.rules().starting_side()
    }

    fn legal_destinations(&self, board: &Board, from: Cell) -> CellSet {
        self.rules().legal_destinations(board, from)
    }

    fn execute(&self, board: &mut Board, from: Cell, to: Cell) -> Execution {
        self.rules().execute(board, from, to)
    }

    fn continuation(&self, board: &Board, at: Cell, execution: &Execution) -> CellSet {
        self.rules().continuation(board, at, execution)
    }

    fn winner(&self, board: &Board) -> Option<Side> {
        self.rules().winner(board)
    }

    fn is_exhausted(&self, board: &Board, side_to_move: Side) -> bool {
        self.rules().is_exhausted(board, side_to_move)
    }
}

/// Returns the legal destinations for a raw cell index.
///
/// Indices outside 0-63 yield the empty set.
pub fn legal_destinations(rules: &impl RuleSet, board: &Board, index: i32) -> CellSet {
    match Cell::from_index(index) {
        Some(cell) => rules.legal_destinations(board, cell),
        None => CellSet::EMPTY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_for_game() {
        assert_eq!(Engine::for_game(GameKind::Checkers).kind(), GameKind::Checkers);
        assert_eq!(Engine::for_game(GameKind::Chess).kind(), GameKind::Chess);
    }

    #[test]
    fn starting_sides_differ() {
        assert_eq!(Engine::for_game(GameKind::Checkers).starting_side(), Side::Primary);
        assert_eq!(Engine::for_game(GameKind::Chess).starting_side(), Side::Secondary);
    }

    #[test]
    fn out_of_range_index_has_no_destinations() {
        let engine = Engine::for_game(GameKind::Chess);
        let board = engine.initial_board();
        assert!(legal_destinations(&engine, &board, -1).is_empty());
        assert!(legal_destinations(&engine, &board, 64).is_empty());
    }

    #[test]
    fn game_result_winner() {
        assert_eq!(GameResult::win_for(Side::Primary).winner(), Some(Side::Primary));
        assert_eq!(GameResult::win_for(Side::Secondary), GameResult::SecondaryWins);
        assert_eq!(GameResult::Tie.winner(), None);
    }
}
