//! Rule engines for the GameChat board games.
//!
//! This crate provides:
//! - [`Board`] - 64-cell board with selection and highlight bookkeeping
//! - [`CellSet`] - destination sets packed into a `u64`
//! - [`RuleSet`] - trait implemented by [`Checkers`] and [`Chess`]
//! - [`Session`] - turn order, multi-jumps, promotions, and terminal state
//! - [`BoardSnapshot`] - sparse serialized form of a board
//!
//! The engine never touches a UI or a database. Hosts feed it cell indices
//! and render from [`Session::current_state`].
//!
//! # Example
//!
//! ```
//! use gamechat_core::{Cell, GameKind, Side};
//! use gamechat_engine::new_game;
//!
//! let mut session = new_game(GameKind::Checkers);
//! let from = Cell::new(5, 0).unwrap();
//! let destinations = session.legal_destinations(from);
//! assert_eq!(destinations.len(), 1);
//!
//! let to = destinations.into_iter().next().unwrap();
//! let outcome = session.apply_move(from, to);
//! assert!(outcome.accepted);
//! assert_eq!(session.turn(), Side::Secondary);
//! ```

mod board;
mod cell_set;
mod error;
pub mod rules;
mod session;
mod snapshot;

pub use board::{Board, CastlingRights, RookSide};
pub use cell_set::{CellSet, CellSetIter};
pub use error::{MoveError, PromotionError};
pub use rules::{legal_destinations, Checkers, Chess, Engine, Execution, GameResult, RuleSet};
pub use session::{
    new_game, AppliedMove, MoveOutcome, Player, Session, SessionState, SessionView, TapOutcome,
};
pub use snapshot::{BoardSnapshot, SnapshotError};
