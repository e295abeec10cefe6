//! Sparse board snapshots for storage and sync.
//!
//! A snapshot maps textual cell tags to single-character piece codes and
//! only lists occupied cells:
//!
//! ```json
//! { "game": "checkers", "turn": "primary", "cells": { "1": "m", "40": "M" }, "moved": 0 }
//! ```
//!
//! A turn caught between steps also records the piece that must keep
//! jumping (`jumping`) or the pawn waiting for its promotion (`promotion`),
//! both as cell indices.

use crate::board::CastlingRights;
use crate::session::Session;
use crate::Board;
use gamechat_core::{Cell, GameKind, Piece, Side};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Errors that can occur when restoring a snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("invalid cell tag '{0}'")]
    InvalidTag(String),

    #[error("invalid piece code '{code}' for {game} on cell {tag}")]
    InvalidPiece {
        game: GameKind,
        tag: String,
        code: char,
    },

    #[error("cell {0} does not match the pending jump or promotion")]
    InvalidPending(Cell),

    #[error("malformed snapshot: {0}")]
    Json(#[from] serde_json::Error),
}

/// The serialized form of a board and whose turn it is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub game: GameKind,
    pub turn: Side,
    /// Occupied cells only, keyed by cell tag.
    pub cells: BTreeMap<String, char>,
    /// Castling "has moved" flags.
    #[serde(default)]
    pub moved: u8,
    /// Cell of a checkers piece in the middle of a multi-jump.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jumping: Option<u8>,
    /// Cell of a pawn waiting for its promotion choice.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promotion: Option<u8>,
}

impl BoardSnapshot {
    /// Captures a board.
    pub fn capture(game: GameKind, board: &Board, turn: Side) -> Self {
        BoardSnapshot {
            game,
            turn,
            cells: board
                .pieces()
                .map(|(cell, piece)| (cell.tag(), piece.code()))
                .collect(),
            moved: board.castling().bits(),
            jumping: None,
            promotion: None,
        }
    }

    /// Rebuilds the board this snapshot describes.
    pub fn restore(&self) -> Result<Board, SnapshotError> {
        let mut board = Board::empty();
        for (tag, &code) in &self.cells {
            let cell = Cell::from_tag(tag).ok_or_else(|| SnapshotError::InvalidTag(tag.clone()))?;
            let piece = Piece::from_code(self.game, code).ok_or_else(|| {
                SnapshotError::InvalidPiece {
                    game: self.game,
                    tag: tag.clone(),
                    code,
                }
            })?;
            board.place(cell, piece);
        }
        *board.castling_mut() = CastlingRights::from_bits(self.moved);
        Ok(board)
    }

    /// Serializes the snapshot as JSON.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parses a snapshot from JSON.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Session {
    /// Captures the session's board, turn, and any half-finished turn.
    pub fn snapshot(&self) -> BoardSnapshot {
        let view = self.current_state();
        BoardSnapshot {
            jumping: view.jumping.map(Cell::index),
            promotion: view.promotion.map(Cell::index),
            ..BoardSnapshot::capture(view.game, view.board, view.turn)
        }
    }

    /// Restores a session from a snapshot, including a pending multi-jump
    /// or promotion.
    pub fn from_snapshot(snapshot: &BoardSnapshot) -> Result<Self, SnapshotError> {
        let board = snapshot.restore()?;
        let jumping = pending_cell(snapshot.jumping)?;
        let promotion = pending_cell(snapshot.promotion)?;

        let mut session = Session::from_board(snapshot.game, board, snapshot.turn);
        session
            .resume(jumping, promotion)
            .map_err(SnapshotError::InvalidPending)?;
        Ok(session)
    }
}

fn pending_cell(index: Option<u8>) -> Result<Option<Cell>, SnapshotError> {
    match index {
        Some(i) => Cell::from_index(i32::from(i))
            .map(Some)
            .ok_or_else(|| SnapshotError::InvalidTag(i.to_string())),
        None => Ok(None),
    }
}
