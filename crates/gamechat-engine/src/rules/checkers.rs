//! Checkers rules.

use super::{Execution, RuleSet};
use crate::{Board, CellSet};
use gamechat_core::{Cell, CheckersKind, GameKind, Piece, PieceKind, Side};

const DIAGONALS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Checkers on the dark squares of an 8x8 board.
///
/// - Men step diagonally forward onto an empty cell.
/// - Kings step diagonally in all four directions.
/// - Any piece may jump an adjacent enemy in any diagonal direction onto the
///   empty cell beyond it, removing the enemy.
/// - After a jump, the same piece keeps jumping while it can.
/// - A man reaching the far row is crowned.
/// - A side with no pieces loses; a side with no legal move ties the game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Checkers;

impl Checkers {
    /// Returns only the capturing jumps available to the piece on `from`.
    pub fn jump_destinations(&self, board: &Board, from: Cell) -> CellSet {
        let mut jumps = CellSet::EMPTY;
        let Some(piece) = board.get(from) else {
            return jumps;
        };
        if !matches!(piece.kind, PieceKind::Checkers(_)) {
            return jumps;
        }

        for (dr, dc) in DIAGONALS {
            let (Some(over), Some(landing)) = (from.offset(dr, dc), from.offset(2 * dr, 2 * dc))
            else {
                continue;
            };
            if board.is_side(over, piece.side.opposite()) && board.is_empty(landing) {
                jumps.insert(landing);
            }
        }
        jumps
    }

    fn step_directions(kind: CheckersKind, side: Side) -> &'static [(i8, i8)] {
        match (kind, side) {
            (CheckersKind::King, _) => &DIAGONALS,
            (CheckersKind::Man, Side::Primary) => &DIAGONALS[..2],
            (CheckersKind::Man, Side::Secondary) => &DIAGONALS[2..],
        }
    }
}

/// Returns true if a move between the two cells jumps over a piece.
#[inline]
fn is_jump(from: Cell, to: Cell) -> bool {
    from.row().abs_diff(to.row()) == 2
}

impl RuleSet for Checkers {
    fn kind(&self) -> GameKind {
        GameKind::Checkers
    }

    fn initial_board(&self) -> Board {
        let mut board = Board::empty();
        for cell in Cell::all().filter(|c| c.is_dark()) {
            let side = match cell.row() {
                0..=2 => Side::Secondary,
                5..=7 => Side::Primary,
                _ => continue,
            };
            board.place(cell, Piece::checkers(CheckersKind::Man, side));
        }
        board
    }

    fn starting_side(&self) -> Side {
        Side::Primary
    }

    fn legal_destinations(&self, board: &Board, from: Cell) -> CellSet {
        let Some(Piece {
            kind: PieceKind::Checkers(kind),
            side,
        }) = board.get(from)
        else {
            return CellSet::EMPTY;
        };

        let mut destinations = self.jump_destinations(board, from);
        for &(dr, dc) in Self::step_directions(kind, side) {
            if let Some(target) = from.offset(dr, dc) {
                if board.is_empty(target) {
                    destinations.insert(target);
                }
            }
        }
        destinations
    }

    fn execute(&self, board: &mut Board, from: Cell, to: Cell) -> Execution {
        let mut execution = Execution::default();

        if is_jump(from, to) {
            let d_row = (to.row() as i8 - from.row() as i8) / 2;
            let d_col = (to.col() as i8 - from.col() as i8) / 2;
            if let Some(over) = from.offset(d_row, d_col) {
                execution.captured = board.remove(over).map(|p| (over, p));
            }
        }

        board.relocate(from, to);

        if let Some(piece) = board.get(to) {
            if piece.kind == PieceKind::Checkers(CheckersKind::Man)
                && to.row() == piece.side.far_row()
            {
                board.place(to, Piece::checkers(CheckersKind::King, piece.side));
                execution.crowned = true;
            }
        }

        execution
    }

    fn continuation(&self, board: &Board, at: Cell, execution: &Execution) -> CellSet {
        if execution.captured.is_none() {
            return CellSet::EMPTY;
        }
        self.jump_destinations(board, at)
    }

    fn winner(&self, board: &Board) -> Option<Side> {
        Side::BOTH
            .into_iter()
            .find(|&side| board.pieces_of(side).next().is_none())
            .map(Side::opposite)
    }

    fn is_exhausted(&self, board: &Board, side_to_move: Side) -> bool {
        !self.has_any_move(board, side_to_move)
    }
}
