//! Chess rules.

use super::{Execution, RuleSet};
use crate::board::RookSide;
use crate::{Board, CellSet};
use gamechat_core::{Cell, ChessKind, GameKind, Piece, PieceKind, Side};

const ORTHOGONALS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
const DIAGONALS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];
const BACK_RANK: [ChessKind; 8] = [
    ChessKind::Rook,
    ChessKind::Knight,
    ChessKind::Bishop,
    ChessKind::Queen,
    ChessKind::King,
    ChessKind::Bishop,
    ChessKind::Knight,
    ChessKind::Rook,
];
const KING_COL: u8 = 4;

/// Chess as played in GameChat.
///
/// Standard piece movement, castling, and pawn promotion. There is no check
/// detection: a game ends when one side has no king left. En passant is not
/// part of these rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Chess;

impl Chess {
    /// Row a side's pawns start on.
    #[inline]
    const fn pawn_row(side: Side) -> u8 {
        match side {
            Side::Primary => 6,
            Side::Secondary => 1,
        }
    }

    /// Cell the side's king starts on.
    #[inline]
    fn king_home(side: Side) -> Option<Cell> {
        Cell::new(side.home_row(), KING_COL)
    }

    fn add_if_open(board: &Board, side: Side, target: Option<Cell>, out: &mut CellSet) {
        if let Some(target) = target {
            if !board.is_side(target, side) {
                out.insert(target);
            }
        }
    }

    fn slide(board: &Board, from: Cell, side: Side, directions: &[(i8, i8)], out: &mut CellSet) {
        for &(dr, dc) in directions {
            let mut current = from;
            while let Some(next) = current.offset(dr, dc) {
                match board.get(next) {
                    None => out.insert(next),
                    Some(p) => {
                        if p.side != side {
                            out.insert(next);
                        }
                        break;
                    }
                }
                current = next;
            }
        }
    }

    fn pawn_moves(board: &Board, from: Cell, side: Side, out: &mut CellSet) {
        let forward = side.forward();
        if let Some(one) = from.offset(forward, 0) {
            if board.is_empty(one) {
                out.insert(one);
                if from.row() == Self::pawn_row(side) {
                    if let Some(two) = from.offset(2 * forward, 0) {
                        if board.is_empty(two) {
                            out.insert(two);
                        }
                    }
                }
            }
        }
        for dc in [-1, 1] {
            if let Some(target) = from.offset(forward, dc) {
                if board.is_side(target, side.opposite()) {
                    out.insert(target);
                }
            }
        }
    }

    fn castle_targets(board: &Board, from: Cell, side: Side, out: &mut CellSet) {
        if Some(from) != Self::king_home(side) {
            return;
        }
        let row = side.home_row();
        let own_rook = Some(Piece::chess(ChessKind::Rook, side));

        for rook_side in RookSide::BOTH {
            if !board.castling().can_castle(side, rook_side) {
                continue;
            }
            let rook_col = rook_side.rook_col();
            if Cell::new(row, rook_col).and_then(|c| board.get(c)) != own_rook {
                continue;
            }
            let (lo, hi) = if rook_col < KING_COL {
                (rook_col + 1, KING_COL)
            } else {
                (KING_COL + 1, rook_col)
            };
            let path_clear = (lo..hi)
                .filter_map(|col| Cell::new(row, col))
                .all(|c| board.is_empty(c));
            if path_clear {
                if let Some(target) = Cell::new(row, rook_side.king_target_col()) {
                    out.insert(target);
                }
            }
        }
    }

    /// Returns which castle a king move performs, if any.
    fn castle_side(piece: Piece, from: Cell, to: Cell) -> Option<RookSide> {
        if piece.kind != PieceKind::Chess(ChessKind::King)
            || Some(from) != Self::king_home(piece.side)
            || from.row() != to.row()
        {
            return None;
        }
        RookSide::BOTH
            .into_iter()
            .find(|rs| to.col() == rs.king_target_col())
    }

    /// Returns the rook that starts on `cell`, if `cell` is a rook home.
    fn rook_home(cell: Cell) -> Option<(Side, RookSide)> {
        let side = Side::BOTH
            .into_iter()
            .find(|s| s.home_row() == cell.row())?;
        let rook = RookSide::BOTH
            .into_iter()
            .find(|rs| rs.rook_col() == cell.col())?;
        Some((side, rook))
    }
}

impl RuleSet for Chess {
    fn kind(&self) -> GameKind {
        GameKind::Chess
    }

    fn initial_board(&self) -> Board {
        let mut board = Board::empty();
        for side in Side::BOTH {
            for (col, kind) in (0u8..).zip(BACK_RANK) {
                if let Some(cell) = Cell::new(side.home_row(), col) {
                    board.place(cell, Piece::chess(kind, side));
                }
                if let Some(cell) = Cell::new(Self::pawn_row(side), col) {
                    board.place(cell, Piece::chess(ChessKind::Pawn, side));
                }
            }
        }
        board
    }

    fn starting_side(&self) -> Side {
        Side::Secondary
    }

    fn legal_destinations(&self, board: &Board, from: Cell) -> CellSet {
        let Some(Piece {
            kind: PieceKind::Chess(kind),
            side,
        }) = board.get(from)
        else {
            return CellSet::EMPTY;
        };

        let mut out = CellSet::EMPTY;
        match kind {
            ChessKind::Pawn => Self::pawn_moves(board, from, side, &mut out),
            ChessKind::Knight => {
                for (dr, dc) in KNIGHT_JUMPS {
                    Self::add_if_open(board, side, from.offset(dr, dc), &mut out);
                }
            }
            ChessKind::Bishop => Self::slide(board, from, side, &DIAGONALS, &mut out),
            ChessKind::Rook => Self::slide(board, from, side, &ORTHOGONALS, &mut out),
            ChessKind::Queen => {
                Self::slide(board, from, side, &DIAGONALS, &mut out);
                Self::slide(board, from, side, &ORTHOGONALS, &mut out);
            }
            ChessKind::King => {
                for (dr, dc) in DIAGONALS.into_iter().chain(ORTHOGONALS) {
                    Self::add_if_open(board, side, from.offset(dr, dc), &mut out);
                }
                Self::castle_targets(board, from, side, &mut out);
            }
        }
        out
    }

    fn execute(&self, board: &mut Board, from: Cell, to: Cell) -> Execution {
        let mut execution = Execution::default();
        let Some(piece) = board.get(from) else {
            return execution;
        };

        execution.captured = board.relocate(from, to).map(|p| (to, p));

        match piece.kind {
            PieceKind::Chess(ChessKind::King) => {
                if let Some(rook_side) = Self::castle_side(piece, from, to) {
                    let row = from.row();
                    if let (Some(rook_from), Some(rook_to)) = (
                        Cell::new(row, rook_side.rook_col()),
                        Cell::new(row, rook_side.rook_target_col()),
                    ) {
                        board.relocate(rook_from, rook_to);
                    }
                    board.castling_mut().mark_rook_moved(piece.side, rook_side);
                    execution.castled = Some(rook_side);
                }
                board.castling_mut().mark_king_moved(piece.side);
            }
            PieceKind::Chess(ChessKind::Rook) => {
                if let Some((side, rook)) = Self::rook_home(from) {
                    if side == piece.side {
                        board.castling_mut().mark_rook_moved(side, rook);
                    }
                }
            }
            PieceKind::Chess(ChessKind::Pawn) => {
                execution.promotion_pending = to.row() == piece.side.far_row();
            }
            _ => {}
        }

        // A rook captured on its home cell can no longer castle.
        if let Some((_, captured)) = execution.captured {
            if captured.kind == PieceKind::Chess(ChessKind::Rook) {
                if let Some((side, rook)) = Self::rook_home(to) {
                    if side == captured.side {
                        board.castling_mut().mark_rook_moved(side, rook);
                    }
                }
            }
        }

        execution
    }

    fn winner(&self, board: &Board) -> Option<Side> {
        Side::BOTH
            .into_iter()
            .find(|&side| !board.pieces_of(side).any(|(_, p)| p.kind.is_chess_king()))
            .map(Side::opposite)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(row: u8, col: u8) -> Cell {
        Cell::new(row, col).unwrap()
    }

    fn piece(kind: ChessKind, side: Side) -> Piece {
        Piece::chess(kind, side)
    }

    fn castling_board() -> Board {
        let mut board = Board::empty();
        board.place(cell(7, 4), piece(ChessKind::King, Side::Primary));
        board.place(cell(7, 0), piece(ChessKind::Rook, Side::Primary));
        board.place(cell(7, 7), piece(ChessKind::Rook, Side::Primary));
        board.place(cell(0, 4), piece(ChessKind::King, Side::Secondary));
        board
    }

    #[test]
    fn initial_board_layout() {
        let board = Chess.initial_board();
        assert_eq!(board.pieces().count(), 32);
        assert_eq!(board.get(cell(7, 4)), Some(piece(ChessKind::King, Side::Primary)));
        assert_eq!(board.get(cell(0, 3)), Some(piece(ChessKind::Queen, Side::Secondary)));
        assert_eq!(board.get(cell(6, 0)), Some(piece(ChessKind::Pawn, Side::Primary)));
        assert_eq!(board.get(cell(1, 7)), Some(piece(ChessKind::Pawn, Side::Secondary)));
    }

    #[test]
    fn starting_moves_count() {
        let board = Chess.initial_board();
        let total: usize = board
            .pieces_of(Side::Primary)
            .map(|(c, _)| Chess.legal_destinations(&board, c).len())
            .sum();
        assert_eq!(total, 20);
    }

    #[test]
    fn pawn_double_step_needs_clear_path() {
        let mut board = Board::empty();
        board.place(cell(6, 3), piece(ChessKind::Pawn, Side::Primary));
        board.place(cell(5, 3), piece(ChessKind::Knight, Side::Secondary));
        assert!(Chess.legal_destinations(&board, cell(6, 3)).is_empty());
    }

    #[test]
    fn pawn_captures_diagonally_only() {
        let mut board = Board::empty();
        board.place(cell(4, 4), piece(ChessKind::Pawn, Side::Secondary));
        board.place(cell(5, 5), piece(ChessKind::Rook, Side::Primary));
        board.place(cell(5, 3), piece(ChessKind::Rook, Side::Secondary));
        board.place(cell(5, 4), piece(ChessKind::Rook, Side::Primary));
        let dests = Chess.legal_destinations(&board, cell(4, 4));
        assert_eq!(dests.into_iter().collect::<Vec<_>>(), vec![cell(5, 5)]);
    }

    #[test]
    fn bishop_slides_until_blocked() {
        let mut board = Board::empty();
        board.place(cell(7, 2), piece(ChessKind::Bishop, Side::Primary));
        board.place(cell(5, 4), piece(ChessKind::Pawn, Side::Secondary));
        let dests = Chess.legal_destinations(&board, cell(7, 2));
        assert!(dests.contains(cell(6, 3)));
        assert!(dests.contains(cell(5, 4)));
        assert!(!dests.contains(cell(4, 5)));
        assert!(dests.contains(cell(5, 0)));
        assert_eq!(dests.len(), 4);
    }

    #[test]
    fn queen_combines_rook_and_bishop() {
        let mut board = Board::empty();
        board.place(cell(3, 3), piece(ChessKind::Queen, Side::Primary));
        assert_eq!(Chess.legal_destinations(&board, cell(3, 3)).len(), 27);
    }

    #[test]
    fn knight_in_corner() {
        let mut board = Board::empty();
        board.place(cell(0, 0), piece(ChessKind::Knight, Side::Primary));
        let dests = Chess.legal_destinations(&board, cell(0, 0));
        let expected: CellSet = [cell(1, 2), cell(2, 1)].into_iter().collect();
        assert_eq!(dests, expected);
    }

    #[test]
    fn king_steps_and_castles() {
        let board = castling_board();
        let dests = Chess.legal_destinations(&board, cell(7, 4));
        assert!(dests.contains(cell(7, 6)));
        assert!(dests.contains(cell(7, 2)));
        assert_eq!(dests.len(), 7);
    }

    #[test]
    fn castling_blocked_by_piece_between() {
        let mut board = castling_board();
        board.place(cell(7, 1), piece(ChessKind::Knight, Side::Primary));
        let dests = Chess.legal_destinations(&board, cell(7, 4));
        assert!(!dests.contains(cell(7, 2)));
        assert!(dests.contains(cell(7, 6)));
    }

    #[test]
    fn castling_requires_rook_present() {
        let mut board = castling_board();
        board.remove(cell(7, 7));
        let dests = Chess.legal_destinations(&board, cell(7, 4));
        assert!(!dests.contains(cell(7, 6)));
    }

    #[test]
    fn execute_castle_moves_rook() {
        let mut board = castling_board();
        let execution = Chess.execute(&mut board, cell(7, 4), cell(7, 6));
        assert_eq!(execution.castled, Some(RookSide::Kingside));
        assert_eq!(board.get(cell(7, 6)), Some(piece(ChessKind::King, Side::Primary)));
        assert_eq!(board.get(cell(7, 5)), Some(piece(ChessKind::Rook, Side::Primary)));
        assert!(board.is_empty(cell(7, 7)));
        assert!(board.castling().king_moved(Side::Primary));
        assert!(board.castling().rook_moved(Side::Primary, RookSide::Kingside));
    }

    #[test]
    fn queenside_castle_moves_rook() {
        let mut board = castling_board();
        Chess.execute(&mut board, cell(7, 4), cell(7, 2));
        assert_eq!(board.get(cell(7, 3)), Some(piece(ChessKind::Rook, Side::Primary)));
        assert!(board.is_empty(cell(7, 0)));
    }

    #[test]
    fn rook_move_clears_its_castle() {
        let mut board = castling_board();
        Chess.execute(&mut board, cell(7, 0), cell(6, 0));
        Chess.execute(&mut board, cell(6, 0), cell(7, 0));
        let dests = Chess.legal_destinations(&board, cell(7, 4));
        assert!(!dests.contains(cell(7, 2)));
        assert!(dests.contains(cell(7, 6)));
    }

    #[test]
    fn captured_home_rook_loses_its_castle() {
        let mut board = castling_board();
        board.place(cell(2, 7), piece(ChessKind::Rook, Side::Secondary));
        Chess.execute(&mut board, cell(2, 7), cell(7, 7));
        assert!(board.castling().rook_moved(Side::Primary, RookSide::Kingside));

        board.place(cell(7, 7), piece(ChessKind::Rook, Side::Primary));
        let dests = Chess.legal_destinations(&board, cell(7, 4));
        assert!(!dests.contains(cell(7, 6)));
        assert!(dests.contains(cell(7, 2)));
    }

    #[test]
    fn execute_capture_reports_piece() {
        let mut board = Board::empty();
        board.place(cell(4, 4), piece(ChessKind::Rook, Side::Primary));
        board.place(cell(1, 4), piece(ChessKind::Knight, Side::Secondary));
        let execution = Chess.execute(&mut board, cell(4, 4), cell(1, 4));
        assert_eq!(
            execution.captured,
            Some((cell(1, 4), piece(ChessKind::Knight, Side::Secondary)))
        );
    }

    #[test]
    fn pawn_on_far_row_waits_for_promotion() {
        let mut board = Board::empty();
        board.place(cell(1, 0), piece(ChessKind::Pawn, Side::Primary));
        let execution = Chess.execute(&mut board, cell(1, 0), cell(0, 0));
        assert!(execution.promotion_pending);
        assert_eq!(board.get(cell(0, 0)), Some(piece(ChessKind::Pawn, Side::Primary)));
    }

    #[test]
    fn winner_when_king_missing() {
        let mut board = castling_board();
        assert_eq!(Chess.winner(&board), None);
        board.remove(cell(0, 4));
        assert_eq!(Chess.winner(&board), Some(Side::Primary));
    }
}
