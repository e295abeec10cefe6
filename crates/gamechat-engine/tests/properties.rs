//! Property tests for move generation and move rejection.

use gamechat_core::{Cell, CheckersKind, ChessKind, GameKind, Piece, Side};
use gamechat_engine::{new_game, Board, Engine, RuleSet, Session};
use proptest::prelude::*;

fn side_strategy() -> impl Strategy<Value = Side> {
    prop_oneof![Just(Side::Primary), Just(Side::Secondary)]
}

fn game_strategy() -> impl Strategy<Value = GameKind> {
    prop_oneof![Just(GameKind::Checkers), Just(GameKind::Chess)]
}

proptest! {
    #[test]
    fn illegal_moves_never_mutate(game in game_strategy(), from in -4i32..68, to in -4i32..68) {
        let mut session = new_game(game);
        let (Some(from), Some(to)) = (Cell::from_index(from), Cell::from_index(to)) else {
            return Ok(());
        };
        let legal = session.board().is_side(from, session.turn())
            && session.legal_destinations(from).contains(to);
        prop_assume!(!legal);

        let board_before = session.board().clone();
        let turn_before = session.turn();
        let outcome = session.apply_move(from, to);

        prop_assert!(!outcome.accepted);
        prop_assert!(outcome.rejection.is_some());
        prop_assert_eq!(session.board(), &board_before);
        prop_assert_eq!(session.turn(), turn_before);
    }

    #[test]
    fn checkers_jump_is_legal_and_captures(
        row in 0u8..8,
        col in 0u8..8,
        dr in prop_oneof![Just(-1i8), Just(1i8)],
        dc in prop_oneof![Just(-1i8), Just(1i8)],
        side in side_strategy(),
        crowned in any::<bool>(),
    ) {
        let from = Cell::new(row, col).unwrap();
        let (Some(over), Some(landing)) = (from.offset(dr, dc), from.offset(2 * dr, 2 * dc)) else {
            return Ok(());
        };
        let kind = if crowned { CheckersKind::King } else { CheckersKind::Man };

        let mut board = Board::empty();
        board.place(from, Piece::checkers(kind, side));
        board.place(over, Piece::checkers(CheckersKind::Man, side.opposite()));

        let rules = Engine::for_game(GameKind::Checkers);
        prop_assert!(rules.legal_destinations(&board, from).contains(landing));

        let mut session = Session::from_board(GameKind::Checkers, board, side);
        let outcome = session.apply_move(from, landing);
        prop_assert!(outcome.accepted);
        prop_assert!(outcome.captured);
        prop_assert!(session.board().is_empty(over));
        prop_assert!(session.board().is_empty(from));
        prop_assert!(session.board().is_side(landing, side));
    }

    #[test]
    fn knight_never_wraps(row in 0u8..8, left_edge in any::<bool>(), enemies in any::<u64>()) {
        let col = if left_edge { 0 } else { 7 };
        let from = Cell::new(row, col).unwrap();

        let mut board = Board::empty();
        for cell in Cell::all().filter(|c| enemies & (1u64 << c.index()) != 0 && *c != from) {
            board.place(cell, Piece::chess(ChessKind::Pawn, Side::Secondary));
        }
        board.place(from, Piece::chess(ChessKind::Knight, Side::Primary));

        let destinations = Engine::for_game(GameKind::Chess).legal_destinations(&board, from);
        for target in destinations {
            if left_edge {
                prop_assert!(target.col() <= 2, "{:?} -> {:?}", from, target);
            } else {
                prop_assert!(target.col() >= 5, "{:?} -> {:?}", from, target);
            }
        }
    }

    #[test]
    fn destinations_never_hold_own_pieces(game in game_strategy(), moves in proptest::collection::vec((0i32..64, 0usize..8), 0..12)) {
        let mut session = new_game(game);
        for (index, pick) in moves {
            let Some(from) = Cell::from_index(index) else { continue };
            let destinations: Vec<Cell> = session.legal_destinations(from).into_iter().collect();
            if destinations.is_empty() || !session.board().is_side(from, session.turn()) {
                continue;
            }
            let to = destinations[pick % destinations.len()];
            if session.apply_move(from, to).promotion_pending {
                break;
            }
        }

        let board = session.board();
        for (cell, piece) in board.pieces() {
            for target in session.engine().legal_destinations(board, cell) {
                prop_assert!(!board.is_side(target, piece.side));
            }
        }
    }
}
