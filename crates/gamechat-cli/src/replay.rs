//! Drives a session through a parsed script.

use crate::script::ScriptStep;
use gamechat_core::ChessKind;
use gamechat_engine::{GameResult, MoveError, Session};
use tracing::warn;

/// Summary of a replay.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReplayReport {
    pub applied: usize,
    /// Rejected steps with the reason each was refused.
    pub rejected: Vec<(usize, MoveError)>,
    pub result: Option<GameResult>,
}

/// Plays every step against the session, stopping when the game ends.
///
/// Rejected moves are reported and skipped. A pawn waiting for promotion is
/// promoted to the step's piece, or `default_promotion` when the step names
/// none. `on_move` runs after each accepted move.
pub fn replay<F>(
    session: &mut Session,
    steps: &[ScriptStep],
    default_promotion: ChessKind,
    mut on_move: F,
) -> ReplayReport
where
    F: FnMut(&Session, &ScriptStep),
{
    let mut report = ReplayReport::default();

    for step in steps {
        let applied = match session.try_apply_move(step.from, step.to) {
            Ok(applied) => applied,
            Err(e) => {
                warn!(line = step.line, error = %e, "move rejected");
                report.rejected.push((step.line, e));
                continue;
            }
        };
        report.applied += 1;

        if applied.promotion_pending {
            let kind = step.promotion.unwrap_or(default_promotion);
            if let Err(e) = session.resolve_promotion(step.to, kind) {
                warn!(line = step.line, error = %e, "promotion failed");
            }
        }

        on_move(session, step);

        if let Some(result) = session.state().result() {
            report.result = Some(result);
            break;
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script;
    use gamechat_core::{Cell, GameKind, Piece, Side};
    use gamechat_engine::{Board, SessionState};

    #[test]
    fn replays_opening_moves() {
        let mut session = Session::new(GameKind::Checkers);
        let steps = script::parse("40 33\n17 26\n").unwrap();
        let mut seen = 0;
        let report = replay(&mut session, &steps, ChessKind::Queen, |_, _| seen += 1);
        assert_eq!(report.applied, 2);
        assert!(report.rejected.is_empty());
        assert_eq!(seen, 2);
        assert_eq!(session.turn(), Side::Primary);
    }

    #[test]
    fn skips_rejected_moves() {
        let mut session = Session::new(GameKind::Checkers);
        let steps = script::parse("17 26\n40 33\n").unwrap();
        let report = replay(&mut session, &steps, ChessKind::Queen, |_, _| {});
        assert_eq!(report.applied, 1);
        assert_eq!(report.rejected.len(), 1);
        assert_eq!(report.rejected[0].0, 1);
        assert!(matches!(report.rejected[0].1, MoveError::NotYourTurn { .. }));
    }

    #[test]
    fn applies_default_promotion() {
        let mut board = Board::empty();
        let cell = |r, c| Cell::new(r, c).unwrap();
        board.place(cell(7, 4), Piece::chess(ChessKind::King, Side::Primary));
        board.place(cell(0, 7), Piece::chess(ChessKind::King, Side::Secondary));
        board.place(cell(1, 0), Piece::chess(ChessKind::Pawn, Side::Primary));
        let mut session = Session::from_board(GameKind::Chess, board, Side::Primary);

        let steps = script::parse("8 0").unwrap();
        replay(&mut session, &steps, ChessKind::Rook, |_, _| {});
        assert_eq!(
            session.board().get(cell(0, 0)),
            Some(Piece::chess(ChessKind::Rook, Side::Primary))
        );
        assert_eq!(session.turn(), Side::Secondary);
    }

    #[test]
    fn stops_at_game_end() {
        let mut board = Board::empty();
        let cell = |r, c| Cell::new(r, c).unwrap();
        board.place(cell(4, 4), Piece::chess(ChessKind::Rook, Side::Primary));
        board.place(cell(7, 0), Piece::chess(ChessKind::King, Side::Primary));
        board.place(cell(0, 4), Piece::chess(ChessKind::King, Side::Secondary));
        let mut session = Session::from_board(GameKind::Chess, board, Side::Primary);

        let steps = script::parse("36 4\n4 5\n").unwrap();
        let report = replay(&mut session, &steps, ChessKind::Queen, |_, _| {});
        assert_eq!(report.result, Some(GameResult::PrimaryWins));
        assert_eq!(report.applied, 1);
        assert!(matches!(session.state(), SessionState::Pending(_)));
    }
}
