//! Game sessions: turn order, multi-step moves, and terminal state.
//!
//! The [`Session`] is the only thing that mutates a board during play. It
//! validates every move against the active [`Engine`], applies it, then
//! decides whether the turn passes, whether the same piece must keep
//! jumping, whether a pawn promotion is awaited, and whether the game has
//! ended.

use crate::board::RookSide;
use crate::error::{MoveError, PromotionError};
use crate::rules::{Engine, Execution, GameResult, RuleSet};
use crate::{Board, CellSet};
use gamechat_core::{Cell, ChessKind, GameKind, Piece, PieceKind, Side};
use tracing::{debug, info};

/// A player's display name and number of games won.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub wins: u32,
}

impl Player {
    /// Creates a player with no wins.
    pub fn new(name: impl Into<String>) -> Self {
        Player {
            name: name.into(),
            wins: 0,
        }
    }
}

/// Overall state of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Moves are accepted.
    Active,
    /// The game has ended and the host has not acknowledged the result yet.
    Pending(GameResult),
    /// The game has ended and the result has been recorded.
    Ended(GameResult),
}

impl SessionState {
    /// Returns the result if the game has ended.
    #[inline]
    pub const fn result(self) -> Option<GameResult> {
        match self {
            SessionState::Active => None,
            SessionState::Pending(r) | SessionState::Ended(r) => Some(r),
        }
    }

    /// Returns true once the game has ended.
    #[inline]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, SessionState::Active)
    }
}

/// A successfully applied move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedMove {
    pub from: Cell,
    pub to: Cell,
    /// The captured piece and the cell it was removed from.
    pub captured: Option<(Cell, Piece)>,
    pub castled: Option<RookSide>,
    pub crowned: bool,
    /// The same piece must jump again before the turn passes.
    pub continues_jumping: bool,
    /// A pawn is waiting on [`Session::resolve_promotion`].
    pub promotion_pending: bool,
    /// Set when this move ended the game.
    pub terminal: Option<GameResult>,
}

/// Flat result of [`Session::apply_move`] for hosts that only need flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveOutcome {
    pub accepted: bool,
    pub captured: bool,
    pub continues_jumping: bool,
    pub promotion_pending: bool,
    pub terminal: Option<GameResult>,
    /// Why the move was refused, when `accepted` is false.
    pub rejection: Option<MoveError>,
}

impl From<Result<AppliedMove, MoveError>> for MoveOutcome {
    fn from(result: Result<AppliedMove, MoveError>) -> Self {
        match result {
            Ok(applied) => MoveOutcome {
                accepted: true,
                captured: applied.captured.is_some(),
                continues_jumping: applied.continues_jumping,
                promotion_pending: applied.promotion_pending,
                terminal: applied.terminal,
                rejection: None,
            },
            Err(e) => MoveOutcome {
                rejection: Some(e),
                ..MoveOutcome::default()
            },
        }
    }
}

/// What a tap on the board did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapOutcome {
    /// A piece was selected; these are its destinations.
    Selected(CellSet),
    /// The tap completed a move.
    Moved(MoveOutcome),
    /// The previous selection was dropped.
    Cleared,
    /// The tap had no effect.
    Ignored,
}

/// Read-only view of a session for rendering.
#[derive(Debug, Clone, Copy)]
pub struct SessionView<'a> {
    pub game: GameKind,
    pub board: &'a Board,
    pub turn: Side,
    pub state: SessionState,
    pub players: &'a [Player; 2],
    /// Cell of a piece that must keep jumping.
    pub jumping: Option<Cell>,
    /// Cell of a pawn waiting for its promotion choice.
    pub promotion: Option<Cell>,
}

/// A two-player game in progress.
#[derive(Debug, Clone)]
pub struct Session {
    engine: Engine,
    board: Board,
    turn: Side,
    players: [Player; 2],
    state: SessionState,
    jumping: Option<(Cell, CellSet)>,
    promotion: Option<Cell>,
}

/// Starts a new game of the given kind with default player names.
pub fn new_game(kind: GameKind) -> Session {
    Session::new(kind)
}

impl Session {
    /// Creates a session with default player names.
    pub fn new(kind: GameKind) -> Self {
        Self::with_players(kind, Player::new("Player 1"), Player::new("Player 2"))
    }

    /// Creates a session for two named players.
    pub fn with_players(kind: GameKind, primary: Player, secondary: Player) -> Self {
        let engine = Engine::for_game(kind);
        let session = Session {
            engine,
            board: engine.initial_board(),
            turn: engine.starting_side(),
            players: [primary, secondary],
            state: SessionState::Active,
            jumping: None,
            promotion: None,
        };
        info!(game = %kind, turn = %session.turn, "new game");
        session
    }

    /// Creates a session from an arbitrary board, e.g. one restored from storage.
    ///
    /// The terminal state is evaluated immediately.
    pub fn from_board(kind: GameKind, board: Board, turn: Side) -> Self {
        let mut session = Session {
            engine: Engine::for_game(kind),
            board,
            turn,
            players: [Player::new("Player 1"), Player::new("Player 2")],
            state: SessionState::Active,
            jumping: None,
            promotion: None,
        };
        session.refresh_state();
        session
    }

    /// Resets the board, turn, and state to a fresh game. Scores are kept.
    pub fn new_game(&mut self) {
        self.board = self.engine.initial_board();
        self.turn = self.engine.starting_side();
        self.state = SessionState::Active;
        self.jumping = None;
        self.promotion = None;
        info!(game = %self.engine.kind(), turn = %self.turn, "new game");
    }

    /// Records any unacknowledged result, then starts a fresh game.
    pub fn play_again(&mut self) {
        self.acknowledge();
        self.new_game();
    }

    /// Returns everything a host needs to render the session.
    pub fn current_state(&self) -> SessionView<'_> {
        SessionView {
            game: self.engine.kind(),
            board: &self.board,
            turn: self.turn,
            state: self.state,
            players: &self.players,
            jumping: self.jumping.map(|(cell, _)| cell),
            promotion: self.promotion,
        }
    }

    /// Returns the game being played.
    pub fn game(&self) -> GameKind {
        self.engine.kind()
    }

    /// Returns the rule set in use.
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the side to move.
    pub fn turn(&self) -> Side {
        self.turn
    }

    /// Returns the session state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Returns a player by side.
    pub fn player(&self, side: Side) -> &Player {
        &self.players[side.index()]
    }

    /// Adds a win to a side's score.
    pub fn record_win(&mut self, side: Side) {
        self.players[side.index()].wins += 1;
    }

    /// Moves a pending result to ended, crediting the winner once.
    pub fn acknowledge(&mut self) -> Option<GameResult> {
        if let SessionState::Pending(result) = self.state {
            if let Some(side) = result.winner() {
                self.record_win(side);
            }
            self.state = SessionState::Ended(result);
            return Some(result);
        }
        None
    }

    /// Returns the destinations the piece on `from` may move to right now.
    ///
    /// While a multi-jump is in progress only the jumping piece has
    /// destinations, and only its further jumps count.
    pub fn legal_destinations(&self, from: Cell) -> CellSet {
        match self.jumping {
            Some((cell, jumps)) if cell == from => jumps,
            Some(_) => CellSet::EMPTY,
            None => self.engine.legal_destinations(&self.board, from),
        }
    }

    /// Applies a move and reports the result as flags.
    pub fn apply_move(&mut self, from: Cell, to: Cell) -> MoveOutcome {
        self.try_apply_move(from, to).into()
    }

    /// Applies a move, or explains why it was refused.
    pub fn try_apply_move(&mut self, from: Cell, to: Cell) -> Result<AppliedMove, MoveError> {
        let result = self.validate(from, to);
        if let Err(e) = result {
            debug!(%from, %to, error = %e, "move rejected");
            return Err(e);
        }

        let execution = self.engine.execute(&mut self.board, from, to);
        self.board.clear_selection();
        let applied = self.after_execution(from, to, execution);
        debug!(
            %from,
            %to,
            captured = applied.captured.is_some(),
            continues = applied.continues_jumping,
            "move applied"
        );
        Ok(applied)
    }

    fn validate(&self, from: Cell, to: Cell) -> Result<(), MoveError> {
        if self.state.is_terminal() {
            return Err(MoveError::GameOver);
        }
        if let Some(cell) = self.promotion {
            return Err(MoveError::PromotionPending { cell });
        }
        let piece = self.board.get(from).ok_or(MoveError::EmptySource(from))?;
        match self.jumping {
            Some((cell, _)) if cell != from => return Err(MoveError::MustContinueJump { cell }),
            Some(_) => {}
            None if piece.side != self.turn => {
                return Err(MoveError::NotYourTurn { turn: self.turn })
            }
            None => {}
        }
        if !self.legal_destinations(from).contains(to) {
            return Err(MoveError::IllegalDestination { from, to });
        }
        Ok(())
    }

    fn after_execution(&mut self, from: Cell, to: Cell, execution: Execution) -> AppliedMove {
        let mut applied = AppliedMove {
            from,
            to,
            captured: execution.captured,
            castled: execution.castled,
            crowned: execution.crowned,
            continues_jumping: false,
            promotion_pending: false,
            terminal: None,
        };
        self.jumping = None;

        if let Some(winner) = self.engine.winner(&self.board) {
            self.finish(GameResult::win_for(winner));
            applied.terminal = Some(GameResult::win_for(winner));
            return applied;
        }

        if execution.promotion_pending {
            self.promotion = Some(to);
            applied.promotion_pending = true;
            return applied;
        }

        let jumps = self.engine.continuation(&self.board, to, &execution);
        if !jumps.is_empty() {
            self.jumping = Some((to, jumps));
            self.board.select(to, jumps);
            applied.continues_jumping = true;
            return applied;
        }

        self.pass_turn();
        applied.terminal = self.state.result();
        applied
    }

    /// Completes a deferred pawn promotion and passes the turn.
    pub fn resolve_promotion(&mut self, cell: Cell, kind: ChessKind) -> Result<(), PromotionError> {
        let expected = self.promotion.ok_or(PromotionError::NothingPending)?;
        if expected != cell {
            return Err(PromotionError::WrongCell { expected, got: cell });
        }
        if !kind.is_promotion_choice() {
            return Err(PromotionError::InvalidKind(kind));
        }
        let Some(Piece {
            kind: PieceKind::Chess(ChessKind::Pawn),
            side,
        }) = self.board.get(cell)
        else {
            return Err(PromotionError::NothingPending);
        };

        self.board.place(cell, Piece::chess(kind, side));
        self.promotion = None;
        debug!(%cell, %kind, "pawn promoted");
        self.pass_turn();
        Ok(())
    }

    /// Handles a tap on a raw cell index.
    ///
    /// Tapping an own piece selects it and highlights its destinations.
    /// Tapping a highlighted cell moves the selected piece there. Any other
    /// tap clears the selection, except during a multi-jump, where the
    /// jumping piece stays selected.
    pub fn tap(&mut self, index: i32) -> TapOutcome {
        if self.state.is_terminal() || self.promotion.is_some() {
            return TapOutcome::Ignored;
        }
        let Some(cell) = Cell::from_index(index) else {
            return TapOutcome::Ignored;
        };

        if let Some(selected) = self.board.selected() {
            if self.board.is_highlighted(cell) {
                return TapOutcome::Moved(self.apply_move(selected, cell));
            }
        }

        if let Some((jumper, jumps)) = self.jumping {
            if cell == jumper {
                self.board.select(jumper, jumps);
                return TapOutcome::Selected(jumps);
            }
            return TapOutcome::Ignored;
        }

        if self.board.is_side(cell, self.turn) {
            let destinations = self.legal_destinations(cell);
            self.board.select(cell, destinations);
            debug!(%cell, count = destinations.len(), "selected");
            return TapOutcome::Selected(destinations);
        }

        if self.board.selected().is_some() {
            self.board.clear_selection();
            return TapOutcome::Cleared;
        }
        TapOutcome::Ignored
    }

    fn pass_turn(&mut self) {
        self.turn = self.turn.opposite();
        if self.engine.is_exhausted(&self.board, self.turn) {
            self.finish(GameResult::Tie);
        }
    }

    fn finish(&mut self, result: GameResult) {
        self.state = SessionState::Pending(result);
        self.jumping = None;
        self.promotion = None;
        self.board.clear_selection();
        info!(game = %self.engine.kind(), %result, "game over");
    }

    fn refresh_state(&mut self) {
        self.state = SessionState::Active;
        if let Some(winner) = self.engine.winner(&self.board) {
            self.finish(GameResult::win_for(winner));
        } else if self.engine.is_exhausted(&self.board, self.turn) {
            self.finish(GameResult::Tie);
        }
    }

    /// Reinstates a multi-jump or a pending promotion restored from storage.
    ///
    /// Returns the offending cell if a marker does not match the board: a
    /// promotion needs a pawn of the side to move on its far row, and a
    /// multi-jump needs a checkers piece of the side to move with a jump left.
    /// Markers are ignored once the game has ended.
    pub(crate) fn resume(&mut self, jumping: Option<Cell>, promotion: Option<Cell>) -> Result<(), Cell> {
        if self.state.is_terminal() {
            return Ok(());
        }

        if let Some(cell) = promotion {
            match self.board.get(cell) {
                Some(Piece {
                    kind: PieceKind::Chess(ChessKind::Pawn),
                    side,
                }) if side == self.turn && cell.row() == side.far_row() => {
                    self.promotion = Some(cell);
                }
                _ => return Err(cell),
            }
        }

        if let Some(cell) = jumping {
            let jumps = match self.engine {
                Engine::Checkers(rules) if self.board.is_side(cell, self.turn) => {
                    rules.jump_destinations(&self.board, cell)
                }
                _ => CellSet::EMPTY,
            };
            if jumps.is_empty() {
                return Err(cell);
            }
            self.jumping = Some((cell, jumps));
            self.board.select(cell, jumps);
        }

        debug!(jumping = ?jumping, promotion = ?promotion, "resumed");
        Ok(())
    }

    /// Replaces the board and side to move, then re-evaluates the terminal state.
    pub fn set_board(&mut self, board: Board, turn: Side) {
        self.board = board;
        self.turn = turn;
        self.jumping = None;
        self.promotion = None;
        self.refresh_state();
    }
}
