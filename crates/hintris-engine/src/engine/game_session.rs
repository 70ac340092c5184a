use std::{mem, time::Duration};

use serde::Serialize;
use tracing::{debug, info, trace};

#[cfg(test)]
use crate::core::board::Board;
use crate::{
    ActionError, HintError,
    core::piece::{Piece, PieceKind},
};

use super::{
    GameEvent, GameField, GameSnapshot, GameStats, HARD_DROP_POINTS_PER_ROW, HINTS_PER_SESSION,
    HintProvider, LineClear, LineClearResult, Placement, SOFT_DROP_POINTS,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::Display, derive_more::IsVariant)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    #[display("not started")]
    NotStarted,
    #[display("playing")]
    Playing,
    #[display("paused")]
    Paused,
    #[display("game over")]
    GameOver,
}

/// Result of moving the falling piece down one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum DropOutcome {
    /// The piece moved down.
    Moved,
    /// The piece could not move and was locked.
    Locked,
}

/// A game from the first spawn to game over.
///
/// # State Machine
///
/// ```text
/// NotStarted --start--> Playing <--toggle_pause--> Paused
///                          |
///                          +--spawn collides--> GameOver
/// ```
///
/// `reset` returns to `NotStarted` from any state.
///
/// Orthogonal to these states, a lock that fills rows leaves a pending
/// line clear. Until the caller acknowledges it with
/// [`Self::complete_line_clear`], gravity, movement, drops, hold and hints
/// are rejected; pause and reset still work.
///
/// # Time
///
/// The session has no clock. The caller feeds elapsed time to
/// [`Self::tick`]; once the accumulated time exceeds the level's drop
/// interval the piece falls one row and the accumulator restarts.
#[derive(Debug, Clone)]
pub struct GameSession {
    field: GameField,
    stats: GameStats,
    session_state: SessionState,
    pending_clear: Option<LineClear>,
    hints_remaining: usize,
    hint: Option<Placement>,
    drop_timer: Duration,
    events: Vec<GameEvent>,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    #[must_use]
    pub fn new() -> Self {
        Self::with_field(GameField::new())
    }

    #[cfg(test)]
    pub(crate) fn scripted(kinds: &[PieceKind]) -> Self {
        Self::with_field(GameField::scripted(kinds))
    }

    fn with_field(field: GameField) -> Self {
        Self {
            field,
            stats: GameStats::new(),
            session_state: SessionState::NotStarted,
            pending_clear: None,
            hints_remaining: HINTS_PER_SESSION,
            hint: None,
            drop_timer: Duration::ZERO,
            events: Vec::new(),
        }
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        self.field.board_mut()
    }

    #[must_use]
    pub fn field(&self) -> &GameField {
        &self.field
    }

    #[must_use]
    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    #[must_use]
    pub fn session_state(&self) -> SessionState {
        self.session_state
    }

    #[must_use]
    pub fn falling_piece(&self) -> Option<Piece> {
        self.field.falling_piece()
    }

    #[must_use]
    pub fn held_piece(&self) -> Option<PieceKind> {
        self.field.held_piece()
    }

    pub fn next_pieces(&self) -> impl Iterator<Item = PieceKind> + '_ {
        self.field.next_pieces()
    }

    #[must_use]
    pub fn hints_remaining(&self) -> usize {
        self.hints_remaining
    }

    /// The hint currently on display, if any.
    #[must_use]
    pub fn hint(&self) -> Option<Placement> {
        self.hint
    }

    /// The line clear waiting for [`Self::complete_line_clear`].
    #[must_use]
    pub fn pending_line_clear(&self) -> Option<&LineClear> {
        self.pending_clear.as_ref()
    }

    #[must_use]
    pub fn is_resolving(&self) -> bool {
        self.pending_clear.is_some()
    }

    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            state: self.session_state,
            board: self.field.board().clone(),
            falling_piece: self.field.falling_piece(),
            ghost_y: self.field.ghost_y(),
            held_piece: self.field.held_piece(),
            can_hold: self.field.can_hold(),
            next_pieces: self.field.next_pieces().collect(),
            score: self.stats.score(),
            level: self.stats.level(),
            lines: self.stats.total_cleared_lines(),
            completed_pieces: self.stats.completed_pieces(),
            hints_remaining: self.hints_remaining,
            drop_interval_ms: u64::try_from(self.stats.drop_interval().as_millis())
                .unwrap_or(u64::MAX),
            hint: self.hint,
            resolving: self.is_resolving(),
            clearing_rows: self
                .pending_clear
                .as_ref()
                .map(|clear| clear.rows().to_vec())
                .unwrap_or_default(),
        }
    }

    /// Takes every event recorded since the last call.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        mem::take(&mut self.events)
    }

    /// Starts a fresh session. Returns `false` unless the session was `NotStarted`.
    pub fn start(&mut self) -> bool {
        if !self.session_state.is_not_started() {
            return false;
        }
        self.session_state = SessionState::Playing;
        debug!("session started");
        true
    }

    /// Discards the game and prepares a new one with the first piece spawned.
    pub fn reset(&mut self) {
        *self = Self::new();
        debug!("session reset");
    }

    pub fn toggle_pause(&mut self) {
        self.session_state = match self.session_state {
            SessionState::Playing => SessionState::Paused,
            SessionState::Paused => SessionState::Playing,
            state @ (SessionState::NotStarted | SessionState::GameOver) => state,
        };
        debug!(state = %self.session_state, "pause toggled");
    }

    /// Advances gravity by `elapsed`.
    ///
    /// Returns the drop that happened, if the accumulated time passed the
    /// drop interval. Nothing happens unless playing without a pending line
    /// clear.
    pub fn tick(&mut self, elapsed: Duration) -> Option<DropOutcome> {
        if !self.session_state.is_playing() || self.is_resolving() {
            return None;
        }
        self.drop_timer += elapsed;
        if self.drop_timer <= self.stats.drop_interval() {
            return None;
        }
        self.drop_timer = Duration::ZERO;
        self.step_down().ok()
    }

    fn ensure_active(&self) -> Result<(), ActionError> {
        if !self.session_state.is_playing() {
            return Err(ActionError::NotPlaying);
        }
        if self.is_resolving() {
            return Err(ActionError::LineClearInProgress);
        }
        Ok(())
    }

    pub fn try_move_left(&mut self) -> Result<(), ActionError> {
        self.ensure_active()?;
        self.field.try_move(-1)
    }

    pub fn try_move_right(&mut self) -> Result<(), ActionError> {
        self.ensure_active()?;
        self.field.try_move(1)
    }

    pub fn try_rotate(&mut self) -> Result<(), ActionError> {
        self.ensure_active()?;
        self.field.try_rotate()
    }

    /// Moves the piece down one row for a point, or locks it if it rests.
    pub fn soft_drop(&mut self) -> Result<DropOutcome, ActionError> {
        self.ensure_active()?;
        self.drop_timer = Duration::ZERO;
        self.step_down()
    }

    /// Drops the piece to its landing row and locks it.
    ///
    /// Returns the number of rows the piece fell; each scores
    /// [`HARD_DROP_POINTS_PER_ROW`].
    pub fn hard_drop(&mut self) -> Result<usize, ActionError> {
        self.ensure_active()?;
        let rows = self.field.drop_to_bottom()?;
        self.stats.add_drop_points(rows * HARD_DROP_POINTS_PER_ROW);
        self.drop_timer = Duration::ZERO;
        self.lock_and_resolve();
        Ok(rows)
    }

    /// Sets the falling piece aside, at most once per piece.
    ///
    /// If the piece taken from the queue does not fit, the game ends.
    pub fn try_hold(&mut self) -> Result<(), ActionError> {
        self.ensure_active()?;
        let result = self.field.try_hold();
        if result.is_err() && self.field.falling_piece().is_none() {
            self.game_over();
            return Ok(());
        }
        result?;
        self.hint = None;
        trace!(held = ?self.field.held_piece(), "piece held");
        Ok(())
    }

    /// Spends one hint and shows where `provider` would place the falling piece.
    ///
    /// A hint is spent even when the provider finds no placement.
    pub fn request_hint<H>(&mut self, provider: &H) -> Result<Option<Placement>, HintError>
    where
        H: HintProvider + ?Sized,
    {
        if !self.session_state.is_playing() {
            return Err(HintError::NotPlaying);
        }
        if self.is_resolving() {
            return Err(HintError::LineClearInProgress);
        }
        let piece = self.field.falling_piece().ok_or(HintError::NoFallingPiece)?;
        if self.hints_remaining == 0 {
            return Err(HintError::NoHintsRemaining);
        }
        self.hints_remaining -= 1;

        let placement = provider.best_placement(self.field.board(), piece.kind());
        self.hint = placement;
        if let Some(placement) = placement {
            self.events.push(GameEvent::HintShown { placement });
        }
        debug!(
            ?placement,
            hints_remaining = self.hints_remaining,
            "hint granted"
        );
        Ok(placement)
    }

    /// Hides the current hint; the hint stays spent.
    pub fn dismiss_hint(&mut self) {
        self.hint = None;
    }

    /// Removes the pending full rows, scores them and spawns the next piece.
    ///
    /// Works while paused so an animation finishing during a pause does not
    /// leave the board stuck. Returns `None` when no clear is pending.
    pub fn complete_line_clear(&mut self) -> Option<LineClearResult> {
        let clear = self.pending_clear.take()?;
        let result = clear.apply(self.field.board_mut(), &mut self.stats);
        self.events.push(GameEvent::LinesCleared {
            rows: clear.rows().to_vec(),
            count: result.count,
            points: result.points,
        });
        debug!(
            count = result.count,
            points = result.points,
            level = result.level,
            "lines cleared"
        );
        self.spawn_next();
        Some(result)
    }

    fn step_down(&mut self) -> Result<DropOutcome, ActionError> {
        match self.field.try_soft_drop() {
            Ok(()) => {
                self.stats.add_drop_points(SOFT_DROP_POINTS);
                Ok(DropOutcome::Moved)
            }
            Err(ActionError::Collision(_)) => {
                self.lock_and_resolve();
                Ok(DropOutcome::Locked)
            }
            Err(e) => Err(e),
        }
    }

    fn lock_and_resolve(&mut self) {
        let Some(piece) = self.field.lock_falling_piece() else {
            return;
        };
        self.stats.complete_piece_drop();
        self.hint = None;
        self.events.push(GameEvent::PieceLocked { piece });
        trace!(%piece, "piece locked");

        if let Some(clear) = LineClear::detect(self.field.board()) {
            debug!(rows = ?clear.rows(), "line clear pending");
            self.events.push(GameEvent::LineClearPending {
                rows: clear.rows().to_vec(),
            });
            self.pending_clear = Some(clear);
            return;
        }
        self.spawn_next();
    }

    fn spawn_next(&mut self) {
        if self.field.spawn().is_err() {
            self.game_over();
        }
    }

    fn game_over(&mut self) {
        self.session_state = SessionState::GameOver;
        self.hint = None;
        self.events.push(GameEvent::GameOver {
            score: self.stats.score(),
            lines: self.stats.total_cleared_lines(),
            level: self.stats.level(),
        });
        info!(
            score = self.stats.score(),
            lines = self.stats.total_cleared_lines(),
            level = self.stats.level(),
            "game over"
        );
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::core::{
        board::Block,
        piece::{PiecePosition, PieceRotation},
    };

    const O_ONLY: [PieceKind; 8] = [PieceKind::O; 8];

    struct FixedHint {
        placement: Option<Placement>,
        calls: Cell<usize>,
    }

    impl FixedHint {
        fn new(placement: Option<Placement>) -> Self {
            Self {
                placement,
                calls: Cell::new(0),
            }
        }
    }

    impl HintProvider for FixedHint {
        fn best_placement(&self, _board: &Board, _kind: PieceKind) -> Option<Placement> {
            self.calls.set(self.calls.get() + 1);
            self.placement
        }
    }

    fn started(kinds: &[PieceKind]) -> GameSession {
        let mut session = GameSession::scripted(kinds);
        assert!(session.start());
        session
    }

    fn fill_cells(session: &mut GameSession, cells: &[(usize, usize)]) {
        for &(x, y) in cells {
            session.board_mut().set_block(x, y, Block::Piece(PieceKind::Z));
        }
    }

    /// Leaves a two-cell gap in the two bottom rows exactly where an O lands.
    fn o_gap_board() -> Board {
        Board::from_ascii(
            "
            ####..####
            ####..####
            ",
        )
    }

    #[test]
    fn test_commands_rejected_before_start() {
        let mut session = GameSession::scripted(&O_ONLY);
        assert_eq!(session.session_state(), SessionState::NotStarted);
        assert!(session.falling_piece().is_some());
        assert_eq!(session.try_move_left(), Err(ActionError::NotPlaying));
        assert_eq!(session.soft_drop(), Err(ActionError::NotPlaying));
        assert_eq!(session.hard_drop(), Err(ActionError::NotPlaying));
        assert_eq!(
            session.request_hint(&FixedHint::new(None)),
            Err(HintError::NotPlaying)
        );
        assert_eq!(session.tick(Duration::from_secs(10)), None);

        session.toggle_pause();
        assert_eq!(session.session_state(), SessionState::NotStarted);

        assert!(session.start());
        assert!(!session.start());
        assert_eq!(session.session_state(), SessionState::Playing);
    }

    #[test]
    fn test_pause_blocks_commands_and_gravity() {
        let mut session = started(&O_ONLY);
        session.toggle_pause();
        assert!(session.session_state().is_paused());
        assert_eq!(session.try_rotate(), Err(ActionError::NotPlaying));
        assert_eq!(session.tick(Duration::from_secs(10)), None);
        assert_eq!(session.falling_piece().unwrap().position().y(), 0);

        session.toggle_pause();
        assert!(session.session_state().is_playing());
        session.try_move_right().unwrap();
    }

    #[test]
    fn test_gravity_needs_interval_strictly_exceeded() {
        let mut session = started(&O_ONLY);
        assert_eq!(session.tick(Duration::from_millis(1000)), None);
        assert_eq!(
            session.tick(Duration::from_millis(1)),
            Some(DropOutcome::Moved)
        );
        assert_eq!(session.falling_piece().unwrap().position().y(), 1);
        assert_eq!(session.stats().score(), SOFT_DROP_POINTS);

        // the accumulator restarted
        assert_eq!(session.tick(Duration::from_millis(999)), None);
    }

    #[test]
    fn test_manual_soft_drop_resets_gravity() {
        let mut session = started(&O_ONLY);
        assert_eq!(session.tick(Duration::from_millis(900)), None);
        assert_eq!(session.soft_drop(), Ok(DropOutcome::Moved));
        assert_eq!(session.tick(Duration::from_millis(900)), None);
        assert_eq!(session.falling_piece().unwrap().position().y(), 1);
        assert_eq!(session.stats().score(), 1);
    }

    #[test]
    fn test_soft_drop_locks_resting_piece() {
        let mut session = started(&O_ONLY);
        for _ in 0..18 {
            assert_eq!(session.soft_drop(), Ok(DropOutcome::Moved));
        }
        assert_eq!(session.soft_drop(), Ok(DropOutcome::Locked));
        assert_eq!(session.stats().score(), 18);
        assert_eq!(session.stats().completed_pieces(), 1);
        assert_eq!(session.field().board().occupied_count(), 4);
        assert_eq!(session.falling_piece(), Some(Piece::new(PieceKind::O)));
    }

    #[test]
    fn test_hard_drop_scores_rows_and_locks() {
        let mut session = started(&O_ONLY);
        assert_eq!(session.hard_drop(), Ok(18));
        assert_eq!(session.stats().score(), 36);
        assert_eq!(session.stats().completed_pieces(), 1);

        let events = session.drain_events();
        assert_eq!(events.len(), 1);
        assert!(events[0].is_piece_locked());
        assert!(session.drain_events().is_empty());
    }

    #[test]
    fn test_line_clear_handoff() {
        let mut session = started(&O_ONLY);
        *session.board_mut() = o_gap_board();

        session.hard_drop().unwrap();
        assert!(session.is_resolving());
        assert_eq!(session.pending_line_clear().unwrap().rows(), &[19, 18]);
        let events = session.drain_events();
        assert!(events[0].is_piece_locked());
        assert_eq!(
            events[1],
            GameEvent::LineClearPending {
                rows: vec![19, 18],
            }
        );
        assert_eq!(session.falling_piece(), None);
        assert_eq!(session.stats().score(), 36);

        assert_eq!(session.try_move_left(), Err(ActionError::LineClearInProgress));
        assert_eq!(session.try_hold(), Err(ActionError::LineClearInProgress));
        assert_eq!(
            session.request_hint(&FixedHint::new(None)),
            Err(HintError::LineClearInProgress)
        );
        assert_eq!(session.tick(Duration::from_secs(5)), None);

        let snapshot = session.snapshot();
        assert!(snapshot.resolving);
        assert_eq!(snapshot.clearing_rows, vec![19, 18]);

        // pause does not block the acknowledgment
        session.toggle_pause();
        let result = session.complete_line_clear().unwrap();
        assert_eq!(result.count, 2);
        assert_eq!(result.points, 300);
        assert_eq!(session.stats().score(), 336);
        assert_eq!(session.stats().total_cleared_lines(), 2);
        assert_eq!(session.field().board(), &Board::EMPTY);
        assert!(!session.is_resolving());
        assert!(session.falling_piece().is_some());
        assert_eq!(session.complete_line_clear(), None);

        assert_eq!(
            session.drain_events()[0],
            GameEvent::LinesCleared {
                rows: vec![19, 18],
                count: 2,
                points: 300,
            }
        );
    }

    #[test]
    fn test_level_raises_gravity_speed() {
        let mut session = started(&O_ONLY);
        for _ in 0..5 {
            *session.board_mut() = o_gap_board();
            session.hard_drop().unwrap();
            session.complete_line_clear().unwrap();
        }
        assert_eq!(session.stats().total_cleared_lines(), 10);
        assert_eq!(session.stats().level(), 2);
        assert_eq!(session.snapshot().drop_interval_ms, 950);
        assert_eq!(session.tick(Duration::from_millis(951)), Some(DropOutcome::Moved));

        // a double is worth the same at level 2
        let before = session.stats().score();
        *session.board_mut() = o_gap_board();
        let dropped = session.hard_drop().unwrap();
        let result = session.complete_line_clear().unwrap();
        assert_eq!(result.points, 300);
        assert_eq!(result.level, 2);
        assert_eq!(
            session.stats().score(),
            before + dropped * HARD_DROP_POINTS_PER_ROW + 300
        );
        assert_eq!(session.stats().total_cleared_lines(), 12);
    }

    #[test]
    fn test_tall_stack_is_not_game_over() {
        let mut session = started(&O_ONLY);
        let column: Vec<_> = (0..Board::HEIGHT).map(|y| (0, y)).collect();
        fill_cells(&mut session, &column);

        session.hard_drop().unwrap();
        assert!(session.session_state().is_playing());
        assert!(session.falling_piece().is_some());
    }

    #[test]
    fn test_spawn_below_empty_top_rows_never_game_over() {
        for kind in PieceKind::ALL {
            let mut session = started(&[kind; 4]);
            // one gap per row so nothing clears
            let stack: Vec<_> = (2..Board::HEIGHT)
                .flat_map(|y| {
                    (0..Board::WIDTH)
                        .filter(move |x| *x != y % Board::WIDTH)
                        .map(move |x| (x, y))
                })
                .collect();
            fill_cells(&mut session, &stack);

            session.spawn_next();
            assert!(session.session_state().is_playing(), "{kind:?}");
            assert_eq!(session.falling_piece(), Some(Piece::new(kind)), "{kind:?}");
        }
    }

    #[test]
    fn test_game_over_on_spawn_overlap() {
        let mut session = started(&O_ONLY);
        let stack: Vec<_> = (2..Board::HEIGHT).flat_map(|y| [(4, y), (5, y)]).collect();
        fill_cells(&mut session, &stack);

        assert_eq!(session.hard_drop(), Ok(0));
        assert_eq!(session.session_state(), SessionState::GameOver);
        assert_eq!(session.falling_piece(), None);
        assert!(
            session
                .drain_events()
                .iter()
                .any(|event| matches!(event, GameEvent::GameOver { .. }))
        );

        assert_eq!(session.soft_drop(), Err(ActionError::NotPlaying));
        session.toggle_pause();
        assert!(session.session_state().is_game_over());
    }

    #[test]
    fn test_hold_once_per_piece() {
        let mut session = started(&[PieceKind::T, PieceKind::I, PieceKind::O, PieceKind::S]);
        session.try_hold().unwrap();
        assert_eq!(session.held_piece(), Some(PieceKind::T));
        assert_eq!(session.falling_piece().unwrap().kind(), PieceKind::I);
        assert_eq!(session.try_hold(), Err(ActionError::HoldAlreadyUsed));

        session.hard_drop().unwrap();
        assert!(session.field().can_hold());
        session.try_hold().unwrap();
        assert_eq!(session.held_piece(), Some(PieceKind::O));
        assert_eq!(session.falling_piece(), Some(Piece::new(PieceKind::T)));
    }

    #[test]
    fn test_hold_into_blocked_spawn_ends_game() {
        let mut session = started(&[PieceKind::T, PieceKind::O]);
        // (5, 0) is free for the spawned T but not for the O behind it
        fill_cells(&mut session, &[(5, 0)]);

        assert_eq!(session.try_hold(), Ok(()));
        assert!(session.session_state().is_game_over());
    }

    #[test]
    fn test_hints_are_limited_and_spent_even_without_placement() {
        let placement = Placement {
            x: 3,
            y: 18,
            rotation: PieceRotation::default(),
        };
        let provider = FixedHint::new(Some(placement));
        let mut session = started(&O_ONLY);

        assert_eq!(session.request_hint(&provider), Ok(Some(placement)));
        assert_eq!(session.hints_remaining(), HINTS_PER_SESSION - 1);
        assert_eq!(session.hint(), Some(placement));
        assert_eq!(session.snapshot().hint, Some(placement));
        assert_eq!(
            session.drain_events(),
            vec![GameEvent::HintShown { placement }]
        );

        session.dismiss_hint();
        assert_eq!(session.hint(), None);

        let empty = FixedHint::new(None);
        assert_eq!(session.request_hint(&empty), Ok(None));
        assert_eq!(session.hints_remaining(), HINTS_PER_SESSION - 2);

        for _ in 0..3 {
            session.request_hint(&provider).unwrap();
        }
        assert_eq!(session.hints_remaining(), 0);
        assert_eq!(
            session.request_hint(&provider),
            Err(HintError::NoHintsRemaining)
        );
        assert_eq!(provider.calls.get(), 4);
    }

    #[test]
    fn test_hint_cleared_on_lock() {
        let provider = FixedHint::new(Some(Placement {
            x: 3,
            y: 18,
            rotation: PieceRotation::default(),
        }));
        let mut session = started(&O_ONLY);
        session.request_hint(&provider).unwrap();
        session.hard_drop().unwrap();
        assert_eq!(session.hint(), None);
        assert_eq!(session.hints_remaining(), HINTS_PER_SESSION - 1);
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut session = started(&O_ONLY);
        session.hard_drop().unwrap();
        session.request_hint(&FixedHint::new(None)).unwrap();

        session.reset();
        assert_eq!(session.session_state(), SessionState::NotStarted);
        assert_eq!(session.stats(), &GameStats::new());
        assert_eq!(session.hints_remaining(), HINTS_PER_SESSION);
        assert_eq!(session.field().board(), &Board::EMPTY);
        assert_eq!(session.held_piece(), None);
        assert!(session.drain_events().is_empty());
        let piece = session.falling_piece().unwrap();
        assert_eq!(piece.position(), PiecePosition::SPAWN_POSITION);
    }

    #[test]
    fn test_snapshot_serialization() {
        let session = started(&O_ONLY);
        let value = serde_json::to_value(session.snapshot()).unwrap();
        assert_eq!(value["state"], "playing");
        assert_eq!(value["falling_piece"], "O#0@3,0");
        assert_eq!(value["ghost_y"], 18);
        assert_eq!(value["next_pieces"], serde_json::json!(["O", "O", "O"]));
        assert_eq!(value["level"], 1);
        assert_eq!(value["hints_remaining"], 5);
        assert_eq!(value["drop_interval_ms"], 1000);
        assert_eq!(value["board"].as_array().unwrap().len(), Board::HEIGHT);
    }
}
