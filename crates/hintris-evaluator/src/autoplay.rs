//! Headless play driven by a [`HintProvider`].
//!
//! [`Autoplay`] steers each falling piece to the provider's placement with
//! ordinary session commands (rotate, shift, hard drop), so it plays by the
//! same rules as a human. It asks the provider directly and never spends the
//! session's hints.

use std::{cmp::Ordering, time::Duration};

use hintris_engine::{ActionError, GameSession, HintProvider, Placement};
use serde::Serialize;
use tracing::{debug, trace};

/// Final counters of an autoplay run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AutoplaySummary {
    pub pieces: usize,
    pub score: usize,
    pub lines: usize,
    pub level: usize,
    pub game_over: bool,
}

#[derive(Debug)]
pub struct Autoplay<'a, P: ?Sized> {
    provider: &'a P,
    frame: Duration,
}

impl<'a, P> Autoplay<'a, P>
where
    P: HintProvider + ?Sized,
{
    /// Creates a driver that lets `frame` of gravity pass before each placement.
    #[must_use]
    pub fn new(provider: &'a P, frame: Duration) -> Self {
        Self { provider, frame }
    }

    /// Places the falling piece where the provider suggests.
    ///
    /// Rotations and shifts that are blocked are skipped, and the piece is
    /// dropped from wherever it got to. Returns the targeted placement, or
    /// `None` when the provider found none and the piece was dropped in place.
    pub fn place_piece(&self, session: &mut GameSession) -> Result<Option<Placement>, ActionError> {
        let piece = session.falling_piece().ok_or(ActionError::NoFallingPiece)?;
        let target = self.provider.best_placement(session.field().board(), piece.kind());

        if let Some(target) = target {
            for _ in 0..piece.kind().rotation_count() {
                if session.falling_piece().is_some_and(|p| p.rotation() == target.rotation) {
                    break;
                }
                if session.try_rotate().is_err() {
                    break;
                }
            }
            while let Some(piece) = session.falling_piece() {
                let moved = match target.x.cmp(&piece.position().x()) {
                    Ordering::Less => session.try_move_left(),
                    Ordering::Greater => session.try_move_right(),
                    Ordering::Equal => break,
                };
                if moved.is_err() {
                    break;
                }
            }
        }
        let rows = session.hard_drop()?;
        trace!(?target, rows, "piece placed");
        Ok(target)
    }

    /// Plays until game over or until `piece_limit` pieces have been locked.
    ///
    /// Pending line clears are acknowledged immediately.
    pub fn run(&self, session: &mut GameSession, piece_limit: usize) -> AutoplaySummary {
        session.start();
        while session.session_state().is_playing() && session.stats().completed_pieces() < piece_limit
        {
            if session.is_resolving() {
                session.complete_line_clear();
                continue;
            }
            if session.tick(self.frame).is_some() && session.falling_piece().is_none() {
                // gravity locked the piece
                continue;
            }
            if self.place_piece(session).is_err() {
                break;
            }
        }
        if session.is_resolving() {
            session.complete_line_clear();
        }

        let stats = session.stats();
        let summary = AutoplaySummary {
            pieces: stats.completed_pieces(),
            score: stats.score(),
            lines: stats.total_cleared_lines(),
            level: stats.level(),
            game_over: session.session_state().is_game_over(),
        };
        debug!(?summary, "autoplay finished");
        summary
    }
}
