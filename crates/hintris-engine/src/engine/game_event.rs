use serde::Serialize;

use crate::core::piece::Piece;

use super::hint::Placement;

/// Notable things that happened inside a session.
///
/// Events queue up until the caller takes them with
/// [`GameSession::drain_events`](super::GameSession::drain_events).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, derive_more::IsVariant)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    /// A piece was written into the board.
    PieceLocked { piece: Piece },
    /// A lock filled rows; they stay on the board until
    /// [`GameSession::complete_line_clear`](super::GameSession::complete_line_clear).
    LineClearPending { rows: Vec<usize> },
    /// Full rows were removed after the line-clear handoff.
    LinesCleared {
        rows: Vec<usize>,
        count: usize,
        points: usize,
    },
    /// A spawned piece overlapped the stack.
    GameOver {
        score: usize,
        lines: usize,
        level: usize,
    },
    /// A hint was granted; the caller should dismiss it after
    /// [`HINT_DISPLAY_DURATION`](super::HINT_DISPLAY_DURATION).
    HintShown { placement: Placement },
}
