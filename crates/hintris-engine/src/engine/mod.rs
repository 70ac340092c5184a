//! Game rules layered on top of the core board and pieces.
//!
//! - [`GameField`] - board, falling piece, piece queue and hold slot
//! - [`GameSession`] - state machine, gravity, scoring, hints and events
//! - [`GameStats`] - score, lines, level and drop interval
//! - [`LineClear`] - full rows detected after a lock, removed on acknowledgment
//! - [`PieceQueue`] - the three upcoming pieces and the held piece
//! - [`HintProvider`] - seam for the placement search
//!
//! # Game Flow
//!
//! 1. Create a [`GameSession`] and call [`GameSession::start`]
//! 2. Feed elapsed time to [`GameSession::tick`] and forward player commands
//! 3. When a lock fills rows, animate [`GameSession::pending_line_clear`] and
//!    then call [`GameSession::complete_line_clear`]
//! 4. Repeat until a spawned piece overlaps the stack
//!
//! # Example
//!
//! ```
//! use hintris_engine::{GameSession, SessionState};
//!
//! let mut session = GameSession::new();
//! session.start();
//! session.try_move_left().ok();
//! session.try_rotate().ok();
//! session.hard_drop().unwrap();
//!
//! if session.pending_line_clear().is_some() {
//!     session.complete_line_clear();
//! }
//! assert_eq!(session.session_state(), SessionState::Playing);
//! assert_eq!(session.stats().completed_pieces(), 1);
//! ```

pub use self::{
    game_event::*, game_field::*, game_session::*, game_snapshot::*, game_stats::*, hint::*,
    line_clear::*, piece_queue::*,
};

mod game_event;
mod game_field;
mod game_session;
mod game_snapshot;
mod game_stats;
mod hint;
mod line_clear;
mod piece_queue;
