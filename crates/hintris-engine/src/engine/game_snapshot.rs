use serde::Serialize;

use crate::core::{
    board::Board,
    piece::{Piece, PieceKind},
};

use super::{SessionState, hint::Placement};

/// Read-only view of a session for renderers and drivers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    pub state: SessionState,
    pub board: Board,
    pub falling_piece: Option<Piece>,
    pub ghost_y: Option<i32>,
    pub held_piece: Option<PieceKind>,
    pub can_hold: bool,
    pub next_pieces: Vec<PieceKind>,
    pub score: usize,
    pub level: usize,
    pub lines: usize,
    pub completed_pieces: usize,
    pub hints_remaining: usize,
    pub drop_interval_ms: u64,
    pub hint: Option<Placement>,
    pub resolving: bool,
    pub clearing_rows: Vec<usize>,
}
