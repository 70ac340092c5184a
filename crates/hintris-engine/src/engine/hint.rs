use std::time::Duration;

use serde::Serialize;

use crate::core::{
    board::Board,
    piece::{Piece, PieceKind, PiecePosition, PieceRotation},
};

/// Hints granted per session. Never refilled until reset.
pub const HINTS_PER_SESSION: usize = 5;

/// How long a renderer should keep a hint on screen before calling
/// [`GameSession::dismiss_hint`](super::GameSession::dismiss_hint).
pub const HINT_DISPLAY_DURATION: Duration = Duration::from_millis(3000);

/// A suggested resting place for the falling piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Placement {
    pub x: i32,
    pub y: i32,
    pub rotation: PieceRotation,
}

impl Placement {
    #[must_use]
    pub fn to_piece(self, kind: PieceKind) -> Piece {
        Piece::with_state(kind, self.rotation, PiecePosition::new(self.x, self.y))
    }
}

impl From<Piece> for Placement {
    fn from(piece: Piece) -> Self {
        Self {
            x: piece.position().x(),
            y: piece.position().y(),
            rotation: piece.rotation(),
        }
    }
}

/// Source of placement hints.
///
/// Implemented by the search in `hintris-evaluator`, so the session can
/// grant hints without depending on any particular heuristic.
pub trait HintProvider {
    /// Returns the best landing spot for `kind` on `board`, or `None` when
    /// the piece fits nowhere.
    fn best_placement(&self, board: &Board, kind: PieceKind) -> Option<Placement>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placement_round_trips_through_piece() {
        let piece = Piece::with_state(PieceKind::L, PieceRotation::new(3), PiecePosition::new(-1, 17));
        let placement = Placement::from(piece);
        assert_eq!(placement.to_piece(PieceKind::L), piece);
    }

    #[test]
    fn test_placement_serialization() {
        let placement = Placement {
            x: 4,
            y: 18,
            rotation: PieceRotation::new(0),
        };
        assert_eq!(
            serde_json::to_value(placement).unwrap(),
            serde_json::json!({ "x": 4, "y": 18, "rotation": 0 })
        );
    }
}
