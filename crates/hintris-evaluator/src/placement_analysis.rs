//! The board as it would look with a candidate piece locked in place.
//!
//! Rows completed by the placement are left on the board; evaluators count
//! them through [`BoardAnalysis::completed_rows`] instead of seeing a
//! cleared board.

use hintris_engine::{Board, Piece, Placement};

use crate::board_analysis::BoardAnalysis;

#[derive(Debug)]
pub struct PlacementAnalysis {
    placement: Piece,
    board_analysis: BoardAnalysis,
}

impl PlacementAnalysis {
    #[must_use]
    pub fn from_board(before_placement: &Board, placement: Piece) -> Self {
        let mut board = before_placement.clone();
        board.fill_piece(placement);
        Self {
            placement,
            board_analysis: BoardAnalysis::from_board(board),
        }
    }

    #[must_use]
    pub fn placement(&self) -> Placement {
        Placement::from(self.placement)
    }

    #[must_use]
    pub fn board_analysis(&self) -> &BoardAnalysis {
        &self.board_analysis
    }
}
