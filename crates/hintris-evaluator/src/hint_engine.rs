//! Exhaustive placement search for hints.
//!
//! # How It Works
//!
//! 1. **Enumerate** - every rotation of the piece, every shape origin column
//!    from `-2` to `WIDTH + 1`
//! 2. **Land** - starting at row 0, move down while the piece fits, then
//!    step back one row; columns where the piece does not fit at row 0 are
//!    skipped
//! 3. **Score** - stamp the piece on a copy of the board and evaluate it
//! 4. **Select** - keep the strictly highest score, so the first candidate
//!    in rotation-major, column-ascending order wins ties
//!
//! The search looks at the current piece only: no hold, no lookahead, and no
//! paths that need sliding under overhangs.
//!
//! # Usage
//!
//! ```
//! use hintris_engine::{Board, PieceKind};
//! use hintris_evaluator::hint_engine::HintEngine;
//!
//! let engine = HintEngine::default();
//! let best = engine.search(&Board::EMPTY, PieceKind::O).unwrap();
//! assert_eq!(best.placement.y, 18);
//! ```

use std::ops::RangeInclusive;

use hintris_engine::{Board, HintProvider, PieceKind, PieceRotation, Placement, collides};
use serde::Serialize;
use tracing::trace;

use crate::{
    board_evaluator::{BoardEvaluator, HeuristicEvaluator},
    placement_analysis::PlacementAnalysis,
};

#[expect(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
const SEARCH_X_RANGE: RangeInclusive<i32> = -2..=Board::WIDTH as i32 + 1;

/// A candidate placement and its evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoredPlacement {
    pub placement: Placement,
    pub score: i32,
}

/// Finds the best landing spot for a piece with a [`BoardEvaluator`].
#[derive(Debug)]
pub struct HintEngine<'a> {
    evaluator: Box<dyn BoardEvaluator + 'a>,
}

impl Default for HintEngine<'_> {
    fn default() -> Self {
        Self::new(Box::new(HeuristicEvaluator))
    }
}

impl<'a> HintEngine<'a> {
    #[must_use]
    pub fn new(evaluator: Box<dyn BoardEvaluator + 'a>) -> Self {
        Self { evaluator }
    }

    /// Returns the highest scoring placement, or `None` if the piece fits nowhere.
    #[must_use]
    pub fn search(&self, board: &Board, kind: PieceKind) -> Option<ScoredPlacement> {
        let mut best: Option<ScoredPlacement> = None;
        for candidate in self.scored_placements(board, kind) {
            if best.is_none_or(|best| candidate.score > best.score) {
                best = Some(candidate);
            }
        }
        trace!(?kind, ?best, "placement search finished");
        best
    }

    /// Every reachable placement with its score, best first.
    ///
    /// Equal scores keep search order.
    #[must_use]
    pub fn rank(&self, board: &Board, kind: PieceKind) -> Vec<ScoredPlacement> {
        let mut ranked: Vec<_> = self.scored_placements(board, kind).collect();
        ranked.sort_by(|a, b| b.score.cmp(&a.score));
        ranked
    }

    fn scored_placements<'b>(
        &'b self,
        board: &'b Board,
        kind: PieceKind,
    ) -> impl Iterator<Item = ScoredPlacement> + 'b {
        candidate_placements(board, kind).map(move |placement| {
            let analysis = PlacementAnalysis::from_board(board, placement.to_piece(kind));
            ScoredPlacement {
                placement,
                score: self.evaluator.evaluate(analysis.board_analysis()),
            }
        })
    }
}

impl HintProvider for HintEngine<'_> {
    fn best_placement(&self, board: &Board, kind: PieceKind) -> Option<Placement> {
        self.search(board, kind).map(|best| best.placement)
    }
}

/// Landing placements in search order: rotation-major, then column ascending.
pub fn candidate_placements(board: &Board, kind: PieceKind) -> impl Iterator<Item = Placement> + '_ {
    kind.rotations().flat_map(move |rotation| {
        SEARCH_X_RANGE.filter_map(move |x| {
            landing_y(board, kind, rotation, x).map(|y| Placement { x, y, rotation })
        })
    })
}

/// Lowest row reachable by falling straight down from row 0.
fn landing_y(board: &Board, kind: PieceKind, rotation: PieceRotation, x: i32) -> Option<i32> {
    let mut y = 0;
    while !collides(board, kind, rotation, x, y) {
        y += 1;
    }
    let y = y - 1;
    (y >= 0).then_some(y)
}
