//! Scoring of a board after a hypothetical placement.
//!
//! The score is a plain weighted sum of five independent terms. Higher is
//! better:
//!
//! ```text
//! score = -10·max_height - 2·total_height
//!         - 50·holes
//!         + 100·completed_rows
//!         - 5·bumpiness
//!         + 2·contacts
//! ```
//!
//! Completed rows are counted on the board as stamped, before any clearing.

use std::fmt;

use serde::Serialize;

use crate::board_analysis::BoardAnalysis;

pub const MAX_HEIGHT_WEIGHT: i32 = -10;
pub const TOTAL_HEIGHT_WEIGHT: i32 = -2;
pub const HOLE_WEIGHT: i32 = -50;
pub const COMPLETED_ROW_WEIGHT: i32 = 100;
pub const BUMPINESS_WEIGHT: i32 = -5;
pub const CONTACT_WEIGHT: i32 = 2;

/// Assigns a score to a board (higher is better).
pub trait BoardEvaluator: fmt::Debug {
    fn evaluate(&self, analysis: &BoardAnalysis) -> i32;
}

/// Each weighted term of [`HeuristicEvaluator`], kept apart for inspection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EvaluationBreakdown {
    pub height: i32,
    pub holes: i32,
    pub completed_rows: i32,
    pub bumpiness: i32,
    pub contacts: i32,
}

impl EvaluationBreakdown {
    #[must_use]
    pub fn total(&self) -> i32 {
        self.height + self.holes + self.completed_rows + self.bumpiness + self.contacts
    }
}

/// The fixed five-term heuristic used for hints.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeuristicEvaluator;

impl HeuristicEvaluator {
    #[must_use]
    pub fn breakdown(&self, analysis: &BoardAnalysis) -> EvaluationBreakdown {
        EvaluationBreakdown {
            height: height_term(analysis),
            holes: hole_term(analysis),
            completed_rows: completed_row_term(analysis),
            bumpiness: bumpiness_term(analysis),
            contacts: contact_term(analysis),
        }
    }
}

impl BoardEvaluator for HeuristicEvaluator {
    #[inline]
    fn evaluate(&self, analysis: &BoardAnalysis) -> i32 {
        self.breakdown(analysis).total()
    }
}

#[must_use]
pub fn height_term(analysis: &BoardAnalysis) -> i32 {
    MAX_HEIGHT_WEIGHT * i32::from(analysis.max_height())
        + TOTAL_HEIGHT_WEIGHT * i32::from(analysis.total_height())
}

#[must_use]
pub fn hole_term(analysis: &BoardAnalysis) -> i32 {
    HOLE_WEIGHT * i32::from(analysis.num_holes())
}

#[must_use]
pub fn completed_row_term(analysis: &BoardAnalysis) -> i32 {
    COMPLETED_ROW_WEIGHT * i32::from(analysis.completed_rows())
}

#[must_use]
pub fn bumpiness_term(analysis: &BoardAnalysis) -> i32 {
    BUMPINESS_WEIGHT * i32::from(analysis.bumpiness())
}

#[must_use]
pub fn contact_term(analysis: &BoardAnalysis) -> i32 {
    CONTACT_WEIGHT * i32::from(analysis.contacts())
}

#[cfg(test)]
mod tests {
    use hintris_engine::Board;

    use super::*;

    fn analyze(art: &str) -> BoardAnalysis {
        BoardAnalysis::from_board(Board::from_ascii(art))
    }

    #[test]
    fn test_empty_board_scores_zero() {
        let analysis = BoardAnalysis::from_board(Board::EMPTY);
        assert_eq!(
            HeuristicEvaluator.breakdown(&analysis),
            EvaluationBreakdown::default()
        );
        assert_eq!(HeuristicEvaluator.evaluate(&analysis), 0);
    }

    #[test]
    fn test_terms() {
        let analysis = analyze(
            "
            #.........
            ..........
            #########.
            ",
        );
        // heights [3,1,1,1,1,1,1,1,1,0]
        assert_eq!(height_term(&analysis), -10 * 3 - 2 * 11);
        assert_eq!(hole_term(&analysis), -50);
        assert_eq!(completed_row_term(&analysis), 0);
        assert_eq!(bumpiness_term(&analysis), -5 * 3);
        // bottom row: 9 floor + 9 left + 8 right, top cell: left wall only
        assert_eq!(contact_term(&analysis), 2 * 27);

        let breakdown = HeuristicEvaluator.breakdown(&analysis);
        assert_eq!(breakdown.total(), -52 - 50 - 15 + 54);
        assert_eq!(HeuristicEvaluator.evaluate(&analysis), breakdown.total());
    }

    #[test]
    fn test_completed_rows_are_rewarded() {
        let analysis = analyze("##########");
        assert_eq!(completed_row_term(&analysis), 100);
    }

    #[test]
    fn test_holes_cost_more_than_height() {
        let covered = analyze(
            "
            #.........
            ..........
            ",
        );
        let open = analyze(
            "
            #.........
            #.........
            ",
        );
        assert!(HeuristicEvaluator.evaluate(&open) > HeuristicEvaluator.evaluate(&covered));
    }
}
