use serde::Serialize;

use crate::core::board::{Board, FullRows};

use super::GameStats;

/// A detected set of full rows waiting to be removed.
///
/// Detection and removal are separate steps so a renderer can animate the
/// rows between them; while a `LineClear` is pending the session accepts no
/// movement, gravity or hints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineClear {
    rows: FullRows,
}

/// Outcome of applying a [`LineClear`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LineClearResult {
    pub count: usize,
    pub points: usize,
    pub level: usize,
}

impl LineClear {
    /// Scans the board bottom-up; `None` when no row is full.
    #[must_use]
    pub fn detect(board: &Board) -> Option<Self> {
        let rows = board.full_rows();
        (!rows.is_empty()).then_some(Self { rows })
    }

    /// Full row indices, bottom row first.
    #[must_use]
    pub fn rows(&self) -> &[usize] {
        &self.rows
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.rows.len()
    }

    /// Removes the rows from the board and updates lines, score and level.
    pub fn apply(&self, board: &mut Board, stats: &mut GameStats) -> LineClearResult {
        board.remove_rows(&self.rows);
        let points = stats.complete_line_clear(self.count());
        LineClearResult {
            count: self.count(),
            points,
            level: stats.level(),
        }
    }
}
