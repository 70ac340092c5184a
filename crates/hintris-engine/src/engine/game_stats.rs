use std::time::Duration;

use serde::Serialize;

/// Score values for line clears.
///
/// Index corresponds to number of lines cleared simultaneously:
/// - 0 lines: 0 points
/// - 1 line: 100 points
/// - 2 lines: 300 points
/// - 3 lines: 500 points
/// - 4 lines: 800 points
pub const SCORE_TABLE: [usize; 5] = [0, 100, 300, 500, 800];

/// Points for each row a piece moves down by a soft drop (manual or gravity).
pub const SOFT_DROP_POINTS: usize = 1;
/// Points for each row a piece falls during a hard drop.
pub const HARD_DROP_POINTS_PER_ROW: usize = 2;

/// Lines needed to advance one level.
pub const LINES_PER_LEVEL: usize = 10;

/// Gravity interval at level 1.
pub const BASE_DROP_INTERVAL: Duration = Duration::from_millis(1000);
/// Interval reduction per level.
pub const DROP_INTERVAL_STEP: Duration = Duration::from_millis(50);
/// The interval never drops below this.
pub const MIN_DROP_INTERVAL: Duration = Duration::from_millis(100);

/// Gravity interval for a level: `max(100, 1000 - (level - 1) * 50)` ms.
#[must_use]
pub fn drop_interval_for_level(level: usize) -> Duration {
    let steps = u32::try_from(level.saturating_sub(1)).unwrap_or(u32::MAX);
    BASE_DROP_INTERVAL
        .saturating_sub(DROP_INTERVAL_STEP.saturating_mul(steps))
        .max(MIN_DROP_INTERVAL)
}

/// Session counters: score, lines, level and piece count.
///
/// # Scoring
///
/// - Line clears score per event from [`SCORE_TABLE`]; clearing more than
///   four rows at once scores as four
/// - Soft drops score [`SOFT_DROP_POINTS`] per row, hard drops
///   [`HARD_DROP_POINTS_PER_ROW`] per row
/// - No combo, back-to-back or T-spin bonuses
///
/// # Example
///
/// ```
/// use hintris_engine::GameStats;
///
/// let mut stats = GameStats::new();
/// stats.complete_piece_drop();
/// stats.complete_line_clear(4);
///
/// assert_eq!(stats.score(), 800);
/// assert_eq!(stats.level(), 1);
/// assert_eq!(stats.line_cleared_counter()[4], 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameStats {
    score: usize,
    completed_pieces: usize,
    total_cleared_lines: usize,
    line_cleared_counter: [usize; 5],
}

impl Default for GameStats {
    fn default() -> Self {
        Self::new()
    }
}

impl GameStats {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            score: 0,
            completed_pieces: 0,
            total_cleared_lines: 0,
            line_cleared_counter: [0; 5],
        }
    }

    #[must_use]
    pub const fn score(&self) -> usize {
        self.score
    }

    /// Current level, starting at 1 and rising every [`LINES_PER_LEVEL`] lines.
    #[must_use]
    pub const fn level(&self) -> usize {
        self.total_cleared_lines / LINES_PER_LEVEL + 1
    }

    #[must_use]
    pub fn drop_interval(&self) -> Duration {
        drop_interval_for_level(self.level())
    }

    /// Total number of pieces locked into the board.
    #[must_use]
    pub const fn completed_pieces(&self) -> usize {
        self.completed_pieces
    }

    #[must_use]
    pub const fn total_cleared_lines(&self) -> usize {
        self.total_cleared_lines
    }

    /// Histogram of locks by rows cleared.
    ///
    /// `[0]` counts locks that cleared nothing, `[1]` singles up to `[4]`
    /// tetrises.
    #[must_use]
    pub const fn line_cleared_counter(&self) -> &[usize; 5] {
        &self.line_cleared_counter
    }

    pub fn add_drop_points(&mut self, points: usize) {
        self.score += points;
    }

    /// Records a lock that cleared no rows.
    pub fn complete_piece_drop(&mut self) {
        self.completed_pieces += 1;
        self.line_cleared_counter[0] += 1;
    }

    /// Records the rows removed by one line clear and returns the points awarded.
    ///
    /// The piece that caused the clear must already have been counted with
    /// [`Self::complete_piece_drop`]; its zero-row histogram entry is moved
    /// to the right bucket here.
    pub fn complete_line_clear(&mut self, cleared_lines: usize) -> usize {
        if cleared_lines == 0 {
            return 0;
        }
        let bucket = cleared_lines.min(SCORE_TABLE.len() - 1);
        self.line_cleared_counter[0] = self.line_cleared_counter[0].saturating_sub(1);
        self.line_cleared_counter[bucket] += 1;
        self.total_cleared_lines += cleared_lines;
        let points = SCORE_TABLE[bucket];
        self.score += points;
        points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats_with_lines(lines: usize) -> GameStats {
        GameStats {
            total_cleared_lines: lines,
            ..GameStats::new()
        }
    }

    #[test]
    fn test_level_from_lines() {
        assert_eq!(stats_with_lines(0).level(), 1);
        assert_eq!(stats_with_lines(9).level(), 1);
        assert_eq!(stats_with_lines(10).level(), 2);
        assert_eq!(stats_with_lines(95).level(), 10);
    }

    #[test]
    fn test_drop_interval_per_level() {
        assert_eq!(drop_interval_for_level(1), Duration::from_millis(1000));
        assert_eq!(drop_interval_for_level(2), Duration::from_millis(950));
        assert_eq!(drop_interval_for_level(10), Duration::from_millis(550));
        assert_eq!(drop_interval_for_level(19), Duration::from_millis(100));
        assert_eq!(drop_interval_for_level(20), Duration::from_millis(100));
        assert_eq!(drop_interval_for_level(1000), Duration::from_millis(100));
    }

    #[test]
    fn test_drop_interval_is_non_increasing() {
        for level in 1..60 {
            let current = drop_interval_for_level(level);
            let next = drop_interval_for_level(level + 1);
            assert!(next <= current, "level {level}");
            assert!(next >= MIN_DROP_INTERVAL);
        }
    }

    #[test]
    fn test_line_clear_scores_per_event() {
        let mut stats = GameStats::new();
        stats.complete_piece_drop();
        assert_eq!(stats.complete_line_clear(2), 300);
        assert_eq!(stats.score(), 300);
        assert_eq!(stats.total_cleared_lines(), 2);
        assert_eq!(stats.line_cleared_counter(), &[0, 0, 1, 0, 0]);

        // two singles score less than one double
        let mut singles = GameStats::new();
        for _ in 0..2 {
            singles.complete_piece_drop();
            singles.complete_line_clear(1);
        }
        assert_eq!(singles.score(), 200);
        assert_eq!(singles.total_cleared_lines(), 2);
    }

    #[test]
    fn test_line_clear_caps_at_four_rows() {
        let mut stats = GameStats::new();
        stats.complete_piece_drop();
        assert_eq!(stats.complete_line_clear(5), 800);
        assert_eq!(stats.total_cleared_lines(), 5);
        assert_eq!(stats.line_cleared_counter()[4], 1);
    }

    #[test]
    fn test_drop_points() {
        let mut stats = GameStats::new();
        stats.add_drop_points(SOFT_DROP_POINTS);
        stats.add_drop_points(HARD_DROP_POINTS_PER_ROW * 17);
        assert_eq!(stats.score(), 35);
        assert_eq!(stats.completed_pieces(), 0);
    }
}
