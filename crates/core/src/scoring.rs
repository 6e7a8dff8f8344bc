//! Scoring module - Classic Nintendo line-clear scoring and level progression
//!
//! - Line clears score `LINE_SCORES[lines] * (level + 1)`.
//! - Soft drop adds a small bonus when the piece locks.
//! - The first level-up from the start level needs `(start_level + 1) * 10` lines;
//!   every later one needs `LINES_PER_LEVEL`.

use crate::types::{LINES_PER_LEVEL, LINE_SCORES};

/// Points for clearing `lines` rows at `level` (0-based).
/// Returns 0 for anything outside 1..=4.
pub fn line_clear_points(lines: u32, level: u32) -> u32 {
    if lines == 0 || lines > 4 {
        return 0;
    }
    LINE_SCORES[lines as usize].saturating_mul(level + 1)
}

/// Bonus for `height` rows soft dropped.
///
/// Two-digit encoding: the low digit is `height % 16` (one point per row) and
/// each completed group of 16 rows is worth ten.
///
/// ```
/// use boom_tetris_core::scoring::soft_drop_bonus;
///
/// assert_eq!(soft_drop_bonus(5), 5);
/// assert_eq!(soft_drop_bonus(16), 10);
/// assert_eq!(soft_drop_bonus(19), 13);
/// ```
pub fn soft_drop_bonus(height: u32) -> u32 {
    height % 16 + ((height / 16) % 16) * 10
}

/// Lines needed on `level` before advancing.
pub fn level_advance_threshold(level: u32, start_level: u32) -> u32 {
    if level == start_level {
        (level + 1) * LINES_PER_LEVEL
    } else {
        LINES_PER_LEVEL
    }
}

/// Result of applying one completed line clear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineClearOutcome {
    pub points: u32,
    pub leveled_up: bool,
}

/// Score and level counters of one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreBoard {
    pub score: u32,
    pub level: u32,
    pub start_level: u32,
    pub lines_this_level: u32,
    pub total_lines: u32,
}

impl ScoreBoard {
    pub fn new(start_level: u32) -> Self {
        Self {
            level: start_level,
            start_level,
            ..Self::default()
        }
    }

    /// Score a clear of `lines` rows at the current level, then advance the level
    /// if the threshold is reached.
    pub fn apply_line_clear(&mut self, lines: u32) -> LineClearOutcome {
        let points = line_clear_points(lines, self.level);
        self.score = self.score.saturating_add(points);
        self.lines_this_level += lines;
        self.total_lines += lines;

        let mut leveled_up = false;
        if self.lines_this_level >= level_advance_threshold(self.level, self.start_level) {
            self.level += 1;
            self.lines_this_level = 0;
            leveled_up = true;
        }

        LineClearOutcome { points, leveled_up }
    }

    /// Add the soft-drop bonus for `height` rows. Returns the points added.
    pub fn apply_soft_drop(&mut self, height: u32) -> u32 {
        let points = soft_drop_bonus(height);
        self.score = self.score.saturating_add(points);
        points
    }
}
