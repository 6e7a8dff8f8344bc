//! Gravity schedule and fractional fall accumulator
//!
//! Fall speed is expressed in cells per frame. Level `n` uses the NES frames-per-row
//! table below; levels past the end of the table stay at the last entry.
//!
//! | Levels | Frames per row |
//! |--------|----------------|
//! | 0-8 | 48, 43, 38, 33, 28, 23, 18, 13, 8 |
//! | 9 | 6 |
//! | 10-12 | 5 |
//! | 13-15 | 4 |
//! | 16-18 | 3 |
//! | 19-28 | 2 |
//! | 29+ | 1 |

use crate::types::SOFT_DROP_GRAVITY;

/// Frames needed to fall one row, indexed by level.
pub const FRAMES_PER_ROW: [u8; 30] = [
    48, 43, 38, 33, 28, 23, 18, 13, 8, 6, 5, 5, 5, 4, 4, 4, 3, 3, 3, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2,
    1,
];

/// Base gravity (cells per frame) at `level`, clamped to the last table entry.
pub fn gravity_for_level(level: u32) -> f32 {
    let idx = (level as usize).min(FRAMES_PER_ROW.len() - 1);
    1.0 / FRAMES_PER_ROW[idx] as f32
}

/// Gravity for this tick. Soft drop raises it to at least [`SOFT_DROP_GRAVITY`]
/// and never adds to the level's base value.
pub fn effective_gravity(base: f32, soft_drop: bool) -> f32 {
    if soft_drop {
        base.max(SOFT_DROP_GRAVITY)
    } else {
        base
    }
}

/// Fractional row accumulator ("budge").
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GravityAccumulator {
    budge: f32,
}

impl GravityAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one frame of gravity. Returns true when a one-row step should be attempted;
    /// the accumulator is emptied whenever that happens.
    pub fn advance(&mut self, gravity: f32) -> bool {
        self.budge += gravity;
        if self.budge.floor() > 0.0 {
            self.budge = 0.0;
            return true;
        }
        false
    }

    pub fn budge(&self) -> f32 {
        self.budge
    }

    pub fn reset(&mut self) {
        self.budge = 0.0;
    }
}
