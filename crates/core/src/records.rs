//! In-memory high-score records
//!
//! The score-file collaborator loads these before a session and saves them
//! afterwards; the core only compares against and updates the values.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Records {
    pub high_score: u32,
    /// Fastest forty-lines completion, if any.
    pub best_forty_lines_ms: Option<u32>,
}

impl Records {
    pub fn new(high_score: u32, best_forty_lines_ms: Option<u32>) -> Self {
        Self {
            high_score,
            best_forty_lines_ms,
        }
    }

    /// Keep `score` if it beats the high score. Returns true on a new record.
    pub fn record_score(&mut self, score: u32) -> bool {
        if score > self.high_score {
            self.high_score = score;
            return true;
        }
        false
    }

    /// Keep `elapsed_ms` if it beats the best forty-lines time. Returns true on a new record.
    pub fn record_forty_lines(&mut self, elapsed_ms: u32) -> bool {
        match self.best_forty_lines_ms {
            Some(best) if best <= elapsed_ms => false,
            _ => {
                self.best_forty_lines_ms = Some(elapsed_ms);
                true
            }
        }
    }
}
