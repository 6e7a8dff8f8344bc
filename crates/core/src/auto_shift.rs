//! Delayed auto shift (DAS) and auto repeat rate (ARR)
//!
//! Converts the held state of the left/right inputs into discrete one-column
//! shift pulses. A fresh press shifts immediately; holding waits `das_ms`, then
//! repeats every `arr_ms`. Timing runs on integer milliseconds and any overshoot
//! of the repeat timer carries into the next interval, so the repeat rate does
//! not drift with the host's frame length.

/// Shift pulses for one tick. At most one per direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShiftPulses {
    pub left: bool,
    pub right: bool,
}

impl ShiftPulses {
    pub fn any(&self) -> bool {
        self.left || self.right
    }
}

/// DAS/ARR state machine shared by both horizontal directions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoShift {
    das_ms: u32,
    arr_ms: u32,
    das_timer: i64,
    arr_timer: i64,
    left_held: bool,
    right_held: bool,
}

impl AutoShift {
    pub fn new(das_ms: u32, arr_ms: u32) -> Self {
        Self {
            das_ms,
            arr_ms,
            das_timer: 0,
            arr_timer: 0,
            left_held: false,
            right_held: false,
        }
    }

    pub fn das_ms(&self) -> u32 {
        self.das_ms
    }

    pub fn arr_ms(&self) -> u32 {
        self.arr_ms
    }

    /// Advance by one tick.
    ///
    /// Holding both directions cancels both: no pulse, and a later single-direction
    /// hold counts as a new press.
    pub fn update(&mut self, left_down: bool, right_down: bool, elapsed_ms: u32) -> ShiftPulses {
        let left = left_down && !right_down;
        let right = right_down && !left_down;
        let mut pulses = ShiftPulses::default();

        if !left && !right {
            self.left_held = false;
            self.right_held = false;
            self.arr_timer = 0;
            return pulses;
        }

        let fresh_press = (left && !self.left_held) || (right && !self.right_held);
        self.left_held = left;
        self.right_held = right;

        let fire = if fresh_press {
            self.das_timer = i64::from(self.das_ms);
            self.arr_timer = 0;
            true
        } else {
            self.repeat(i64::from(elapsed_ms))
        };

        if fire {
            pulses.left = left;
            pulses.right = right;
        }
        pulses
    }

    /// Held-key branch: count down DAS, then fire on the ARR timer.
    fn repeat(&mut self, elapsed: i64) -> bool {
        if self.das_timer > 0 {
            self.das_timer -= elapsed;
            if self.das_timer > 0 {
                return false;
            }
        }

        let arr = i64::from(self.arr_ms);
        let fire = self.arr_timer <= 0;
        if fire {
            // Keep at most one interval of overshoot so a long frame cannot queue a burst.
            self.arr_timer = self.arr_timer.max(-arr) + arr;
        }
        self.arr_timer -= elapsed;
        fire
    }

    /// Forget held keys and timers.
    pub fn reset(&mut self) {
        self.das_timer = 0;
        self.arr_timer = 0;
        self.left_held = false;
        self.right_held = false;
    }
}
