//! Press/release tracking for per-tick input frames.
//!
//! Collects key events between ticks and hands the game one [`InputFrame`] per
//! tick. Terminals that never report key releases are handled with a timeout:
//! a held key that sees no press or repeat event for `key_release_timeout_ms`
//! of game time is treated as released.

use crossterm::event::{KeyEvent, KeyEventKind};
use log::trace;

use crate::map::key_to_logical;
use crate::types::{InputFrame, LogicalKey};

// In terminals without key-release events, a short timeout prevents a single tap
// from turning into a sustained "held" state that triggers DAS/ARR repeats.
pub const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 150;

const KEY_COUNT: usize = LogicalKey::ALL.len();

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyTracker {
    held: [bool; KEY_COUNT],
    pressed: [bool; KEY_COUNT],
    since_seen_ms: [u32; KEY_COUNT],
    key_release_timeout_ms: Option<u32>,
}

impl KeyTracker {
    pub fn new() -> Self {
        Self {
            held: [false; KEY_COUNT],
            pressed: [false; KEY_COUNT],
            since_seen_ms: [0; KEY_COUNT],
            key_release_timeout_ms: Some(DEFAULT_KEY_RELEASE_TIMEOUT_MS),
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = Some(timeout_ms);
        self
    }

    /// Rely on release events only.
    pub fn without_release_timeout(mut self) -> Self {
        self.key_release_timeout_ms = None;
        self
    }

    pub fn key_release_timeout_ms(&self) -> Option<u32> {
        self.key_release_timeout_ms
    }

    /// Key went down. Edge-triggered keys fire once per press.
    pub fn press(&mut self, key: LogicalKey) {
        let i = key.index();
        self.held[i] = true;
        self.pressed[i] = true;
        self.since_seen_ms[i] = 0;
    }

    /// Auto-repeat of a key that is already down: keeps it held without a new edge.
    pub fn repeat(&mut self, key: LogicalKey) {
        let i = key.index();
        self.held[i] = true;
        self.since_seen_ms[i] = 0;
    }

    pub fn release(&mut self, key: LogicalKey) {
        self.held[key.index()] = false;
    }

    pub fn is_held(&self, key: LogicalKey) -> bool {
        self.held[key.index()]
    }

    /// Feed a terminal key event. Returns the logical key it mapped to, if any.
    pub fn handle_event(&mut self, event: KeyEvent) -> Option<LogicalKey> {
        let key = key_to_logical(event)?;
        match event.kind {
            KeyEventKind::Press => self.press(key),
            KeyEventKind::Repeat => self.repeat(key),
            KeyEventKind::Release => self.release(key),
        }
        trace!("{:?} {}", event.kind, key.as_str());
        Some(key)
    }

    /// Build the input for the next tick and advance the release timeout.
    ///
    /// A level-triggered key pressed and released between two ticks still shows
    /// as held for one frame, so quick taps are not lost.
    pub fn frame(&mut self, elapsed_ms: u32) -> InputFrame {
        let mut frame = InputFrame::default();
        for key in LogicalKey::ALL {
            let i = key.index();
            let active = if key.is_level_triggered() {
                self.held[i] || self.pressed[i]
            } else {
                self.pressed[i]
            };
            frame.set(key, active);
        }
        self.pressed = [false; KEY_COUNT];

        // Auto-release when terminal does not emit release events.
        if let Some(timeout) = self.key_release_timeout_ms {
            for i in 0..KEY_COUNT {
                if !self.held[i] {
                    continue;
                }
                self.since_seen_ms[i] = self.since_seen_ms[i].saturating_add(elapsed_ms);
                if self.since_seen_ms[i] > timeout {
                    self.held[i] = false;
                }
            }
        }

        frame
    }

    /// Drop all held keys and pending edges.
    pub fn reset(&mut self) {
        self.held = [false; KEY_COUNT];
        self.pressed = [false; KEY_COUNT];
        self.since_seen_ms = [0; KEY_COUNT];
    }
}

impl Default for KeyTracker {
    fn default() -> Self {
        Self::new()
    }
}
