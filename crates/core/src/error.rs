//! Errors for fallible game setup
//!
//! Gameplay itself never fails: a rejected move is a normal outcome and game over
//! is a scene. These errors only cover configuration and misuse of scene transitions.

use thiserror::Error;

use crate::config::MAX_TIMING_MS;
use crate::types::{Scene, MAX_START_LEVEL};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("start level {0} is out of range (0-{max})", max = MAX_START_LEVEL)]
    InvalidStartLevel(u32),
    #[error("{name} must be between 1 and {max} ms", max = MAX_TIMING_MS)]
    InvalidTiming { name: &'static str },
    #[error("cannot {action} from the {from:?} scene")]
    SceneTransition { action: &'static str, from: Scene },
}
