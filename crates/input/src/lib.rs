//! Terminal input module (engine-facing).
//!
//! This crate is independent of any UI framework. It maps `crossterm` key
//! events onto [`crate::types::LogicalKey`] and collects them into one
//! [`crate::types::InputFrame`] per game tick, including in terminals that
//! never report key releases.

pub mod map;
pub mod tracker;

pub use boom_tetris_types as types;

pub use map::{key_to_logical, should_quit};
pub use tracker::{KeyTracker, DEFAULT_KEY_RELEASE_TIMEOUT_MS};
