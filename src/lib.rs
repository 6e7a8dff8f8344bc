//! Boom Tetris (workspace facade crate).
//!
//! Re-exports the workspace crates under one name so hosts, integration tests and
//! benches can use `boom_tetris::{core, input, types}`.

pub use boom_tetris_core as core;
pub use boom_tetris_input as input;
pub use boom_tetris_types as types;
