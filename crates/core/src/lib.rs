//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the rules and timing of the game. It has no dependency on
//! rendering, audio, files or the host's event loop, which makes it:
//!
//! - **Deterministic**: the same seed and the same input frames replay the same game
//! - **Testable**: every rule is reachable from plain unit tests
//! - **Portable**: a terminal, a window or a headless runner can all drive it
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid, occupancy test, full-row scan and compaction
//! - [`shapes`]: offsets and rotation period for each shape
//! - [`piece`]: the falling [`Tetromino`] with its rollback snapshot
//! - [`resolver`]: rollback-based move/rotation legality
//! - [`auto_shift`]: DAS/ARR horizontal repeat
//! - [`gravity`]: level speed table and fractional fall accumulator
//! - [`scoring`] and [`records`]: line-clear points, levels and high scores
//! - [`animation`]: lock flash and line dissolve, which pause gameplay while they play
//! - [`rng`]: uniform next-shape generator
//! - [`game`]: the [`Game`] state machine tying it all together
//!
//! # Game Rules
//!
//! Classic rules rather than modern guideline ones:
//!
//! - **Uniform randomizer**: every shape is an independent draw, no 7-bag
//! - **No wall kicks**: a rotation that collides is simply rejected
//! - **No hard drop, hold or lock delay**: a piece locks the moment it cannot fall
//! - **Scoring**: 40/100/300/1200 × (level + 1), plus a small soft-drop bonus
//!
//! # Example
//!
//! ```
//! use boom_tetris_core::{Game, GameConfig};
//! use boom_tetris_core::types::{GameMode, InputFrame, Scene, TICK_MS};
//!
//! let mut game = Game::new(GameConfig::with_seed(12345)).unwrap();
//! game.start(0, GameMode::Normal).unwrap();
//!
//! let input = InputFrame { move_left: true, ..InputFrame::default() };
//! game.tick(&input, TICK_MS);
//!
//! assert_eq!(game.scene(), Scene::InGame);
//! assert_eq!(game.active().map(|p| p.position.x), Some(4));
//! ```
//!
//! # Timing
//!
//! Call [`Game::tick`] once per rendered frame with the elapsed milliseconds.
//! Gravity advances once per call; DAS/ARR use the elapsed time.

pub mod animation;
pub mod auto_shift;
pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod gravity;
pub mod piece;
pub mod records;
pub mod resolver;
pub mod rng;
pub mod scoring;
pub mod shapes;
pub mod snapshot;

pub use boom_tetris_types as types;

// Re-export commonly used types for convenience
pub use animation::{Animation, AnimationQueue};
pub use auto_shift::{AutoShift, ShiftPulses};
pub use board::{Board, FullRows};
pub use config::GameConfig;
pub use error::GameError;
pub use game::{Game, GameEvents};
pub use gravity::{effective_gravity, gravity_for_level, GravityAccumulator};
pub use piece::Tetromino;
pub use records::Records;
pub use resolver::{attempt_mutation, fits, resolve_collision};
pub use rng::{ShapeGenerator, SimpleRng};
pub use scoring::{LineClearOutcome, ScoreBoard};
pub use shapes::{shape_cells, ShapeDef, SHAPE_TABLE};
pub use snapshot::{ActiveSnapshot, AnimationSnapshot, GameSnapshot};
