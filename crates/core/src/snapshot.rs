//! Render-facing view of a game
//!
//! Everything a renderer or sound layer needs for one frame, copied out of
//! [`Game`](crate::Game) so the host never holds a borrow across its draw call.

use serde::{Deserialize, Serialize};

use crate::piece::Tetromino;
use crate::records::Records;
use crate::types::{
    AnimationKind, GameMode, GameOverReason, Orientation, Scene, Shape, Vec2, BOARD_HEIGHT,
    BOARD_WIDTH,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActiveSnapshot {
    pub shape: Shape,
    pub orientation: Orientation,
    pub position: Vec2,
    pub cells: [Vec2; 4],
    pub paint: u8,
}

impl From<Tetromino> for ActiveSnapshot {
    fn from(value: Tetromino) -> Self {
        Self {
            shape: value.shape,
            orientation: value.orientation,
            position: value.position,
            cells: value.cells(),
            paint: value.paint(),
        }
    }
}

/// Head of the animation queue.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimationSnapshot {
    pub kind: AnimationKind,
    pub progress: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// 0 = empty, otherwise paint index + 1
    pub board: [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<ActiveSnapshot>,
    pub next_shape: Shape,
    pub animation: Option<AnimationSnapshot>,
    pub scene: Scene,
    pub mode: GameMode,
    pub score: u32,
    pub level: u32,
    pub start_level: u32,
    pub lines: u32,
    pub lines_this_level: u32,
    pub elapsed_ms: u32,
    pub seed: u32,
    pub records: Records,
    pub game_over_reason: Option<GameOverReason>,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn playable(&self) -> bool {
        self.scene == Scene::InGame && self.animation.is_none()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            next_shape: Shape::L,
            animation: None,
            scene: Scene::MainMenu,
            mode: GameMode::Normal,
            score: 0,
            level: 0,
            start_level: 0,
            lines: 0,
            lines_this_level: 0,
            elapsed_ms: 0,
            seed: 0,
            records: Records::default(),
            game_over_reason: None,
        }
    }
}
