//! Core types module - shared data structures and constants
//!
//! This crate defines the fundamental types used throughout the workspace.
//! Everything here is plain data: the simulation core, the input layer and any
//! renderer can depend on it without pulling in each other.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 is the top)
//! - **Spawn anchor**: (5, 0)
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Nominal host frame (~60 FPS) |
//! | `DEFAULT_DAS_MS` | 267 | Delay before horizontal auto-repeat |
//! | `DEFAULT_ARR_MS` | 70 | Interval between repeated shifts |
//! | `SOFT_DROP_GRAVITY` | 0.5 | Minimum fall speed while soft dropping (cells/frame) |
//!
//! Gravity is expressed in cells per frame and is advanced once per tick, so fall
//! speed is frame-driven. DAS/ARR are driven by the elapsed milliseconds the host
//! reports for each tick.
//!
//! # Examples
//!
//! ```
//! use boom_tetris_types::{Orientation, Shape, Vec2, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(Shape::from_str("t"), Some(Shape::T));
//! assert_eq!(Orientation::Up.step(1, 4), Orientation::Right);
//! assert_eq!(Vec2::new(1, 0).rotated(Orientation::Right), Vec2::new(0, 1));
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

use std::ops::Add;

use serde::{Deserialize, Serialize};

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Anchor cell of a freshly spawned piece
pub const SPAWN_POSITION: Vec2 = Vec2 { x: 5, y: 0 };

/// Nominal host frame interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// DAS (Delayed Auto Shift) delay in milliseconds.
pub const DEFAULT_DAS_MS: u32 = 267;

/// ARR (Auto Repeat Rate) in milliseconds.
pub const DEFAULT_ARR_MS: u32 = 70;

/// Fall speed floor while the soft-drop input is held, in cells per frame.
pub const SOFT_DROP_GRAVITY: f32 = 0.5;

/// Lines needed per level after the first level-up.
pub const LINES_PER_LEVEL: u32 = 10;

/// Highest level selectable from the main menu.
pub const MAX_START_LEVEL: u32 = 9;

/// Line goal of the forty-lines mode.
pub const FORTY_LINES_GOAL: u32 = 40;

/// Minimum length of the lock-in flash, in frames.
pub const LOCK_IN_BASE_FRAMES: u32 = 10;

/// Frames between two peel steps of the line-dissolve animation.
pub const DISSOLVE_FRAMES_PER_STEP: u32 = 4;

/// Line clear scoring table (Classic Nintendo scoring)
///
/// Base points for clearing N lines at level 0:
/// - 1 line: 40 points
/// - 2 lines: 100 points
/// - 3 lines: 300 points
/// - 4 lines: 1200 points
///
/// Points are multiplied by (level + 1).
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

/// A cell on the game board
///
/// - `None`: empty cell
/// - `Some(paint)`: occupied, painted with the given texture/palette index
pub type Cell = Option<u8>;

/// Integer board coordinate or offset. `y` grows downwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: i8,
    pub y: i8,
}

impl Vec2 {
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// Rotate an offset about the anchor in 90° steps.
    ///
    /// ```
    /// use boom_tetris_types::{Orientation, Vec2};
    ///
    /// let v = Vec2::new(2, 1);
    /// assert_eq!(v.rotated(Orientation::Up), Vec2::new(2, 1));
    /// assert_eq!(v.rotated(Orientation::Right), Vec2::new(-1, 2));
    /// assert_eq!(v.rotated(Orientation::Down), Vec2::new(-2, -1));
    /// assert_eq!(v.rotated(Orientation::Left), Vec2::new(1, -2));
    /// ```
    pub const fn rotated(self, orientation: Orientation) -> Self {
        match orientation {
            Orientation::Up => self,
            Orientation::Right => Self::new(-self.y, self.x),
            Orientation::Down => Self::new(-self.x, -self.y),
            Orientation::Left => Self::new(self.y, -self.x),
        }
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x + other.x, self.y + other.y)
    }
}

/// The seven tetromino shapes
///
/// Declaration order is the shape table order and the order the uniform
/// generator indexes into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shape {
    L,
    J,
    Z,
    S,
    I,
    T,
    O,
}

impl Shape {
    pub const ALL: [Shape; 7] = [
        Shape::L,
        Shape::J,
        Shape::Z,
        Shape::S,
        Shape::I,
        Shape::T,
        Shape::O,
    ];

    /// Parse shape from string (case-insensitive)
    ///
    /// ```
    /// use boom_tetris_types::Shape;
    ///
    /// assert_eq!(Shape::from_str("i"), Some(Shape::I));
    /// assert_eq!(Shape::from_str("Square"), Some(Shape::O));
    /// assert_eq!(Shape::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "l" => Some(Shape::L),
            "j" => Some(Shape::J),
            "z" => Some(Shape::Z),
            "s" => Some(Shape::S),
            "i" => Some(Shape::I),
            "t" => Some(Shape::T),
            "o" | "square" => Some(Shape::O),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Shape::L => "l",
            Shape::J => "j",
            Shape::Z => "z",
            Shape::S => "s",
            Shape::I => "i",
            Shape::T => "t",
            Shape::O => "o",
        }
    }

    /// Index of the block texture column a renderer paints this shape with.
    pub fn paint_index(&self) -> u8 {
        match self {
            Shape::J | Shape::S => 0,
            Shape::L | Shape::Z => 1,
            Shape::O => 2,
            Shape::I | Shape::T => 3,
        }
    }
}

/// Orientation of a piece, as a quarter-turn count clockwise from spawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Orientation {
    #[default]
    Up,
    Right,
    Down,
    Left,
}

impl Orientation {
    pub const fn index(self) -> u8 {
        match self {
            Orientation::Up => 0,
            Orientation::Right => 1,
            Orientation::Down => 2,
            Orientation::Left => 3,
        }
    }

    /// Build from a quarter-turn count (taken mod 4).
    pub const fn from_index(index: u8) -> Self {
        match index % 4 {
            0 => Orientation::Up,
            1 => Orientation::Right,
            2 => Orientation::Down,
            _ => Orientation::Left,
        }
    }

    /// Advance by `delta` quarter turns, wrapping at `period`.
    ///
    /// ```
    /// use boom_tetris_types::Orientation;
    ///
    /// assert_eq!(Orientation::Left.step(1, 4), Orientation::Up);
    /// assert_eq!(Orientation::Right.step(1, 2), Orientation::Up);
    /// assert_eq!(Orientation::Up.step(-1, 2), Orientation::Right);
    /// assert_eq!(Orientation::Up.step(1, 1), Orientation::Up);
    /// ```
    pub fn step(self, delta: i8, period: u8) -> Self {
        let period = period.clamp(1, 4) as i16;
        let next = (self.index() as i16 + delta as i16).rem_euclid(period);
        Self::from_index(next as u8)
    }
}

/// Top-level state of a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scene {
    MainMenu,
    InGame,
    Paused,
    GameOver,
}

/// Game rules selected from the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GameMode {
    /// Play until the stack tops out.
    #[default]
    Normal,
    /// Race to clear `FORTY_LINES_GOAL` lines.
    FortyLines,
}

impl GameMode {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "normal" | "endless" => Some(GameMode::Normal),
            "fortylines" | "forty-lines" | "40lines" | "40" => Some(GameMode::FortyLines),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::Normal => "normal",
            GameMode::FortyLines => "fortyLines",
        }
    }
}

/// Why a game reached the GameOver scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOverReason {
    /// A new piece collided at the spawn anchor.
    ToppedOut,
    /// Forty-lines goal reached.
    GoalReached,
}

/// Logical inputs, independent of any physical device binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogicalKey {
    MoveLeft,
    MoveRight,
    RotateCw,
    RotateCcw,
    SoftDrop,
    Pause,
    Restart,
}

impl LogicalKey {
    pub const ALL: [LogicalKey; 7] = [
        LogicalKey::MoveLeft,
        LogicalKey::MoveRight,
        LogicalKey::RotateCw,
        LogicalKey::RotateCcw,
        LogicalKey::SoftDrop,
        LogicalKey::Pause,
        LogicalKey::Restart,
    ];

    /// Dense index, usable for fixed-size per-key tables.
    pub const fn index(self) -> usize {
        match self {
            LogicalKey::MoveLeft => 0,
            LogicalKey::MoveRight => 1,
            LogicalKey::RotateCw => 2,
            LogicalKey::RotateCcw => 3,
            LogicalKey::SoftDrop => 4,
            LogicalKey::Pause => 5,
            LogicalKey::Restart => 6,
        }
    }

    /// Held keys are level-triggered; the rest only act on the tick they go down.
    pub const fn is_level_triggered(self) -> bool {
        matches!(
            self,
            LogicalKey::MoveLeft | LogicalKey::MoveRight | LogicalKey::SoftDrop
        )
    }

    /// Parse from camelCase name (case-insensitive)
    ///
    /// ```
    /// use boom_tetris_types::LogicalKey;
    ///
    /// assert_eq!(LogicalKey::from_str("moveLeft"), Some(LogicalKey::MoveLeft));
    /// assert_eq!(LogicalKey::from_str("ROTATECCW"), Some(LogicalKey::RotateCcw));
    /// assert_eq!(LogicalKey::from_str("hardDrop"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(LogicalKey::MoveLeft),
            "moveright" => Some(LogicalKey::MoveRight),
            "rotatecw" => Some(LogicalKey::RotateCw),
            "rotateccw" => Some(LogicalKey::RotateCcw),
            "softdrop" => Some(LogicalKey::SoftDrop),
            "pause" => Some(LogicalKey::Pause),
            "restart" => Some(LogicalKey::Restart),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LogicalKey::MoveLeft => "moveLeft",
            LogicalKey::MoveRight => "moveRight",
            LogicalKey::RotateCw => "rotateCw",
            LogicalKey::RotateCcw => "rotateCcw",
            LogicalKey::SoftDrop => "softDrop",
            LogicalKey::Pause => "pause",
            LogicalKey::Restart => "restart",
        }
    }
}

/// One tick worth of logical input.
///
/// `move_left`, `move_right` and `soft_drop` report whether the key is currently
/// held; the remaining fields report whether the key went down since the previous
/// tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InputFrame {
    pub move_left: bool,
    pub move_right: bool,
    pub soft_drop: bool,
    pub rotate_cw: bool,
    pub rotate_ccw: bool,
    pub pause: bool,
    pub restart: bool,
}

impl InputFrame {
    /// Frame with only the given key active.
    pub fn only(key: LogicalKey) -> Self {
        let mut frame = Self::default();
        frame.set(key, true);
        frame
    }

    pub fn get(&self, key: LogicalKey) -> bool {
        match key {
            LogicalKey::MoveLeft => self.move_left,
            LogicalKey::MoveRight => self.move_right,
            LogicalKey::RotateCw => self.rotate_cw,
            LogicalKey::RotateCcw => self.rotate_ccw,
            LogicalKey::SoftDrop => self.soft_drop,
            LogicalKey::Pause => self.pause,
            LogicalKey::Restart => self.restart,
        }
    }

    pub fn set(&mut self, key: LogicalKey, value: bool) {
        match key {
            LogicalKey::MoveLeft => self.move_left = value,
            LogicalKey::MoveRight => self.move_right = value,
            LogicalKey::RotateCw => self.rotate_cw = value,
            LogicalKey::RotateCcw => self.rotate_ccw = value,
            LogicalKey::SoftDrop => self.soft_drop = value,
            LogicalKey::Pause => self.pause = value,
            LogicalKey::Restart => self.restart = value,
        }
    }
}

/// Kind of the transient visual effect at the head of the animation queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnimationKind {
    LockIn,
    LineDissolve,
}

/// Notification emitted during a tick, for sound/visual collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The active piece moved one column.
    Shifted,
    /// The active piece changed orientation.
    Rotated,
    /// The active piece was committed to the board.
    Locked,
    /// A line-dissolve finished and the board was compacted.
    LinesCleared { count: u32 },
    LevelUp { level: u32 },
    GameOver { reason: GameOverReason },
}
