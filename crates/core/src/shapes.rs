//! Shape table - cell offsets and rotation period for each tetromino
//!
//! Each shape is described by four offsets from its anchor in the Up orientation.
//! Other orientations are derived by rotating those offsets in 90° steps about the
//! anchor, so there is no per-orientation table and no wall-kick data.
//!
//! | Shape | Period | Up offsets |
//! |-------|--------|------------|
//! | L | 4 | (-1,1) (-1,0) (0,0) (1,0) |
//! | J | 4 | (-1,0) (0,0) (1,0) (1,1) |
//! | Z | 2 | (-1,0) (0,0) (0,1) (1,1) |
//! | S | 2 | (-1,1) (0,1) (0,0) (1,0) |
//! | I | 2 | (-1,0) (0,0) (1,0) (2,0) |
//! | T | 4 | (-1,0) (0,0) (1,0) (0,1) |
//! | O | 1 | (0,0) (0,1) (1,0) (1,1) |

use crate::types::{Orientation, Shape, Vec2};

/// Static description of one shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeDef {
    pub offsets: [Vec2; 4],
    /// Number of distinct orientations.
    pub period: u8,
}

const fn v(x: i8, y: i8) -> Vec2 {
    Vec2::new(x, y)
}

/// Indexed by `Shape as usize`.
pub const SHAPE_TABLE: [ShapeDef; 7] = [
    // L
    ShapeDef {
        offsets: [v(-1, 1), v(-1, 0), v(0, 0), v(1, 0)],
        period: 4,
    },
    // J
    ShapeDef {
        offsets: [v(-1, 0), v(0, 0), v(1, 0), v(1, 1)],
        period: 4,
    },
    // Z
    ShapeDef {
        offsets: [v(-1, 0), v(0, 0), v(0, 1), v(1, 1)],
        period: 2,
    },
    // S
    ShapeDef {
        offsets: [v(-1, 1), v(0, 1), v(0, 0), v(1, 0)],
        period: 2,
    },
    // I
    ShapeDef {
        offsets: [v(-1, 0), v(0, 0), v(1, 0), v(2, 0)],
        period: 2,
    },
    // T
    ShapeDef {
        offsets: [v(-1, 0), v(0, 0), v(1, 0), v(0, 1)],
        period: 4,
    },
    // O
    ShapeDef {
        offsets: [v(0, 0), v(0, 1), v(1, 0), v(1, 1)],
        period: 1,
    },
];

#[inline]
pub fn shape_def(shape: Shape) -> &'static ShapeDef {
    &SHAPE_TABLE[shape as usize]
}

/// Rotation period of a shape (1, 2 or 4).
#[inline]
pub fn rotation_period(shape: Shape) -> u8 {
    shape_def(shape).period
}

/// Absolute board cells of `shape` at `anchor` in `orientation`.
pub fn shape_cells(shape: Shape, orientation: Orientation, anchor: Vec2) -> [Vec2; 4] {
    shape_def(shape)
        .offsets
        .map(|offset| anchor + offset.rotated(orientation))
}
