//! Active falling piece
//!
//! A [`Tetromino`] carries its last known-good position and orientation so a
//! rejected move can be undone in O(1) by [`Tetromino::restore_state`].

use crate::shapes::{rotation_period, shape_cells};
use crate::types::{Orientation, Shape, Vec2, SPAWN_POSITION};

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    pub shape: Shape,
    pub orientation: Orientation,
    /// Anchor cell
    pub position: Vec2,
    pub prev_position: Vec2,
    pub prev_orientation: Orientation,
    /// Rows moved by soft drop since the key was last pressed.
    pub soft_drop_height: u32,
}

impl Tetromino {
    /// Create a new tetromino at the spawn anchor
    pub fn new(shape: Shape) -> Self {
        Self::at(shape, Orientation::Up, SPAWN_POSITION)
    }

    pub fn at(shape: Shape, orientation: Orientation, position: Vec2) -> Self {
        Self {
            shape,
            orientation,
            position,
            prev_position: position,
            prev_orientation: orientation,
            soft_drop_height: 0,
        }
    }

    /// Remember the current placement as the rollback target.
    pub fn save_state(&mut self) {
        self.prev_position = self.position;
        self.prev_orientation = self.orientation;
    }

    /// Return to the placement saved by the last [`save_state`](Self::save_state).
    pub fn restore_state(&mut self) {
        self.position = self.prev_position;
        self.orientation = self.prev_orientation;
    }

    pub fn spin_cw(&mut self) {
        self.orientation = self.orientation.step(1, rotation_period(self.shape));
    }

    pub fn spin_ccw(&mut self) {
        self.orientation = self.orientation.step(-1, rotation_period(self.shape));
    }

    pub fn translate(&mut self, dx: i8, dy: i8) {
        self.position = self.position + Vec2::new(dx, dy);
    }

    /// Absolute board cells currently covered
    pub fn cells(&self) -> [Vec2; 4] {
        shape_cells(self.shape, self.orientation, self.position)
    }

    /// Texture index the board is painted with when this piece locks.
    pub fn paint(&self) -> u8 {
        self.shape.paint_index()
    }
}
