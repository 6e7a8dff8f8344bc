//! Collision resolver - rollback-based legality checks
//!
//! Every move and rotation goes through [`attempt_mutation`]: save, mutate, check,
//! and restore the saved placement if any cell is illegal. There is no depenetration
//! and no wall-kick search; a rejected mutation leaves the piece exactly as it was.

use crate::board::Board;
use crate::piece::Tetromino;
use crate::types::{Vec2, BOARD_HEIGHT, BOARD_WIDTH};

/// True if every cell is inside the side/bottom walls and on a free board cell.
///
/// Rows above the top are legal, which lets a piece spawn partly off-screen.
pub fn fits(board: &Board, cells: &[Vec2]) -> bool {
    cells.iter().all(|&cell| {
        cell.y < BOARD_HEIGHT as i8
            && cell.x >= 0
            && cell.x < BOARD_WIDTH as i8
            && !board.collides(cell)
    })
}

/// Check the piece's current placement; restore the saved one if it is illegal.
///
/// Returns `true` when a collision was found (and the piece rolled back).
pub fn resolve_collision(piece: &mut Tetromino, board: &Board) -> bool {
    if fits(board, &piece.cells()) {
        return false;
    }
    piece.restore_state();
    true
}

/// Apply `mutate` atomically: on collision the piece is left unchanged.
///
/// Returns `true` when the mutation collided and was rolled back.
///
/// ```
/// use boom_tetris_core::{attempt_mutation, Board, Tetromino};
/// use boom_tetris_core::types::Shape;
///
/// let board = Board::new();
/// let mut piece = Tetromino::new(Shape::O);
/// assert!(!attempt_mutation(&mut piece, &board, |p| p.translate(1, 0)));
/// // O occupies columns x..=x+1, so x = 9 is past the right wall.
/// for _ in 0..3 {
///     attempt_mutation(&mut piece, &board, |p| p.translate(1, 0));
/// }
/// assert_eq!(piece.position.x, 8);
/// ```
pub fn attempt_mutation<F>(piece: &mut Tetromino, board: &Board, mutate: F) -> bool
where
    F: FnOnce(&mut Tetromino),
{
    piece.save_state();
    mutate(piece);
    resolve_collision(piece, board)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Orientation, Shape};

    #[test]
    fn test_fits_rejects_each_wall() {
        let board = Board::new();
        assert!(fits(&board, &[Vec2::new(0, 0), Vec2::new(9, 19)]));
        assert!(!fits(&board, &[Vec2::new(-1, 0)]));
        assert!(!fits(&board, &[Vec2::new(10, 0)]));
        assert!(!fits(&board, &[Vec2::new(0, 20)]));
        assert!(fits(&board, &[Vec2::new(0, -3)]));
    }

    #[test]
    fn test_left_wall_rollback() {
        let board = Board::new();
        let mut piece = Tetromino::new(Shape::T);
        let mut moves = 0;
        while !attempt_mutation(&mut piece, &board, |p| p.translate(-1, 0)) {
            moves += 1;
        }
        // T spans x-1..=x+1, so the anchor stops at column 1.
        assert_eq!(moves, 4);
        assert_eq!(piece.position, Vec2::new(1, 0));
    }

    #[test]
    fn test_rotation_into_stack_is_rejected() {
        let mut board = Board::new();
        // Vertical I at column 5 would need rows 9..=12
        board.set(5, 12, Some(0));
        let mut piece = Tetromino::at(Shape::I, Orientation::Up, Vec2::new(5, 10));
        assert!(attempt_mutation(&mut piece, &board, |p| p.spin_cw()));
        assert_eq!(piece.orientation, Orientation::Up);
        assert_eq!(piece.position, Vec2::new(5, 10));
    }
}
