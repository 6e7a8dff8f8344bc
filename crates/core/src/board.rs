//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell is either empty or painted with a
//! texture index. Uses a flat array for cache locality and zero allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom).
//!
//! The falling piece is never stored here; its cells are committed once, when it locks.

use arrayvec::ArrayVec;

use crate::types::{Cell, Vec2, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// Indices of full rows, ascending.
pub type FullRows = ArrayVec<usize, { BOARD_HEIGHT as usize }>;

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Cell at a position already known to be on the grid.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is off the grid. Callers go through the resolver's
    /// bounds check first, so reaching the panic means that check was bypassed.
    pub fn cell(&self, x: i8, y: i8) -> Cell {
        match Self::index(x, y) {
            Some(idx) => self.cells[idx],
            None => panic!("board index ({x}, {y}) outside {BOARD_WIDTH}x{BOARD_HEIGHT} grid"),
        }
    }

    /// Occupancy test used by the resolver.
    ///
    /// Rows above the top never collide so pieces can hang partly off-screen.
    /// Side and bottom bounds are not reported here; the resolver checks them.
    pub fn collides(&self, pos: Vec2) -> bool {
        matches!(self.get(pos.x, pos.y), Some(Some(_)))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }
        let start = y * BOARD_WIDTH as usize;
        let end = start + BOARD_WIDTH as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// All full rows, top to bottom.
    pub fn full_rows(&self) -> FullRows {
        (0..BOARD_HEIGHT as usize)
            .filter(|&y| self.is_row_full(y))
            .collect()
    }

    /// Remove `rows` (ascending) and drop everything above each of them.
    ///
    /// Processing top to bottom means a shift never moves a row that is still
    /// waiting to be removed onto a different index, so simultaneous clears
    /// do not double-shift.
    pub fn compact_after_clear(&mut self, rows: &[usize]) {
        let width = BOARD_WIDTH as usize;
        let mut sorted: FullRows = rows
            .iter()
            .copied()
            .filter(|&y| y < BOARD_HEIGHT as usize)
            .collect();
        sorted.sort_unstable();

        for &y in &sorted {
            // Shift rows 0..y down by one; copy_within handles the overlap.
            self.cells.copy_within(0..y * width, width);
            for cell in &mut self.cells[0..width] {
                *cell = None;
            }
        }
    }

    /// Paint a landed piece's cells. Cells above the top row are dropped.
    pub fn commit(&mut self, cells: &[Vec2], paint: u8) {
        for pos in cells {
            if pos.y < 0 {
                continue;
            }
            self.set(pos.x, pos.y, Some(paint));
        }
    }

    /// Empty every cell
    pub fn clear(&mut self) {
        self.cells = [None; BOARD_SIZE];
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_none())
    }

    /// Number of occupied cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Write board cells into a u8 grid (0 = empty, paint + 1 otherwise).
    pub fn write_u8_grid(&self, out: &mut [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize]) {
        let width = BOARD_WIDTH as usize;
        for (y, row) in out.iter_mut().enumerate() {
            let start = y * width;
            for (x, slot) in row.iter_mut().enumerate() {
                *slot = match self.cells[start + x] {
                    Some(paint) => paint.saturating_add(1),
                    None => 0,
                };
            }
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
