//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell can be empty or filled with a
//! piece kind. Uses a flat array for better cache locality and
//! zero-allocation. Coordinates: (x, y) where x ranges 0..9 (left to right),
//! y ranges 0..19 (top to bottom). Rows above y=0 are outside the grid but
//! never collide, so a piece may overhang the top edge.

use crate::core::shapes::Shape;
use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH * BOARD_HEIGHT) as usize;

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
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

    /// Get width of the board
    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    /// Get height of the board
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

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Collision test: can `shape` be placed with its origin at (x, y)?
    ///
    /// A placement is illegal iff any occupied cell falls outside the
    /// horizontal bounds, extends below the floor, or overlaps a filled grid
    /// cell. The top edge is deliberately asymmetric: cells on rows above
    /// y=0 are never an overlap, so a shape may sit partially above the
    /// visible grid indefinitely.
    pub fn fits(&self, shape: &Shape, x: i8, y: i8) -> bool {
        for (dx, dy) in shape.offsets() {
            let px = x + dx;
            let py = y + dy;
            if px < 0 || px >= BOARD_WIDTH as i8 || py >= BOARD_HEIGHT as i8 {
                return false;
            }
            if py >= 0 && self.is_occupied(px, py) {
                return false;
            }
        }
        true
    }

    /// Lock a shape onto the board, writing `kind` into every occupied cell.
    ///
    /// The caller guarantees the placement passed `fits`. Cells above y=0
    /// fall outside the grid and are not written.
    pub fn lock(&mut self, shape: &Shape, x: i8, y: i8, kind: PieceKind) {
        for (dx, dy) in shape.offsets() {
            self.set(x + dx, y + dy, Some(kind));
        }
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

    /// Clear all full rows and return how many were cleared.
    ///
    /// Surviving rows are compacted downward with a two-pointer pass and the
    /// freed rows at the top are refilled empty, so width and row count are
    /// preserved on every invocation.
    pub fn clear_full_rows(&mut self) -> usize {
        let width = BOARD_WIDTH as usize;
        let mut cleared = 0;
        let mut write_y = BOARD_HEIGHT as usize;

        // Scan from bottom to top, sliding surviving rows down
        for read_y in (0..BOARD_HEIGHT as usize).rev() {
            if self.is_row_full(read_y) {
                cleared += 1;
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    let dst_start = write_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, dst_start);
                }
            }
        }

        // Refill the vacated rows at the top
        for cell in &mut self.cells[..write_y * width] {
            *cell = None;
        }

        cleared
    }

    /// Write the grid contents into a 2D snapshot buffer
    pub fn write_cells(
        &self,
        out: &mut [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    ) {
        let width = BOARD_WIDTH as usize;
        for (y, row) in out.iter_mut().enumerate() {
            row.copy_from_slice(&self.cells[y * width..(y + 1) * width]);
        }
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }

}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::shapes::shape_of;

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(9, 0), Some(9));
        assert_eq!(Board::index(0, 1), Some(10));
        assert_eq!(Board::index(9, 19), Some(199));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(10, 0), None);
        assert_eq!(Board::index(0, 20), None);
    }

    #[test]
    fn test_board_set_and_get() {
        let mut board = Board::new();

        board.set(0, 0, Some(PieceKind::I));
        board.set(5, 10, Some(PieceKind::T));

        assert_eq!(board.get(0, 0), Some(Some(PieceKind::I)));
        assert_eq!(board.get(5, 10), Some(Some(PieceKind::T)));
        assert_eq!(board.get(1, 0), Some(None));
        assert_eq!(board.get(-1, 0), None);
    }

    #[test]
    fn test_fits_empty_board() {
        let board = Board::new();
        let shape = shape_of(PieceKind::I);

        // Centered spawn position for the I bar
        assert!(board.fits(&shape, 3, 0));
        // Flush against both walls and the floor
        assert!(board.fits(&shape, 0, 0));
        assert!(board.fits(&shape, 6, 19));
    }

    #[test]
    fn test_fits_horizontal_bounds() {
        let board = Board::new();
        let shape = shape_of(PieceKind::I);

        assert!(!board.fits(&shape, -1, 0));
        assert!(!board.fits(&shape, 7, 0));
    }

    #[test]
    fn test_fits_floor_bound() {
        let board = Board::new();
        let shape = shape_of(PieceKind::O);

        assert!(board.fits(&shape, 4, 18));
        assert!(!board.fits(&shape, 4, 19));
    }

    #[test]
    fn test_fits_above_top_never_collides() {
        let mut board = Board::new();
        let shape = shape_of(PieceKind::I).rotated_cw();

        // Vertical bar with origin above the grid: rows at y<0 are ignored
        assert!(board.fits(&shape, 0, -3));

        // But an occupied visible row still collides
        board.set(0, 0, Some(PieceKind::Z));
        assert!(!board.fits(&shape, 0, -3));
    }

    #[test]
    fn test_fits_overlap() {
        let mut board = Board::new();
        board.set(4, 10, Some(PieceKind::S));

        let shape = shape_of(PieceKind::O);
        assert!(!board.fits(&shape, 4, 10));
        assert!(!board.fits(&shape, 3, 9));
        assert!(board.fits(&shape, 5, 10));
    }

    #[test]
    fn test_lock_writes_kind() {
        let mut board = Board::new();
        let shape = shape_of(PieceKind::T);

        board.lock(&shape, 3, 18, PieceKind::T);

        assert_eq!(board.get(3, 18), Some(Some(PieceKind::T)));
        assert_eq!(board.get(4, 18), Some(Some(PieceKind::T)));
        assert_eq!(board.get(5, 18), Some(Some(PieceKind::T)));
        assert_eq!(board.get(4, 19), Some(Some(PieceKind::T)));
        assert_eq!(board.get(3, 19), Some(None));
    }

    #[test]
    fn test_is_row_full() {
        let mut board = Board::new();
        assert!(!board.is_row_full(19));

        for x in 0..BOARD_WIDTH as i8 {
            board.set(x, 19, Some(PieceKind::I));
        }
        assert!(board.is_row_full(19));
        assert!(!board.is_row_full(20));
    }

    #[test]
    fn test_clear_full_rows_none() {
        let mut board = Board::new();
        board.set(0, 19, Some(PieceKind::I));
        assert_eq!(board.clear_full_rows(), 0);
        assert_eq!(board.get(0, 19), Some(Some(PieceKind::I)));
    }

    #[test]
    fn test_clear_full_rows_single() {
        let mut board = Board::new();
        for x in 0..BOARD_WIDTH as i8 {
            board.set(x, 19, Some(PieceKind::I));
        }
        board.set(3, 18, Some(PieceKind::T));

        assert_eq!(board.clear_full_rows(), 1);

        // The survivor shifted down one row; the new top row is empty
        assert_eq!(board.get(3, 19), Some(Some(PieceKind::T)));
        assert_eq!(board.get(3, 18), Some(None));
        for x in 0..BOARD_WIDTH as i8 {
            assert_eq!(board.get(x, 0), Some(None));
        }
    }

    #[test]
    fn test_clear_full_rows_multiple_nonadjacent() {
        let mut board = Board::new();
        for x in 0..BOARD_WIDTH as i8 {
            board.set(x, 19, Some(PieceKind::I));
            board.set(x, 17, Some(PieceKind::I));
        }
        board.set(0, 18, Some(PieceKind::L));

        assert_eq!(board.clear_full_rows(), 2);
        // The partial row between the two full ones dropped to the bottom
        assert_eq!(board.get(0, 19), Some(Some(PieceKind::L)));
        assert_eq!(board.get(1, 19), Some(None));
    }

    #[test]
    fn test_clear_full_rows_entire_board() {
        let mut board = Board::new();
        for y in 0..BOARD_HEIGHT as i8 {
            for x in 0..BOARD_WIDTH as i8 {
                board.set(x, y, Some(PieceKind::Z));
            }
        }

        assert_eq!(board.clear_full_rows(), BOARD_HEIGHT as usize);
        for y in 0..BOARD_HEIGHT as i8 {
            for x in 0..BOARD_WIDTH as i8 {
                assert_eq!(board.get(x, y), Some(None));
            }
        }
    }

    #[test]
    fn test_write_cells_roundtrip() {
        let mut board = Board::new();
        board.set(2, 5, Some(PieceKind::J));

        let mut out = [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        board.write_cells(&mut out);

        assert_eq!(out[5][2], Some(PieceKind::J));
        assert_eq!(out[5][3], None);
    }
}
