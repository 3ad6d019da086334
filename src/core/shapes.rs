//! Shapes module - the immutable tetromino catalog and the rotation transform
//!
//! Each of the 7 kinds is a small boolean matrix; `true` marks an occupied
//! cell relative to the shape's own top-left origin. Rotation is a pure
//! clockwise quarter turn of that matrix with no positional correction
//! (no wall kicks): the caller tests the rotated matrix at the unchanged
//! anchor and rejects it wholesale if it does not fit.

use arrayvec::ArrayVec;

use crate::types::PieceKind;

/// Largest matrix a shape can occupy (the vertical I is 4x1)
pub const MAX_SHAPE_DIM: usize = 4;
pub const MAX_SHAPE_CELLS: usize = MAX_SHAPE_DIM * MAX_SHAPE_DIM;

/// A shape's occupancy matrix, stored row-major in a fixed buffer.
///
/// `rows`/`cols` track the live extent; rotation swaps them. The buffer is
/// sized for the worst case so shapes stay `Copy` and allocation-free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: u8,
    cols: u8,
    cells: [bool; MAX_SHAPE_CELLS],
}

impl Shape {
    /// Build a shape from matrix rows; any nonzero entry is occupied.
    ///
    /// Panics if the matrix is empty, ragged, or larger than 4x4. Only called
    /// with the fixed catalog literals below and from tests.
    pub fn from_rows(rows: &[&[u8]]) -> Self {
        assert!(!rows.is_empty() && rows.len() <= MAX_SHAPE_DIM);
        let cols = rows[0].len();
        assert!(cols > 0 && cols <= MAX_SHAPE_DIM);
        assert!(rows.iter().all(|r| r.len() == cols));

        let mut cells = [false; MAX_SHAPE_CELLS];
        for (i, row) in rows.iter().enumerate() {
            for (j, &v) in row.iter().enumerate() {
                cells[i * cols + j] = v != 0;
            }
        }
        Self {
            rows: rows.len() as u8,
            cols: cols as u8,
            cells,
        }
    }

    /// Number of matrix rows
    pub fn rows(&self) -> usize {
        self.rows as usize
    }

    /// Number of matrix columns
    pub fn cols(&self) -> usize {
        self.cols as usize
    }

    /// Whether the matrix cell at (row, col) is occupied
    pub fn filled(&self, row: usize, col: usize) -> bool {
        debug_assert!(row < self.rows() && col < self.cols());
        self.cells[row * self.cols() + col]
    }

    /// Occupied offsets as (dx, dy) pairs, column then row, relative to the
    /// shape origin. At most 16 cells, so this never allocates.
    pub fn offsets(&self) -> ArrayVec<(i8, i8), MAX_SHAPE_CELLS> {
        let mut out = ArrayVec::new();
        for i in 0..self.rows() {
            for j in 0..self.cols() {
                if self.filled(i, j) {
                    out.push((j as i8, i as i8));
                }
            }
        }
        out
    }

    /// Clockwise quarter turn: `new[i][j] = old[rows - 1 - j][i]`.
    ///
    /// Dimensions swap, so a 1x4 bar becomes 4x1. Applying this four times
    /// restores the original matrix.
    pub fn rotated_cw(&self) -> Shape {
        let (rows, cols) = (self.rows(), self.cols());
        let mut cells = [false; MAX_SHAPE_CELLS];
        for i in 0..cols {
            for j in 0..rows {
                cells[i * rows + j] = self.filled(rows - 1 - j, i);
            }
        }
        Shape {
            rows: self.cols,
            cols: self.rows,
            cells,
        }
    }
}

/// Catalog lookup: the spawn-orientation matrix for a piece kind
pub fn shape_of(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => Shape::from_rows(&[&[1, 1, 1, 1]]),
        PieceKind::O => Shape::from_rows(&[&[1, 1], &[1, 1]]),
        PieceKind::T => Shape::from_rows(&[&[1, 1, 1], &[0, 1, 0]]),
        PieceKind::L => Shape::from_rows(&[&[1, 1, 1], &[1, 0, 0]]),
        PieceKind::J => Shape::from_rows(&[&[1, 1, 1], &[0, 0, 1]]),
        PieceKind::S => Shape::from_rows(&[&[1, 1, 0], &[0, 1, 1]]),
        PieceKind::Z => Shape::from_rows(&[&[0, 1, 1], &[1, 1, 0]]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ALL_KINDS;

    #[test]
    fn test_catalog_has_four_cells_each() {
        for kind in ALL_KINDS {
            assert_eq!(shape_of(kind).offsets().len(), 4, "kind {:?}", kind);
        }
    }

    #[test]
    fn test_i_shape_is_horizontal_bar() {
        let shape = shape_of(PieceKind::I);
        assert_eq!((shape.rows(), shape.cols()), (1, 4));
        assert_eq!(
            shape.offsets().as_slice(),
            &[(0, 0), (1, 0), (2, 0), (3, 0)]
        );
    }

    #[test]
    fn test_rotate_cw_swaps_dimensions() {
        let shape = shape_of(PieceKind::I).rotated_cw();
        assert_eq!((shape.rows(), shape.cols()), (4, 1));
        assert_eq!(
            shape.offsets().as_slice(),
            &[(0, 0), (0, 1), (0, 2), (0, 3)]
        );
    }

    #[test]
    fn test_rotate_t_points_left() {
        // [[1,1,1],[0,1,0]] turned clockwise is [[0,1],[1,1],[0,1]]
        let shape = shape_of(PieceKind::T).rotated_cw();
        assert_eq!((shape.rows(), shape.cols()), (3, 2));
        assert!(!shape.filled(0, 0) && shape.filled(0, 1));
        assert!(shape.filled(1, 0) && shape.filled(1, 1));
        assert!(!shape.filled(2, 0) && shape.filled(2, 1));
    }

    #[test]
    fn test_rotation_cycle_length_four() {
        for kind in ALL_KINDS {
            let original = shape_of(kind);
            let back = original
                .rotated_cw()
                .rotated_cw()
                .rotated_cw()
                .rotated_cw();
            assert_eq!(original, back, "kind {:?}", kind);
        }
    }

    #[test]
    fn test_o_shape_rotation_is_identity() {
        let shape = shape_of(PieceKind::O);
        assert_eq!(shape.rotated_cw(), shape);
    }

    #[test]
    fn test_from_rows_ignores_zeros() {
        let shape = Shape::from_rows(&[&[1, 0], &[0, 1]]);
        assert!(shape.filled(0, 0));
        assert!(!shape.filled(0, 1));
        assert!(!shape.filled(1, 0));
        assert!(shape.filled(1, 1));
    }
}
