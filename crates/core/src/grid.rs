//! Grid module - the 4x4 tile matrix
//!
//! The grid is a 4x4 matrix where each cell is empty (0) or holds a power-of-two tile.
//! Uses a flat array for better cache locality and copy semantics: every transform
//! returns a new grid and never touches the caller's snapshot.
//! Coordinates: (row, col) where both range 0..3, row 0 at the top, col 0 at the left.

use std::fmt;

use arrayvec::ArrayVec;

use crate::error::GridError;
use crate::types::{Pos, CELL_COUNT, GRID_SIZE};

/// One row of tile values.
pub type Row = [u32; GRID_SIZE];

/// The game grid - 4 rows x 4 columns using flat array storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Grid {
    /// Flat array of tile values, row-major order (row * GRID_SIZE + col)
    cells: [u32; CELL_COUNT],
}

impl Grid {
    /// Create a new empty grid
    pub const fn new() -> Self {
        Self {
            cells: [0; CELL_COUNT],
        }
    }

    /// Build a grid from rows, rejecting values that are not 0 or a power of two.
    ///
    /// This is the boundary check: the move engine itself assumes well-formed grids.
    ///
    /// ```
    /// use tui_2048_core::Grid;
    ///
    /// let grid = Grid::from_rows([[2, 2, 0, 0], [0; 4], [0; 4], [0, 0, 0, 8]]).unwrap();
    /// assert_eq!(grid.tiles().count(), 3);
    /// assert!(Grid::from_rows([[3, 0, 0, 0], [0; 4], [0; 4], [0; 4]]).is_err());
    /// ```
    pub fn from_rows(rows: [Row; GRID_SIZE]) -> Result<Self, GridError> {
        for (r, row) in rows.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                if !is_tile_value(value) {
                    return Err(GridError::InvalidTile {
                        row: r,
                        col: c,
                        value,
                    });
                }
            }
        }
        Ok(Self::from_rows_unchecked(rows))
    }

    pub(crate) fn from_rows_unchecked(rows: [Row; GRID_SIZE]) -> Self {
        let mut cells = [0; CELL_COUNT];
        for (r, row) in rows.iter().enumerate() {
            cells[r * GRID_SIZE..(r + 1) * GRID_SIZE].copy_from_slice(row);
        }
        Self { cells }
    }

    /// Get the tile value at a position
    #[inline(always)]
    pub fn get(&self, pos: Pos) -> u32 {
        self.cells[pos.index()]
    }

    /// Set the tile value at a position
    #[inline(always)]
    pub fn set(&mut self, pos: Pos, value: u32) {
        self.cells[pos.index()] = value;
    }

    /// Return a copy of one row
    pub fn row(&self, row: usize) -> Row {
        let mut out = [0; GRID_SIZE];
        out.copy_from_slice(&self.cells[row * GRID_SIZE..(row + 1) * GRID_SIZE]);
        out
    }

    /// Convert to nested rows (for rendering and display)
    pub fn rows(&self) -> [Row; GRID_SIZE] {
        std::array::from_fn(|r| self.row(r))
    }

    /// Swap row and column roles.
    pub fn transpose(&self) -> Self {
        let mut out = Self::new();
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                out.cells[col * GRID_SIZE + row] = self.cells[row * GRID_SIZE + col];
            }
        }
        out
    }

    /// Reverse the order of the cells within every row.
    pub fn reverse_rows(&self) -> Self {
        let mut out = *self;
        for row in out.cells.chunks_exact_mut(GRID_SIZE) {
            row.reverse();
        }
        out
    }

    /// Positions of all empty cells, row-major. Zero-allocation.
    pub fn empty_cells(&self) -> ArrayVec<Pos, CELL_COUNT> {
        let mut out = ArrayVec::new();
        for (i, &value) in self.cells.iter().enumerate() {
            if value == 0 {
                out.push(Pos::new((i / GRID_SIZE) as u8, (i % GRID_SIZE) as u8));
            }
        }
        out
    }

    pub fn count_empty(&self) -> usize {
        self.cells.iter().filter(|&&v| v == 0).count()
    }

    /// True when no cell is empty
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&v| v != 0)
    }

    /// Iterator over the nonzero tile values, row-major
    pub fn tiles(&self) -> impl Iterator<Item = u32> + '_ {
        self.cells.iter().copied().filter(|&v| v != 0)
    }

    /// Highest tile value on the grid (0 when empty)
    pub fn max_tile(&self) -> u32 {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// True if any two orthogonally adjacent cells hold the same nonzero value.
    pub fn has_adjacent_pair(&self) -> bool {
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let v = self.cells[row * GRID_SIZE + col];
                if v == 0 {
                    continue;
                }
                if col + 1 < GRID_SIZE && self.cells[row * GRID_SIZE + col + 1] == v {
                    return true;
                }
                if row + 1 < GRID_SIZE && self.cells[(row + 1) * GRID_SIZE + col] == v {
                    return true;
                }
            }
        }
        false
    }
}

/// True for 0 (empty) and powers of two from 2 upward.
pub fn is_tile_value(value: u32) -> bool {
    value == 0 || (value >= 2 && value.is_power_of_two())
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                if col > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{:>5}", self.cells[row * GRID_SIZE + col])?;
            }
            if row + 1 < GRID_SIZE {
                f.write_str("\n")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Grid {
        Grid::from_rows([[2, 4, 0, 0], [0, 8, 0, 0], [0, 0, 16, 0], [32, 0, 0, 64]]).unwrap()
    }

    #[test]
    fn test_grid_flat_array() {
        let mut grid = Grid::new();
        grid.set(Pos::new(0, 0), 2);
        grid.set(Pos::new(2, 3), 8);

        assert_eq!(grid.get(Pos::new(0, 0)), 2);
        assert_eq!(grid.get(Pos::new(2, 3)), 8);
        assert_eq!(grid.cells[0], 2);
        assert_eq!(grid.cells[2 * 4 + 3], 8);
    }

    #[test]
    fn test_transpose_swaps_roles() {
        let grid = sample();
        let t = grid.transpose();
        assert_eq!(t.row(0), [2, 0, 0, 32]);
        assert_eq!(t.row(1), [4, 8, 0, 0]);
        assert_eq!(t.transpose(), grid);
    }

    #[test]
    fn test_reverse_rows() {
        let grid = sample();
        let r = grid.reverse_rows();
        assert_eq!(r.row(0), [0, 0, 4, 2]);
        assert_eq!(r.row(3), [64, 0, 0, 32]);
        assert_eq!(r.reverse_rows(), grid);
    }

    #[test]
    fn test_transforms_do_not_touch_the_source() {
        let grid = sample();
        let _ = grid.transpose().reverse_rows();
        assert_eq!(grid, sample());
    }

    #[test]
    fn test_empty_cells() {
        let grid = sample();
        assert_eq!(grid.empty_cells().len(), 10);
        assert_eq!(grid.count_empty(), 10);
        assert_eq!(grid.empty_cells()[0], Pos::new(0, 2));
        assert!(Grid::new().empty_cells().is_full());
    }

    #[test]
    fn test_from_rows_rejects_non_power_of_two() {
        let err = Grid::from_rows([[0; 4], [0, 0, 6, 0], [0; 4], [0; 4]]).unwrap_err();
        assert_eq!(
            err,
            GridError::InvalidTile {
                row: 1,
                col: 2,
                value: 6
            }
        );
        assert!(Grid::from_rows([[1, 0, 0, 0], [0; 4], [0; 4], [0; 4]]).is_err());
    }

    #[test]
    fn test_adjacent_pair_detection() {
        assert!(!sample().has_adjacent_pair());
        let grid = Grid::from_rows([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 4]]).unwrap();
        assert!(grid.has_adjacent_pair());
    }

    #[test]
    fn test_display_prints_rows() {
        let text = sample().to_string();
        assert_eq!(text.lines().count(), 4);
        assert!(text.lines().next().unwrap().contains('4'));
    }
}
