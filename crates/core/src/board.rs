//! Board module - the N×N tile grid
//!
//! The board is a square grid of side 4 (classic, infinite) or 5 (hardcore).
//! Each cell is `0` when empty or a power of two ≥ 2.
//! Uses a flat array sized for the largest board, so boards are `Copy` and a
//! move can produce a new board without touching the previous one.
//! Coordinates: (row, col) where row 0 is the top edge and col 0 the left edge.

use std::fmt;

use arrayvec::ArrayVec;

use crate::types::{Cell, Mode, CLASSIC_SIDE, HARDCORE_SIDE, MAX_CELLS, MAX_SIDE};

/// The game board - `side` x `side` cells using flat array storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    side: u8,
    /// Flat array of cells, row-major order (row * side + col).
    /// Cells past `side * side` are always zero.
    cells: [Cell; MAX_CELLS],
}

/// Position of a cell as (row, col).
pub type Pos = (u8, u8);

/// Fixed-capacity list of board positions.
pub type PosList = ArrayVec<Pos, MAX_CELLS>;

/// Whether `value` may appear in a cell.
#[inline]
pub fn is_valid_cell(value: Cell) -> bool {
    value == 0 || (value >= 2 && value.is_power_of_two())
}

impl Board {
    /// Create an empty board sized for `mode`
    pub fn new(mode: Mode) -> Self {
        Self {
            side: mode.side() as u8,
            cells: [0; MAX_CELLS],
        }
    }

    /// Build a board from explicit rows.
    ///
    /// Returns `None` unless the rows form a square of a supported side and
    /// every value is empty or a power of two ≥ 2.
    ///
    /// ```
    /// use tui_2048_core::Board;
    ///
    /// let board = Board::from_rows(&[
    ///     [2, 0, 0, 0],
    ///     [0, 4, 0, 0],
    ///     [0, 0, 0, 0],
    ///     [0, 0, 0, 8],
    /// ])
    /// .unwrap();
    /// assert_eq!(board.get(1, 1), Some(4));
    /// assert!(Board::from_rows(&[[3, 0], [0, 0]]).is_none());
    /// ```
    pub fn from_rows<R: AsRef<[Cell]>>(rows: &[R]) -> Option<Self> {
        let side = rows.len();
        if side != CLASSIC_SIDE && side != HARDCORE_SIDE {
            return None;
        }

        let mut cells = [0; MAX_CELLS];
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != side {
                return None;
            }
            for (c, &value) in row.iter().enumerate() {
                if !is_valid_cell(value) {
                    return None;
                }
                cells[r * side + c] = value;
            }
        }

        Some(Self {
            side: side as u8,
            cells,
        })
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        let side = self.side as usize;
        if row >= side || col >= side {
            return None;
        }
        Some(row * side + col)
    }

    /// Side length of the board
    pub fn side(&self) -> usize {
        self.side as usize
    }

    /// Get cell at (row, col). Returns None if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at (row, col). Returns false if out of bounds
    pub fn set(&mut self, row: usize, col: usize, value: Cell) -> bool {
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = value;
                true
            }
            None => false,
        }
    }

    /// Borrow one row as a slice
    pub fn row(&self, row: usize) -> &[Cell] {
        let side = self.side as usize;
        if row >= side {
            return &[];
        }
        let start = row * side;
        &self.cells[start..start + side]
    }

    /// Overwrite one row. `values` shorter than the side leave the tail untouched.
    pub fn set_row(&mut self, row: usize, values: &[Cell]) {
        let side = self.side as usize;
        if row >= side {
            return;
        }
        let start = row * side;
        let len = values.len().min(side);
        self.cells[start..start + len].copy_from_slice(&values[..len]);
    }

    /// Iterate over rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells[..self.side as usize * self.side as usize].chunks(self.side as usize)
    }

    /// The in-use cells, row-major
    pub fn cells(&self) -> &[Cell] {
        &self.cells[..self.side as usize * self.side as usize]
    }

    /// Positions of every empty cell, in row-major order
    pub fn empty_cells(&self) -> PosList {
        let side = self.side as usize;
        self.cells()
            .iter()
            .enumerate()
            .filter(|(_, &v)| v == 0)
            .map(|(i, _)| ((i / side) as u8, (i % side) as u8))
            .collect()
    }

    /// Number of empty cells
    pub fn count_empty(&self) -> usize {
        self.cells().iter().filter(|&&v| v == 0).count()
    }

    /// Number of tiles (non-empty cells)
    pub fn count_tiles(&self) -> usize {
        self.cells().len() - self.count_empty()
    }

    /// Check if every cell holds a tile
    pub fn is_full(&self) -> bool {
        self.cells().iter().all(|&v| v != 0)
    }

    /// Largest tile on the board (0 when empty)
    pub fn max_tile(&self) -> Cell {
        self.cells().iter().copied().max().unwrap_or(0)
    }

    /// Copy the board into a fixed grid (for snapshots).
    /// Cells outside the board are zeroed.
    pub fn write_grid(&self, out: &mut [[Cell; MAX_SIDE]; MAX_SIDE]) {
        *out = [[0; MAX_SIDE]; MAX_SIDE];
        for (r, row) in self.rows().enumerate() {
            out[r][..row.len()].copy_from_slice(row);
        }
    }

    /// Convert to nested rows
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        self.rows().map(|row| row.to_vec()).collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for (c, value) in row.iter().enumerate() {
                if c > 0 {
                    f.write_str(" ")?;
                }
                if *value == 0 {
                    write!(f, "{:>5}", ".")?;
                } else {
                    write!(f, "{:>5}", value)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_index_calculation() {
        let board = Board::new(Mode::Classic);
        assert_eq!(board.index(0, 0), Some(0));
        assert_eq!(board.index(0, 3), Some(3));
        assert_eq!(board.index(1, 0), Some(4));
        assert_eq!(board.index(3, 3), Some(15));
        assert_eq!(board.index(4, 0), None);
        assert_eq!(board.index(0, 4), None);

        let board = Board::new(Mode::Hardcore);
        assert_eq!(board.index(1, 0), Some(5));
        assert_eq!(board.index(4, 4), Some(24));
    }

    #[test]
    fn test_board_new_is_empty() {
        for mode in Mode::ALL {
            let board = Board::new(mode);
            assert_eq!(board.side(), mode.side());
            assert_eq!(board.count_empty(), mode.side() * mode.side());
            assert_eq!(board.empty_cells().len(), board.count_empty());
            assert!(!board.is_full());
        }
    }

    #[test]
    fn test_from_rows_rejects_bad_shapes_and_values() {
        assert!(Board::from_rows(&[[0u32; 3]; 3]).is_none());
        assert!(Board::from_rows(&[[0u32; 6]; 6]).is_none());
        assert!(Board::from_rows(&[vec![0u32; 4], vec![0; 4], vec![0; 3], vec![0; 4]]).is_none());
        assert!(Board::from_rows(&[[1u32, 0, 0, 0], [0; 4], [0; 4], [0; 4]]).is_none());
        assert!(Board::from_rows(&[[6u32, 0, 0, 0], [0; 4], [0; 4], [0; 4]]).is_none());
        assert!(Board::from_rows(&[[2u32, 0, 0, 0], [0; 4], [0; 4], [0; 4]]).is_some());
    }

    #[test]
    fn test_rows_roundtrip() {
        let rows = vec![
            vec![2, 4, 8, 16, 32],
            vec![0, 0, 0, 0, 0],
            vec![64, 0, 0, 0, 2],
            vec![0, 0, 128, 0, 0],
            vec![0, 0, 0, 0, 4096],
        ];
        let board = Board::from_rows(&rows).unwrap();
        assert_eq!(board.to_rows(), rows);
        assert_eq!(board.max_tile(), 4096);
        assert_eq!(board.count_tiles(), 9);
        assert_eq!(board.count_empty(), 16);
    }

    #[test]
    fn test_write_grid_zeroes_unused_cells() {
        let board = Board::from_rows(&[[2u32; 4]; 4]).unwrap();
        let mut grid = [[9; MAX_SIDE]; MAX_SIDE];
        board.write_grid(&mut grid);
        assert_eq!(grid[0], [2, 2, 2, 2, 0]);
        assert_eq!(grid[4], [0; MAX_SIDE]);
    }

    #[test]
    fn test_row_out_of_bounds_is_empty() {
        let board = Board::new(Mode::Classic);
        assert!(board.row(4).is_empty());
        assert_eq!(board.row(3).len(), 4);
    }
}
