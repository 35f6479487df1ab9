//! Grid module - manages the settled playfield cells
//!
//! The grid is 10x22 where each cell can be empty or filled with a piece kind.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (col, row) where col ranges 0..9 (left to right), row ranges
//! 0..21 (top to bottom). The top two rows are the hidden spawn band.
//! Only committed geometry lives here; the active piece is composited over
//! the grid at render time.

use std::fmt;

use arrayvec::ArrayVec;
use gridfall_types::{Cell, PieceKind, GRID_HEIGHT, GRID_WIDTH};

/// Total number of cells on the grid
const GRID_SIZE: usize = (GRID_WIDTH as usize) * (GRID_HEIGHT as usize);

/// The settled grid - 10 columns x 22 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    /// Flat array of cells, row-major order (row * WIDTH + col)
    cells: [Cell; GRID_SIZE],
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            cells: [None; GRID_SIZE],
        }
    }

    /// Calculate flat index from (col, row) coordinates
    #[inline(always)]
    fn index(col: i8, row: i8) -> Option<usize> {
        if col < 0 || col >= GRID_WIDTH as i8 || row < 0 || row >= GRID_HEIGHT as i8 {
            return None;
        }
        Some((row as usize) * (GRID_WIDTH as usize) + (col as usize))
    }

    /// Get cell at position (col, row)
    /// Returns None if out of bounds
    pub fn get(&self, col: i8, row: i8) -> Option<Cell> {
        Self::index(col, row).map(|idx| self.cells[idx])
    }

    /// Set cell at position (col, row)
    /// Returns false if out of bounds
    pub fn set(&mut self, col: i8, row: i8, cell: Cell) -> bool {
        match Self::index(col, row) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is valid (within bounds and empty)
    pub fn is_valid(&self, col: i8, row: i8) -> bool {
        matches!(self.get(col, row), Some(None))
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, col: i8, row: i8) -> bool {
        matches!(self.get(col, row), Some(Some(_)))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= GRID_HEIGHT as usize {
            return false;
        }
        let start = row * GRID_WIDTH as usize;
        let end = start + GRID_WIDTH as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Check if no cell is settled anywhere
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_none())
    }

    /// Remove a row and shift all rows above it down by one
    /// The top row is left empty; rows below do not move
    fn collapse_row(&mut self, row: usize) {
        let width = GRID_WIDTH as usize;

        // Note: copy_within handles overlapping ranges safely
        for r in (1..=row).rev() {
            let src_start = (r - 1) * width;
            let dst_start = r * width;
            self.cells
                .copy_within(src_start..src_start + width, dst_start);
        }

        for cell in &mut self.cells[0..width] {
            *cell = None;
        }
    }

    /// Collapse every full row and return the indices cleared, in clearing order
    ///
    /// Scans bottom to top. After collapsing a row the same index is checked
    /// again, because the row that slid into the slot may itself be full, so
    /// simultaneous clears cascade without skipping. Indices are recorded at
    /// clearing time and may repeat. A single committed piece can complete at
    /// most four rows, which bounds the result.
    pub fn collapse_full_rows(&mut self) -> ArrayVec<usize, 4> {
        let mut cleared = ArrayVec::new();
        let mut cursor = GRID_HEIGHT as usize;

        while cursor > 0 {
            let row = cursor - 1;
            if self.is_row_full(row) {
                self.collapse_row(row);
                cleared.push(row);
            } else {
                cursor -= 1;
            }
        }

        cleared
    }

    /// Settle a piece's cells onto the grid
    /// Returns true if successful, false if any cell is out of bounds or occupied
    pub fn settle(&mut self, cells: [(i8, i8); 4], kind: PieceKind) -> bool {
        for &(col, row) in &cells {
            if !self.is_valid(col, row) {
                return false;
            }
        }

        for &(col, row) in &cells {
            self.set(col, row, Some(kind));
        }

        true
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..GRID_HEIGHT as i8 {
            for col in 0..GRID_WIDTH as i8 {
                let ch = if self.is_occupied(col, row) { '#' } else { '.' };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
