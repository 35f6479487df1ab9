//! Shapes module - tetromino occupancy masks
//!
//! Each piece is a set of filled cells inside a tight bounding box. Rotation
//! is a pure mask transform: it remaps cells clockwise and swaps the box
//! dimensions. Wall clamping and collision belong to the piece and playfield
//! layers, not here.

use gridfall_types::PieceKind;

/// Occupancy mask of a piece within its tight bounding box
///
/// Cells are `(x, y)` offsets from the box's top-left corner, with `y = 0`
/// at the top. Every tetromino fills exactly four cells. Four clockwise
/// rotations return the spawn mask bit-for-bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeMask {
    width: u8,
    height: u8,
    cells: [(u8, u8); 4],
}

impl ShapeMask {
    pub fn new(width: u8, height: u8, cells: [(u8, u8); 4]) -> Self {
        ShapeMask {
            width,
            height,
            cells,
        }
    }

    /// Bounding box width in cells
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Bounding box height in cells
    pub fn height(&self) -> u8 {
        self.height
    }

    /// The four filled cells as `(x, y)` offsets
    pub fn cells(&self) -> [(u8, u8); 4] {
        self.cells
    }

    /// Whether the cell at `(x, y)` inside the box is filled
    pub fn filled(&self, x: u8, y: u8) -> bool {
        self.cells.iter().any(|&(cx, cy)| cx == x && cy == y)
    }

    /// The mask rotated 90° clockwise
    ///
    /// Maps each cell `(x, y)` to `(height - 1 - y, x)` and swaps the box
    /// dimensions.
    pub fn rotated(self) -> ShapeMask {
        let mut cells = self.cells;
        for cell in &mut cells {
            *cell = (self.height - 1 - cell.1, cell.0);
        }
        ShapeMask {
            width: self.height,
            height: self.width,
            cells,
        }
    }
}

/// Spawn orientation mask for a piece kind
///
/// Flat-side-down spawn states in tight boxes: I is 4x1, O is 2x2, and the
/// remaining five kinds are 3x2.
pub fn spawn_mask(kind: PieceKind) -> ShapeMask {
    match kind {
        // ####
        PieceKind::I => ShapeMask::new(4, 1, [(0, 0), (1, 0), (2, 0), (3, 0)]),
        // ##
        // ##
        PieceKind::O => ShapeMask::new(2, 2, [(0, 0), (1, 0), (0, 1), (1, 1)]),
        // .#.
        // ###
        PieceKind::T => ShapeMask::new(3, 2, [(1, 0), (0, 1), (1, 1), (2, 1)]),
        // .##
        // ##.
        PieceKind::S => ShapeMask::new(3, 2, [(1, 0), (2, 0), (0, 1), (1, 1)]),
        // ##.
        // .##
        PieceKind::Z => ShapeMask::new(3, 2, [(0, 0), (1, 0), (1, 1), (2, 1)]),
        // #..
        // ###
        PieceKind::J => ShapeMask::new(3, 2, [(0, 0), (0, 1), (1, 1), (2, 1)]),
        // ..#
        // ###
        PieceKind::L => ShapeMask::new(3, 2, [(2, 0), (0, 1), (1, 1), (2, 1)]),
    }
}
