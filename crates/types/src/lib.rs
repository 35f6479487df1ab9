//! Shared types module - data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are pure data with no external dependencies, so they can be
//! used from any layer (core simulation, input mapping, terminal rendering).
//!
//! # Grid Dimensions
//!
//! The playfield is a fixed-size grid:
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 22 rows (indexed 0-21), of which the top 2 are hidden
//! - **Visible rows**: 20 (grid rows 2-21)
//! - **Spawn position**: column 3, row 0 (inside the hidden band)
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `BASE_FALL_MS` | 1000 | Gravity interval at level 0 |
//! | `MIN_FALL_MS` | 16 | Gravity interval floor at high levels |
//! | `SOFT_DROP_DIVISOR` | 10 | Soft drop divides the gravity interval by 10 |
//!
//! # Auto-Repeat Timing
//!
//! Held horizontal keys auto-repeat after an initial delay:
//!
//! - `DEFAULT_DAS_MS`: 150ms - time before auto-repeat starts
//! - `DEFAULT_ARR_MS`: 50ms - interval between auto-repeats
//! - `KEY_RELEASE_TIMEOUT_MS`: 150ms - synthetic release for terminals
//!   that never deliver key-release events
//!
//! # Examples
//!
//! ```
//! use gridfall_types::{Action, ClearCategory, PieceKind, GRID_WIDTH, GRID_HEIGHT};
//!
//! assert_eq!(GRID_WIDTH, 10);
//! assert_eq!(GRID_HEIGHT, 22);
//!
//! // Four cleared rows score as a tetris unless the board emptied out.
//! assert_eq!(ClearCategory::from_rows(4, false), Some(ClearCategory::Tetris));
//! assert_eq!(ClearCategory::from_rows(4, true), Some(ClearCategory::Clear));
//!
//! let action = Action::Rotate;
//! assert_ne!(action, Action::MoveLeft);
//! assert_eq!(PieceKind::ALL.len(), 7);
//! ```

/// Grid width in cells (10 columns)
pub const GRID_WIDTH: u8 = 10;

/// Grid height in cells (22 rows, including the hidden band at the top)
pub const GRID_HEIGHT: u8 = 22;

/// Number of hidden rows at the top of the grid
pub const HIDDEN_ROWS: u8 = 2;

/// Number of rows shown on screen
pub const VISIBLE_ROWS: u8 = GRID_HEIGHT - HIDDEN_ROWS;

/// Spawn column for new pieces
pub const SPAWN_COL: i8 = 3;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Gravity interval at level 0 (1000ms = one row per second)
pub const BASE_FALL_MS: u32 = 1000;

/// Gravity interval floor; levels past this are indistinguishable at the tick rate
pub const MIN_FALL_MS: u32 = 16;

/// Soft drop divides the current gravity interval by this factor
pub const SOFT_DROP_DIVISOR: u32 = 10;

/// Goal points required per level scale with `LEVEL_GOAL_STEP * (level + 1)`
pub const LEVEL_GOAL_STEP: u32 = 5;

/// DAS (Delayed Auto Shift) delay in milliseconds
pub const DEFAULT_DAS_MS: u32 = 150;

/// ARR (Auto Repeat Rate) in milliseconds
pub const DEFAULT_ARR_MS: u32 = 50;

/// Synthetic key-release timeout for terminals without release events
pub const KEY_RELEASE_TIMEOUT_MS: u32 = 150;

/// The seven tetromino piece kinds
///
/// Each kind has a distinct spawn shape:
/// - **I**: horizontal bar (4x1)
/// - **O**: square (2x2)
/// - **T**: T-shaped (3x2)
/// - **S**: S-shaped (3x2)
/// - **Z**: Z-shaped, mirror of S (3x2)
/// - **J**: J-shaped (3x2)
/// - **L**: L-shaped, mirror of J (3x2)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All seven kinds, in a fixed order usable for table indexing
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Stable index into [`PieceKind::ALL`]
    pub fn index(self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::O => 1,
            PieceKind::T => 2,
            PieceKind::S => 3,
            PieceKind::Z => 4,
            PieceKind::J => 5,
            PieceKind::L => 6,
        }
    }
}

/// A cell on the grid
///
/// - `None`: empty cell
/// - `Some(PieceKind)`: cell settled by a piece of that kind
pub type Cell = Option<PieceKind>;

/// Player actions applied to the falling piece
///
/// At most one action is delivered per tick. Soft drop is not an action;
/// it is a held modifier that shortens the gravity interval for the tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move piece one column left
    MoveLeft,
    /// Move piece one column right
    MoveRight,
    /// Rotate piece 90° clockwise
    Rotate,
}

/// Line clear categories
///
/// 1-4 simultaneously cleared rows map to the first four categories.
/// `Clear` is the top category: a clear that leaves the entire board
/// empty, overriding the row count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearCategory {
    Single,
    Double,
    Triple,
    Tetris,
    Clear,
}

impl ClearCategory {
    /// Categorize a resolution pass.
    ///
    /// `board_cleared` is whether the settled grid is empty after the rows
    /// collapsed. Returns `None` when no rows cleared.
    pub fn from_rows(rows: usize, board_cleared: bool) -> Option<Self> {
        if rows == 0 {
            return None;
        }
        if board_cleared {
            return Some(ClearCategory::Clear);
        }
        match rows {
            1 => Some(ClearCategory::Single),
            2 => Some(ClearCategory::Double),
            3 => Some(ClearCategory::Triple),
            4 => Some(ClearCategory::Tetris),
            _ => None,
        }
    }

    /// Base score before the level multiplier (classic table, plus the
    /// full-board bonus on top)
    pub fn base_score(self) -> u32 {
        match self {
            ClearCategory::Single => 40,
            ClearCategory::Double => 100,
            ClearCategory::Triple => 300,
            ClearCategory::Tetris => 1200,
            ClearCategory::Clear => 2000,
        }
    }

    /// Goal points counted toward the next level-up
    pub fn goal_points(self) -> u32 {
        match self {
            ClearCategory::Single => 1,
            ClearCategory::Double => 3,
            ClearCategory::Triple => 5,
            ClearCategory::Tetris => 8,
            ClearCategory::Clear => 10,
        }
    }
}
