//! Piece module - the falling tetromino
//!
//! A piece is a mask plus a grid position and a gravity timer. Its tick
//! applies gravity first and the buffered player action second, in the same
//! call. The piece never checks collisions itself; the playfield validates
//! the post-tick state and reverts it from a snapshot when it is illegal.

use gridfall_types::{Action, PieceKind, GRID_WIDTH, SPAWN_COL};

use crate::scoring;
use crate::shapes::{spawn_mask, ShapeMask};

/// Saved piece geometry for wholesale revert
///
/// Holds exactly the mutable geometry a tick can change: position and the
/// current mask (which carries the bounding box). The lifecycle flags and
/// the gravity timer are deliberately not part of it, so a revert cancels
/// an illegal move without undoing a landing or lock transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceSnapshot {
    pub col: i8,
    pub row: i8,
    pub mask: ShapeMask,
}

/// The active falling piece
#[derive(Debug, Clone, Copy)]
pub struct Piece {
    pub kind: PieceKind,
    /// Bounding box top-left column, may go negative mid-tick before revert
    pub col: i8,
    /// Bounding box top-left row, 0 is the top hidden row
    pub row: i8,
    pub mask: ShapeMask,
    /// Gravity interval captured from the level at spawn time
    pub fall_interval_ms: u32,
    /// Cleared on landing; never set back to true for this piece
    pub falling: bool,
    /// Terminal state, commit is handled by the playfield
    pub locked: bool,
    /// Clock reading of the last applied gravity step
    pub last_fall_ms: u64,
}

impl Piece {
    /// Create a piece at the spawn position, inside the hidden band
    pub fn spawn(kind: PieceKind, fall_interval_ms: u32, now_ms: u64) -> Self {
        Piece {
            kind,
            col: SPAWN_COL,
            row: 0,
            mask: spawn_mask(kind),
            fall_interval_ms,
            falling: true,
            locked: false,
            last_fall_ms: now_ms,
        }
    }

    /// Advance one tick: gravity first, then the buffered action
    ///
    /// Gravity moves the piece down one row when the interval has elapsed.
    /// If the interval elapses while the piece is no longer falling, the
    /// piece locks instead and the action is discarded. Both a gravity step
    /// and an action can land in the same tick.
    pub fn tick(&mut self, action: Option<Action>, soft_drop: bool, now_ms: u64) {
        if self.locked {
            return;
        }

        let mut interval = self.fall_interval_ms;
        if soft_drop {
            interval = scoring::soft_drop_interval_ms(interval);
        }

        if now_ms - self.last_fall_ms >= u64::from(interval) {
            if self.falling {
                self.row += 1;
                self.last_fall_ms = now_ms;
            } else {
                self.locked = true;
                return;
            }
        }

        match action {
            Some(Action::MoveLeft) => self.col -= 1,
            Some(Action::MoveRight) => self.col += 1,
            Some(Action::Rotate) => self.rotate(),
            None => {}
        }
    }

    /// Rotate the mask clockwise and clamp back inside the right wall
    ///
    /// No wall kicks: the only adjustment is a left shift by however many
    /// columns the rotated box sticks past the right boundary. Collisions
    /// with settled cells are the playfield's problem.
    pub fn rotate(&mut self) {
        self.mask = self.mask.rotated();
        let overflow = self.col + self.mask.width() as i8 - GRID_WIDTH as i8;
        if overflow > 0 {
            self.col -= overflow;
        }
    }

    /// Absolute grid coordinates of the four filled cells
    pub fn cells(&self) -> [(i8, i8); 4] {
        self.mask
            .cells()
            .map(|(x, y)| (self.col + x as i8, self.row + y as i8))
    }

    pub fn snapshot(&self) -> PieceSnapshot {
        PieceSnapshot {
            col: self.col,
            row: self.row,
            mask: self.mask,
        }
    }

    pub fn revert(&mut self, snapshot: PieceSnapshot) {
        self.col = snapshot.col;
        self.row = snapshot.row;
        self.mask = snapshot.mask;
    }
}
