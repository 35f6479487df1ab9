//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **zero dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Comprehensive unit tests for all game rules
//! - **Portable**: Can run in any environment (terminal, headless)
//! - **Fast**: Zero-allocation hot paths for game tick processing
//!
//! # Module Structure
//!
//! - [`shapes`]: Tetromino cell masks and clockwise rotation
//! - [`piece`]: The falling piece with its gravity timer and snapshot support
//! - [`grid`]: 10x22 settled grid with full-row detection and collapsing
//! - [`playfield`]: One update cycle tying gravity, input, commit, and clears together
//! - [`scoring`]: Score, level goals, and the gravity interval schedule
//! - [`rng`]: Linear congruential generator dealing uniform random pieces
//! - [`render`]: Flat frame snapshots for display layers
//! - [`session`]: Pause-aware clock driving the playfield from elapsed time
//!
//! # Game Rules
//!
//! This implementation follows classic falling-block rules:
//!
//! - **Uniform Randomizer**: Every spawn is an independent uniform draw of the 7 kinds
//! - **Clamped Rotation**: Rotating against the right wall shifts the piece back
//!   inside; there are no wall kicks
//! - **Gravity Before Input**: Each update applies gravity first, then the
//!   buffered action, and reverts the piece wholesale if the result collides
//! - **Deferred Commit**: A landed piece settles into the grid at the start of
//!   the *next* update, leaving one last frame where it still belongs to the player
//! - **Line Clears**: 1-4 simultaneous rows score Single through Tetris; a clear
//!   that empties the whole board upgrades to the top category
//!
//! # Example
//!
//! ```
//! use gridfall_core::Playfield;
//! use gridfall_types::Action;
//!
//! // Create a game and run two update cycles
//! let mut field = Playfield::new(12345);
//! field.update(None, false, 0); // first call spawns a piece
//! field.update(Some(Action::MoveRight), false, 16);
//!
//! assert!(field.active().is_some());
//! assert_eq!(field.score(), 0);
//! ```
//!
//! # Timing
//!
//! The game uses a fixed timestep system:
//! - **Tick Rate**: 16ms (approximately 60 FPS)
//! - **Gravity**: Depends on level (1000ms at level 0, decreases with level)
//! - **Soft Drop**: 10x faster than normal gravity while held
//!
//! Call [`Session::tick`](session::Session::tick) every frame with elapsed time.

pub mod grid;
pub mod piece;
pub mod playfield;
pub mod render;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod shapes;

pub use gridfall_types as types;

// Re-export commonly used types for convenience
pub use grid::Grid;
pub use piece::{Piece, PieceSnapshot};
pub use playfield::Playfield;
pub use render::RenderFrame;
pub use rng::{PieceDealer, SimpleRng};
pub use session::Session;
pub use shapes::{spawn_mask, ShapeMask};
