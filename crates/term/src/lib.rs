//! Terminal rendering layer.
//!
//! Renders into a plain framebuffer of styled cells and flushes it to the
//! terminal with diff-based updates. No widget or layout framework; the
//! point is precise control over every cell (e.g. 2 columns per well cell)
//! and a pipeline whose pure parts stay unit-testable.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use gridfall_core as core;
pub use gridfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
