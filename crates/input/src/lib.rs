//! Terminal input module.
//!
//! Maps `crossterm` key events into game [`Command`]s and turns held keys
//! into the one-action-per-tick feed the simulation consumes, with DAS/ARR
//! auto-repeat and a release-timeout fallback for terminals that never
//! deliver key-release events.

pub mod handler;
pub mod map;

pub use gridfall_types as types;

pub use handler::{InputHandler, TickInput};
pub use map::{map_key, should_quit, Command};
