//! Session module - pause-aware clock over the playfield
//!
//! The platform layer reports elapsed frame time; the session turns that
//! into the monotonic millisecond clock the playfield consumes. Pausing
//! simply stops the clock, so gravity resumes exactly where it stopped and
//! no update ever observes a time gap.

use gridfall_types::Action;

use crate::playfield::Playfield;
use crate::render::RenderFrame;

/// One sitting at the game: a playfield plus pause and restart handling
#[derive(Debug, Clone)]
pub struct Session {
    playfield: Playfield,
    paused: bool,
    clock_ms: u64,
}

impl Session {
    pub fn new(seed: u32) -> Self {
        Self {
            playfield: Playfield::new(seed),
            paused: false,
            clock_ms: 0,
        }
    }

    /// Advance one frame by `elapsed_ms`
    ///
    /// While paused this is a no-op and the clock holds still.
    pub fn tick(&mut self, action: Option<Action>, soft_drop: bool, elapsed_ms: u32) {
        if self.paused {
            return;
        }
        self.clock_ms += u64::from(elapsed_ms);
        self.playfield.update(action, soft_drop, self.clock_ms);
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Discard the current game and start a fresh one
    ///
    /// The new playfield is seeded from the dealer's current state, so a
    /// restart does not replay the piece sequence just played.
    pub fn new_game(&mut self) {
        let seed = self.playfield.dealer_state();
        self.playfield = Playfield::new(seed);
        self.paused = false;
        self.clock_ms = 0;
    }

    /// Fill `frame` from the playfield and stamp the session's pause flag
    pub fn render_into(&self, frame: &mut RenderFrame) {
        self.playfield.render_into(frame);
        frame.paused = self.paused;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn playfield(&self) -> &Playfield {
        &self.playfield
    }
}
