//! Held-key tracking with DAS/ARR auto-repeat, one action per tick.
//!
//! The simulation consumes at most one discrete action per tick plus a
//! sampled soft-drop modifier. This handler buffers the presses that arrive
//! between ticks, tracks which keys count as held, and turns a held
//! horizontal direction into repeats once the DAS delay has passed.
//!
//! Hold detection runs off the tick clock alone. Terminals that never
//! deliver key-release events (Ghostty among them) fall back to a release
//! timeout: a direction with no fresh press for a while is dropped.

use gridfall_types::{Action, DEFAULT_ARR_MS, DEFAULT_DAS_MS, KEY_RELEASE_TIMEOUT_MS};

use crate::map::Command;

/// What one tick hands to the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickInput {
    /// The single discrete action for this tick, if any
    pub action: Option<Action>,
    /// Whether the soft-drop modifier is held this tick
    pub soft_drop: bool,
}

/// Currently held horizontal direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Held {
    None,
    Left,
    Right,
}

impl Held {
    fn action(self) -> Option<Action> {
        match self {
            Held::None => None,
            Held::Left => Some(Action::MoveLeft),
            Held::Right => Some(Action::MoveRight),
        }
    }
}

/// Tracks pressed keys between ticks and deals out one action per tick
///
/// A fresh press is buffered and wins the next tick's action slot; auto
/// repeat only fills ticks that have no buffered press.
#[derive(Debug, Clone)]
pub struct InputHandler {
    /// Latest unconsumed discrete press
    buffered: Option<Action>,
    held: Held,
    soft_drop: bool,
    das_ms: u32,
    arr_ms: u32,
    /// How long the current direction has been held
    hold_ms: u32,
    /// Repeat time owed past the DAS gate, capped at one interval
    repeat_debt_ms: u32,
    /// Ticks since the last press, for the synthetic-release fallback
    idle_ms: u32,
}

impl InputHandler {
    /// Create a handler with the default DAS/ARR timing
    pub fn new() -> Self {
        Self::with_config(DEFAULT_DAS_MS, DEFAULT_ARR_MS)
    }

    /// Create with custom DAS delay and ARR interval (milliseconds)
    pub fn with_config(das_ms: u32, arr_ms: u32) -> Self {
        Self {
            buffered: None,
            held: Held::None,
            soft_drop: false,
            das_ms,
            arr_ms: arr_ms.max(1),
            hold_ms: 0,
            repeat_debt_ms: 0,
            idle_ms: 0,
        }
    }

    /// Feed one key-press command
    ///
    /// Movement presses buffer exactly one action and arm the hold state;
    /// a press of the direction already held is a terminal auto-repeat and
    /// buffers nothing, DAS owns continuous movement. Soft drop is a
    /// modifier and never takes the action slot. Session commands (pause,
    /// restart) are the run loop's business and are ignored here.
    pub fn key_press(&mut self, cmd: Command) {
        self.idle_ms = 0;
        match cmd {
            Command::MoveLeft => self.press_direction(Held::Left),
            Command::MoveRight => self.press_direction(Held::Right),
            Command::Rotate => self.buffered = Some(Action::Rotate),
            Command::SoftDrop => self.soft_drop = true,
            Command::Pause | Command::Restart => {}
        }
    }

    /// Feed one key-release command, on terminals that report releases
    pub fn key_release(&mut self, cmd: Command) {
        match cmd {
            Command::MoveLeft => self.release_direction(Held::Left),
            Command::MoveRight => self.release_direction(Held::Right),
            Command::SoftDrop => self.soft_drop = false,
            Command::Rotate | Command::Pause | Command::Restart => {}
        }
    }

    /// Advance the handler by one tick and take this tick's input
    ///
    /// At most one action comes out: a buffered press first, otherwise one
    /// auto-repeat of the held direction once DAS has elapsed. Surplus
    /// repeat time beyond one interval is discarded so a long stall never
    /// bursts into a run of moves.
    pub fn tick(&mut self, elapsed_ms: u32) -> TickInput {
        // Idle time is checked before this tick is counted, so a press that
        // arrived during a long frame still keeps its key held.
        if self.idle_ms > KEY_RELEASE_TIMEOUT_MS {
            self.held = Held::None;
            self.soft_drop = false;
            self.hold_ms = 0;
            self.repeat_debt_ms = 0;
        }
        self.idle_ms = self.idle_ms.saturating_add(elapsed_ms);

        let mut action = self.buffered.take();

        if self.held != Held::None {
            let before = self.hold_ms;
            self.hold_ms = self.hold_ms.saturating_add(elapsed_ms);
            if self.hold_ms >= self.das_ms {
                // Only time past the DAS gate counts toward repeats.
                self.repeat_debt_ms += if before < self.das_ms {
                    self.hold_ms - self.das_ms
                } else {
                    elapsed_ms
                };
                if action.is_none() && self.repeat_debt_ms >= self.arr_ms {
                    action = self.held.action();
                    self.repeat_debt_ms -= self.arr_ms;
                }
                self.repeat_debt_ms = self.repeat_debt_ms.min(self.arr_ms);
            }
        }

        TickInput {
            action,
            soft_drop: self.soft_drop,
        }
    }

    /// Drop all held and buffered state, used on pause and restart
    pub fn reset(&mut self) {
        self.buffered = None;
        self.held = Held::None;
        self.soft_drop = false;
        self.hold_ms = 0;
        self.repeat_debt_ms = 0;
        self.idle_ms = 0;
    }

    pub fn das_ms(&self) -> u32 {
        self.das_ms
    }

    pub fn arr_ms(&self) -> u32 {
        self.arr_ms
    }

    fn press_direction(&mut self, dir: Held) {
        if self.held == dir {
            return;
        }
        self.held = dir;
        self.hold_ms = 0;
        self.repeat_debt_ms = 0;
        self.buffered = dir.action();
    }

    fn release_direction(&mut self, dir: Held) {
        if self.held == dir {
            self.held = Held::None;
            self.hold_ms = 0;
            self.repeat_debt_ms = 0;
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Keeps hold state alive without emitting stray actions.
    fn quiet_tick(handler: &mut InputHandler, elapsed_ms: u32) {
        handler.key_press(Command::Pause);
        let _ = handler.tick(elapsed_ms);
    }

    #[test]
    fn test_press_buffers_one_action() {
        let mut handler = InputHandler::new();
        handler.key_press(Command::MoveLeft);
        assert_eq!(handler.tick(16).action, Some(Action::MoveLeft));
        // The buffer is consumed; the next tick is empty until DAS kicks in.
        assert_eq!(handler.tick(16).action, None);
    }

    #[test]
    fn test_terminal_repeat_press_does_not_double_buffer() {
        let mut handler = InputHandler::new();
        handler.key_press(Command::MoveLeft);
        assert_eq!(handler.tick(16).action, Some(Action::MoveLeft));

        // The terminal re-sends the press while the key stays down.
        handler.key_press(Command::MoveLeft);
        assert_eq!(handler.tick(16).action, None);
    }

    #[test]
    fn test_rotate_buffers_on_every_press() {
        let mut handler = InputHandler::new();
        handler.key_press(Command::Rotate);
        assert_eq!(handler.tick(16).action, Some(Action::Rotate));
        handler.key_press(Command::Rotate);
        assert_eq!(handler.tick(16).action, Some(Action::Rotate));
    }

    #[test]
    fn test_soft_drop_is_a_modifier_not_an_action() {
        let mut handler = InputHandler::new();
        handler.key_press(Command::SoftDrop);
        let input = handler.tick(16);
        assert_eq!(input.action, None);
        assert!(input.soft_drop);

        handler.key_release(Command::SoftDrop);
        assert!(!handler.tick(16).soft_drop);
    }

    #[test]
    fn test_no_repeat_before_das() {
        let mut handler = InputHandler::with_config(150, 50);
        handler.key_press(Command::MoveRight);
        assert_eq!(handler.tick(16).action, Some(Action::MoveRight));

        // 9 more ticks = 160ms held, but only 10ms past the gate.
        let mut repeats = 0;
        for _ in 0..9 {
            quiet_tick(&mut handler, 0);
            if handler.tick(16).action.is_some() {
                repeats += 1;
            }
        }
        assert_eq!(repeats, 0);
    }

    #[test]
    fn test_repeats_at_arr_cadence() {
        let mut handler = InputHandler::with_config(100, 50);
        handler.key_press(Command::MoveLeft);
        let _ = handler.tick(16);

        // Hold the key via fresh presses; count repeats over 40 ticks.
        let mut repeats = 0;
        for _ in 0..40 {
            handler.key_press(Command::MoveLeft);
            if handler.tick(16).action == Some(Action::MoveLeft) {
                repeats += 1;
            }
        }
        // 656ms held, DAS 100ms, ARR 50ms: roughly one repeat per 50ms.
        assert!(
            (9..=12).contains(&repeats),
            "expected ~11 repeats, got {}",
            repeats
        );
    }

    #[test]
    fn test_one_action_per_tick_even_after_a_stall() {
        let mut handler = InputHandler::with_config(100, 50);
        handler.key_press(Command::MoveLeft);
        let _ = handler.tick(16);

        // One huge tick while held: debt is capped, a single repeat comes out.
        handler.key_press(Command::MoveLeft);
        assert_eq!(handler.tick(500).action, Some(Action::MoveLeft));
        handler.key_press(Command::MoveLeft);
        assert_eq!(handler.tick(16).action, Some(Action::MoveLeft));
        handler.key_press(Command::MoveLeft);
        // The capped debt drains: back to the normal cadence.
        assert_eq!(handler.tick(16).action, None);
    }

    #[test]
    fn test_fresh_press_beats_a_pending_repeat() {
        let mut handler = InputHandler::with_config(50, 50);
        handler.key_press(Command::MoveLeft);
        let _ = handler.tick(16);

        // Held long enough that a repeat is due, but a rotate arrives first.
        handler.key_press(Command::MoveLeft);
        quiet_tick(&mut handler, 100);
        handler.key_press(Command::Rotate);
        assert_eq!(handler.tick(16).action, Some(Action::Rotate));
    }

    #[test]
    fn test_direction_switch_buffers_and_takes_over_repeats() {
        let mut handler = InputHandler::with_config(50, 50);
        handler.key_press(Command::MoveLeft);
        assert_eq!(handler.tick(16).action, Some(Action::MoveLeft));

        handler.key_press(Command::MoveRight);
        assert_eq!(handler.tick(16).action, Some(Action::MoveRight));

        // All repeats from here belong to the new direction.
        let mut seen = Vec::new();
        for _ in 0..20 {
            handler.key_press(Command::MoveRight);
            if let Some(action) = handler.tick(16).action {
                seen.push(action);
            }
        }
        assert!(!seen.is_empty());
        assert!(seen.iter().all(|&a| a == Action::MoveRight));
    }

    #[test]
    fn test_release_timeout_drops_held_keys() {
        let mut handler = InputHandler::with_config(50, 50);
        handler.key_press(Command::MoveLeft);
        handler.key_press(Command::SoftDrop);
        let _ = handler.tick(16);

        // A dozen 16ms ticks with no fresh press crosses the 150ms timeout.
        for _ in 0..12 {
            let _ = handler.tick(16);
        }
        let input = handler.tick(16);
        assert_eq!(input.action, None);
        assert!(!input.soft_drop);
        assert_eq!(handler.tick(100).action, None);
    }

    #[test]
    fn test_release_event_stops_repeats() {
        let mut handler = InputHandler::with_config(50, 50);
        handler.key_press(Command::MoveLeft);
        let _ = handler.tick(16);

        handler.key_release(Command::MoveLeft);
        for _ in 0..10 {
            assert_eq!(handler.tick(16).action, None);
        }
    }

    #[test]
    fn test_release_of_the_other_direction_is_ignored() {
        let mut handler = InputHandler::with_config(50, 50);
        handler.key_press(Command::MoveLeft);
        let _ = handler.tick(16);

        // A stale release for a direction that is not held changes nothing.
        handler.key_release(Command::MoveRight);

        let mut repeats = 0;
        for _ in 0..10 {
            handler.key_press(Command::MoveLeft);
            if handler.tick(16).action == Some(Action::MoveLeft) {
                repeats += 1;
            }
        }
        assert!(repeats > 0, "left must stay held through the stale release");
    }

    #[test]
    fn test_session_commands_do_not_touch_piece_input() {
        let mut handler = InputHandler::new();
        handler.key_press(Command::Pause);
        handler.key_press(Command::Restart);
        let input = handler.tick(16);
        assert_eq!(input.action, None);
        assert!(!input.soft_drop);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut handler = InputHandler::new();
        handler.key_press(Command::MoveLeft);
        handler.key_press(Command::SoftDrop);
        handler.reset();

        let input = handler.tick(16);
        assert_eq!(input.action, None);
        assert!(!input.soft_drop);
    }

    #[test]
    fn test_default_timing_comes_from_the_shared_constants() {
        let handler = InputHandler::new();
        assert_eq!(handler.das_ms(), DEFAULT_DAS_MS);
        assert_eq!(handler.arr_ms(), DEFAULT_ARR_MS);
    }
}
