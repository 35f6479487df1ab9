//! Terminal runner (default binary).
//!
//! Fixed-timestep loop: render, poll input until the next tick boundary,
//! then feed one tick of input into the session. Rendering goes through
//! the framebuffer renderer in `gridfall-term`.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use gridfall::core::{RenderFrame, Session};
use gridfall::input::{map_key, should_quit, Command, InputHandler};
use gridfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use gridfall::types::TICK_MS;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut session = Session::new(clock_seed());
    let view = GameView::default();
    let mut input = InputHandler::new();

    let mut frame = RenderFrame::default();
    let mut fb = FrameBuffer::new(0, 0);

    let tick = Duration::from_millis(u64::from(TICK_MS));
    let mut last_tick = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        session.render_into(&mut frame);
        view.render_into(&frame, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        let timeout = tick.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match key.kind {
                    KeyEventKind::Press => {
                        if should_quit(key) {
                            return Ok(());
                        }
                        match map_key(key) {
                            Some(Command::Pause) => {
                                session.toggle_pause();
                                input.reset();
                            }
                            Some(Command::Restart) => {
                                session.new_game();
                                input.reset();
                            }
                            Some(cmd) => input.key_press(cmd),
                            None => {}
                        }
                    }
                    // Terminal auto-repeat is ignored; the handler runs
                    // its own DAS/ARR repeats off the tick clock.
                    KeyEventKind::Repeat => {}
                    KeyEventKind::Release => {
                        if let Some(cmd) = map_key(key) {
                            input.key_release(cmd);
                        }
                    }
                },
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick {
            last_tick = Instant::now();
            let tick_input = input.tick(TICK_MS);
            session.tick(tick_input.action, tick_input.soft_drop, TICK_MS);
        }
    }
}

/// Wall-clock seed so every launch deals a different sequence.
fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u32)
        .unwrap_or(1)
}
