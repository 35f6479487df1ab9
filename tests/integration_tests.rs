//! Integration tests for the input-to-session pipeline
//!
//! These drive a session the way the run loop does: key events go into the
//! handler, the handler's tick output goes into the session.

use crossterm::event::{KeyCode, KeyEvent};

use gridfall::core::{RenderFrame, Session};
use gridfall::input::{map_key, should_quit, Command, InputHandler};
use gridfall::types::TICK_MS;

fn spawn_first_piece(session: &mut Session) {
    session.tick(None, false, TICK_MS);
    assert!(session.playfield().active().is_some());
}

#[test]
fn test_tap_moves_exactly_one_column() {
    let mut session = Session::new(1);
    spawn_first_piece(&mut session);
    let mut input = InputHandler::new();

    input.key_press(Command::MoveLeft);
    let t = input.tick(TICK_MS);
    session.tick(t.action, t.soft_drop, TICK_MS);
    assert_eq!(session.playfield().active().unwrap().col, 2);

    // No further press: the column holds until DAS would engage.
    for _ in 0..5 {
        let t = input.tick(TICK_MS);
        session.tick(t.action, t.soft_drop, TICK_MS);
    }
    assert_eq!(session.playfield().active().unwrap().col, 2);
}

#[test]
fn test_held_direction_walks_to_the_wall() {
    let mut session = Session::new(1);
    spawn_first_piece(&mut session);
    let mut input = InputHandler::new();

    // A held key arrives as a press plus a stream of terminal repeats.
    input.key_press(Command::MoveLeft);
    for _ in 0..40 {
        input.key_press(Command::MoveLeft);
        let t = input.tick(TICK_MS);
        session.tick(t.action, t.soft_drop, TICK_MS);
    }
    assert_eq!(session.playfield().active().unwrap().col, 0);
}

#[test]
fn test_soft_drop_modifier_speeds_the_fall() {
    let mut session = Session::new(1);
    spawn_first_piece(&mut session);
    let mut input = InputHandler::new();

    for _ in 0..20 {
        input.key_press(Command::SoftDrop);
        let t = input.tick(TICK_MS);
        assert!(t.soft_drop);
        session.tick(t.action, t.soft_drop, TICK_MS);
    }
    assert!(session.playfield().active().unwrap().row >= 2);
}

#[test]
fn test_releasing_soft_drop_restores_normal_gravity() {
    let mut session = Session::new(1);
    spawn_first_piece(&mut session);
    let mut input = InputHandler::new();

    for _ in 0..3 {
        input.key_press(Command::SoftDrop);
        let t = input.tick(TICK_MS);
        session.tick(t.action, t.soft_drop, TICK_MS);
    }
    input.key_release(Command::SoftDrop);

    for _ in 0..10 {
        let t = input.tick(TICK_MS);
        assert!(!t.soft_drop);
        session.tick(t.action, t.soft_drop, TICK_MS);
    }
    // Well under one second of game clock: normal gravity has not stepped.
    assert_eq!(session.playfield().active().unwrap().row, 0);
}

#[test]
fn test_pause_and_restart_keys_route_like_the_run_loop() {
    let mut session = Session::new(9);
    let mut input = InputHandler::new();
    spawn_first_piece(&mut session);

    // Esc pauses and clears held input, as the run loop does.
    input.key_press(Command::MoveLeft);
    match map_key(KeyEvent::from(KeyCode::Esc)) {
        Some(Command::Pause) => {
            session.toggle_pause();
            input.reset();
        }
        other => panic!("Esc mapped to {:?}", other),
    }
    assert!(session.is_paused());
    assert_eq!(input.tick(TICK_MS).action, None);

    let mut frame = RenderFrame::default();
    session.render_into(&mut frame);
    assert!(frame.paused);

    // R starts a new game, unpaused and empty.
    match map_key(KeyEvent::from(KeyCode::Char('r'))) {
        Some(Command::Restart) => {
            session.new_game();
            input.reset();
        }
        other => panic!("r mapped to {:?}", other),
    }
    assert!(!session.is_paused());
    session.render_into(&mut frame);
    assert_eq!(frame.score, 0);
    assert!(frame.cells.iter().flatten().all(|c| c.is_none()));

    // q still quits regardless of game state.
    assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
}
