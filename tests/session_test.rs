//! End-to-end sessions: scripted keys in, terminal bytes out.

use std::path::Path;

use tui_maze::core::GameState;
use tui_maze::game::{Controller, Phase, StartupError};
use tui_maze::input::{KeyCode, KeyEvent, KeyModifiers, ScriptedKeys};
use tui_maze::term::{TerminalRenderer, Viewport};
use tui_maze::types::{Cell, Outcome, Position, QUIT_MESSAGE, WIN_MESSAGE};

fn map_path(name: &str) -> String {
    format!("{}/maps/{}", env!("CARGO_MANIFEST_DIR"), name)
}

fn play(state: GameState, keys: &mut ScriptedKeys) -> (GameState, String) {
    let viewport = Viewport::new(80, 24);
    let mut controller = Controller::new();
    let state = controller.admit(state, viewport).unwrap();
    let mut renderer = TerminalRenderer::new(Vec::new(), viewport);
    let state = controller.run(state, keys, &mut renderer);
    assert_eq!(controller.phase(), Phase::Finished);
    (state, String::from_utf8(renderer.into_inner()).unwrap())
}

fn load(name: &str) -> GameState {
    Controller::new()
        .load(Path::new(&map_path(name)), Viewport::new(80, 24))
        .unwrap()
}

#[test]
fn right_then_down_wins_and_congratulates() {
    let (state, out) = play(load("tiny.map"), &mut ScriptedKeys::from_chars("ds"));

    assert!(state.won());
    assert!(state.quit());
    assert_eq!(state.outcome(), Outcome::Won);
    assert!(out.contains(WIN_MESSAGE));
    assert!(!out.contains(QUIT_MESSAGE));
}

#[test]
fn quitting_before_the_goal_prints_the_quit_notice() {
    let (state, out) = play(load("tiny.map"), &mut ScriptedKeys::from_chars("dq"));

    assert!(state.quit());
    assert!(!state.won());
    assert_eq!(state.player(), Position::new(2, 1));
    assert!(out.contains(QUIT_MESSAGE));
    assert!(!out.contains(WIN_MESSAGE));
}

#[test]
fn ctrl_c_quits_like_q() {
    let mut keys = ScriptedKeys::new([
        KeyEvent::from(KeyCode::Char('d')),
        KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        KeyEvent::from(KeyCode::Char('s')),
    ]);
    let (state, out) = play(load("tiny.map"), &mut keys);

    assert_eq!(keys.remaining(), 1);
    assert!(!state.won());
    assert!(out.contains(QUIT_MESSAGE));
}

#[test]
fn exhausted_input_ends_the_game_as_a_quit() {
    let (state, out) = play(load("tiny.map"), &mut ScriptedKeys::from_chars("xyz"));

    assert!(state.quit());
    assert!(!state.won());
    assert_eq!(state.player(), state.start());
    assert!(out.contains(QUIT_MESSAGE));
}

#[test]
fn classic_map_can_be_solved() {
    // Shortest route; the trailing `q` must never be read.
    let route = "ssssssdddssaaassdddddwwwwddddwwwwwwddddddddddssssssssaassdd";
    let mut keys = ScriptedKeys::from_chars(&format!("{route}q"));
    let (state, out) = play(load("classic.map"), &mut keys);

    assert_eq!(keys.remaining(), 1);
    assert!(state.won());
    assert_eq!(state.player(), state.goal());
    assert_eq!(state.grid().count(Cell::Player), 1);
    assert_eq!(state.grid().at(state.start()), Cell::StartMarker);
    assert!(out.contains(WIN_MESSAGE));
}

#[test]
fn undersized_terminal_aborts_before_any_frame() {
    let mut controller = Controller::new();
    let err = controller
        .load(Path::new(&map_path("classic.map")), Viewport::new(43, 24))
        .unwrap_err();

    assert!(matches!(err, StartupError::TerminalTooSmall { need_cols: 44, .. }));
    assert_ne!(controller.phase(), Phase::MapLoaded);
    assert_ne!(controller.phase(), Phase::Running);
}

#[test]
fn unreadable_map_is_reported() {
    let err = Controller::new()
        .load(Path::new(&map_path("missing.map")), Viewport::new(80, 24))
        .unwrap_err();
    assert!(matches!(err, StartupError::Map(_)));
    assert!(err.to_string().contains("missing.map"));
}
