//! Key mapping from terminal events to game actions.

use crate::types::{Direction, GameAction};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    if should_quit(key) {
        return Some(GameAction::Quit);
    }
    match key.code {
        KeyCode::Char('w') => Some(GameAction::Move(Direction::Up)),
        KeyCode::Char('a') => Some(GameAction::Move(Direction::Left)),
        KeyCode::Char('s') => Some(GameAction::Move(Direction::Down)),
        KeyCode::Char('d') => Some(GameAction::Move(Direction::Right)),
        _ => None,
    }
}

/// Check if key should quit the game.
///
/// Raw mode turns Ctrl-C into an ordinary key press, so it is treated like `q`.
pub fn should_quit(key: KeyEvent) -> bool {
    key.code == KeyCode::Char('q')
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
