//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`] and provides
//! blocking key sources: the real terminal, or a scripted sequence for
//! headless runs.

pub mod keys;
pub mod map;

pub use tui_maze_types as types;

pub use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub use keys::{KeySource, ScriptedKeys, TerminalKeys};
pub use map::{handle_key_event, should_quit};
