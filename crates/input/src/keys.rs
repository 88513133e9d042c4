//! Blocking key sources.

use std::collections::VecDeque;
use std::io;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

/// A blocking supplier of key presses.
///
/// `Ok(None)` means the input is exhausted and no further keys will arrive.
pub trait KeySource {
    fn next_key(&mut self) -> io::Result<Option<KeyEvent>>;
}

/// Reads key presses from the terminal (expects raw mode).
///
/// Blocks until a key is pressed. Resize, mouse and focus events are skipped,
/// as are key releases on terminals that report them.
#[derive(Debug, Default)]
pub struct TerminalKeys;

impl TerminalKeys {
    pub fn new() -> Self {
        Self
    }
}

impl KeySource for TerminalKeys {
    fn next_key(&mut self) -> io::Result<Option<KeyEvent>> {
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Release {
                    return Ok(Some(key));
                }
            }
        }
    }
}

/// Replays a fixed key sequence, then reports end of input.
#[derive(Debug, Clone, Default)]
pub struct ScriptedKeys {
    keys: VecDeque<KeyEvent>,
}

impl ScriptedKeys {
    pub fn new(keys: impl IntoIterator<Item = KeyEvent>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
        }
    }

    /// Script made of plain character presses.
    pub fn from_chars(chars: &str) -> Self {
        Self::new(chars.chars().map(|ch| KeyEvent::from(event::KeyCode::Char(ch))))
    }

    pub fn remaining(&self) -> usize {
        self.keys.len()
    }
}

impl KeySource for ScriptedKeys {
    fn next_key(&mut self) -> io::Result<Option<KeyEvent>> {
        Ok(self.keys.pop_front())
    }
}
