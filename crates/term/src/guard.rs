//! Scoped raw-mode terminal state.

use std::io::{self, Write};

use crossterm::{cursor, terminal, QueueableCommand};

/// Raw mode (no line buffering, no echo) with a hidden cursor, restored on drop.
///
/// Dropping the guard restores the terminal on every exit path, including
/// early returns and unwinding panics. Call [`RawModeGuard::restore`] to see
/// restore errors instead of discarding them.
#[derive(Debug)]
pub struct RawModeGuard {
    active: bool,
}

impl RawModeGuard {
    pub fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let guard = Self { active: true };
        let mut stdout = io::stdout();
        stdout.queue(cursor::Hide)?;
        stdout.flush()?;
        Ok(guard)
    }

    pub fn restore(mut self) -> io::Result<()> {
        self.active = false;
        restore_terminal()
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if self.active {
            let _ = restore_terminal();
        }
    }
}

fn restore_terminal() -> io::Result<()> {
    let mut stdout = io::stdout();
    let shown = stdout
        .queue(cursor::Show)
        .and_then(|out| out.flush());
    // Leave raw mode even if the cursor command could not be written.
    terminal::disable_raw_mode()?;
    shown
}
