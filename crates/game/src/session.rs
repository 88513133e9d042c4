//! Shared session: one lock around the game state, one condvar for redraws.

use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};

use tui_maze_core::GameState;

/// State guarded by the session lock.
#[derive(Debug)]
pub struct Shared {
    pub state: GameState,
    /// Set by the input loop after a move, cleared by the render loop.
    pub redraw_requested: bool,
}

/// Game state shared by the input and render loops.
///
/// Every read and write of the grid, the positions and the end flags happens
/// under the single lock, so a move is never observed half-applied. The
/// condvar is paired with that lock and woken on `redraw_requested || quit`.
#[derive(Debug)]
pub struct Session {
    shared: Mutex<Shared>,
    wake: Condvar,
}

impl Session {
    pub fn new(state: GameState) -> Self {
        Self {
            shared: Mutex::new(Shared {
                state,
                redraw_requested: false,
            }),
            wake: Condvar::new(),
        }
    }

    /// Acquire the session lock.
    ///
    /// A panicking holder cannot leave a half-applied move behind (each
    /// critical section is a complete update), so poisoning is ignored.
    pub fn lock(&self) -> MutexGuard<'_, Shared> {
        self.shared.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Block until a redraw is requested or the game is over.
    ///
    /// The predicate is checked under the lock before the first wait and after
    /// every wakeup, so neither spurious wakeups nor early signals are lost.
    pub fn wait_for_work(&self) -> MutexGuard<'_, Shared> {
        self.wake
            .wait_while(self.lock(), |shared| {
                !shared.redraw_requested && !shared.state.quit()
            })
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Ask the render loop to repaint.
    pub fn request_redraw(&self) {
        self.lock().redraw_requested = true;
        self.wake.notify_one();
    }

    /// Set `quit` and wake the render loop so it can exit.
    pub fn request_quit(&self) {
        self.lock().state.request_quit();
        self.wake.notify_one();
    }

    pub fn notify(&self) {
        self.wake.notify_one();
    }

    pub fn into_state(self) -> GameState {
        self.shared
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
            .state
    }
}
