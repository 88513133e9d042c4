//! Game controller: startup checks, thread lifetimes, terminal restore.
//!
//! Phases run strictly in order:
//!
//! ```text
//! Init -> SizeChecked -> MapLoaded -> Running -> Finished
//! ```
//!
//! Everything that can fail fatally happens before raw mode is entered, so a
//! rejected start never touches the terminal configuration or draws a frame.

use std::io::Write;
use std::path::Path;
use std::thread;

use tracing::{debug, error, info, warn};
use tui_maze_core::{load_map, GameState};
use tui_maze_input::{KeySource, TerminalKeys};
use tui_maze_term::{RawModeGuard, TerminalRenderer, Viewport};
use tui_maze_types::{Cell, Outcome, CELL_COLUMNS};

use crate::error::StartupError;
use crate::input_loop::run_input_loop;
use crate::render_loop::run_render_loop;
use crate::session::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Init,
    SizeChecked,
    MapLoaded,
    Running,
    Finished,
}

#[derive(Debug)]
pub struct Controller {
    phase: Phase,
}

impl Default for Controller {
    fn default() -> Self {
        Self::new()
    }
}

impl Controller {
    pub fn new() -> Self {
        Self { phase: Phase::Init }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    fn advance(&mut self, next: Phase) {
        debug!(from = ?self.phase, to = ?next, "phase change");
        self.phase = next;
    }

    /// Play the map at `path` on the real terminal.
    pub fn play(&mut self, path: &Path) -> Result<Outcome, StartupError> {
        let viewport = self.check_size()?;
        let state = self.load(path, viewport)?;

        let guard = RawModeGuard::enter().map_err(StartupError::RawMode)?;
        let mut keys = TerminalKeys::new();
        let mut renderer = TerminalRenderer::stdout(viewport);
        let state = self.run(state, &mut keys, &mut renderer);
        if let Err(err) = guard.restore() {
            warn!(error = %err, "failed to restore terminal mode");
        }

        Ok(state.outcome())
    }

    /// Init -> SizeChecked: query the terminal dimensions.
    pub fn check_size(&mut self) -> Result<Viewport, StartupError> {
        let viewport = Viewport::query().map_err(StartupError::TerminalSize)?;
        debug!(cols = viewport.width, rows = viewport.height, "terminal size");
        self.advance(Phase::SizeChecked);
        Ok(viewport)
    }

    /// SizeChecked -> MapLoaded: read the map and make sure it fits on screen.
    pub fn load(&mut self, path: &Path, viewport: Viewport) -> Result<GameState, StartupError> {
        let state = load_map(path)?;
        info!(path = %path.display(), "map loaded");
        self.admit(state, viewport)
    }

    /// Accept an already parsed map if `viewport` can display it.
    pub fn admit(&mut self, state: GameState, viewport: Viewport) -> Result<GameState, StartupError> {
        let (grid_width, grid_height) = state.grid().dimensions();
        if !viewport.fits(grid_width, grid_height) {
            return Err(StartupError::TerminalTooSmall {
                cols: viewport.width,
                rows: viewport.height,
                grid_width,
                grid_height,
                need_cols: grid_width.saturating_mul(CELL_COLUMNS as usize),
                need_rows: grid_height,
            });
        }

        let players = state.grid().count(Cell::Player);
        let goals = state.grid().count(Cell::Goal);
        if players != 1 || goals != 1 {
            warn!(
                players,
                goals,
                start = ?state.start(),
                goal = ?state.goal(),
                "map should hold exactly one player and one goal; the last of each wins"
            );
        }

        debug!(grid_width, grid_height, "map fits terminal");
        self.advance(Phase::MapLoaded);
        Ok(state)
    }

    /// MapLoaded -> Running -> Finished: run both loops to completion.
    ///
    /// The render loop and the input loop each get their own OS thread and
    /// share one [`Session`] by reference. Returns the final state.
    pub fn run<K, W>(
        &mut self,
        state: GameState,
        keys: &mut K,
        renderer: &mut TerminalRenderer<W>,
    ) -> GameState
    where
        K: KeySource + Send + ?Sized,
        W: Write + Send,
    {
        let session = Session::new(state);
        self.advance(Phase::Running);

        thread::scope(|s| {
            let render = s.spawn(|| run_render_loop(&session, renderer));
            let input = s.spawn(|| run_input_loop(&session, keys));

            if input.join().is_err() {
                error!("input loop panicked");
            }
            match render.join() {
                Ok(outcome) => info!(?outcome, "game finished"),
                Err(_) => error!("render loop panicked"),
            }
        });

        self.advance(Phase::Finished);
        session.into_state()
    }
}
