//! MazeView: maps `core::GameState` into a terminal framebuffer.
//!
//! This module is pure apart from [`Viewport::query`]. It can be unit-tested.

use std::io;

use crate::core::GameState;
use crate::fb::FrameBuffer;
use crate::types::CELL_COLUMNS;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Current size of the controlling terminal.
    pub fn query() -> io::Result<Self> {
        let (width, height) = crossterm::terminal::size()?;
        Ok(Self { width, height })
    }

    /// Whether a `grid_width x grid_height` maze can be shown without clipping.
    ///
    /// Each cell needs [`CELL_COLUMNS`] columns and each grid row one line.
    pub fn fits(&self, grid_width: usize, grid_height: usize) -> bool {
        let needed_cols = grid_width.saturating_mul(CELL_COLUMNS as usize);
        self.width as usize >= needed_cols && self.height as usize >= grid_height
    }
}

/// Renders the maze as glyphs separated by single spaces, one line per row.
#[derive(Debug, Clone, Copy, Default)]
pub struct MazeView;

impl MazeView {
    pub fn new() -> Self {
        Self
    }

    /// Frame size needed for a `grid_width x grid_height` maze.
    pub fn frame_size(grid_width: usize, grid_height: usize) -> (u16, u16) {
        let cols = (grid_width * CELL_COLUMNS as usize).saturating_sub(1);
        (to_u16(cols), to_u16(grid_height))
    }

    /// Render into an existing framebuffer, resizing it to fit the maze.
    pub fn render_into(&self, state: &GameState, fb: &mut FrameBuffer) {
        let (w, h) = state.grid().dimensions();
        let (fw, fh) = Self::frame_size(w, h);
        fb.resize(fw, fh);
        fb.clear();

        for (y, row) in state.grid().rows().enumerate().take(fh as usize) {
            for (x, cell) in row.iter().enumerate() {
                let col = x * CELL_COLUMNS as usize;
                if col >= fw as usize {
                    break;
                }
                fb.set(col as u16, y as u16, cell.glyph());
            }
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, state: &GameState) -> FrameBuffer {
        let mut fb = FrameBuffer::new(0, 0);
        self.render_into(state, &mut fb);
        fb
    }
}

fn to_u16(v: usize) -> u16 {
    u16::try_from(v).unwrap_or(u16::MAX)
}
