use std::io;

use thiserror::Error;
use tui_maze_core::MapError;

/// Fatal conditions detected before play begins.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("failed to get terminal size")]
    TerminalSize(#[source] io::Error),
    #[error(transparent)]
    Map(#[from] MapError),
    #[error(
        "terminal is {cols}x{rows} but a {grid_width}x{grid_height} maze needs at least {need_cols}x{need_rows}"
    )]
    TerminalTooSmall {
        cols: u16,
        rows: u16,
        grid_width: usize,
        grid_height: usize,
        need_cols: usize,
        need_rows: usize,
    },
    #[error("failed to enter raw mode")]
    RawMode(#[source] io::Error),
}
