//! Map loader - builds a [`GameState`] from the plain-text map format
//!
//! Each line is a grid row and each character a cell digit (`0`-`4`).
//! The grid is as wide as the first line and as tall as the number of lines.
//! The last `4` seen becomes the player/start position and the last `3` the
//! goal; both default to `(0, 0)` when the map has none.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::game_state::GameState;
use crate::grid::Grid;
use crate::types::{Cell, Position};

#[derive(Debug, Error)]
pub enum MapError {
    #[error("couldn't read map file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("map is empty")]
    Empty,
    #[error("invalid cell {found:?} at row {row}, column {col} (expected a digit 0-4)")]
    InvalidCell { row: usize, col: usize, found: char },
    #[error("row {row} has {len} cells but the map is {width} wide")]
    RowTooLong { row: usize, len: usize, width: usize },
}

/// Read and parse the map file at `path`.
pub fn load_map(path: impl AsRef<Path>) -> Result<GameState, MapError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| MapError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_map(&text)
}

/// Parse map text.
///
/// Rows shorter than the first are padded with empty cells.
pub fn parse_map(text: &str) -> Result<GameState, MapError> {
    let lines: Vec<&str> = text
        .lines()
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect();

    let width = lines.first().map_or(0, |line| line.chars().count());
    let height = lines.len();
    if width == 0 || height == 0 {
        return Err(MapError::Empty);
    }

    let mut grid = Grid::new(width, height);
    let mut start = Position::default();
    let mut goal = Position::default();

    for (row, line) in lines.iter().enumerate() {
        let len = line.chars().count();
        if len > width {
            return Err(MapError::RowTooLong { row, len, width });
        }
        for (col, found) in line.chars().enumerate() {
            let cell = Cell::from_digit(found).ok_or(MapError::InvalidCell { row, col, found })?;
            let pos = Position::new(col, row);
            match cell {
                Cell::Player => start = pos,
                Cell::Goal => goal = pos,
                _ => {}
            }
            grid.set(pos, cell);
        }
    }

    Ok(GameState::new(grid, start, goal))
}
