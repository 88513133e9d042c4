//! Game state - the grid plus the tracked entity positions and end flags.

use crate::grid::Grid;
use crate::types::{Outcome, Position};

/// Complete state of one maze game.
///
/// `start` and `goal` are fixed when the map is loaded; only the movement
/// engine relocates `player`, and only the win check sets `won`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) grid: Grid,
    pub(crate) player: Position,
    start: Position,
    goal: Position,
    quit: bool,
    pub(crate) won: bool,
}

impl GameState {
    /// Build a state from a populated grid. The player begins on `start`.
    pub fn new(grid: Grid, start: Position, goal: Position) -> Self {
        Self {
            grid,
            player: start,
            start,
            goal,
            quit: false,
            won: false,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn player(&self) -> Position {
        self.player
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn goal(&self) -> Position {
        self.goal
    }

    pub fn quit(&self) -> bool {
        self.quit
    }

    pub fn won(&self) -> bool {
        self.won
    }

    /// Mark the game as finished. Never cleared.
    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    pub fn outcome(&self) -> Outcome {
        Outcome::from_won(self.won)
    }
}
