//! Core types module - shared data structures and constants
//!
//! This crate defines the plain data types shared by every layer of the maze
//! walker: grid cells, coordinates, movement directions, player actions and
//! the end-of-game outcome. Nothing here performs I/O.
//!
//! # Map digits and glyphs
//!
//! | Cell | Digit | Glyph |
//! |------|-------|-------|
//! | `Empty` | `0` | `' '` |
//! | `Wall` | `1` | `'H'` |
//! | `StartMarker` | `2` | `'*'` |
//! | `Goal` | `3` | `'X'` |
//! | `Player` | `4` | `'O'` |
//!
//! # Examples
//!
//! ```
//! use tui_maze_types::{Cell, Direction, Position};
//!
//! assert_eq!(Cell::from_digit('1'), Some(Cell::Wall));
//! assert_eq!(Cell::Player.glyph(), 'O');
//!
//! let pos = Position::new(0, 1);
//! assert_eq!(pos.step(Direction::Right, 3, 3), Some(Position::new(1, 1)));
//! assert_eq!(pos.step(Direction::Left, 3, 3), None);
//! ```

/// Terminal columns used per grid cell (glyph plus separating space).
pub const CELL_COLUMNS: u16 = 2;

/// Banner printed when the player reaches the goal.
pub const WIN_MESSAGE: &str = "Congratulations! You have won the game.";

/// Banner printed when the player quits before winning.
pub const QUIT_MESSAGE: &str = "Keyboard interrupt! Quitting now...";

/// State of a single grid position.
///
/// The discriminants match the digits used in map files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Cell {
    #[default]
    Empty = 0,
    Wall = 1,
    StartMarker = 2,
    Goal = 3,
    Player = 4,
}

impl Cell {
    /// All cell states in digit order.
    pub const ALL: [Cell; 5] = [
        Cell::Empty,
        Cell::Wall,
        Cell::StartMarker,
        Cell::Goal,
        Cell::Player,
    ];

    /// Parse a map digit (`'0'..='4'`).
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_maze_types::Cell;
    ///
    /// assert_eq!(Cell::from_digit('0'), Some(Cell::Empty));
    /// assert_eq!(Cell::from_digit('4'), Some(Cell::Player));
    /// assert_eq!(Cell::from_digit('5'), None);
    /// assert_eq!(Cell::from_digit('x'), None);
    /// ```
    pub fn from_digit(ch: char) -> Option<Self> {
        match ch {
            '0' => Some(Cell::Empty),
            '1' => Some(Cell::Wall),
            '2' => Some(Cell::StartMarker),
            '3' => Some(Cell::Goal),
            '4' => Some(Cell::Player),
            _ => None,
        }
    }

    /// Map digit for this cell.
    pub fn digit(self) -> char {
        char::from(b'0' + self as u8)
    }

    /// Glyph drawn on screen for this cell.
    pub fn glyph(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Wall => 'H',
            Cell::StartMarker => '*',
            Cell::Goal => 'X',
            Cell::Player => 'O',
        }
    }
}

/// Grid coordinate: `col` grows to the right, `row` grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub col: usize,
    pub row: usize,
}

impl Position {
    pub const fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }

    /// Neighbouring position one cell towards `direction`.
    ///
    /// Returns `None` when the neighbour falls outside a `width x height` grid.
    pub fn step(self, direction: Direction, width: usize, height: usize) -> Option<Self> {
        let (col, row) = match direction {
            Direction::Up => (Some(self.col), self.row.checked_sub(1)),
            Direction::Down => (Some(self.col), self.row.checked_add(1)),
            Direction::Left => (self.col.checked_sub(1), Some(self.row)),
            Direction::Right => (self.col.checked_add(1), Some(self.row)),
        };
        match (col, row) {
            (Some(col), Some(row)) if col < width && row < height => Some(Self { col, row }),
            _ => None,
        }
    }
}

/// The four movement directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];
}

/// Actions produced by keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Try to move the player one cell
    Move(Direction),
    /// Leave the game without winning
    Quit,
}

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Quit,
}

impl Outcome {
    pub fn from_won(won: bool) -> Self {
        if won {
            Outcome::Won
        } else {
            Outcome::Quit
        }
    }

    /// End-of-game message for this outcome.
    pub fn banner(self) -> &'static str {
        match self {
            Outcome::Won => WIN_MESSAGE,
            Outcome::Quit => QUIT_MESSAGE,
        }
    }
}
