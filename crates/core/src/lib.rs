//! Core game logic module - pure, deterministic, and testable
//!
//! This crate holds the maze rules and state. It has no dependencies on the
//! terminal, threads, or input handling, so every rule can be exercised in
//! plain unit tests.
//!
//! # Module Structure
//!
//! - [`grid`]: rectangular cell storage with fail-fast indexing
//! - [`game_state`]: grid plus player/start/goal positions and the quit/won flags
//! - [`movement`]: move validation, the start-tile restore rule, and win detection
//! - [`map`]: loading a [`GameState`] from the digit map format
//!
//! # Example
//!
//! ```
//! use tui_maze_core::{apply_move, check_win, parse_map};
//! use tui_maze_types::Direction;
//!
//! let mut game = parse_map("100\n040\n003").unwrap();
//!
//! assert!(apply_move(&mut game, Direction::Right));
//! assert!(apply_move(&mut game, Direction::Down));
//! assert!(check_win(&mut game));
//!
//! // The grid edge blocks like a wall.
//! assert!(!apply_move(&mut game, Direction::Right));
//! ```

pub mod game_state;
pub mod grid;
pub mod map;
pub mod movement;

pub use tui_maze_types as types;

pub use game_state::GameState;
pub use grid::Grid;
pub use map::{load_map, parse_map, MapError};
pub use movement::{apply_move, check_win};
