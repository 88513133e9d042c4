//! Terminal maze walker (workspace facade crate).
//!
//! Re-exports the member crates under one roof so the binary, integration
//! tests and benches can use `tui_maze::{core,game,input,term,types}`.

pub use tui_maze_core as core;
pub use tui_maze_game as game;
pub use tui_maze_input as input;
pub use tui_maze_term as term;
pub use tui_maze_types as types;
