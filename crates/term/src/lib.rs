//! Terminal surface for the maze.
//!
//! A small rendering layer: the maze is rendered into a plain character
//! framebuffer by a pure view, then flushed to the terminal by a renderer that
//! owns the escape-sequence encoding. Raw mode is held by a scoped guard.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep every byte sent to the terminal inspectable in tests
//! - Always hand the terminal back in the state it was found

pub mod fb;
pub mod game_view;
pub mod guard;
pub mod renderer;

pub use tui_maze_core as core;
pub use tui_maze_types as types;

pub use fb::FrameBuffer;
pub use game_view::{MazeView, Viewport};
pub use guard::RawModeGuard;
pub use renderer::{encode_clear_into, encode_frame_into, TerminalRenderer};
