//! Game runtime: the threaded input/render pipeline and its controller.
//!
//! Two OS threads share one [`Session`]:
//!
//! - the input loop blocks on key presses, applies moves and checks for a win
//! - the render loop sleeps on the session condvar and repaints on request
//!
//! The [`Controller`] validates the terminal and the map, owns both thread
//! lifetimes, and restores the terminal afterwards. Errors travel back to the
//! caller as [`StartupError`]; nothing in here exits the process.

pub mod controller;
pub mod error;
pub mod input_loop;
pub mod render_loop;
pub mod session;
pub mod settings;

pub use controller::{Controller, Phase};
pub use error::StartupError;
pub use input_loop::run_input_loop;
pub use render_loop::run_render_loop;
pub use session::{Session, Shared};
pub use settings::Settings;
