//! Render loop: event-driven repaint on redraw requests.

use std::io::Write;

use tracing::{debug, warn};
use tui_maze_term::{FrameBuffer, MazeView, TerminalRenderer};
use tui_maze_types::Outcome;

use crate::session::Session;

/// Paint the maze once, then again after every requested redraw, until the
/// game is over. Finishes with a cleared screen and the end-of-game banner.
///
/// Frames are rendered into the framebuffer while holding the lock and
/// written to the terminal after releasing it. Write failures are logged and
/// do not end the loop.
pub fn run_render_loop<W: Write>(session: &Session, renderer: &mut TerminalRenderer<W>) -> Outcome {
    let view = MazeView::new();
    let mut fb = FrameBuffer::new(0, 0);

    view.render_into(&session.lock().state, &mut fb);
    if let Err(err) = renderer.clear() {
        warn!("screen clear failed: {err:#}");
    }
    draw(renderer, &fb);

    let outcome = loop {
        let mut shared = session.wait_for_work();
        if shared.state.quit() {
            break shared.state.outcome();
        }
        shared.redraw_requested = false;
        view.render_into(&shared.state, &mut fb);
        drop(shared);
        draw(renderer, &fb);
    };

    debug!(?outcome, "render loop finished");
    if let Err(err) = renderer.finish(outcome) {
        warn!("end banner failed: {err:#}");
    }
    outcome
}

fn draw<W: Write>(renderer: &mut TerminalRenderer<W>, fb: &FrameBuffer) {
    if let Err(err) = renderer.draw(fb) {
        warn!("frame draw failed: {err:#}");
    }
}
