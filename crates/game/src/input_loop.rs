//! Input loop: the only writer of grid and player state.

use tracing::{debug, info, trace, warn};
use tui_maze_core::{apply_move, check_win};
use tui_maze_input::{handle_key_event, KeySource};
use tui_maze_types::GameAction;

use crate::session::Session;

/// Sets `quit` when the input loop ends, however it ends, so the render loop
/// is never left waiting on a loop that is gone.
struct QuitOnExit<'a>(&'a Session);

impl Drop for QuitOnExit<'_> {
    fn drop(&mut self) {
        self.0.request_quit();
    }
}

/// Read keys until the player quits, wins, or input runs out.
///
/// Keys are read without holding the lock. Each accepted move is applied and
/// win-checked in one critical section before the render loop is signalled.
pub fn run_input_loop<K: KeySource + ?Sized>(session: &Session, keys: &mut K) {
    let _quit = QuitOnExit(session);

    loop {
        let key = match keys.next_key() {
            Ok(Some(key)) => key,
            Ok(None) => {
                info!("input closed, quitting");
                return;
            }
            Err(err) => {
                warn!(error = %err, "key read failed, quitting");
                return;
            }
        };

        let Some(action) = handle_key_event(key) else {
            trace!(code = ?key.code, "ignored key");
            continue;
        };

        let direction = match action {
            GameAction::Quit => {
                debug!("quit requested");
                return;
            }
            GameAction::Move(direction) => direction,
        };

        let mut shared = session.lock();
        if !apply_move(&mut shared.state, direction) {
            trace!(?direction, "move blocked");
            continue;
        }
        if check_win(&mut shared.state) {
            info!(goal = ?shared.state.goal(), "goal reached");
            shared.state.request_quit();
            drop(shared);
            session.notify();
            return;
        }
        shared.redraw_requested = true;
        drop(shared);
        session.notify();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_maze_core::parse_map;
    use tui_maze_input::ScriptedKeys;
    use tui_maze_types::Position;

    fn session() -> Session {
        Session::new(parse_map("100\n040\n003").unwrap())
    }

    #[test]
    fn winning_move_sets_won_and_quit() {
        let session = session();
        let mut keys = ScriptedKeys::from_chars("dsq");
        run_input_loop(&session, &mut keys);

        // `q` is never read: the loop stops at the goal.
        assert_eq!(keys.remaining(), 1);
        let state = session.into_state();
        assert!(state.won());
        assert!(state.quit());
        assert_eq!(state.player(), Position::new(2, 2));
    }

    #[test]
    fn quit_key_stops_without_winning() {
        let session = session();
        let mut keys = ScriptedKeys::from_chars("dqs");
        run_input_loop(&session, &mut keys);

        assert_eq!(keys.remaining(), 1);
        let state = session.into_state();
        assert!(state.quit());
        assert!(!state.won());
        assert_eq!(state.player(), Position::new(2, 1));
    }

    #[test]
    fn blocked_and_unknown_keys_request_no_redraw() {
        let session = Session::new(parse_map("010\n140\n003").unwrap());
        let mut keys = ScriptedKeys::from_chars("wxa");
        run_input_loop(&session, &mut keys);

        let shared = session.lock();
        assert!(!shared.redraw_requested);
        assert!(shared.state.quit());
        assert_eq!(shared.state.player(), Position::new(1, 1));
    }

    #[test]
    fn accepted_move_requests_redraw() {
        let session = session();
        run_input_loop(&session, &mut ScriptedKeys::from_chars("d"));
        assert!(session.lock().redraw_requested);
    }
}
