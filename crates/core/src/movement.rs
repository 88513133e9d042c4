//! Movement engine: collision checks, player relocation and win detection.

use crate::game_state::GameState;
use crate::types::{Cell, Direction};

/// Try to move the player one cell towards `direction`.
///
/// Grid edges behave like walls. A blocked move leaves the state untouched and
/// returns `false`. On success the vacated cell reverts to `StartMarker` when
/// it is the start tile and to `Empty` otherwise.
pub fn apply_move(state: &mut GameState, direction: Direction) -> bool {
    let (width, height) = state.grid.dimensions();
    let Some(target) = state.player.step(direction, width, height) else {
        return false;
    };
    if state.grid.at(target) == Cell::Wall {
        return false;
    }

    let vacated = if state.player == state.start() {
        Cell::StartMarker
    } else {
        Cell::Empty
    };
    state.grid.set(state.player, vacated);
    state.player = target;
    state.grid.set(target, Cell::Player);
    true
}

/// Report whether the player stands on the goal, latching `won` once it does.
pub fn check_win(state: &mut GameState) -> bool {
    if state.player == state.goal() {
        state.won = true;
    }
    state.won
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::parse_map;
    use crate::types::Position;

    fn sample() -> GameState {
        parse_map("100\n040\n003").unwrap()
    }

    #[test]
    fn test_move_right_then_down_reaches_goal() {
        let mut state = sample();
        assert!(apply_move(&mut state, Direction::Right));
        assert!(!check_win(&mut state));
        assert!(apply_move(&mut state, Direction::Down));
        assert!(check_win(&mut state));
        assert!(state.won());
        assert_eq!(state.player(), Position::new(2, 2));
    }

    #[test]
    fn test_blocked_moves_leave_state_unchanged() {
        let mut state = parse_map("010\n140\n003").unwrap();
        let before = state.clone();
        assert!(!apply_move(&mut state, Direction::Up));
        assert!(!apply_move(&mut state, Direction::Left));
        assert_eq!(state, before);
    }

    #[test]
    fn test_edge_is_a_wall() {
        let mut state = parse_map("40\n03").unwrap();
        let before = state.clone();
        assert!(!apply_move(&mut state, Direction::Up));
        assert!(!apply_move(&mut state, Direction::Left));
        assert_eq!(state, before);
    }

    #[test]
    fn test_start_tile_is_restored_as_marker() {
        let mut state = sample();
        let start = state.start();
        assert!(apply_move(&mut state, Direction::Down));
        assert_eq!(state.grid().at(start), Cell::StartMarker);

        // Leaving a non-start tile reverts it to empty.
        let left_from = state.player();
        assert!(apply_move(&mut state, Direction::Left));
        assert_eq!(state.grid().at(left_from), Cell::Empty);
    }

    #[test]
    fn test_win_is_latched() {
        let mut state = sample();
        apply_move(&mut state, Direction::Right);
        apply_move(&mut state, Direction::Down);
        assert!(check_win(&mut state));
        apply_move(&mut state, Direction::Up);
        assert!(check_win(&mut state));
    }
}
