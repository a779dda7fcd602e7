//! Free-function API over [`GameState`] for rendering/input drivers.
//!
//! These mirror the methods on `GameState` one to one so an embedding can
//! hold the state in whatever container it likes and call in from a frame
//! callback.

use blockfall_core::{ConfigError, GameConfig, GameState, Piece, TickOutcome};

use crate::types::{RotationDirection, ShapeKind};

/// Start a game on an empty `width x height` grid with the default piece source
pub fn new_game(width: u16, height: u16) -> Result<GameState, ConfigError> {
    GameState::new(GameConfig::new(width, height))
}

/// Advance one logical step (gravity, lock, clear, respawn)
pub fn tick(state: &mut GameState) -> TickOutcome {
    state.tick()
}

pub fn move_left(state: &mut GameState) -> bool {
    state.move_left()
}

pub fn move_right(state: &mut GameState) -> bool {
    state.move_right()
}

/// Soft drop: one row, same legality path as gravity
pub fn move_down(state: &mut GameState) -> bool {
    state.move_down()
}

pub fn rotate(state: &mut GameState, direction: RotationDirection) -> bool {
    state.rotate(direction)
}

/// Locked cells for rendering the field
pub fn query_grid(state: &GameState) -> impl Iterator<Item = (i16, i16, ShapeKind)> + '_ {
    state.grid().occupied()
}

/// The falling piece, if any
pub fn query_active(state: &GameState) -> Option<Piece> {
    state.active()
}

pub fn query_score(state: &GameState) -> u32 {
    state.score()
}

pub fn is_game_over(state: &GameState) -> bool {
    state.is_game_over()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_game_validates_dimensions() {
        assert!(new_game(10, 20).is_ok());
        assert_eq!(new_game(0, 20).unwrap_err(), ConfigError::WidthOutOfRange(0));
        assert_eq!(new_game(10, 1).unwrap_err(), ConfigError::HeightOutOfRange(1));
    }

    #[test]
    fn fresh_game_has_empty_field_and_active_piece() {
        let state = new_game(10, 20).unwrap();
        assert_eq!(query_grid(&state).count(), 0);
        assert_eq!(query_active(&state).map(|p| p.anchor()), Some((4, 0)));
        assert_eq!(query_score(&state), 0);
        assert!(!is_game_over(&state));
    }

    #[test]
    fn ticks_eventually_lock_into_the_grid() {
        let mut state = new_game(10, 20).unwrap();
        let mut locked = false;
        for _ in 0..25 {
            if let TickOutcome::Locked(_) = tick(&mut state) {
                locked = true;
                break;
            }
        }
        assert!(locked);
        assert_eq!(query_grid(&state).count(), 4);
    }
}
