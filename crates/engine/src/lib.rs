//! Engine-facing surface for drivers.
//!
//! [`api`] exposes the game as plain functions over a `GameState`, and
//! [`session`] wraps a game with a bounded command queue so input events can
//! be collected between frames and applied once per tick.

pub mod api;
pub mod session;

pub use blockfall_types as types;

pub use api::{
    is_game_over, move_down, move_left, move_right, new_game, query_active, query_grid,
    query_score, rotate, tick,
};
pub use session::{CommandQueue, Session, StepReport, COMMAND_QUEUE_CAPACITY};
