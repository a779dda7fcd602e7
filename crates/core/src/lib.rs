//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the rules of the falling-block engine. It has **no
//! dependencies** on rendering, input devices, timers or I/O, which makes it:
//!
//! - **Deterministic**: the same configuration and call sequence always
//!   produce the same game
//! - **Passive**: nothing happens between calls; the driver decides when to
//!   `tick()`
//! - **Portable**: usable from a terminal, a browser canvas or a headless test
//!
//! # Module Structure
//!
//! - [`grid`]: the field of locked cells with tri-state queries and line clearing
//! - [`piece`]: static shape table and the active piece value
//! - [`collision`]: the single legality check for candidate placements
//! - [`game_state`]: the spawn, fall, lock, clear state machine
//! - [`rng`]: seeded 7-bag and fixed-cycle piece sources
//! - [`scoring`]: line-clear points, levels and suggested tick intervals
//! - [`config`]: game parameters and their validation
//! - [`snapshot`]: serializable view for presentation layers
//!
//! # Rules
//!
//! - Pieces spawn at the top-center anchor in their north rotation
//! - Moves and rotations are accepted only when every mino stays inside the
//!   field on an empty cell; there are no wall kicks
//! - Each tick moves the piece down one row, or locks it when it cannot fall
//! - Full rows are removed after every lock and the rows above shift down
//! - A spawn that collides ends the game
//!
//! # Example
//!
//! ```
//! use blockfall_core::{GameConfig, GameState, TickOutcome};
//! use blockfall_types::RotationDirection;
//!
//! let mut game = GameState::new(GameConfig::default()).unwrap();
//!
//! game.move_right();
//! game.rotate(RotationDirection::Clockwise);
//! assert_eq!(game.tick(), TickOutcome::Fell);
//!
//! game.hard_drop();
//! assert_eq!(game.pieces_locked(), 1);
//! assert!(!game.is_game_over());
//! ```

pub mod collision;
pub mod config;
pub mod game_state;
pub mod grid;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use collision::{is_legal, Collision};
pub use config::{ConfigError, GameConfig};
pub use game_state::{GameState, LockEvent, Phase, TickOutcome};
pub use grid::{Grid, GridError, Occupancy};
pub use piece::{shape_offsets, Piece, PieceShape};
pub use rng::{PieceQueue, PieceSource, SimpleRng};
pub use scoring::{level_for_lines, line_clear_score, tick_interval_ms};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
