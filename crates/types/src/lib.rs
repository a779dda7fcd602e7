//! Core types module - shared data structures and constants
//!
//! This crate defines the vocabulary shared by the engine, the driver-facing
//! session and any presentation layer: shape kinds, rotation states, driver
//! commands and the tuning constants of the rule set. Everything here is plain
//! data with no behavior beyond parsing and index arithmetic.
//!
//! # Field Dimensions
//!
//! The grid size is chosen per game. The defaults match the classic playfield:
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, top to bottom; row 19 is the floor)
//! - **Spawn anchor**: `(min(width / 2 - 1, width - 4), 0)`, i.e. `(4, 0)` on the default
//!   field and `(0, 0)` on a 4-wide one
//!
//! # Gravity Intervals by Level
//!
//! The engine itself advances one row per `tick()`; these intervals are the
//! suggested spacing between ticks for a driver (milliseconds per row):
//!
//! | Level | Interval |
//! |-------|----------|
//! | 0 | 1000ms |
//! | 1 | 800ms |
//! | 2 | 650ms |
//! | 3 | 500ms |
//! | 4 | 400ms |
//! | 5 | 320ms |
//! | 6 | 250ms |
//! | 7 | 200ms |
//! | 8 | 160ms |
//! | 9+ | shrinks by 10ms per level down to 100ms |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{GameCommand, Rotation, RotationDirection, ShapeKind};
//!
//! let kind = ShapeKind::parse("t").unwrap();
//! assert_eq!(kind, ShapeKind::T);
//!
//! let rotation = Rotation::North.rotate(RotationDirection::Clockwise);
//! assert_eq!(rotation, Rotation::East);
//!
//! let command = GameCommand::parse("ccw").unwrap();
//! assert_eq!(command, GameCommand::Rotate(RotationDirection::CounterClockwise));
//! ```

use serde::{Deserialize, Serialize};

/// Default grid width in cells
pub const DEFAULT_WIDTH: u16 = 10;

/// Default grid height in cells
pub const DEFAULT_HEIGHT: u16 = 20;

/// Smallest accepted width or height (a vertical I piece spans four rows)
pub const MIN_DIMENSION: u16 = 4;

/// Largest accepted width or height
pub const MAX_DIMENSION: u16 = 256;

/// Default seed for the 7-bag piece source
pub const DEFAULT_SEED: u32 = 1;

/// Lines required to advance one level
pub const LINES_PER_LEVEL: u32 = 10;

/// Line clear scoring table (Classic Nintendo scoring)
///
/// Base points for clearing N lines at level 0:
/// - 0 lines: 0 points
/// - 1 line: 40 points
/// - 2 lines: 100 points
/// - 3 lines: 300 points
/// - 4 lines: 1200 points
///
/// Points are multiplied by (level + 1).
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

/// Suggested tick intervals by level (milliseconds per row)
///
/// Index 0 = Level 0, Index 8 = Level 8
pub const DROP_INTERVALS: [u32; 9] = [1000, 800, 650, 500, 400, 320, 250, 200, 160];

/// Interval reduction per level past the end of [`DROP_INTERVALS`]
pub const DROP_INTERVAL_STEP_MS: u32 = 10;

/// Absolute minimum tick interval (100ms)
pub const DROP_INTERVAL_MIN_MS: u32 = 100;

/// The seven tetromino shape kinds
///
/// Each kind doubles as the color/identity tag of the cells it locks:
/// - **I**: Cyan, horizontal bar
/// - **O**: Yellow, 2x2 square
/// - **T**: Magenta, T-shaped
/// - **S**: Green, S-shaped
/// - **Z**: Red, Z-shaped (mirror of S)
/// - **J**: Blue, J-shaped
/// - **L**: Orange, L-shaped (mirror of J)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl ShapeKind {
    /// All kinds in table order
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::I,
        ShapeKind::O,
        ShapeKind::T,
        ShapeKind::S,
        ShapeKind::Z,
        ShapeKind::J,
        ShapeKind::L,
    ];

    /// Row index of this kind in the shape table
    pub fn index(self) -> usize {
        match self {
            ShapeKind::I => 0,
            ShapeKind::O => 1,
            ShapeKind::T => 2,
            ShapeKind::S => 3,
            ShapeKind::Z => 4,
            ShapeKind::J => 5,
            ShapeKind::L => 6,
        }
    }

    /// Parse a kind from its letter (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::ShapeKind;
    ///
    /// assert_eq!(ShapeKind::parse("i"), Some(ShapeKind::I));
    /// assert_eq!(ShapeKind::parse("L"), Some(ShapeKind::L));
    /// assert_eq!(ShapeKind::parse("x"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "i" => Some(ShapeKind::I),
            "o" => Some(ShapeKind::O),
            "t" => Some(ShapeKind::T),
            "s" => Some(ShapeKind::S),
            "z" => Some(ShapeKind::Z),
            "j" => Some(ShapeKind::J),
            "l" => Some(ShapeKind::L),
            _ => None,
        }
    }

    /// Parse a kind from a single character (case-insensitive)
    pub fn from_char(c: char) -> Option<Self> {
        let mut buf = [0u8; 4];
        Self::parse(c.encode_utf8(&mut buf))
    }

    /// Uppercase letter used in text dumps
    pub fn as_char(self) -> char {
        match self {
            ShapeKind::I => 'I',
            ShapeKind::O => 'O',
            ShapeKind::T => 'T',
            ShapeKind::S => 'S',
            ShapeKind::Z => 'Z',
            ShapeKind::J => 'J',
            ShapeKind::L => 'L',
        }
    }
}

/// Rotation states, indexed 0-3
///
/// - **North**: Spawn orientation (index 0)
/// - **East**: Rotated 90° clockwise (index 1)
/// - **South**: Rotated 180° (index 2)
/// - **West**: Rotated 270° clockwise (index 3)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Rotation index (0-3)
    pub fn index(self) -> usize {
        match self {
            Rotation::North => 0,
            Rotation::East => 1,
            Rotation::South => 2,
            Rotation::West => 3,
        }
    }

    /// Build a rotation from any index, wrapping modulo 4
    pub fn from_index(index: usize) -> Self {
        match index % 4 {
            0 => Rotation::North,
            1 => Rotation::East,
            2 => Rotation::South,
            _ => Rotation::West,
        }
    }

    /// Advance or retreat one step, wrapping
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::{Rotation, RotationDirection};
    ///
    /// assert_eq!(Rotation::West.rotate(RotationDirection::Clockwise), Rotation::North);
    /// assert_eq!(Rotation::North.rotate(RotationDirection::CounterClockwise), Rotation::West);
    /// ```
    pub fn rotate(self, direction: RotationDirection) -> Self {
        match direction {
            RotationDirection::Clockwise => Self::from_index(self.index() + 1),
            RotationDirection::CounterClockwise => Self::from_index(self.index() + 3),
        }
    }
}

/// Direction of a single rotation step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RotationDirection {
    Clockwise,
    CounterClockwise,
}

/// Commands a driver can queue against a game
///
/// Every command is safe to issue at any time; commands that cannot take
/// effect are no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCommand {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down (soft drop)
    MoveDown,
    /// Rotate piece one step
    Rotate(RotationDirection),
    /// Drop piece to its landing row and lock it
    HardDrop,
    /// Start over with the configured piece source
    Restart,
}

impl GameCommand {
    /// Parse a command token (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::{GameCommand, RotationDirection};
    ///
    /// assert_eq!(GameCommand::parse("left"), Some(GameCommand::MoveLeft));
    /// assert_eq!(GameCommand::parse("moveDown"), Some(GameCommand::MoveDown));
    /// assert_eq!(GameCommand::parse("cw"), Some(GameCommand::Rotate(RotationDirection::Clockwise)));
    /// assert_eq!(GameCommand::parse("jump"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "left" | "moveleft" => Some(GameCommand::MoveLeft),
            "right" | "moveright" => Some(GameCommand::MoveRight),
            "down" | "movedown" | "softdrop" => Some(GameCommand::MoveDown),
            "cw" | "rotatecw" => Some(GameCommand::Rotate(RotationDirection::Clockwise)),
            "ccw" | "rotateccw" => Some(GameCommand::Rotate(RotationDirection::CounterClockwise)),
            "drop" | "harddrop" => Some(GameCommand::HardDrop),
            "restart" => Some(GameCommand::Restart),
            _ => None,
        }
    }

    /// Convert to the short token accepted by [`GameCommand::parse`]
    pub fn as_str(&self) -> &'static str {
        match self {
            GameCommand::MoveLeft => "left",
            GameCommand::MoveRight => "right",
            GameCommand::MoveDown => "down",
            GameCommand::Rotate(RotationDirection::Clockwise) => "cw",
            GameCommand::Rotate(RotationDirection::CounterClockwise) => "ccw",
            GameCommand::HardDrop => "drop",
            GameCommand::Restart => "restart",
        }
    }
}

/// A cell on the grid
///
/// - `None`: Empty cell
/// - `Some(ShapeKind)`: Occupied, tagged with the kind that locked it
pub type Cell = Option<ShapeKind>;
