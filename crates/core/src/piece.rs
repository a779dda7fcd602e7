//! Piece module - tetromino shapes and the active falling piece
//!
//! Shapes live in a static table of mino offsets inside a 4x4 box, indexed by
//! kind and rotation. Every `North` entry starts on row 0 of its box, so a
//! freshly spawned piece sits on the anchor row. Rotation is a plain table
//! lookup with the anchor kept in place; there is no kick search.

use serde::Serialize;

use crate::types::{Rotation, RotationDirection, ShapeKind};

/// Offset of a single mino relative to piece anchor
pub type MinoOffset = (i16, i16);

/// Shape of a piece - 4 mino offsets from piece anchor
pub type PieceShape = [MinoOffset; 4];

/// Offsets for every (kind, rotation), rows in [`ShapeKind::index`] order,
/// columns in [`Rotation::index`] order.
static SHAPES: [[PieceShape; 4]; 7] = [
    // I: re-anchored on its north row, rotating about the same box center
    [
        [(0, 0), (1, 0), (2, 0), (3, 0)],
        [(2, -1), (2, 0), (2, 1), (2, 2)],
        [(0, 1), (1, 1), (2, 1), (3, 1)],
        [(1, -1), (1, 0), (1, 1), (1, 2)],
    ],
    // O
    [
        [(1, 0), (2, 0), (1, 1), (2, 1)],
        [(1, 0), (2, 0), (1, 1), (2, 1)],
        [(1, 0), (2, 0), (1, 1), (2, 1)],
        [(1, 0), (2, 0), (1, 1), (2, 1)],
    ],
    // T
    [
        [(1, 0), (0, 1), (1, 1), (2, 1)],
        [(1, 0), (1, 1), (2, 1), (1, 2)],
        [(0, 1), (1, 1), (2, 1), (1, 2)],
        [(1, 0), (0, 1), (1, 1), (1, 2)],
    ],
    // S
    [
        [(1, 0), (2, 0), (0, 1), (1, 1)],
        [(1, 0), (1, 1), (2, 1), (2, 2)],
        [(1, 1), (2, 1), (0, 2), (1, 2)],
        [(0, 0), (0, 1), (1, 1), (1, 2)],
    ],
    // Z
    [
        [(0, 0), (1, 0), (1, 1), (2, 1)],
        [(2, 0), (1, 1), (2, 1), (1, 2)],
        [(0, 1), (1, 1), (1, 2), (2, 2)],
        [(1, 0), (0, 1), (1, 1), (0, 2)],
    ],
    // J
    [
        [(0, 0), (0, 1), (1, 1), (2, 1)],
        [(1, 0), (2, 0), (1, 1), (1, 2)],
        [(0, 1), (1, 1), (2, 1), (2, 2)],
        [(1, 0), (1, 1), (0, 2), (1, 2)],
    ],
    // L
    [
        [(2, 0), (0, 1), (1, 1), (2, 1)],
        [(1, 0), (1, 1), (1, 2), (2, 2)],
        [(0, 1), (1, 1), (2, 1), (0, 2)],
        [(0, 0), (1, 0), (1, 1), (1, 2)],
    ],
];

/// Get the shape (mino offsets) for a kind and rotation
#[inline]
pub fn shape_offsets(kind: ShapeKind, rotation: Rotation) -> &'static PieceShape {
    &SHAPES[kind.index()][rotation.index()]
}

/// The active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Piece {
    pub kind: ShapeKind,
    pub rotation: Rotation,
    pub x: i16,
    pub y: i16,
}

impl Piece {
    /// Create a piece in spawn rotation at the given anchor
    pub fn spawn(kind: ShapeKind, (x, y): (i16, i16)) -> Self {
        Self {
            kind,
            rotation: Rotation::North,
            x,
            y,
        }
    }

    pub fn anchor(&self) -> (i16, i16) {
        (self.x, self.y)
    }

    /// Get the mino offsets for current rotation
    pub fn offsets(&self) -> &'static PieceShape {
        shape_offsets(self.kind, self.rotation)
    }

    /// Absolute grid coordinates of the four minos
    pub fn occupied_cells(&self) -> [(i16, i16); 4] {
        self.offsets().map(|(dx, dy)| (self.x + dx, self.y + dy))
    }

    /// Candidate translated by (dx, dy); legality is not checked
    #[must_use]
    pub fn moved(&self, dx: i16, dy: i16) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Candidate rotated one step about the same anchor; legality is not checked
    #[must_use]
    pub fn rotated(&self, direction: RotationDirection) -> Self {
        Self {
            rotation: self.rotation.rotate(direction),
            ..*self
        }
    }
}
