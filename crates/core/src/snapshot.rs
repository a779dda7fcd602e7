use serde::Serialize;

use crate::game_state::Phase;
use crate::piece::Piece;
use crate::types::{Cell, Rotation, ShapeKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ActiveSnapshot {
    pub kind: ShapeKind,
    pub rotation: Rotation,
    pub x: i16,
    pub y: i16,
    pub cells: [(i16, i16); 4],
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind,
            rotation: value.rotation,
            x: value.x,
            y: value.y,
            cells: value.occupied_cells(),
        }
    }
}

/// Render-facing copy of a game, rows top to bottom
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    pub width: u16,
    pub height: u16,
    pub board: Vec<Vec<Cell>>,
    pub active: Option<ActiveSnapshot>,
    pub ghost_y: Option<i16>,
    pub next: ShapeKind,
    pub phase: Phase,
    pub game_over: bool,
    pub score: u32,
    pub lines: u32,
    pub level: u32,
    pub pieces_locked: u32,
    pub tick_interval_ms: u32,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        !self.game_over
    }

    /// Cell at (x, y) with the active piece drawn over the locked field
    pub fn composed_cell(&self, x: i16, y: i16) -> Cell {
        if let Some(active) = &self.active {
            if active.cells.contains(&(x, y)) {
                return Some(active.kind);
            }
        }
        if x < 0 || y < 0 {
            return None;
        }
        self.board
            .get(y as usize)
            .and_then(|row| row.get(x as usize))
            .copied()
            .flatten()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            width: 0,
            height: 0,
            board: Vec::new(),
            active: None,
            ghost_y: None,
            next: ShapeKind::I,
            phase: Phase::Spawning,
            game_over: false,
            score: 0,
            lines: 0,
            level: 0,
            pieces_locked: 0,
            tick_interval_ms: 0,
        }
    }
}
