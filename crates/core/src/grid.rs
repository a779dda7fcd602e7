//! Grid module - the field of locked cells
//!
//! The grid is a `width x height` field where each cell is empty or tagged
//! with the shape kind that locked it. Storage is a flat row-major vector so a
//! whole row is one contiguous slice.
//! Coordinates: (x, y) where x grows left to right and y grows top to bottom;
//! row 0 is the top row and row `height - 1` is the floor.

use std::fmt;

use crate::types::{Cell, ShapeKind};

/// Result of a tri-state occupancy query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Occupancy {
    Empty,
    Occupied(ShapeKind),
    OutOfBounds,
}

/// Misuse of the grid API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    OutOfBounds { x: i16, y: i16 },
    CellOccupied { x: i16, y: i16 },
}

impl GridError {
    pub fn code(self) -> &'static str {
        match self {
            GridError::OutOfBounds { .. } => "out_of_bounds",
            GridError::CellOccupied { .. } => "cell_occupied",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            GridError::OutOfBounds { .. } => "coordinate lies outside the field",
            GridError::CellOccupied { .. } => "cell is already occupied",
        }
    }
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (GridError::OutOfBounds { x, y } | GridError::CellOccupied { x, y }) = *self;
        write!(f, "{} at ({}, {})", self.message(), x, y)
    }
}

impl std::error::Error for GridError {}

/// The locked-cell field, flat row-major storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: u16,
    height: u16,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new empty grid
    ///
    /// Both dimensions must be non-zero; `GameConfig::validate` enforces the
    /// playable range for games.
    pub fn new(width: u16, height: u16) -> Self {
        debug_assert!(width > 0 && height > 0, "empty grid {}x{}", width, height);
        Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i16, y: i16) -> Option<usize> {
        if !self.contains(x, y) {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Whether (x, y) lies inside the field
    #[inline(always)]
    pub fn contains(&self, x: i16, y: i16) -> bool {
        x >= 0 && y >= 0 && (x as i32) < self.width as i32 && (y as i32) < self.height as i32
    }

    /// Tri-state occupancy of (x, y)
    pub fn cell(&self, x: i16, y: i16) -> Occupancy {
        match self.index(x, y) {
            None => Occupancy::OutOfBounds,
            Some(idx) => match self.cells[idx] {
                None => Occupancy::Empty,
                Some(kind) => Occupancy::Occupied(kind),
            },
        }
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i16, y: i16) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Whether (x, y) is occupied; an out-of-field coordinate is an error, not `false`
    pub fn is_occupied(&self, x: i16, y: i16) -> Result<bool, GridError> {
        match self.cell(x, y) {
            Occupancy::Empty => Ok(false),
            Occupancy::Occupied(_) => Ok(true),
            Occupancy::OutOfBounds => Err(GridError::OutOfBounds { x, y }),
        }
    }

    /// Check if position is within bounds and empty
    #[inline(always)]
    pub fn is_vacant(&self, x: i16, y: i16) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    /// Overwrite a single cell
    pub fn set(&mut self, x: i16, y: i16, cell: Cell) -> Result<(), GridError> {
        let idx = self.index(x, y).ok_or(GridError::OutOfBounds { x, y })?;
        self.cells[idx] = cell;
        Ok(())
    }

    /// Mark every coordinate occupied with `kind`
    ///
    /// All coordinates are validated before any cell is written, so a failed
    /// lock leaves the grid untouched.
    pub fn lock(&mut self, cells: &[(i16, i16)], kind: ShapeKind) -> Result<(), GridError> {
        for &(x, y) in cells {
            if self.is_occupied(x, y)? {
                return Err(GridError::CellOccupied { x, y });
            }
        }

        for &(x, y) in cells {
            self.set(x, y, Some(kind))?;
        }

        Ok(())
    }

    fn row(&self, y: usize) -> &[Cell] {
        let width = self.width as usize;
        &self.cells[y * width..(y + 1) * width]
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: i16) -> bool {
        if y < 0 || y as i32 >= self.height as i32 {
            return false;
        }
        self.row(y as usize).iter().all(|cell| cell.is_some())
    }

    /// Remove every full row and return how many were removed
    ///
    /// Rows are scanned bottom to top with a read and a write cursor; each kept
    /// row moves down by the number of full rows found beneath it and the
    /// vacated rows at the top are emptied.
    pub fn clear_full_rows(&mut self) -> usize {
        let width = self.width as usize;
        let height = self.height as usize;
        let mut write_y = height;
        let mut cleared = 0;

        for read_y in (0..height).rev() {
            if self.row(read_y).iter().all(|cell| cell.is_some()) {
                cleared += 1;
                continue;
            }

            write_y -= 1;
            if write_y != read_y {
                let src_start = read_y * width;
                self.cells
                    .copy_within(src_start..src_start + width, write_y * width);
            }
        }

        if cleared > 0 {
            for cell in &mut self.cells[..write_y * width] {
                *cell = None;
            }
        }

        cleared
    }

    /// Iterate over occupied cells as (x, y, kind), row by row
    pub fn occupied(&self) -> impl Iterator<Item = (i16, i16, ShapeKind)> + '_ {
        let width = self.width as usize;
        self.cells.iter().enumerate().filter_map(move |(idx, cell)| {
            cell.map(|kind| ((idx % width) as i16, (idx / width) as i16, kind))
        })
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Iterate over rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.width.max(1) as usize)
    }

    /// Get a reference to the internal cells
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Empty the entire grid
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }

    /// Build a grid from text rows, top row first; `.` is empty, a shape letter occupies
    #[cfg(test)]
    pub fn from_rows(rows: &[&str]) -> Self {
        let height = rows.len() as u16;
        let width = rows.first().map_or(0, |r| r.len()) as u16;
        let mut grid = Self::new(width, height);
        for (y, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), width as usize);
            for (x, c) in row.chars().enumerate() {
                if c != '.' {
                    grid.set(x as i16, y as i16, ShapeKind::from_char(c)).unwrap();
                }
            }
        }
        grid
    }
}
