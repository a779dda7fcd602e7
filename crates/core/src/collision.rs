//! Collision resolver - the single authority on whether a placement is legal
//!
//! A placement is legal when every mino lies inside the field and on an empty
//! cell. There is no exemption above the top row or below the floor.

use crate::grid::{Grid, Occupancy};
use crate::piece::Piece;

/// Why a placement is illegal, naming the first offending mino
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    OutOfBounds { x: i16, y: i16 },
    Overlap { x: i16, y: i16 },
}

/// Check a candidate placement against the grid
pub fn check(grid: &Grid, piece: &Piece) -> Result<(), Collision> {
    for (x, y) in piece.occupied_cells() {
        match grid.cell(x, y) {
            Occupancy::Empty => {}
            Occupancy::Occupied(_) => return Err(Collision::Overlap { x, y }),
            Occupancy::OutOfBounds => return Err(Collision::OutOfBounds { x, y }),
        }
    }
    Ok(())
}

/// Whether every mino of `piece` is in bounds and unoccupied
#[inline]
pub fn is_legal(grid: &Grid, piece: &Piece) -> bool {
    piece
        .occupied_cells()
        .iter()
        .all(|&(x, y)| grid.is_vacant(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ShapeKind;

    #[test]
    fn test_spawn_on_empty_grid_is_legal() {
        let grid = Grid::new(10, 20);
        for kind in ShapeKind::ALL {
            let piece = Piece::spawn(kind, (4, 0));
            assert!(is_legal(&grid, &piece), "{:?}", kind);
            assert_eq!(check(&grid, &piece), Ok(()));
        }
    }

    #[test]
    fn test_walls_and_floor() {
        let grid = Grid::new(10, 20);
        let piece = Piece::spawn(ShapeKind::I, (4, 0));

        assert!(is_legal(&grid, &piece.moved(2, 0)));
        assert_eq!(
            check(&grid, &piece.moved(3, 0)),
            Err(Collision::OutOfBounds { x: 10, y: 0 })
        );
        assert!(!is_legal(&grid, &piece.moved(-5, 0)));
        assert!(is_legal(&grid, &piece.moved(0, 19)));
        assert!(!is_legal(&grid, &piece.moved(0, 20)));
        assert!(!is_legal(&grid, &piece.moved(0, -1)));
    }

    #[test]
    fn test_overlap_reports_cell() {
        let mut grid = Grid::new(10, 20);
        grid.set(6, 1, Some(ShapeKind::Z)).unwrap();
        let piece = Piece::spawn(ShapeKind::T, (4, 0));

        assert!(!is_legal(&grid, &piece));
        assert_eq!(check(&grid, &piece), Err(Collision::Overlap { x: 6, y: 1 }));
    }

    #[test]
    fn test_rotation_above_top_row_is_illegal() {
        let grid = Grid::new(10, 20);
        let piece = Piece::spawn(ShapeKind::I, (4, 0));
        let rotated = piece.rotated(crate::types::RotationDirection::Clockwise);
        assert!(!is_legal(&grid, &rotated));
        assert!(is_legal(&grid, &rotated.moved(0, 1)));
    }
}
