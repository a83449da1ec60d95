//! Patterns the core can stamp onto the grid.

use life_core::{Cell, CellOverflow};

/// Glider heading down-right, relative to the top-left of its bounding box.
pub const GLIDER: [(i32, i32); 5] = [(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)];

/// `pattern` with its reference point moved to `at`.
///
/// Fails without a partial result if any cell would leave the plane.
pub fn place(pattern: &[(i32, i32)], at: Cell) -> Result<Vec<Cell>, CellOverflow> {
    pattern.iter().map(|&(dr, dc)| at.offset(dr, dc)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use life_test_utils::fixtures;

    #[test]
    fn glider_matches_fixture() {
        assert_eq!(place(&GLIDER, Cell::ORIGIN), Ok(fixtures::glider()));
    }

    #[test]
    fn place_offsets_every_cell() {
        let cells = place(&GLIDER, Cell::new(10, -10)).unwrap();
        assert_eq!(
            cells,
            vec![
                Cell::new(10, -9),
                Cell::new(11, -8),
                Cell::new(12, -10),
                Cell::new(12, -9),
                Cell::new(12, -8),
            ]
        );
    }

    #[test]
    fn place_off_the_plane_fails() {
        assert_eq!(
            place(&GLIDER, Cell::new(i32::MAX - 1, 0)),
            Err(CellOverflow)
        );
    }
}
