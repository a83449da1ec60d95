//! 8-connected (Moore) neighbourhood: cardinal + diagonal.

use life_core::{Cell, Grid};
use smallvec::SmallVec;

/// All 8 offsets as `(d_row, d_col)`: N, S, W, E, NW, NE, SW, SE.
pub const OFFSETS_8: [(i32, i32); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// The neighbours of `cell` that exist on the `i32` plane.
///
/// Interior cells have 8. Cells on the rim of the plane have fewer: offsets
/// that would overflow are dropped, never wrapped or clamped.
pub fn neighbours(cell: Cell) -> SmallVec<[Cell; 8]> {
    OFFSETS_8
        .iter()
        .filter_map(|&(dr, dc)| cell.checked_offset(dr, dc))
        .collect()
}

/// Number of live neighbours of `cell` in `grid`.
pub fn live_neighbours(grid: &Grid, cell: Cell) -> u8 {
    neighbours(cell)
        .into_iter()
        .filter(|&n| grid.is_alive(n))
        .count() as u8
}
