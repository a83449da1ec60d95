//! Standard patterns, as `(row, col)` cell lists near the origin.
//!
//! - [`blinker`] / [`blinker_vertical`]: period-2 oscillator, both phases
//! - [`glider`]: moves one cell down-right every four generations
//! - [`block`], [`tub`], [`beehive`]: still lifes
//! - [`r_pentomino`]: long-lived methuselah, useful for benchmarks

use life_core::Cell;

use crate::cells;

/// Horizontal blinker centred on the origin.
pub fn blinker() -> Vec<Cell> {
    cells(&[(0, -1), (0, 0), (0, 1)])
}

/// Vertical blinker centred on the origin; the other phase of [`blinker`].
pub fn blinker_vertical() -> Vec<Cell> {
    cells(&[(-1, 0), (0, 0), (1, 0)])
}

/// Glider heading down-right, with its bounding box at the origin.
///
/// ```text
/// . # .
/// . . #
/// # # #
/// ```
pub fn glider() -> Vec<Cell> {
    cells(&[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)])
}

/// 2x2 block.
pub fn block() -> Vec<Cell> {
    cells(&[(0, 0), (0, 1), (1, 0), (1, 1)])
}

/// Tub: four cells around an empty centre.
pub fn tub() -> Vec<Cell> {
    cells(&[(-1, 0), (0, -1), (0, 1), (1, 0)])
}

/// Beehive.
pub fn beehive() -> Vec<Cell> {
    cells(&[(0, 1), (0, 2), (1, 0), (1, 3), (2, 1), (2, 2)])
}

/// R-pentomino.
pub fn r_pentomino() -> Vec<Cell> {
    cells(&[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)])
}
