//! One generation of B3/S23 on the sparse plane.
//!
//! Only live cells and their neighbours are examined: a neighbour-count map
//! is built by scattering from every live cell, then each counted cell is
//! judged by the classic rule. Work is proportional to the population, not
//! to the extent of the plane.
//!
//! Neighbours that would fall off the `i32` plane do not exist, so the rim
//! of the plane behaves as permanently dead.

use indexmap::IndexMap;
use life_core::{Cell, Grid, LimitExceeded};
use life_space::neighbours;
use tracing::trace;

/// Advance `grid` by one generation.
///
/// The result is canonical: cells are inserted in row-major order, so the
/// same input always yields the same grid, including its internal order.
pub fn step(grid: &Grid) -> Grid {
    let next = next_generation(grid);
    let mut out = Grid::with_capacity(next.len());
    out.extend(next);
    out
}

/// Like [`step`], but refuses a generation with more than `max_live` cells.
pub fn step_checked(grid: &Grid, max_live: usize) -> Result<Grid, LimitExceeded> {
    let next = next_generation(grid);
    if next.len() > max_live {
        return Err(LimitExceeded {
            live: next.len(),
            max: max_live,
        });
    }
    let mut out = Grid::with_capacity(next.len());
    out.extend(next);
    Ok(out)
}

/// Advance `n` generations. `step_n(g, 0)` is a copy of `g`.
pub fn step_n(grid: &Grid, n: usize) -> Grid {
    let mut current = grid.clone();
    for _ in 0..n {
        current = step(&current);
    }
    current
}

/// Live cells of the next generation, sorted row-major.
fn next_generation(grid: &Grid) -> Vec<Cell> {
    let mut counts: IndexMap<Cell, u8> = IndexMap::with_capacity(grid.len() * 8);
    for cell in grid.iter_alive() {
        for n in neighbours(cell) {
            *counts.entry(n).or_insert(0) += 1;
        }
    }

    let mut next: Vec<Cell> = counts
        .iter()
        .filter(|&(&cell, &count)| count == 3 || (count == 2 && grid.is_alive(cell)))
        .map(|(&cell, _)| cell)
        .collect();
    next.sort_unstable();

    trace!(
        live = grid.len(),
        candidates = counts.len(),
        next = next.len(),
        "step"
    );
    next
}
