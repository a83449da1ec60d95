//! The render-ready snapshot handed to shells.

use std::fmt;

/// Read-only projection of the core state, recomputed on every render.
///
/// All lengths and positions are in screen pixels. The shell draws one
/// `cell_size`-sided square per entry of `cells` and tiles grid lines from
/// `(modx, mody)` in steps of `cell_size`, without any camera math of its own.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewModel {
    /// Top-left corner of every visible live cell, in row-major cell order.
    pub cells: Vec<[f64; 2]>,
    /// Side length of one cell on screen.
    pub cell_size: f64,
    /// Camera pan scaled to screen pixels (`pan * zoom`).
    pub camera_pan: [f64; 2],
    /// Screen x of the vertical grid line nearest the left edge, in `[0, cell_size)`.
    pub modx: f64,
    /// Screen y of the horizontal grid line nearest the top edge, in `[0, cell_size)`.
    pub mody: f64,
    /// Total live cells, visible or not.
    pub live_count: u64,
    /// Generations stepped since the last load or clear.
    pub generation: u64,
    /// Auxiliary counter driven by `Increment`/`Decrement`.
    pub counter: i64,
}

impl fmt::Display for ViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.live_count == 0 {
            return write!(f, "Empty");
        }
        write!(
            f,
            "generation {}: {} live, {} visible",
            self.generation,
            self.live_count,
            self.cells.len()
        )
    }
}
