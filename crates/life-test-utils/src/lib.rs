//! Test utilities for Life development.
//!
//! Provides the standard still lifes and oscillators in [`fixtures`], plus
//! small helpers for building grids from coordinate literals and for
//! inspecting effect lists.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use life_core::{Alert, Cell, Effect, Grid};

/// Cells from `(row, col)` literals.
pub fn cells(coords: &[(i32, i32)]) -> Vec<Cell> {
    coords.iter().map(|&c| Cell::from(c)).collect()
}

/// A grid from `(row, col)` literals.
pub fn grid(coords: &[(i32, i32)]) -> Grid {
    coords.iter().map(|&c| Cell::from(c)).collect()
}

/// `pattern` shifted by `(d_row, d_col)`.
///
/// Panics on overflow; fixtures are placed well inside the plane.
pub fn shifted(pattern: &[Cell], d_row: i32, d_col: i32) -> Vec<Cell> {
    pattern
        .iter()
        .map(|c| c.offset(d_row, d_col).expect("fixture placed off the plane"))
        .collect()
}

/// Every alert in an effect list, in order.
pub fn alerts(effects: &[Effect]) -> Vec<&Alert> {
    effects.iter().filter_map(Effect::as_alert).collect()
}

/// Number of render effects in an effect list.
pub fn render_count(effects: &[Effect]) -> usize {
    effects.iter().filter(|e| e.is_render()).count()
}

/// Whether `effects` is exactly one render request.
pub fn is_render_only(effects: &[Effect]) -> bool {
    matches!(effects, [Effect::Render])
}
