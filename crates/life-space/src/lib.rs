//! Spatial helpers for the unbounded Life plane.
//!
//! Two concerns live here:
//!
//! - [`moore`]: the 8-connected neighbourhood, with the `i32` rim of the
//!   plane treated as permanently dead instead of wrapping.
//! - [`camera`]: the pannable, zoomable projection between integer cells
//!   and screen pixels used by touch input and by the view model.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod camera;
pub mod moore;

pub use camera::{
    grid_line_offset, screen_to_world, screen_to_world_point, visible_cells, world_to_screen,
    Camera, Viewport, DEFAULT_CELL_SIZE,
};
pub use moore::{live_neighbours, neighbours, OFFSETS_8};
