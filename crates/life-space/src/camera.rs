//! Camera and viewport: the projection between cells and screen pixels.
//!
//! World space is measured in world units, where one cell is
//! [`Viewport::cell_size`] units wide and cell `(row, col)` is centred on
//! `(col * cell_size, row * cell_size)`. The camera pan is expressed in
//! world units too (pre-zoom), and zoom scales about the viewport centre:
//!
//! ```text
//! screen = (world + pan) * zoom + viewport_center
//! world  = (screen - viewport_center) / zoom - pan
//! ```
//!
//! A positive pan therefore moves content right/down on screen.

use life_core::{Cell, CellOverflow};

/// World size of one cell when nothing else is configured.
pub const DEFAULT_CELL_SIZE: f64 = 30.0;

/// Pan offset and zoom factor.
///
/// The zoom is always within `[MIN_ZOOM, MAX_ZOOM]`: every constructor and
/// setter clamps it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    /// Offset added to world positions before zooming, in world units.
    pan: [f64; 2],
    /// Screen pixels per world unit.
    zoom: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            pan: [0.0, 0.0],
            zoom: 1.0,
        }
    }
}

impl Camera {
    /// Smallest zoom accepted; keeps the inverse transform finite.
    pub const MIN_ZOOM: f64 = 1e-3;
    /// Largest zoom accepted.
    pub const MAX_ZOOM: f64 = 1e4;

    /// Create a camera, clamping `zoom` into range.
    pub fn new(pan: [f64; 2], zoom: f64) -> Self {
        Self {
            pan,
            zoom: Self::clamp_zoom(zoom),
        }
    }

    /// Clamp a zoom into `[MIN_ZOOM, MAX_ZOOM]`. NaN maps to `MIN_ZOOM`.
    pub fn clamp_zoom(zoom: f64) -> f64 {
        if zoom.is_nan() {
            return Self::MIN_ZOOM;
        }
        zoom.clamp(Self::MIN_ZOOM, Self::MAX_ZOOM)
    }

    /// Offset added to world positions before zooming, in world units.
    pub fn pan(&self) -> [f64; 2] {
        self.pan
    }

    /// Screen pixels per world unit.
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Replace the pan, keeping the zoom.
    pub fn set_pan(&mut self, pan: [f64; 2]) {
        self.pan = pan;
    }

    /// Replace the zoom, clamped into range.
    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = Self::clamp_zoom(zoom);
    }

    /// Replace pan and zoom.
    pub fn set(&mut self, pan: [f64; 2], zoom: f64) {
        self.pan = pan;
        self.zoom = Self::clamp_zoom(zoom);
    }

    /// Shift the pan by `delta_pan` (world units) and set a new zoom.
    pub fn pan_zoom(&mut self, delta_pan: [f64; 2], new_zoom: f64) {
        self.pan[0] += delta_pan[0];
        self.pan[1] += delta_pan[1];
        self.zoom = Self::clamp_zoom(new_zoom);
    }

    /// Pan scaled to screen pixels.
    pub fn screen_pan(&self) -> [f64; 2] {
        [self.pan[0] * self.zoom, self.pan[1] * self.zoom]
    }
}

/// The shell's drawing surface and the world size of one cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    /// Width and height in pixels.
    pub size: [f64; 2],
    /// World units per cell.
    pub cell_size: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            size: [600.0, 600.0],
            cell_size: DEFAULT_CELL_SIZE,
        }
    }
}

impl Viewport {
    /// Create a viewport of `width` x `height` pixels.
    pub fn new(width: f64, height: f64, cell_size: f64) -> Self {
        Self {
            size: [width, height],
            cell_size,
        }
    }

    /// Centre of the viewport in pixels.
    pub fn center(&self) -> [f64; 2] {
        [self.size[0] / 2.0, self.size[1] / 2.0]
    }

    /// Side of one cell on screen at the given camera.
    pub fn cell_px(&self, camera: &Camera) -> f64 {
        self.cell_size * camera.zoom
    }
}

/// Screen position of the centre of `cell`.
pub fn world_to_screen(cell: Cell, camera: &Camera, viewport: &Viewport) -> [f64; 2] {
    let world = [
        f64::from(cell.col) * viewport.cell_size,
        f64::from(cell.row) * viewport.cell_size,
    ];
    world_point_to_screen(world, camera, viewport)
}

/// Screen position of a continuous world point.
pub fn world_point_to_screen(world: [f64; 2], camera: &Camera, viewport: &Viewport) -> [f64; 2] {
    let center = viewport.center();
    [
        (world[0] + camera.pan[0]) * camera.zoom + center[0],
        (world[1] + camera.pan[1]) * camera.zoom + center[1],
    ]
}

/// Continuous world point under a screen position. Exact inverse of
/// [`world_point_to_screen`].
pub fn screen_to_world_point(point: [f64; 2], camera: &Camera, viewport: &Viewport) -> [f64; 2] {
    let center = viewport.center();
    [
        (point[0] - center[0]) / camera.zoom - camera.pan[0],
        (point[1] - center[1]) / camera.zoom - camera.pan[1],
    ]
}

/// The cell whose screen square contains `point`.
///
/// Rounds half away from zero. Rejects points that are not finite or whose
/// cell lies outside the `i32` plane.
pub fn screen_to_world(
    point: [f64; 2],
    camera: &Camera,
    viewport: &Viewport,
) -> Result<Cell, CellOverflow> {
    let world = screen_to_world_point(point, camera, viewport);
    Ok(Cell::new(
        to_axis(world[1] / viewport.cell_size)?,
        to_axis(world[0] / viewport.cell_size)?,
    ))
}

fn to_axis(v: f64) -> Result<i32, CellOverflow> {
    let rounded = v.round();
    if !rounded.is_finite() || rounded < f64::from(i32::MIN) || rounded > f64::from(i32::MAX) {
        return Err(CellOverflow);
    }
    Ok(rounded as i32)
}

/// Screen offset `[modx, mody]` of the grid lines nearest the screen origin.
///
/// Grid lines sit on cell borders, half a cell from each cell centre. The
/// result lies in `[0, cell_px)` and is `(pan * zoom) mod (cell_size * zoom)`
/// shifted by the screen position of the origin cell's border.
pub fn grid_line_offset(camera: &Camera, viewport: &Viewport) -> [f64; 2] {
    let cell_px = viewport.cell_px(camera);
    let center = viewport.center();
    let axis = |pan: f64, center: f64| {
        let m = (pan * camera.zoom + center + cell_px / 2.0).rem_euclid(cell_px);
        // rem_euclid can round up to the modulus for tiny negative inputs.
        if m >= cell_px {
            0.0
        } else {
            m
        }
    };
    [axis(camera.pan[0], center[0]), axis(camera.pan[1], center[1])]
}

/// Inclusive `(top_left, bottom_right)` cell bounds of the visible area.
///
/// Bounds saturate at the rim of the plane, which is safe for culling.
pub fn visible_cells(camera: &Camera, viewport: &Viewport) -> (Cell, Cell) {
    let min = screen_to_world_point([0.0, 0.0], camera, viewport);
    let max = screen_to_world_point(viewport.size, camera, viewport);
    let axis = |w: f64| (w / viewport.cell_size).round() as i32;
    (
        Cell::new(axis(min[1]), axis(min[0])),
        Cell::new(axis(max[1]), axis(max[0])),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9 * (1.0 + a.abs().max(b.abs()))
    }

    #[test]
    fn origin_cell_is_at_viewport_center() {
        let cam = Camera::default();
        let vp = Viewport::default();
        assert_eq!(world_to_screen(Cell::ORIGIN, &cam, &vp), [300.0, 300.0]);
    }

    #[test]
    fn columns_map_to_x_rows_to_y() {
        let cam = Camera::default();
        let vp = Viewport::default();
        assert_eq!(world_to_screen(Cell::new(1, 0), &cam, &vp), [300.0, 330.0]);
        assert_eq!(world_to_screen(Cell::new(0, 1), &cam, &vp), [330.0, 300.0]);
    }

    #[test]
    fn positive_pan_moves_content_right() {
        let cam = Camera::new([10.0, -5.0], 2.0);
        let vp = Viewport::default();
        assert_eq!(world_to_screen(Cell::ORIGIN, &cam, &vp), [320.0, 290.0]);
    }

    #[test]
    fn screen_point_inversion() {
        let cam = Camera::new([30.0, 11.0], 1.5);
        let vp = Viewport::default();
        let screen = [200.0, 150.0];
        let world = screen_to_world_point(screen, &cam, &vp);
        assert_ne!(screen, world);
        let back = world_point_to_screen(world, &cam, &vp);
        assert!(approx(back[0], screen[0]) && approx(back[1], screen[1]));
    }

    #[test]
    fn rounds_half_away_from_zero() {
        let cam = Camera::default();
        let vp = Viewport::default();
        // Half a cell right of the origin centre belongs to column 1.
        assert_eq!(screen_to_world([315.0, 300.0], &cam, &vp), Ok(Cell::new(0, 1)));
        // Half a cell left belongs to column -1.
        assert_eq!(screen_to_world([285.0, 300.0], &cam, &vp), Ok(Cell::new(0, -1)));
        assert_eq!(screen_to_world([314.9, 300.0], &cam, &vp), Ok(Cell::ORIGIN));
    }

    #[test]
    fn non_finite_point_rejected() {
        let cam = Camera::default();
        let vp = Viewport::default();
        assert_eq!(screen_to_world([f64::NAN, 0.0], &cam, &vp), Err(CellOverflow));
        assert_eq!(
            screen_to_world([f64::INFINITY, 0.0], &cam, &vp),
            Err(CellOverflow)
        );
    }

    #[test]
    fn far_point_rejected() {
        let cam = Camera::new([0.0, 0.0], Camera::MIN_ZOOM);
        let vp = Viewport::default();
        assert_eq!(screen_to_world([1e12, 0.0], &cam, &vp), Err(CellOverflow));
    }

    #[test]
    fn zoom_is_clamped() {
        assert_eq!(Camera::new([0.0, 0.0], 0.0).zoom, Camera::MIN_ZOOM);
        assert_eq!(Camera::new([0.0, 0.0], -3.0).zoom, Camera::MIN_ZOOM);
        assert_eq!(Camera::new([0.0, 0.0], f64::NAN).zoom, Camera::MIN_ZOOM);
        assert_eq!(Camera::new([0.0, 0.0], 1e9).zoom, Camera::MAX_ZOOM);
    }

    #[test]
    fn pan_zoom_accumulates_pan() {
        let mut cam = Camera::new([1.0, 2.0], 1.0);
        cam.pan_zoom([3.0, -4.0], 2.5);
        assert_eq!(cam.pan, [4.0, -2.0]);
        assert_eq!(cam.zoom, 2.5);
        cam.pan_zoom([0.0, 0.0], 0.0);
        assert_eq!(cam.zoom, Camera::MIN_ZOOM);
    }

    #[test]
    fn setters_keep_zoom_in_range() {
        let mut cam = Camera::default();
        cam.set_zoom(0.0);
        assert_eq!(cam.zoom(), Camera::MIN_ZOOM);
        cam.set_zoom(f64::INFINITY);
        assert_eq!(cam.zoom(), Camera::MAX_ZOOM);
        cam.set([1.0, 1.0], -2.0);
        assert_eq!(cam.zoom(), Camera::MIN_ZOOM);

        cam.set_pan([7.0, -8.0]);
        assert_eq!(cam.pan(), [7.0, -8.0]);
        assert_eq!(cam.zoom(), Camera::MIN_ZOOM);
    }

    #[test]
    fn grid_lines_default_camera() {
        // Centre 300 is a cell centre; borders sit at 285, 315, ... so the
        // line nearest the origin is at 285 mod 30 = 15.
        let off = grid_line_offset(&Camera::default(), &Viewport::default());
        assert_eq!(off, [15.0, 15.0]);
    }

    #[test]
    fn grid_lines_follow_pan() {
        let vp = Viewport::default();
        let off = grid_line_offset(&Camera::new([5.0, -5.0], 1.0), &vp);
        assert_eq!(off, [20.0, 10.0]);
    }

    #[test]
    fn visible_bounds_cover_viewport() {
        let (min, max) = visible_cells(&Camera::default(), &Viewport::default());
        assert_eq!(min, Cell::new(-10, -10));
        assert_eq!(max, Cell::new(10, 10));
    }

    proptest! {
        #[test]
        fn cell_round_trip(
            row in -1_000_000i32..1_000_000,
            col in -1_000_000i32..1_000_000,
            px in -1e6f64..1e6,
            py in -1e6f64..1e6,
            zoom in 0.1f64..10.0,
        ) {
            let cam = Camera::new([px, py], zoom);
            let vp = Viewport::default();
            let cell = Cell::new(row, col);
            let screen = world_to_screen(cell, &cam, &vp);
            prop_assert_eq!(screen_to_world(screen, &cam, &vp), Ok(cell));
        }

        #[test]
        fn picked_cell_contains_point(
            x in 0f64..600.0,
            y in 0f64..600.0,
            px in -1e4f64..1e4,
            py in -1e4f64..1e4,
            zoom in 0.1f64..10.0,
        ) {
            let cam = Camera::new([px, py], zoom);
            let vp = Viewport::default();
            let cell = screen_to_world([x, y], &cam, &vp).unwrap();
            let centre = world_to_screen(cell, &cam, &vp);
            let half = vp.cell_px(&cam) / 2.0;
            prop_assert!((centre[0] - x).abs() <= half + 1.0);
            prop_assert!((centre[1] - y).abs() <= half + 1.0);
        }

        #[test]
        fn grid_offset_in_range(
            px in -1e6f64..1e6,
            py in -1e6f64..1e6,
            zoom in 0.1f64..10.0,
        ) {
            let cam = Camera::new([px, py], zoom);
            let vp = Viewport::default();
            let cell_px = vp.cell_px(&cam);
            let [mx, my] = grid_line_offset(&cam, &vp);
            prop_assert!((0.0..cell_px).contains(&mx));
            prop_assert!((0.0..cell_px).contains(&my));
        }
    }
}
