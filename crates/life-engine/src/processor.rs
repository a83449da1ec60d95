//! The event processor.
//!
//! [`Core`] owns every piece of application state and is the only thing
//! that mutates it. Each [`Event`] is applied atomically: either the whole
//! transition happens and the core asks for a render, or nothing changes
//! and the failure comes back as a single alert.

use life_codec::{decode_world, encode_legacy_json, encode_save, SaveBuffer};
use life_core::{
    Alert, Cell, CoreError, Effect, Event, FileOperation, Grid, LimitExceeded, TransitionError,
    ViewModel,
};
use life_space::camera::world_point_to_screen;
use life_space::{
    grid_line_offset, screen_to_world, screen_to_world_point, visible_cells, world_to_screen,
    Camera, Viewport,
};
use tracing::{debug, info, warn};

use crate::config::{ConfigError, CoreConfig};
use crate::patterns::{place, GLIDER};
use crate::step::step_checked;

/// Application state plus the rules for changing it.
#[derive(Clone, Debug)]
pub struct Core {
    grid: Grid,
    camera: Camera,
    viewport: Viewport,
    counter: i64,
    generation: u64,
    /// World point captured by the last `AnchorDrag`.
    drag_anchor: Option<[f64; 2]>,
    max_live_cells: usize,
}

impl Default for Core {
    fn default() -> Self {
        Self::from_valid(CoreConfig::default())
    }
}

impl Core {
    /// Build a core from a validated configuration.
    pub fn new(config: CoreConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid(config))
    }

    fn from_valid(config: CoreConfig) -> Self {
        let camera = config.camera();
        let grid: Grid = config.initial_cells.into_iter().collect();
        info!(
            live = grid.len(),
            max_live_cells = config.max_live_cells,
            cell_size = config.cell_size,
            "core created"
        );
        Self {
            grid,
            camera,
            viewport: Viewport::new(config.viewport[0], config.viewport[1], config.cell_size),
            counter: 0,
            generation: 0,
            drag_anchor: None,
            max_live_cells: config.max_live_cells,
        }
    }

    /// The live cells.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The current camera.
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// The current viewport.
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// The auxiliary counter.
    pub fn counter(&self) -> i64 {
        self.counter
    }

    /// Generations stepped since construction, the last load, or the last clear.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Soft cap on live cells.
    pub fn max_live_cells(&self) -> usize {
        self.max_live_cells
    }

    /// Apply one event and return the effects for the shell, in order.
    ///
    /// Never panics on bad input. A rejected event leaves the state
    /// untouched and yields exactly one [`Effect::Alert`] and no render.
    pub fn update(&mut self, event: Event) -> Vec<Effect> {
        let name = event.name();
        debug!(event = name, "update");
        let is_load = matches!(event, Event::LoadWorld(_));
        match self.apply(event) {
            Ok(effects) => effects,
            Err(err) => {
                let alert = if is_load {
                    Alert::error(format!("load failed: {}", detail(&err)))
                } else {
                    Alert {
                        level: err.alert_level(),
                        message: err.to_string(),
                    }
                };
                warn!(event = name, error = %err, "event rejected");
                vec![Effect::Alert(alert)]
            }
        }
    }

    fn apply(&mut self, event: Event) -> Result<Vec<Effect>, CoreError> {
        match event {
            Event::Increment => {
                self.counter = self.counter.saturating_add(1);
            }
            Event::Decrement => {
                self.counter = self.counter.saturating_sub(1);
            }
            Event::Step => {
                self.grid = step_checked(&self.grid, self.max_live_cells)?;
                self.generation = self.generation.saturating_add(1);
            }
            Event::ToggleCell(cell) => self.toggle(cell)?,
            Event::ToggleScreenCoord { x, y } => {
                finite("screen point", &[x, y])?;
                let cell = screen_to_world([x, y], &self.camera, &self.viewport)
                    .map_err(TransitionError::from)?;
                self.toggle(cell)?;
            }
            Event::CameraPanZoom { pan_x, pan_y, zoom } => {
                finite("camera pan", &[pan_x, pan_y])?;
                finite("zoom", &[zoom])?;
                self.camera.set([pan_x, pan_y], zoom);
            }
            Event::CameraSize { width, height } => {
                finite("viewport size", &[width, height])?;
                if width < 0.0 || height < 0.0 {
                    return Err(TransitionError::NegativeSize { width, height }.into());
                }
                self.viewport.size = [width, height];
            }
            Event::SaveWorld => {
                let save = SaveBuffer::capture(&self.grid, Some(&self.camera));
                let bytes = encode_save(&save);
                debug!(bytes = bytes.len(), live = save.cells().len(), "world saved");
                return Ok(vec![
                    Effect::FileIO(FileOperation::Save(bytes)),
                    Effect::Render,
                ]);
            }
            Event::LoadWorld(bytes) => {
                let save = decode_world(&bytes)?;
                self.check_cap(save.cells().len())?;
                self.grid = save.to_grid();
                if let Some(camera) = save.camera() {
                    self.camera = camera;
                }
                self.generation = 0;
                self.drag_anchor = None;
                debug!(bytes = bytes.len(), live = self.grid.len(), "world loaded");
            }
            Event::Echo(message) => {
                return Ok(vec![Effect::Alert(Alert::info(message))]);
            }
            Event::Render => {}
            Event::SpawnGlider(at) => {
                let cells = place(&GLIDER, at).map_err(TransitionError::from)?;
                let added = cells.iter().filter(|&&c| !self.grid.is_alive(c)).count();
                self.check_cap(self.grid.len() + added)?;
                self.grid.union(cells);
            }
            Event::CopyWorld => {
                let bytes = match encode_legacy_json(&self.grid.sorted_cells()) {
                    Ok(bytes) => bytes,
                    Err(e) => {
                        warn!(error = %e, "copy failed");
                        let alert = Alert::error(format!("copy failed: {e}"));
                        return Ok(vec![Effect::Alert(alert)]);
                    }
                };
                return Ok(vec![
                    Effect::FileIO(FileOperation::Copy(bytes)),
                    Effect::Render,
                ]);
            }
            Event::CameraPan { x, y } => {
                finite("camera pan", &[x, y])?;
                self.camera.set_pan([x, y]);
            }
            Event::ChangeZoom { factor } => {
                zoom_factor(factor)?;
                // Zoom is applied about the viewport centre, which the pan
                // already keeps fixed.
                self.camera.set_zoom(self.camera.zoom() * factor);
            }
            Event::AnchorDrag { x, y } => {
                finite("drag point", &[x, y])?;
                self.drag_anchor = Some(screen_to_world_point(
                    [x, y],
                    &self.camera,
                    &self.viewport,
                ));
                return Ok(Vec::new());
            }
            Event::ChangePanZoom { x, y, factor } => {
                let anchor = self.drag_anchor.ok_or(TransitionError::NoDragAnchor)?;
                finite("drag point", &[x, y])?;
                zoom_factor(factor)?;
                let zoom = Camera::clamp_zoom(self.camera.zoom() * factor);
                let center = self.viewport.center();
                let pan = [
                    (x - center[0]) / zoom - anchor[0],
                    (y - center[1]) / zoom - anchor[1],
                ];
                finite("camera pan", &pan)?;
                self.camera.set(pan, zoom);
            }
            Event::Clear => {
                self.grid.clear();
                self.generation = 0;
            }
        }
        Ok(vec![Effect::Render])
    }

    fn toggle(&mut self, cell: Cell) -> Result<(), CoreError> {
        if !self.grid.is_alive(cell) {
            self.check_cap(self.grid.len() + 1)?;
        }
        self.grid.toggle(cell);
        Ok(())
    }

    fn check_cap(&self, live: usize) -> Result<(), LimitExceeded> {
        if live > self.max_live_cells {
            return Err(LimitExceeded {
                live,
                max: self.max_live_cells,
            });
        }
        Ok(())
    }

    /// Project the current state for rendering.
    ///
    /// Only live cells inside the viewport are listed, by top-left corner
    /// in row-major cell order.
    pub fn view(&self) -> ViewModel {
        let cell_px = self.viewport.cell_px(&self.camera);
        let half = cell_px / 2.0;
        let (min, max) = visible_cells(&self.camera, &self.viewport);
        let mut visible: Vec<Cell> = self
            .grid
            .iter_alive()
            .filter(|c| {
                (min.row..=max.row).contains(&c.row) && (min.col..=max.col).contains(&c.col)
            })
            .collect();
        visible.sort_unstable();
        let cells = visible
            .into_iter()
            .map(|c| {
                let [x, y] = world_to_screen(c, &self.camera, &self.viewport);
                [x - half, y - half]
            })
            .collect();
        let [modx, mody] = grid_line_offset(&self.camera, &self.viewport);
        ViewModel {
            cells,
            cell_size: cell_px,
            camera_pan: self.camera.screen_pan(),
            modx,
            mody,
            live_count: self.grid.len() as u64,
            generation: self.generation,
            counter: self.counter,
        }
    }

    /// Screen position of a continuous world point under the current camera.
    pub fn world_point_to_screen(&self, world: [f64; 2]) -> [f64; 2] {
        world_point_to_screen(world, &self.camera, &self.viewport)
    }
}

fn finite(what: &'static str, values: &[f64]) -> Result<(), TransitionError> {
    if values.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(TransitionError::NonFinite { what })
    }
}

fn zoom_factor(factor: f64) -> Result<(), TransitionError> {
    finite("zoom factor", &[factor])?;
    if factor <= 0.0 {
        return Err(TransitionError::ZoomFactor { factor });
    }
    Ok(())
}

/// The error text without the umbrella prefix, for load alerts.
fn detail(err: &CoreError) -> String {
    match err {
        CoreError::Decode(e) => e.to_string(),
        CoreError::InvalidTransition(e) => e.to_string(),
        CoreError::LimitExceeded(e) => e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use life_core::{AlertLevel, DecodeErrorKind};
    use life_test_utils::{alerts, fixtures, is_render_only};

    fn core_with(cells: Vec<Cell>) -> Core {
        Core::new(CoreConfig {
            initial_cells: cells,
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn counter_saturates() {
        let mut core = Core::default();
        assert!(is_render_only(&core.update(Event::Increment)));
        assert_eq!(core.counter(), 1);
        core.counter = i64::MIN;
        core.update(Event::Decrement);
        assert_eq!(core.counter(), i64::MIN);
    }

    #[test]
    fn step_advances_generation() {
        let mut core = core_with(fixtures::blinker());
        assert!(is_render_only(&core.update(Event::Step)));
        assert_eq!(core.generation(), 1);
        assert_eq!(core.grid().sorted_cells(), fixtures::blinker_vertical());
    }

    #[test]
    fn step_over_cap_warns_and_keeps_state() {
        let mut core = Core::new(CoreConfig {
            max_live_cells: 3,
            initial_cells: vec![Cell::new(0, 0), Cell::new(0, 1), Cell::new(1, 0)],
            ..Default::default()
        })
        .unwrap();
        let before = core.grid().clone();
        let effects = core.update(Event::Step);
        let alerts = alerts(&effects);
        assert_eq!(effects.len(), 1);
        assert_eq!(alerts[0].level, AlertLevel::Warning);
        assert_eq!(core.grid(), &before);
        assert_eq!(core.generation(), 0);
    }

    #[test]
    fn toggle_screen_coord_hits_cell() {
        let mut core = Core::default();
        // Default viewport centre is the centre of the origin cell.
        core.update(Event::ToggleScreenCoord { x: 300.0, y: 300.0 });
        core.update(Event::ToggleScreenCoord { x: 331.0, y: 299.0 });
        assert_eq!(
            core.grid().sorted_cells(),
            vec![Cell::ORIGIN, Cell::new(0, 1)]
        );
    }

    #[test]
    fn toggle_screen_coord_rejects_nan() {
        let mut core = Core::default();
        let effects = core.update(Event::ToggleScreenCoord {
            x: f64::NAN,
            y: 0.0,
        });
        assert_eq!(effects.len(), 1);
        assert_eq!(
            effects[0].as_alert().map(|a| a.message.as_str()),
            Some("invalid transition: screen point must be finite")
        );
        assert!(core.grid().is_empty());
    }

    #[test]
    fn camera_size_rejects_negative() {
        let mut core = Core::default();
        let effects = core.update(Event::CameraSize {
            width: -1.0,
            height: 10.0,
        });
        assert_eq!(alerts(&effects)[0].level, AlertLevel::Warning);
        assert_eq!(core.viewport().size, [600.0, 600.0]);
    }

    #[test]
    fn save_emits_file_io_then_render() {
        let mut core = core_with(fixtures::tub());
        let effects = core.update(Event::SaveWorld);
        assert!(matches!(
            effects.as_slice(),
            [Effect::FileIO(FileOperation::Save(_)), Effect::Render]
        ));
    }

    #[test]
    fn load_failure_is_one_error_alert() {
        let mut core = core_with(fixtures::block());
        let before = core.grid().clone();
        let effects = core.update(Event::LoadWorld(b"XXXX".to_vec()));
        assert_eq!(effects.len(), 1);
        let alert = effects[0].as_alert().unwrap();
        assert_eq!(alert.level, AlertLevel::Error);
        assert_eq!(
            alert.message,
            format!(
                "load failed: {}",
                life_core::DecodeError::new(0, DecodeErrorKind::BadMagic)
            )
        );
        assert_eq!(core.grid(), &before);
    }

    #[test]
    fn load_over_cap_is_error() {
        let mut core = Core::new(CoreConfig {
            max_live_cells: 2,
            ..Default::default()
        })
        .unwrap();
        let effects = core.update(Event::LoadWorld(b"[[0,0],[0,1],[0,2]]".to_vec()));
        let alert = effects[0].as_alert().unwrap();
        assert_eq!(alert.level, AlertLevel::Error);
        assert!(alert.message.starts_with("load failed: live cell limit"));
        assert!(core.grid().is_empty());
    }

    #[test]
    fn echo_is_info_without_render() {
        let mut core = Core::default();
        let effects = core.update(Event::Echo("hello".into()));
        assert_eq!(effects, vec![Effect::Alert(Alert::info("hello"))]);
    }

    #[test]
    fn spawn_glider_unions() {
        let mut core = core_with(vec![Cell::new(0, 1)]);
        core.update(Event::SpawnGlider(Cell::ORIGIN));
        assert_eq!(core.grid().sorted_cells(), fixtures::glider());
    }

    #[test]
    fn spawn_glider_off_plane_warns() {
        let mut core = Core::default();
        let effects = core.update(Event::SpawnGlider(Cell::new(i32::MAX, 0)));
        assert_eq!(alerts(&effects)[0].level, AlertLevel::Warning);
        assert!(core.grid().is_empty());
    }

    #[test]
    fn copy_world_is_json() {
        let mut core = core_with(fixtures::blinker());
        let effects = core.update(Event::CopyWorld);
        match effects.as_slice() {
            [Effect::FileIO(FileOperation::Copy(bytes)), Effect::Render] => {
                assert_eq!(bytes.as_slice(), b"[[0,-1],[0,0],[0,1]]");
            }
            other => panic!("unexpected effects {other:?}"),
        }
    }

    #[test]
    fn change_zoom_keeps_centre() {
        let mut core = core_with(vec![Cell::ORIGIN]);
        core.update(Event::ChangeZoom { factor: 2.0 });
        assert_eq!(core.camera().zoom(), 2.0);
        assert_eq!(core.view().cells, vec![[270.0, 270.0]]);
    }

    #[test]
    fn change_zoom_rejects_non_positive() {
        let mut core = Core::default();
        for factor in [0.0, -2.0, f64::NAN] {
            let effects = core.update(Event::ChangeZoom { factor });
            assert_eq!(alerts(&effects).len(), 1);
        }
        assert_eq!(core.camera().zoom(), 1.0);
    }

    #[test]
    fn anchor_drag_emits_nothing() {
        let mut core = Core::default();
        assert!(core.update(Event::AnchorDrag { x: 1.0, y: 2.0 }).is_empty());
    }

    #[test]
    fn pan_zoom_without_anchor_warns() {
        let mut core = Core::default();
        let effects = core.update(Event::ChangePanZoom {
            x: 0.0,
            y: 0.0,
            factor: 1.0,
        });
        let alert = alerts(&effects)[0];
        assert_eq!(alert.level, AlertLevel::Warning);
        assert_eq!(
            alert.message,
            "invalid transition: drag update without a drag anchor"
        );
    }

    #[test]
    fn drag_keeps_anchor_under_pointer() {
        let mut core = Core::default();
        core.update(Event::AnchorDrag { x: 100.0, y: 200.0 });
        let anchor = core.drag_anchor.unwrap();
        core.update(Event::ChangePanZoom {
            x: 160.0,
            y: 150.0,
            factor: 1.5,
        });
        let screen = core.world_point_to_screen(anchor);
        assert!((screen[0] - 160.0).abs() < 1e-9);
        assert!((screen[1] - 150.0).abs() < 1e-9);
        assert_eq!(core.camera().zoom(), 1.5);
    }

    #[test]
    fn clear_resets_generation() {
        let mut core = core_with(fixtures::blinker());
        core.update(Event::Step);
        core.update(Event::Clear);
        assert!(core.grid().is_empty());
        assert_eq!(core.generation(), 0);
    }

    #[test]
    fn view_culls_offscreen_cells() {
        let core = core_with(vec![Cell::ORIGIN, Cell::new(0, 100), Cell::new(-50, 0)]);
        let view = core.view();
        assert_eq!(view.cells, vec![[285.0, 285.0]]);
        assert_eq!(view.live_count, 3);
        assert_eq!(view.cell_size, 30.0);
        assert_eq!([view.modx, view.mody], [15.0, 15.0]);
    }

    #[test]
    fn view_lists_visible_cells_row_major() {
        let core = core_with(vec![
            Cell::new(1, 1),
            Cell::new(0, 100),
            Cell::new(-1, 2),
            Cell::new(0, -3),
            Cell::new(-50, 0),
        ]);
        let view = core.view();
        assert_eq!(
            view.cells,
            vec![[345.0, 255.0], [195.0, 285.0], [315.0, 315.0]]
        );
        assert_eq!(view.live_count, 5);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let err = Core::new(CoreConfig {
            cell_size: 0.0,
            ..Default::default()
        })
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidCellSize { .. }));
    }
}
