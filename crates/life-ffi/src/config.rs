//! C-compatible core configuration.

use life_engine::{CoreConfig, DEFAULT_MAX_LIVE_CELLS};

use crate::status::LifeStatus;

/// Construction parameters for `life_core_create_with`.
///
/// Start from `life_config_default` and override fields; every field is
/// validated when the core is created.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LifeConfig {
    /// World units per cell.
    pub cell_size: f64,
    /// Soft cap on live cells. Values above `usize::MAX` saturate.
    pub max_live_cells: u64,
    /// Initial viewport width in pixels.
    pub viewport_width: f64,
    /// Initial viewport height in pixels.
    pub viewport_height: f64,
    /// Initial pan along x, in world units.
    pub pan_x: f64,
    /// Initial pan along y, in world units.
    pub pan_y: f64,
    /// Initial zoom.
    pub zoom: f64,
}

impl Default for LifeConfig {
    fn default() -> Self {
        let core = CoreConfig::default();
        Self {
            cell_size: core.cell_size,
            max_live_cells: DEFAULT_MAX_LIVE_CELLS as u64,
            viewport_width: core.viewport[0],
            viewport_height: core.viewport[1],
            pan_x: core.pan[0],
            pan_y: core.pan[1],
            zoom: core.zoom,
        }
    }
}

impl From<&LifeConfig> for CoreConfig {
    fn from(c: &LifeConfig) -> Self {
        CoreConfig {
            cell_size: c.cell_size,
            max_live_cells: usize::try_from(c.max_live_cells).unwrap_or(usize::MAX),
            viewport: [c.viewport_width, c.viewport_height],
            // Not clamped: an out-of-range zoom must fail validation.
            pan: [c.pan_x, c.pan_y],
            zoom: c.zoom,
            initial_cells: Vec::new(),
        }
    }
}

/// Fill `*out` with the default configuration.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn life_config_default(out: *mut LifeConfig) -> i32 {
    ffi_guard!({
        if out.is_null() {
            return LifeStatus::InvalidArgument as i32;
        }
        // SAFETY: out is non-null and points to a writable LifeConfig per caller contract.
        unsafe { out.write(LifeConfig::default()) };
        LifeStatus::Ok as i32
    })
}
