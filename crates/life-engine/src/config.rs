//! Core configuration, validation, and error types.
//!
//! [`CoreConfig`] is the constructor input for [`Core`](crate::Core).
//! [`validate()`](CoreConfig::validate) checks every structural invariant
//! up front so that the event processor never has to.

use life_core::Cell;
use life_space::{Camera, DEFAULT_CELL_SIZE};

/// Default soft cap on live cells.
pub const DEFAULT_MAX_LIVE_CELLS: usize = 1 << 20;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`CoreConfig::validate()`].
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// `cell_size` is NaN, infinite, zero, or negative.
    #[error("cell_size must be finite and positive, got {value}")]
    InvalidCellSize {
        /// The invalid value.
        value: f64,
    },
    /// `max_live_cells` is zero.
    #[error("max_live_cells must be at least 1")]
    ZeroLiveCap,
    /// Viewport size is non-finite or negative.
    #[error("viewport size {width}x{height} must be finite and non-negative")]
    InvalidViewport {
        /// Configured width.
        width: f64,
        /// Configured height.
        height: f64,
    },
    /// Initial camera pan or zoom is not usable.
    #[error("invalid camera: {reason}")]
    InvalidCamera {
        /// Which invariant was violated.
        reason: String,
    },
    /// More initial cells than the soft cap allows.
    #[error("{count} initial cells exceed max_live_cells ({max})")]
    TooManyInitialCells {
        /// Distinct initial cells.
        count: usize,
        /// The configured cap.
        max: usize,
    },
}

// ── CoreConfig ─────────────────────────────────────────────────────

/// Complete configuration for constructing a [`Core`](crate::Core).
#[derive(Clone, Debug, PartialEq)]
pub struct CoreConfig {
    /// World units per cell. Default: 30.
    pub cell_size: f64,
    /// Soft cap on live cells, enforced by `Step`, `LoadWorld` and every
    /// other event that adds cells. Default: 1 048 576.
    pub max_live_cells: usize,
    /// Initial drawing surface size in pixels. Default: 600x600.
    pub viewport: [f64; 2],
    /// Initial camera pan, in world units. Default: no pan.
    pub pan: [f64; 2],
    /// Initial zoom. Must lie in `[Camera::MIN_ZOOM, Camera::MAX_ZOOM]`;
    /// it is checked, not clamped. Default: 1.
    pub zoom: f64,
    /// Cells alive at construction. Duplicates collapse.
    pub initial_cells: Vec<Cell>,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            cell_size: DEFAULT_CELL_SIZE,
            max_live_cells: DEFAULT_MAX_LIVE_CELLS,
            viewport: [600.0, 600.0],
            pan: [0.0, 0.0],
            zoom: 1.0,
            initial_cells: Vec::new(),
        }
    }
}

impl CoreConfig {
    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. Cell size must be usable as a divisor.
        if !self.cell_size.is_finite() || self.cell_size <= 0.0 {
            return Err(ConfigError::InvalidCellSize {
                value: self.cell_size,
            });
        }
        // 2. Cap >= 1.
        if self.max_live_cells == 0 {
            return Err(ConfigError::ZeroLiveCap);
        }
        // 3. Viewport finite and non-negative.
        let [width, height] = self.viewport;
        if !width.is_finite() || !height.is_finite() || width < 0.0 || height < 0.0 {
            return Err(ConfigError::InvalidViewport { width, height });
        }
        // 4. Camera finite, zoom in range.
        if !self.pan[0].is_finite() || !self.pan[1].is_finite() {
            return Err(ConfigError::InvalidCamera {
                reason: format!("pan must be finite, got {:?}", self.pan),
            });
        }
        if !(Camera::MIN_ZOOM..=Camera::MAX_ZOOM).contains(&self.zoom) {
            return Err(ConfigError::InvalidCamera {
                reason: format!(
                    "zoom must be in [{}, {}], got {}",
                    Camera::MIN_ZOOM,
                    Camera::MAX_ZOOM,
                    self.zoom,
                ),
            });
        }
        // 5. Seed population within the cap.
        if self.initial_cells.len() > self.max_live_cells {
            let mut distinct = self.initial_cells.clone();
            distinct.sort_unstable();
            distinct.dedup();
            if distinct.len() > self.max_live_cells {
                return Err(ConfigError::TooManyInitialCells {
                    count: distinct.len(),
                    max: self.max_live_cells,
                });
            }
        }
        Ok(())
    }

    /// The initial camera. Only meaningful once [`validate`](Self::validate)
    /// has passed.
    pub fn camera(&self) -> Camera {
        Camera::new(self.pan, self.zoom)
    }
}
