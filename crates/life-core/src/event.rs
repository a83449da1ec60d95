//! Events: the input messages a shell sends to the core.

use crate::cell::Cell;

/// An input message describing a user or system action.
///
/// Events are immutable values, constructed by the shell and consumed
/// exactly once by the event processor. Screen coordinates are in pixels
/// with the origin at the top-left corner of the viewport.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// Increment the auxiliary counter.
    Increment,
    /// Decrement the auxiliary counter.
    Decrement,
    /// Advance the simulation by one generation.
    Step,
    /// Flip one cell by its grid coordinate.
    ToggleCell(Cell),
    /// Flip the cell under a screen point.
    ToggleScreenCoord {
        /// Screen x in pixels.
        x: f64,
        /// Screen y in pixels.
        y: f64,
    },
    /// Replace the camera outright.
    CameraPanZoom {
        /// Pan along x, in world units.
        pan_x: f64,
        /// Pan along y, in world units.
        pan_y: f64,
        /// New zoom factor.
        zoom: f64,
    },
    /// The shell's drawing surface changed size.
    CameraSize {
        /// Width in pixels.
        width: f64,
        /// Height in pixels.
        height: f64,
    },
    /// Request the current world as a save buffer.
    SaveWorld,
    /// Replace the world with a previously saved buffer.
    LoadWorld(Vec<u8>),
    /// Bounce a message back as an informational alert.
    Echo(String),
    /// Ask for a render without changing state.
    Render,
    /// Stamp a glider whose bounding box starts at the given cell.
    SpawnGlider(Cell),
    /// Request the current world for the clipboard.
    CopyWorld,
    /// Set the pan, keeping the zoom.
    CameraPan {
        /// Pan along x, in world units.
        x: f64,
        /// Pan along y, in world units.
        y: f64,
    },
    /// Multiply the zoom, keeping the viewport center fixed.
    ChangeZoom {
        /// Multiplicative zoom change.
        factor: f64,
    },
    /// Start a drag gesture at a screen point.
    AnchorDrag {
        /// Screen x in pixels.
        x: f64,
        /// Screen y in pixels.
        y: f64,
    },
    /// Continue a drag gesture: keep the anchored point under the pointer
    /// and multiply the zoom.
    ChangePanZoom {
        /// Pointer x in pixels.
        x: f64,
        /// Pointer y in pixels.
        y: f64,
        /// Multiplicative zoom change.
        factor: f64,
    },
    /// Kill every cell.
    Clear,
}

impl Event {
    /// Variant name, for logs. Never includes payload bytes.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Increment => "Increment",
            Self::Decrement => "Decrement",
            Self::Step => "Step",
            Self::ToggleCell(_) => "ToggleCell",
            Self::ToggleScreenCoord { .. } => "ToggleScreenCoord",
            Self::CameraPanZoom { .. } => "CameraPanZoom",
            Self::CameraSize { .. } => "CameraSize",
            Self::SaveWorld => "SaveWorld",
            Self::LoadWorld(_) => "LoadWorld",
            Self::Echo(_) => "Echo",
            Self::Render => "Render",
            Self::SpawnGlider(_) => "SpawnGlider",
            Self::CopyWorld => "CopyWorld",
            Self::CameraPan { .. } => "CameraPan",
            Self::ChangeZoom { .. } => "ChangeZoom",
            Self::AnchorDrag { .. } => "AnchorDrag",
            Self::ChangePanZoom { .. } => "ChangePanZoom",
            Self::Clear => "Clear",
        }
    }
}
