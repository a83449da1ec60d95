//! Persisted world format.
//!
//! ```text
//! [MAGIC "LIFE"] [FORMAT_VERSION u8] [flags u8]
//! ([pan_x f64] [pan_y f64] [zoom f64])?   if flags & FLAG_CAMERA
//! [count u32] ([row i32] [col i32])*      sorted, no duplicates
//! ```
//!
//! Cells are written in row-major order, so encoding the same population
//! always produces the same bytes.

use life_core::{Cell, DecodeError, DecodeErrorKind, Grid};
use life_space::Camera;

use crate::codec::*;
use crate::{FORMAT_VERSION, MAGIC};

/// Flag bit: a camera block follows the flags byte.
pub const FLAG_CAMERA: u8 = 0b0000_0001;

const KNOWN_FLAGS: u8 = FLAG_CAMERA;

/// A serializable snapshot of the live cells and, optionally, the camera.
///
/// Cells are kept sorted row-major without duplicates, so a buffer always
/// equals its own decoded encoding.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SaveBuffer {
    cells: Vec<Cell>,
    camera: Option<Camera>,
}

impl SaveBuffer {
    /// Build a buffer from cells in any order. Repeated cells collapse.
    pub fn new<I: IntoIterator<Item = Cell>>(cells: I, camera: Option<Camera>) -> Self {
        let mut cells: Vec<Cell> = cells.into_iter().collect();
        cells.sort_unstable();
        cells.dedup();
        Self { cells, camera }
    }

    /// Snapshot a grid, with an optional camera.
    pub fn capture(grid: &Grid, camera: Option<&Camera>) -> Self {
        Self {
            cells: grid.sorted_cells(),
            camera: camera.copied(),
        }
    }

    /// Live cells, sorted row-major.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Camera to restore on load, if saved.
    pub fn camera(&self) -> Option<Camera> {
        self.camera
    }

    /// Rebuild the grid this buffer describes.
    pub fn to_grid(&self) -> Grid {
        self.cells.iter().copied().collect()
    }
}

/// Encode a save buffer.
pub fn encode_save(save: &SaveBuffer) -> Vec<u8> {
    let cells = &save.cells;
    let mut buf = Vec::with_capacity(MAGIC.len() + 2 + 24 + 4 + cells.len() * 8);
    buf.extend_from_slice(&MAGIC);
    write_u8(&mut buf, FORMAT_VERSION);
    match &save.camera {
        Some(camera) => {
            write_u8(&mut buf, FLAG_CAMERA);
            write_f64_pair(&mut buf, camera.pan());
            write_f64_le(&mut buf, camera.zoom());
        }
        None => write_u8(&mut buf, 0),
    }
    write_len(&mut buf, cells.len());
    for &cell in cells {
        write_cell(&mut buf, cell);
    }
    buf
}

/// Decode a save buffer produced by [`encode_save`].
///
/// Rejects bad magic, unknown versions and flags, non-finite camera values,
/// duplicate cells and trailing bytes. A saved zoom outside the supported
/// range is clamped.
pub fn decode_save(buf: &[u8]) -> Result<SaveBuffer, DecodeError> {
    let mut r = Reader::new(buf);

    let magic = r.read_bytes(MAGIC.len())?;
    if magic != MAGIC.as_slice() {
        return Err(DecodeError::new(0, DecodeErrorKind::BadMagic));
    }
    r.expect_version(FORMAT_VERSION)?;

    let flags_at = r.position();
    let flags = r.read_u8()?;
    let unknown = flags & !KNOWN_FLAGS;
    if unknown != 0 {
        return Err(DecodeError::new(
            flags_at,
            DecodeErrorKind::UnknownFlags { flags: unknown },
        ));
    }

    let camera = if flags & FLAG_CAMERA != 0 {
        let at = r.position();
        let pan = r.read_f64_pair()?;
        let zoom = r.read_f64_le()?;
        if !(pan[0].is_finite() && pan[1].is_finite() && zoom.is_finite()) {
            return Err(DecodeError::new(at, DecodeErrorKind::NonFiniteCamera));
        }
        Some(Camera::new(pan, zoom))
    } else {
        None
    };

    let (count, hint) = r.read_count(8)?;
    let mut seen = Grid::with_capacity(hint);
    let mut cells = Vec::with_capacity(hint);
    for _ in 0..count {
        let at = r.position();
        let cell = r.read_cell()?;
        if !seen.insert(cell) {
            return Err(DecodeError::new(at, DecodeErrorKind::DuplicateCell { cell }));
        }
        cells.push(cell);
    }
    r.finish()?;

    cells.sort_unstable();
    Ok(SaveBuffer { cells, camera })
}
