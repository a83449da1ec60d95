//! View model encoding.

use life_core::{DecodeError, ViewModel};

use crate::codec::*;
use crate::WIRE_VERSION;

/// Encode a view model for the shell.
pub fn encode_view(view: &ViewModel) -> Vec<u8> {
    let mut buf = Vec::with_capacity(1 + 4 + view.cells.len() * 16 + 64);
    write_u8(&mut buf, WIRE_VERSION);
    write_len(&mut buf, view.cells.len());
    for &corner in &view.cells {
        write_f64_pair(&mut buf, corner);
    }
    write_f64_le(&mut buf, view.cell_size);
    write_f64_pair(&mut buf, view.camera_pan);
    write_f64_le(&mut buf, view.modx);
    write_f64_le(&mut buf, view.mody);
    write_u64_le(&mut buf, view.live_count);
    write_u64_le(&mut buf, view.generation);
    write_i64_le(&mut buf, view.counter);
    buf
}

/// Decode a view model produced by [`encode_view`].
pub fn decode_view(buf: &[u8]) -> Result<ViewModel, DecodeError> {
    let mut r = Reader::new(buf);
    r.expect_version(WIRE_VERSION)?;
    let (count, hint) = r.read_count(16)?;
    let mut cells = Vec::with_capacity(hint);
    for _ in 0..count {
        cells.push(r.read_f64_pair()?);
    }
    let view = ViewModel {
        cells,
        cell_size: r.read_f64_le()?,
        camera_pan: r.read_f64_pair()?,
        modx: r.read_f64_le()?,
        mody: r.read_f64_le()?,
        live_count: r.read_u64_le()?,
        generation: r.read_u64_le()?,
        counter: r.read_i64_le()?,
    };
    r.finish()?;
    Ok(view)
}
