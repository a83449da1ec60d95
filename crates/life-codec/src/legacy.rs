//! Legacy JSON cell lists, and format sniffing for loads.
//!
//! Older shells saved and seeded worlds as a bare JSON array of
//! `[row, col]` pairs, e.g. `[[0,-1],[0,0],[0,1]]`. These files carry no
//! camera. They stay loadable through [`decode_world`], and the same text is
//! what `CopyWorld` puts on the clipboard.

use life_core::{Cell, DecodeError, DecodeErrorKind};

use crate::save::{decode_save, SaveBuffer};
use crate::MAGIC;

/// Decode a persisted world in either supported format.
///
/// Buffers starting with the save magic are decoded as binary saves.
/// Buffers whose first non-whitespace byte is `[` are decoded as legacy JSON.
/// Anything else is [`DecodeErrorKind::BadMagic`].
pub fn decode_world(buf: &[u8]) -> Result<SaveBuffer, DecodeError> {
    if buf.starts_with(&MAGIC) {
        return decode_save(buf);
    }
    match buf.iter().find(|b| !b.is_ascii_whitespace()) {
        Some(b'[') => decode_legacy_json(buf),
        _ => Err(DecodeError::new(0, DecodeErrorKind::BadMagic)),
    }
}

/// Decode a JSON array of `[row, col]` pairs. Duplicate pairs are merged.
pub fn decode_legacy_json(buf: &[u8]) -> Result<SaveBuffer, DecodeError> {
    let pairs: Vec<[i32; 2]> = serde_json::from_slice(buf).map_err(|e| {
        DecodeError::new(
            byte_offset(buf, e.line(), e.column()),
            DecodeErrorKind::Json {
                message: e.to_string(),
            },
        )
    })?;
    Ok(SaveBuffer::new(pairs.into_iter().map(Cell::from), None))
}

/// Encode cells as a JSON array of `[row, col]` pairs, in row-major order.
pub fn encode_legacy_json(cells: &[Cell]) -> Result<Vec<u8>, serde_json::Error> {
    let mut sorted = cells.to_vec();
    sorted.sort_unstable();
    sorted.dedup();
    let pairs: Vec<[i32; 2]> = sorted.into_iter().map(<[i32; 2]>::from).collect();
    serde_json::to_vec(&pairs)
}

/// Translate serde_json's 1-based line and column into a byte offset.
fn byte_offset(buf: &[u8], line: usize, column: usize) -> usize {
    if line == 0 {
        return buf.len();
    }
    let line_start: usize = buf
        .split(|&b| b == b'\n')
        .take(line - 1)
        .map(|l| l.len() + 1)
        .sum();
    (line_start + column.saturating_sub(1)).min(buf.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode_save;
    use life_space::Camera;

    #[test]
    fn json_blinker_loads() {
        let save = decode_legacy_json(b"[[0,-1],[0,0],[0,1]]").unwrap();
        assert_eq!(
            save.cells(),
            [Cell::new(0, -1), Cell::new(0, 0), Cell::new(0, 1)]
        );
        assert_eq!(save.camera(), None);
    }

    #[test]
    fn json_duplicates_merge() {
        let save = decode_legacy_json(b"[[1,1],[1,1],[0,0]]").unwrap();
        assert_eq!(save.cells(), [Cell::new(0, 0), Cell::new(1, 1)]);
    }

    #[test]
    fn json_round_trip_is_sorted() {
        let json = encode_legacy_json(&[Cell::new(2, 0), Cell::new(-1, 3)]).unwrap();
        assert_eq!(json, b"[[-1,3],[2,0]]");
        let save = decode_legacy_json(&json).unwrap();
        assert_eq!(save.cells(), [Cell::new(-1, 3), Cell::new(2, 0)]);
    }

    #[test]
    fn malformed_json_reports_position() {
        let err = decode_legacy_json(b"[[0,0],\n [1,x]]").unwrap_err();
        assert!(matches!(err.kind, DecodeErrorKind::Json { .. }));
        // Second line, near the `x` at byte 12.
        assert!((8..=13).contains(&err.offset), "offset {}", err.offset);
    }

    #[test]
    fn out_of_range_coordinate_rejected() {
        let err = decode_legacy_json(b"[[4294967296,0]]").unwrap_err();
        assert!(matches!(err.kind, DecodeErrorKind::Json { .. }));
    }

    #[test]
    fn world_sniffs_binary() {
        let save = SaveBuffer::new([Cell::ORIGIN], Some(Camera::new([3.0, 4.0], 0.5)));
        assert_eq!(decode_world(&encode_save(&save)), Ok(save));
    }

    #[test]
    fn world_sniffs_json_after_whitespace() {
        let save = decode_world(b"  \n[[5,6]]").unwrap();
        assert_eq!(save.cells(), [Cell::new(5, 6)]);
    }

    #[test]
    fn world_rejects_unknown_format() {
        for buf in [&b""[..], b"{}", b"LIF"] {
            let err = decode_world(buf).unwrap_err();
            assert_eq!(err, DecodeError::new(0, DecodeErrorKind::BadMagic));
        }
    }
}
