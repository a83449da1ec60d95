//! Primitive encode/decode shared by every format in this crate.
//!
//! All integers and floats are little-endian. Strings and byte arrays are
//! length-prefixed with a `u32` length. There is no compression, no padding
//! and no self-describing schema.

use life_core::{Cell, DecodeError, DecodeErrorKind};

// ── Primitive writers ───────────────────────────────────────────

/// Write a single byte.
pub fn write_u8(buf: &mut Vec<u8>, v: u8) {
    buf.push(v);
}

/// Write a little-endian u32.
pub fn write_u32_le(buf: &mut Vec<u8>, v: u32) {
    buf.extend_from_slice(&v.to_le_bytes());
}

/// Write a little-endian u64.
pub fn write_u64_le(buf: &mut Vec<u8>, v: u64) {
    buf.extend_from_slice(&v.to_le_bytes());
}

/// Write a little-endian i32.
pub fn write_i32_le(buf: &mut Vec<u8>, v: i32) {
    buf.extend_from_slice(&v.to_le_bytes());
}

/// Write a little-endian i64.
pub fn write_i64_le(buf: &mut Vec<u8>, v: i64) {
    buf.extend_from_slice(&v.to_le_bytes());
}

/// Write a little-endian f64.
pub fn write_f64_le(buf: &mut Vec<u8>, v: f64) {
    buf.extend_from_slice(&v.to_le_bytes());
}

/// Write a collection length as a u32.
///
/// Lengths above `u32::MAX` cannot be represented by the format.
pub fn write_len(buf: &mut Vec<u8>, len: usize) {
    debug_assert!(u32::try_from(len).is_ok(), "length {len} exceeds u32::MAX");
    write_u32_le(buf, len as u32);
}

/// Write a length-prefixed byte array (u32 length + bytes).
pub fn write_length_prefixed_bytes(buf: &mut Vec<u8>, b: &[u8]) {
    write_len(buf, b.len());
    buf.extend_from_slice(b);
}

/// Write a length-prefixed UTF-8 string (u32 length + bytes).
pub fn write_length_prefixed_str(buf: &mut Vec<u8>, s: &str) {
    write_length_prefixed_bytes(buf, s.as_bytes());
}

/// Write a cell as `row i32, col i32`.
pub fn write_cell(buf: &mut Vec<u8>, cell: Cell) {
    write_i32_le(buf, cell.row);
    write_i32_le(buf, cell.col);
}

/// Write a pair of f64 values.
pub fn write_f64_pair(buf: &mut Vec<u8>, v: [f64; 2]) {
    write_f64_le(buf, v[0]);
    write_f64_le(buf, v[1]);
}

// ── Reader ──────────────────────────────────────────────────────

/// Cursor over an input buffer that reports errors at byte offsets.
#[derive(Debug)]
pub struct Reader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    /// Start reading at the beginning of `buf`.
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Offset of the next unread byte.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Number of unread bytes.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// A decode error at the current position.
    pub fn error(&self, kind: DecodeErrorKind) -> DecodeError {
        DecodeError::new(self.pos, kind)
    }

    /// Take the next `n` bytes.
    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8], DecodeError> {
        if n > self.remaining() {
            return Err(self.error(DecodeErrorKind::UnexpectedEof {
                needed: n - self.remaining(),
            }));
        }
        let buf = self.buf;
        let bytes = &buf[self.pos..self.pos + n];
        self.pos += n;
        Ok(bytes)
    }

    fn read_array<const N: usize>(&mut self) -> Result<[u8; N], DecodeError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read_bytes(N)?);
        Ok(out)
    }

    /// Read a single byte.
    pub fn read_u8(&mut self) -> Result<u8, DecodeError> {
        Ok(self.read_array::<1>()?[0])
    }

    /// Read a little-endian u32.
    pub fn read_u32_le(&mut self) -> Result<u32, DecodeError> {
        Ok(u32::from_le_bytes(self.read_array()?))
    }

    /// Read a little-endian u64.
    pub fn read_u64_le(&mut self) -> Result<u64, DecodeError> {
        Ok(u64::from_le_bytes(self.read_array()?))
    }

    /// Read a little-endian i32.
    pub fn read_i32_le(&mut self) -> Result<i32, DecodeError> {
        Ok(i32::from_le_bytes(self.read_array()?))
    }

    /// Read a little-endian i64.
    pub fn read_i64_le(&mut self) -> Result<i64, DecodeError> {
        Ok(i64::from_le_bytes(self.read_array()?))
    }

    /// Read a little-endian f64.
    pub fn read_f64_le(&mut self) -> Result<f64, DecodeError> {
        Ok(f64::from_le_bytes(self.read_array()?))
    }

    /// Read a pair of f64 values.
    pub fn read_f64_pair(&mut self) -> Result<[f64; 2], DecodeError> {
        Ok([self.read_f64_le()?, self.read_f64_le()?])
    }

    /// Read a cell as `row i32, col i32`.
    pub fn read_cell(&mut self) -> Result<Cell, DecodeError> {
        Ok(Cell::new(self.read_i32_le()?, self.read_i32_le()?))
    }

    /// Read a u32 element count and cap the capacity hint by what the
    /// remaining input could hold, so a corrupt count cannot force a huge
    /// allocation.
    pub fn read_count(&mut self, min_element_size: usize) -> Result<(usize, usize), DecodeError> {
        let count = self.read_u32_le()? as usize;
        let hint = count.min(self.remaining() / min_element_size.max(1));
        Ok((count, hint))
    }

    /// Read a length-prefixed byte array.
    pub fn read_length_prefixed_bytes(&mut self) -> Result<Vec<u8>, DecodeError> {
        let len = self.read_u32_le()? as usize;
        Ok(self.read_bytes(len)?.to_vec())
    }

    /// Read a length-prefixed UTF-8 string.
    pub fn read_length_prefixed_str(&mut self) -> Result<String, DecodeError> {
        let len = self.read_u32_le()? as usize;
        let start = self.pos;
        let bytes = self.read_bytes(len)?;
        match std::str::from_utf8(bytes) {
            Ok(s) => Ok(s.to_owned()),
            Err(e) => Err(DecodeError::new(
                start + e.valid_up_to(),
                DecodeErrorKind::InvalidUtf8,
            )),
        }
    }

    /// Read and check a version byte.
    pub fn expect_version(&mut self, expected: u8) -> Result<(), DecodeError> {
        let at = self.pos;
        let found = self.read_u8()?;
        if found != expected {
            return Err(DecodeError::new(
                at,
                DecodeErrorKind::UnsupportedVersion { found },
            ));
        }
        Ok(())
    }

    /// Fail unless every byte has been consumed.
    pub fn finish(self) -> Result<(), DecodeError> {
        if self.remaining() > 0 {
            return Err(self.error(DecodeErrorKind::TrailingBytes {
                remaining: self.remaining(),
            }));
        }
        Ok(())
    }
}
