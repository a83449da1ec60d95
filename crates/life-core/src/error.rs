//! Error types for the Life core.
//!
//! Organized by subsystem: coordinate arithmetic, decoding (wire and save
//! formats), event transitions, and the live-cell soft cap. None of them is
//! fatal; the event processor reports each one through an alert effect and
//! leaves its state untouched.

use crate::cell::Cell;
use crate::effect::AlertLevel;

/// A coordinate computation left the `i32` plane.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("cell coordinate out of range")]
pub struct CellOverflow;

/// Reason a buffer could not be decoded.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DecodeErrorKind {
    /// The buffer ended before a value was complete.
    #[error("unexpected end of buffer (needed {needed} more bytes)")]
    UnexpectedEof {
        /// Bytes missing to complete the value being read.
        needed: usize,
    },
    /// A variant tag is not recognized.
    #[error("unknown {what} tag {tag:#04x}")]
    UnknownTag {
        /// Which tagged union was being decoded.
        what: &'static str,
        /// The unrecognized tag.
        tag: u8,
    },
    /// A save buffer does not start with the expected magic bytes.
    #[error("invalid magic bytes (expected b\"LIFE\")")]
    BadMagic,
    /// The format or wire version is not supported by this build.
    #[error("unsupported format version {found}")]
    UnsupportedVersion {
        /// The version found in the buffer.
        found: u8,
    },
    /// A save buffer sets flag bits this build does not understand.
    #[error("unknown flag bits {flags:#04x}")]
    UnknownFlags {
        /// The unrecognized bits.
        flags: u8,
    },
    /// A save buffer carries a NaN or infinite camera value.
    #[error("non-finite camera value")]
    NonFiniteCamera,
    /// A length-prefixed string is not valid UTF-8.
    #[error("invalid UTF-8 string")]
    InvalidUtf8,
    /// A save buffer lists the same cell twice.
    #[error("duplicate cell {cell}")]
    DuplicateCell {
        /// The repeated cell.
        cell: Cell,
    },
    /// Bytes remain after the value was fully decoded.
    #[error("{remaining} trailing bytes")]
    TrailingBytes {
        /// Number of unread bytes.
        remaining: usize,
    },
    /// A legacy JSON cell list is malformed.
    #[error("malformed JSON cell list: {message}")]
    Json {
        /// Parser message.
        message: String,
    },
}

/// A decode failure, located at the offending byte offset.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at byte {offset}")]
pub struct DecodeError {
    /// Offset of the first byte that could not be interpreted.
    pub offset: usize,
    /// What went wrong.
    pub kind: DecodeErrorKind,
}

impl DecodeError {
    /// Create a decode error at `offset`.
    pub fn new(offset: usize, kind: DecodeErrorKind) -> Self {
        Self { offset, kind }
    }
}

/// An event that cannot be applied to the current state.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum TransitionError {
    /// An event carried NaN or an infinity.
    #[error("{what} must be finite")]
    NonFinite {
        /// Which argument was not finite.
        what: &'static str,
    },
    /// A viewport size was negative.
    #[error("viewport size {width}x{height} is negative")]
    NegativeSize {
        /// Requested width.
        width: f64,
        /// Requested height.
        height: f64,
    },
    /// A zoom factor was zero or negative.
    #[error("zoom factor must be positive, got {factor}")]
    ZoomFactor {
        /// The rejected factor.
        factor: f64,
    },
    /// A screen point or pattern placement maps outside the `i32` plane.
    #[error(transparent)]
    OutOfRange(#[from] CellOverflow),
    /// A drag update arrived without a preceding drag anchor.
    #[error("drag update without a drag anchor")]
    NoDragAnchor,
}

/// The live-cell soft cap would be exceeded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("live cell limit exceeded: {live} cells, limit {max}")]
pub struct LimitExceeded {
    /// Live cells the operation would have produced.
    pub live: usize,
    /// The configured cap.
    pub max: usize,
}

/// Every recoverable failure the event processor can report.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum CoreError {
    /// Malformed event, effect, or save bytes.
    #[error("decode failed: {0}")]
    Decode(#[from] DecodeError),
    /// The event is impossible in the current state.
    #[error("invalid transition: {0}")]
    InvalidTransition(#[from] TransitionError),
    /// Runaway growth refused by the soft cap.
    #[error(transparent)]
    LimitExceeded(#[from] LimitExceeded),
}

impl CoreError {
    /// Severity used when the error is surfaced as an alert.
    pub fn alert_level(&self) -> AlertLevel {
        match self {
            Self::Decode(_) => AlertLevel::Error,
            Self::InvalidTransition(_) | Self::LimitExceeded(_) => AlertLevel::Warning,
        }
    }
}
