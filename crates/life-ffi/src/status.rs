//! C-compatible status codes.
//!
//! Every `life_*` function returns an `i32`: [`LifeStatus::Ok`] or one of
//! the negative codes below. Values are ABI-stable. Failures of the
//! simulation itself (bad events, rejected transitions, corrupt saves) are
//! not status codes; they travel inside the effect list as alerts.

use life_engine::ConfigError;

/// Status code returned by all FFI functions.
#[repr(i32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifeStatus {
    /// Success.
    Ok = 0,
    /// Handle is unknown or was already destroyed.
    InvalidHandle = -1,
    /// A pointer argument is null where data is required.
    InvalidArgument = -2,
    /// Caller-provided buffer is smaller than the pending output.
    BufferTooSmall = -3,
    /// Configuration failed validation.
    ConfigError = -4,
    /// `life_core_read_output` was called with nothing pending.
    NoOutput = -5,
    /// Internal error, e.g. a poisoned mutex after an earlier panic.
    InternalError = -20,
    /// A Rust panic was caught at the FFI boundary.
    Panicked = -128,
}

impl From<&ConfigError> for LifeStatus {
    fn from(_e: &ConfigError) -> Self {
        LifeStatus::ConfigError
    }
}
