//! Byte boundary and C ABI for the Life core.
//!
//! [`Bridge`] is the safe, allocation-returning boundary a Rust shell (or a
//! binding generator) calls directly. The `life_*` functions expose the same
//! two entry points over a C ABI, with instances kept in a
//! generation-checked handle table. This crate is the only one that
//! contains `unsafe` code.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

/// Run an FFI body, turning a caught panic into `LifeStatus::Panicked`.
macro_rules! ffi_guard {
    ($body:block) => {
        match std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| -> i32 { $body })) {
            Ok(code) => code,
            Err(_) => {
                tracing::error!("panic caught at FFI boundary");
                $crate::status::LifeStatus::Panicked as i32
            }
        }
    };
}

/// Lock a mutex inside `ffi_guard!`, returning `LifeStatus::InternalError`
/// if it is poisoned.
macro_rules! ffi_lock {
    ($mutex:expr) => {
        match $mutex.lock() {
            Ok(guard) => guard,
            Err(_) => return $crate::status::LifeStatus::InternalError as i32,
        }
    };
}

pub mod bridge;
pub mod config;
pub mod instance;
mod handle;
pub mod logging;
pub mod status;

pub use bridge::Bridge;
pub use config::LifeConfig;
pub use logging::init_logging;
pub use status::LifeStatus;
