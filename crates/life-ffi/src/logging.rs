//! Log output for embedders.
//!
//! The core only emits `tracing` events; nothing is printed until a
//! subscriber is installed. Shells without their own subscriber call
//! [`init_logging`] (or `life_logging_init` over the C ABI) once at startup.

use tracing_subscriber::EnvFilter;

/// Install a stderr `fmt` subscriber filtered by `RUST_LOG` (default `info`).
///
/// Returns `false` if a global subscriber was already installed, in which
/// case the existing one is left in place.
pub fn init_logging() -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}

/// C entry point for [`init_logging`]. Always `Ok`; repeated calls are no-ops.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn life_logging_init() -> i32 {
    ffi_guard!({
        if !init_logging() {
            tracing::debug!("subscriber already installed");
        }
        crate::status::LifeStatus::Ok as i32
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_is_harmless() {
        init_logging();
        assert!(!init_logging());
        assert_eq!(life_logging_init(), 0);
    }
}
