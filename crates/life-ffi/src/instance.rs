//! Core lifecycle over the C ABI: create, update, view, read output, destroy.
//!
//! Each instance is an `Arc<Mutex<Instance>>` in the global `CORES` table,
//! so the table lock is only held for handle lookup and calls on different
//! instances never contend.
//!
//! `life_core_update` and `life_core_view` leave their encoded output
//! pending on the instance and report its length; the caller allocates a
//! buffer of that size and collects the bytes with `life_core_read_output`.

use std::sync::{Arc, Mutex};

use life_engine::CoreConfig;
use tracing::debug;

use crate::bridge::Bridge;
use crate::config::LifeConfig;
use crate::handle::HandleTable;
use crate::status::LifeStatus;

struct Instance {
    bridge: Bridge,
    pending: Option<Vec<u8>>,
}

type InstanceArc = Arc<Mutex<Instance>>;

static CORES: Mutex<HandleTable<InstanceArc>> = Mutex::new(HandleTable::new());

/// Clone the Arc for a handle, briefly locking the global table.
fn get_instance(handle: u64) -> Option<InstanceArc> {
    CORES.lock().ok()?.get(handle).cloned()
}

#[allow(unsafe_code)]
fn create(config: CoreConfig, handle_out: *mut u64) -> i32 {
    if handle_out.is_null() {
        return LifeStatus::InvalidArgument as i32;
    }
    let bridge = match Bridge::new(config) {
        Ok(b) => b,
        Err(e) => {
            debug!(error = %e, "core config rejected");
            return LifeStatus::from(&e) as i32;
        }
    };
    let instance = Arc::new(Mutex::new(Instance {
        bridge,
        pending: None,
    }));
    let handle = match ffi_lock!(CORES).insert(instance) {
        Some(h) => h,
        None => return LifeStatus::InternalError as i32,
    };
    // SAFETY: handle_out is non-null and writable per caller contract.
    unsafe { handle_out.write(handle) };
    LifeStatus::Ok as i32
}

/// Create a core with the default configuration.
///
/// On success writes the handle to `*handle_out`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn life_core_create(handle_out: *mut u64) -> i32 {
    ffi_guard!({ create(CoreConfig::default(), handle_out) })
}

/// Create a core from `*config`.
///
/// Returns `ConfigError` if the configuration fails validation.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn life_core_create_with(config: *const LifeConfig, handle_out: *mut u64) -> i32 {
    ffi_guard!({
        if config.is_null() {
            return LifeStatus::InvalidArgument as i32;
        }
        // SAFETY: config is non-null and points to a valid LifeConfig per caller contract.
        let config = unsafe { &*config };
        create(CoreConfig::from(config), handle_out)
    })
}

/// Destroy a core. Destroying a stale handle returns `InvalidHandle`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn life_core_destroy(handle: u64) -> i32 {
    ffi_guard!({
        match ffi_lock!(CORES).remove(handle) {
            Some(_) => LifeStatus::Ok as i32,
            None => LifeStatus::InvalidHandle as i32,
        }
    })
}

/// Apply one encoded event.
///
/// `event` points to `event_len` bytes (may be null if `event_len == 0`).
/// The encoded effect list becomes the pending output, and its length is
/// written to `*out_len`. Any previously pending output is discarded.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn life_core_update(
    handle: u64,
    event: *const u8,
    event_len: usize,
    out_len: *mut usize,
) -> i32 {
    ffi_guard!({
        if out_len.is_null() || (event.is_null() && event_len > 0) {
            return LifeStatus::InvalidArgument as i32;
        }
        let bytes: &[u8] = if event_len == 0 {
            &[]
        } else {
            // SAFETY: event is non-null and points to event_len readable bytes.
            unsafe { std::slice::from_raw_parts(event, event_len) }
        };
        let arc = match get_instance(handle) {
            Some(arc) => arc,
            None => return LifeStatus::InvalidHandle as i32,
        };
        let mut instance = ffi_lock!(arc);
        let output = instance.bridge.update(bytes);
        // SAFETY: out_len is non-null and writable per caller contract.
        unsafe { out_len.write(output.len()) };
        instance.pending = Some(output);
        LifeStatus::Ok as i32
    })
}

/// Encode the current view model as the pending output and write its
/// length to `*out_len`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn life_core_view(handle: u64, out_len: *mut usize) -> i32 {
    ffi_guard!({
        if out_len.is_null() {
            return LifeStatus::InvalidArgument as i32;
        }
        let arc = match get_instance(handle) {
            Some(arc) => arc,
            None => return LifeStatus::InvalidHandle as i32,
        };
        let mut instance = ffi_lock!(arc);
        let output = instance.bridge.view();
        // SAFETY: out_len is non-null and writable per caller contract.
        unsafe { out_len.write(output.len()) };
        instance.pending = Some(output);
        LifeStatus::Ok as i32
    })
}

/// Copy the pending output into `buf` and clear it.
///
/// Returns `BufferTooSmall` (keeping the output pending) if `buf_len` is
/// less than the pending length, and `NoOutput` if nothing is pending.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn life_core_read_output(
    handle: u64,
    buf: *mut u8,
    buf_len: usize,
    written_out: *mut usize,
) -> i32 {
    ffi_guard!({
        if written_out.is_null() {
            return LifeStatus::InvalidArgument as i32;
        }
        let arc = match get_instance(handle) {
            Some(arc) => arc,
            None => return LifeStatus::InvalidHandle as i32,
        };
        let mut instance = ffi_lock!(arc);
        let len = match &instance.pending {
            Some(output) => output.len(),
            None => return LifeStatus::NoOutput as i32,
        };
        if buf_len < len {
            return LifeStatus::BufferTooSmall as i32;
        }
        if buf.is_null() && len > 0 {
            return LifeStatus::InvalidArgument as i32;
        }
        if let Some(output) = instance.pending.take() {
            if !output.is_empty() {
                // SAFETY: buf is non-null and has room for buf_len >= len bytes.
                unsafe { std::ptr::copy_nonoverlapping(output.as_ptr(), buf, output.len()) };
            }
        }
        // SAFETY: written_out is non-null and writable per caller contract.
        unsafe { written_out.write(len) };
        LifeStatus::Ok as i32
    })
}
