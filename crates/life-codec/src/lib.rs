//! Versioned binary encodings for the Life core.
//!
//! Everything that crosses the core/shell boundary, and everything that is
//! persisted, goes through this crate:
//!
//! - [`encode_event`] / [`decode_event`]: one event per buffer
//! - [`encode_effects`] / [`decode_effects`]: the ordered effect list of one update
//! - [`encode_view`] / [`decode_view`]: the render payload
//! - [`encode_save`] / [`decode_save`]: the persisted world
//! - [`decode_world`]: the persisted world, or a legacy JSON cell list
//!
//! All I/O uses an explicit tag-and-length codec (no serde on the wire), so
//! any shell language can decode it without runtime type discovery.
//!
//! # Format
//!
//! ```text
//! event   = [WIRE_VERSION u8] [tag u8] [payload]
//! effects = [WIRE_VERSION u8] [count u32] ([tag u8] [payload])*
//! view    = [WIRE_VERSION u8] [count u32] ([x f64] [y f64])* [cell_size f64]
//!           [pan_x f64] [pan_y f64] [modx f64] [mody f64]
//!           [live_count u64] [generation u64] [counter i64]
//! save    = [MAGIC "LIFE"] [FORMAT_VERSION u8] [flags u8]
//!           ([pan_x f64] [pan_y f64] [zoom f64])?  -- if flags & FLAG_CAMERA
//!           [count u32] ([row i32] [col i32])*
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod codec;
pub mod effect;
pub mod event;
pub mod legacy;
pub mod save;
pub mod view;

pub use codec::Reader;
pub use effect::{decode_effect, decode_effects, encode_effect, encode_effects};
pub use event::{decode_event, encode_event};
pub use legacy::{decode_legacy_json, decode_world, encode_legacy_json};
pub use save::{decode_save, encode_save, SaveBuffer, FLAG_CAMERA};
pub use view::{decode_view, encode_view};

/// Magic bytes at the start of every save buffer.
pub const MAGIC: [u8; 4] = *b"LIFE";

/// Current save format version.
///
/// History:
/// - v1: optional camera block behind `FLAG_CAMERA`, cells as `(i32, i32)`
pub const FORMAT_VERSION: u8 = 1;

/// Current version of the event, effect and view model encodings.
pub const WIRE_VERSION: u8 = 1;
