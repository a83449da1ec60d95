//! Life: Conway's Game of Life as a platform-independent core.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Life sub-crates. A shell (native window, browser, terminal) owns input,
//! drawing and file dialogs; everything else lives in the core and is reached
//! by sending [`Event`](prelude::Event)s and acting on the returned
//! [`Effect`](prelude::Effect)s.
//!
//! # Quick start
//!
//! ```rust
//! use life::prelude::*;
//!
//! let mut core = Core::default();
//! for col in -1..=1 {
//!     core.update(Event::ToggleCell(Cell::new(0, col)));
//! }
//! let effects = core.update(Event::Step);
//! assert_eq!(effects, vec![Effect::Render]);
//!
//! // The horizontal blinker is now vertical.
//! let cells = core.grid().sorted_cells();
//! assert_eq!(cells, vec![Cell::new(-1, 0), Cell::new(0, 0), Cell::new(1, 0)]);
//!
//! // Shells that only speak bytes go through the codec.
//! let saved = match core.update(Event::SaveWorld).as_slice() {
//!     [Effect::FileIO(FileOperation::Save(bytes)), Effect::Render] => bytes.clone(),
//!     other => panic!("unexpected effects: {other:?}"),
//! };
//! let restored = decode_world(&saved).unwrap();
//! assert_eq!(restored.cells(), cells);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `life-core` | Cells, the sparse grid, events, effects, errors |
//! | [`space`] | `life-space` | Camera transforms and the Moore neighbourhood |
//! | [`codec`] | `life-codec` | Wire and save encodings, legacy JSON import |
//! | [`engine`] | `life-engine` | Stepping and the event processor |
//! | [`ffi`] | `life-ffi` | Byte bridge and the C ABI |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types (`life-core`).
///
/// Contains [`types::Cell`], [`types::Grid`], the protocol shapes
/// ([`types::Event`], [`types::Effect`], [`types::ViewModel`]) and the error
/// taxonomy.
pub use life_core as types;

/// Camera and neighbourhood geometry (`life-space`).
pub use life_space as space;

/// Versioned binary encodings (`life-codec`).
///
/// Every buffer that crosses the shell boundary or is persisted is produced
/// and parsed here.
pub use life_codec as codec;

/// Generation stepping and the event processor (`life-engine`).
pub use life_engine as engine;

/// The byte boundary and C ABI (`life-ffi`).
///
/// Rust shells can drive a core with [`ffi::Bridge`] directly instead of
/// going through the exported C functions.
pub use life_ffi as ffi;

/// Common imports for typical Life usage.
///
/// ```rust
/// use life::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use life_core::{
        Alert, AlertLevel, Cell, Effect, Event, FileOperation, Grid, ViewModel,
    };

    // Errors
    pub use life_core::{CoreError, DecodeError, TransitionError};

    // Space
    pub use life_space::{Camera, Viewport};

    // Codec
    pub use life_codec::{decode_world, encode_save, SaveBuffer};

    // Engine
    pub use life_engine::{step, Core, CoreConfig};

    // Bridge
    pub use life_ffi::Bridge;
}
