//! Core types for the Life simulation core.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! [`Cell`] coordinate, the sparse [`Grid`] store, the protocol data shapes
//! that cross the core/shell boundary ([`Event`], [`Effect`], [`ViewModel`])
//! and the error taxonomy shared by every other crate in the workspace.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod effect;
pub mod error;
pub mod event;
pub mod grid;
pub mod view;

pub use cell::Cell;
pub use effect::{Alert, AlertLevel, Effect, FileOperation};
pub use error::{
    CellOverflow, CoreError, DecodeError, DecodeErrorKind, LimitExceeded, TransitionError,
};
pub use event::Event;
pub use grid::Grid;
pub use view::ViewModel;
