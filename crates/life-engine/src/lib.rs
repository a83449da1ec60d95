//! Simulation and event processing for the Life core.
//!
//! - [`step`]: one B3/S23 generation on the sparse plane
//! - [`Core`]: the event processor that owns grid, camera and viewport and
//!   turns [`Event`](life_core::Event)s into [`Effect`](life_core::Effect)s
//! - [`CoreConfig`]: validated construction parameters
//! - [`patterns`]: shapes the core can stamp onto the grid

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod processor;
pub mod patterns;
pub mod step;

pub use crate::config::{ConfigError, CoreConfig, DEFAULT_MAX_LIVE_CELLS};
pub use crate::processor::Core;
pub use crate::step::{step, step_checked, step_n};
