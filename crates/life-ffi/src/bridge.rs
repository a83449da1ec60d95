//! The byte boundary between a shell and the core.
//!
//! A shell only ever exchanges encoded buffers with the core: it sends one
//! encoded event to [`Bridge::update`] and gets an encoded effect list back,
//! and it pulls an encoded view model from [`Bridge::view`] whenever the
//! effects ask for a render.

use life_codec::{decode_event, encode_effects, encode_view};
use life_core::{Alert, Effect};
use life_engine::{ConfigError, Core, CoreConfig};
use tracing::warn;

/// A core instance behind the byte protocol.
#[derive(Debug, Default)]
pub struct Bridge {
    core: Core,
}

impl Bridge {
    /// Wrap a freshly built core.
    pub fn new(config: CoreConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            core: Core::new(config)?,
        })
    }

    /// Decode one event, apply it, and encode the resulting effects.
    ///
    /// Undecodable input yields a single error alert; it never panics and
    /// never touches the core state.
    pub fn update(&mut self, event: &[u8]) -> Vec<u8> {
        let effects = match decode_event(event) {
            Ok(event) => self.core.update(event),
            Err(e) => {
                warn!(len = event.len(), error = %e, "undecodable event");
                vec![Effect::Alert(Alert::error(format!("invalid event: {e}")))]
            }
        };
        encode_effects(&effects)
    }

    /// Encode the current view model.
    pub fn view(&self) -> Vec<u8> {
        encode_view(&self.core.view())
    }

    /// The wrapped core.
    pub fn core(&self) -> &Core {
        &self.core
    }
}
