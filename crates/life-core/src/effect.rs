//! Effects: the output messages the core hands back to the shell.
//!
//! Effects for one event are ordered. A shell must process them in emission
//! order; a [`Effect::Render`], when present, always comes last.

/// Severity of an [`Alert`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AlertLevel {
    /// Advisory, e.g. an echoed message.
    Info,
    /// A request was refused; state is unchanged.
    Warning,
    /// Input could not be decoded; state is unchanged.
    Error,
}

/// A fire-and-forget message the shell surfaces to the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alert {
    /// Severity.
    pub level: AlertLevel,
    /// Human-readable text.
    pub message: String,
}

impl Alert {
    /// An informational alert.
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: AlertLevel::Info,
            message: message.into(),
        }
    }

    /// A warning alert.
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: AlertLevel::Warning,
            message: message.into(),
        }
    }

    /// An error alert.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: AlertLevel::Error,
            message: message.into(),
        }
    }
}

/// Bytes the shell must move out of the core. The shell adds no framing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FileOperation {
    /// Write the bytes to a user-chosen file.
    Save(Vec<u8>),
    /// Put the bytes on the clipboard.
    Copy(Vec<u8>),
}

impl FileOperation {
    /// The payload, whatever its destination.
    pub fn bytes(&self) -> &[u8] {
        match self {
            Self::Save(b) | Self::Copy(b) => b,
        }
    }
}

/// An instruction to the shell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// The view model changed; pull it and redraw.
    Render,
    /// Show a message.
    Alert(Alert),
    /// Persist or export bytes.
    FileIO(FileOperation),
}

impl Effect {
    /// Whether this is a [`Effect::Render`].
    pub fn is_render(&self) -> bool {
        matches!(self, Self::Render)
    }

    /// The alert, if this is one.
    pub fn as_alert(&self) -> Option<&Alert> {
        match self {
            Self::Alert(alert) => Some(alert),
            _ => None,
        }
    }
}
