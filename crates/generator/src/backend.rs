//! The seam between the lifecycle wrapper and a generator implementation

use cwkit_core::GeneratorConfig;
use std::fmt;

/// Broad category of a backend failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendErrorKind {
    /// The configuration asks for something the backend cannot provide
    Unsupported,
    /// The submitted text or configuration value is malformed
    InvalidInput,
    /// The call is not valid in the generator's current state
    InvalidState,
    /// The queue cannot take the submitted text
    QueueFull,
    /// The background worker could not be spawned or joined
    Worker,
}

impl fmt::Display for BackendErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BackendErrorKind::Unsupported => "unsupported",
            BackendErrorKind::InvalidInput => "invalid input",
            BackendErrorKind::InvalidState => "invalid state",
            BackendErrorKind::QueueFull => "queue full",
            BackendErrorKind::Worker => "worker",
        };
        f.write_str(name)
    }
}

/// Error returned by a single backend call
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct BackendError {
    kind: BackendErrorKind,
    message: String,
}

impl BackendError {
    #[must_use]
    pub fn new(kind: BackendErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::new(BackendErrorKind::Unsupported, message)
    }

    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(BackendErrorKind::InvalidInput, message)
    }

    #[must_use]
    pub fn invalid_state(message: impl Into<String>) -> Self {
        Self::new(BackendErrorKind::InvalidState, message)
    }

    pub fn kind(&self) -> BackendErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// A stateful Morse generator.
///
/// Every call is made at most once per handle by the lifecycle wrapper, in
/// the order create, start, enqueue, wait, stop, destroy. `destroy` takes the
/// handle by value, so a handle cannot be released twice.
pub trait Backend {
    /// The generator instance owned by the caller between create and destroy
    type Handle;

    /// Allocate a generator for `config`
    fn create(&self, config: &GeneratorConfig) -> Result<Self::Handle, BackendError>;

    /// Begin background processing
    fn start(&self, handle: &mut Self::Handle) -> Result<(), BackendError>;

    /// Submit `text` for asynchronous processing
    fn enqueue(&self, handle: &mut Self::Handle, text: &str) -> Result<(), BackendError>;

    /// Block until at most `level` characters remain queued
    fn wait_for_queue_level(
        &self,
        handle: &mut Self::Handle,
        level: usize,
    ) -> Result<(), BackendError>;

    /// Halt background processing
    fn stop(&self, handle: &mut Self::Handle) -> Result<(), BackendError>;

    /// Release the generator
    fn destroy(&self, handle: Self::Handle);
}
