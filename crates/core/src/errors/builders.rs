//! Builder methods for creating errors with context

use super::types::Error;
use crate::types::Stage;

impl Error {
    /// Create a configuration error
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
        }
    }

    /// Create a generator stage error
    #[must_use]
    pub fn generator(stage: Stage, message: impl Into<String>) -> Self {
        Error::Generator {
            stage,
            message: message.into(),
            source: None,
        }
    }

    /// Create a generator stage error with a source error
    #[must_use]
    pub fn generator_with_source(
        stage: Stage,
        message: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Error::Generator {
            stage,
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Create an I/O error with the operation that failed
    #[must_use]
    pub fn io(operation: impl Into<String>, source: std::io::Error) -> Self {
        Error::Io {
            operation: operation.into(),
            source,
        }
    }

    /// The lifecycle stage this error came from, if any
    pub fn stage(&self) -> Option<Stage> {
        match self {
            Error::Generator { stage, .. } => Some(*stage),
            _ => None,
        }
    }
}
