//! Core error type definitions

use crate::types::Stage;

/// Result type alias for cwkit operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for cwkit operations using thiserror
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration errors
    Configuration { message: String },

    /// A generator lifecycle stage failed
    Generator {
        stage: Stage,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O errors while writing demo output
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },
}
