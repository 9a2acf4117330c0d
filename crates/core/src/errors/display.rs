//! Display implementations for error types

use super::types::Error;
use std::fmt;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Configuration { message } => {
                write!(f, "configuration error: {message}")
            }
            Error::Generator { stage, message, .. } => {
                write!(f, "generator {stage} failed: {message}")
            }
            Error::Io { operation, source } => {
                write!(f, "I/O error during {operation}: {source}")
            }
        }
    }
}
