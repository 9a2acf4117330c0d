//! Shared utilities for cwkit
//!
//! Currently this is the tracing setup used by the CLI.

pub mod tracing;

pub use crate::tracing::init as init_tracing;
