//! Morse generator lifecycle for cwkit
//!
//! This crate drives a generator backend through create, start, enqueue,
//! wait, stop and destroy, releasing whatever was acquired when a step fails.
//! The generator itself sits behind the [`Backend`] trait; [`NullBackend`]
//! is the in-process implementation for the null sound system.

pub mod alphabet;
pub mod backend;
pub mod debug;
pub mod lifecycle;
pub mod null;
pub mod testing;

pub use backend::{Backend, BackendError, BackendErrorKind};
pub use debug::{DebugChannel, DebugFlags, DebugLevel, DebugSettings};
pub use lifecycle::{run, run_with, Failure};
pub use null::{NullBackend, NullGenerator};
