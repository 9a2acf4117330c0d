//! Core domain types, errors, and constants for `cwkit`.
//!
//! ## Key Components
//!
//! - **`errors`**: the workspace `Error` enum and `Result` alias.
//! - **`types`**: generator configuration, lifecycle stages, and the settings
//!   read from the environment.
//! - **`constants`**: environment variable names and defaults shared by the
//!   generator and CLI crates.

pub mod constants;
pub mod errors;
pub mod types;

pub use self::{
    constants::*,
    errors::{Error, Result, ResultExt},
    types::*,
};
