//! Core domain types for `cwkit`.
//!
//! - **`generator`**: sound system selection and the generator configuration
//! - **`stage`**: the named steps of a generator lifecycle
//! - **`settings`**: demo settings read from the process environment

pub mod generator;
pub mod settings;
pub mod stage;

pub use generator::*;
pub use settings::*;
pub use stage::*;
