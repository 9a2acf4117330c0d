//! Demo programs for cwkit
//!
//! - **`demos::callback`**: closures handed from one component to another
//!   and invoked on the other side.
//! - **`demos::generator`**: a full generator lifecycle on the null device.

pub mod commands;
pub mod demos;

pub use commands::Commands;
