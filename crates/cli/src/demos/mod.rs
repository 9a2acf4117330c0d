//! The demos the CLI can run

pub mod callback;
pub mod generator;
