//! Core functionality shared by every layer: safety/logging macros and the
//! engine error type.

#[macro_use]
pub mod utils;
pub mod error;

pub use error::SandpileError;
