//! Sandpile Engine - abelian sandpile simulation in WASM
//!
//! Architecture:
//! - core/       - Safety/logging macros, error type
//! - spatial/    - Grid storage and topology
//! - domain/     - Configuration and palette
//! - systems/    - Toppling and the event feed
//! - simulation/ - Owned core state, driver, JS facade

// Macros must be declared before any module that uses them.
#[macro_use]
pub mod core;
pub mod spatial;
pub mod domain;
pub mod systems;
pub mod simulation;

pub use spatial::grid;

use wasm_bindgen::prelude::*;

// Thread pool for the rayon fills (reset, colour extraction)
#[cfg(feature = "parallel")]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("Sandpile engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Default topple threshold, for the JS legend
#[wasm_bindgen]
pub fn default_threshold() -> u8 {
    domain::config::DEFAULT_THRESHOLD
}

// Re-export main types
pub use crate::core::SandpileError;
pub use domain::config::SandpileConfig;
pub use domain::palette::Palette;
pub use grid::{Coord, Grid};
pub use simulation::{
    DropStats, Driver, DriverState, IntervalPreset, Sandpile, SandpileCore, TargetPolicy,
};
pub use systems::{DropOutcome, EventFeed, Toppler};
