//! Simulation systems that operate on the grid and its bookkeeping.

pub mod topple;
pub mod feed;

pub use feed::EventFeed;
pub use topple::{DropOutcome, Toppler};
