//! Grid - Structure of Arrays for the sandpile
//!
//! counts[]    one byte per cell, row-major
//! neighbors[] in-bounds von Neumann neighbours, baked once at construction
//!
//! The topology never changes after `new`; `reset` only zeroes counts.

use crate::core::SandpileError;

mod indexing;
mod neighbors;
mod counts;

pub use neighbors::{Neighbors, NEIGHBOR_OFFSETS};

/// A cell coordinate, `x` in `[0, columns)`, `y` in `[0, rows)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub x: u32,
    pub y: u32,
}

impl Coord {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

pub struct Grid {
    columns: u32,
    rows: u32,
    size: usize,

    pub counts: Vec<u8>,
    neighbors: Vec<Neighbors>,
}

impl Grid {
    pub fn new(columns: u32, rows: u32) -> Result<Self, SandpileError> {
        let invalid = SandpileError::InvalidDimensions { columns, rows };
        if columns == 0 || rows == 0 {
            return Err(invalid);
        }
        // Flat indices are u32 in the neighbour table.
        let size = columns.checked_mul(rows).ok_or(invalid)? as usize;

        let mut neighbors = Vec::with_capacity(size);
        for y in 0..rows {
            for x in 0..columns {
                neighbors.push(Neighbors::compute(x, y, columns, rows));
            }
        }

        Ok(Self {
            columns,
            rows,
            size,
            counts: vec![0; size],
            neighbors,
        })
    }
}
