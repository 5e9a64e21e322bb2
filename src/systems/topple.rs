//! Toppling - one grain in, the whole avalanche out.
//!
//! A drop adds one grain to a cell. A cell reaching `threshold` resets to 0
//! and sends one grain to each in-bounds neighbour, which may topple in
//! turn. Processing is depth-first in neighbour order (left, right, up,
//! down), the same order as the naive recursive formulation, but driven by
//! an explicit stack so large grids can't blow the call stack.

use crate::core::SandpileError;
use crate::grid::Grid;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DropOutcome {
    /// Topples caused by this drop (0 if the target stayed below threshold).
    pub events: u32,
    /// Grains that left the grid across the border during this drop.
    pub grains_lost: u64,
}

/// Reusable toppling state. Owns the work stack so drops don't allocate.
pub struct Toppler {
    threshold: u8,
    limit: u32,
    stack: Vec<u32>,
}

impl Toppler {
    pub fn new(threshold: u8, limit: u32) -> Self {
        Self {
            threshold,
            limit,
            stack: Vec::with_capacity(64),
        }
    }

    pub fn threshold(&self) -> u8 { self.threshold }

    pub fn limit(&self) -> u32 { self.limit }

    /// Drop one grain at `(x, y)` and settle the grid.
    ///
    /// Coordinates outside the grid are rejected before anything is touched.
    pub fn drop_grain(&mut self, grid: &mut Grid, x: i64, y: i64) -> Result<DropOutcome, SandpileError> {
        self.drop_grain_with(grid, x, y, |_| {})
    }

    /// Like `drop_grain`, calling `on_topple(idx)` for every topple in order.
    pub fn drop_grain_with<F>(
        &mut self,
        grid: &mut Grid,
        x: i64,
        y: i64,
        mut on_topple: F,
    ) -> Result<DropOutcome, SandpileError>
    where
        F: FnMut(usize),
    {
        let start = grid.checked_index(x, y)?;
        let threshold = self.threshold;
        let mut outcome = DropOutcome::default();
        // u64 so a limit of u32::MAX can still be passed.
        let mut topples: u64 = 0;

        self.stack.clear();
        self.stack.push(start as u32);

        while let Some(idx) = self.stack.pop() {
            let idx = idx as usize;
            let count = (*fast!(grid.counts, [idx])).saturating_add(1);

            if count < threshold {
                fast!(grid.counts, [idx] = count);
                continue;
            }

            fast!(grid.counts, [idx] = 0);
            topples += 1;
            if exceeds_limit(topples, self.limit) {
                self.stack.clear();
                console_error!(
                    "sandpile: cascade from ({}, {}) passed {} topples",
                    x, y, self.limit
                );
                return Err(SandpileError::CascadeLimit { limit: self.limit });
            }
            on_topple(idx);

            let neighbors = grid.neighbors(idx);
            outcome.grains_lost += (count as u64).saturating_sub(neighbors.len() as u64);
            // Reversed so the first neighbour is popped (and settled) first.
            for &n in neighbors.as_slice().iter().rev() {
                self.stack.push(n);
            }
        }

        // Bounded by `limit`, which fits in u32.
        outcome.events = topples as u32;
        Ok(outcome)
    }
}

#[inline]
fn exceeds_limit(topples: u64, limit: u32) -> bool {
    topples > limit as u64
}
