use super::*;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

impl Grid {
    #[inline]
    pub fn counts(&self) -> &[u8] {
        &self.counts
    }

    #[inline]
    pub fn count(&self, x: u32, y: u32) -> u8 {
        self.counts[self.index(x, y)]
    }

    pub fn counts_ptr(&self) -> *const u8 {
        self.counts.as_ptr()
    }

    /// Sum of all grains on the grid.
    pub fn total_grains(&self) -> u64 {
        self.counts.iter().map(|&c| c as u64).sum()
    }

    /// True when no cell is at or above `threshold`.
    pub fn is_stable(&self, threshold: u8) -> bool {
        self.counts.iter().all(|&c| c < threshold)
    }

    /// Zero every count in place. Topology is untouched.
    #[inline]
    pub fn reset(&mut self) {
        #[cfg(feature = "parallel")]
        {
            self.counts.par_iter_mut().for_each(|c| *c = 0);
        }
        #[cfg(not(feature = "parallel"))]
        {
            self.counts.fill(0);
        }
    }
}
