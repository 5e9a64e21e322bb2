use super::*;

impl Grid {
    // === Dimensions ===
    #[inline]
    pub fn columns(&self) -> u32 { self.columns }

    #[inline]
    pub fn rows(&self) -> u32 { self.rows }

    #[inline]
    pub fn size(&self) -> usize { self.size }

    // === Index conversion ===
    #[inline]
    pub fn index(&self, x: u32, y: u32) -> usize {
        (y * self.columns + x) as usize
    }

    #[inline]
    pub fn coords(&self, idx: usize) -> Coord {
        let x = (idx as u32) % self.columns;
        let y = (idx as u32) / self.columns;
        Coord { x, y }
    }

    // === Bounds checking ===
    #[inline]
    pub fn in_bounds(&self, x: i64, y: i64) -> bool {
        x >= 0 && x < self.columns as i64 && y >= 0 && y < self.rows as i64
    }

    /// Checked conversion for coordinates coming from outside the engine.
    pub fn checked_index(&self, x: i64, y: i64) -> Result<usize, SandpileError> {
        if !self.in_bounds(x, y) {
            return Err(SandpileError::OutOfBounds {
                x,
                y,
                columns: self.columns,
                rows: self.rows,
            });
        }
        Ok(self.index(x as u32, y as u32))
    }

    /// Clamp arbitrary (e.g. pointer-derived) input onto the grid.
    pub fn clamp(&self, x: i64, y: i64) -> Coord {
        Coord {
            x: x.clamp(0, self.columns as i64 - 1) as u32,
            y: y.clamp(0, self.rows as i64 - 1) as u32,
        }
    }

    #[inline]
    pub fn neighbors(&self, idx: usize) -> &Neighbors {
        &self.neighbors[idx]
    }
}
