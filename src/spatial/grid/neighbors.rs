/// Left, right, up, down. Toppling visits neighbours in this order.
pub const NEIGHBOR_OFFSETS: [(i64, i64); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Up to four flat indices; cells on the border have fewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbors {
    idx: [u32; 4],
    len: u8,
}

impl Neighbors {
    pub(super) fn compute(x: u32, y: u32, columns: u32, rows: u32) -> Self {
        let mut out = Neighbors { idx: [0; 4], len: 0 };
        for (dx, dy) in NEIGHBOR_OFFSETS {
            let nx = x as i64 + dx;
            let ny = y as i64 + dy;
            if nx >= 0 && nx < columns as i64 && ny >= 0 && ny < rows as i64 {
                out.idx[out.len as usize] = (ny as u32) * columns + nx as u32;
                out.len += 1;
            }
        }
        out
    }

    #[inline]
    pub fn as_slice(&self) -> &[u32] {
        &self.idx[..self.len as usize]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
