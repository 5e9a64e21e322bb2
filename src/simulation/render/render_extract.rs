#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::SandpileCore;

/// Repaint every cell as `palette[count % 4]`; returns the buffer pointer
/// for the JS side to wrap in a `Uint8ClampedArray`.
pub(super) fn refresh_colors(core: &mut SandpileCore) -> *const u32 {
    let palette = core.palette;
    let counts = core.grid.counts();

    #[cfg(feature = "parallel")]
    {
        core.colors
            .par_iter_mut()
            .zip(counts.par_iter())
            .for_each(|(color, &count)| *color = palette.color_of(count));
    }
    #[cfg(not(feature = "parallel"))]
    {
        for (color, &count) in core.colors.iter_mut().zip(counts) {
            *color = palette.color_of(count);
        }
    }

    core.colors.as_ptr()
}

pub(super) fn histogram(core: &SandpileCore, height: f32) -> Vec<f32> {
    core.feed.scaled(height)
}
