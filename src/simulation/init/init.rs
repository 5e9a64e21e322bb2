use crate::core::SandpileError;
use crate::domain::config::SandpileConfig;
use crate::grid::Grid;
use crate::systems::{EventFeed, Toppler};

use super::perf_stats::DropStats;
use super::{Driver, SandpileCore};

pub(super) fn create_core(config: SandpileConfig) -> Result<SandpileCore, SandpileError> {
    config.validate()?;

    let grid = Grid::new(config.columns, config.rows)?;
    let palette = config.palette()?;
    let toppler = Toppler::new(config.threshold, config.effective_cascade_limit());
    let feed = EventFeed::new(config.feed_max_length, config.max_seen_floor);
    let driver = Driver::new(
        config.intervals.slow,
        config.max_ticks_per_advance,
        config.seed,
    );

    // Counts start at zero, so every cell starts as palette[0].
    let colors = vec![palette.color_of(0); grid.size()];

    Ok(SandpileCore {
        config,
        palette,
        grid,
        toppler,
        feed,
        driver,
        colors,
        perf_enabled: false,
        stats: DropStats::default(),
    })
}
