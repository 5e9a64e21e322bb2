use crate::core::SandpileError;

use super::{PerfTimer, SandpileCore};

pub(super) fn drop_at(core: &mut SandpileCore, x: i64, y: i64) -> Result<u32, SandpileError> {
    let timer = PerfTimer::start_if(core.perf_enabled);

    let outcome = match core.toppler.drop_grain(&mut core.grid, x, y) {
        Ok(outcome) => outcome,
        Err(e) => {
            if matches!(e, SandpileError::CascadeLimit { .. }) {
                core.stats.record_fault();
            }
            return Err(e);
        }
    };

    core.feed.record(outcome.events);
    core.stats.record(outcome.events, outcome.grains_lost, timer.elapsed_ms());

    Ok(outcome.events)
}

pub(super) fn tick(core: &mut SandpileCore) -> Result<u32, SandpileError> {
    let target = core.driver.next_target(core.grid.columns(), core.grid.rows());
    drop_at(core, target.x as i64, target.y as i64)
}

pub(super) fn advance(core: &mut SandpileCore, dt_ms: f64) -> Result<u32, SandpileError> {
    let due = core.driver.advance(dt_ms);
    for _ in 0..due {
        tick(core)?;
    }
    Ok(due)
}

pub(super) fn reset(core: &mut SandpileCore) {
    core.grid.reset();
    core.feed.clear();
}
