use super::perf_stats::DropStats;
use super::{IntervalPreset, SandpileCore};

pub(super) fn enable_perf_metrics(core: &mut SandpileCore, enabled: bool) {
    core.perf_enabled = enabled;
}

pub(super) fn get_stats(core: &SandpileCore) -> DropStats {
    core.stats.clone()
}

pub(super) fn set_interval_preset(core: &mut SandpileCore, preset: IntervalPreset) {
    let table = core.config.intervals;
    let ms = match preset {
        IntervalPreset::Slow => table.slow,
        IntervalPreset::Fast => table.fast,
        IntervalPreset::Ultra => table.ultra,
    };
    // The table was validated at construction.
    if let Err(e) = core.driver.set_interval(ms) {
        console_warn!("sandpile: {}", e);
    }
}
