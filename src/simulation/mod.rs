//! SandpileCore - the owned simulation state
//!
//! One object owns the grid, the event feed and the driver. Every mutating
//! call takes `&mut self` and runs to completion (a drop settles its whole
//! avalanche before returning), so there is never a half-toppled grid to
//! observe.
//!
//! Toppling is in systems/topple.rs
//! The event feed is in systems/feed.rs
//! The timed driver is in driver/driver.rs

use crate::core::SandpileError;
use crate::domain::config::SandpileConfig;
use crate::domain::palette::Palette;
use crate::grid::{Coord, Grid};
use crate::systems::{EventFeed, Toppler};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/random.rs"]
mod random;
#[path = "driver/driver.rs"]
mod driver;
#[path = "commands/commands.rs"]
mod commands;
#[path = "render/render_extract.rs"]
mod render_extract;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use driver::{Driver, DriverState, IntervalPreset, TargetPolicy};
pub use facade::Sandpile;
pub use perf_stats::DropStats;

use perf_timer::PerfTimer;

pub struct SandpileCore {
    config: SandpileConfig,
    palette: Palette,
    grid: Grid,
    toppler: Toppler,
    feed: EventFeed,
    driver: Driver,

    // Render buffer: one ABGR colour per cell
    colors: Vec<u32>,

    // Perf metrics
    perf_enabled: bool,
    stats: DropStats,
}

impl SandpileCore {
    pub fn new(config: SandpileConfig) -> Result<Self, SandpileError> {
        init::create_core(config)
    }

    /// Default config with the given grid size.
    pub fn with_dimensions(columns: u32, rows: u32) -> Result<Self, SandpileError> {
        init::create_core(SandpileConfig::with_dimensions(columns, rows))
    }

    pub fn from_config_json(json: &str) -> Result<Self, SandpileError> {
        init::create_core(SandpileConfig::from_json(json)?)
    }

    pub fn config(&self) -> &SandpileConfig { &self.config }

    pub fn grid(&self) -> &Grid { &self.grid }

    pub fn feed(&self) -> &EventFeed { &self.feed }

    pub fn driver(&self) -> &Driver { &self.driver }

    pub fn columns(&self) -> u32 { self.grid.columns() }

    pub fn rows(&self) -> u32 { self.grid.rows() }

    pub fn count(&self, x: u32, y: u32) -> Option<u8> {
        if self.grid.in_bounds(x as i64, y as i64) {
            Some(self.grid.count(x, y))
        } else {
            None
        }
    }

    pub fn total_grains(&self) -> u64 { self.grid.total_grains() }

    pub fn max_seen(&self) -> u32 { self.feed.max_seen() }

    // === Commands ===

    /// Drop one grain at `(x, y)`, settle, and record the avalanche size.
    /// Works whether or not the driver is running.
    pub fn drop_at(&mut self, x: i64, y: i64) -> Result<u32, SandpileError> {
        commands::drop_at(self, x, y)
    }

    /// One driver tick: pick a target with the current policy and drop.
    pub fn tick(&mut self) -> Result<u32, SandpileError> {
        commands::tick(self)
    }

    /// Advance the driver clock; runs every tick that fell due.
    /// Returns the number of ticks run.
    pub fn advance(&mut self, dt_ms: f64) -> Result<u32, SandpileError> {
        commands::advance(self, dt_ms)
    }

    /// Zero the grid and clear the feed. Driver state is kept.
    pub fn reset(&mut self) {
        commands::reset(self)
    }

    pub fn start(&mut self) -> bool { self.driver.start() }

    pub fn stop(&mut self) -> bool { self.driver.stop() }

    pub fn is_running(&self) -> bool { self.driver.is_running() }

    pub fn set_policy(&mut self, policy: TargetPolicy) {
        self.driver.set_policy(policy);
    }

    pub fn set_interval(&mut self, interval_ms: f64) -> Result<(), SandpileError> {
        self.driver.set_interval(interval_ms)
    }

    pub fn set_interval_preset(&mut self, preset: IntervalPreset) {
        settings::set_interval_preset(self, preset)
    }

    pub fn set_seed(&mut self, seed: u32) {
        self.driver.set_seed(seed);
    }

    /// Clamp pointer-derived input onto the grid.
    pub fn clamp(&self, x: i64, y: i64) -> Coord {
        self.grid.clamp(x, y)
    }

    // === Perf ===

    /// Enable or disable drop timing (adds a clock read per drop when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    pub fn stats(&self) -> DropStats {
        settings::get_stats(self)
    }

    // === Render ===

    /// Repaint the colour buffer from the current counts.
    pub fn refresh_colors(&mut self) -> *const u32 {
        render_extract::refresh_colors(self)
    }

    pub fn colors(&self) -> &[u32] { &self.colors }

    pub fn colors_ptr(&self) -> *const u32 { self.colors.as_ptr() }

    pub fn colors_len(&self) -> usize { self.colors.len() }

    pub fn counts_ptr(&self) -> *const u8 { self.grid.counts_ptr() }

    pub fn counts_len(&self) -> usize { self.grid.size() }

    /// Histogram bar heights for a chart `height` units tall.
    pub fn histogram(&self, height: f32) -> Vec<f32> {
        render_extract::histogram(self, height)
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
