//! Driver - decides which cell gets the next grain, and when.
//!
//! The clock lives in the host: it calls `advance(dt_ms)` from its frame
//! loop and the driver reports how many ticks fell due. Keeping the timer
//! as plain state means Idle/Running and re-arming are testable without a
//! live `setInterval`.

use wasm_bindgen::prelude::*;

use crate::core::SandpileError;
use crate::grid::Coord;

use super::random;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    Idle,
    Running,
}

/// Where timed drops land.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetPolicy {
    Random = 0,
    FixedCenter = 1,
    FixedCorner = 2,
}

/// Named cadences, resolved through the config's interval table.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntervalPreset {
    Slow = 0,
    Fast = 1,
    Ultra = 2,
}

impl std::str::FromStr for TargetPolicy {
    type Err = SandpileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "random" => Ok(TargetPolicy::Random),
            "fixed-center" => Ok(TargetPolicy::FixedCenter),
            "fixed-corner" => Ok(TargetPolicy::FixedCorner),
            _ => Err(SandpileError::InvalidConfig(format!("unknown target policy: {}", s))),
        }
    }
}

impl std::str::FromStr for IntervalPreset {
    type Err = SandpileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "slow" => Ok(IntervalPreset::Slow),
            "fast" => Ok(IntervalPreset::Fast),
            "ultra" => Ok(IntervalPreset::Ultra),
            _ => Err(SandpileError::InvalidConfig(format!("unknown interval: {}", s))),
        }
    }
}

pub struct Driver {
    state: DriverState,
    policy: TargetPolicy,
    interval_ms: f64,
    elapsed_ms: f64,
    arm_count: u32,
    max_ticks_per_advance: u32,
    rng_state: u32,
}

impl Driver {
    pub fn new(interval_ms: f64, max_ticks_per_advance: u32, seed: u32) -> Self {
        Self {
            state: DriverState::Idle,
            policy: TargetPolicy::Random,
            interval_ms,
            elapsed_ms: 0.0,
            arm_count: 0,
            max_ticks_per_advance,
            rng_state: seed_or_default(seed),
        }
    }

    pub fn state(&self) -> DriverState { self.state }

    pub fn is_running(&self) -> bool { self.state == DriverState::Running }

    pub fn policy(&self) -> TargetPolicy { self.policy }

    pub fn interval_ms(&self) -> f64 { self.interval_ms }

    /// How many times a timer has been armed.
    pub fn arm_count(&self) -> u32 { self.arm_count }

    /// Idle -> Running. Returns false (and arms nothing) if already running.
    pub fn start(&mut self) -> bool {
        if self.is_running() {
            return false;
        }
        self.arm();
        true
    }

    /// Running -> Idle. Returns false if already idle.
    pub fn stop(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.state = DriverState::Idle;
        self.elapsed_ms = 0.0;
        true
    }

    /// Change cadence. A running timer is re-armed and stays running.
    pub fn set_interval(&mut self, interval_ms: f64) -> Result<(), SandpileError> {
        if !(interval_ms.is_finite() && interval_ms > 0.0) {
            return Err(SandpileError::InvalidConfig(format!(
                "interval must be a positive number of ms, got {}",
                interval_ms
            )));
        }
        self.interval_ms = interval_ms;
        if self.stop() {
            self.start();
        }
        Ok(())
    }

    /// Takes effect on the next tick.
    pub fn set_policy(&mut self, policy: TargetPolicy) {
        self.policy = policy;
    }

    pub fn set_seed(&mut self, seed: u32) {
        self.rng_state = seed_or_default(seed);
    }

    /// Feed elapsed host time; returns the number of ticks now due.
    ///
    /// At most `max_ticks_per_advance` ticks fire per call. Backlog beyond
    /// that is dropped, like a browser timer that never catches up.
    pub fn advance(&mut self, dt_ms: f64) -> u32 {
        if !self.is_running() || !(dt_ms.is_finite() && dt_ms > 0.0) {
            return 0;
        }
        self.elapsed_ms += dt_ms;
        let due = (self.elapsed_ms / self.interval_ms).floor();
        if due < 1.0 {
            return 0;
        }
        if due > self.max_ticks_per_advance as f64 {
            self.elapsed_ms %= self.interval_ms;
            return self.max_ticks_per_advance;
        }
        self.elapsed_ms -= due * self.interval_ms;
        due as u32
    }

    /// Next drop target under the current policy.
    pub fn next_target(&mut self, columns: u32, rows: u32) -> Coord {
        match self.policy {
            TargetPolicy::Random => {
                let x = random::below(random::xorshift32(&mut self.rng_state), columns);
                let y = random::below(random::xorshift32(&mut self.rng_state), rows);
                Coord::new(x, y)
            }
            TargetPolicy::FixedCenter => Coord::new(columns / 2, rows / 2),
            TargetPolicy::FixedCorner => Coord::new(0, 0),
        }
    }

    fn arm(&mut self) {
        self.state = DriverState::Running;
        self.elapsed_ms = 0.0;
        self.arm_count += 1;
    }
}

// xorshift has a fixed point at zero.
fn seed_or_default(seed: u32) -> u32 {
    if seed == 0 { 12345 } else { seed }
}
