use wasm_bindgen::prelude::*;

use crate::core::SandpileError;

use super::perf_stats::DropStats;
use super::{IntervalPreset, SandpileCore, TargetPolicy};

fn to_js(e: SandpileError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// JS-facing handle. The page calls the `on_*` commands from its event
/// handlers and reads counts/colours/feed back after each frame.
#[wasm_bindgen]
pub struct Sandpile {
    core: SandpileCore,
}

#[wasm_bindgen]
impl Sandpile {
    /// Create a sandpile with default settings and the given grid size
    #[wasm_bindgen(constructor)]
    pub fn new(columns: u32, rows: u32) -> Result<Sandpile, JsValue> {
        let core = SandpileCore::with_dimensions(columns, rows).map_err(to_js)?;
        Ok(Self { core })
    }

    /// Create from a JSON config document (camelCase keys, all optional)
    #[wasm_bindgen(js_name = fromConfig)]
    pub fn from_config(json: &str) -> Result<Sandpile, JsValue> {
        let core = SandpileCore::from_config_json(json).map_err(|e| {
            console_warn!("sandpile: rejected config: {}", e);
            to_js(e)
        })?;
        Ok(Self { core })
    }

    #[wasm_bindgen(getter)]
    pub fn columns(&self) -> u32 { self.core.columns() }

    #[wasm_bindgen(getter)]
    pub fn rows(&self) -> u32 { self.core.rows() }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool { self.core.is_running() }

    #[wasm_bindgen(getter)]
    pub fn max_seen(&self) -> u32 { self.core.max_seen() }

    #[wasm_bindgen(getter)]
    pub fn total_grains(&self) -> f64 { self.core.total_grains() as f64 }

    pub fn config_json(&self) -> String {
        self.core.config().to_json()
    }

    // === COMMANDS ===

    /// Drop a grain on an explicit cell (pointer click). Returns the
    /// avalanche size. Out-of-range cells are rejected, not clamped.
    pub fn on_manual_drop(&mut self, x: i32, y: i32) -> Result<u32, JsValue> {
        self.core.drop_at(x as i64, y as i64).map_err(to_js)
    }

    /// Returns true if this call armed the timer
    pub fn on_start(&mut self) -> bool {
        self.core.start()
    }

    pub fn on_stop(&mut self) -> bool {
        self.core.stop()
    }

    pub fn on_reset(&mut self) {
        self.core.reset();
    }

    pub fn on_policy_change(&mut self, policy: TargetPolicy) {
        self.core.set_policy(policy);
    }

    pub fn on_interval_change(&mut self, interval_ms: f64) -> Result<(), JsValue> {
        self.core.set_interval(interval_ms).map_err(to_js)
    }

    pub fn on_interval_preset(&mut self, preset: IntervalPreset) {
        self.core.set_interval_preset(preset);
    }

    /// Feed host frame time; runs the ticks that fell due
    pub fn advance(&mut self, dt_ms: f64) -> Result<u32, JsValue> {
        self.core.advance(dt_ms).map_err(to_js)
    }

    /// Run one driver tick immediately
    pub fn tick(&mut self) -> Result<u32, JsValue> {
        self.core.tick().map_err(to_js)
    }

    pub fn set_seed(&mut self, seed: u32) {
        self.core.set_seed(seed);
    }

    pub fn clamp_x(&self, x: i32) -> u32 {
        self.core.clamp(x as i64, 0).x
    }

    pub fn clamp_y(&self, y: i32) -> u32 {
        self.core.clamp(0, y as i64).y
    }

    // === SNAPSHOTS ===

    /// Grains in one cell; `undefined` for a cell off the grid
    pub fn count(&self, x: u32, y: u32) -> Option<u8> {
        self.core.count(x, y)
    }

    /// Get pointer to counts array (one byte per cell, row-major)
    pub fn counts_ptr(&self) -> *const u8 {
        self.core.counts_ptr()
    }

    pub fn counts_len(&self) -> usize {
        self.core.counts_len()
    }

    /// Repaint and return the pointer to the ABGR colour buffer
    pub fn refresh_colors(&mut self) -> *const u32 {
        self.core.refresh_colors()
    }

    pub fn colors_ptr(&self) -> *const u32 {
        self.core.colors_ptr()
    }

    pub fn colors_len(&self) -> usize {
        self.core.colors_len()
    }

    pub fn colors_len_bytes(&self) -> usize {
        self.core.colors_len() * std::mem::size_of::<u32>()
    }

    /// Recent avalanche sizes, oldest first
    pub fn feed_values(&self) -> Vec<u32> {
        self.core.feed().to_vec()
    }

    pub fn feed_len(&self) -> usize {
        self.core.feed().len()
    }

    pub fn histogram(&self, height: f32) -> Vec<f32> {
        self.core.histogram(height)
    }

    // === PERF ===

    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    pub fn get_stats(&self) -> DropStats {
        self.core.stats()
    }
}
