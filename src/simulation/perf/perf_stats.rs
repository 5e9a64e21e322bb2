use wasm_bindgen::prelude::*;

/// Per-drop counters. Counts always update; `last_drop_ms` only while perf
/// metrics are enabled.
#[wasm_bindgen]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DropStats {
    pub(super) last_drop_ms: f64,
    pub(super) last_events: u32,
    pub(super) last_grains_lost: u64,
    pub(super) total_drops: u64,
    pub(super) total_events: u64,
    pub(super) total_grains_lost: u64,
    pub(super) largest_avalanche: u32,
    pub(super) cascade_faults: u32,
}

impl DropStats {
    pub(crate) fn record(&mut self, events: u32, grains_lost: u64, elapsed_ms: f64) {
        self.last_drop_ms = elapsed_ms;
        self.last_events = events;
        self.last_grains_lost = grains_lost;
        self.total_drops += 1;
        self.total_events += events as u64;
        self.total_grains_lost += grains_lost;
        self.largest_avalanche = self.largest_avalanche.max(events);
    }

    pub(crate) fn record_fault(&mut self) {
        self.cascade_faults += 1;
    }
}

#[wasm_bindgen]
impl DropStats {
    #[wasm_bindgen(getter)]
    pub fn last_drop_ms(&self) -> f64 { self.last_drop_ms }
    #[wasm_bindgen(getter)]
    pub fn last_events(&self) -> u32 { self.last_events }
    #[wasm_bindgen(getter)]
    pub fn last_grains_lost(&self) -> u64 { self.last_grains_lost }
    #[wasm_bindgen(getter)]
    pub fn total_drops(&self) -> u64 { self.total_drops }
    #[wasm_bindgen(getter)]
    pub fn total_events(&self) -> u64 { self.total_events }
    #[wasm_bindgen(getter)]
    pub fn total_grains_lost(&self) -> u64 { self.total_grains_lost }
    #[wasm_bindgen(getter)]
    pub fn largest_avalanche(&self) -> u32 { self.largest_avalanche }
    #[wasm_bindgen(getter)]
    pub fn cascade_faults(&self) -> u32 { self.cascade_faults }
}
