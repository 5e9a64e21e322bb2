//! Drop timing. A disabled timer never reads the clock and reports 0 ms.

#[cfg(target_arch = "wasm32")]
type Stamp = f64;
#[cfg(not(target_arch = "wasm32"))]
type Stamp = std::time::Instant;

#[cfg(target_arch = "wasm32")]
fn now() -> Stamp {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
fn now() -> Stamp {
    std::time::Instant::now()
}

#[cfg(target_arch = "wasm32")]
fn millis_since(stamp: Stamp) -> f64 {
    js_sys::Date::now() - stamp
}

#[cfg(not(target_arch = "wasm32"))]
fn millis_since(stamp: Stamp) -> f64 {
    stamp.elapsed().as_secs_f64() * 1000.0
}

#[derive(Clone, Copy)]
pub(crate) struct PerfTimer {
    started: Option<Stamp>,
}

impl PerfTimer {
    pub(crate) fn start_if(enabled: bool) -> Self {
        Self {
            started: enabled.then(now),
        }
    }

    pub(crate) fn elapsed_ms(&self) -> f64 {
        self.started.map(millis_since).unwrap_or(0.0)
    }
}
