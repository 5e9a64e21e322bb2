//! Engine configuration.
//!
//! Everything here is fixed once a `SandpileCore` is built. The host can
//! pass a JSON document (camelCase keys, every key optional):
//!
//! ```json
//! { "columns": 11, "rows": 11, "intervals": { "slow": 400 } }
//! ```

use serde::{Deserialize, Serialize};

use crate::core::SandpileError;
use crate::domain::palette::{Palette, DEFAULT_PALETTE};

pub const DEFAULT_COLUMNS: u32 = 10;
pub const DEFAULT_ROWS: u32 = 10;
/// Count at which a cell topples. Equal to the interior degree.
pub const DEFAULT_THRESHOLD: u8 = 4;
pub const DEFAULT_FEED_MAX_LENGTH: usize = 260;
/// Upper bound on the feed; the histogram is one bar per entry.
pub const MAX_FEED_MAX_LENGTH: usize = 1 << 16;
/// `max_seen` never drops below this, so a quiet start isn't over-amplified.
pub const DEFAULT_MAX_SEEN_FLOOR: u32 = 25;
pub const DEFAULT_MAX_TICKS_PER_ADVANCE: u32 = 8;
pub const DEFAULT_SEED: u32 = 12345;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IntervalTable {
    pub slow: f64,
    pub fast: f64,
    pub ultra: f64,
}

impl Default for IntervalTable {
    fn default() -> Self {
        Self {
            slow: 500.0,
            fast: 100.0,
            ultra: 16.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SandpileConfig {
    pub columns: u32,
    pub rows: u32,
    pub threshold: u8,
    pub feed_max_length: usize,
    pub max_seen_floor: u32,
    pub palette: Vec<String>,
    pub intervals: IntervalTable,
    /// Topple cap per drop. `None` derives one from the grid size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cascade_limit: Option<u32>,
    pub max_ticks_per_advance: u32,
    pub seed: u32,
}

impl Default for SandpileConfig {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            rows: DEFAULT_ROWS,
            threshold: DEFAULT_THRESHOLD,
            feed_max_length: DEFAULT_FEED_MAX_LENGTH,
            max_seen_floor: DEFAULT_MAX_SEEN_FLOOR,
            palette: DEFAULT_PALETTE.iter().map(|s| s.to_string()).collect(),
            intervals: IntervalTable::default(),
            cascade_limit: None,
            max_ticks_per_advance: DEFAULT_MAX_TICKS_PER_ADVANCE,
            seed: DEFAULT_SEED,
        }
    }
}

impl SandpileConfig {
    pub fn with_dimensions(columns: u32, rows: u32) -> Self {
        Self {
            columns,
            rows,
            ..Self::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self, SandpileError> {
        let config: SandpileConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn validate(&self) -> Result<(), SandpileError> {
        if self.columns == 0 || self.rows == 0 {
            return Err(SandpileError::InvalidDimensions {
                columns: self.columns,
                rows: self.rows,
            });
        }
        // Below the interior degree a topple would create grains and the
        // cascade need not terminate.
        if self.threshold < DEFAULT_THRESHOLD {
            return Err(SandpileError::InvalidConfig(format!(
                "threshold must be at least {}, got {}",
                DEFAULT_THRESHOLD, self.threshold
            )));
        }
        if self.feed_max_length == 0 || self.feed_max_length > MAX_FEED_MAX_LENGTH {
            return Err(SandpileError::InvalidConfig(format!(
                "feedMaxLength must be in 1..={}, got {}",
                MAX_FEED_MAX_LENGTH, self.feed_max_length
            )));
        }
        if self.max_ticks_per_advance == 0 {
            return Err(SandpileError::InvalidConfig(
                "maxTicksPerAdvance must be positive".to_string(),
            ));
        }
        if self.cascade_limit == Some(0) {
            return Err(SandpileError::InvalidConfig(
                "cascadeLimit must be positive".to_string(),
            ));
        }
        let IntervalTable { slow, fast, ultra } = self.intervals;
        for (name, ms) in [("slow", slow), ("fast", fast), ("ultra", ultra)] {
            if !(ms.is_finite() && ms > 0.0) {
                return Err(SandpileError::InvalidConfig(format!(
                    "interval {} must be a positive number of ms, got {}",
                    name, ms
                )));
            }
        }
        Palette::from_css(&self.palette)?;
        Ok(())
    }

    pub fn palette(&self) -> Result<Palette, SandpileError> {
        Palette::from_css(&self.palette)
    }

    /// Topple cap for one drop: explicit value, or `4 * cells^2`.
    pub fn effective_cascade_limit(&self) -> u32 {
        if let Some(limit) = self.cascade_limit {
            return limit;
        }
        let cells = (self.columns as u64) * (self.rows as u64);
        cells
            .saturating_mul(cells)
            .saturating_mul(4)
            .min(u32::MAX as u64) as u32
    }
}
