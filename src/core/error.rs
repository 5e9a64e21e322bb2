use std::fmt;

/// Everything that can go wrong inside the engine.
///
/// Only `InvalidConfig` and `InvalidDimensions` are expected in practice
/// (bad host input at construction). `OutOfBounds` is an integration bug in
/// the caller and `CascadeLimit` is an invariant violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SandpileError {
    InvalidDimensions { columns: u32, rows: u32 },
    OutOfBounds { x: i64, y: i64, columns: u32, rows: u32 },
    CascadeLimit { limit: u32 },
    InvalidConfig(String),
}

impl fmt::Display for SandpileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SandpileError::InvalidDimensions { columns, rows } => {
                write!(f, "invalid grid dimensions {}x{}", columns, rows)
            }
            SandpileError::OutOfBounds { x, y, columns, rows } => {
                write!(f, "cell ({}, {}) is outside the {}x{} grid", x, y, columns, rows)
            }
            SandpileError::CascadeLimit { limit } => {
                write!(f, "cascade exceeded {} topples without settling", limit)
            }
            SandpileError::InvalidConfig(msg) => write!(f, "invalid config: {}", msg),
        }
    }
}

impl std::error::Error for SandpileError {}

impl From<serde_json::Error> for SandpileError {
    fn from(e: serde_json::Error) -> Self {
        SandpileError::InvalidConfig(e.to_string())
    }
}
