use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building dashboard data from user input
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DashboardError {
    #[error("Invalid time window: {0}")]
    InvalidWindow(String),

    #[error("Degenerate polygon: {0}")]
    DegeneratePolygon(String),

    #[error("Invalid zone definition: {0}")]
    InvalidZone(String),

    #[error("Duplicate zone name: {0}")]
    DuplicateZone(String),

    #[error("Timestamp out of range: {0}")]
    TimestampOutOfRange(i64),
}

/// Errors raised while loading scoring artifacts or scoring text
#[derive(Error, Debug)]
pub enum ScoringError {
    #[error("Failed to read artifact {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse artifact {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Vectorizer produces {vocabulary} features but classifier expects {coefficients}")]
    DimensionMismatch {
        vocabulary: usize,
        coefficients: usize,
    },
}

pub type Result<T> = std::result::Result<T, DashboardError>;
