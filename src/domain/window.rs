use chrono::{DateTime, NaiveDateTime};
use serde::Serialize;

use crate::error::{DashboardError, Result};

/// Accepted input layouts for window bounds, tried in order
const INPUT_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"];

/// Layout used for tick dates in the generated series
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Inclusive [start, end] range of epoch seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeWindow {
    pub start: i64,
    pub end: i64,
}

impl TimeWindow {
    /// Build a window from epoch seconds, rejecting inverted ranges
    pub fn new(start: i64, end: i64) -> Result<Self> {
        if start > end {
            return Err(DashboardError::InvalidWindow(format!(
                "start ({}) is after end ({})",
                start, end
            )));
        }
        Ok(Self { start, end })
    }

    /// Parse a window from two `YYYY-MM-DDTHH:MM` strings, read as UTC
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        let start_ts = parse_timestamp(start)?;
        let end_ts = parse_timestamp(end)?;
        Self::new(start_ts, end_ts)
    }

    pub fn contains(&self, timestamp: i64) -> bool {
        self.start <= timestamp && timestamp <= self.end
    }
}

/// Parse a single `YYYY-MM-DDTHH:MM` string into epoch seconds (UTC)
pub fn parse_timestamp(value: &str) -> Result<i64> {
    let trimmed = value.trim();
    INPUT_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .map(|dt| dt.and_utc().timestamp())
        .ok_or_else(|| {
            DashboardError::InvalidWindow(format!(
                "'{}' is not a date/time in YYYY-MM-DDTHH:MM form",
                value
            ))
        })
}

/// Format epoch seconds as a UTC calendar date
pub fn format_date(timestamp: i64) -> Result<String> {
    DateTime::from_timestamp(timestamp, 0)
        .map(|dt| dt.format(DATE_FORMAT).to_string())
        .ok_or(DashboardError::TimestampOutOfRange(timestamp))
}
