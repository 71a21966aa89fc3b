//! Loosely-typed entries found in the parallel history arrays.
//!
//! The history endpoint normally emits JSON numbers and `YYYY-MM-DD` strings,
//! but string-encoded numbers, `null` gaps and epoch timestamps all show up
//! depending on the upstream data source. These tokens keep the raw value
//! around so the analytics layer can report exactly which entry was bad.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

/// A single price or volume entry as received.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum RawNumber {
    Number(f64),
    Text(String),
    Null,
}

impl RawNumber {
    /// Returns the finite numeric value, parsing string-encoded numbers.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            RawNumber::Number(n) => Some(*n).filter(|v| v.is_finite()),
            RawNumber::Text(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
            RawNumber::Null => None,
        }
    }

    /// Returns the value as a share count: finite, non-negative and integral.
    pub fn as_u64(&self) -> Option<u64> {
        let value = self.as_f64()?;
        if value < 0.0 || value.fract() != 0.0 || value > u64::MAX as f64 {
            return None;
        }
        Some(value as u64)
    }
}

impl std::fmt::Display for RawNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RawNumber::Number(n) => write!(f, "{}", n),
            RawNumber::Text(s) => write!(f, "\"{}\"", s),
            RawNumber::Null => write!(f, "null"),
        }
    }
}

impl From<f64> for RawNumber {
    fn from(value: f64) -> Self {
        RawNumber::Number(value)
    }
}

impl From<&str> for RawNumber {
    fn from(value: &str) -> Self {
        RawNumber::Text(value.to_string())
    }
}

/// A date entry: either a calendar string or a numeric epoch in milliseconds.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum RawDate {
    EpochMillis(i64),
    Text(String),
}

impl RawDate {
    /// Normalizes the entry to a calendar date.
    ///
    /// Accepts `YYYY-MM-DD`, an RFC 3339 timestamp (the date in its own
    /// offset is kept), or epoch milliseconds.
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        match self {
            RawDate::EpochMillis(ms) => DateTime::from_timestamp_millis(*ms).map(|dt| dt.date_naive()),
            RawDate::Text(s) => {
                let s = s.trim();
                NaiveDate::parse_from_str(s, "%Y-%m-%d").ok().or_else(|| {
                    DateTime::parse_from_rfc3339(s)
                        .ok()
                        .map(|dt| dt.date_naive())
                })
            }
        }
    }
}

impl std::fmt::Display for RawDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RawDate::EpochMillis(ms) => write!(f, "{}", ms),
            RawDate::Text(s) => write!(f, "\"{}\"", s),
        }
    }
}

impl From<&str> for RawDate {
    fn from(value: &str) -> Self {
        RawDate::Text(value.to_string())
    }
}

impl From<NaiveDate> for RawDate {
    fn from(value: NaiveDate) -> Self {
        RawDate::Text(value.format("%Y-%m-%d").to_string())
    }
}
