//! Point-in-time quote returned by `/stocks/{symbol}`.
//!
//! The same record shape (minus a few optional fields) is embedded in the
//! market summary and comparison payloads.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One quote for one symbol at one refresh tick.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub symbol: String,

    pub current_price: f64,

    /// Absolute change against the previous close.
    pub change: f64,

    /// Percentage change against the previous close (`1.25` means 1.25%).
    pub change_percent: f64,

    #[serde(default)]
    pub volume: u64,

    /// Market capitalization in dollars. Missing on some payloads; read as 0.
    #[serde(default)]
    pub market_cap: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pe_ratio: Option<f64>,

    /// Dividend yield as a fraction (`0.005` means 0.5%).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dividend_yield: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beta: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub high_52_week: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub low_52_week: Option<f64>,

    /// Backend-local timestamp of the quote. Absent on summary/comparison rows.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<NaiveDateTime>,
}

impl Snapshot {
    /// Minimal snapshot with every optional metric absent.
    pub fn new(symbol: &str, current_price: f64, change: f64, change_percent: f64) -> Self {
        Self {
            symbol: symbol.to_string(),
            current_price,
            change,
            change_percent,
            volume: 0,
            market_cap: 0.0,
            pe_ratio: None,
            dividend_yield: None,
            beta: None,
            high_52_week: None,
            low_52_week: None,
            last_updated: None,
        }
    }
}
