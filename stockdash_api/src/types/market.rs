use serde::{Deserialize, Serialize};

use super::quote::Snapshot;

/// Trading session state reported by the market summary.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarketStatus {
    #[serde(rename = "open")]
    Open,
    #[serde(rename = "closed")]
    Closed,
    #[default]
    #[serde(rename = "unknown", other)]
    Unknown,
}

impl std::fmt::Display for MarketStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                MarketStatus::Open => "open",
                MarketStatus::Closed => "closed",
                MarketStatus::Unknown => "unknown",
            }
        )?;
        Ok(())
    }
}

/// Market-wide summary returned by `/market-summary`.
///
/// `top_gainers` and `top_losers` arrive already ranked.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MarketSnapshot {
    pub total_market_cap: f64,
    pub total_stocks: u64,
    #[serde(default)]
    pub market_status: MarketStatus,
    pub top_gainers: Vec<Snapshot>,
    pub top_losers: Vec<Snapshot>,
}
