//! Market summary view model.

use serde::{Deserialize, Serialize};
use stockdash_api::types::{MarketSnapshot, MarketStatus, Snapshot};

use crate::format::{format_currency, format_market_cap, format_signed_currency, format_signed_percent};
use crate::ranking::{rank_movers, with_ranks};

/// One row of the gainers or losers list.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MoverRow {
    pub rank: usize,
    pub symbol: String,
    pub price: String,
    pub change: String,
    pub change_percent: String,
}

impl MoverRow {
    fn new(rank: usize, s: &Snapshot) -> Self {
        Self {
            rank,
            symbol: s.symbol.clone(),
            price: format_currency(s.current_price),
            change: format_signed_currency(s.change),
            change_percent: format_signed_percent(s.change_percent),
        }
    }
}

/// Market summary with formatted magnitudes, ready for display.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MarketView {
    pub total_market_cap: String,
    pub total_stocks: u64,
    pub market_status: MarketStatus,
    pub top_gainers: Vec<MoverRow>,
    pub top_losers: Vec<MoverRow>,
}

impl MarketView {
    /// Formats a summary, keeping the backend's ranking order.
    pub fn from_snapshot(snapshot: &MarketSnapshot) -> Self {
        Self {
            total_market_cap: format_market_cap(snapshot.total_market_cap),
            total_stocks: snapshot.total_stocks,
            market_status: snapshot.market_status,
            top_gainers: with_ranks(&snapshot.top_gainers)
                .map(|(rank, s)| MoverRow::new(rank, s))
                .collect(),
            top_losers: with_ranks(&snapshot.top_losers)
                .map(|(rank, s)| MoverRow::new(rank, s))
                .collect(),
        }
    }
}

/// Builds a market summary client-side from raw quotes.
///
/// Totals cover every snapshot given; the mover lists follow
/// [`rank_movers`].
pub fn summarize_market(snapshots: &[Snapshot], status: MarketStatus, limit: usize) -> MarketSnapshot {
    let movers = rank_movers(snapshots, limit);
    MarketSnapshot {
        total_market_cap: snapshots.iter().map(|s| s.market_cap).sum(),
        total_stocks: snapshots.len() as u64,
        market_status: status,
        top_gainers: movers.gainers,
        top_losers: movers.losers,
    }
}
