//! Per-sector performance summary.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use stockdash_api::types::{Company, Snapshot};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SectorStock {
    pub symbol: String,
    pub name: String,
    pub current_price: f64,
    pub change_percent: f64,
    pub market_cap: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SectorSummary {
    pub sector: String,
    pub stocks: Vec<SectorStock>,
    pub total_market_cap: f64,
    /// Mean `change_percent` of the members, rounded to two decimals.
    pub avg_change_percent: f64,
}

impl SectorSummary {
    pub fn stock_count(&self) -> usize {
        self.stocks.len()
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Groups snapshots by their company's sector.
///
/// Snapshots whose symbol is not in `companies` are skipped. Sectors come
/// out ordered by name; stocks within a sector keep snapshot order.
pub fn sector_performance(companies: &[Company], snapshots: &[Snapshot]) -> Vec<SectorSummary> {
    let directory: HashMap<&str, &Company> =
        companies.iter().map(|c| (c.symbol.as_str(), c)).collect();

    let mut grouped: BTreeMap<&str, Vec<SectorStock>> = BTreeMap::new();
    let mut skipped = 0usize;
    for snapshot in snapshots {
        let Some(company) = directory.get(snapshot.symbol.as_str()) else {
            skipped += 1;
            continue;
        };
        grouped
            .entry(company.sector.as_str())
            .or_default()
            .push(SectorStock {
                symbol: snapshot.symbol.clone(),
                name: company.name.clone(),
                current_price: snapshot.current_price,
                change_percent: snapshot.change_percent,
                market_cap: snapshot.market_cap,
            });
    }

    if skipped > 0 {
        tracing::debug!("Skipped {} snapshots with no company entry", skipped);
    }

    grouped
        .into_iter()
        .map(|(sector, stocks)| {
            let total_market_cap = stocks.iter().map(|s| s.market_cap).sum();
            let pct_sum: f64 = stocks.iter().map(|s| s.change_percent).sum();
            let avg_change_percent = round2(pct_sum / stocks.len() as f64);
            SectorSummary {
                sector: sector.to_string(),
                stocks,
                total_market_cap,
                avg_change_percent,
            }
        })
        .collect()
}
