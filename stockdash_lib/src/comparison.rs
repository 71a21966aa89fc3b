//! Side-by-side comparison table across the selected symbols.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use stockdash_api::types::{ComparisonResponse, Snapshot};

use crate::format::{
    format_change, format_currency, format_decimal, format_fraction_percent, format_market_cap,
    format_optional, format_volume,
};

/// The fixed metric rows, in display order.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    CurrentPrice,
    Change,
    Volume,
    MarketCap,
    PeRatio,
    DividendYield,
    Beta,
}

impl Metric {
    pub const ALL: [Metric; 7] = [
        Metric::CurrentPrice,
        Metric::Change,
        Metric::Volume,
        Metric::MarketCap,
        Metric::PeRatio,
        Metric::DividendYield,
        Metric::Beta,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Metric::CurrentPrice => "Current Price",
            Metric::Change => "Change",
            Metric::Volume => "Volume",
            Metric::MarketCap => "Market Cap",
            Metric::PeRatio => "P/E Ratio",
            Metric::DividendYield => "Dividend Yield",
            Metric::Beta => "Beta",
        }
    }

    /// Renders this metric's cell for one snapshot.
    pub fn cell(&self, s: &Snapshot) -> String {
        match self {
            Metric::CurrentPrice => format_currency(s.current_price),
            Metric::Change => format_change(s.change, s.change_percent),
            Metric::Volume => format_volume(s.volume as f64),
            Metric::MarketCap => format_market_cap(s.market_cap),
            Metric::PeRatio => format_optional(s.pe_ratio, format_decimal),
            Metric::DividendYield => format_optional(s.dividend_yield, format_fraction_percent),
            Metric::Beta => format_optional(s.beta, format_decimal),
        }
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One metric across every column.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ComparisonRow {
    pub metric: Metric,
    pub label: String,
    /// Positionally aligned with [`ComparisonTable::symbols`].
    pub values: Vec<String>,
}

/// Row-oriented comparison table. Columns follow input order exactly;
/// duplicate symbols get their own column.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ComparisonTable {
    pub symbols: Vec<String>,
    pub rows: Vec<ComparisonRow>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comparison_date: Option<NaiveDate>,
}

impl ComparisonTable {
    /// Builds the table from a comparison payload, keeping its date.
    pub fn from_response(response: &ComparisonResponse) -> Self {
        let mut table = build_comparison_table(&response.stocks);
        table.comparison_date = Some(response.comparison_date);
        table
    }

    /// Values of one metric row.
    pub fn row(&self, metric: Metric) -> Option<&[String]> {
        self.rows
            .iter()
            .find(|r| r.metric == metric)
            .map(|r| r.values.as_slice())
    }

    /// Single cell by metric and column index.
    pub fn cell(&self, metric: Metric, column: usize) -> Option<&str> {
        self.row(metric)?.get(column).map(String::as_str)
    }
}

/// Builds the seven-row comparison table.
///
/// The 1..=5 column bound belongs to the caller's selection; this function
/// formats whatever it is given.
pub fn build_comparison_table(snapshots: &[Snapshot]) -> ComparisonTable {
    let symbols = snapshots.iter().map(|s| s.symbol.clone()).collect();
    let rows = Metric::ALL
        .iter()
        .map(|metric| ComparisonRow {
            metric: *metric,
            label: metric.label().to_string(),
            values: snapshots.iter().map(|s| metric.cell(s)).collect(),
        })
        .collect();

    ComparisonTable {
        symbols,
        rows,
        comparison_date: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::NOT_APPLICABLE;

    fn aapl() -> Snapshot {
        Snapshot {
            volume: 50_000_000,
            market_cap: 2.75e12,
            pe_ratio: None,
            dividend_yield: Some(0.005),
            beta: Some(1.29),
            ..Snapshot::new("AAPL", 175.5, 1.3, 0.75)
        }
    }

    fn msft() -> Snapshot {
        Snapshot {
            volume: 25_000_000,
            market_cap: 2.82e12,
            pe_ratio: Some(35.2),
            dividend_yield: Some(0.008),
            beta: Some(0.88),
            ..Snapshot::new("MSFT", 380.25, 1.35, 0.36)
        }
    }

    #[test]
    fn test_missing_pe_renders_sentinel() {
        let table = build_comparison_table(&[aapl(), msft()]);
        assert_eq!(table.symbols, vec!["AAPL", "MSFT"]);
        assert_eq!(table.cell(Metric::PeRatio, 0), Some(NOT_APPLICABLE));
        assert_eq!(table.cell(Metric::PeRatio, 1), Some("35.20"));
    }

    #[test]
    fn test_cells_are_formatted() {
        let table = build_comparison_table(&[aapl()]);
        assert_eq!(table.cell(Metric::CurrentPrice, 0), Some("$175.50"));
        assert_eq!(table.cell(Metric::Change, 0), Some("+1.30 (+0.75%)"));
        assert_eq!(table.cell(Metric::Volume, 0), Some("50.00M"));
        assert_eq!(table.cell(Metric::MarketCap, 0), Some("$2.75T"));
        assert_eq!(table.cell(Metric::DividendYield, 0), Some("0.50%"));
        assert_eq!(table.cell(Metric::Beta, 0), Some("1.29"));
    }

    #[test]
    fn test_negative_change_keeps_sign() {
        let tsla = Snapshot::new("TSLA", 245.6, -4.63, -1.85);
        let table = build_comparison_table(&[tsla]);
        assert_eq!(table.cell(Metric::Change, 0), Some("-4.63 (-1.85%)"));
    }

    #[test]
    fn test_absent_optionals_render_sentinel() {
        let bare = Snapshot::new("DIS", 95.6, -1.39, -1.43);
        let table = build_comparison_table(&[bare]);
        assert_eq!(table.cell(Metric::DividendYield, 0), Some(NOT_APPLICABLE));
        assert_eq!(table.cell(Metric::Beta, 0), Some(NOT_APPLICABLE));
    }

    #[test]
    fn test_row_count_is_fixed_and_columns_follow_input() {
        let all = [aapl(), msft(), aapl(), msft(), aapl()];
        for n in 1..=5 {
            let table = build_comparison_table(&all[..n]);
            assert_eq!(table.rows.len(), 7);
            assert_eq!(table.symbols.len(), n);
            for row in &table.rows {
                assert_eq!(row.values.len(), n);
            }
        }
    }

    #[test]
    fn test_duplicates_are_preserved_positionally() {
        let table = build_comparison_table(&[msft(), aapl(), msft()]);
        assert_eq!(table.symbols, vec!["MSFT", "AAPL", "MSFT"]);
        assert_eq!(table.cell(Metric::PeRatio, 2), Some("35.20"));
    }

    #[test]
    fn test_rows_follow_metric_order() {
        let table = build_comparison_table(&[aapl()]);
        let labels: Vec<&str> = table.rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "Current Price",
                "Change",
                "Volume",
                "Market Cap",
                "P/E Ratio",
                "Dividend Yield",
                "Beta"
            ]
        );
    }

    #[test]
    fn test_from_response_keeps_date() {
        let response = ComparisonResponse {
            stocks: vec![aapl()],
            comparison_date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
        };
        let table = ComparisonTable::from_response(&response);
        assert_eq!(table.comparison_date, NaiveDate::from_ymd_opt(2024, 3, 15));
    }
}
