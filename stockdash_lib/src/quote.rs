//! Header and key-metrics view for a single stock.

use serde::{Deserialize, Serialize};
use stockdash_api::types::Snapshot;

use crate::format::{
    format_change, format_currency, format_decimal, format_fraction_percent, format_market_cap,
    format_optional, format_volume,
};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// Non-negative change counts as up.
    pub fn of(change: f64) -> Self {
        if change >= 0.0 {
            Direction::Up
        } else {
            Direction::Down
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Up => write!(f, "up"),
            Direction::Down => write!(f, "down"),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct QuoteMetric {
    pub label: String,
    pub value: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct QuoteView {
    pub symbol: String,
    pub price: String,
    pub change: String,
    pub direction: Direction,
    pub metrics: Vec<QuoteMetric>,
}

impl QuoteView {
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        let metric = |label: &str, value: String| QuoteMetric {
            label: label.to_string(),
            value,
        };
        let metrics = vec![
            metric("Volume", format_volume(snapshot.volume as f64)),
            metric("Market Cap", format_market_cap(snapshot.market_cap)),
            metric("P/E Ratio", format_optional(snapshot.pe_ratio, format_decimal)),
            metric(
                "Dividend Yield",
                format_optional(snapshot.dividend_yield, format_fraction_percent),
            ),
            metric("52W High", format_optional(snapshot.high_52_week, format_currency)),
            metric("52W Low", format_optional(snapshot.low_52_week, format_currency)),
        ];

        Self {
            symbol: snapshot.symbol.clone(),
            price: format_currency(snapshot.current_price),
            change: format_change(snapshot.change, snapshot.change_percent),
            direction: Direction::of(snapshot.change),
            metrics,
        }
    }

    pub fn metric(&self, label: &str) -> Option<&str> {
        self.metrics
            .iter()
            .find(|m| m.label == label)
            .map(|m| m.value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::NOT_APPLICABLE;

    #[test]
    fn test_quote_view_formats_header() {
        let snapshot = Snapshot {
            volume: 55_123_456,
            market_cap: 2.75e12,
            pe_ratio: Some(28.5),
            dividend_yield: Some(0.005),
            high_52_week: Some(199.62),
            low_52_week: Some(164.08),
            ..Snapshot::new("AAPL", 175.5, 2.35, 1.25)
        };
        let view = QuoteView::from_snapshot(&snapshot);
        assert_eq!(view.price, "$175.50");
        assert_eq!(view.change, "+2.35 (+1.25%)");
        assert_eq!(view.direction, Direction::Up);
        assert_eq!(view.metric("Volume"), Some("55.12M"));
        assert_eq!(view.metric("Market Cap"), Some("$2.75T"));
        assert_eq!(view.metric("P/E Ratio"), Some("28.50"));
        assert_eq!(view.metric("Dividend Yield"), Some("0.50%"));
        assert_eq!(view.metric("52W High"), Some("$199.62"));
        assert_eq!(view.metric("52W Low"), Some("$164.08"));
    }

    #[test]
    fn test_metric_order() {
        let view = QuoteView::from_snapshot(&Snapshot::new("X", 1.0, 0.0, 0.0));
        let labels: Vec<&str> = view.metrics.iter().map(|m| m.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["Volume", "Market Cap", "P/E Ratio", "Dividend Yield", "52W High", "52W Low"]
        );
    }

    #[test]
    fn test_zero_change_is_up() {
        let view = QuoteView::from_snapshot(&Snapshot::new("JNJ", 165.7, 0.0, 0.0));
        assert_eq!(view.direction, Direction::Up);
        assert_eq!(view.change, "+0.00 (+0.00%)");
    }

    #[test]
    fn test_negative_change_is_down() {
        let view = QuoteView::from_snapshot(&Snapshot::new("TSLA", 245.6, -4.63, -1.85));
        assert_eq!(view.direction, Direction::Down);
        assert_eq!(view.metric("P/E Ratio"), Some(NOT_APPLICABLE));
        assert_eq!(view.metric("52W High"), Some(NOT_APPLICABLE));
    }
}
