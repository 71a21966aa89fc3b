use stockdash_lib::comparison::Metric;
use stockdash_lib::format::NOT_APPLICABLE;
use stockdash_lib::types::{ComparisonResponse, HistoryResponse, MarketSnapshot, MarketStatus, Snapshot};
use stockdash_lib::volume::VolumeClass;
use stockdash_lib::{
    load_companies, rank_movers, sector_performance, summarize_market, volume_profile,
    ComparisonTable, MarketView, QuoteView, Series, SeriesOptions,
};

const HISTORY: &str = include_str!("../../stockdash_api/tests/fixtures/history.json");
const QUOTES: &str = include_str!("../../stockdash_api/tests/fixtures/quotes.json");
const QUOTE: &str = include_str!("../../stockdash_api/tests/fixtures/quote.json");
const MARKET: &str = include_str!("../../stockdash_api/tests/fixtures/market_summary.json");
const COMPARISON: &str = include_str!("../../stockdash_api/tests/fixtures/comparison.json");

fn history() -> HistoryResponse {
    serde_json::from_str(HISTORY).unwrap()
}

fn quotes() -> Vec<Snapshot> {
    serde_json::from_str(QUOTES).unwrap()
}

fn symbols(list: &[Snapshot]) -> Vec<&str> {
    list.iter().map(|s| s.symbol.as_str()).collect()
}

#[test]
fn chart_series_from_history() {
    let options = SeriesOptions::default().with_rsi(14);
    let series = Series::from_history(&history(), &options).unwrap();
    assert_eq!(series.len(), 25);
    assert_eq!(series.symbol.as_deref(), Some("AAPL"));

    for (i, point) in series.points.iter().enumerate() {
        assert_eq!(point.moving_average.is_some(), i >= 19, "ma at {}", i);
        assert_eq!(point.rsi.is_some(), i >= 14, "rsi at {}", i);
        if let Some(rsi) = point.rsi {
            assert!((0.0..=100.0).contains(&rsi));
        }
    }

    let closes: Vec<f64> = series.points.iter().map(|p| p.close).collect();
    let expected: f64 = closes[5..25].iter().sum::<f64>() / 20.0;
    let latest = series.latest().unwrap();
    assert!((latest.moving_average.unwrap() - expected).abs() < 1e-9);
}

#[test]
fn chart_series_without_indicators() {
    let options = SeriesOptions::default().without_moving_average();
    let series = Series::from_history(&history(), &options).unwrap();
    assert!(series.points.iter().all(|p| p.moving_average.is_none() && p.rsi.is_none()));
}

#[test]
fn volume_profile_from_history() {
    let series = Series::from_history(&history(), &SeriesOptions::default()).unwrap();
    let profile = volume_profile(&series.points);
    assert_eq!(profile.bars.len(), 25);
    assert_eq!(profile.bars[24].class, VolumeClass::Zero);
    assert_eq!(profile.count(VolumeClass::Zero), 1);
    assert!(profile.average > 0.0);
    assert!(profile.average_label.starts_with("Avg: "));
}

#[test]
fn market_view_keeps_backend_ranking() {
    let summary: MarketSnapshot = serde_json::from_str(MARKET).unwrap();
    let view = MarketView::from_snapshot(&summary);
    assert_eq!(view.total_market_cap, "$13.22T");
    assert_eq!(view.total_stocks, 9);
    assert_eq!(view.market_status, MarketStatus::Open);
    assert_eq!(view.top_gainers[0].symbol, "AMZN");
    assert_eq!(view.top_gainers[0].rank, 1);
    assert_eq!(view.top_losers[0].symbol, "TSLA");
}

#[test]
fn client_side_ranking_matches_backend() {
    let summary: MarketSnapshot = serde_json::from_str(MARKET).unwrap();
    let movers = rank_movers(&quotes(), 5);
    assert_eq!(symbols(&movers.gainers), symbols(&summary.top_gainers));
    assert_eq!(symbols(&movers.losers), symbols(&summary.top_losers));
}

#[test]
fn summarize_quotes() {
    let summary = summarize_market(&quotes(), MarketStatus::Open, 5);
    assert_eq!(summary.total_stocks, 9);
    assert_eq!(summary.total_market_cap, 13.22e12);
    assert!(!summary.top_gainers.iter().any(|s| s.symbol == "JNJ"));
    assert!(!summary.top_losers.iter().any(|s| s.symbol == "JNJ"));
}

#[test]
fn comparison_table_from_payload() {
    let response: ComparisonResponse = serde_json::from_str(COMPARISON).unwrap();
    let table = ComparisonTable::from_response(&response);
    assert_eq!(table.symbols, vec!["AAPL", "MSFT"]);
    assert_eq!(table.rows.len(), 7);
    assert_eq!(table.cell(Metric::PeRatio, 0), Some(NOT_APPLICABLE));
    assert_eq!(table.cell(Metric::PeRatio, 1), Some("35.20"));
    assert_eq!(table.cell(Metric::MarketCap, 1), Some("$2.82T"));
    assert_eq!(table.cell(Metric::DividendYield, 1), Some("0.80%"));
}

#[test]
fn quote_view_from_payload() {
    let snapshot: Snapshot = serde_json::from_str(QUOTE).unwrap();
    let view = QuoteView::from_snapshot(&snapshot);
    assert_eq!(view.symbol, "AAPL");
    assert_eq!(view.price, "$175.50");
    assert_eq!(view.metric("Market Cap"), Some("$2.75T"));
}

#[test]
fn sectors_from_seed_and_quotes() {
    let companies = load_companies().unwrap();
    let sectors = sector_performance(&companies, &quotes());
    let names: Vec<&str> = sectors.iter().map(|s| s.sector.as_str()).collect();
    assert_eq!(
        names,
        vec!["Communication Services", "Consumer Discretionary", "Healthcare", "Technology"]
    );

    let tech = sectors.iter().find(|s| s.sector == "Technology").unwrap();
    assert_eq!(tech.stock_count(), 5);
    assert_eq!(tech.avg_change_percent, 0.37);

    let discretionary = sectors.iter().find(|s| s.sector == "Consumer Discretionary").unwrap();
    assert_eq!(discretionary.avg_change_percent, -0.46);
    assert_eq!(discretionary.total_market_cap, 2.29e12);
}
