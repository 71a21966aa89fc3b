use chrono::NaiveDate;
use stockdash_api::types::{
    ComparisonResponse, HistoryResponse, MarketSnapshot, MarketStatus, RawNumber, Snapshot,
};
use stockdash_api::Period;

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[test]
fn deserialize_history() {
    let json = load_fixture("history.json");
    let resp: HistoryResponse = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.symbol.as_deref(), Some("AAPL"));
    assert_eq!(resp.dates.len(), 25);
    assert_eq!(resp.prices.len(), 25);
    assert_eq!(resp.volumes.as_ref().map(|v| v.len()), Some(25));
    assert_eq!(resp.parsed_period(), Some(Period::OneMonth));
    assert_eq!(
        resp.dates[0].to_naive_date(),
        NaiveDate::from_ymd_opt(2024, 2, 1)
    );
    assert_eq!(resp.prices[0], RawNumber::Number(182.15));
}

#[test]
fn deserialize_history_without_volumes() {
    let json = r#"{"dates": ["2024-01-02", "2024-01-03"], "prices": [185.64, "184.25"]}"#;
    let resp: HistoryResponse = serde_json::from_str(json).unwrap();
    assert!(resp.volumes.is_none());
    assert!(resp.symbol.is_none());
    assert_eq!(resp.prices[1].as_f64(), Some(184.25));
}

#[test]
fn deserialize_quote() {
    let json = load_fixture("quote.json");
    let quote: Snapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(quote.symbol, "AAPL");
    assert_eq!(quote.current_price, 175.5);
    assert_eq!(quote.volume, 50_000_000);
    assert_eq!(quote.market_cap, 2_750_000_000_000.0);
    assert_eq!(quote.pe_ratio, Some(28.5));
    assert_eq!(quote.dividend_yield, Some(0.005));
    assert_eq!(quote.high_52_week, Some(198.23));
    let updated = quote.last_updated.expect("quote carries a timestamp");
    assert_eq!(updated.date(), NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
}

#[test]
fn deserialize_quote_list() {
    let json = load_fixture("quotes.json");
    let quotes: Vec<Snapshot> = serde_json::from_str(&json).unwrap();
    assert_eq!(quotes.len(), 9);
    let dis = quotes.iter().find(|q| q.symbol == "DIS").unwrap();
    assert!(dis.pe_ratio.is_none());
    assert!(dis.dividend_yield.is_none());
    assert!(dis.last_updated.is_none());
}

#[test]
fn deserialize_market_summary() {
    let json = load_fixture("market_summary.json");
    let summary: MarketSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(summary.total_stocks, 9);
    assert_eq!(summary.total_market_cap, 13_220_000_000_000.0);
    assert_eq!(summary.market_status, MarketStatus::Open);
    assert_eq!(summary.top_gainers.len(), 5);
    assert_eq!(summary.top_losers.len(), 3);
    assert_eq!(summary.top_gainers[0].symbol, "AMZN");
    assert_eq!(summary.top_losers[0].symbol, "TSLA");
    // Summary rows omit the valuation metrics.
    assert!(summary.top_gainers[0].pe_ratio.is_none());
}

#[test]
fn unknown_market_status_falls_back() {
    let json = r#"{
        "total_market_cap": 0,
        "total_stocks": 0,
        "market_status": "pre-market",
        "top_gainers": [],
        "top_losers": []
    }"#;
    let summary: MarketSnapshot = serde_json::from_str(json).unwrap();
    assert_eq!(summary.market_status, MarketStatus::Unknown);
}

#[test]
fn deserialize_comparison() {
    let json = load_fixture("comparison.json");
    let resp: ComparisonResponse = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.stocks.len(), 2);
    assert_eq!(resp.stocks[0].symbol, "AAPL");
    assert!(resp.stocks[0].pe_ratio.is_none());
    assert_eq!(resp.stocks[1].pe_ratio, Some(35.2));
    assert_eq!(
        resp.comparison_date,
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    );
}

#[test]
fn snapshot_skips_absent_optionals_when_serialized() {
    let snapshot = Snapshot::new("AAPL", 175.5, 1.3, 0.75);
    let value = serde_json::to_value(&snapshot).unwrap();
    let obj = value.as_object().unwrap();
    assert!(!obj.contains_key("pe_ratio"));
    assert!(!obj.contains_key("last_updated"));
    assert_eq!(obj["symbol"], "AAPL");
}

#[test]
fn deserialize_malformed_json_returns_error() {
    let bad_json = r#"{"dates": not valid json}"#;
    let result = serde_json::from_str::<HistoryResponse>(bad_json);
    assert!(result.is_err());
}

#[test]
fn deserialize_missing_required_fields_returns_error() {
    let json = r#"{"symbol": "AAPL", "current_price": 175.5}"#;
    let result = serde_json::from_str::<Snapshot>(json);
    assert!(result.is_err());
}
