use super::*;
use stockdash_lib::types::{ComparisonResponse, HistoryResponse, MarketSnapshot, Snapshot};
use stockdash_lib::{load_companies, sector_performance, volume_profile, MarketView, SeriesOptions};

fn load_history_fixture() -> HistoryResponse {
    let json_str = include_str!("../../stockdash_api/tests/fixtures/history.json");
    serde_json::from_str(json_str).unwrap()
}

fn load_quotes_fixture() -> Vec<Snapshot> {
    let json_str = include_str!("../../stockdash_api/tests/fixtures/quotes.json");
    serde_json::from_str(json_str).unwrap()
}

fn load_quote_fixture() -> Snapshot {
    let json_str = include_str!("../../stockdash_api/tests/fixtures/quote.json");
    serde_json::from_str(json_str).unwrap()
}

fn load_market_fixture() -> MarketSnapshot {
    let json_str = include_str!("../../stockdash_api/tests/fixtures/market_summary.json");
    serde_json::from_str(json_str).unwrap()
}

fn load_comparison_fixture() -> ComparisonResponse {
    let json_str = include_str!("../../stockdash_api/tests/fixtures/comparison.json");
    serde_json::from_str(json_str).unwrap()
}

// -- format selection --

#[test]
fn test_output_format_names() {
    assert_eq!(OutputFormat::from_name("json"), OutputFormat::Json);
    assert_eq!(OutputFormat::from_name("csv"), OutputFormat::Csv);
    assert_eq!(OutputFormat::from_name("markdown"), OutputFormat::Markdown);
    assert_eq!(OutputFormat::from_name("md"), OutputFormat::Markdown);
    assert_eq!(OutputFormat::from_name("xml"), OutputFormat::Xml);
    assert_eq!(OutputFormat::from_name("table"), OutputFormat::Table);
    assert_eq!(OutputFormat::from_name("bogus"), OutputFormat::Table);
}

// -- row builders --

#[test]
fn test_series_rows() {
    let options = SeriesOptions::default().with_rsi(14);
    let series = Series::from_history(&load_history_fixture(), &options).unwrap();
    let rows = build_series_rows(&series);
    assert_eq!(rows.len(), 25);
    assert_eq!(rows[0].date, "2024-02-01");
    assert_eq!(rows[0].close, "182.15");
    assert_eq!(rows[0].moving_average, "");
    assert_eq!(rows[0].rsi, "");
    assert!(!rows[24].moving_average.is_empty());
    assert!(!rows[24].rsi.is_empty());
    assert_eq!(rows[24].volume, "0");
}

#[test]
fn test_volume_rows() {
    let series = Series::from_history(&load_history_fixture(), &SeriesOptions::default()).unwrap();
    let rows = build_volume_rows(&volume_profile(&series.points));
    assert_eq!(rows.len(), 25);
    assert_eq!(rows[24].class, "zero");
    assert!(rows[0].volume.ends_with('M'));
}

#[test]
fn test_quote_rows() {
    let view = QuoteView::from_snapshot(&load_quote_fixture());
    let rows = build_quote_rows(&view);
    assert_eq!(rows.len(), 8);
    assert_eq!(rows[0].metric, "Price");
    assert_eq!(rows[0].value, "$175.50");
    assert_eq!(rows[1].metric, "Change");
    assert_eq!(rows[3].metric, "Market Cap");
    assert_eq!(rows[3].value, "$2.75T");
}

#[test]
fn test_mover_rows() {
    let view = MarketView::from_snapshot(&load_market_fixture());
    let rows = build_mover_rows(&view.top_gainers, &view.top_losers);
    assert_eq!(rows.len(), view.top_gainers.len() + view.top_losers.len());
    assert_eq!(rows[0].list, "gainer");
    assert_eq!(rows[0].rank, 1);
    assert_eq!(rows[0].symbol, "AMZN");
    let first_loser = rows.iter().find(|r| r.list == "loser").unwrap();
    assert_eq!(first_loser.symbol, "TSLA");
    assert_eq!(first_loser.change_percent, "-1.85%");
}

#[test]
fn test_sector_rows() {
    let companies = load_companies().unwrap();
    let sectors = sector_performance(&companies, &load_quotes_fixture());
    let rows = build_sector_rows(&sectors);
    let tech = rows.iter().find(|r| r.sector == "Technology").unwrap();
    assert_eq!(tech.stocks, 5);
    assert_eq!(tech.avg_change, "+0.37%");
}

#[test]
fn test_company_rows() {
    let rows = build_company_rows(&load_companies().unwrap());
    assert_eq!(rows.len(), 15);
    assert_eq!(rows[0].symbol, "AAPL");
    assert_eq!(rows[0].sector, "Technology");
}

#[test]
fn test_comparison_records() {
    let table = ComparisonTable::from_response(&load_comparison_fixture());
    let records = comparison_records(&table);
    assert_eq!(records.len(), 8);
    assert_eq!(records[0], vec!["Metric", "AAPL", "MSFT"]);
    let pe = records.iter().find(|r| r[0] == "P/E Ratio").unwrap();
    assert_eq!(pe[1], "N/A");
    assert_eq!(pe[2], "35.20");
}

// -- table rendering --

#[test]
fn test_markdown_table_has_header() {
    let rows = build_company_rows(&load_companies().unwrap());
    let mut table = Table::new(rows);
    table.with(Style::markdown());
    let rendered = table.to_string();
    assert!(rendered.starts_with("| Symbol"));
    assert!(rendered.contains("| AAPL"));
}

#[test]
fn test_csv_serializes_renamed_headers() {
    let rows = build_sector_rows(&sector_performance(
        &load_companies().unwrap(),
        &load_quotes_fixture(),
    ));
    let mut wtr = csv::Writer::from_writer(Vec::new());
    for row in rows {
        wtr.serialize(row).unwrap();
    }
    let text = String::from_utf8(wtr.into_inner().unwrap()).unwrap();
    assert!(text.starts_with("Sector,Stocks,Market Cap,Avg Change\n"));
    assert!(text.contains("Technology,5,"));
}
