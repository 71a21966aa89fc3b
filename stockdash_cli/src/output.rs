use anyhow::Result;
use serde::Serialize;
use stockdash_lib::comparison::ComparisonTable;
use stockdash_lib::format::{format_decimal, format_market_cap, format_signed_percent, format_volume};
use stockdash_lib::market::MoverRow;
use stockdash_lib::quote::QuoteView;
use stockdash_lib::sectors::SectorSummary;
use stockdash_lib::series::Series;
use stockdash_lib::types::Company;
use stockdash_lib::volume::VolumeProfile;
use tabled::builder::Builder;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::xml_output;

#[derive(Clone, Debug, PartialEq)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
    Xml,
}

impl OutputFormat {
    /// Unknown names fall back to the table view.
    pub fn from_name(name: &str) -> Self {
        match name {
            "json" => OutputFormat::Json,
            "csv" => OutputFormat::Csv,
            "markdown" | "md" => OutputFormat::Markdown,
            "xml" => OutputFormat::Xml,
            _ => OutputFormat::Table,
        }
    }
}

#[derive(Tabled, Serialize)]
pub(crate) struct SeriesRow {
    #[tabled(rename = "Date")]
    #[serde(rename = "Date")]
    date: String,
    #[tabled(rename = "Close")]
    #[serde(rename = "Close")]
    close: String,
    #[tabled(rename = "Volume")]
    #[serde(rename = "Volume")]
    volume: String,
    #[tabled(rename = "MA")]
    #[serde(rename = "MA")]
    moving_average: String,
    #[tabled(rename = "RSI")]
    #[serde(rename = "RSI")]
    rsi: String,
}

#[derive(Tabled, Serialize)]
pub(crate) struct VolumeRow {
    #[tabled(rename = "Date")]
    #[serde(rename = "Date")]
    date: String,
    #[tabled(rename = "Volume")]
    #[serde(rename = "Volume")]
    volume: String,
    #[tabled(rename = "Class")]
    #[serde(rename = "Class")]
    class: String,
}

#[derive(Tabled, Serialize)]
pub(crate) struct MetricRow {
    #[tabled(rename = "Metric")]
    #[serde(rename = "Metric")]
    metric: String,
    #[tabled(rename = "Value")]
    #[serde(rename = "Value")]
    value: String,
}

#[derive(Tabled, Serialize)]
pub(crate) struct MoverTableRow {
    #[tabled(rename = "List")]
    #[serde(rename = "List")]
    list: String,
    #[tabled(rename = "Rank")]
    #[serde(rename = "Rank")]
    rank: usize,
    #[tabled(rename = "Symbol")]
    #[serde(rename = "Symbol")]
    symbol: String,
    #[tabled(rename = "Price")]
    #[serde(rename = "Price")]
    price: String,
    #[tabled(rename = "Change")]
    #[serde(rename = "Change")]
    change: String,
    #[tabled(rename = "Change %")]
    #[serde(rename = "Change %")]
    change_percent: String,
}

#[derive(Tabled, Serialize)]
pub(crate) struct SectorRow {
    #[tabled(rename = "Sector")]
    #[serde(rename = "Sector")]
    sector: String,
    #[tabled(rename = "Stocks")]
    #[serde(rename = "Stocks")]
    stocks: usize,
    #[tabled(rename = "Market Cap")]
    #[serde(rename = "Market Cap")]
    total_market_cap: String,
    #[tabled(rename = "Avg Change")]
    #[serde(rename = "Avg Change")]
    avg_change: String,
}

#[derive(Tabled, Serialize)]
pub(crate) struct CompanyRow {
    #[tabled(rename = "Symbol")]
    #[serde(rename = "Symbol")]
    symbol: String,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Sector")]
    #[serde(rename = "Sector")]
    sector: String,
}

// -- Row builders --

fn optional_decimal(value: Option<f64>) -> String {
    value.map(format_decimal).unwrap_or_default()
}

pub(crate) fn build_series_rows(series: &Series) -> Vec<SeriesRow> {
    series
        .points
        .iter()
        .map(|p| SeriesRow {
            date: p.date.to_string(),
            close: format_decimal(p.close),
            volume: format_volume(p.volume as f64),
            moving_average: optional_decimal(p.moving_average),
            rsi: optional_decimal(p.rsi),
        })
        .collect()
}

pub(crate) fn build_volume_rows(profile: &VolumeProfile) -> Vec<VolumeRow> {
    profile
        .bars
        .iter()
        .map(|b| VolumeRow {
            date: b.date.to_string(),
            volume: b.label.clone(),
            class: b.class.to_string(),
        })
        .collect()
}

pub(crate) fn build_quote_rows(view: &QuoteView) -> Vec<MetricRow> {
    let mut rows = vec![
        MetricRow {
            metric: "Price".to_string(),
            value: view.price.clone(),
        },
        MetricRow {
            metric: "Change".to_string(),
            value: view.change.clone(),
        },
    ];
    rows.extend(view.metrics.iter().map(|m| MetricRow {
        metric: m.label.clone(),
        value: m.value.clone(),
    }));
    rows
}

pub(crate) fn build_mover_rows(gainers: &[MoverRow], losers: &[MoverRow]) -> Vec<MoverTableRow> {
    let tag = |list: &str, rows: &[MoverRow]| -> Vec<MoverTableRow> {
        rows.iter()
            .map(|r| MoverTableRow {
                list: list.to_string(),
                rank: r.rank,
                symbol: r.symbol.clone(),
                price: r.price.clone(),
                change: r.change.clone(),
                change_percent: r.change_percent.clone(),
            })
            .collect()
    };
    let mut rows = tag("gainer", gainers);
    rows.extend(tag("loser", losers));
    rows
}

pub(crate) fn build_sector_rows(sectors: &[SectorSummary]) -> Vec<SectorRow> {
    sectors
        .iter()
        .map(|s| SectorRow {
            sector: s.sector.clone(),
            stocks: s.stock_count(),
            total_market_cap: format_market_cap(s.total_market_cap),
            avg_change: format_signed_percent(s.avg_change_percent),
        })
        .collect()
}

pub(crate) fn build_company_rows(companies: &[Company]) -> Vec<CompanyRow> {
    companies
        .iter()
        .map(|c| CompanyRow {
            symbol: c.symbol.clone(),
            name: c.name.clone(),
            sector: c.sector.clone(),
        })
        .collect()
}

/// Header plus one record per metric: `Metric, AAPL, MSFT, ...`.
pub(crate) fn comparison_records(table: &ComparisonTable) -> Vec<Vec<String>> {
    let mut header = vec!["Metric".to_string()];
    header.extend(table.symbols.iter().cloned());
    let mut records = vec![header];
    for row in &table.rows {
        let mut record = vec![row.label.clone()];
        record.extend(row.values.iter().cloned());
        records.push(record);
    }
    records
}

// -- Generic writers --

pub fn print_table<R: Tabled>(rows: Vec<R>) {
    println!("{}", Table::new(rows));
}

pub fn print_markdown<R: Tabled>(rows: Vec<R>) {
    let mut table = Table::new(rows);
    table.with(Style::markdown());
    println!("{}", table);
}

pub fn print_csv<R: Serialize>(rows: Vec<R>) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

/// Writes `rows` in any of the row-oriented formats. JSON and XML print the
/// view model instead; callers handle those.
fn print_rows<R: Tabled + Serialize>(rows: Vec<R>, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Markdown => print_markdown(rows),
        OutputFormat::Csv => print_csv(rows)?,
        _ => print_table(rows),
    }
    Ok(())
}

// -- Per-view output --

pub fn print_series(series: &Series, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(series),
        OutputFormat::Xml => println!("{}", xml_output::series_to_xml(series)?),
        _ => print_rows(build_series_rows(series), format)?,
    }
    Ok(())
}

pub fn print_volume(profile: &VolumeProfile, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(profile),
        OutputFormat::Xml => println!("{}", xml_output::volume_to_xml(profile)?),
        OutputFormat::Csv => print_csv(build_volume_rows(profile))?,
        _ => {
            print_rows(build_volume_rows(profile), format)?;
            println!("{}", profile.average_label);
        }
    }
    Ok(())
}

pub fn print_quote(view: &QuoteView, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(view),
        OutputFormat::Xml => println!("{}", xml_output::quote_to_xml(view)?),
        OutputFormat::Csv => print_csv(build_quote_rows(view))?,
        _ => {
            println!("{} ({})", view.symbol, view.direction);
            print_rows(build_quote_rows(view), format)?;
        }
    }
    Ok(())
}

pub fn print_market(view: &stockdash_lib::MarketView, format: &OutputFormat) -> Result<()> {
    let rows = || build_mover_rows(&view.top_gainers, &view.top_losers);
    match format {
        OutputFormat::Json => print_json(view),
        OutputFormat::Xml => println!("{}", xml_output::market_to_xml(view)?),
        OutputFormat::Csv => print_csv(rows())?,
        _ => {
            println!(
                "Market {} | {} stocks | total cap {}",
                view.market_status, view.total_stocks, view.total_market_cap
            );
            print_rows(rows(), format)?;
        }
    }
    Ok(())
}

pub fn print_comparison(table: &ComparisonTable, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(table),
        OutputFormat::Xml => println!("{}", xml_output::comparison_to_xml(table)?),
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(std::io::stdout());
            for record in comparison_records(table) {
                wtr.write_record(&record)?;
            }
            wtr.flush()?;
        }
        _ => {
            let mut builder = Builder::default();
            for record in comparison_records(table) {
                builder.push_record(record);
            }
            let mut rendered = builder.build();
            if *format == OutputFormat::Markdown {
                rendered.with(Style::markdown());
            }
            if let Some(date) = table.comparison_date {
                println!("As of {}", date);
            }
            println!("{}", rendered);
        }
    }
    Ok(())
}

pub fn print_sectors(sectors: &[SectorSummary], format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(&sectors),
        OutputFormat::Xml => println!("{}", xml_output::sectors_to_xml(sectors)?),
        _ => print_rows(build_sector_rows(sectors), format)?,
    }
    Ok(())
}

pub fn print_companies(companies: &[Company], format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(&companies),
        OutputFormat::Xml => println!("{}", xml_output::companies_to_xml(companies)?),
        _ => print_rows(build_company_rows(companies), format)?,
    }
    Ok(())
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
