mod commands;
mod output;
mod xml_output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use stockdash_lib::DashboardConfig;

use crate::output::OutputFormat;

const CONFIG_ENV: &str = "STOCKDASH_CONFIG";

#[derive(Parser)]
#[command(name = "stockdash")]
#[command(about = "Render stock dashboard views from backend payloads")]
struct Cli {
    /// Output format: table, json, csv, markdown, xml
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// Dashboard config file (TOML); falls back to $STOCKDASH_CONFIG
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price history with moving average and RSI
    Chart(commands::chart::ChartArgs),
    /// Volume bars classified against the average
    Volume(commands::volume::VolumeArgs),
    /// Quote header and key metrics
    Quote(commands::quote::QuoteArgs),
    /// Market summary with top gainers and losers
    Market(commands::market::MarketArgs),
    /// Side-by-side comparison of up to five stocks
    Compare(commands::compare::CompareArgs),
    /// Performance grouped by sector
    Sectors(commands::sectors::SectorsArgs),
    /// List the company directory
    Companies(commands::companies::CompaniesArgs),
}

fn load_config(path: Option<PathBuf>) -> Result<DashboardConfig> {
    let path = path.or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from));
    match path {
        Some(path) => Ok(DashboardConfig::load(&path)?),
        None => Ok(DashboardConfig::default()),
    }
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("stockdash=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let format = OutputFormat::from_name(&cli.output);
    let config = load_config(cli.config)?;

    match &cli.command {
        Commands::Chart(args) => commands::chart::run(args, &config, &format)?,
        Commands::Volume(args) => commands::volume::run(args, &format)?,
        Commands::Quote(args) => commands::quote::run(args, &format)?,
        Commands::Market(args) => commands::market::run(args, &config, &format)?,
        Commands::Compare(args) => commands::compare::run(args, &config, &format)?,
        Commands::Sectors(args) => commands::sectors::run(args, &format)?,
        Commands::Companies(args) => commands::companies::run(args, &format)?,
    }

    Ok(())
}
