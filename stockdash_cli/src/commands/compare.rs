use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Args;
use stockdash_lib::types::{ComparisonResponse, Snapshot};
use stockdash_lib::validation;
use stockdash_lib::{build_comparison_table, ComparisonSelection, ComparisonTable, DashboardConfig};

use crate::output::{print_comparison, OutputFormat};

#[derive(Args)]
pub struct CompareArgs {
    /// Comparison payload (`-` for stdin)
    #[arg(required_unless_present = "quotes", conflicts_with = "quotes")]
    pub file: Option<PathBuf>,

    /// Build the comparison from a quote list instead
    #[arg(long)]
    pub quotes: Option<PathBuf>,

    /// Symbols to compare, comma-separated (config default AAPL,MSFT)
    #[arg(long, requires = "quotes")]
    pub symbols: Option<String>,
}

/// Picks the selected symbols out of `quotes`, in selection order.
fn select(selection: &ComparisonSelection, quotes: &[Snapshot]) -> Result<Vec<Snapshot>> {
    let mut picked = Vec::with_capacity(selection.len());
    for symbol in selection.symbols() {
        match quotes.iter().find(|q| &q.symbol == symbol) {
            Some(quote) => picked.push(quote.clone()),
            None => bail!("no quote for {} in the input", symbol),
        }
    }
    Ok(picked)
}

pub fn run(args: &CompareArgs, config: &DashboardConfig, format: &OutputFormat) -> Result<()> {
    let table = match (&args.file, &args.quotes) {
        (Some(file), _) => {
            let response: ComparisonResponse = super::read_payload(file)?;
            ComparisonTable::from_response(&response)
        }
        (None, Some(quotes)) => {
            let selection = match &args.symbols {
                Some(list) => ComparisonSelection::with_max(
                    &validation::parse_symbol_list(list)?,
                    config.max_compare,
                )?,
                None => config.comparison_selection()?,
            };
            tracing::debug!("Comparing {}", selection.query());
            let quotes: Vec<Snapshot> = super::read_payload(quotes)?;
            build_comparison_table(&select(&selection, &quotes)?)
        }
        (None, None) => bail!("either a comparison payload or --quotes is required"),
    };
    print_comparison(&table, format)
}
