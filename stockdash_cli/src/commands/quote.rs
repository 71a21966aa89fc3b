use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use stockdash_lib::types::Snapshot;
use stockdash_lib::QuoteView;

use crate::output::{print_quote, OutputFormat};

#[derive(Args)]
pub struct QuoteArgs {
    /// Quote payload (`-` for stdin)
    pub file: PathBuf,
}

pub fn run(args: &QuoteArgs, format: &OutputFormat) -> Result<()> {
    let snapshot: Snapshot = super::read_payload(&args.file)?;
    print_quote(&QuoteView::from_snapshot(&snapshot), format)
}
