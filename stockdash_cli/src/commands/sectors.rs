use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use stockdash_lib::companies::validate_companies;
use stockdash_lib::types::{Company, Snapshot};
use stockdash_lib::{load_companies, sector_performance};

use crate::output::{print_sectors, OutputFormat};

#[derive(Args)]
pub struct SectorsArgs {
    /// Quote list payload (`-` for stdin)
    pub quotes: PathBuf,

    /// Company list payload; the built-in list is used when omitted
    #[arg(long)]
    pub companies: Option<PathBuf>,
}

pub fn run(args: &SectorsArgs, format: &OutputFormat) -> Result<()> {
    let companies = match &args.companies {
        Some(path) => validate_companies(super::read_payload::<Vec<Company>>(path)?)?,
        None => load_companies()?,
    };
    let quotes: Vec<Snapshot> = super::read_payload(&args.quotes)?;
    print_sectors(&sector_performance(&companies, &quotes), format)
}
