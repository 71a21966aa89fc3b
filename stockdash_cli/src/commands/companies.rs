use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use stockdash_lib::companies::validate_companies;
use stockdash_lib::load_companies;
use stockdash_lib::types::Company;

use crate::output::{print_companies, OutputFormat};

#[derive(Args)]
pub struct CompaniesArgs {
    /// Company list payload; the built-in list is used when omitted
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Only list companies in this sector (case-insensitive)
    #[arg(long)]
    pub sector: Option<String>,
}

pub fn run(args: &CompaniesArgs, format: &OutputFormat) -> Result<()> {
    let mut companies = match &args.file {
        Some(path) => validate_companies(super::read_payload::<Vec<Company>>(path)?)?,
        None => load_companies()?,
    };
    if let Some(sector) = &args.sector {
        let wanted = sector.trim();
        companies.retain(|c| c.sector.eq_ignore_ascii_case(wanted));
    }
    print_companies(&companies, format)
}
