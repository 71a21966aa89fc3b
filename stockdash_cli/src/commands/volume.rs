use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use stockdash_lib::types::HistoryResponse;
use stockdash_lib::{assemble, volume_profile, SeriesOptions};

use crate::output::{print_volume, OutputFormat};

#[derive(Args)]
pub struct VolumeArgs {
    /// History payload (`-` for stdin)
    pub file: PathBuf,
}

pub fn run(args: &VolumeArgs, format: &OutputFormat) -> Result<()> {
    let response: HistoryResponse = super::read_payload(&args.file)?;
    let options = SeriesOptions::default().without_moving_average().without_rsi();
    let series = assemble(
        &response.dates,
        &response.prices,
        response.volumes.as_deref(),
        &options,
    )?;
    print_volume(&volume_profile(&series.points), format)
}
