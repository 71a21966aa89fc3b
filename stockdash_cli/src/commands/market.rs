use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::time::Instant;

use anyhow::{bail, Result};
use clap::{Args, ValueEnum};
use stockdash_lib::types::{MarketSnapshot, MarketStatus, Snapshot};
use stockdash_lib::{summarize_market, DashboardConfig, MarketView, RefreshGate};

use crate::output::{print_market, OutputFormat};

#[derive(Clone, Copy, ValueEnum)]
pub enum StatusArg {
    Open,
    Closed,
    Unknown,
}

impl From<StatusArg> for MarketStatus {
    fn from(value: StatusArg) -> Self {
        match value {
            StatusArg::Open => MarketStatus::Open,
            StatusArg::Closed => MarketStatus::Closed,
            StatusArg::Unknown => MarketStatus::Unknown,
        }
    }
}

#[derive(Args)]
pub struct MarketArgs {
    /// Market summary payload, or a quote list with --rank (`-` for stdin)
    pub file: PathBuf,

    /// Treat the input as a list of quotes and rank movers locally
    #[arg(long)]
    pub rank: bool,

    /// Movers per list when ranking locally (config default 5)
    #[arg(long, requires = "rank")]
    pub limit: Option<usize>,

    /// Market status to report when ranking locally
    #[arg(long, value_enum, default_value = "unknown")]
    pub status: StatusArg,

    /// Re-read the input every refresh interval
    #[arg(long)]
    pub watch: bool,

    /// Stop watching after this many refreshes
    #[arg(long, requires = "watch")]
    pub max_refreshes: Option<usize>,
}

fn load_view(args: &MarketArgs, config: &DashboardConfig) -> Result<MarketView> {
    let summary = if args.rank {
        let quotes: Vec<Snapshot> = super::read_payload(&args.file)?;
        let limit = args.limit.unwrap_or(config.top_movers).max(1);
        summarize_market(&quotes, args.status.into(), limit)
    } else {
        super::read_payload::<MarketSnapshot>(&args.file)?
    };
    Ok(MarketView::from_snapshot(&summary))
}

/// Watch mode re-reads its input, which stdin cannot provide.
fn check_watch_source(path: &Path) -> Result<()> {
    if path.as_os_str() == "-" {
        bail!("--watch needs a file path; stdin can only be read once");
    }
    Ok(())
}

pub fn run(args: &MarketArgs, config: &DashboardConfig, format: &OutputFormat) -> Result<()> {
    if !args.watch {
        return print_market(&load_view(args, config)?, format);
    }
    check_watch_source(&args.file)?;
    watch(args, config, |view| print_market(view, format))
}

/// Refreshes on a worker thread every interval. A tick that finds the
/// previous refresh still running is skipped.
fn watch<F>(args: &MarketArgs, config: &DashboardConfig, mut render: F) -> Result<()>
where
    F: FnMut(&MarketView) -> Result<()>,
{
    let gate = RefreshGate::new();
    let interval = config.refresh_interval();
    let (tx, rx) = mpsc::channel::<Result<MarketView>>();
    let mut completed = 0usize;

    std::thread::scope(|scope| -> Result<()> {
        loop {
            match gate.try_begin() {
                Some(permit) => {
                    let sender = tx.clone();
                    scope.spawn(move || {
                        let view = load_view(args, config);
                        drop(permit);
                        let _ = sender.send(view);
                    });
                }
                None => tracing::debug!("Refresh still in flight, skipping tick"),
            }

            let deadline = Instant::now() + interval;
            while let Some(remaining) = deadline.checked_duration_since(Instant::now()) {
                match rx.recv_timeout(remaining) {
                    Ok(view) => {
                        render(&view?)?;
                        completed += 1;
                        if args.max_refreshes.is_some_and(|max| completed >= max) {
                            return Ok(());
                        }
                    }
                    Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => break,
                }
            }
        }
    })
}
