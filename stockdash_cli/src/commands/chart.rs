use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use stockdash_lib::format::format_currency;
use stockdash_lib::types::HistoryResponse;
use stockdash_lib::validation;
use stockdash_lib::{DashboardConfig, Series};

use crate::output::{print_series, OutputFormat};

#[derive(Args)]
pub struct ChartArgs {
    /// History payload (`-` for stdin)
    pub file: PathBuf,

    /// Moving-average window (defaults to the config value, 20)
    #[arg(long)]
    pub ma_window: Option<usize>,

    /// Hide the moving average
    #[arg(long, conflicts_with = "ma_window")]
    pub no_ma: bool,

    /// Show RSI over this window (config default 14 when given bare)
    #[arg(long, num_args = 0..=1)]
    pub rsi: Option<Option<usize>>,

    /// Label the series with this period when the payload has none
    #[arg(long)]
    pub period: Option<String>,
}

/// `--rsi` alone picks the configured window; an explicit value is validated.
fn rsi_window(flag: Option<Option<usize>>, config: &DashboardConfig) -> Result<Option<usize>> {
    match flag {
        None => Ok(None),
        Some(None) => Ok(Some(config.rsi_window)),
        Some(Some(window)) => Ok(Some(validation::validate_window(window)?)),
    }
}

pub fn run(args: &ChartArgs, config: &DashboardConfig, format: &OutputFormat) -> Result<()> {
    let mut options = config.series_options();
    if args.no_ma {
        options = options.without_moving_average();
    } else if let Some(window) = args.ma_window {
        options = options.with_moving_average(validation::validate_window(window)?);
    }
    if let Some(window) = rsi_window(args.rsi, config)? {
        options = options.with_rsi(window);
    }

    let response: HistoryResponse = super::read_payload(&args.file)?;
    let mut series = Series::from_history(&response, &options)?;
    if series.period.is_none() {
        if let Some(period) = &args.period {
            series.period = Some(validation::validate_period(period)?);
        }
    }

    if matches!(format, OutputFormat::Table | OutputFormat::Markdown) {
        if let Some(latest) = series.latest() {
            println!(
                "{} {} | last close {}",
                series.symbol.as_deref().unwrap_or("-"),
                series.period.map(|p| p.to_string()).unwrap_or_default(),
                format_currency(latest.close)
            );
        }
    }
    print_series(&series, format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct ChartCli {
        #[command(flatten)]
        args: ChartArgs,
    }

    fn parse(argv: &[&str]) -> ChartArgs {
        let mut full = vec!["chart"];
        full.extend_from_slice(argv);
        ChartCli::try_parse_from(full).unwrap().args
    }

    #[test]
    fn test_rsi_flag_absent() {
        let args = parse(&["history.json"]);
        assert_eq!(args.rsi, None);
        assert_eq!(rsi_window(args.rsi, &DashboardConfig::default()).unwrap(), None);
    }

    #[test]
    fn test_bare_rsi_uses_config_window() {
        let args = parse(&["history.json", "--rsi"]);
        assert_eq!(args.rsi, Some(None));
        let config = DashboardConfig {
            rsi_window: 9,
            ..DashboardConfig::default()
        };
        assert_eq!(rsi_window(args.rsi, &config).unwrap(), Some(9));
    }

    #[test]
    fn test_explicit_rsi_window() {
        let args = parse(&["history.json", "--rsi", "21"]);
        assert_eq!(rsi_window(args.rsi, &DashboardConfig::default()).unwrap(), Some(21));
    }

    #[test]
    fn test_explicit_zero_rsi_rejected() {
        let args = parse(&["history.json", "--rsi", "0"]);
        assert_eq!(args.rsi, Some(Some(0)));
        assert!(rsi_window(args.rsi, &DashboardConfig::default()).is_err());
    }
}
