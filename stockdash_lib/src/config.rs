//! Dashboard settings loaded from TOML.
//!
//! Every key is optional; a missing key keeps the dashboard default.
//!
//! ```toml
//! ma_window = 20
//! rsi_window = 14
//! show_moving_average = true
//! show_rsi = false
//! refresh_interval_secs = 30
//! top_movers = 5
//! max_compare = 5
//! default_compare = ["AAPL", "MSFT"]
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

use crate::indicators::{DEFAULT_MA_WINDOW, DEFAULT_RSI_WINDOW};
use crate::ranking::DEFAULT_TOP_MOVERS;
use crate::selection::{ComparisonSelection, DEFAULT_COMPARE};
use crate::series::SeriesOptions;
use crate::validation::{validate_symbol, validate_window, MAX_COMPARE};

pub const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 30;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("TOML parse error: {0}")]
    TomlParse(String),
    #[error("Invalid config value: {0}")]
    Invalid(String),
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct DashboardConfig {
    pub ma_window: usize,
    pub rsi_window: usize,
    pub show_moving_average: bool,
    pub show_rsi: bool,
    pub refresh_interval_secs: u64,
    pub top_movers: usize,
    pub max_compare: usize,
    pub default_compare: Vec<String>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            ma_window: DEFAULT_MA_WINDOW,
            rsi_window: DEFAULT_RSI_WINDOW,
            show_moving_average: true,
            show_rsi: false,
            refresh_interval_secs: DEFAULT_REFRESH_INTERVAL_SECS,
            top_movers: DEFAULT_TOP_MOVERS,
            max_compare: MAX_COMPARE,
            default_compare: DEFAULT_COMPARE.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl DashboardConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: DashboardConfig =
            toml::from_str(content).map_err(|e| ConfigError::TomlParse(e.to_string()))?;
        config.validate()
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Checks value ranges and normalizes `default_compare` to upper case.
    pub fn validate(mut self) -> Result<Self, ConfigError> {
        validate_window(self.ma_window)
            .map_err(|e| ConfigError::Invalid(format!("ma_window: {}", e)))?;
        validate_window(self.rsi_window)
            .map_err(|e| ConfigError::Invalid(format!("rsi_window: {}", e)))?;
        if self.refresh_interval_secs == 0 {
            return Err(ConfigError::Invalid(
                "refresh_interval_secs must be >= 1".to_string(),
            ));
        }
        if self.top_movers == 0 {
            return Err(ConfigError::Invalid("top_movers must be >= 1".to_string()));
        }
        if !(1..=MAX_COMPARE).contains(&self.max_compare) {
            return Err(ConfigError::Invalid(format!(
                "max_compare must be between 1 and {}",
                MAX_COMPARE
            )));
        }
        if self.default_compare.is_empty() || self.default_compare.len() > self.max_compare {
            return Err(ConfigError::Invalid(format!(
                "default_compare must hold between 1 and {} symbols",
                self.max_compare
            )));
        }
        self.default_compare = self
            .default_compare
            .iter()
            .map(|s| validate_symbol(s).map_err(|e| ConfigError::Invalid(format!("default_compare: {}", e))))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(self)
    }

    pub fn series_options(&self) -> SeriesOptions {
        let options = SeriesOptions::default();
        let options = if self.show_moving_average {
            options.with_moving_average(self.ma_window)
        } else {
            options.without_moving_average()
        };
        if self.show_rsi {
            options.with_rsi(self.rsi_window)
        } else {
            options.without_rsi()
        }
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs)
    }

    /// The starting comparison selection.
    pub fn comparison_selection(&self) -> Result<ComparisonSelection, ConfigError> {
        ComparisonSelection::with_max(&self.default_compare, self.max_compare)
            .map_err(|e| ConfigError::Invalid(e.to_string()))
    }
}
