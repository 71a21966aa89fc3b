//! Analytics layer for the stock dashboard: indicators, series assembly,
//! ranking, formatting and the comparison table.
//!
//! Every transform here is a pure function over the wire types in
//! `stockdash_api`; nothing performs I/O except [`config::DashboardConfig::load`].

pub mod companies;
pub mod comparison;
pub mod config;
pub mod error;
pub mod format;
pub mod indicators;
pub mod market;
pub mod quote;
pub mod ranking;
pub mod sectors;
pub mod selection;
pub mod sequencing;
pub mod series;
pub mod validation;
pub mod volume;

pub use stockdash_api;
pub use stockdash_api::types;
pub use stockdash_api::Period;

pub use companies::{load_companies, CompanyListError};
pub use comparison::{build_comparison_table, ComparisonTable, Metric};
pub use config::{ConfigError, DashboardConfig};
pub use error::DashboardError;
pub use indicators::{compute_moving_average, compute_rsi};
pub use market::{summarize_market, MarketView};
pub use quote::QuoteView;
pub use ranking::rank_movers;
pub use sectors::{sector_performance, SectorSummary};
pub use selection::ComparisonSelection;
pub use sequencing::{RefreshGate, RequestSequencer, RequestTicket};
pub use series::{assemble, IndicatorPoint, PriceHistory, Series, SeriesOptions};
pub use volume::{volume_profile, VolumeProfile};
