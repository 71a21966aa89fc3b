//! Series assembly: parallel history arrays to indicator-augmented points.
//!
//! The backend delivers a history as three parallel arrays. They are
//! validated once, at the boundary, into a [`PriceHistory`] so nothing
//! downstream has to trust positional alignment. Assembly is stateless: each
//! call recomputes every indicator from scratch.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use stockdash_api::types::{HistoryResponse, RawDate, RawNumber};
use stockdash_api::Period;

use crate::error::DashboardError;
use crate::indicators::{
    compute_moving_average, compute_rsi, DEFAULT_MA_WINDOW, DEFAULT_RSI_WINDOW,
};

/// One observation of a validated history.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub close: f64,
    pub volume: u64,
}

/// A price point decorated with optional indicator values.
///
/// `None` means either the indicator is still warming up at this point or it
/// was not requested. Absent values are omitted from the serialized form.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct IndicatorPoint {
    pub date: NaiveDate,
    pub close: f64,
    pub volume: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moving_average: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rsi: Option<f64>,
}

impl From<PricePoint> for IndicatorPoint {
    fn from(p: PricePoint) -> Self {
        Self {
            date: p.date,
            close: p.close,
            volume: p.volume,
            moving_average: None,
            rsi: None,
        }
    }
}

/// Which indicators to compute, and over which windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesOptions {
    pub ma_window: usize,
    pub rsi_window: usize,
    pub include_moving_average: bool,
    pub include_rsi: bool,
}

impl Default for SeriesOptions {
    fn default() -> Self {
        Self {
            ma_window: DEFAULT_MA_WINDOW,
            rsi_window: DEFAULT_RSI_WINDOW,
            include_moving_average: true,
            include_rsi: false,
        }
    }
}

impl SeriesOptions {
    pub fn with_moving_average(mut self, window: usize) -> Self {
        self.include_moving_average = true;
        self.ma_window = window;
        self
    }

    pub fn without_moving_average(mut self) -> Self {
        self.include_moving_average = false;
        self
    }

    pub fn with_rsi(mut self, window: usize) -> Self {
        self.include_rsi = true;
        self.rsi_window = window;
        self
    }

    pub fn without_rsi(mut self) -> Self {
        self.include_rsi = false;
        self
    }
}

/// A validated history: equal-length, parsed, zero-filled volumes.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceHistory {
    points: Vec<PricePoint>,
}

impl PriceHistory {
    /// Validates parallel raw arrays into a single record sequence.
    ///
    /// Fails with [`DashboardError::ShapeMismatch`] when `dates` and `prices`
    /// differ in length and with [`DashboardError::Parse`] on the first entry
    /// that is not a date / finite price / non-negative integer volume.
    /// Missing volumes (absent array or a short one) read as 0; extra
    /// trailing volumes are ignored.
    pub fn from_raw(
        dates: &[RawDate],
        prices: &[RawNumber],
        volumes: Option<&[RawNumber]>,
    ) -> Result<Self, DashboardError> {
        if dates.len() != prices.len() {
            return Err(DashboardError::ShapeMismatch {
                dates: dates.len(),
                prices: prices.len(),
            });
        }

        let mut points = Vec::with_capacity(dates.len());
        for (index, (raw_date, raw_price)) in dates.iter().zip(prices).enumerate() {
            let date = raw_date.to_naive_date().ok_or_else(|| DashboardError::Parse {
                field: "dates",
                index,
                value: raw_date.to_string(),
            })?;
            let close = raw_price.as_f64().ok_or_else(|| DashboardError::Parse {
                field: "prices",
                index,
                value: raw_price.to_string(),
            })?;
            let volume = match volumes.and_then(|v| v.get(index)) {
                Some(raw_volume) => raw_volume.as_u64().ok_or_else(|| DashboardError::Parse {
                    field: "volumes",
                    index,
                    value: raw_volume.to_string(),
                })?,
                None => 0,
            };
            points.push(PricePoint {
                date,
                close,
                volume,
            });
        }

        if let Some(pos) = points.windows(2).position(|w| w[1].date < w[0].date) {
            tracing::warn!(
                "History dates decrease at index {} ({} after {}); keeping backend order",
                pos + 1,
                points[pos + 1].date,
                points[pos].date
            );
        }

        Ok(Self { points })
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Indicator-augmented history for one symbol and period.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Series {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,
    pub points: Vec<IndicatorPoint>,
}

impl Series {
    /// Runs the indicator engine over a validated history.
    pub fn from_price_history(history: &PriceHistory, options: &SeriesOptions) -> Self {
        let mut points: Vec<IndicatorPoint> =
            history.points().iter().copied().map(IndicatorPoint::from).collect();

        if options.include_moving_average {
            points = compute_moving_average(&points, options.ma_window);
        }
        if options.include_rsi {
            points = compute_rsi(&points, options.rsi_window);
        }

        tracing::debug!(
            "Assembled series of {} points (ma: {}, rsi: {})",
            points.len(),
            options.include_moving_average,
            options.include_rsi
        );

        Self {
            symbol: None,
            period: None,
            points,
        }
    }

    /// Validates and assembles a backend history payload.
    pub fn from_history(
        response: &HistoryResponse,
        options: &SeriesOptions,
    ) -> Result<Self, DashboardError> {
        let history = PriceHistory::from_raw(
            &response.dates,
            &response.prices,
            response.volumes.as_deref(),
        )?;
        let mut series = Self::from_price_history(&history, options);
        series.symbol = response.symbol.clone();
        series.period = response.parsed_period();
        Ok(series)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Most recent point, if any.
    pub fn latest(&self) -> Option<&IndicatorPoint> {
        self.points.last()
    }
}

/// Zips parallel arrays and decorates them with the requested indicators.
pub fn assemble(
    dates: &[RawDate],
    prices: &[RawNumber],
    volumes: Option<&[RawNumber]>,
    options: &SeriesOptions,
) -> Result<Series, DashboardError> {
    let history = PriceHistory::from_raw(dates, prices, volumes)?;
    Ok(Series::from_price_history(&history, options))
}
