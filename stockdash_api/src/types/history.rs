//! Price history payload returned by `/stocks/{symbol}/history`.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::raw::{RawDate, RawNumber};
use crate::Error;

/// Look-back period for a history request.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Period {
    #[serde(rename = "1d")]
    OneDay,
    #[serde(rename = "5d")]
    FiveDays,
    #[default]
    #[serde(rename = "1mo")]
    OneMonth,
    #[serde(rename = "3mo")]
    ThreeMonths,
    #[serde(rename = "6mo")]
    SixMonths,
    #[serde(rename = "1y")]
    OneYear,
    #[serde(rename = "2y")]
    TwoYears,
    #[serde(rename = "5y")]
    FiveYears,
}

impl Period {
    pub const ALL: [Period; 8] = [
        Period::OneDay,
        Period::FiveDays,
        Period::OneMonth,
        Period::ThreeMonths,
        Period::SixMonths,
        Period::OneYear,
        Period::TwoYears,
        Period::FiveYears,
    ];

    /// The token used on the wire and in the period selector.
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::OneDay => "1d",
            Period::FiveDays => "5d",
            Period::OneMonth => "1mo",
            Period::ThreeMonths => "3mo",
            Period::SixMonths => "6mo",
            Period::OneYear => "1y",
            Period::TwoYears => "2y",
            Period::FiveYears => "5y",
        }
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Period {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_ascii_lowercase();
        Period::ALL
            .iter()
            .copied()
            .find(|p| p.as_str() == token)
            .ok_or_else(|| Error::UnknownPeriod(s.to_string()))
    }
}

/// Parallel date/price/volume arrays for one symbol.
///
/// `dates` and `prices` are expected to have equal length. `volumes` may be
/// missing entirely or shorter than `dates`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct HistoryResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,

    pub dates: Vec<RawDate>,

    pub prices: Vec<RawNumber>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volumes: Option<Vec<RawNumber>>,

    /// Period token as echoed by the backend. Kept as a string because the
    /// backend accepts a few more tokens (`10y`, `ytd`, `max`) than the
    /// dashboard offers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
}

impl HistoryResponse {
    /// The echoed period, if it is one the dashboard knows.
    pub fn parsed_period(&self) -> Option<Period> {
        self.period.as_deref().and_then(|p| p.parse().ok())
    }
}
