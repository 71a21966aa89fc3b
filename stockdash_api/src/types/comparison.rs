use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::quote::Snapshot;

/// Payload returned by `/compare/{symbols}`.
///
/// `stocks` follows the order of the requested symbols.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ComparisonResponse {
    pub stocks: Vec<Snapshot>,
    pub comparison_date: NaiveDate,
}
