use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Entry of the `/companies` list.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Company {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    pub symbol: String,

    pub name: String,

    pub sector: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market_cap: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_price: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<NaiveDateTime>,
}
