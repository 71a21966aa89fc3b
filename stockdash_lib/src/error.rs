//! Error types for the analytics layer.

use std::fmt;

/// Errors raised by the analytics transforms.
///
/// Every transform either returns a fully-formed result or fails with one of
/// these before producing any output. Short series (warm-up) and the RSI
/// zero-loss case are not errors: they show up as absent indicator values and
/// as an RSI of 100 respectively.
#[derive(Debug)]
pub enum DashboardError {
    /// Parallel history arrays have different lengths.
    ShapeMismatch { dates: usize, prices: usize },
    /// A history entry could not be read as the expected type.
    Parse {
        field: &'static str,
        index: usize,
        value: String,
    },
    /// User-provided input failed validation.
    InvalidInput(String),
    /// JSON serialization or deserialization failed.
    Serialization(serde_json::Error),
}

impl fmt::Display for DashboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShapeMismatch { dates, prices } => write!(
                f,
                "Shape mismatch: {} dates but {} prices",
                dates, prices
            ),
            Self::Parse {
                field,
                index,
                value,
            } => write!(f, "Parse error: {}[{}] = {} is not valid", field, index, value),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::Serialization(e) => write!(f, "Serialization error: {}", e),
        }
    }
}

impl std::error::Error for DashboardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Serialization(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for DashboardError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e)
    }
}

impl From<stockdash_api::Error> for DashboardError {
    fn from(e: stockdash_api::Error) -> Self {
        Self::InvalidInput(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_mismatch_message_names_both_lengths() {
        let err = DashboardError::ShapeMismatch {
            dates: 5,
            prices: 4,
        };
        assert_eq!(err.to_string(), "Shape mismatch: 5 dates but 4 prices");
    }

    #[test]
    fn parse_message_points_at_entry() {
        let err = DashboardError::Parse {
            field: "prices",
            index: 3,
            value: "\"n/a\"".to_string(),
        };
        assert_eq!(err.to_string(), "Parse error: prices[3] = \"n/a\" is not valid");
    }

    #[test]
    fn serialization_error_exposes_source() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: DashboardError = json_err.into();
        assert!(std::error::Error::source(&err).is_some());
    }
}
