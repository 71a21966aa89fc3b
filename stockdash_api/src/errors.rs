//! Error types for the wire layer.

/// Errors that can occur when interpreting payload values.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A history period token outside `1d|5d|1mo|3mo|6mo|1y|2y|5y`.
    #[error("unknown period '{0}'")]
    UnknownPeriod(String),
}
