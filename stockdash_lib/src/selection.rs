//! Symbols picked for the comparison view.

use serde::Serialize;

use crate::error::DashboardError;
use crate::validation::{validate_symbol, MAX_COMPARE};

/// Selection shown when nothing has been picked yet.
pub const DEFAULT_COMPARE: [&str; 2] = ["AAPL", "MSFT"];

/// Ordered symbol selection holding between one and `max` entries.
///
/// Duplicates are allowed; each occupies its own column.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ComparisonSelection {
    symbols: Vec<String>,
    #[serde(skip)]
    max: usize,
}

impl ComparisonSelection {
    /// Builds a selection capped at [`MAX_COMPARE`].
    pub fn new<S: AsRef<str>>(symbols: &[S]) -> Result<Self, DashboardError> {
        Self::with_max(symbols, MAX_COMPARE)
    }

    /// Builds a selection with a lower cap; `max` is clamped to 1..=5.
    pub fn with_max<S: AsRef<str>>(symbols: &[S], max: usize) -> Result<Self, DashboardError> {
        let max = max.clamp(1, MAX_COMPARE);
        if symbols.is_empty() {
            return Err(DashboardError::InvalidInput(
                "a comparison needs at least one symbol".to_string(),
            ));
        }
        if symbols.len() > max {
            return Err(DashboardError::InvalidInput(format!(
                "a comparison holds at most {} symbols, got {}",
                max,
                symbols.len()
            )));
        }
        let symbols = symbols
            .iter()
            .map(|s| validate_symbol(s.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { symbols, max })
    }

    pub fn push(&mut self, symbol: &str) -> Result<(), DashboardError> {
        if self.symbols.len() >= self.max {
            return Err(DashboardError::InvalidInput(format!(
                "a comparison holds at most {} symbols",
                self.max
            )));
        }
        self.symbols.push(validate_symbol(symbol)?);
        Ok(())
    }

    /// Removes the symbol at `index`; the last remaining symbol cannot go.
    pub fn remove(&mut self, index: usize) -> Result<String, DashboardError> {
        if index >= self.symbols.len() {
            return Err(DashboardError::InvalidInput(format!(
                "no symbol at position {}",
                index
            )));
        }
        if self.symbols.len() == 1 {
            return Err(DashboardError::InvalidInput(
                "a comparison needs at least one symbol".to_string(),
            ));
        }
        Ok(self.symbols.remove(index))
    }

    pub fn replace(&mut self, index: usize, symbol: &str) -> Result<String, DashboardError> {
        let symbol = validate_symbol(symbol)?;
        let slot = self.symbols.get_mut(index).ok_or_else(|| {
            DashboardError::InvalidInput(format!("no symbol at position {}", index))
        })?;
        Ok(std::mem::replace(slot, symbol))
    }

    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn max(&self) -> usize {
        self.max
    }

    /// Comma-joined path segment for the comparison endpoint: `AAPL,MSFT`.
    pub fn query(&self) -> String {
        self.symbols.join(",")
    }
}

impl Default for ComparisonSelection {
    fn default() -> Self {
        Self {
            symbols: DEFAULT_COMPARE.iter().map(|s| s.to_string()).collect(),
            max: MAX_COMPARE,
        }
    }
}

impl std::fmt::Display for ComparisonSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.query())
    }
}
