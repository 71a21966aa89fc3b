use regex::Regex;
use stockdash_api::Period;

use crate::error::DashboardError;

pub const MAX_SYMBOL_LENGTH: usize = 10;

/// Upper bound of the comparison selection.
pub const MAX_COMPARE: usize = 5;

/// Largest indicator window accepted from user input.
pub const MAX_WINDOW: usize = 250;

const SYMBOL_PATTERN: &str = r"^[A-Z][A-Z0-9.\-]{0,9}$";

/// Validate a ticker symbol: trim, uppercase, then check the allowed shape
/// (letter first, then letters, digits, `.` or `-`).
pub fn validate_symbol(input: &str) -> Result<String, DashboardError> {
    let upper = input.trim().to_uppercase();
    if upper.is_empty() {
        return Err(DashboardError::InvalidInput(
            "symbol is empty".to_string(),
        ));
    }
    if upper.len() > MAX_SYMBOL_LENGTH {
        return Err(DashboardError::InvalidInput(format!(
            "symbol '{}' exceeds {} characters",
            input.trim(),
            MAX_SYMBOL_LENGTH
        )));
    }
    let re = Regex::new(SYMBOL_PATTERN)
        .map_err(|e| DashboardError::InvalidInput(format!("symbol pattern: {}", e)))?;
    if re.is_match(&upper) {
        Ok(upper)
    } else {
        Err(DashboardError::InvalidInput(format!(
            "invalid symbol '{}'",
            input.trim()
        )))
    }
}

/// Validate a comma-separated symbol list such as `AAPL,MSFT`.
///
/// Empty segments are ignored; order and duplicates are kept.
pub fn parse_symbol_list(input: &str) -> Result<Vec<String>, DashboardError> {
    let symbols = input
        .split(',')
        .filter(|s| !s.trim().is_empty())
        .map(validate_symbol)
        .collect::<Result<Vec<_>, _>>()?;
    if symbols.is_empty() {
        return Err(DashboardError::InvalidInput(
            "at least one symbol is required".to_string(),
        ));
    }
    Ok(symbols)
}

/// Validate a history period token (`1d`, `5d`, `1mo`, ... `5y`).
pub fn validate_period(input: &str) -> Result<Period, DashboardError> {
    input.trim().parse::<Period>().map_err(|_| {
        let valid: Vec<&str> = Period::ALL.iter().map(|p| p.as_str()).collect();
        DashboardError::InvalidInput(format!(
            "unknown period '{}'. Valid periods: {}",
            input.trim(),
            valid.join(", ")
        ))
    })
}

/// Validate an indicator window (must be 1..=250).
pub fn validate_window(window: usize) -> Result<usize, DashboardError> {
    if !(1..=MAX_WINDOW).contains(&window) {
        return Err(DashboardError::InvalidInput(format!(
            "window must be between 1 and {}",
            MAX_WINDOW
        )));
    }
    Ok(window)
}
