//! Technical indicators over an ordered close-price series.
//!
//! Both indicators are trailing-window computations with a warm-up period:
//! points that do not yet have enough history get `None` rather than a
//! back-filled or shrunken-window value. Output always has the same length
//! as the input.

use crate::series::IndicatorPoint;

/// Default simple moving average window (the dashboard's 20-day MA).
pub const DEFAULT_MA_WINDOW: usize = 20;

/// Default RSI window.
pub const DEFAULT_RSI_WINDOW: usize = 14;

/// Simple moving average of `closes` over a trailing `window`.
///
/// Index `i` holds the mean of `closes[i + 1 - window..=i]` once
/// `i >= window - 1`, and `None` before that. A zero window or a series
/// shorter than the window yields all `None`.
pub fn moving_average(closes: &[f64], window: usize) -> Vec<Option<f64>> {
    let mut values = vec![None; closes.len()];

    if window == 0 || closes.len() < window {
        return values;
    }

    for i in (window - 1)..closes.len() {
        let start = i + 1 - window;
        let sum: f64 = closes[start..=i].iter().sum();
        values[i] = Some(sum / window as f64);
    }

    values
}

/// Relative strength index of `closes` over a trailing `window` of
/// close-to-close transitions.
///
/// Gains and losses are plain sums over the window (no Wilder smoothing).
/// When the window has no losses the RSI is 100.
pub fn relative_strength(closes: &[f64], window: usize) -> Vec<Option<f64>> {
    let mut values = vec![None; closes.len()];

    if window == 0 || closes.len() < window + 1 {
        return values;
    }

    for i in window..closes.len() {
        let mut gains = 0.0;
        let mut losses = 0.0;
        for j in (i + 1 - window)..=i {
            let delta = closes[j] - closes[j - 1];
            if delta > 0.0 {
                gains += delta;
            } else {
                losses -= delta;
            }
        }

        let avg_gain = gains / window as f64;
        let avg_loss = losses / window as f64;

        values[i] = Some(if avg_loss == 0.0 {
            100.0
        } else {
            let rs = avg_gain / avg_loss;
            100.0 - 100.0 / (1.0 + rs)
        });
    }

    values
}

fn closes_of(series: &[IndicatorPoint]) -> Vec<f64> {
    series.iter().map(|p| p.close).collect()
}

/// Returns a copy of `series` with `moving_average` set on every point.
pub fn compute_moving_average(series: &[IndicatorPoint], window: usize) -> Vec<IndicatorPoint> {
    let averages = moving_average(&closes_of(series), window);
    series
        .iter()
        .zip(averages)
        .map(|(point, moving_average)| IndicatorPoint {
            moving_average,
            ..point.clone()
        })
        .collect()
}

/// Returns a copy of `series` with `rsi` set on every point.
pub fn compute_rsi(series: &[IndicatorPoint], window: usize) -> Vec<IndicatorPoint> {
    let rsi_values = relative_strength(&closes_of(series), window);
    series
        .iter()
        .zip(rsi_values)
        .map(|(point, rsi)| IndicatorPoint {
            rsi,
            ..point.clone()
        })
        .collect()
}
