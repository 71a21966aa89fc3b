//! Human-scaled number formatting for the dashboard views.
//!
//! Volume and market cap share one implementation, [`format_magnitude`],
//! parameterized by a [`MagnitudeScale`]; only the prefix and tier table
//! differ. All output uses en-US conventions (`,` grouping, `.` decimals).

/// Placeholder for a metric the backend did not supply.
pub const NOT_APPLICABLE: &str = "N/A";

/// Tier table and prefix for [`format_magnitude`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MagnitudeScale {
    /// Text placed before the number (e.g. a currency symbol).
    pub prefix: &'static str,
    /// `(threshold, suffix)` pairs, largest threshold first.
    pub tiers: &'static [(f64, &'static str)],
}

/// Dollar market capitalization: `$2.50B`.
pub const MARKET_CAP_SCALE: MagnitudeScale = MagnitudeScale {
    prefix: "$",
    tiers: &[(1e12, "T"), (1e9, "B"), (1e6, "M")],
};

/// Share volume: `1.23M`.
pub const VOLUME_SCALE: MagnitudeScale = MagnitudeScale {
    prefix: "",
    tiers: &[(1e9, "B"), (1e6, "M"), (1e3, "K")],
};

impl MagnitudeScale {
    /// Index of the tier `value` falls into, `None` below every threshold.
    pub fn tier_of(&self, value: f64) -> Option<usize> {
        self.tiers.iter().position(|(threshold, _)| value >= *threshold)
    }
}

/// Formats `value` with the largest tier whose threshold it meets.
///
/// The quotient is rendered with exactly two decimals; below every threshold
/// the value is rounded to an integer and digit-grouped without a suffix.
pub fn format_magnitude(value: f64, scale: &MagnitudeScale) -> String {
    if !value.is_finite() {
        return NOT_APPLICABLE.to_string();
    }
    match scale.tier_of(value) {
        Some(idx) => {
            let (divisor, suffix) = scale.tiers[idx];
            format!("{}{}{}", scale.prefix, fixed2(value / divisor), suffix)
        }
        None => {
            let rounded = value.round();
            let sign = if rounded < 0.0 { "-" } else { "" };
            format!(
                "{}{}{}",
                sign,
                scale.prefix,
                group_digits(rounded.abs() as u64)
            )
        }
    }
}

pub fn format_market_cap(value: f64) -> String {
    format_magnitude(value, &MARKET_CAP_SCALE)
}

pub fn format_volume(value: f64) -> String {
    format_magnitude(value, &VOLUME_SCALE)
}

/// Rounds half away from zero to two decimals and renders both digits.
fn fixed2(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    // Avoid "-0.00" for tiny negatives.
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{:.2}", rounded)
}

/// Inserts `,` every three digits: `1234567` → `1,234,567`.
pub fn group_digits(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Two-decimal grouped amount, no sign handling: `1234.5` → `1,234.50`.
fn grouped_fixed2(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() as u64;
    format!("{}.{:02}", group_digits(cents / 100), cents % 100)
}

/// US dollar amount with grouping and two decimals: `-$1,234.50`.
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return NOT_APPLICABLE.to_string();
    }
    let body = grouped_fixed2(value);
    if value < 0.0 && body != "0.00" {
        format!("-${}", body)
    } else {
        format!("${}", body)
    }
}

/// Two-decimal number with an explicit sign: `+1.30`, `-4.63`.
///
/// Zero is rendered with `+`, matching the "non-negative is up" convention.
pub fn format_signed(value: f64) -> String {
    let body = fixed2(value);
    if body.starts_with('-') {
        body
    } else {
        format!("+{}", body)
    }
}

/// Signed dollar amount: `+$2.35`, `-$4.63`.
pub fn format_signed_currency(value: f64) -> String {
    let body = grouped_fixed2(value);
    if value < 0.0 && body != "0.00" {
        format!("-${}", body)
    } else {
        format!("+${}", body)
    }
}

/// Signed percentage where `value` is already in percent: `+1.25%`.
pub fn format_signed_percent(value: f64) -> String {
    format!("{}%", format_signed(value))
}

/// Percentage from a fraction: `0.0052` → `0.52%`.
pub fn format_fraction_percent(fraction: f64) -> String {
    format!("{}%", fixed2(fraction * 100.0))
}

/// Change line used by the quote header and comparison table:
/// `+1.30 (+0.75%)`.
pub fn format_change(change: f64, change_percent: f64) -> String {
    format!(
        "{} ({})",
        format_signed(change),
        format_signed_percent(change_percent)
    )
}

/// Applies `f` to a present, finite value and falls back to [`NOT_APPLICABLE`].
pub fn format_optional(value: Option<f64>, f: impl Fn(f64) -> String) -> String {
    match value {
        Some(v) if v.is_finite() => f(v),
        _ => NOT_APPLICABLE.to_string(),
    }
}

/// Two-decimal plain number: `28.50`.
pub fn format_decimal(value: f64) -> String {
    fixed2(value)
}
