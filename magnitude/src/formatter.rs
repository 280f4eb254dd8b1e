//! Magnitude formatter

use thousands::Separable;

use crate::suffix::Magnitude;

/// Rendering of a missing or undefined value
pub const NOT_AVAILABLE: &str = "N/A";

/// Format a dollar amount with a scale suffix.
///
/// Values of at least one thousand are scaled to the largest fitting
/// magnitude and printed with three decimals (`$22.300K`); smaller values
/// get two decimals (`$12.50`). `None` and non-finite values print `N/A`.
///
/// ```
/// use magnitude::format_usd;
///
/// assert_eq!(format_usd(22_300.0), "$22.300K");
/// assert_eq!(format_usd(-1_234.0), "$-1.234K");
/// assert_eq!(format_usd(None), "N/A");
/// ```
pub fn format_usd(value: impl Into<Option<f64>>) -> String {
    let value = match value.into() {
        Some(v) if v.is_finite() => v,
        _ => return NOT_AVAILABLE.to_string(),
    };

    let scale = Magnitude::DESCENDING
        .into_iter()
        .find(|m| value.abs() >= m.multiplier());

    match scale {
        Some(m) => format!("${:.3}{}", value / m.multiplier(), m.symbol()),
        None => format!("${:.2}", value),
    }
}

/// Format a supply count as a comma-grouped integer; the fractional part
/// is truncated.
pub fn format_supply(value: f64) -> String {
    if !value.is_finite() {
        return NOT_AVAILABLE.to_string();
    }
    // saturating cast, the fraction is dropped toward zero
    (value.trunc() as i128).separate_with_commas()
}

/// Format a token amount with grouping and four decimals
pub fn format_tokens(value: f64) -> String {
    if !value.is_finite() {
        return NOT_AVAILABLE.to_string();
    }
    format!("{:.4}", value).separate_with_commas()
}

/// Format a percentage with two decimals, e.g. `150.00%`
pub fn format_percent(value: f64) -> String {
    if !value.is_finite() {
        return NOT_AVAILABLE.to_string();
    }
    format!("{:.2}%", value)
}

/// Format a return multiple with two decimals, e.g. `2.50x`
pub fn format_multiplier(value: f64) -> String {
    if !value.is_finite() {
        return NOT_AVAILABLE.to_string();
    }
    format!("{:.2}x", value)
}
