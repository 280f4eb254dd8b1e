//! Circulating supply resolution

use common::error::{Error, Result};
use magnitude::parse_magnitude;

/// Resolve a circulating supply entry against the total supply.
///
/// `20%` means twenty percent of `total_supply`; the part before the sign
/// is a plain number. Anything else is read as a magnitude (`200m`).
pub fn resolve_circulating(input: &str, total_supply: f64) -> Result<f64> {
    let trimmed = input.trim();
    match trimmed.strip_suffix('%') {
        Some(percent) => {
            let percent: f64 = percent
                .trim()
                .parse()
                .map_err(|_| Error::parse(input))?;
            circulating_from_percent(percent, total_supply).map_err(|_| Error::parse(input))
        }
        None => parse_magnitude(input),
    }
}

/// `percent` percent of `total_supply`
pub fn circulating_from_percent(percent: f64, total_supply: f64) -> Result<f64> {
    let supply = total_supply * percent / 100.0;
    if supply.is_finite() {
        Ok(supply)
    } else {
        Err(Error::ValidationError(format!(
            "{}% of {} is not a finite supply",
            percent, total_supply
        )))
    }
}
