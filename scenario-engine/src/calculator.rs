//! Closed-form profit/loss arithmetic

use common::error::{Error, Result};
use common::model::scenario::Projection;

/// Project buying `invest` dollars of a token at `buy_market_cap` and
/// selling at `sell_market_cap`, with prices derived from `supply`.
///
/// Nothing is rounded here. ROI and multiplier are NaN when `invest` is
/// not positive, and no tokens are bought at a zero buy price.
pub fn compute_scenario(
    invest: f64,
    buy_market_cap: f64,
    sell_market_cap: f64,
    supply: f64,
) -> Result<Projection> {
    // also rejects NaN
    if !(supply > 0.0) {
        return Err(Error::InvalidSupply(supply));
    }

    let buy_price = buy_market_cap / supply;
    let sell_price = sell_market_cap / supply;
    let tokens_acquired = if buy_price > 0.0 { invest / buy_price } else { 0.0 };
    let final_value = tokens_acquired * sell_price;
    let profit = final_value - invest;
    let (roi_percent, multiplier) = if invest > 0.0 {
        ((profit / invest) * 100.0, final_value / invest)
    } else {
        (f64::NAN, f64::NAN)
    };

    Ok(Projection {
        buy_price,
        sell_price,
        tokens_acquired,
        final_value,
        profit,
        roi_percent,
        multiplier,
    })
}
