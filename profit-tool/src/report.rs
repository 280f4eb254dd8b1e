//! Human-readable results report

use std::io::Write;

use common::error::Result;
use common::model::scenario::ScenarioResult;
use magnitude::{format_multiplier, format_percent, format_supply, format_tokens, format_usd};

/// Render one result as a block of lines followed by a blank line
pub fn render_result(result: &ScenarioResult) -> String {
    format!(
        "Scenario: {}\n\
         Buy MC: {}   Sell MC: {}\n\
         Supply used: {}\n\
         Buy price: {}   Sell price: {}\n\
         Tokens acquired: {}\n\
         Final value: {}   Profit: {}\n\
         ROI: {}   Multiplier: {}\n",
        result.basis,
        format_usd(result.buy_market_cap),
        format_usd(result.sell_market_cap),
        format_supply(result.supply_used),
        format_usd(result.buy_price),
        format_usd(result.sell_price),
        format_tokens(result.tokens_acquired),
        format_usd(result.final_value),
        format_usd(result.profit),
        format_percent(result.roi_percent),
        format_multiplier(result.multiplier),
    )
}

/// Write every result, in order
pub fn write_report<W: Write>(output: &mut W, results: &[ScenarioResult]) -> Result<()> {
    for result in results {
        writeln!(output, "{}", render_result(result))?;
    }
    Ok(())
}
