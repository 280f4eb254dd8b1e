//! Scenario models and related types

use serde::{Deserialize, Serialize};

/// Column order of the exported results table
pub const CSV_COLUMNS: [&str; 11] = [
    "scenario",
    "buy_mc",
    "sell_mc",
    "supply_used",
    "buy_price",
    "sell_price",
    "tokens",
    "final_value",
    "profit",
    "roi",
    "mult",
];

/// Supply denominator used to derive a price from a market cap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Basis {
    /// Circulating supply
    #[serde(rename = "Circulating")]
    Circulating,
    /// Fully diluted valuation, i.e. total supply
    #[serde(rename = "FDV")]
    Fdv,
}

impl Basis {
    /// Label used in reports and exports
    pub fn label(&self) -> &'static str {
        match self {
            Basis::Circulating => "Circulating",
            Basis::Fdv => "FDV",
        }
    }
}

impl std::fmt::Display for Basis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Which bases the caller wants results for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BasisSelection {
    /// Circulating supply only
    Circulating,
    /// Total supply only
    Fdv,
    /// Both, circulating first
    #[default]
    Both,
}

impl BasisSelection {
    /// The bases to compute, in output order
    pub fn bases(&self) -> &'static [Basis] {
        match self {
            BasisSelection::Circulating => &[Basis::Circulating],
            BasisSelection::Fdv => &[Basis::Fdv],
            BasisSelection::Both => &[Basis::Circulating, Basis::Fdv],
        }
    }
}

/// Derived values of a single purchase-and-sale scenario
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Price per token at the buy market cap
    pub buy_price: f64,
    /// Price per token at the sell market cap
    pub sell_price: f64,
    /// Tokens bought with the investment
    pub tokens_acquired: f64,
    /// Value of the tokens at the sell price
    pub final_value: f64,
    /// Final value minus the investment
    pub profit: f64,
    /// Profit as a percentage of the investment; NaN when nothing was invested
    pub roi_percent: f64,
    /// Final value divided by the investment; NaN when nothing was invested
    pub multiplier: f64,
}

/// A computed scenario together with the inputs that produced it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioResult {
    /// Basis label
    #[serde(rename = "scenario")]
    pub basis: Basis,
    /// Market cap at purchase
    #[serde(rename = "buy_mc")]
    pub buy_market_cap: f64,
    /// Market cap at sale
    #[serde(rename = "sell_mc")]
    pub sell_market_cap: f64,
    /// Supply the prices were derived from
    pub supply_used: f64,
    /// Price per token at purchase
    pub buy_price: f64,
    /// Price per token at sale
    pub sell_price: f64,
    /// Tokens acquired
    #[serde(rename = "tokens")]
    pub tokens_acquired: f64,
    /// Value at sale
    pub final_value: f64,
    /// Profit (negative for a loss)
    pub profit: f64,
    /// Return on investment in percent
    #[serde(rename = "roi")]
    pub roi_percent: f64,
    /// Return multiple
    #[serde(rename = "mult")]
    pub multiplier: f64,
}

impl ScenarioResult {
    /// Attach the scenario inputs to a computed projection
    pub fn new(
        basis: Basis,
        buy_market_cap: f64,
        sell_market_cap: f64,
        supply_used: f64,
        projection: Projection,
    ) -> Self {
        Self {
            basis,
            buy_market_cap,
            sell_market_cap,
            supply_used,
            buy_price: projection.buy_price,
            sell_price: projection.sell_price,
            tokens_acquired: projection.tokens_acquired,
            final_value: projection.final_value,
            profit: projection.profit,
            roi_percent: projection.roi_percent,
            multiplier: projection.multiplier,
        }
    }
}
