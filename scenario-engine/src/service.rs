//! Scenario planning over target and basis combinations

use common::error::Result;
use common::model::scenario::{Basis, BasisSelection, ScenarioResult};
use tracing::{debug, info};

use crate::calculator::compute_scenario;
use crate::config::ScenarioConfig;
use crate::presets::PresetMenu;
use crate::targets::{self, TargetSelection};

/// Everything needed to project a batch of targets
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioRequest {
    /// Dollars invested at the buy market cap
    pub invest: f64,
    /// Market cap at purchase
    pub buy_market_cap: f64,
    /// Sell market caps, in output order
    pub targets: Vec<f64>,
    /// Fully diluted supply
    pub total_supply: f64,
    /// Circulating supply
    pub circulating_supply: f64,
    /// Bases to report
    pub basis: BasisSelection,
}

impl ScenarioRequest {
    /// Supply used as the price denominator for `basis`
    pub fn supply_for(&self, basis: Basis) -> f64 {
        match basis {
            Basis::Circulating => self.circulating_supply,
            Basis::Fdv => self.total_supply,
        }
    }
}

/// Scenario service producing projections for a request
#[derive(Debug, Clone, Default)]
pub struct ScenarioService {
    /// Market-cap presets for menus and target lists
    menu: PresetMenu,
}

impl ScenarioService {
    /// Create a service with the built-in presets
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a service using the configured presets
    pub fn with_config(config: &ScenarioConfig) -> Self {
        Self {
            menu: PresetMenu::new(config.presets.clone()),
        }
    }

    /// The preset menu
    pub fn menu(&self) -> &PresetMenu {
        &self.menu
    }

    /// Resolve a comma-separated target list against the preset menu
    pub fn resolve_targets(&self, raw: &str) -> TargetSelection {
        targets::resolve_targets(raw, &self.menu)
    }

    /// Compute one result per target and requested basis, circulating
    /// before FDV for each target. An invalid supply aborts the run.
    pub fn run(&self, request: &ScenarioRequest) -> Result<Vec<ScenarioResult>> {
        let bases = request.basis.bases();
        let mut results = Vec::with_capacity(request.targets.len() * bases.len());

        for &sell_market_cap in &request.targets {
            for &basis in bases {
                let supply = request.supply_for(basis);
                let projection = compute_scenario(
                    request.invest,
                    request.buy_market_cap,
                    sell_market_cap,
                    supply,
                )?;
                debug!(
                    "{} scenario: sell at {} with supply {} -> profit {}",
                    basis, sell_market_cap, supply, projection.profit
                );
                results.push(ScenarioResult::new(
                    basis,
                    request.buy_market_cap,
                    sell_market_cap,
                    supply,
                    projection,
                ));
            }
        }

        info!("Computed {} scenarios for {} targets", results.len(), request.targets.len());
        Ok(results)
    }
}
