//! Configuration for the scenario engine

use std::env;
use std::path::PathBuf;

use common::error::{Error, Result};
use common::model::preset::{default_market_cap_presets, Preset};
use magnitude::parse_magnitude;

/// Default export file
pub const DEFAULT_OUTPUT: &str = "memecoin_smart_results.csv";

/// Configuration for the scenario engine and the interactive tool
#[derive(Debug, Clone)]
pub struct ScenarioConfig {
    /// Where results are exported
    pub output_path: PathBuf,
    /// Investment offered when the prompt is left blank
    pub default_invest: String,
    /// Total supply offered when the prompt is left blank
    pub default_total_supply: String,
    /// Market-cap presets
    pub presets: Vec<Preset>,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(DEFAULT_OUTPUT),
            default_invest: "100".to_string(),
            default_total_supply: "1000000000".to_string(),
            presets: default_market_cap_presets(),
        }
    }
}

impl ScenarioConfig {
    /// Create a configuration from environment variables, falling back to
    /// the defaults for anything unset
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let presets = match env::var("PROFIT_TOOL_PRESETS") {
            Ok(raw) => presets_from_list(&raw)?,
            Err(_) => defaults.presets,
        };

        Ok(Self {
            output_path: env::var("PROFIT_TOOL_OUTPUT")
                .map(PathBuf::from)
                .unwrap_or(defaults.output_path),
            default_invest: env::var("PROFIT_TOOL_DEFAULT_INVEST")
                .unwrap_or(defaults.default_invest),
            default_total_supply: env::var("PROFIT_TOOL_DEFAULT_SUPPLY")
                .unwrap_or(defaults.default_total_supply),
            presets,
        })
    }
}

/// Parse a comma-separated preset list such as `5m, 50m, 1b`. Each entry
/// is labelled by its own text.
pub fn presets_from_list(raw: &str) -> Result<Vec<Preset>> {
    let presets = raw
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            parse_magnitude(entry)
                .map(|value| Preset::new(entry, value))
                .map_err(|e| Error::ConfigurationError(format!("PROFIT_TOOL_PRESETS: {}", e)))
        })
        .collect::<Result<Vec<_>>>()?;

    if presets.is_empty() {
        return Err(Error::ConfigurationError(
            "PROFIT_TOOL_PRESETS contains no presets".to_string(),
        ));
    }
    Ok(presets)
}
