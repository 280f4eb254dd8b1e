//! Market-cap presets offered by the interactive menu

use serde::{Deserialize, Serialize};

/// A named market-cap value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    /// Human label, e.g. "70 billion"
    pub label: String,
    /// Market cap in dollars
    pub value: f64,
}

impl Preset {
    /// Create a new preset
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// The built-in preset menu, smallest first
pub fn default_market_cap_presets() -> Vec<Preset> {
    vec![
        Preset::new("1 million", 1_000_000.0),
        Preset::new("10 million", 10_000_000.0),
        Preset::new("100 million", 100_000_000.0),
        Preset::new("1 billion", 1_000_000_000.0),
        Preset::new("10 billion", 10_000_000_000.0),
        Preset::new("70 billion", 70_000_000_000.0),
    ]
}
