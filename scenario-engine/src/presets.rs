//! Preset menu for picking a market cap

use common::error::Result;
use common::model::preset::{default_market_cap_presets, Preset};
use magnitude::{format_usd, parse_magnitude};

/// An ordered list of presets addressed by 1-based position
#[derive(Debug, Clone, PartialEq)]
pub struct PresetMenu {
    presets: Vec<Preset>,
}

impl Default for PresetMenu {
    fn default() -> Self {
        Self::new(default_market_cap_presets())
    }
}

impl PresetMenu {
    /// Create a menu from presets in display order
    pub fn new(presets: Vec<Preset>) -> Self {
        Self { presets }
    }

    /// Presets in display order
    pub fn presets(&self) -> &[Preset] {
        &self.presets
    }

    /// Preset at a 1-based position
    pub fn by_position(&self, position: usize) -> Option<&Preset> {
        position.checked_sub(1).and_then(|idx| self.presets.get(idx))
    }

    /// Preset whose label equals `label`, ignoring case and outer whitespace
    pub fn by_label(&self, label: &str) -> Option<&Preset> {
        let label = label.trim();
        self.presets
            .iter()
            .find(|p| p.label.eq_ignore_ascii_case(label))
    }

    /// Menu lines, e.g. `  4. 1 billion -> $1.000B`
    pub fn lines(&self) -> Vec<String> {
        self.presets
            .iter()
            .enumerate()
            .map(|(idx, p)| format!("  {}. {} -> {}", idx + 1, p.label, format_usd(p.value)))
            .collect()
    }

    /// Interpret a menu answer. A bare number naming a listed position
    /// picks that preset; anything else is parsed as a custom magnitude.
    pub fn select(&self, choice: &str) -> Result<f64> {
        let trimmed = choice.trim();
        if !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_digit()) {
            if let Some(preset) = trimmed.parse().ok().and_then(|pos| self.by_position(pos)) {
                return Ok(preset.value);
            }
        }
        parse_magnitude(choice)
    }
}
