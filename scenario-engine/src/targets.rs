//! Resolution of comma-separated sell targets

use common::error::{Error, Result};
use magnitude::parse_magnitude;
use tracing::{debug, warn};

use crate::presets::PresetMenu;

/// A resolved sell market cap
#[derive(Debug, Clone, PartialEq)]
pub struct Target {
    /// The entry as typed, trimmed
    pub entry: String,
    /// Market cap in dollars
    pub market_cap: f64,
}

/// An entry that could not be resolved
#[derive(Debug)]
pub struct SkippedTarget {
    /// The entry as typed, trimmed
    pub entry: String,
    /// Why it was skipped
    pub error: Error,
}

/// Outcome of resolving a target list
#[derive(Debug, Default)]
pub struct TargetSelection {
    /// Resolved targets, in input order
    pub targets: Vec<Target>,
    /// Entries that were skipped, in input order
    pub skipped: Vec<SkippedTarget>,
}

impl TargetSelection {
    /// Market caps of the resolved targets
    pub fn market_caps(&self) -> Vec<f64> {
        self.targets.iter().map(|t| t.market_cap).collect()
    }
}

/// Resolve a comma-separated target list such as `100m, #6, 1 billion`.
///
/// `#n` picks preset `n` and an exact preset label picks that preset.
/// Everything else is a magnitude, so a bare `1` is one dollar and never a
/// menu position. Bad entries are skipped; the rest are still resolved.
pub fn resolve_targets(raw: &str, menu: &PresetMenu) -> TargetSelection {
    let mut selection = TargetSelection::default();

    for entry in raw.split(',').map(str::trim).filter(|e| !e.is_empty()) {
        match resolve_entry(entry, menu) {
            Ok(market_cap) => {
                debug!("Target '{}' resolved to {}", entry, market_cap);
                selection.targets.push(Target {
                    entry: entry.to_string(),
                    market_cap,
                });
            }
            Err(error) => {
                warn!("Skipping target '{}': {}", entry, error);
                selection.skipped.push(SkippedTarget {
                    entry: entry.to_string(),
                    error,
                });
            }
        }
    }

    selection
}

fn resolve_entry(entry: &str, menu: &PresetMenu) -> Result<f64> {
    if let Some(position) = entry.strip_prefix('#') {
        let position: usize = position
            .trim()
            .parse()
            .map_err(|_| Error::ValidationError(format!("'{}' is not a preset number", entry)))?;
        return menu
            .by_position(position)
            .map(|p| p.value)
            .ok_or_else(|| {
                Error::ValidationError(format!(
                    "preset #{} does not exist (1-{})",
                    position,
                    menu.presets().len()
                ))
            });
    }

    if let Some(preset) = menu.by_label(entry) {
        return Ok(preset.value);
    }

    parse_magnitude(entry)
}
