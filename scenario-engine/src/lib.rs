//! Scenario engine: profit/loss projections for market-cap targets

pub mod calculator;
pub mod config;
pub mod export;
pub mod presets;
pub mod service;
pub mod supply;
pub mod targets;

pub use calculator::compute_scenario;
pub use config::{presets_from_list, ScenarioConfig};
pub use export::{export_csv, export_csv_file};
pub use presets::PresetMenu;
pub use service::{ScenarioRequest, ScenarioService};
pub use supply::{circulating_from_percent, resolve_circulating};
pub use targets::{resolve_targets, SkippedTarget, Target, TargetSelection};
