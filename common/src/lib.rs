//! Common types and utilities for the profit calculator
//!
//! This library contains the shared error type and the domain models used by
//! the magnitude parser, the scenario engine and the interactive tool.

pub mod error;
pub mod model;

/// Re-export important types
pub use error::{Error, Result, ErrorExt, IntoError};
pub use model::scenario::{Basis, BasisSelection, Projection, ScenarioResult, CSV_COLUMNS};
pub use model::preset::{Preset, default_market_cap_presets};
