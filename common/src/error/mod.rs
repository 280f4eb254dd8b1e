//! Error types for the profit calculator
//!
//! This module provides the single error type shared by the parser, the
//! scenario engine and the interactive tool. Parse failures are recoverable
//! by the caller (re-prompt, skip a batch entry); supply failures abort the
//! computation they belong to.

use std::fmt::Display;
use thiserror::Error;

/// Profit calculator error type
#[derive(Debug, Error)]
pub enum Error {
    /// Magnitude text that no interpretation applies to
    #[error("Could not parse money/supply value: '{input}'")]
    Parse {
        /// The raw input, as the user typed it
        input: String,
    },

    /// Supply of zero, a negative supply, or NaN passed to the calculator
    #[error("Supply must be > 0 (got {0})")]
    InvalidSupply(f64),

    /// Generic validation error
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Interactive input ended or could not be read
    #[error("Input error: {0}")]
    Input(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV export error
    #[error("Export error: {0}")]
    Export(#[from] csv::Error),
}

impl Error {
    /// Build a parse error for the given raw input
    pub fn parse(input: impl Into<String>) -> Self {
        Error::Parse { input: input.into() }
    }

    /// Whether the error can be recovered by asking the user again
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::Parse { .. })
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait to add context to error results
pub trait ErrorExt<T> {
    /// Add context information to an error
    fn with_context<C, F>(self, context_fn: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Display;
}

impl<T> ErrorExt<T> for Result<T> {
    fn with_context<C, F>(self, context_fn: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Display,
    {
        self.map_err(|e| {
            let context = context_fn().to_string();
            match e {
                Error::ValidationError(msg) => Error::ValidationError(format!("{}: {}", context, msg)),
                Error::ConfigurationError(msg) => Error::ConfigurationError(format!("{}: {}", context, msg)),
                Error::Input(msg) => Error::Input(format!("{}: {}", context, msg)),
                Error::Internal(msg) => Error::Internal(format!("{}: {}", context, msg)),
                Error::Io(e) => Error::Internal(format!("{}: {}", context, e)),
                // The raw input and the supply value are what callers match on
                Error::Parse { input } => Error::Parse { input },
                Error::InvalidSupply(supply) => Error::InvalidSupply(supply),
                Error::Export(e) => Error::Export(e),
            }
        })
    }
}

/// Trait for converting other error types to our Error type
pub trait IntoError {
    /// Convert to Error
    fn into_error(self, message: &str) -> Error;
}

impl<E: std::error::Error> IntoError for E {
    fn into_error(self, message: &str) -> Error {
        Error::Internal(format!("{}: {}", message, self))
    }
}
