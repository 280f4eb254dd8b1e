//! Domain models for the profit calculator

pub mod scenario;
pub mod preset;
