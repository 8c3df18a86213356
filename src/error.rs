//! Error types for reel-evo
//!
//! This module defines all error types used throughout the library.

use thiserror::Error;

/// Error type for preference and run-parameter validation
///
/// All variants are raised before the first generation runs; a run never
/// starts with a partially valid configuration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PreferenceError {
    /// A required numeric field could not be parsed
    #[error("Invalid number for {field}: '{value}'")]
    InvalidNumber { field: &'static str, value: String },

    /// A probability field is outside [0, 1]
    #[error("Probability {field} must be in [0, 1], got {value}")]
    ProbabilityOutOfRange { field: &'static str, value: f64 },

    /// A count field that must be strictly positive is zero
    #[error("{field} must be greater than zero")]
    NonPositive { field: &'static str },
}

/// Error type for catalog access failures
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CatalogError {
    /// The catalog holds no records at all
    #[error("Catalog is empty")]
    Empty,

    /// A distinct sample was requested that exceeds the catalog size
    #[error("Cannot draw {requested} distinct movies from a catalog of {available}")]
    InsufficientCatalog { requested: usize, available: usize },
}

/// Top-level error type for evolution runs
#[derive(Debug, Error)]
pub enum EvolutionError {
    /// Preference or run-parameter validation failed
    #[error("Preference error: {0}")]
    Preference(#[from] PreferenceError),

    /// Catalog could not support the requested run
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Invalid engine configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

/// Result type alias for evolution operations
pub type EvoResult<T> = Result<T, EvolutionError>;
