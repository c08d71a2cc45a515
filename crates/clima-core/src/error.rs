//! Error types for climatology estimation
//!
//! Provides a unified error type for all clima-* crates.
//!
//! An empty sample sequence is *not* an error for most estimators: they return
//! `Ok(None)` to signal "no data". The variants below cover caller mistakes
//! (bad parameters, preconditions) and acquisition failures.

use thiserror::Error;

/// Core error type for climatology operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),

    /// Failure while collecting historical samples
    #[error("Acquisition error: {0}")]
    Acquisition(String),

    /// Invalid or unreadable configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for an empty input where a value is required
    pub fn empty_input(operation: &str) -> Self {
        Self::InvalidInput(format!("{operation} requires at least one sample"))
    }

    /// Create an error for an out-of-range quantile fraction
    pub fn invalid_quantile(p: f64) -> Self {
        Self::InvalidParameter(format!("Quantile {p} must be in [0, 1]"))
    }

    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str) -> Self {
        Self::Computation(format!("{context} contains NaN or infinite values"))
    }

    /// Reject samples containing NaN or infinite values
    pub fn check_finite(samples: &[f64], context: &str) -> Result<()> {
        if samples.iter().any(|x| !x.is_finite()) {
            return Err(Self::non_finite(context));
        }
        Ok(())
    }

    /// Reject quantile fractions outside `[0, 1]` (NaN included)
    pub fn check_probability(p: f64) -> Result<()> {
        if !(0.0..=1.0).contains(&p) {
            return Err(Self::invalid_quantile(p));
        }
        Ok(())
    }
}
