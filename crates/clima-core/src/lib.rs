//! Core types for climatology estimation
//!
//! This crate provides the value types shared by the rest of the workspace:
//!
//! - [`Error`] / [`Result`]: the unified error type
//! - [`Prediction`]: a `{point, lower, upper}` triple, always wrapped in
//!   `Option` so "no data" can never be mistaken for zero
//! - [`rounding`]: the rounding contract (whole percentages, one-decimal
//!   physical units)
//! - [`DailySamples`]: historical daily observations handed over by the
//!   acquisition stage
//!
//! # Example
//!
//! ```rust
//! use clima_core::{rounding, Prediction};
//!
//! let p = Prediction::new(5.0, 4.0, 7.3);
//! assert!(p.contains(rounding::round_physical(5.04)));
//! ```

pub mod error;
pub mod prediction;
pub mod rounding;
pub mod samples;

pub use error::{Error, Result};
pub use prediction::{Prediction, PredictionKind};
pub use samples::{DailyObservation, DailySamples};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
