//! Confidence intervals for climatology chances
//!
//! Rain, snow, heatwave and heavy-rain chances are binomial proportions over
//! a handful of historical days. This crate turns such outcome sequences into
//! a whole-percentage [`Prediction`](clima_core::Prediction) using the
//! normal approximation to the binomial.
//!
//! # Example
//!
//! ```rust
//! use clima_confidence::predict_probability;
//!
//! let rain_days = [false, false, true, true, false, true, false, true, false, true];
//! let chance = predict_probability(&rain_days).unwrap();
//! assert_eq!(chance.point, 50.0);
//! assert!(chance.lower < chance.point && chance.point < chance.upper);
//!
//! assert_eq!(predict_probability(&[]), None);
//! ```

mod probability;
mod types;

// Re-exports
pub use probability::{
    predict_probability, predict_probability_binary, predict_probability_counts,
    BinomialProportion, DEFAULT_Z,
};
pub use types::ConfidenceLevel;
