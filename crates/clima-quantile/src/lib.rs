//! Quantile estimation for climatology samples
//!
//! Historical samples are small (a few years × a few days), so this crate
//! uses plain linear interpolation between order statistics rather than a
//! smoothed estimator. The free functions cover the common case; the
//! [`QuantileEstimator`] trait lets downstream estimators stay generic.
//!
//! # Example
//!
//! ```rust
//! use clima_quantile::{median, quantile};
//!
//! let temps = [14.2, 11.8, 16.0, 13.1];
//! assert_eq!(quantile(&temps, 0.0).unwrap(), Some(11.8));
//! assert_eq!(median(&temps).unwrap(), quantile(&temps, 0.5).unwrap());
//! assert_eq!(median(&[]).unwrap(), None);
//! ```

pub mod linear;
pub mod traits;

pub use linear::{median, quantile, quantile_sorted, quantiles, LinearInterpolation};
pub use traits::{sorted_copy, QuantileEstimator};

// Re-export the shared error type
pub use clima_core::{Error, Result};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{median, quantile, quantiles, LinearInterpolation, QuantileEstimator};
}
