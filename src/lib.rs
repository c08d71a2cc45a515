//! Climatology estimation toolkit
//!
//! Turns the same calendar window sampled across previous years into point
//! and interval predictions for rain, snow, heatwave and temperature.
//!
//! The work is split across the workspace crates, re-exported here:
//!
//! - [`clima_core`]: errors, rounding, [`Prediction`](clima_core::Prediction)
//!   and the daily sample model
//! - [`clima_quantile`]: linear-interpolation quantiles and the median
//! - [`clima_confidence`]: binomial proportion intervals for outcome chances
//! - [`clima_predict`]: continuous, rainfall and temperature estimators, the
//!   condition classifier and the full report
//! - [`clima_acquire`]: day windows and parallel per-year sample collection

pub use clima_acquire;
pub use clima_confidence;
pub use clima_core;
pub use clima_predict;
pub use clima_quantile;

pub mod prelude {
    pub use clima_acquire::{collect_samples, AcquisitionConfig, Location, SampleSource};
    pub use clima_core::{DailyObservation, DailySamples, Error, Prediction, Result};
    pub use clima_predict::prelude::*;
    pub use clima_quantile::{median, quantile};
}
