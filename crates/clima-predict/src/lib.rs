//! Climatology estimators and reports
//!
//! This crate turns historical daily samples into calibrated predictions:
//!
//! - **Continuous estimators**: median with p10..p90, optionally in `log1p`
//!   space for heavy-tailed quantities ([`predict_continuous`],
//!   [`predict_continuous_log1p`])
//! - **Rainfall estimator**: mean with a synthesized, upper-skewed interval
//!   ([`predict_rainfall`])
//! - **Temperature summary**: mean with the observed range
//!   ([`predict_mean_range`])
//! - **Outcomes**: rain, heavy rain, snow and heatwave day sequences
//!   ([`OutcomeThresholds`])
//! - **Condition classifier**: [`classify_condition`]
//! - **Report**: every metric at once ([`ClimatologyReport`])
//!
//! # Example
//!
//! ```rust
//! use clima_core::{DailyObservation, DailySamples};
//! use clima_predict::{ClimatologyReport, ReportOptions, WeatherCondition};
//!
//! let samples = DailySamples::from_observations(vec![
//!     DailyObservation::new(24.0, 17.0, 30.0, 0.0),
//!     DailyObservation::new(25.5, 18.0, 31.0, 0.4),
//!     DailyObservation::new(23.0, 16.5, 29.0, 0.0),
//! ]);
//!
//! let report = ClimatologyReport::from_samples(&samples, &ReportOptions::default()).unwrap();
//! assert_eq!(report.condition, WeatherCondition::Sunny);
//! assert_eq!(report.rain_chance.unwrap().point, 0.0);
//! ```

pub mod condition;
pub mod config;
pub mod continuous;
pub mod labels;
pub mod outcomes;
pub mod rainfall;
pub mod report;
pub mod temperature;

pub use condition::{classify_condition, WeatherCondition};
pub use config::{OutcomeThresholds, ReportOptions, TemperatureSummary};
pub use continuous::{
    predict_continuous, predict_continuous_log1p, predict_continuous_log1p_with,
    predict_continuous_with,
};
pub use labels::Likelihood;
pub use outcomes::{exceeds, reaches};
pub use rainfall::predict_rainfall;
pub use report::ClimatologyReport;
pub use temperature::predict_mean_range;

// Re-export the probability estimator so callers need a single import
pub use clima_confidence::predict_probability;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        classify_condition, predict_continuous, predict_continuous_log1p, predict_mean_range,
        predict_probability, predict_rainfall, ClimatologyReport, OutcomeThresholds,
        ReportOptions, WeatherCondition,
    };
    pub use clima_core::{Error, Prediction, Result};
}
