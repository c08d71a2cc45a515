//! Historical sample acquisition
//!
//! Climatology predictions for a day are built from the same calendar window
//! in each of the previous few years. This crate computes those windows and
//! fetches them in parallel from any shared [`SampleSource`], dropping years
//! that fail or run out of time. Collection never outlives its overall
//! timeout.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use chrono::NaiveDate;
//! use clima_acquire::{collect_samples, AcquisitionConfig, InMemorySource, Location};
//! use clima_core::{DailyObservation, DailySamples};
//!
//! let day = |t: f64| DailySamples::from_observations(vec![DailyObservation::new(t, t - 4.0, t + 4.0, 0.0)]);
//! let source = Arc::new(
//!     InMemorySource::new()
//!         .with_year(2024, day(21.0))
//!         .with_year(2023, day(19.5))
//!         .with_failure(2022, "service unavailable"),
//! );
//!
//! let target = NaiveDate::from_ymd_opt(2025, 10, 18).unwrap();
//! let location = Location::new(51.5, -0.12).unwrap();
//! let samples = collect_samples(&source, location, target, &AcquisitionConfig::default()).unwrap();
//! assert_eq!(samples.len(), 2);
//! ```

mod collect;
mod config;
mod source;
mod window;

pub use collect::{collect, collect_samples, Collection};
pub use config::AcquisitionConfig;
pub use source::{InMemorySource, SampleSource};
pub use window::{DayWindow, Location, WindowRequest};
