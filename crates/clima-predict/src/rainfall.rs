//! Expected daily rainfall
//!
//! Unlike the quantile estimators, the rainfall interval is not read off the
//! data. The point is the mean; the interval is synthesized from it and is
//! wider above the point than below, so even a dry climatology reports a
//! small non-zero range.

use clima_core::{rounding::round_physical, Error, Prediction, Result};

/// Smallest half-range in millimetres
pub const MIN_BASE_RANGE_MM: f64 = 0.1;
/// Base range as a fraction of the point
pub const BASE_RANGE_FRACTION: f64 = 0.3;
/// Share of the base range placed below the point
pub const LOWER_FACTOR: f64 = 0.7;
/// Share of the base range placed above the point
pub const UPPER_FACTOR: f64 = 1.5;

/// Mean daily rainfall with an upper-skewed interval
///
/// # Errors
/// Negative amounts count as a dry day.
///
/// # Errors
/// * `InvalidInput` if `samples` is empty; callers must guard against this
///   instead of relying on a "no data" result.
/// * `Computation` for NaN/infinite amounts.
pub fn predict_rainfall(samples: &[f64]) -> Result<Prediction> {
    if samples.is_empty() {
        return Err(Error::empty_input("rainfall"));
    }
    Error::check_finite(samples, "rainfall")?;

    let mean = samples.iter().map(|&mm| mm.max(0.0)).sum::<f64>() / samples.len() as f64;
    let point = round_physical(mean);
    let base_range = (point * BASE_RANGE_FRACTION).max(MIN_BASE_RANGE_MM);

    let lower = round_physical((point - LOWER_FACTOR * base_range).max(0.0));
    let upper = round_physical(point + UPPER_FACTOR * base_range);
    Ok(Prediction::new(point, lower, upper))
}
