//! Temperature summaries

use clima_core::{rounding::round_physical, Error, Prediction, Result};

/// Mean temperature bracketed by the observed extremes
///
/// The point is the arithmetic mean, the interval runs from the coldest to
/// the warmest sample, all rounded to one decimal. `None` when empty.
pub fn predict_mean_range(samples: &[f64]) -> Result<Option<Prediction>> {
    if samples.is_empty() {
        return Ok(None);
    }
    Error::check_finite(samples, "temperature")?;

    let mean = samples.iter().sum::<f64>() / samples.len() as f64;
    let (min, max) = samples
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &t| (lo.min(t), hi.max(t)));

    Ok(Some(Prediction::new(
        round_physical(mean),
        round_physical(min),
        round_physical(max),
    )))
}
