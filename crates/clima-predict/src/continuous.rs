//! Quantile-based estimators for continuous quantities
//!
//! Both estimators report the median as the point and the 10th/90th
//! percentiles as the interval, rounded to one decimal.

use clima_core::{rounding::round_physical, Error, Prediction, Result};
use clima_quantile::{LinearInterpolation, QuantileEstimator};

/// Fractions evaluated by the continuous estimators: lower, point, upper
pub const INTERVAL_FRACTIONS: [f64; 3] = [0.1, 0.5, 0.9];

/// Median with a p10..p90 interval; `None` when empty
pub fn predict_continuous(samples: &[f64]) -> Result<Option<Prediction>> {
    predict_continuous_with(&LinearInterpolation, samples)
}

/// [`predict_continuous`] over any quantile estimator
pub fn predict_continuous_with<Q: QuantileEstimator>(
    estimator: &Q,
    samples: &[f64],
) -> Result<Option<Prediction>> {
    let Some(q) = estimator.quantiles(samples, &INTERVAL_FRACTIONS)? else {
        return Ok(None);
    };
    Ok(Some(Prediction::new(
        round_physical(q[1]),
        round_physical(q[0]),
        round_physical(q[2]),
    )))
}

/// Median and p10..p90 computed on `log1p` of the samples
///
/// Intended for heavy-tailed, non-negative quantities. Negative inputs are
/// clamped to zero before the transform; the lower bound is floored at zero
/// after the inverse transform.
pub fn predict_continuous_log1p(samples: &[f64]) -> Result<Option<Prediction>> {
    predict_continuous_log1p_with(&LinearInterpolation, samples)
}

/// [`predict_continuous_log1p`] over any quantile estimator
pub fn predict_continuous_log1p_with<Q: QuantileEstimator>(
    estimator: &Q,
    samples: &[f64],
) -> Result<Option<Prediction>> {
    // f64::max would swallow NaN, so reject it before clamping
    Error::check_finite(samples, "log1p input")?;
    let transformed: Vec<f64> = samples.iter().map(|&x| x.max(0.0).ln_1p()).collect();

    let Some(q) = estimator.quantiles(&transformed, &INTERVAL_FRACTIONS)? else {
        return Ok(None);
    };
    let lower = q[0].exp_m1().max(0.0);
    let point = q[1].exp_m1();
    let upper = q[2].exp_m1();
    Ok(Some(Prediction::new(
        round_physical(point),
        round_physical(lower),
        round_physical(upper),
    )))
}
