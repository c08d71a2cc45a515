//! Linear-interpolated order statistic (Hyndman-Fan type 7)
//!
//! For a sorted sample `s` of length `n` the quantile at fraction `p` sits at
//! fractional index `h = p·(n-1)` and interpolates between `s[floor(h)]` and
//! the next order statistic.

use crate::traits::QuantileEstimator;
use clima_core::{Error, Result};
use tracing::trace;

/// Type-7 linear interpolation between bracketing order statistics
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearInterpolation;

impl LinearInterpolation {
    pub const fn new() -> Self {
        Self
    }
}

impl QuantileEstimator for LinearInterpolation {
    fn quantile_sorted(&self, sorted: &[f64], p: f64) -> Result<Option<f64>> {
        let n = sorted.len();
        if n == 0 {
            return Ok(None);
        }
        Error::check_probability(p)?;

        let h = p * (n - 1) as f64;
        let i = h.floor() as usize;
        let j = (i + 1).min(n - 1);
        let frac = h - i as f64;
        let q = sorted[i] * (1.0 - frac) + sorted[j] * frac;

        trace!(n, p, q, "linear quantile");
        Ok(Some(q))
    }

    fn name(&self) -> &'static str {
        "Linear interpolation (type 7)"
    }
}

/// Quantile of an unsorted sample; `None` when empty
pub fn quantile(samples: &[f64], p: f64) -> Result<Option<f64>> {
    LinearInterpolation.quantile(samples, p)
}

/// Quantile of an already sorted sample; `None` when empty
pub fn quantile_sorted(sorted: &[f64], p: f64) -> Result<Option<f64>> {
    LinearInterpolation.quantile_sorted(sorted, p)
}

/// Several quantiles of an unsorted sample, sorting once
pub fn quantiles(samples: &[f64], ps: &[f64]) -> Result<Option<Vec<f64>>> {
    LinearInterpolation.quantiles(samples, ps)
}

/// Median, identical to `quantile(samples, 0.5)`
pub fn median(samples: &[f64]) -> Result<Option<f64>> {
    LinearInterpolation.median(samples)
}
