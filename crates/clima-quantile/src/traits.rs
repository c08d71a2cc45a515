//! Core trait for quantile estimation

use clima_core::{Error, Result};

/// Main trait for quantile estimation
///
/// Every method works on a borrowed slice and never reorders the caller's
/// data: the unsorted entry points sort a private copy. An empty sample yields
/// `Ok(None)`; a fraction outside `[0, 1]` on non-empty data is an error.
pub trait QuantileEstimator {
    /// Estimate a single quantile from pre-sorted data
    ///
    /// # Arguments
    /// * `sorted` - The data sample, sorted ascending
    /// * `p` - The quantile fraction (0.0 to 1.0)
    fn quantile_sorted(&self, sorted: &[f64], p: f64) -> Result<Option<f64>>;

    /// Human-readable estimator name
    fn name(&self) -> &'static str;

    /// Estimate a single quantile
    fn quantile(&self, samples: &[f64], p: f64) -> Result<Option<f64>> {
        if samples.is_empty() {
            return Ok(None);
        }
        let sorted = sorted_copy(samples)?;
        self.quantile_sorted(&sorted, p)
    }

    /// Estimate several quantiles from pre-sorted data
    fn quantiles_sorted(&self, sorted: &[f64], ps: &[f64]) -> Result<Option<Vec<f64>>> {
        if sorted.is_empty() {
            return Ok(None);
        }
        let mut out = Vec::with_capacity(ps.len());
        for &p in ps {
            match self.quantile_sorted(sorted, p)? {
                Some(q) => out.push(q),
                None => return Ok(None),
            }
        }
        Ok(Some(out))
    }

    /// Estimate several quantiles, sorting the sample once
    fn quantiles(&self, samples: &[f64], ps: &[f64]) -> Result<Option<Vec<f64>>> {
        if samples.is_empty() {
            return Ok(None);
        }
        let sorted = sorted_copy(samples)?;
        self.quantiles_sorted(&sorted, ps)
    }

    /// The 0.5 quantile
    fn median(&self, samples: &[f64]) -> Result<Option<f64>> {
        self.quantile(samples, 0.5)
    }
}

/// Sorted copy of `samples`, rejecting NaN and infinities
pub fn sorted_copy(samples: &[f64]) -> Result<Vec<f64>> {
    Error::check_finite(samples, "quantile input")?;
    let mut sorted = samples.to_vec();
    sorted.sort_by(f64::total_cmp);
    Ok(sorted)
}
