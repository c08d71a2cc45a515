//! Probability of a binary outcome with a normal-approximation interval
//!
//! Given `k` occurrences in `n` historical days the point estimate is
//! `p = k / n`, and the interval is `p ± z·sqrt(p(1-p)/n)` clipped to
//! `[0, 1]`. All three values are reported as whole percentages.
//!
//! When `p` is exactly 0 or 1 the standard error vanishes and the interval
//! collapses onto the point. This understates the real uncertainty at the
//! extremes but is the intended behavior: a location that never saw snow on
//! the sampled days reports `0 [0, 0]`.

use crate::types::ConfidenceLevel;
use clima_core::{rounding::to_percent, Error, Prediction, Result};
use tracing::trace;

/// Critical value for the ≈70 % two-sided interval used for every chance
pub const DEFAULT_Z: f64 = 1.04;

/// Binomial proportion estimator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinomialProportion {
    z: f64,
}

impl BinomialProportion {
    /// Estimator with the fixed `z = 1.04`
    pub const DEFAULT: Self = Self { z: DEFAULT_Z };

    /// Create an estimator with an explicit critical value
    pub fn new(z: f64) -> Result<Self> {
        if !(z.is_finite() && z >= 0.0) {
            return Err(Error::InvalidParameter(format!(
                "Critical value {z} must be finite and non-negative"
            )));
        }
        Ok(Self { z })
    }

    /// Create an estimator whose critical value matches a confidence level
    pub fn with_confidence(level: ConfidenceLevel) -> Result<Self> {
        Self::new(level.z_score()?)
    }

    pub fn z(&self) -> f64 {
        self.z
    }

    /// Estimate from an outcome sequence; `None` when empty
    pub fn estimate(&self, outcomes: &[bool]) -> Option<Prediction> {
        let k = outcomes.iter().filter(|&&hit| hit).count();
        self.from_counts_unchecked(k, outcomes.len())
    }

    /// Estimate from `k` occurrences in `n` trials; `None` when `n == 0`
    pub fn estimate_counts(&self, k: usize, n: usize) -> Result<Option<Prediction>> {
        if k > n {
            return Err(Error::InvalidInput(format!(
                "{k} occurrences cannot exceed {n} trials"
            )));
        }
        Ok(self.from_counts_unchecked(k, n))
    }

    fn from_counts_unchecked(&self, k: usize, n: usize) -> Option<Prediction> {
        if n == 0 {
            return None;
        }
        let nf = n as f64;
        let p = k as f64 / nf;
        let margin = self.z * (p * (1.0 - p) / nf).sqrt();

        let point = to_percent(p);
        let lower = to_percent((p - margin).max(0.0));
        let upper = to_percent((p + margin).min(1.0));

        trace!(k, n, p, margin, "binomial proportion");
        Some(Prediction::new(point, lower, upper))
    }
}

impl Default for BinomialProportion {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Chance of an outcome as a percentage with its ≈70 % interval
pub fn predict_probability(outcomes: &[bool]) -> Option<Prediction> {
    BinomialProportion::DEFAULT.estimate(outcomes)
}

/// Same as [`predict_probability`] for `0`/`1` encoded outcomes
///
/// Any value other than 0 or 1 is rejected.
pub fn predict_probability_binary(outcomes: &[u8]) -> Result<Option<Prediction>> {
    if let Some(bad) = outcomes.iter().find(|&&v| v > 1) {
        return Err(Error::InvalidInput(format!(
            "Outcome value {bad} is not 0 or 1"
        )));
    }
    let k = outcomes.iter().filter(|&&v| v == 1).count();
    BinomialProportion::DEFAULT.estimate_counts(k, outcomes.len())
}

/// Same as [`predict_probability`] from counts
pub fn predict_probability_counts(k: usize, n: usize) -> Result<Option<Prediction>> {
    BinomialProportion::DEFAULT.estimate_counts(k, n)
}
