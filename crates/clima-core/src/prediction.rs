//! Point/interval prediction value

use serde::{Deserialize, Serialize};
use std::fmt;

/// A predicted value with its interval bounds
///
/// Every estimator returns `Option<Prediction>`: `None` means the input held
/// no samples, which renderers must show as "insufficient data" rather than
/// zero. When present, `lower <= point <= upper` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// The most representative value (median or mean, per estimator)
    pub point: f64,
    /// Lower interval bound
    pub lower: f64,
    /// Upper interval bound
    pub upper: f64,
}

impl Prediction {
    /// Create a new prediction
    ///
    /// Callers are expected to supply ordered bounds; this is checked in
    /// debug builds only.
    pub fn new(point: f64, lower: f64, upper: f64) -> Self {
        debug_assert!(
            lower <= point && point <= upper,
            "prediction bounds out of order: {lower} <= {point} <= {upper}"
        );
        Self {
            point,
            lower,
            upper,
        }
    }

    /// A prediction whose interval has collapsed onto the point
    pub fn exact(value: f64) -> Self {
        Self::new(value, value, value)
    }

    /// Width of the interval
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Check if a value falls inside the interval
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }

    /// True when the interval has zero width
    ///
    /// Happens for probabilities of exactly 0 % or 100 % and for single-sample
    /// quantile estimates. It is expected small-sample behavior, not an error.
    pub fn is_degenerate(&self) -> bool {
        self.width() == 0.0
    }

    /// Distance from the point up to the upper bound
    pub fn upside(&self) -> f64 {
        self.upper - self.point
    }

    /// Distance from the lower bound up to the point
    pub fn downside(&self) -> f64 {
        self.point - self.lower
    }
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}, {}]", self.point, self.lower, self.upper)
    }
}

/// Physical meaning of a prediction's numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PredictionKind {
    /// Whole percentage in `[0, 100]`
    Percentage,
    /// Degrees Celsius, one decimal
    Celsius,
    /// Millimetres per day, one decimal
    Millimetres,
}

impl PredictionKind {
    /// Unit suffix for display
    pub fn unit(&self) -> &'static str {
        match self {
            Self::Percentage => "%",
            Self::Celsius => "°C",
            Self::Millimetres => "mm",
        }
    }

    /// Number of decimals carried by results of this kind
    pub fn decimals(&self) -> u32 {
        match self {
            Self::Percentage => crate::rounding::PERCENT_DECIMALS,
            Self::Celsius | Self::Millimetres => crate::rounding::PHYSICAL_DECIMALS,
        }
    }
}
