//! Descriptive likelihood labels for chance percentages

use serde::{Deserialize, Serialize};
use std::fmt;

/// Verbal bucket for a chance percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Likelihood {
    VeryUnlikely,
    Unlikely,
    Possible,
    Likely,
    VeryLikely,
    AlmostCertain,
}

impl Likelihood {
    /// Bucket a whole percentage; bucket upper bounds are inclusive
    pub fn from_percent(percent: f64) -> Self {
        match percent {
            p if p <= 10.0 => Self::VeryUnlikely,
            p if p <= 25.0 => Self::Unlikely,
            p if p <= 45.0 => Self::Possible,
            p if p <= 65.0 => Self::Likely,
            p if p <= 85.0 => Self::VeryLikely,
            _ => Self::AlmostCertain,
        }
    }

    /// Phrase for a rain chance, e.g. "Likely to Rain"
    pub fn describe_rain(&self) -> &'static str {
        match self {
            Self::VeryUnlikely => "Very Unlikely to Rain",
            Self::Unlikely => "Unlikely to Rain",
            Self::Possible => "Possible Rain",
            Self::Likely => "Likely to Rain",
            Self::VeryLikely => "Very Likely to Rain",
            Self::AlmostCertain => "Almost Certain Rain",
        }
    }

    /// Phrase for a snow chance, e.g. "Possible Snow"
    pub fn describe_snow(&self) -> &'static str {
        match self {
            Self::VeryUnlikely => "Very Unlikely to Snow",
            Self::Unlikely => "Unlikely to Snow",
            Self::Possible => "Possible Snow",
            Self::Likely => "Likely to Snow",
            Self::VeryLikely => "Very Likely to Snow",
            Self::AlmostCertain => "Almost Certain Snow",
        }
    }
}

impl fmt::Display for Likelihood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::VeryUnlikely => "very unlikely",
            Self::Unlikely => "unlikely",
            Self::Possible => "possible",
            Self::Likely => "likely",
            Self::VeryLikely => "very likely",
            Self::AlmostCertain => "almost certain",
        };
        f.write_str(s)
    }
}
