//! Historical daily observations
//!
//! The acquisition stage fills a [`DailySamples`] with one
//! [`DailyObservation`] per historical day (day × year). Estimators consume
//! flat per-variable series extracted from it.

use serde::{Deserialize, Serialize};

/// One historical day at the requested location
///
/// Any variable may be missing when the provider returned no value for it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyObservation {
    /// Daily mean 2 m temperature (°C)
    pub t_mean: Option<f64>,
    /// Daily minimum temperature (°C)
    pub t_min: Option<f64>,
    /// Daily maximum temperature (°C)
    pub t_max: Option<f64>,
    /// Corrected precipitation (mm/day)
    pub precipitation: Option<f64>,
}

impl DailyObservation {
    /// Observation with every variable present
    pub fn new(t_mean: f64, t_min: f64, t_max: f64, precipitation: f64) -> Self {
        Self {
            t_mean: Some(t_mean),
            t_min: Some(t_min),
            t_max: Some(t_max),
            precipitation: Some(precipitation),
        }
    }
}

/// Ordered collection of daily observations across the sampled years
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailySamples {
    observations: Vec<DailyObservation>,
}

impl DailySamples {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_observations(observations: Vec<DailyObservation>) -> Self {
        Self { observations }
    }

    pub fn push(&mut self, observation: DailyObservation) {
        self.observations.push(observation);
    }

    /// Append another batch (typically one more year) after the current days
    pub fn merge(&mut self, other: DailySamples) {
        self.observations.extend(other.observations);
    }

    pub fn observations(&self) -> &[DailyObservation] {
        &self.observations
    }

    /// Number of days, whether or not every variable is present
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    pub fn mean_temperatures(&self) -> Vec<f64> {
        self.series(|o| o.t_mean)
    }

    pub fn min_temperatures(&self) -> Vec<f64> {
        self.series(|o| o.t_min)
    }

    pub fn max_temperatures(&self) -> Vec<f64> {
        self.series(|o| o.t_max)
    }

    pub fn precipitation(&self) -> Vec<f64> {
        self.series(|o| o.precipitation)
    }

    /// `(mean, max)` temperature pairs from days reporting both
    pub fn mean_max_pairs(&self) -> Vec<(f64, f64)> {
        self.observations
            .iter()
            .filter_map(|o| Some((o.t_mean?, o.t_max?)))
            .collect()
    }

    fn series(&self, select: impl Fn(&DailyObservation) -> Option<f64>) -> Vec<f64> {
        self.observations.iter().filter_map(select).collect()
    }
}

impl FromIterator<DailyObservation> for DailySamples {
    fn from_iter<I: IntoIterator<Item = DailyObservation>>(iter: I) -> Self {
        Self {
            observations: iter.into_iter().collect(),
        }
    }
}

impl Extend<DailyObservation> for DailySamples {
    fn extend<I: IntoIterator<Item = DailyObservation>>(&mut self, iter: I) {
        self.observations.extend(iter);
    }
}
