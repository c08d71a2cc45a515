//! Binary outcome sequences derived from daily samples

use crate::config::OutcomeThresholds;
use clima_core::DailySamples;

/// `true` for each sample strictly above `threshold`
pub fn exceeds(samples: &[f64], threshold: f64) -> Vec<bool> {
    samples.iter().map(|&x| x > threshold).collect()
}

/// `true` for each sample at or above `threshold`
pub fn reaches(samples: &[f64], threshold: f64) -> Vec<bool> {
    samples.iter().map(|&x| x >= threshold).collect()
}

impl OutcomeThresholds {
    /// Days with more than `rain_mm` of precipitation
    pub fn rain_days(&self, samples: &DailySamples) -> Vec<bool> {
        exceeds(&samples.precipitation(), self.rain_mm)
    }

    /// Days with more than `heavy_rain_mm` of precipitation
    pub fn heavy_rain_days(&self, samples: &DailySamples) -> Vec<bool> {
        exceeds(&samples.precipitation(), self.heavy_rain_mm)
    }

    /// Days cold enough for snow on both mean and maximum temperature
    ///
    /// Only days reporting both temperatures take part.
    pub fn snow_days(&self, samples: &DailySamples) -> Vec<bool> {
        samples
            .mean_max_pairs()
            .into_iter()
            .map(|(mean, max)| mean <= self.snow_mean_c && max <= self.snow_max_c)
            .collect()
    }

    /// Days whose maximum temperature reaches `heatwave_max_c`
    pub fn heatwave_days(&self, samples: &DailySamples) -> Vec<bool> {
        reaches(&samples.max_temperatures(), self.heatwave_max_c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clima_core::DailyObservation;

    fn samples() -> DailySamples {
        DailySamples::from_observations(vec![
            DailyObservation::new(0.5, -2.0, 2.5, 2.0),
            DailyObservation::new(1.0, -1.0, 3.5, 2.1),
            DailyObservation::new(25.0, 18.0, 38.0, 7.6),
            DailyObservation::new(27.0, 20.0, 37.9, 12.0),
        ])
    }

    #[test]
    fn test_rain_threshold_is_strict() {
        let t = OutcomeThresholds::default();
        assert_eq!(t.rain_days(&samples()), vec![false, true, true, true]);
        assert_eq!(t.heavy_rain_days(&samples()), vec![false, false, false, true]);
    }

    #[test]
    fn test_snow_needs_both_temperatures() {
        let t = OutcomeThresholds::default();
        assert_eq!(t.snow_days(&samples()), vec![true, false, false, false]);
    }

    #[test]
    fn test_heatwave_threshold_is_inclusive() {
        let t = OutcomeThresholds::default();
        assert_eq!(t.heatwave_days(&samples()), vec![false, false, true, false]);
    }

    #[test]
    fn test_custom_thresholds() {
        let t = OutcomeThresholds {
            heatwave_max_c: 30.0,
            ..Default::default()
        };
        assert_eq!(t.heatwave_days(&samples()), vec![false, false, true, true]);
    }

    #[test]
    fn test_helpers() {
        assert_eq!(exceeds(&[1.0, 2.0, 3.0], 2.0), vec![false, false, true]);
        assert_eq!(reaches(&[1.0, 2.0, 3.0], 2.0), vec![false, true, true]);
        assert!(exceeds(&[], 0.0).is_empty());
    }
}
