//! Stateless computation stage: daily samples in, report out

use crate::condition::{classify_condition, WeatherCondition};
use crate::config::{ReportOptions, TemperatureSummary};
use crate::continuous::predict_continuous;
use crate::labels::Likelihood;
use crate::rainfall::predict_rainfall;
use crate::temperature::predict_mean_range;
use clima_confidence::predict_probability;
use clima_core::{rounding::round_half_up, DailySamples, Prediction, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Every derived metric for one place and date
///
/// A `None` field means no historical sample fed that metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClimatologyReport {
    /// Chance of more than the rain threshold (%)
    pub rain_chance: Option<Prediction>,
    /// Chance of more than the heavy-rain threshold (%)
    pub heavy_rain_chance: Option<Prediction>,
    /// Chance of a snow day (%)
    pub snow_chance: Option<Prediction>,
    /// Chance of a heatwave day (%)
    pub heatwave_chance: Option<Prediction>,
    /// Expected daily rainfall (mm)
    pub avg_rainfall: Option<Prediction>,
    /// Daily mean temperature (°C)
    pub avg_temp: Option<Prediction>,
    /// Daily maximum temperature (°C)
    pub max_temp: Option<Prediction>,
    /// Daily minimum temperature (°C)
    pub min_temp: Option<Prediction>,
    pub condition: WeatherCondition,
    /// Number of historical days the report was computed from
    pub sample_count: usize,
}

impl ClimatologyReport {
    /// Compute every metric from the collected samples
    pub fn from_samples(samples: &DailySamples, options: &ReportOptions) -> Result<Self> {
        let thresholds = &options.thresholds;
        thresholds.validate()?;

        let mean_temps = samples.mean_temperatures();
        let max_temps = samples.max_temperatures();
        let min_temps = samples.min_temperatures();
        let rain_mm = samples.precipitation();

        let rain_chance = predict_probability(&thresholds.rain_days(samples));
        let heavy_rain_chance = predict_probability(&thresholds.heavy_rain_days(samples));
        let snow_chance = predict_probability(&thresholds.snow_days(samples));
        let heatwave_chance = predict_probability(&thresholds.heatwave_days(samples));

        let avg_rainfall = if rain_mm.is_empty() {
            None
        } else {
            Some(predict_rainfall(&rain_mm)?)
        };

        let summarize = |series: &[f64]| match options.temperature {
            TemperatureSummary::MeanRange => predict_mean_range(series),
            TemperatureSummary::Quantile => predict_continuous(series),
        };
        let avg_temp = summarize(&mean_temps)?;
        let max_temp = summarize(&max_temps)?;
        let min_temp = summarize(&min_temps)?;

        let condition = Self::condition_for(&mean_temps, &max_temps, rain_chance);

        debug!(
            days = samples.len(),
            %condition,
            rain = ?rain_chance.map(|p| p.point),
            "computed climatology report"
        );

        Ok(Self {
            rain_chance,
            heavy_rain_chance,
            snow_chance,
            heatwave_chance,
            avg_rainfall,
            avg_temp,
            max_temp,
            min_temp,
            condition,
            sample_count: samples.len(),
        })
    }

    /// Condition from whole-degree averages, independent of the summary option
    fn condition_for(
        mean_temps: &[f64],
        max_temps: &[f64],
        rain_chance: Option<Prediction>,
    ) -> WeatherCondition {
        match (whole_degree_mean(mean_temps), whole_degree_mean(max_temps)) {
            (Some(mean), Some(max)) => {
                let chance = rain_chance.map_or(0.0, |p| p.point);
                classify_condition(mean, max, chance)
            }
            _ => WeatherCondition::default(),
        }
    }

    /// True when no day contributed to any metric
    pub fn is_empty(&self) -> bool {
        self.sample_count == 0
    }

    /// Verbal rain likelihood, if a rain chance exists
    pub fn rain_likelihood(&self) -> Option<Likelihood> {
        self.rain_chance.map(|p| Likelihood::from_percent(p.point))
    }

    /// Verbal snow likelihood, if a snow chance exists
    pub fn snow_likelihood(&self) -> Option<Likelihood> {
        self.snow_chance.map(|p| Likelihood::from_percent(p.point))
    }
}

/// Arithmetic mean rounded half-up to a whole degree
fn whole_degree_mean(series: &[f64]) -> Option<f64> {
    if series.is_empty() {
        return None;
    }
    Some(round_half_up(series.iter().sum::<f64>() / series.len() as f64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clima_core::DailyObservation;

    fn winter_samples() -> DailySamples {
        DailySamples::from_observations(vec![
            DailyObservation::new(-2.0, -6.0, 1.0, 0.5),
            DailyObservation::new(-1.0, -4.0, 2.0, 3.0),
            DailyObservation::new(0.0, -3.0, 2.5, 0.0),
        ])
    }

    #[test]
    fn test_winter_is_snowy() {
        let report = ClimatologyReport::from_samples(&winter_samples(), &ReportOptions::default()).unwrap();
        assert_eq!(report.condition, WeatherCondition::Snowy);
        assert_eq!(report.snow_chance.unwrap().point, 100.0);
        assert_eq!(report.heatwave_chance.unwrap(), Prediction::exact(0.0));
        assert_eq!(report.sample_count, 3);
        assert_eq!(report.rain_chance.unwrap().point, 33.0);
    }

    #[test]
    fn test_empty_samples_give_all_none() {
        let report = ClimatologyReport::from_samples(&DailySamples::new(), &ReportOptions::default()).unwrap();
        assert!(report.is_empty());
        assert_eq!(report.rain_chance, None);
        assert_eq!(report.heavy_rain_chance, None);
        assert_eq!(report.snow_chance, None);
        assert_eq!(report.heatwave_chance, None);
        assert_eq!(report.avg_rainfall, None);
        assert_eq!(report.avg_temp, None);
        assert_eq!(report.max_temp, None);
        assert_eq!(report.min_temp, None);
        assert_eq!(report.condition, WeatherCondition::Cloudy);
        assert_eq!(report.rain_likelihood(), None);
    }

    #[test]
    fn test_quantile_summary_option() {
        let opts = ReportOptions::default().with_temperature(TemperatureSummary::Quantile);
        let report = ClimatologyReport::from_samples(&winter_samples(), &opts).unwrap();
        let avg = report.avg_temp.unwrap();
        assert_eq!(avg.point, -1.0);
        // condition still uses means
        assert_eq!(report.condition, WeatherCondition::Snowy);
    }

    #[test]
    fn test_condition_uses_whole_degree_averages() {
        // mean 1.3 and max 2.8 round to 1 and 3, both on the snow boundary
        let samples = DailySamples::from_observations(vec![
            DailyObservation::new(1.0, -2.0, 2.0, 0.0),
            DailyObservation::new(1.2, -1.0, 3.0, 0.0),
            DailyObservation::new(1.7, -0.5, 3.4, 0.0),
        ]);
        let report = ClimatologyReport::from_samples(&samples, &ReportOptions::default()).unwrap();
        assert_eq!(report.avg_temp.unwrap().point, 1.3);
        assert_eq!(report.max_temp.unwrap().point, 2.8);
        assert_eq!(report.condition, WeatherCondition::Snowy);
    }

    #[test]
    fn test_negative_precipitation_does_not_fail_report() {
        let samples = DailySamples::from_observations(vec![
            DailyObservation::new(12.0, 8.0, 16.0, 3.0),
            DailyObservation::new(13.0, 9.0, 17.0, -0.01),
        ]);
        let report = ClimatologyReport::from_samples(&samples, &ReportOptions::default()).unwrap();
        assert_eq!(report.rain_chance.unwrap().point, 50.0);
        assert_eq!(report.avg_rainfall.unwrap().point, 1.5);
        assert_eq!(report.condition, WeatherCondition::Rainy);
    }

    #[test]
    fn test_rejects_invalid_thresholds() {
        let mut opts = ReportOptions::default();
        opts.thresholds.heavy_rain_mm = 1.0;
        assert!(ClimatologyReport::from_samples(&winter_samples(), &opts).is_err());
    }
}
