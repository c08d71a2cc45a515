//! Configuration types for outcome derivation and reporting
//!
//! The estimators themselves take no configuration; these types only govern
//! how daily samples are thresholded into outcomes and which temperature
//! summary a report carries.

use clima_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Thresholds that turn daily samples into binary outcomes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutcomeThresholds {
    /// A rain day has strictly more precipitation than this (mm)
    pub rain_mm: f64,
    /// A heavy-rain day has strictly more precipitation than this (mm)
    pub heavy_rain_mm: f64,
    /// Snow requires a mean temperature at or below this (°C)
    pub snow_mean_c: f64,
    /// Snow also requires a maximum temperature at or below this (°C)
    pub snow_max_c: f64,
    /// A heatwave day reaches at least this maximum temperature (°C)
    pub heatwave_max_c: f64,
}

impl Default for OutcomeThresholds {
    fn default() -> Self {
        Self {
            rain_mm: 2.0,
            heavy_rain_mm: 7.6,
            snow_mean_c: 1.0,
            snow_max_c: 3.0,
            heatwave_max_c: 38.0,
        }
    }
}

impl OutcomeThresholds {
    /// Parse from JSON; missing fields take their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let thresholds: Self = serde_json::from_str(json)
            .map_err(|e| Error::Config(format!("Invalid outcome thresholds: {e}")))?;
        thresholds.validate()?;
        Ok(thresholds)
    }

    /// Check that every threshold is finite and rain thresholds are ordered
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("rain_mm", self.rain_mm),
            ("heavy_rain_mm", self.heavy_rain_mm),
            ("snow_mean_c", self.snow_mean_c),
            ("snow_max_c", self.snow_max_c),
            ("heatwave_max_c", self.heatwave_max_c),
        ];
        if let Some((name, value)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(Error::Config(format!("{name} must be finite, got {value}")));
        }
        if self.rain_mm < 0.0 {
            return Err(Error::Config(format!(
                "rain_mm must be non-negative, got {}",
                self.rain_mm
            )));
        }
        if self.heavy_rain_mm < self.rain_mm {
            return Err(Error::Config(format!(
                "heavy_rain_mm ({}) must not be below rain_mm ({})",
                self.heavy_rain_mm, self.rain_mm
            )));
        }
        Ok(())
    }
}

/// How a report summarizes each temperature series
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemperatureSummary {
    /// Mean with the observed min..max range
    #[default]
    MeanRange,
    /// Median with the p10..p90 range
    Quantile,
}

/// Options for building a report
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportOptions {
    pub temperature: TemperatureSummary,
    pub thresholds: OutcomeThresholds,
}

impl ReportOptions {
    pub fn with_temperature(mut self, temperature: TemperatureSummary) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_thresholds(mut self, thresholds: OutcomeThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }
}
