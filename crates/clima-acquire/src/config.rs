//! Acquisition configuration

use clima_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// How many years to sample and how long to wait for them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AcquisitionConfig {
    /// Number of previous years to sample
    pub years: u32,
    /// Days on each side of the target day (1 gives a 3-day window)
    pub window_radius_days: u32,
    /// Budget for a single year's fetch
    pub request_timeout_ms: u64,
    /// Budget for the whole collection
    pub overall_timeout_ms: u64,
}

impl Default for AcquisitionConfig {
    fn default() -> Self {
        Self {
            years: 3,
            window_radius_days: 1,
            request_timeout_ms: 5_000,
            overall_timeout_ms: 8_000,
        }
    }
}

impl AcquisitionConfig {
    /// Parse from JSON; missing fields take their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| Error::Config(format!("Invalid acquisition config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.years == 0 {
            return Err(Error::Config("years must be at least 1".to_string()));
        }
        if self.request_timeout_ms == 0 || self.overall_timeout_ms == 0 {
            return Err(Error::Config("timeouts must be non-zero".to_string()));
        }
        if self.request_timeout_ms > self.overall_timeout_ms {
            return Err(Error::Config(format!(
                "request timeout ({} ms) exceeds overall timeout ({} ms)",
                self.request_timeout_ms, self.overall_timeout_ms
            )));
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    pub fn overall_timeout(&self) -> Duration {
        Duration::from_millis(self.overall_timeout_ms)
    }

    /// Days per year in the window
    pub fn window_len(&self) -> u32 {
        2 * self.window_radius_days + 1
    }
}
