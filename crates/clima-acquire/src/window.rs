//! Locations and per-year day windows

use crate::config::AcquisitionConfig;
use chrono::{Datelike, Days, NaiveDate};
use clima_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A point on the globe in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(Error::InvalidParameter(format!(
                "Latitude {latitude} must be in [-90, 90]"
            )));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(Error::InvalidParameter(format!(
                "Longitude {longitude} must be in [-180, 180]"
            )));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }
}

/// Inclusive range of calendar days within one historical year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayWindow {
    pub year: i32,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DayWindow {
    /// Window of `radius` days either side of `target`'s anniversary in `year`
    ///
    /// A Feb 29 target falls back to Feb 28 in non-leap years.
    pub fn around(target: NaiveDate, year: i32, radius: u32) -> Result<Self> {
        let anniversary = NaiveDate::from_ymd_opt(year, target.month(), target.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, target.month(), target.day() - 1))
            .ok_or_else(|| {
                Error::InvalidInput(format!("No anniversary of {target} in year {year}"))
            })?;
        let radius = Days::new(u64::from(radius));
        let out_of_range = || Error::InvalidInput(format!("Window around {anniversary} overflows"));
        Ok(Self {
            year,
            start: anniversary.checked_sub_days(radius).ok_or_else(out_of_range)?,
            end: anniversary.checked_add_days(radius).ok_or_else(out_of_range)?,
        })
    }

    /// Windows for each of the `config.years` years before `target`, newest first
    pub fn previous_years(target: NaiveDate, config: &AcquisitionConfig) -> Result<Vec<Self>> {
        (1..=config.years as i32)
            .map(|back| Self::around(target, target.year() - back, config.window_radius_days))
            .collect()
    }

    /// Days in the window, in order
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.start.iter_days().take_while(move |d| *d <= self.end)
    }

    pub fn len(&self) -> usize {
        (self.end - self.start).num_days() as usize + 1
    }

    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }
}

/// One year's fetch as handed to a [`SampleSource`](crate::SampleSource)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowRequest {
    pub location: Location,
    pub window: DayWindow,
    /// Budget the source should respect for this fetch
    pub timeout: Duration,
}

impl WindowRequest {
    pub fn year(&self) -> i32 {
        self.window.year
    }
}
