//! Categorical weather condition

use clima_core::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Mean temperature at or below which a day can be snowy (°C)
pub const SNOW_MEAN_C: f64 = 1.0;
/// Maximum temperature at or below which a day can be snowy (°C)
pub const SNOW_MAX_C: f64 = 3.0;
/// Rain chance (%) from which the condition is rainy
pub const RAINY_CHANCE: f64 = 50.0;
/// Rain chance (%) from which the condition is cloudy
pub const CLOUDY_CHANCE: f64 = 20.0;

/// Weather condition used to pick an icon or theme
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherCondition {
    Sunny,
    Rainy,
    #[default]
    Cloudy,
    Snowy,
    /// Only reachable by explicit choice; the classifier never produces it
    Windy,
}

impl WeatherCondition {
    pub const ALL: [Self; 5] = [
        Self::Sunny,
        Self::Rainy,
        Self::Cloudy,
        Self::Snowy,
        Self::Windy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sunny => "sunny",
            Self::Rainy => "rainy",
            Self::Cloudy => "cloudy",
            Self::Snowy => "snowy",
            Self::Windy => "windy",
        }
    }
}

impl fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WeatherCondition {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::InvalidInput(format!("Unknown weather condition '{s}'")))
    }
}

/// Classify aggregate temperatures and rain chance into a condition
///
/// Checks run in fixed priority, first match wins:
/// snowy (cold mean and max), rainy (≥ 50 %), cloudy (≥ 20 %), else sunny.
pub fn classify_condition(mean_temp: f64, max_temp: f64, rain_chance: f64) -> WeatherCondition {
    if mean_temp <= SNOW_MEAN_C && max_temp <= SNOW_MAX_C {
        WeatherCondition::Snowy
    } else if rain_chance >= RAINY_CHANCE {
        WeatherCondition::Rainy
    } else if rain_chance >= CLOUDY_CHANCE {
        WeatherCondition::Cloudy
    } else {
        WeatherCondition::Sunny
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classifier_cases() {
        assert_eq!(classify_condition(0.0, 2.0, 10.0), WeatherCondition::Snowy);
        assert_eq!(classify_condition(20.0, 28.0, 60.0), WeatherCondition::Rainy);
        assert_eq!(classify_condition(20.0, 28.0, 30.0), WeatherCondition::Cloudy);
        assert_eq!(classify_condition(25.0, 32.0, 5.0), WeatherCondition::Sunny);
    }

    #[test]
    fn test_snow_wins_over_rain() {
        assert_eq!(classify_condition(-3.0, 0.0, 90.0), WeatherCondition::Snowy);
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(classify_condition(1.0, 3.0, 0.0), WeatherCondition::Snowy);
        assert_eq!(classify_condition(1.0, 3.1, 0.0), WeatherCondition::Sunny);
        assert_eq!(classify_condition(10.0, 15.0, 50.0), WeatherCondition::Rainy);
        assert_eq!(classify_condition(10.0, 15.0, 49.0), WeatherCondition::Cloudy);
        assert_eq!(classify_condition(10.0, 15.0, 20.0), WeatherCondition::Cloudy);
        assert_eq!(classify_condition(10.0, 15.0, 19.0), WeatherCondition::Sunny);
    }

    #[test]
    fn test_never_windy() {
        for mean in [-10.0, 0.0, 10.0, 30.0] {
            for chance in [0.0, 25.0, 75.0, 100.0] {
                assert_ne!(classify_condition(mean, mean + 5.0, chance), WeatherCondition::Windy);
            }
        }
    }

    #[test]
    fn test_parse_and_display() {
        for c in WeatherCondition::ALL {
            assert_eq!(c.to_string().parse::<WeatherCondition>().unwrap(), c);
        }
        assert_eq!(" Windy ".parse::<WeatherCondition>().unwrap(), WeatherCondition::Windy);
        assert!("foggy".parse::<WeatherCondition>().is_err());
        assert_eq!(WeatherCondition::default(), WeatherCondition::Cloudy);
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&WeatherCondition::Snowy).unwrap();
        assert_eq!(json, r#""snowy""#);
    }
}
