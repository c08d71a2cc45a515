//! Print a climatology report for a synthetic three-year window
//!
//! Run with `RUST_LOG=clima_predict=debug` to see the computation log.

use clima_core::{DailyObservation, DailySamples};
use clima_predict::{ClimatologyReport, ReportOptions};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // 3 years × 3 days around an early spring date
    let days = [
        (8.2, 3.1, 13.0, 0.0),
        (9.0, 4.4, 14.2, 5.8),
        (7.5, 2.0, 11.9, 9.3),
        (10.1, 5.2, 15.5, 0.2),
        (11.3, 6.0, 16.8, 0.0),
        (9.7, 4.9, 14.0, 2.6),
        (6.4, 1.2, 10.1, 0.0),
        (7.9, 2.8, 12.4, 1.1),
        (8.8, 3.5, 13.6, 0.0),
    ];
    let samples: DailySamples = days
        .iter()
        .map(|&(mean, min, max, rain)| DailyObservation::new(mean, min, max, rain))
        .collect();

    let report = ClimatologyReport::from_samples(&samples, &ReportOptions::default())?;

    println!("Condition: {}", report.condition);
    if let (Some(chance), Some(likelihood)) = (report.rain_chance, report.rain_likelihood()) {
        println!("Rain chance: {chance} % ({})", likelihood.describe_rain());
    }
    let rows = [
        ("Heavy rain chance (%)", report.heavy_rain_chance),
        ("Snow chance (%)", report.snow_chance),
        ("Heatwave chance (%)", report.heatwave_chance),
        ("Expected rainfall (mm)", report.avg_rainfall),
        ("Average temperature (°C)", report.avg_temp),
        ("Maximum temperature (°C)", report.max_temp),
        ("Minimum temperature (°C)", report.min_temp),
    ];
    for (label, value) in rows {
        match value {
            Some(p) => println!("{label}: {p}"),
            None => println!("{label}: insufficient data"),
        }
    }

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
