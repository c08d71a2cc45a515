//! Parallel collection of samples across previous years
//!
//! Each year is fetched on a dedicated rayon pool with one thread per year,
//! and answers are gathered over a channel until the overall timeout. A year
//! that fails, overruns the per-request timeout, or has not answered by the
//! overall deadline is dropped and logged; the caller never waits past the
//! deadline. The remaining years are concatenated newest first. Estimators
//! downstream cope with however few days survive.

use crate::config::AcquisitionConfig;
use crate::source::SampleSource;
use crate::window::{DayWindow, Location, WindowRequest};
use chrono::NaiveDate;
use clima_core::{DailySamples, Error, Result};
use std::collections::HashMap;
use std::sync::mpsc;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument, warn};

/// Outcome of one year's fetch
#[derive(Debug)]
struct YearFetch {
    year: i32,
    result: Result<DailySamples>,
    took: Duration,
    finished_at: Duration,
}

/// Summary of a collection run
#[derive(Debug, Clone, PartialEq)]
pub struct Collection {
    pub samples: DailySamples,
    /// Years whose samples made it into `samples`
    pub years_used: Vec<i32>,
    /// Years that failed or ran out of time
    pub years_dropped: Vec<i32>,
}

/// Collect the samples for `target` at `location` from the previous years
///
/// # Errors
/// * `Config` if `config` is invalid
/// * `InsufficientData` if no year contributed a single day
pub fn collect_samples<S: SampleSource + ?Sized + 'static>(
    source: &Arc<S>,
    location: Location,
    target: NaiveDate,
    config: &AcquisitionConfig,
) -> Result<DailySamples> {
    let collection = collect(source, location, target, config)?;
    if collection.samples.is_empty() {
        return Err(Error::InsufficientData {
            expected: 1,
            actual: 0,
        });
    }
    Ok(collection.samples)
}

/// Like [`collect_samples`], reporting which years were used
///
/// Returns within roughly `config.overall_timeout()` even when a source
/// hangs; the stuck fetch keeps running in the background and its answer is
/// discarded. An empty collection is returned as-is rather than as an error.
#[instrument(skip(source, config), fields(source = source.name()))]
pub fn collect<S: SampleSource + ?Sized + 'static>(
    source: &Arc<S>,
    location: Location,
    target: NaiveDate,
    config: &AcquisitionConfig,
) -> Result<Collection> {
    config.validate()?;
    let requests: Vec<WindowRequest> = DayWindow::previous_years(target, config)?
        .into_iter()
        .map(|window| WindowRequest {
            location,
            window,
            timeout: config.request_timeout(),
        })
        .collect();

    let mut fetches = fetch_until_deadline(source, &requests, config.overall_timeout())?;

    let mut collection = Collection {
        samples: DailySamples::new(),
        years_used: Vec::new(),
        years_dropped: Vec::new(),
    };
    for request in &requests {
        let year = request.year();
        let Some(fetch) = fetches.remove(&year) else {
            warn!(year, "no answer before overall timeout; dropped");
            collection.years_dropped.push(year);
            continue;
        };
        match accept(fetch, config) {
            Ok((year, batch)) => {
                debug!(year, days = batch.len(), "collected year");
                collection.samples.merge(batch);
                collection.years_used.push(year);
            }
            Err(year) => collection.years_dropped.push(year),
        }
    }

    info!(
        requested = config.years,
        used = collection.years_used.len(),
        days = collection.samples.len(),
        "collected climatology samples"
    );
    Ok(collection)
}

/// Run every request in parallel, keeping whatever answered by `deadline`
fn fetch_until_deadline<S: SampleSource + ?Sized + 'static>(
    source: &Arc<S>,
    requests: &[WindowRequest],
    deadline: Duration,
) -> Result<HashMap<i32, YearFetch>> {
    // One thread per year so a hung fetch cannot delay the others
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(requests.len())
        .thread_name(|i| format!("clima-fetch-{i}"))
        .panic_handler(|_| warn!("sample source panicked; year dropped"))
        .build()
        .map_err(|e| Error::Acquisition(format!("Failed to start fetch pool: {e}")))?;

    let started = Instant::now();
    let (tx, rx) = mpsc::channel();
    for &request in requests {
        let source = Arc::clone(source);
        let tx = tx.clone();
        pool.spawn(move || {
            let begun = Instant::now();
            let result = source.fetch(&request);
            // the receiver is gone once the deadline has passed
            let _ = tx.send(YearFetch {
                year: request.year(),
                result,
                took: begun.elapsed(),
                finished_at: started.elapsed(),
            });
        });
    }
    drop(tx);

    let deadline = started + deadline;
    let mut fetches = HashMap::with_capacity(requests.len());
    while fetches.len() < requests.len() {
        let remaining = deadline.saturating_duration_since(Instant::now());
        match rx.recv_timeout(remaining) {
            Ok(fetch) => {
                fetches.insert(fetch.year, fetch);
            }
            Err(mpsc::RecvTimeoutError::Timeout) => break,
            // every sender finished or panicked
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }
    Ok(fetches)
}

/// Keep a fetch only if it succeeded within both timeouts
fn accept(
    fetch: YearFetch,
    config: &AcquisitionConfig,
) -> std::result::Result<(i32, DailySamples), i32> {
    let year = fetch.year;
    match fetch.result {
        Err(e) => {
            warn!(year, error = %e, "failed to fetch year; skipping");
            Err(year)
        }
        Ok(_) if fetch.took > config.request_timeout() => {
            warn!(
                year,
                took_ms = fetch.took.as_millis() as u64,
                "year exceeded request timeout; dropped"
            );
            Err(year)
        }
        Ok(_) if fetch.finished_at > config.overall_timeout() => {
            warn!(
                year,
                finished_ms = fetch.finished_at.as_millis() as u64,
                "year arrived after overall timeout; dropped"
            );
            Err(year)
        }
        Ok(batch) => Ok((year, batch)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::InMemorySource;
    use clima_core::DailyObservation;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn year_of(mean: f64) -> DailySamples {
        (0..3)
            .map(|i| DailyObservation::new(mean + i as f64, mean - 5.0, mean + 5.0, 0.0))
            .collect()
    }

    fn three_years() -> InMemorySource {
        InMemorySource::new()
            .with_year(2024, year_of(24.0))
            .with_year(2023, year_of(23.0))
            .with_year(2022, year_of(20.0))
    }

    fn sydney() -> Location {
        Location::new(-33.87, 151.21).unwrap()
    }

    #[test]
    fn test_all_years_merged_newest_first() {
        let source = Arc::new(three_years());
        let samples =
            collect_samples(&source, sydney(), date(2025, 12, 25), &AcquisitionConfig::default()).unwrap();
        assert_eq!(samples.len(), 9);
        assert_eq!(samples.mean_temperatures()[0], 24.0);
        assert_eq!(samples.mean_temperatures()[8], 22.0);
    }

    #[test]
    fn test_failed_year_is_skipped() {
        let source = Arc::new(
            InMemorySource::new()
                .with_year(2024, year_of(24.0))
                .with_failure(2023, "HTTP 503")
                .with_year(2022, year_of(22.0)),
        );
        let collection = collect(&source, sydney(), date(2025, 12, 25), &AcquisitionConfig::default()).unwrap();
        assert_eq!(collection.years_used, vec![2024, 2022]);
        assert_eq!(collection.years_dropped, vec![2023]);
        assert_eq!(collection.samples.len(), 6);
    }

    #[test]
    fn test_no_year_is_insufficient_data() {
        let source = Arc::new(InMemorySource::new().with_failure(2024, "down"));
        let err = collect_samples(&source, sydney(), date(2025, 6, 1), &AcquisitionConfig::default());
        assert!(matches!(err, Err(Error::InsufficientData { .. })));
    }

    #[test]
    fn test_slow_year_exceeds_request_timeout() {
        let config = AcquisitionConfig {
            request_timeout_ms: 20,
            overall_timeout_ms: 5_000,
            ..Default::default()
        };
        let source = Arc::new(three_years().with_delay(2023, Duration::from_millis(200)));
        let collection = collect(&source, sydney(), date(2025, 12, 25), &config).unwrap();
        assert_eq!(collection.years_dropped, vec![2023]);
        assert_eq!(collection.samples.len(), 6);
    }

    #[test]
    fn test_hung_year_does_not_block_past_deadline() {
        let config = AcquisitionConfig {
            years: 2,
            request_timeout_ms: 100,
            overall_timeout_ms: 200,
            ..Default::default()
        };
        let source = Arc::new(
            InMemorySource::new()
                .with_year(2025, year_of(10.0))
                .with_year(2024, year_of(11.0))
                .with_delay(2024, Duration::from_secs(3)),
        );

        let started = Instant::now();
        let collection = collect(&source, sydney(), date(2026, 4, 2), &config).unwrap();
        let elapsed = started.elapsed();

        assert!(elapsed < Duration::from_secs(1), "collect took {elapsed:?}");
        assert_eq!(collection.years_used, vec![2025]);
        assert_eq!(collection.years_dropped, vec![2024]);
    }

    #[test]
    fn test_panicking_source_drops_year() {
        let source = Arc::new(|request: &WindowRequest| -> Result<DailySamples> {
            if request.year() == 2023 {
                panic!("provider client crashed");
            }
            Ok(year_of(15.0))
        });
        let collection = collect(&source, sydney(), date(2025, 3, 1), &AcquisitionConfig::default()).unwrap();
        assert_eq!(collection.years_used, vec![2024, 2022]);
        assert_eq!(collection.years_dropped, vec![2023]);
    }

    #[test]
    fn test_closure_source_sees_request() {
        let source = Arc::new(|request: &WindowRequest| -> Result<DailySamples> {
            if request.window.len() != 3 || request.timeout != Duration::from_secs(5) {
                return Err(Error::Acquisition("unexpected request".to_string()));
            }
            Ok(year_of(request.year() as f64 / 100.0))
        });
        let collection = collect(&source, sydney(), date(2025, 3, 1), &AcquisitionConfig::default()).unwrap();
        assert_eq!(collection.years_used, vec![2024, 2023, 2022]);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = AcquisitionConfig {
            years: 0,
            ..Default::default()
        };
        let source = Arc::new(three_years());
        assert!(matches!(
            collect(&source, sydney(), date(2025, 3, 1), &config),
            Err(Error::Config(_))
        ));
    }
}
