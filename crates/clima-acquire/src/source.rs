//! Sources of historical daily samples

use crate::window::WindowRequest;
use clima_core::{DailySamples, Error, Result};
use std::collections::HashMap;
use std::time::Duration;

/// Anything that can return one year's daily samples for a window
///
/// Implementations are called concurrently, one call per year, and should
/// give up once `request.timeout` has elapsed.
pub trait SampleSource: Send + Sync {
    fn fetch(&self, request: &WindowRequest) -> Result<DailySamples>;

    /// Name used in log output
    fn name(&self) -> &str {
        "sample source"
    }
}

impl<F> SampleSource for F
where
    F: Fn(&WindowRequest) -> Result<DailySamples> + Send + Sync,
{
    fn fetch(&self, request: &WindowRequest) -> Result<DailySamples> {
        self(request)
    }

    fn name(&self) -> &str {
        "closure source"
    }
}

/// Source serving pre-recorded samples keyed by year
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    years: HashMap<i32, std::result::Result<DailySamples, String>>,
    delays: HashMap<i32, Duration>,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `samples` for `year`
    pub fn with_year(mut self, year: i32, samples: DailySamples) -> Self {
        self.years.insert(year, Ok(samples));
        self
    }

    /// Fail every fetch for `year` with `message`
    pub fn with_failure(mut self, year: i32, message: impl Into<String>) -> Self {
        self.years.insert(year, Err(message.into()));
        self
    }

    /// Block for `delay` before answering for `year`
    pub fn with_delay(mut self, year: i32, delay: Duration) -> Self {
        self.delays.insert(year, delay);
        self
    }
}

impl SampleSource for InMemorySource {
    fn fetch(&self, request: &WindowRequest) -> Result<DailySamples> {
        let year = request.year();
        if let Some(delay) = self.delays.get(&year) {
            std::thread::sleep(*delay);
        }
        match self.years.get(&year) {
            Some(Ok(samples)) => Ok(samples.clone()),
            Some(Err(message)) => Err(Error::Acquisition(format!("year {year}: {message}"))),
            None => Err(Error::Acquisition(format!("no data recorded for year {year}"))),
        }
    }

    fn name(&self) -> &str {
        "in-memory source"
    }
}
