//! External location data collection interface
//!
//! A `Collector` gathers scored locations for one city (census, competitor
//! and traffic lookups live behind it). The orchestrator only sees this trait
//! plus a progress callback.

use crate::domain::city::CityConfiguration;
use crate::domain::location::{CollectedData, LoadProgress};
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Why a collection run produced no usable data
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CollectionError {
    #[error("collection failed: {0}")]
    Failed(String),

    #[error("collection timed out after {}s", .0.as_secs())]
    TimedOut(Duration),

    #[error("collection returned no locations")]
    Empty,

    #[error("collector panicked: {0}")]
    Panicked(String),

    #[error("data loader not available")]
    Unavailable,
}

/// Progress sink handed to a collector for the duration of one run
#[derive(Clone)]
pub struct ProgressReporter {
    sink: Arc<dyn Fn(LoadProgress) + Send + Sync>,
}

impl ProgressReporter {
    pub fn new<F>(sink: F) -> Self
    where
        F: Fn(LoadProgress) + Send + Sync + 'static,
    {
        Self { sink: Arc::new(sink) }
    }

    /// Reporter that drops every update
    pub fn noop() -> Self {
        Self::new(|_| {})
    }

    #[inline]
    pub fn report(&self, progress: LoadProgress) {
        (self.sink)(progress)
    }
}

impl fmt::Debug for ProgressReporter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ProgressReporter")
    }
}

/// Source of real location data for a city
#[async_trait]
pub trait Collector: Send + Sync {
    /// Collect scored locations for `config`, reporting progress as it goes.
    ///
    /// `force_refresh` asks the collector to bypass any cache it keeps.
    async fn collect(
        &self,
        config: &CityConfiguration,
        progress: ProgressReporter,
        force_refresh: bool,
    ) -> Result<CollectedData, CollectionError>;
}

/// Collector used when no collection backend is wired in.
/// Every load ends in the synthetic fallback.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableCollector;

#[async_trait]
impl Collector for UnavailableCollector {
    async fn collect(
        &self,
        _config: &CityConfiguration,
        _progress: ProgressReporter,
        _force_refresh: bool,
    ) -> Result<CollectedData, CollectionError> {
        Err(CollectionError::Unavailable)
    }
}
