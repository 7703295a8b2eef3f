//! One background load: collect, fall back on failure, publish

use crate::domain::city::CityConfiguration;
use crate::domain::location::{CityData, CollectedData, LoadOutcome};
use crate::infra::metrics::Metrics;
use crate::io::collector::{CollectionError, Collector, ProgressReporter};
use crate::io::store::ConfigStore;
use crate::services::orchestrator::LoadRequest;
use crate::services::status::StatusBoard;
use crate::services::synthetic::SyntheticFallback;
use parking_lot::RwLock;
use std::any::Any;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Aborts the wrapped task when dropped (timeout or outer cancellation)
struct AbortOnDrop<T>(JoinHandle<T>);

impl<T> Drop for AbortOnDrop<T> {
    fn drop(&mut self) {
        self.0.abort();
    }
}

pub(super) struct LoadJob {
    pub(super) epoch: u64,
    pub(super) request: LoadRequest,
    pub(super) store: Arc<RwLock<ConfigStore>>,
    pub(super) collector: Arc<dyn Collector>,
    pub(super) fallback: SyntheticFallback,
    pub(super) timeout: Option<Duration>,
    pub(super) board: StatusBoard,
    pub(super) metrics: Arc<Metrics>,
}

impl LoadJob {
    pub(super) async fn run(self) {
        let started = Instant::now();
        let city_id = self.request.city_id.clone();
        info!(
            city_id = %city_id,
            epoch = %self.epoch,
            force_refresh = %self.request.force_refresh,
            "load_started"
        );

        let config = self.store.read().get(city_id.as_str()).cloned();
        let collected = match &config {
            Some(config) => self.collect(config).await,
            None => Err(CollectionError::Failed(format!("no configuration for {}", city_id))),
        };

        let (data, outcome, error) = match (collected, config) {
            (Ok(collected), Some(config)) if !collected.locations.is_empty() => {
                let data = CityData {
                    city_id: city_id.clone(),
                    locations: collected.locations,
                    metadata: collected.metadata,
                    source_config: config,
                };
                (data, LoadOutcome::Ready, None)
            }
            (result, config) => {
                let error = match result {
                    Ok(_) => CollectionError::Empty,
                    Err(e) => e,
                };
                warn!(city_id = %city_id, error = %error, "collection_failed_using_synthetic");
                let display_name = config.as_ref().map(|c| c.display_name.as_str());
                let data = self.fallback.generate(&city_id, display_name, Some(error.to_string()));
                (data, LoadOutcome::Fallback, Some(error.to_string()))
            }
        };

        let rows = data.locations.len();
        let elapsed_ms = started.elapsed().as_millis() as u64;
        if self.board.finish(self.epoch, data, outcome, error) {
            self.metrics.record_load_finished(outcome, elapsed_ms);
            info!(
                city_id = %city_id,
                epoch = %self.epoch,
                outcome = %outcome.as_str(),
                rows = %rows,
                elapsed_ms = %elapsed_ms,
                "load_finished"
            );
        } else {
            self.metrics.record_stale_discarded();
            debug!(city_id = %city_id, epoch = %self.epoch, "load_result_stale");
        }
    }

    /// Run the collector in its own task so a panic or timeout becomes a
    /// `CollectionError` instead of tearing down the job
    async fn collect(&self, config: &CityConfiguration) -> Result<CollectedData, CollectionError> {
        let board = self.board.clone();
        let epoch = self.epoch;
        let reporter = ProgressReporter::new(move |progress| {
            board.report_progress(epoch, progress.clamped());
        });

        let collector = self.collector.clone();
        let config = config.clone();
        let force_refresh = self.request.force_refresh;
        let mut task = AbortOnDrop(tokio::spawn(async move {
            collector.collect(&config, reporter, force_refresh).await
        }));

        let joined = match self.timeout {
            Some(limit) => match tokio::time::timeout(limit, &mut task.0).await {
                Ok(joined) => joined,
                Err(_) => return Err(CollectionError::TimedOut(limit)),
            },
            None => (&mut task.0).await,
        };

        match joined {
            Ok(result) => result,
            Err(e) if e.is_panic() => Err(CollectionError::Panicked(panic_message(e.into_panic()))),
            Err(e) => Err(CollectionError::Failed(e.to_string())),
        }
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
