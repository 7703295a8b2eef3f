//! On-demand city data loading
//!
//! The orchestrator runs at most one collection per process:
//! - A request is accepted only when nothing is loading and the city is not
//!   already displayed (unless `force_refresh` is set)
//! - The accepted load runs as a task on the runtime and reports progress
//!   into the shared `StatusBoard`
//! - Any failure (error, timeout, panic, empty result) ends in synthetic data,
//!   so every attempt leaves something displayable
//! - `cancel()` aborts the task and returns to idle, keeping the previous result

mod job;

use crate::domain::location::{LoadOutcome, LoadProgress};
use crate::domain::types::CityId;
use crate::infra::config::Config;
use crate::infra::metrics::Metrics;
use crate::io::collector::Collector;
use crate::io::store::ConfigStore;
use crate::services::status::{LoadStatus, StatusBoard};
use crate::services::synthetic::SyntheticFallback;
use job::LoadJob;
use parking_lot::{Mutex, RwLock};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info};

pub const CANCELLED_MESSAGE: &str = "load cancelled";

/// A presentation-side request to show a city's data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadRequest {
    pub city_id: CityId,
    pub force_refresh: bool,
}

impl LoadRequest {
    pub fn new(city_id: impl Into<CityId>) -> Self {
        Self { city_id: city_id.into(), force_refresh: false }
    }

    pub fn force_refresh(mut self) -> Self {
        self.force_refresh = true;
        self
    }
}

/// What happened to a load request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestOutcome {
    /// A worker was started for this epoch
    Started { epoch: u64 },
    /// Ignored: a load for `city_id` is in flight
    AlreadyLoading { city_id: CityId },
    /// Ignored: this city's data is already displayed
    AlreadyLoaded,
}

impl RequestOutcome {
    pub fn is_started(&self) -> bool {
        matches!(self, Self::Started { .. })
    }
}

#[derive(Debug, Clone)]
pub struct LoaderSettings {
    /// `None` waits for the collector indefinitely
    pub collection_timeout: Option<Duration>,
    pub synthetic_rows: usize,
    pub poll_interval: Duration,
}

impl Default for LoaderSettings {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl LoaderSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            collection_timeout: config.collection_timeout(),
            synthetic_rows: config.synthetic_rows(),
            poll_interval: config.poll_interval(),
        }
    }
}

/// Handle to the in-flight worker task
struct ActiveTask {
    epoch: u64,
    handle: JoinHandle<()>,
}

/// Coordinates background loads and owns the shared status
pub struct LoadOrchestrator {
    store: Arc<RwLock<ConfigStore>>,
    collector: Arc<dyn Collector>,
    settings: LoaderSettings,
    fallback: SyntheticFallback,
    metrics: Arc<Metrics>,
    board: StatusBoard,
    runtime: Handle,
    active: Mutex<Option<ActiveTask>>,
}

impl LoadOrchestrator {
    pub fn new(
        store: Arc<RwLock<ConfigStore>>,
        collector: Arc<dyn Collector>,
        settings: LoaderSettings,
        metrics: Arc<Metrics>,
        runtime: Handle,
    ) -> Self {
        let fallback = SyntheticFallback::new(settings.synthetic_rows);
        Self {
            store,
            collector,
            settings,
            fallback,
            metrics,
            board: StatusBoard::new(),
            runtime,
            active: Mutex::new(None),
        }
    }

    pub fn settings(&self) -> &LoaderSettings {
        &self.settings
    }

    pub fn metrics(&self) -> &Arc<Metrics> {
        &self.metrics
    }

    /// Current status snapshot
    pub fn snapshot(&self) -> Arc<LoadStatus> {
        self.board.snapshot()
    }

    pub fn subscribe(&self) -> watch::Receiver<Arc<LoadStatus>> {
        self.board.subscribe()
    }

    /// Accept or ignore a load request. Never blocks on the worker.
    pub fn request_load(&self, request: LoadRequest) -> RequestOutcome {
        self.metrics.record_request();

        // Held until the new task is recorded so `cancel` always finds it
        let mut active = self.active.lock();
        let outcome = self.board.update(|current| {
            if current.loading {
                let city_id = current.city_id.clone().unwrap_or_else(|| request.city_id.clone());
                return (None, RequestOutcome::AlreadyLoading { city_id });
            }
            if !request.force_refresh && current.is_loaded(&request.city_id) {
                return (None, RequestOutcome::AlreadyLoaded);
            }

            let epoch = current.epoch + 1;
            let next = LoadStatus {
                epoch,
                loading: true,
                city_id: Some(request.city_id.clone()),
                force_refresh: request.force_refresh,
                progress: Some(LoadProgress::new(0.0, "Starting")),
                result: current.result.clone(),
                last_outcome: current.last_outcome,
                last_error: None,
            };
            (Some(next), RequestOutcome::Started { epoch })
        });

        match &outcome {
            RequestOutcome::Started { epoch } => {
                self.metrics.record_load_started();
                self.spawn_job(&mut active, *epoch, request);
            }
            RequestOutcome::AlreadyLoading { city_id } => {
                self.metrics.record_ignored_while_loading();
                info!(
                    requested = %request.city_id,
                    loading = %city_id,
                    "load_request_ignored_already_loading"
                );
            }
            RequestOutcome::AlreadyLoaded => {
                self.metrics.record_already_loaded();
                debug!(city_id = %request.city_id, "load_request_already_loaded");
            }
        }
        outcome
    }

    fn spawn_job(&self, active: &mut Option<ActiveTask>, epoch: u64, request: LoadRequest) {
        let job = LoadJob {
            epoch,
            request,
            store: self.store.clone(),
            collector: self.collector.clone(),
            fallback: self.fallback.clone(),
            timeout: self.settings.collection_timeout,
            board: self.board.clone(),
            metrics: self.metrics.clone(),
        };
        let handle = self.runtime.spawn(job.run());

        if let Some(previous) = active.take() {
            // Already finished or superseded; its writes are discarded by epoch
            previous.handle.abort();
        }
        *active = Some(ActiveTask { epoch, handle });
    }

    /// Abort the in-flight load, if any. The previous result stays displayed.
    pub fn cancel(&self) -> bool {
        let mut active = self.active.lock();
        let cancelled = self.board.update(|current| {
            if !current.loading {
                return (None, None);
            }
            let next = LoadStatus {
                epoch: current.epoch + 1,
                loading: false,
                progress: None,
                last_outcome: Some(LoadOutcome::Cancelled),
                last_error: Some(CANCELLED_MESSAGE.to_string()),
                ..current.clone()
            };
            (Some(next), Some((current.epoch, current.city_id.clone())))
        });

        let Some((epoch, city_id)) = cancelled else {
            return false;
        };

        if let Some(task) = active.take() {
            if task.epoch == epoch {
                task.handle.abort();
            }
        }
        drop(active);
        self.metrics.record_load_finished(LoadOutcome::Cancelled, 0);
        info!(
            city_id = %city_id.as_ref().map(CityId::as_str).unwrap_or("-"),
            epoch = %epoch,
            "load_cancelled"
        );
        true
    }

    /// Resolves once no load is in flight, returning that snapshot
    pub async fn wait_until_idle(&self) -> Arc<LoadStatus> {
        let mut rx = self.board.subscribe();
        let status = match rx.wait_for(|status| !status.loading).await {
            Ok(status) => status.clone(),
            // The board owns the sender, so it cannot close while `self` lives
            Err(_) => self.board.snapshot(),
        };
        status
    }
}
