//! Shared load status
//!
//! The presentation side polls an immutable `LoadStatus` snapshot. Every
//! change swaps in a whole new snapshot, so readers never see a half-updated
//! record. Each accepted load request bumps the epoch; writes tagged with an
//! older epoch come from a superseded worker and are discarded.

use crate::domain::location::{CityData, LoadOutcome, LoadProgress};
use crate::domain::types::CityId;
use parking_lot::Mutex;
use std::sync::Arc;
use tokio::sync::watch;

/// Coarse orchestrator state. `Ready` and `Fallback` are transient: a
/// finished load publishes its result and returns to `Idle` in one update,
/// so they show up as `last_outcome` rather than as a phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    Idle,
    Loading,
}

/// Read-only snapshot polled by the presentation layer
#[derive(Debug, Clone, Default)]
pub struct LoadStatus {
    /// Incremented for every accepted request and every cancellation
    pub epoch: u64,
    pub loading: bool,
    /// City of the in-flight load, or of the last one attempted
    pub city_id: Option<CityId>,
    pub force_refresh: bool,
    /// Present only while loading
    pub progress: Option<LoadProgress>,
    /// Current city data. Kept while a new load runs.
    pub result: Option<Arc<CityData>>,
    pub last_outcome: Option<LoadOutcome>,
    /// Collection failure or cancellation behind the last outcome
    pub last_error: Option<String>,
}

impl LoadStatus {
    pub fn phase(&self) -> LoadPhase {
        if self.loading {
            LoadPhase::Loading
        } else {
            LoadPhase::Idle
        }
    }

    /// City whose data is currently displayed
    pub fn loaded_city(&self) -> Option<&CityId> {
        self.result.as_ref().map(|data| &data.city_id)
    }

    pub fn is_loaded(&self, city_id: &CityId) -> bool {
        self.loaded_city() == Some(city_id)
    }
}

/// Single-writer, multi-reader slot holding the current `LoadStatus`
#[derive(Debug, Clone)]
pub struct StatusBoard {
    tx: Arc<watch::Sender<Arc<LoadStatus>>>,
    /// Serializes read-modify-publish cycles
    write_lock: Arc<Mutex<()>>,
}

impl Default for StatusBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusBoard {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(Arc::new(LoadStatus::default()));
        Self { tx: Arc::new(tx), write_lock: Arc::new(Mutex::new(())) }
    }

    pub fn snapshot(&self) -> Arc<LoadStatus> {
        self.tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Arc<LoadStatus>> {
        self.tx.subscribe()
    }

    /// Atomically derive the next snapshot from the current one.
    ///
    /// `f` returns the replacement (or `None` to leave the snapshot as is)
    /// plus a value handed back to the caller. No other writer can run
    /// between reading the current snapshot and publishing the next.
    pub fn update<R>(&self, f: impl FnOnce(&LoadStatus) -> (Option<LoadStatus>, R)) -> R {
        let _writer = self.write_lock.lock();
        let current = self.tx.borrow().clone();
        let (next, value) = f(&current);
        if let Some(next) = next {
            self.tx.send_replace(Arc::new(next));
        }
        value
    }

    /// Publish progress for `epoch`. Returns false for stale or idle writers.
    pub fn report_progress(&self, epoch: u64, progress: LoadProgress) -> bool {
        self.update(|current| {
            if current.epoch != epoch || !current.loading {
                return (None, false);
            }
            let next = LoadStatus { progress: Some(progress), ..current.clone() };
            (Some(next), true)
        })
    }

    /// Publish the result of load `epoch` and return to idle.
    /// Returns false when a newer request or a cancellation superseded it.
    pub fn finish(
        &self,
        epoch: u64,
        data: CityData,
        outcome: LoadOutcome,
        error: Option<String>,
    ) -> bool {
        self.update(|current| {
            if current.epoch != epoch || !current.loading {
                return (None, false);
            }
            let next = LoadStatus {
                loading: false,
                progress: None,
                result: Some(Arc::new(data)),
                last_outcome: Some(outcome),
                last_error: error,
                ..current.clone()
            };
            (Some(next), true)
        })
    }
}
