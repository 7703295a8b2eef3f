//! Lock-free load metrics and periodic reporting
//!
//! Counter updates are lock-free; `report()` swaps the periodic counters to
//! zero and is the only operation that takes a lock (for the report clock).
//!
//! NOTE: All atomics use Relaxed ordering. These are statistical counters
//! only and must not drive orchestration decisions.

use crate::domain::location::LoadOutcome;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;
use tracing::info;

/// Exponential load-duration bucket boundaries (milliseconds)
/// Buckets: ≤250, ≤500, ≤1000, ... ≤128000, >128000
const BUCKET_BOUNDS: [u64; 10] = [250, 500, 1000, 2000, 4000, 8000, 16000, 32000, 64000, 128000];
const NUM_BUCKETS: usize = 11;

/// Upper bound reported for each bucket (the overflow bucket uses 2x the last bound)
const BUCKET_UPPER_BOUNDS: [u64; NUM_BUCKETS] =
    [250, 500, 1000, 2000, 4000, 8000, 16000, 32000, 64000, 128000, 256000];

#[inline]
fn bucket_index(duration_ms: u64) -> usize {
    BUCKET_BOUNDS.partition_point(|&bound| bound < duration_ms)
}

/// Update an atomic max value using compare-and-swap loop
#[inline]
fn update_atomic_max(atomic_max: &AtomicU64, new_value: u64) {
    let mut current_max = atomic_max.load(Ordering::Relaxed);
    while new_value > current_max {
        match atomic_max.compare_exchange_weak(
            current_max,
            new_value,
            Ordering::Relaxed,
            Ordering::Relaxed,
        ) {
            Ok(_) => break,
            Err(actual) => current_max = actual,
        }
    }
}

#[inline]
fn swap_buckets(buckets: &[AtomicU64; NUM_BUCKETS]) -> [u64; NUM_BUCKETS] {
    std::array::from_fn(|i| buckets[i].swap(0, Ordering::Relaxed))
}

/// Upper bound of the bucket containing the percentile
fn percentile_from_buckets(buckets: &[u64; NUM_BUCKETS], percentile: f64) -> u64 {
    let total: u64 = buckets.iter().sum();
    if total == 0 {
        return 0;
    }

    let target = ((total as f64 * percentile) as u64).max(1);
    let mut cumulative = 0u64;
    for (i, &count) in buckets.iter().enumerate() {
        cumulative += count;
        if cumulative >= target {
            return BUCKET_UPPER_BOUNDS[i];
        }
    }
    BUCKET_UPPER_BOUNDS[NUM_BUCKETS - 1]
}

/// Lock-free orchestrator metrics
pub struct Metrics {
    /// Load requests received (monotonic)
    requests_total: AtomicU64,
    /// Loads actually started (monotonic)
    loads_started: AtomicU64,
    /// Requests ignored because a load was in flight (monotonic)
    ignored_while_loading: AtomicU64,
    /// Requests answered from the existing result (monotonic)
    already_loaded: AtomicU64,
    loads_ready: AtomicU64,
    loads_fallback: AtomicU64,
    loads_cancelled: AtomicU64,
    /// Worker results dropped because a newer request superseded them (monotonic)
    stale_discarded: AtomicU64,
    /// Completed loads since last report (reset on report)
    completed_since_report: AtomicU64,
    /// Sum of load durations in ms (reset on report)
    duration_sum_ms: AtomicU64,
    /// Max load duration in ms (reset on report)
    duration_max_ms: AtomicU64,
    /// Load duration histogram (reset on report)
    duration_buckets: [AtomicU64; NUM_BUCKETS],
    last_report_time: parking_lot::Mutex<Instant>,
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            requests_total: AtomicU64::new(0),
            loads_started: AtomicU64::new(0),
            ignored_while_loading: AtomicU64::new(0),
            already_loaded: AtomicU64::new(0),
            loads_ready: AtomicU64::new(0),
            loads_fallback: AtomicU64::new(0),
            loads_cancelled: AtomicU64::new(0),
            stale_discarded: AtomicU64::new(0),
            completed_since_report: AtomicU64::new(0),
            duration_sum_ms: AtomicU64::new(0),
            duration_max_ms: AtomicU64::new(0),
            duration_buckets: std::array::from_fn(|_| AtomicU64::new(0)),
            last_report_time: parking_lot::Mutex::new(Instant::now()),
        }
    }

    #[inline]
    pub fn record_request(&self) {
        self.requests_total.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_load_started(&self) {
        self.loads_started.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_ignored_while_loading(&self) {
        self.ignored_while_loading.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_already_loaded(&self) {
        self.already_loaded.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_stale_discarded(&self) {
        self.stale_discarded.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a finished load and how long it took
    pub fn record_load_finished(&self, outcome: LoadOutcome, duration_ms: u64) {
        let counter = match outcome {
            LoadOutcome::Ready => &self.loads_ready,
            LoadOutcome::Fallback => &self.loads_fallback,
            LoadOutcome::Cancelled => &self.loads_cancelled,
        };
        counter.fetch_add(1, Ordering::Relaxed);

        // Cancelled loads say nothing about collection time
        if outcome == LoadOutcome::Cancelled {
            return;
        }
        self.completed_since_report.fetch_add(1, Ordering::Relaxed);
        self.duration_sum_ms.fetch_add(duration_ms, Ordering::Relaxed);
        self.duration_buckets[bucket_index(duration_ms)].fetch_add(1, Ordering::Relaxed);
        update_atomic_max(&self.duration_max_ms, duration_ms);
    }

    #[inline]
    pub fn requests_total(&self) -> u64 {
        self.requests_total.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn loads_started(&self) -> u64 {
        self.loads_started.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn ignored_while_loading(&self) -> u64 {
        self.ignored_while_loading.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn already_loaded(&self) -> u64 {
        self.already_loaded.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn loads_ready(&self) -> u64 {
        self.loads_ready.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn loads_fallback(&self) -> u64 {
        self.loads_fallback.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn loads_cancelled(&self) -> u64 {
        self.loads_cancelled.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn stale_discarded(&self) -> u64 {
        self.stale_discarded.load(Ordering::Relaxed)
    }

    /// Snapshot all counters, then reset the periodic duration counters
    pub fn report(&self) -> MetricsSummary {
        let completed = self.completed_since_report.swap(0, Ordering::Relaxed);
        let duration_sum = self.duration_sum_ms.swap(0, Ordering::Relaxed);
        let duration_max_ms = self.duration_max_ms.swap(0, Ordering::Relaxed);
        let duration_buckets = swap_buckets(&self.duration_buckets);

        let elapsed_secs = {
            let mut last = self.last_report_time.lock();
            let elapsed = last.elapsed();
            *last = Instant::now();
            elapsed.as_secs_f64()
        };

        MetricsSummary {
            requests_total: self.requests_total(),
            loads_started: self.loads_started(),
            ignored_while_loading: self.ignored_while_loading(),
            already_loaded: self.already_loaded(),
            loads_ready: self.loads_ready(),
            loads_fallback: self.loads_fallback(),
            loads_cancelled: self.loads_cancelled(),
            stale_discarded: self.stale_discarded(),
            completed_in_period: completed,
            period_secs: elapsed_secs,
            duration_avg_ms: if completed > 0 { duration_sum / completed } else { 0 },
            duration_max_ms,
            duration_p50_ms: percentile_from_buckets(&duration_buckets, 0.50),
            duration_p99_ms: percentile_from_buckets(&duration_buckets, 0.99),
            duration_buckets,
        }
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MetricsSummary {
    pub requests_total: u64,
    pub loads_started: u64,
    pub ignored_while_loading: u64,
    pub already_loaded: u64,
    pub loads_ready: u64,
    pub loads_fallback: u64,
    pub loads_cancelled: u64,
    pub stale_discarded: u64,
    /// Ready + fallback loads finished since the previous report
    pub completed_in_period: u64,
    pub period_secs: f64,
    pub duration_avg_ms: u64,
    pub duration_max_ms: u64,
    pub duration_p50_ms: u64,
    pub duration_p99_ms: u64,
    /// Bounds: ≤250, ≤500, ≤1000, ... ≤128000, >128000 ms
    pub duration_buckets: [u64; NUM_BUCKETS],
}

impl MetricsSummary {
    pub fn log(&self) {
        info!(
            requests = %self.requests_total,
            started = %self.loads_started,
            ignored = %self.ignored_while_loading,
            already_loaded = %self.already_loaded,
            ready = %self.loads_ready,
            fallback = %self.loads_fallback,
            cancelled = %self.loads_cancelled,
            stale = %self.stale_discarded,
            completed = %self.completed_in_period,
            period_secs = format!("{:.1}", self.period_secs),
            avg_ms = %self.duration_avg_ms,
            max_ms = %self.duration_max_ms,
            p50_ms = %self.duration_p50_ms,
            p99_ms = %self.duration_p99_ms,
            "metrics"
        );
    }
}
