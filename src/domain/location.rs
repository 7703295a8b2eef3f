//! Location scoring rows, load progress and load results

use crate::domain::city::CityConfiguration;
use crate::domain::types::CityId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One scored candidate location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationRow {
    pub latitude: f64,
    pub longitude: f64,
    pub predicted_revenue: f64,
    pub median_income: f64,
    pub median_age: f64,
    pub population: f64,
    pub traffic_score: f64,
    pub commercial_score: f64,
    /// Miles to the nearest primary competitor
    pub distance_to_primary_competitor: f64,
    /// Competitors within the scoring radius
    pub competition_density: u32,
}

/// Mean `(lat, lon)` of a set of rows, `None` when empty
pub fn mean_position(rows: &[LocationRow]) -> Option<(f64, f64)> {
    if rows.is_empty() {
        return None;
    }
    let n = rows.len() as f64;
    let (lat_sum, lon_sum) = rows
        .iter()
        .fold((0.0, 0.0), |(lat, lon), row| (lat + row.latitude, lon + row.longitude));
    Some((lat_sum / n, lon_sum / n))
}

/// Describes where a dataset came from
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoadMetadata {
    /// True when the rows were produced by the synthetic fallback
    #[serde(default)]
    pub synthetic: bool,
    /// Collection failure that caused the fallback, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Model fit reported by the collector (R² on training data)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub train_r2: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<DateTime<Utc>>,
}

/// How a load attempt ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadOutcome {
    /// Collector returned rows
    Ready,
    /// Synthetic rows replaced a failed or empty collection
    Fallback,
    Cancelled,
}

impl LoadOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ready => "ready",
            Self::Fallback => "fallback",
            Self::Cancelled => "cancelled",
        }
    }
}

/// Output of one collection run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollectedData {
    pub locations: Vec<LocationRow>,
    pub metadata: LoadMetadata,
}

/// Displayable dataset for a city, published to the status board
#[derive(Debug, Clone, PartialEq)]
pub struct CityData {
    pub city_id: CityId,
    pub locations: Vec<LocationRow>,
    pub metadata: LoadMetadata,
    /// Configuration the rows were collected for (placeholder when synthetic)
    pub source_config: CityConfiguration,
}

impl CityData {
    #[inline]
    pub fn is_synthetic(&self) -> bool {
        self.metadata.synthetic
    }

    /// "Synthetic" or "Real-time", as shown by the dashboard
    pub fn source_label(&self) -> &'static str {
        if self.metadata.synthetic {
            "Synthetic"
        } else {
            "Real-time"
        }
    }
}

/// Progress update reported by a collector
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoadProgress {
    /// 0-100
    pub percent: f64,
    pub step_name: String,
    pub processed: u64,
    pub total: u64,
    /// Estimated seconds remaining
    pub eta_secs: f64,
}

impl LoadProgress {
    pub fn new(percent: f64, step_name: impl Into<String>) -> Self {
        Self { percent, step_name: step_name.into(), ..Default::default() }
    }

    pub fn with_items(mut self, processed: u64, total: u64) -> Self {
        self.processed = processed;
        self.total = total;
        self
    }

    pub fn with_eta(mut self, eta_secs: f64) -> Self {
        self.eta_secs = eta_secs;
        self
    }

    /// Copy with the percentage pinned to 0-100 (NaN becomes 0)
    pub fn clamped(mut self) -> Self {
        self.percent = if self.percent.is_nan() { 0.0 } else { self.percent.clamp(0.0, 100.0) };
        if !(self.eta_secs >= 0.0) {
            self.eta_secs = 0.0;
        }
        self
    }

    /// Single-line status text for progress displays
    pub fn describe(&self) -> String {
        let mut text = format!("Step: {}", self.step_name);
        if self.processed > 0 && self.total > 0 {
            text.push_str(&format!(" | Processed: {}/{} locations", self.processed, self.total));
        }
        if self.eta_secs > 0.0 {
            text.push_str(&format!(" | ETA: {:.0}s", self.eta_secs));
        }
        text
    }
}
