//! Raw city record sources for bulk generation
//!
//! - `BundledCities` - compiled-in list of ~220 US cities
//! - `JsonFileSource` - JSON array of records on disk, parsed row by row
//! - `FallbackChain` - primary source, then a fallback when it fails or is empty

use crate::io::bundled_cities::BUNDLED_CITIES;
use crate::services::generator::{RawCityRecord, RecordError};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

/// One row from a source: a parsed record or the reason it could not be read
pub type SourceRow = Result<RawCityRecord, RecordError>;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read city source {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("city source {path} is not a JSON array of records: {reason}")]
    Format { path: PathBuf, reason: String },
}

/// Supplier of raw city records
pub trait CitySource: Send + Sync {
    /// Short label used in logs
    fn name(&self) -> &str;

    /// All rows, malformed ones included as errors so callers can skip them
    fn records(&self) -> Result<Vec<SourceRow>, SourceError>;
}

/// Compiled-in city list
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledCities;

impl CitySource for BundledCities {
    fn name(&self) -> &str {
        "bundled"
    }

    fn records(&self) -> Result<Vec<SourceRow>, SourceError> {
        Ok(BUNDLED_CITIES
            .iter()
            .map(|&(city, state, lat, lon, pop, county)| {
                Ok(RawCityRecord::new(city, state, lat, lon, pop, Some(county)))
            })
            .collect())
    }
}

/// JSON file holding an array of raw records.
///
/// A row that does not match the record shape is reported as
/// `RecordError::Malformed` instead of failing the whole file.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CitySource for JsonFileSource {
    fn name(&self) -> &str {
        "json_file"
    }

    fn records(&self) -> Result<Vec<SourceRow>, SourceError> {
        let contents = std::fs::read_to_string(&self.path)
            .map_err(|source| SourceError::Io { path: self.path.clone(), source })?;
        let rows: Vec<serde_json::Value> = serde_json::from_str(&contents).map_err(|e| {
            SourceError::Format { path: self.path.clone(), reason: e.to_string() }
        })?;

        Ok(rows
            .into_iter()
            .enumerate()
            .map(|(row, value)| {
                RawCityRecord::deserialize(value)
                    .map_err(|e| RecordError::Malformed { row, reason: e.to_string() })
            })
            .collect())
    }
}

/// Tries `primary`, switching to `fallback` when it errors or yields no rows
pub struct FallbackChain {
    primary: Box<dyn CitySource>,
    fallback: Box<dyn CitySource>,
}

impl FallbackChain {
    pub fn new(primary: Box<dyn CitySource>, fallback: Box<dyn CitySource>) -> Self {
        Self { primary, fallback }
    }

    /// Optional JSON file backed by the bundled list
    pub fn with_bundled(path: Option<&Path>) -> Box<dyn CitySource> {
        match path {
            Some(path) => Box::new(Self::new(
                Box::new(JsonFileSource::new(path)),
                Box::new(BundledCities),
            )),
            None => Box::new(BundledCities),
        }
    }
}

impl CitySource for FallbackChain {
    fn name(&self) -> &str {
        "fallback_chain"
    }

    fn records(&self) -> Result<Vec<SourceRow>, SourceError> {
        match self.primary.records() {
            Ok(rows) if !rows.is_empty() => {
                info!(source = %self.primary.name(), rows = %rows.len(), "city_source_loaded");
                return Ok(rows);
            }
            Ok(_) => {
                warn!(source = %self.primary.name(), "city_source_empty");
            }
            Err(e) => {
                warn!(source = %self.primary.name(), error = %e, "city_source_failed");
            }
        }

        let rows = self.fallback.records()?;
        info!(source = %self.fallback.name(), rows = %rows.len(), "city_source_loaded");
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_json(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", contents).unwrap();
        file
    }

    #[test]
    fn test_bundled_cities_all_valid() {
        let rows = BundledCities.records().unwrap();
        assert_eq!(rows.len(), BUNDLED_CITIES.len());
        assert!(rows.iter().all(|r| r.is_ok()));
        assert!(rows.iter().flatten().any(|r| r.city_name == "Grand Forks" && r.state_code == "ND"));
    }

    #[test]
    fn test_json_source_tolerates_bad_rows() {
        let file = write_json(
            r#"[
                {"city": "Fargo", "state": "ND", "lat": 46.8772, "lon": -96.7898, "pop": 125990},
                {"city": "Nowhere", "state": "ND"},
                {"CITY": "Boise", "STATE_CODE": "ID", "LATITUDE": 43.615, "LONGITUDE": -116.2023, "POPULATION": 235684}
            ]"#,
        );
        let rows = JsonFileSource::new(file.path()).records().unwrap();

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].as_ref().unwrap().city_name, "Fargo");
        assert!(matches!(rows[1], Err(RecordError::Malformed { row: 1, .. })));
        assert_eq!(rows[2].as_ref().unwrap().population, 235_684);
    }

    #[test]
    fn test_json_source_missing_file() {
        let result = JsonFileSource::new("/nonexistent/cities.json").records();
        assert!(matches!(result, Err(SourceError::Io { .. })));
    }

    #[test]
    fn test_json_source_not_an_array() {
        let file = write_json(r#"{"city": "Fargo"}"#);
        let result = JsonFileSource::new(file.path()).records();
        assert!(matches!(result, Err(SourceError::Format { .. })));
    }

    #[test]
    fn test_chain_uses_primary_when_it_has_rows() {
        let file = write_json(
            r#"[{"city": "Fargo", "state": "ND", "lat": 46.8772, "lon": -96.7898, "pop": 125990}]"#,
        );
        let rows = FallbackChain::with_bundled(Some(file.path())).records().unwrap();
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn test_chain_falls_back_on_empty_or_missing() {
        let empty = write_json("[]");
        let rows = FallbackChain::with_bundled(Some(empty.path())).records().unwrap();
        assert_eq!(rows.len(), BUNDLED_CITIES.len());

        let rows = FallbackChain::with_bundled(Some(Path::new("/nonexistent/cities.json")))
            .records()
            .unwrap();
        assert_eq!(rows.len(), BUNDLED_CITIES.len());
    }
}
