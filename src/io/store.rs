//! Persisted city configuration store
//!
//! The backing document is JSON with two top-level fields:
//!
//! ```json
//! { "current_city": "grand_forks_nd", "cities": { "<city_id>": { ... } } }
//! ```
//!
//! Entries keep their file order in memory. Loading never fails outward: a
//! missing, corrupt or empty document triggers bulk generation from the city
//! source, and the result is written back immediately.

use crate::domain::city::{Bounds, CityConfiguration, GridPoints};
use crate::domain::types::CityId;
use crate::infra::config::Config;
use crate::io::city_source::{CitySource, FallbackChain};
use crate::services::generator::ConfigGenerator;
use rustc_hash::FxHashMap;
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, error, info, warn};

/// Bounds used when no current city is selected (Grand Forks, ND)
pub const FALLBACK_BOUNDS: (f64, f64, f64, f64) = (47.85, 47.95, -97.15, -97.0);
pub const FALLBACK_GRID_SPACING: f64 = 0.005;
pub const FALLBACK_CITY_NAME: &str = "Grand Forks, ND";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("corrupt store document {path}: {reason}")]
    Corrupt { path: PathBuf, reason: String },

    #[error("failed to serialize store: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Counts by size class, keyed on the upper bound of `typical_population_range`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SizeClasses {
    /// < 10,000
    pub small: usize,
    /// < 25,000
    pub medium: usize,
    /// < 50,000
    pub large: usize,
    /// >= 50,000
    pub major: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreStats {
    pub total_cities: usize,
    pub states_covered: usize,
    /// `(state_code, count)` sorted by count descending, then state code
    pub per_state: Vec<(String, usize)>,
    pub size_classes: SizeClasses,
}

/// City configurations plus the current-city pointer
pub struct ConfigStore {
    path: PathBuf,
    cities: Vec<CityConfiguration>,
    index: FxHashMap<CityId, usize>,
    current_city: Option<CityId>,
    generator: ConfigGenerator,
    source: Box<dyn CitySource>,
    backup_on_regenerate: bool,
    /// Set once this store has copied a document it did not write itself
    backup_taken: bool,
}

impl fmt::Debug for ConfigStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigStore")
            .field("path", &self.path)
            .field("cities", &self.cities.len())
            .field("current_city", &self.current_city)
            .field("source", &self.source.name())
            .finish()
    }
}

impl ConfigStore {
    /// Empty store bound to `path`; nothing is read until `load()`
    pub fn new(path: impl Into<PathBuf>, source: Box<dyn CitySource>) -> Self {
        Self {
            path: path.into(),
            cities: Vec::new(),
            index: FxHashMap::default(),
            current_city: None,
            generator: ConfigGenerator::new(),
            source,
            backup_on_regenerate: true,
            backup_taken: false,
        }
    }

    pub fn with_backup_on_regenerate(mut self, enabled: bool) -> Self {
        self.backup_on_regenerate = enabled;
        self
    }

    /// Store configured from application settings, nothing read yet
    pub fn from_config(config: &Config) -> Self {
        let source = FallbackChain::with_bundled(config.city_source());
        Self::new(config.store_path(), source)
            .with_backup_on_regenerate(config.backup_on_regenerate())
    }

    /// Store configured from application settings, already loaded
    pub fn open(config: &Config) -> Self {
        let mut store = Self::from_config(config);
        store.load();
        store
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the persisted document, regenerating when it is absent, corrupt or empty
    pub fn load(&mut self) {
        match self.read_document() {
            Ok(Some(document)) if !document.cities.is_empty() => {
                self.cities.clear();
                self.index.clear();
                for config in document.cities {
                    self.upsert(config);
                }
                self.current_city = document.current_city;
                info!(
                    path = %self.path.display(),
                    cities = %self.cities.len(),
                    current_city = ?self.current_city.as_ref().map(CityId::as_str),
                    "city_configs_loaded"
                );
            }
            Ok(Some(_)) => {
                warn!(path = %self.path.display(), "city_configs_empty");
                self.regenerate();
            }
            Ok(None) => {
                info!(path = %self.path.display(), "city_configs_missing");
                self.regenerate();
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "city_configs_unreadable");
                self.regenerate();
            }
        }
    }

    /// Rebuild every configuration from the city source and persist the result.
    ///
    /// The existing document is copied to `<path>.backup` first. Only the
    /// first regeneration of a store takes the backup: later ones would
    /// overwrite it with a document this store generated itself.
    ///
    /// Returns the number of generated configurations.
    pub fn regenerate(&mut self) -> usize {
        if self.backup_on_regenerate && !self.backup_taken && self.path.exists() {
            let backup = with_suffix(&self.path, ".backup");
            match fs::copy(&self.path, &backup) {
                Ok(_) => {
                    self.backup_taken = true;
                    info!(backup = %backup.display(), "city_configs_backed_up");
                }
                Err(e) => warn!(backup = %backup.display(), error = %e, "city_configs_backup_failed"),
            }
        }

        let rows = match self.source.records() {
            Ok(rows) => rows,
            Err(e) => {
                error!(source = %self.source.name(), error = %e, "city_source_unavailable");
                Vec::new()
            }
        };

        let configs = self.generator.generate_all(rows);
        self.cities.clear();
        self.index.clear();
        for config in configs {
            self.upsert(config);
        }

        let current_valid = self.current_city.as_ref().is_some_and(|id| self.contains(id.as_str()));
        if !current_valid {
            self.current_city = self.cities.first().map(|c| c.city_id.clone());
        }

        self.save_logged();
        self.cities.len()
    }

    /// Write the full collection and current-city pointer
    pub fn save(&self) -> Result<(), StoreError> {
        let document = DocumentRef {
            current_city: self.current_city.as_ref(),
            cities: CitiesRef(&self.cities),
        };
        let json = serde_json::to_string_pretty(&document)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)
                    .map_err(|source| StoreError::Write { path: parent.to_path_buf(), source })?;
            }
        }

        // Write to a sibling file, then rename over the document
        let tmp = with_suffix(&self.path, ".tmp");
        fs::write(&tmp, json.as_bytes())
            .map_err(|source| StoreError::Write { path: tmp.clone(), source })?;
        fs::rename(&tmp, &self.path)
            .map_err(|source| StoreError::Write { path: self.path.clone(), source })?;

        debug!(path = %self.path.display(), cities = %self.cities.len(), "city_configs_saved");
        Ok(())
    }

    fn save_logged(&self) {
        match self.save() {
            Ok(()) => info!(path = %self.path.display(), cities = %self.cities.len(), "city_configs_saved"),
            Err(e) => error!(path = %self.path.display(), error = %e, "city_configs_save_failed"),
        }
    }

    /// Parsed document, `Ok(None)` when the file does not exist.
    ///
    /// Entries that fail to parse or validate are skipped with a warning.
    fn read_document(&self) -> Result<Option<LoadedDocument>, StoreError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(StoreError::Read { path: self.path.clone(), source }),
        };

        let raw: RawDocument = serde_json::from_str(&contents)
            .map_err(|e| StoreError::Corrupt { path: self.path.clone(), reason: e.to_string() })?;

        let entries = raw.cities.map(|entries| entries.0).unwrap_or_default();
        let mut cities = Vec::with_capacity(entries.len());
        for (key, value) in entries {
            let config = match CityConfiguration::deserialize(value) {
                Ok(config) => config,
                Err(e) => {
                    warn!(city_id = %key, error = %e, "city_config_skipped");
                    continue;
                }
            };
            if config.city_id.as_str() != key {
                warn!(city_id = %key, embedded = %config.city_id, "city_config_key_mismatch");
                continue;
            }
            if let Err(e) = config.validate() {
                warn!(city_id = %key, error = %e, "city_config_skipped");
                continue;
            }
            cities.push(config);
        }

        Ok(Some(LoadedDocument { current_city: raw.current_city.map(CityId::new), cities }))
    }

    /// Insert a configuration, replacing any entry with the same id in place
    pub fn upsert(&mut self, config: CityConfiguration) {
        match self.index.get(&config.city_id) {
            Some(&idx) => self.cities[idx] = config,
            None => {
                self.index.insert(config.city_id.clone(), self.cities.len());
                self.cities.push(config);
            }
        }
    }

    pub fn get(&self, city_id: &str) -> Option<&CityConfiguration> {
        self.index.get(city_id).map(|&idx| &self.cities[idx])
    }

    pub fn contains(&self, city_id: &str) -> bool {
        self.index.contains_key(city_id)
    }

    /// Select the current city. Persists and returns true only when `city_id` exists.
    pub fn set_current(&mut self, city_id: &str) -> bool {
        let Some(&idx) = self.index.get(city_id) else {
            debug!(city_id = %city_id, "current_city_unknown");
            return false;
        };
        self.current_city = Some(self.cities[idx].city_id.clone());
        info!(city_id = %city_id, "current_city_selected");
        self.save_logged();
        true
    }

    pub fn current_city(&self) -> Option<&CityId> {
        self.current_city.as_ref()
    }

    /// Configuration of the current city, `None` if unset or dangling
    pub fn current_config(&self) -> Option<&CityConfiguration> {
        self.current_city.as_ref().and_then(|id| self.get(id.as_str()))
    }

    /// `(min_lat, max_lat, min_lon, max_lon)` of the current city
    pub fn current_bounds(&self) -> (f64, f64, f64, f64) {
        self.current_config().map(|c| c.bounds.as_tuple()).unwrap_or(FALLBACK_BOUNDS)
    }

    pub fn current_grid_points(&self) -> GridPoints {
        match self.current_config() {
            Some(config) => config.bounds.grid_points(),
            None => fallback_bounds().grid_points(),
        }
    }

    pub fn current_city_name(&self) -> &str {
        self.current_config().map(|c| c.display_name.as_str()).unwrap_or(FALLBACK_CITY_NAME)
    }

    /// City ids in store order
    pub fn list_cities(&self) -> Vec<&CityId> {
        self.cities.iter().map(|c| &c.city_id).collect()
    }

    pub fn configs(&self) -> &[CityConfiguration] {
        &self.cities
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Case-insensitive substring match on display name or city id
    pub fn search(&self, query: &str) -> Vec<&CityConfiguration> {
        let query = query.to_lowercase();
        self.cities
            .iter()
            .filter(|c| {
                c.display_name.to_lowercase().contains(&query)
                    || c.city_id.as_str().to_lowercase().contains(&query)
            })
            .collect()
    }

    pub fn by_state(&self, state_code: &str) -> Vec<&CityConfiguration> {
        let state_code = state_code.trim();
        self.cities
            .iter()
            .filter(|c| c.market_data.state_code.eq_ignore_ascii_case(state_code))
            .collect()
    }

    /// Configs whose `typical_population_range` upper bound lies in `[low, high]`
    pub fn by_population_range(&self, low: u32, high: u32) -> Vec<&CityConfiguration> {
        self.cities
            .iter()
            .filter(|c| (low..=high).contains(&c.demographics.typical_population_range.1))
            .collect()
    }

    pub fn stats(&self) -> StoreStats {
        let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
        let mut size_classes = SizeClasses::default();

        for config in &self.cities {
            *counts.entry(config.market_data.state_code.as_str()).or_insert(0) += 1;
            match config.demographics.typical_population_range.1 {
                high if high < 10_000 => size_classes.small += 1,
                high if high < 25_000 => size_classes.medium += 1,
                high if high < 50_000 => size_classes.large += 1,
                _ => size_classes.major += 1,
            }
        }

        let mut per_state: Vec<(String, usize)> =
            counts.into_iter().map(|(state, n)| (state.to_string(), n)).collect();
        per_state.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

        StoreStats {
            total_cities: self.cities.len(),
            states_covered: per_state.len(),
            per_state,
            size_classes,
        }
    }
}

fn fallback_bounds() -> Bounds {
    let (min_lat, max_lat, min_lon, max_lon) = FALLBACK_BOUNDS;
    Bounds {
        min_lat,
        max_lat,
        min_lon,
        max_lon,
        center_lat: (min_lat + max_lat) / 2.0,
        center_lon: (min_lon + max_lon) / 2.0,
        grid_spacing: FALLBACK_GRID_SPACING,
    }
}

/// `path` with `suffix` appended to the file name (`a.json` -> `a.json.backup`)
fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name: OsString = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(suffix);
    path.with_file_name(name)
}

struct LoadedDocument {
    current_city: Option<CityId>,
    cities: Vec<CityConfiguration>,
}

#[derive(Serialize)]
struct DocumentRef<'a> {
    current_city: Option<&'a CityId>,
    cities: CitiesRef<'a>,
}

/// Serializes configs as a `city_id -> config` map in store order
struct CitiesRef<'a>(&'a [CityConfiguration]);

impl Serialize for CitiesRef<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|c| (c.city_id.as_str(), c)))
    }
}

#[derive(Deserialize)]
struct RawDocument {
    #[serde(default)]
    current_city: Option<String>,
    #[serde(default)]
    cities: Option<OrderedEntries>,
}

/// `cities` map entries in file order, values left unparsed so one bad
/// entry does not reject the whole document
struct OrderedEntries(Vec<(String, serde_json::Value)>);

impl<'de> Deserialize<'de> for OrderedEntries {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = OrderedEntries;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of city ids to city configurations")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, value)) = map.next_entry::<String, serde_json::Value>()? {
                    entries.push((key, value));
                }
                Ok(OrderedEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::city_source::{SourceError, SourceRow};
    use crate::services::generator::{RawCityRecord, RecordError};
    use tempfile::TempDir;

    struct ListSource(Vec<RawCityRecord>);

    impl CitySource for ListSource {
        fn name(&self) -> &str {
            "list"
        }

        fn records(&self) -> Result<Vec<SourceRow>, SourceError> {
            Ok(self.0.iter().cloned().map(Ok).collect())
        }
    }

    struct BrokenSource;

    impl CitySource for BrokenSource {
        fn name(&self) -> &str {
            "broken"
        }

        fn records(&self) -> Result<Vec<SourceRow>, SourceError> {
            Ok(vec![Err(RecordError::Malformed { row: 0, reason: "bad".to_string() })])
        }
    }

    fn sample_source() -> Box<dyn CitySource> {
        Box::new(ListSource(vec![
            RawCityRecord::new("Chicago", "IL", 41.8781, -87.6298, 2_693_976, Some("Cook")),
            RawCityRecord::new("Austin", "TX", 30.2672, -97.7431, 978_908, Some("Travis")),
            RawCityRecord::new("Houston", "TX", 29.7604, -95.3698, 2_320_268, Some("Harris")),
            RawCityRecord::new("Grand Forks", "ND", 47.9253, -97.0329, 59_166, Some("Grand Forks")),
        ]))
    }

    fn loaded_store(dir: &TempDir) -> ConfigStore {
        let mut store = ConfigStore::new(dir.path().join("cities.json"), sample_source());
        store.load();
        store
    }

    #[test]
    fn test_missing_file_generates_and_persists() {
        let dir = TempDir::new().unwrap();
        let store = loaded_store(&dir);

        assert_eq!(store.len(), 4);
        assert!(store.path().exists());
        assert_eq!(store.current_city().map(CityId::as_str), Some("chicago_il"));
    }

    #[test]
    fn test_corrupt_file_regenerates_with_backup() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cities.json");
        fs::write(&path, "{ not json").unwrap();

        let mut store = ConfigStore::new(&path, sample_source());
        store.load();

        assert_eq!(store.len(), 4);
        let backup = fs::read_to_string(dir.path().join("cities.json.backup")).unwrap();
        assert_eq!(backup, "{ not json");
    }

    #[test]
    fn test_regenerate_after_load_keeps_original_backup() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cities.json");
        fs::write(&path, "{ user data that failed to parse").unwrap();

        let mut store = ConfigStore::new(&path, sample_source());
        store.load();
        assert_eq!(store.regenerate(), 4);

        let backup = fs::read_to_string(dir.path().join("cities.json.backup")).unwrap();
        assert_eq!(backup, "{ user data that failed to parse");
    }

    #[test]
    fn test_regenerate_backs_up_valid_document() {
        let dir = TempDir::new().unwrap();
        let path = loaded_store(&dir).path().to_path_buf();
        let original = fs::read_to_string(&path).unwrap();

        let mut store = ConfigStore::new(&path, sample_source());
        store.load();
        store.regenerate();

        let backup = fs::read_to_string(dir.path().join("cities.json.backup")).unwrap();
        assert_eq!(backup, original);
    }

    #[test]
    fn test_backup_can_be_disabled() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cities.json");
        fs::write(&path, r#"{"current_city": null, "cities": {}}"#).unwrap();

        let mut store = ConfigStore::new(&path, sample_source()).with_backup_on_regenerate(false);
        store.load();

        assert_eq!(store.len(), 4);
        assert!(!dir.path().join("cities.json.backup").exists());
    }

    #[test]
    fn test_reload_preserves_order_and_pointer() {
        let dir = TempDir::new().unwrap();
        let mut store = loaded_store(&dir);
        assert!(store.set_current("austin_tx"));

        let mut reloaded = ConfigStore::new(store.path(), Box::new(BrokenSource));
        reloaded.load();

        assert_eq!(reloaded.list_cities(), store.list_cities());
        assert_eq!(reloaded.current_city().map(CityId::as_str), Some("austin_tx"));
        assert_eq!(reloaded.configs(), store.configs());
    }

    #[test]
    fn test_invalid_entries_are_skipped() {
        let dir = TempDir::new().unwrap();
        let store = loaded_store(&dir);

        let mut doc: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap();
        doc["cities"]["austin_tx"]["bounds"]["min_lat"] = serde_json::json!(99.0);
        doc["cities"]["chicago_il"]["city_id"] = serde_json::json!("somewhere_else");
        doc["cities"]["houston_tx"] = serde_json::json!({"display_name": "Houston"});
        fs::write(store.path(), serde_json::to_string(&doc).unwrap()).unwrap();

        let mut reloaded = ConfigStore::new(store.path(), Box::new(BrokenSource));
        reloaded.load();
        let ids: Vec<&str> = reloaded.list_cities().into_iter().map(CityId::as_str).collect();
        assert_eq!(ids, vec!["grand_forks_nd"]);
    }

    #[test]
    fn test_unusable_source_leaves_store_empty() {
        let dir = TempDir::new().unwrap();
        let mut store = ConfigStore::new(dir.path().join("cities.json"), Box::new(BrokenSource));
        store.load();

        assert!(store.is_empty());
        assert_eq!(store.current_city(), None);
        assert_eq!(store.current_city_name(), FALLBACK_CITY_NAME);
        assert_eq!(store.current_bounds(), FALLBACK_BOUNDS);
    }

    #[test]
    fn test_set_current_unknown_is_noop() {
        let dir = TempDir::new().unwrap();
        let mut store = loaded_store(&dir);
        let before = fs::read_to_string(store.path()).unwrap();

        assert!(!store.set_current("atlantis_xx"));
        assert_eq!(store.current_city().map(CityId::as_str), Some("chicago_il"));
        assert_eq!(fs::read_to_string(store.path()).unwrap(), before);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let dir = TempDir::new().unwrap();
        let store = loaded_store(&dir);

        for query in ["chicago", "CHICAGO", "Chicago"] {
            let hits = store.search(query);
            assert_eq!(hits.len(), 1);
            assert_eq!(hits[0].city_id.as_str(), "chicago_il");
        }
        assert_eq!(store.search("_tx").len(), 2);
        assert!(store.search("boston").is_empty());
    }

    #[test]
    fn test_filters() {
        let dir = TempDir::new().unwrap();
        let store = loaded_store(&dir);

        let texas: Vec<&str> = store.by_state("TX").iter().map(|c| c.city_id.as_str()).collect();
        assert_eq!(texas, vec!["austin_tx", "houston_tx"]);
        assert_eq!(store.by_state("tx").len(), 2);

        // Upper bounds: chicago/houston 50k, austin 25k, grand forks 10k
        let large = store.by_population_range(25_000, 50_000);
        assert_eq!(large.len(), 3);
        assert!(large.iter().all(|c| (25_000..=50_000).contains(&c.demographics.typical_population_range.1)));
        assert!(store.by_population_range(500_000, 10_000_000).is_empty());
    }

    #[test]
    fn test_upsert_replaces_in_place() {
        let dir = TempDir::new().unwrap();
        let mut store = loaded_store(&dir);

        let mut austin = store.get("austin_tx").unwrap().clone();
        austin.display_name = "Austin (Capital), TX".to_string();
        store.upsert(austin);

        assert_eq!(store.len(), 4);
        assert_eq!(store.list_cities()[1].as_str(), "austin_tx");
        assert_eq!(store.get("austin_tx").unwrap().display_name, "Austin (Capital), TX");
    }

    #[test]
    fn test_stats() {
        let dir = TempDir::new().unwrap();
        let store = loaded_store(&dir);
        let stats = store.stats();

        assert_eq!(stats.total_cities, 4);
        assert_eq!(stats.states_covered, 3);
        assert_eq!(stats.per_state[0], ("TX".to_string(), 2));
        assert_eq!(
            stats.size_classes,
            SizeClasses { small: 0, medium: 1, large: 1, major: 2 }
        );
    }

    #[test]
    fn test_current_helpers() {
        let dir = TempDir::new().unwrap();
        let mut store = loaded_store(&dir);
        assert!(store.set_current("grand_forks_nd"));

        let config = store.current_config().unwrap();
        assert_eq!(store.current_city_name(), "Grand Forks, ND");
        assert_eq!(store.current_bounds(), config.bounds.as_tuple());
        assert_eq!(store.current_grid_points().len(), config.bounds.grid_points().len());
    }

    #[test]
    fn test_fallback_grid_points() {
        let dir = TempDir::new().unwrap();
        let mut store = ConfigStore::new(dir.path().join("cities.json"), Box::new(BrokenSource));
        store.load();

        let points: Vec<(f64, f64)> = store.current_grid_points().collect();
        assert!(!points.is_empty());
        assert!(points.iter().all(|&(lat, lon)| fallback_bounds().contains(lat, lon)));
    }

    #[test]
    fn test_with_suffix() {
        assert_eq!(with_suffix(Path::new("a/b.json"), ".backup"), PathBuf::from("a/b.json.backup"));
    }
}
