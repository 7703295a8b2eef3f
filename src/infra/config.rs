//! Configuration loading from TOML files
//!
//! Config file is selected via:
//! 1. --config <path> command line argument
//! 2. CONFIG_FILE environment variable
//! 3. Default: config/dev.toml

use anyhow::Context;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::warn;

#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// Persisted city configuration document
    #[serde(default = "default_store_path")]
    pub path: PathBuf,
    /// Optional JSON list of raw city records used for bulk generation
    #[serde(default)]
    pub city_source: Option<PathBuf>,
    /// Copy an existing document to `<path>.backup` before regenerating
    #[serde(default = "default_backup_on_regenerate")]
    pub backup_on_regenerate: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
            city_source: None,
            backup_on_regenerate: default_backup_on_regenerate(),
        }
    }
}

fn default_store_path() -> PathBuf {
    PathBuf::from("usa_city_configs.json")
}

fn default_backup_on_regenerate() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoaderConfig {
    /// Interval at which the presentation side polls load status
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
    /// Collection deadline before falling back to synthetic data (0 disables)
    #[serde(default = "default_collection_timeout_secs")]
    pub collection_timeout_secs: u64,
    #[serde(default = "default_synthetic_rows")]
    pub synthetic_rows: usize,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: default_poll_interval_ms(),
            collection_timeout_secs: default_collection_timeout_secs(),
            synthetic_rows: default_synthetic_rows(),
        }
    }
}

fn default_poll_interval_ms() -> u64 {
    500
}

fn default_collection_timeout_secs() -> u64 {
    300
}

fn default_synthetic_rows() -> usize {
    100
}

#[derive(Debug, Clone, Deserialize)]
pub struct MetricsConfig {
    /// Periodic metrics log interval (0 to disable)
    #[serde(default = "default_metrics_interval")]
    pub interval_secs: u64,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self { interval_secs: default_metrics_interval() }
    }
}

fn default_metrics_interval() -> u64 {
    10
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub loader: LoaderConfig,
    #[serde(default)]
    pub metrics: MetricsConfig,
}

/// Main configuration struct used throughout the application
#[derive(Debug, Clone)]
pub struct Config {
    store_path: PathBuf,
    city_source: Option<PathBuf>,
    backup_on_regenerate: bool,
    poll_interval_ms: u64,
    collection_timeout_secs: u64,
    synthetic_rows: usize,
    metrics_interval_secs: u64,
    config_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_toml(TomlConfig::default(), "default")
    }
}

impl Config {
    fn from_toml(toml_config: TomlConfig, config_file: &str) -> Self {
        Self {
            store_path: toml_config.store.path,
            city_source: toml_config.store.city_source,
            backup_on_regenerate: toml_config.store.backup_on_regenerate,
            poll_interval_ms: toml_config.loader.poll_interval_ms,
            collection_timeout_secs: toml_config.loader.collection_timeout_secs,
            synthetic_rows: toml_config.loader.synthetic_rows,
            metrics_interval_secs: toml_config.metrics.interval_secs,
            config_file: config_file.to_string(),
        }
    }

    pub fn resolve_config_path(args: &[String]) -> String {
        // Check for --config argument
        for (i, arg) in args.iter().enumerate() {
            if arg == "--config" {
                if let Some(path) = args.get(i + 1) {
                    return path.clone();
                }
            }
            if let Some(path) = arg.strip_prefix("--config=") {
                return path.to_string();
            }
        }

        if let Ok(path) = env::var("CONFIG_FILE") {
            return path;
        }

        "config/dev.toml".to_string()
    }

    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        let toml_config: TomlConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        Ok(Self::from_toml(toml_config, &path.display().to_string()))
    }

    /// Load configuration - tries TOML file first, falls back to defaults
    pub fn load(args: &[String]) -> Self {
        Self::load_from_path(&Self::resolve_config_path(args))
    }

    pub fn load_from_path(config_path: &str) -> Self {
        match Self::from_file(config_path) {
            Ok(config) => config,
            Err(e) => {
                warn!(config_file = %config_path, error = %format!("{:#}", e), "config_defaults_used");
                Self::default()
            }
        }
    }

    pub fn store_path(&self) -> &Path {
        &self.store_path
    }

    pub fn city_source(&self) -> Option<&Path> {
        self.city_source.as_deref()
    }

    pub fn backup_on_regenerate(&self) -> bool {
        self.backup_on_regenerate
    }

    pub fn poll_interval_ms(&self) -> u64 {
        self.poll_interval_ms
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn collection_timeout_secs(&self) -> u64 {
        self.collection_timeout_secs
    }

    /// Collection deadline, `None` when disabled
    pub fn collection_timeout(&self) -> Option<Duration> {
        (self.collection_timeout_secs > 0).then(|| Duration::from_secs(self.collection_timeout_secs))
    }

    pub fn synthetic_rows(&self) -> usize {
        self.synthetic_rows
    }

    pub fn metrics_interval_secs(&self) -> u64 {
        self.metrics_interval_secs
    }

    pub fn config_file(&self) -> &str {
        &self.config_file
    }

    /// Builder method for tests to point the store somewhere disposable
    #[cfg(test)]
    pub fn with_store_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.store_path = path.into();
        self
    }

    /// Builder method for tests to shorten the collection deadline
    #[cfg(test)]
    pub fn with_collection_timeout_secs(mut self, secs: u64) -> Self {
        self.collection_timeout_secs = secs;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.store_path(), Path::new("usa_city_configs.json"));
        assert_eq!(config.city_source(), None);
        assert!(config.backup_on_regenerate());
        assert_eq!(config.poll_interval_ms(), 500);
        assert_eq!(config.collection_timeout_secs(), 300);
        assert_eq!(config.synthetic_rows(), 100);
        assert_eq!(config.metrics_interval_secs(), 10);
        assert_eq!(config.config_file(), "default");
    }

    #[test]
    fn test_collection_timeout_disabled() {
        let config = Config::default().with_collection_timeout_secs(0);
        assert_eq!(config.collection_timeout(), None);
        let config = config.with_collection_timeout_secs(5);
        assert_eq!(config.collection_timeout(), Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_partial_sections_use_defaults() {
        let toml_config: TomlConfig = toml::from_str(
            r#"
            [loader]
            synthetic_rows = 25
            "#,
        )
        .unwrap();
        let config = Config::from_toml(toml_config, "inline");
        assert_eq!(config.synthetic_rows(), 25);
        assert_eq!(config.poll_interval_ms(), 500);
        assert_eq!(config.store_path(), Path::new("usa_city_configs.json"));
    }

    #[test]
    fn test_resolve_config_path_default() {
        let args: Vec<String> = vec!["bizwiz".to_string()];
        if env::var("CONFIG_FILE").is_err() {
            assert_eq!(Config::resolve_config_path(&args), "config/dev.toml");
        }
    }

    #[test]
    fn test_resolve_config_path_from_arg() {
        let args: Vec<String> =
            vec!["bizwiz".to_string(), "--config".to_string(), "config/prod.toml".to_string()];
        assert_eq!(Config::resolve_config_path(&args), "config/prod.toml");
    }

    #[test]
    fn test_resolve_config_path_from_arg_equals() {
        let args: Vec<String> = vec!["bizwiz".to_string(), "--config=config/test.toml".to_string()];
        assert_eq!(Config::resolve_config_path(&args), "config/test.toml");
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let config = Config::load_from_path("/nonexistent/bizwiz.toml");
        assert_eq!(config.config_file(), "default");
        assert_eq!(config.synthetic_rows(), 100);
    }
}
