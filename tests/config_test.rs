//! Integration tests for configuration loading

use bizwiz::infra::Config;
use std::io::Write;
use std::path::Path;
use std::time::Duration;
use tempfile::NamedTempFile;

#[test]
fn test_load_config_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();

    let config_content = r#"
[store]
path = "data/cities.json"
city_source = "data/raw_cities.json"
backup_on_regenerate = false

[loader]
poll_interval_ms = 250
collection_timeout_secs = 60
synthetic_rows = 25

[metrics]
interval_secs = 15
"#;

    temp_file.write_all(config_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = Config::from_file(temp_file.path()).unwrap();

    assert_eq!(config.store_path(), Path::new("data/cities.json"));
    assert_eq!(config.city_source(), Some(Path::new("data/raw_cities.json")));
    assert!(!config.backup_on_regenerate());
    assert_eq!(config.poll_interval(), Duration::from_millis(250));
    assert_eq!(config.collection_timeout(), Some(Duration::from_secs(60)));
    assert_eq!(config.synthetic_rows(), 25);
    assert_eq!(config.metrics_interval_secs(), 15);
    assert_eq!(config.config_file(), temp_file.path().display().to_string());
}

#[test]
fn test_empty_file_uses_section_defaults() {
    let temp_file = NamedTempFile::new().unwrap();
    let config = Config::from_file(temp_file.path()).unwrap();
    assert_eq!(config.store_path(), Path::new("usa_city_configs.json"));
    assert_eq!(config.collection_timeout_secs(), 300);
}

#[test]
fn test_invalid_toml_is_an_error() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"[loader\nsynthetic_rows = ").unwrap();
    temp_file.flush().unwrap();

    let err = Config::from_file(temp_file.path()).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config file"));
}

#[test]
fn test_load_from_path_fallback() {
    let config = Config::load_from_path("/nonexistent/config.toml");
    assert_eq!(config.poll_interval_ms(), 500);
    assert_eq!(config.synthetic_rows(), 100);
    assert!(config.backup_on_regenerate());
}
