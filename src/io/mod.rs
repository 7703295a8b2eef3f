//! IO modules - external data sources and persistence
//!
//! This module contains all external IO operations:
//! - `bundled_cities` - Built-in list of major US cities
//! - `city_source` - Raw city record sources (JSON file, bundled list, fallback chain)
//! - `collector` - Interface to the external location data collector
//! - `store` - JSON document of generated city configurations

pub mod bundled_cities;
pub mod city_source;
pub mod collector;
pub mod store;

// Re-export commonly used types
pub use city_source::{BundledCities, CitySource, FallbackChain, JsonFileSource};
pub use collector::{CollectionError, Collector, ProgressReporter, UnavailableCollector};
pub use store::{ConfigStore, StoreError, StoreStats};
