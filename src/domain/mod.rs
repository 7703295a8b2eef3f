//! Domain models - city configurations and location datasets
//!
//! This module contains the canonical data types used throughout the system:
//! - `CityConfiguration` - bounds, demographics, market and competitor data for a city
//! - `CityId` - normalized city slug
//! - `LocationRow` / `CityData` - scored locations and a published load result
//! - `LoadProgress` - progress reported while collecting

pub mod city;
pub mod location;
pub mod types;

// Re-export commonly used types at module level
pub use city::{
    Bounds, CityConfiguration, CompetitorData, ConfigurationError, Demographics, GridPoints,
    MarketData,
};
pub use location::{CityData, CollectedData, LoadMetadata, LoadOutcome, LoadProgress, LocationRow};
pub use types::CityId;
