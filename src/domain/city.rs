//! City configuration model
//!
//! A `CityConfiguration` aggregates everything needed to analyze one city:
//! the geographic search rectangle, demographic normalization ranges,
//! market lookups and competitor search terms. Configurations are built once
//! by the generator and replaced wholesale, never edited in place.

use crate::domain::types::CityId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Grid spacing used when a persisted document omits it (degrees)
pub const DEFAULT_GRID_SPACING: f64 = 0.005;

fn default_grid_spacing() -> f64 {
    DEFAULT_GRID_SPACING
}

fn default_density_factor() -> f64 {
    1.0
}

/// Invariant violations found when validating a configuration
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    #[error("{city_id}: bounds must satisfy min < max with the center inside")]
    InvalidBounds { city_id: CityId },

    #[error("{city_id}: grid spacing must be positive, got {spacing}")]
    InvalidGridSpacing { city_id: CityId, spacing: f64 },

    #[error("{city_id}: {field} must satisfy low < high")]
    InvalidRange { city_id: CityId, field: &'static str },

    #[error("{city_id}: {field} must be within [0, 1], got {value}")]
    FactorOutOfRange { city_id: CityId, field: &'static str, value: f64 },

    #[error("{city_id}: population density factor must be positive, got {value}")]
    InvalidDensityFactor { city_id: CityId, value: f64 },

    #[error("{city_id}: {field} must not be empty")]
    EmptyList { city_id: CityId, field: &'static str },

    #[error("{city_id}: state code must be two letters, got {state_code:?}")]
    InvalidStateCode { city_id: CityId, state_code: String },
}

/// Geographic rectangle around a city center
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
    pub center_lat: f64,
    pub center_lon: f64,
    /// Step between grid points in degrees
    #[serde(default = "default_grid_spacing")]
    pub grid_spacing: f64,
}

impl Bounds {
    /// Square rectangle extending `half_width` degrees from the center on each axis
    pub fn around(center_lat: f64, center_lon: f64, half_width: f64, grid_spacing: f64) -> Self {
        Self {
            min_lat: center_lat - half_width,
            max_lat: center_lat + half_width,
            min_lon: center_lon - half_width,
            max_lon: center_lon + half_width,
            center_lat,
            center_lon,
            grid_spacing,
        }
    }

    #[inline]
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        lat >= self.min_lat && lat <= self.max_lat && lon >= self.min_lon && lon <= self.max_lon
    }

    /// True when min < max on both axes and the center lies inside
    pub fn is_well_formed(&self) -> bool {
        self.min_lat < self.max_lat
            && self.min_lon < self.max_lon
            && self.contains(self.center_lat, self.center_lon)
    }

    /// `(min_lat, max_lat, min_lon, max_lon)`
    pub fn as_tuple(&self) -> (f64, f64, f64, f64) {
        (self.min_lat, self.max_lat, self.min_lon, self.max_lon)
    }

    /// Lazy row-major grid over the rectangle (all longitudes for each latitude).
    ///
    /// Both axes are half-open: `min + i * spacing` for every `i` that stays
    /// strictly below `max`. Calling this again restarts the sequence.
    pub fn grid_points(&self) -> GridPoints {
        let lat_steps = axis_steps(self.min_lat, self.max_lat, self.grid_spacing);
        let lon_steps = axis_steps(self.min_lon, self.max_lon, self.grid_spacing);
        GridPoints {
            min_lat: self.min_lat,
            min_lon: self.min_lon,
            spacing: self.grid_spacing,
            lon_steps,
            // Saturates for absurdly fine spacings instead of overflowing
            total: lat_steps.saturating_mul(lon_steps),
            next: 0,
        }
    }
}

/// Number of `min + i * step` values strictly below `max`
fn axis_steps(min: f64, max: f64, step: f64) -> usize {
    if !(step > 0.0) || !(max > min) || !step.is_finite() {
        return 0;
    }
    let mut count = ((max - min) / step).ceil() as usize;
    // Float division can overshoot by one step right at the edge
    while count > 0 && min + (count - 1) as f64 * step >= max {
        count -= 1;
    }
    count
}

/// Finite iterator over `(lat, lon)` grid points
#[derive(Debug, Clone)]
pub struct GridPoints {
    min_lat: f64,
    min_lon: f64,
    spacing: f64,
    lon_steps: usize,
    total: usize,
    next: usize,
}

impl Iterator for GridPoints {
    type Item = (f64, f64);

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.total {
            return None;
        }
        let row = self.next / self.lon_steps;
        let col = self.next % self.lon_steps;
        self.next += 1;
        Some((
            self.min_lat + row as f64 * self.spacing,
            self.min_lon + col as f64 * self.spacing,
        ))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for GridPoints {}

/// Expected demographic ranges used to normalize collected data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Demographics {
    pub typical_population_range: (u32, u32),
    pub typical_income_range: (u32, u32),
    pub typical_age_range: (f64, f64),
    #[serde(default = "default_density_factor")]
    pub population_density_factor: f64,
}

/// Market lookups and naming variants for external APIs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketData {
    pub state_code: String,
    pub county_name: String,
    /// Always starts with the bare city name
    pub city_name_variations: Vec<String>,
    pub rental_api_city_name: String,
    #[serde(default)]
    pub major_universities: Vec<String>,
    #[serde(default)]
    pub major_employers: Vec<String>,
}

/// Competitor identifiers and market factors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetitorData {
    pub primary_competitor: String,
    pub competitor_search_terms: Vec<String>,
    pub market_saturation_factor: f64,
    pub fast_casual_preference_score: f64,
}

/// Complete configuration for one city
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityConfiguration {
    pub city_id: CityId,
    /// `"<City>, <ST>"`
    pub display_name: String,
    pub bounds: Bounds,
    pub demographics: Demographics,
    pub market_data: MarketData,
    pub competitor_data: CompetitorData,
}

impl CityConfiguration {
    /// Check every model invariant, returning the first violation found
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let city_id = || self.city_id.clone();

        if !self.bounds.is_well_formed() {
            return Err(ConfigurationError::InvalidBounds { city_id: city_id() });
        }
        if !(self.bounds.grid_spacing > 0.0) {
            return Err(ConfigurationError::InvalidGridSpacing {
                city_id: city_id(),
                spacing: self.bounds.grid_spacing,
            });
        }

        let demo = &self.demographics;
        if demo.typical_population_range.0 >= demo.typical_population_range.1 {
            return Err(ConfigurationError::InvalidRange {
                city_id: city_id(),
                field: "typical_population_range",
            });
        }
        if demo.typical_income_range.0 >= demo.typical_income_range.1 {
            return Err(ConfigurationError::InvalidRange {
                city_id: city_id(),
                field: "typical_income_range",
            });
        }
        if !(demo.typical_age_range.0 < demo.typical_age_range.1) {
            return Err(ConfigurationError::InvalidRange {
                city_id: city_id(),
                field: "typical_age_range",
            });
        }
        if !(demo.population_density_factor > 0.0) {
            return Err(ConfigurationError::InvalidDensityFactor {
                city_id: city_id(),
                value: demo.population_density_factor,
            });
        }

        let market = &self.market_data;
        if market.state_code.len() != 2 || !market.state_code.chars().all(|c| c.is_ascii_alphabetic())
        {
            return Err(ConfigurationError::InvalidStateCode {
                city_id: city_id(),
                state_code: market.state_code.clone(),
            });
        }
        if market.city_name_variations.is_empty() {
            return Err(ConfigurationError::EmptyList {
                city_id: city_id(),
                field: "city_name_variations",
            });
        }

        let comp = &self.competitor_data;
        if comp.competitor_search_terms.is_empty() {
            return Err(ConfigurationError::EmptyList {
                city_id: city_id(),
                field: "competitor_search_terms",
            });
        }
        for (field, value) in [
            ("market_saturation_factor", comp.market_saturation_factor),
            ("fast_casual_preference_score", comp.fast_casual_preference_score),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigurationError::FactorOutOfRange {
                    city_id: city_id(),
                    field,
                    value,
                });
            }
        }

        Ok(())
    }
}
