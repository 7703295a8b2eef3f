//! City configuration generator
//!
//! Derives a full `CityConfiguration` from a raw city record. Every
//! population-dependent value comes from an ordered `(threshold, value)`
//! table searched from the highest threshold down; a tier `T` matches when
//! `population > T`, so a population sitting exactly on a threshold falls
//! into the next smaller tier. The last row of each table is the baseline.

use crate::domain::city::{Bounds, CityConfiguration, CompetitorData, Demographics, MarketData};
use crate::domain::types::CityId;
use serde::Deserialize;
use thiserror::Error;
use tracing::{info, warn};

/// Threshold that every valid population clears
const BASELINE: i64 = i64::MIN;

/// Bounds half-width in degrees
const BOUNDS_SIZE_TIERS: [(i64, f64); 6] = [
    (2_000_000, 0.30),
    (1_000_000, 0.20),
    (500_000, 0.15),
    (200_000, 0.10),
    (100_000, 0.08),
    (BASELINE, 0.05),
];

/// Grid spacing in degrees
const GRID_SPACING_TIERS: [(i64, f64); 2] = [(500_000, 0.005), (BASELINE, 0.008)];

struct DemographicsTier {
    population_range: (u32, u32),
    income_range: (u32, u32),
    age_range: (f64, f64),
    density_factor: f64,
}

const DEMOGRAPHICS_TIERS: [(i64, DemographicsTier); 4] = [
    (
        1_000_000,
        DemographicsTier {
            population_range: (10_000, 50_000),
            income_range: (50_000, 120_000),
            age_range: (25.0, 45.0),
            density_factor: 1.5,
        },
    ),
    (
        500_000,
        DemographicsTier {
            population_range: (5_000, 25_000),
            income_range: (45_000, 100_000),
            age_range: (25.0, 50.0),
            density_factor: 1.2,
        },
    ),
    (
        200_000,
        DemographicsTier {
            population_range: (3_000, 15_000),
            income_range: (40_000, 80_000),
            age_range: (25.0, 55.0),
            density_factor: 1.0,
        },
    ),
    (
        BASELINE,
        DemographicsTier {
            population_range: (2_000, 10_000),
            income_range: (35_000, 70_000),
            age_range: (25.0, 60.0),
            density_factor: 0.8,
        },
    ),
];

pub const PRIMARY_COMPETITOR: &str = "chick-fil-a";

/// State code for placeholders whose city id carries no state suffix
pub const UNKNOWN_STATE_CODE: &str = "XX";

const BASE_COMPETITORS: [&str; 7] =
    ["mcdonalds", "kfc", "taco-bell", "burger-king", "subway", "wendys", "popeyes"];

struct CompetitorTier {
    /// How many of `BASE_COMPETITORS` to keep
    base_terms: usize,
    fast_casual_terms: &'static [&'static str],
    saturation: f64,
    fast_casual_preference: f64,
}

const COMPETITOR_TIERS: [(i64, CompetitorTier); 4] = [
    (
        1_000_000,
        CompetitorTier {
            base_terms: 7,
            fast_casual_terms: &["chipotle", "panera", "five-guys", "shake-shack"],
            saturation: 0.95,
            fast_casual_preference: 0.9,
        },
    ),
    (
        500_000,
        CompetitorTier {
            base_terms: 7,
            fast_casual_terms: &["chipotle", "panera"],
            saturation: 0.85,
            fast_casual_preference: 0.85,
        },
    ),
    (
        200_000,
        CompetitorTier {
            base_terms: 7,
            fast_casual_terms: &[],
            saturation: 0.75,
            fast_casual_preference: 0.8,
        },
    ),
    (
        BASELINE,
        CompetitorTier {
            base_terms: 5,
            fast_casual_terms: &[],
            saturation: 0.60,
            fast_casual_preference: 0.75,
        },
    ),
];

/// First tier whose threshold the population exceeds, else the baseline row
fn first_match<T, const N: usize>(tiers: &[(i64, T); N], population: i64) -> &T {
    let (_, value) =
        tiers.iter().find(|(above, _)| population > *above).unwrap_or(&tiers[N - 1]);
    value
}

/// Bounds half-width in degrees for a city population
pub fn bounds_size(population: i64) -> f64 {
    *first_match(&BOUNDS_SIZE_TIERS, population)
}

/// Grid spacing in degrees for a city population
pub fn grid_spacing(population: i64) -> f64 {
    *first_match(&GRID_SPACING_TIERS, population)
}

pub fn demographics_for(population: i64) -> Demographics {
    let tier = first_match(&DEMOGRAPHICS_TIERS, population);
    Demographics {
        typical_population_range: tier.population_range,
        typical_income_range: tier.income_range,
        typical_age_range: tier.age_range,
        population_density_factor: tier.density_factor,
    }
}

pub fn competitor_data_for(population: i64) -> CompetitorData {
    let tier = first_match(&COMPETITOR_TIERS, population);
    let competitor_search_terms = BASE_COMPETITORS[..tier.base_terms]
        .iter()
        .chain(tier.fast_casual_terms.iter())
        .map(|term| term.to_string())
        .collect();
    CompetitorData {
        primary_competitor: PRIMARY_COMPETITOR.to_string(),
        competitor_search_terms,
        market_saturation_factor: tier.saturation,
        fast_casual_preference_score: tier.fast_casual_preference,
    }
}

/// Known universities and major employers by state, empty for unknown states
fn state_market_info(state_code: &str) -> (&'static [&'static str], &'static [&'static str]) {
    match state_code {
        "CA" => (
            &["UCLA", "USC", "Stanford", "UC Berkeley"],
            &["Apple", "Google", "Disney", "Tesla"],
        ),
        "TX" => (
            &["UT Austin", "Texas A&M", "Rice University"],
            &["ExxonMobil", "AT&T", "Dell", "Southwest Airlines"],
        ),
        "NY" => (
            &["Columbia", "NYU", "Cornell"],
            &["JPMorgan Chase", "Citigroup", "IBM", "Verizon"],
        ),
        "FL" => (
            &["University of Florida", "Florida State", "Miami"],
            &["Disney", "Publix", "FedEx", "NextEra Energy"],
        ),
        "ND" => (
            &["University of North Dakota", "North Dakota State University"],
            &["Sanford Health", "Altru Health System", "US Air Force"],
        ),
        _ => (&[], &[]),
    }
}

pub fn market_data_for(city_name: &str, state_code: &str, county_name: &str) -> MarketData {
    let (universities, employers) = state_market_info(state_code);
    MarketData {
        state_code: state_code.to_string(),
        county_name: county_name.to_string(),
        city_name_variations: vec![
            city_name.to_string(),
            format!("{} {}", city_name, state_code),
            format!("{}, {}", city_name, state_code),
        ],
        rental_api_city_name: city_name.to_string(),
        major_universities: universities.iter().map(|s| s.to_string()).collect(),
        major_employers: employers.iter().map(|s| s.to_string()).collect(),
    }
}

/// Reasons a raw city record is rejected
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecordError {
    #[error("{city}: population must be positive, got {population}")]
    NonPositivePopulation { city: String, population: i64 },

    #[error("{city}: latitude {lat} outside [-90, 90]")]
    LatitudeOutOfRange { city: String, lat: f64 },

    #[error("{city}: longitude {lon} outside [-180, 180]")]
    LongitudeOutOfRange { city: String, lon: f64 },

    #[error("{city}: state code must be two letters, got {state:?}")]
    InvalidStateCode { city: String, state: String },

    #[error("record has an empty city name")]
    EmptyCityName,

    #[error("row {row}: {reason}")]
    Malformed { row: usize, reason: String },
}

/// Raw city record as supplied by a city source.
///
/// Accepts both the short keys (`city`, `state`, `lat`, `lon`, `pop`) and
/// the upper-case dataset keys (`CITY`, `STATE_CODE`, `LATITUDE`, ...).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawCityRecord {
    #[serde(rename = "city", alias = "CITY", alias = "city_name")]
    pub city_name: String,
    #[serde(rename = "state", alias = "STATE_CODE", alias = "state_code")]
    pub state_code: String,
    #[serde(alias = "LATITUDE", alias = "latitude")]
    pub lat: f64,
    #[serde(alias = "LONGITUDE", alias = "longitude")]
    pub lon: f64,
    #[serde(rename = "pop", alias = "POPULATION", alias = "population")]
    pub population: i64,
    #[serde(default, alias = "COUNTY")]
    pub county: Option<String>,
}

impl RawCityRecord {
    pub fn new(
        city_name: &str,
        state_code: &str,
        lat: f64,
        lon: f64,
        population: i64,
        county: Option<&str>,
    ) -> Self {
        Self {
            city_name: city_name.to_string(),
            state_code: state_code.to_string(),
            lat,
            lon,
            population,
            county: county.map(str::to_string),
        }
    }
}

/// Pure derivation of city configurations from raw records
#[derive(Debug, Clone)]
pub struct ConfigGenerator {
    /// Log bulk progress every N records
    progress_every: usize,
}

impl Default for ConfigGenerator {
    fn default() -> Self {
        Self { progress_every: 50 }
    }
}

impl ConfigGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive a configuration from one record
    pub fn generate(&self, record: &RawCityRecord) -> Result<CityConfiguration, RecordError> {
        let city_name = record.city_name.trim();
        if city_name.is_empty() {
            return Err(RecordError::EmptyCityName);
        }
        let state_code = record.state_code.trim().to_ascii_uppercase();
        if state_code.len() != 2 || !state_code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(RecordError::InvalidStateCode {
                city: city_name.to_string(),
                state: record.state_code.clone(),
            });
        }
        if record.population <= 0 {
            return Err(RecordError::NonPositivePopulation {
                city: city_name.to_string(),
                population: record.population,
            });
        }
        if !(-90.0..=90.0).contains(&record.lat) {
            return Err(RecordError::LatitudeOutOfRange {
                city: city_name.to_string(),
                lat: record.lat,
            });
        }
        if !(-180.0..=180.0).contains(&record.lon) {
            return Err(RecordError::LongitudeOutOfRange {
                city: city_name.to_string(),
                lon: record.lon,
            });
        }

        let population = record.population;
        let county = match record.county.as_deref().map(str::trim) {
            Some(county) if !county.is_empty() => county.to_string(),
            _ => format!("{} County", city_name),
        };

        Ok(CityConfiguration {
            city_id: CityId::from_parts(city_name, &state_code),
            display_name: format!("{}, {}", city_name, state_code),
            bounds: Bounds::around(
                record.lat,
                record.lon,
                bounds_size(population),
                grid_spacing(population),
            ),
            demographics: demographics_for(population),
            market_data: market_data_for(city_name, &state_code, &county),
            competitor_data: competitor_data_for(population),
        })
    }

    /// Derive configurations for a batch, skipping rows that fail.
    ///
    /// Rows that could not even be parsed arrive as `Err` and are skipped the
    /// same way as records the generator rejects.
    pub fn generate_all<I>(&self, rows: I) -> Vec<CityConfiguration>
    where
        I: IntoIterator<Item = Result<RawCityRecord, RecordError>>,
    {
        let mut configs = Vec::new();
        let mut skipped = 0usize;

        for (idx, row) in rows.into_iter().enumerate() {
            match row.and_then(|record| self.generate(&record)) {
                Ok(config) => configs.push(config),
                Err(e) => {
                    skipped += 1;
                    warn!(row = %idx, error = %e, "city_record_skipped");
                }
            }

            if self.progress_every > 0 && (idx + 1) % self.progress_every == 0 {
                info!(processed = %(idx + 1), generated = %configs.len(), "city_generation_progress");
            }
        }

        info!(generated = %configs.len(), skipped = %skipped, "city_generation_complete");
        configs
    }

    /// Stand-in configuration for a city with no generated entry.
    ///
    /// Uses the baseline tier around the given center so it satisfies the
    /// same invariants as a generated configuration. Ids without a state
    /// suffix get `UNKNOWN_STATE_CODE`.
    pub fn placeholder(
        &self,
        city_id: &CityId,
        display_name: &str,
        center_lat: f64,
        center_lon: f64,
    ) -> CityConfiguration {
        let city_name = display_name.split(',').next().unwrap_or(display_name).trim();
        let state_code =
            city_id.state_code().unwrap_or_else(|| UNKNOWN_STATE_CODE.to_string());
        let baseline = BASELINE;
        CityConfiguration {
            city_id: city_id.clone(),
            display_name: display_name.to_string(),
            bounds: Bounds::around(
                center_lat,
                center_lon,
                bounds_size(baseline),
                grid_spacing(baseline),
            ),
            demographics: demographics_for(baseline),
            market_data: market_data_for(city_name, &state_code, ""),
            competitor_data: competitor_data_for(baseline),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pop: i64) -> RawCityRecord {
        RawCityRecord::new("Testville", "TX", 30.0, -97.0, pop, Some("Travis"))
    }

    #[test]
    fn test_bounds_size_tiers() {
        assert_eq!(bounds_size(8_336_817), 0.30);
        assert_eq!(bounds_size(2_000_001), 0.30);
        assert_eq!(bounds_size(2_000_000), 0.20);
        assert_eq!(bounds_size(1_000_001), 0.20);
        assert_eq!(bounds_size(1_000_000), 0.15);
        assert_eq!(bounds_size(500_001), 0.15);
        assert_eq!(bounds_size(500_000), 0.10);
        assert_eq!(bounds_size(200_001), 0.10);
        assert_eq!(bounds_size(200_000), 0.08);
        assert_eq!(bounds_size(100_001), 0.08);
        assert_eq!(bounds_size(100_000), 0.05);
        assert_eq!(bounds_size(1), 0.05);
    }

    #[test]
    fn test_bounds_size_non_increasing() {
        let populations = [1, 50_000, 100_000, 150_000, 200_001, 600_000, 1_500_000, 9_000_000];
        for pair in populations.windows(2) {
            assert!(bounds_size(pair[0]) <= bounds_size(pair[1]));
        }
    }

    #[test]
    fn test_grid_spacing() {
        assert_eq!(grid_spacing(500_001), 0.005);
        assert_eq!(grid_spacing(500_000), 0.008);
        assert_eq!(grid_spacing(59_166), 0.008);
    }

    #[test]
    fn test_demographics_tiers() {
        let large = demographics_for(2_693_976);
        assert_eq!(large.typical_population_range, (10_000, 50_000));
        assert_eq!(large.typical_income_range, (50_000, 120_000));
        assert_eq!(large.typical_age_range, (25.0, 45.0));
        assert_eq!(large.population_density_factor, 1.5);

        assert_eq!(demographics_for(1_000_000).typical_population_range, (5_000, 25_000));
        assert_eq!(demographics_for(500_000).typical_population_range, (3_000, 15_000));
        assert_eq!(demographics_for(200_000).typical_population_range, (2_000, 10_000));

        let small = demographics_for(59_166);
        assert_eq!(small.typical_age_range, (25.0, 60.0));
        assert_eq!(small.population_density_factor, 0.8);
    }

    #[test]
    fn test_demographics_monotonic_as_size_shrinks() {
        let tiers = [2_000_000, 700_000, 300_000, 50_000].map(demographics_for);
        for pair in tiers.windows(2) {
            assert!(pair[0].typical_age_range.1 < pair[1].typical_age_range.1);
            assert!(pair[0].population_density_factor > pair[1].population_density_factor);
        }
    }

    #[test]
    fn test_competitor_tiers() {
        let major = competitor_data_for(3_000_000);
        assert_eq!(major.primary_competitor, "chick-fil-a");
        assert_eq!(major.competitor_search_terms.len(), 11);
        assert_eq!(major.competitor_search_terms.last().map(String::as_str), Some("shake-shack"));
        assert_eq!(major.market_saturation_factor, 0.95);
        assert_eq!(major.fast_casual_preference_score, 0.9);

        let large = competitor_data_for(750_000);
        assert_eq!(large.competitor_search_terms.len(), 9);
        assert_eq!(large.market_saturation_factor, 0.85);

        let medium = competitor_data_for(250_000);
        assert_eq!(medium.competitor_search_terms, BASE_COMPETITORS.map(String::from).to_vec());
        assert_eq!(medium.market_saturation_factor, 0.75);
        assert_eq!(medium.fast_casual_preference_score, 0.8);

        let small = competitor_data_for(60_000);
        assert_eq!(
            small.competitor_search_terms,
            vec!["mcdonalds", "kfc", "taco-bell", "burger-king", "subway"]
        );
        assert_eq!(small.market_saturation_factor, 0.60);
        assert_eq!(small.fast_casual_preference_score, 0.75);
    }

    #[test]
    fn test_market_data_known_state() {
        let market = market_data_for("Grand Forks", "ND", "Grand Forks");
        assert_eq!(
            market.city_name_variations,
            vec!["Grand Forks", "Grand Forks ND", "Grand Forks, ND"]
        );
        assert_eq!(market.rental_api_city_name, "Grand Forks");
        assert_eq!(market.major_universities.len(), 2);
        assert!(market.major_employers.contains(&"Sanford Health".to_string()));
    }

    #[test]
    fn test_market_data_unknown_state() {
        let market = market_data_for("Boise", "ID", "Ada");
        assert!(market.major_universities.is_empty());
        assert!(market.major_employers.is_empty());
    }

    #[test]
    fn test_generate_full_config() {
        let generator = ConfigGenerator::new();
        let raw = RawCityRecord::new("New York", "NY", 40.7128, -74.0060, 8_336_817, Some("New York"));
        let config = generator.generate(&raw).unwrap();

        assert_eq!(config.city_id.as_str(), "new_york_ny");
        assert_eq!(config.display_name, "New York, NY");
        assert_eq!(config.bounds.center_lat, 40.7128);
        assert_eq!(config.bounds.center_lon, -74.0060);
        assert_eq!(config.bounds.min_lat, 40.7128 - 0.30);
        assert_eq!(config.bounds.grid_spacing, 0.005);
        assert_eq!(config.market_data.county_name, "New York");
        assert_eq!(config.market_data.major_universities, vec!["Columbia", "NYU", "Cornell"]);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_generate_is_deterministic() {
        let generator = ConfigGenerator::new();
        let raw = record(350_000);
        assert_eq!(generator.generate(&raw).unwrap(), generator.generate(&raw).unwrap());
    }

    #[test]
    fn test_generate_default_county() {
        let raw = RawCityRecord::new("Fargo", "nd", 46.8772, -96.7898, 125_990, None);
        let config = ConfigGenerator::new().generate(&raw).unwrap();
        assert_eq!(config.market_data.county_name, "Fargo County");
        assert_eq!(config.market_data.state_code, "ND");
        assert_eq!(config.display_name, "Fargo, ND");
    }

    #[test]
    fn test_generate_rejects_invalid_records() {
        let generator = ConfigGenerator::new();

        assert!(matches!(
            generator.generate(&record(0)),
            Err(RecordError::NonPositivePopulation { population: 0, .. })
        ));
        assert!(matches!(
            generator.generate(&record(-5)),
            Err(RecordError::NonPositivePopulation { .. })
        ));

        let mut raw = record(100);
        raw.lat = 90.5;
        assert!(matches!(generator.generate(&raw), Err(RecordError::LatitudeOutOfRange { .. })));

        let mut raw = record(100);
        raw.lon = -180.01;
        assert!(matches!(generator.generate(&raw), Err(RecordError::LongitudeOutOfRange { .. })));

        let mut raw = record(100);
        raw.state_code = "Texas".to_string();
        assert!(matches!(generator.generate(&raw), Err(RecordError::InvalidStateCode { .. })));

        let mut raw = record(100);
        raw.city_name = "  ".to_string();
        assert_eq!(generator.generate(&raw), Err(RecordError::EmptyCityName));
    }

    #[test]
    fn test_generate_accepts_coordinate_extremes() {
        let generator = ConfigGenerator::new();
        let mut raw = record(100);
        raw.lat = 90.0;
        raw.lon = -180.0;
        assert!(generator.generate(&raw).is_ok());
    }

    #[test]
    fn test_generate_all_skips_bad_rows() {
        let generator = ConfigGenerator::new();
        let rows = vec![
            Ok(RawCityRecord::new("Austin", "TX", 30.2672, -97.7431, 978_908, Some("Travis"))),
            Ok(record(0)),
            Err(RecordError::Malformed { row: 2, reason: "missing field `lat`".to_string() }),
            Ok(RawCityRecord::new("Fargo", "ND", 46.8772, -96.7898, 125_990, Some("Cass"))),
        ];
        let configs = generator.generate_all(rows);
        let ids: Vec<&str> = configs.iter().map(|c| c.city_id.as_str()).collect();
        assert_eq!(ids, vec!["austin_tx", "fargo_nd"]);
    }

    #[test]
    fn test_raw_record_accepts_both_key_styles() {
        let short: RawCityRecord = serde_json::from_value(serde_json::json!({
            "city": "Chicago", "state": "IL", "lat": 41.8781, "lon": -87.6298,
            "pop": 2693976, "county": "Cook"
        }))
        .unwrap();
        let upper: RawCityRecord = serde_json::from_value(serde_json::json!({
            "CITY": "Chicago", "STATE_CODE": "IL", "LATITUDE": 41.8781,
            "LONGITUDE": -87.6298, "POPULATION": 2693976, "COUNTY": "Cook"
        }))
        .unwrap();
        assert_eq!(short, upper);
        assert_eq!(short.county.as_deref(), Some("Cook"));
    }

    #[test]
    fn test_placeholder_is_valid() {
        let generator = ConfigGenerator::new();
        let config = generator.placeholder(&CityId::new("grand_forks_nd"), "Grand Forks, ND", 47.9, -97.0);
        assert_eq!(config.display_name, "Grand Forks, ND");
        assert_eq!(config.bounds.center_lat, 47.9);
        assert_eq!(config.market_data.state_code, "ND");
        assert_eq!(config.market_data.city_name_variations[0], "Grand Forks");
        assert_eq!(config.competitor_data.primary_competitor, PRIMARY_COMPETITOR);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_placeholder_without_state_suffix_is_valid() {
        let generator = ConfigGenerator::new();
        let id = CityId::new("atlantis");
        let config = generator.placeholder(&id, &id.title_case(), 40.7, -74.0);
        assert_eq!(config.display_name, "Atlantis");
        assert_eq!(config.market_data.state_code, UNKNOWN_STATE_CODE);
        assert_eq!(config.validate(), Ok(()));
    }
}
