//! Deterministic synthetic location data
//!
//! Used whenever real collection fails or returns nothing, so a load always
//! ends with a displayable dataset. The PRNG is seeded from a stable hash of
//! the city id: the same city always gets the same table.

use crate::domain::location::{mean_position, CityData, LoadMetadata, LocationRow};
use crate::domain::types::CityId;
use crate::services::generator::ConfigGenerator;
use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;
use rustc_hash::FxHasher;
use std::hash::{Hash, Hasher};
use tracing::info;

pub const DEFAULT_ROWS: usize = 100;
pub const MINIMAL_ROWS: usize = 25;

/// Reference point the synthetic coordinates scatter around
const REFERENCE_LAT: f64 = 40.7;
const REFERENCE_LON: f64 = -74.0;
/// Standard deviation of the coordinate scatter (degrees)
const POSITION_SPREAD: f64 = 0.1;

pub const SYNTHETIC_NOTE: &str = "Synthetic data generated as fallback";
const SYNTHETIC_TRAIN_R2: f64 = 0.85;

/// Stable 64-bit seed for a city id
pub fn seed_for(city_id: &CityId) -> u64 {
    let mut hasher = FxHasher::default();
    city_id.as_str().hash(&mut hasher);
    hasher.finish()
}

/// Builds placeholder datasets when collection fails
#[derive(Debug, Clone)]
pub struct SyntheticFallback {
    rows: usize,
    generator: ConfigGenerator,
}

impl Default for SyntheticFallback {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS)
    }
}

impl SyntheticFallback {
    pub fn new(rows: usize) -> Self {
        Self { rows, generator: ConfigGenerator::new() }
    }

    /// Smaller table for quick previews
    pub fn minimal() -> Self {
        Self::new(MINIMAL_ROWS)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Synthetic rows for a city. Columns are drawn one at a time in a fixed
    /// order so the table depends only on the seed and the row count.
    pub fn locations(&self, city_id: &CityId) -> Vec<LocationRow> {
        let n = self.rows;
        let mut rng = StdRng::seed_from_u64(seed_for(city_id));

        let lats: Vec<f64> = (0..n).map(|_| normal(&mut rng, REFERENCE_LAT)).collect();
        let lons: Vec<f64> = (0..n).map(|_| normal(&mut rng, REFERENCE_LON)).collect();
        let revenue = uniform_column(&mut rng, n, 2_800_000.0, 8_500_000.0);
        let income = uniform_column(&mut rng, n, 35_000.0, 120_000.0);
        let age = uniform_column(&mut rng, n, 25.0, 65.0);
        let population = uniform_column(&mut rng, n, 2_000.0, 25_000.0);
        let traffic = uniform_column(&mut rng, n, 20.0, 95.0);
        let commercial = uniform_column(&mut rng, n, 25.0, 90.0);
        let distance = uniform_column(&mut rng, n, 0.1, 8.0);
        let density: Vec<u32> = (0..n).map(|_| rng.random_range(0..8)).collect();

        (0..n)
            .map(|i| LocationRow {
                latitude: lats[i],
                longitude: lons[i],
                predicted_revenue: revenue[i],
                median_income: income[i],
                median_age: age[i],
                population: population[i],
                traffic_score: traffic[i],
                commercial_score: commercial[i],
                distance_to_primary_competitor: distance[i],
                competition_density: density[i],
            })
            .collect()
    }

    /// Full fallback dataset for a city.
    ///
    /// `display_name` falls back to the title-cased city id. `error` is the
    /// collection failure that triggered the fallback, recorded in metadata.
    pub fn generate(
        &self,
        city_id: &CityId,
        display_name: Option<&str>,
        error: Option<String>,
    ) -> CityData {
        let locations = self.locations(city_id);
        let (center_lat, center_lon) =
            mean_position(&locations).unwrap_or((REFERENCE_LAT, REFERENCE_LON));
        let display_name = display_name.map(str::to_string).unwrap_or_else(|| city_id.title_case());
        let source_config =
            self.generator.placeholder(city_id, &display_name, center_lat, center_lon);

        info!(
            city_id = %city_id,
            rows = %locations.len(),
            "synthetic_data_generated"
        );

        CityData {
            city_id: city_id.clone(),
            locations,
            metadata: LoadMetadata {
                synthetic: true,
                error,
                note: Some(SYNTHETIC_NOTE.to_string()),
                train_r2: Some(SYNTHETIC_TRAIN_R2),
                generated_at: Some(Utc::now()),
            },
            source_config,
        }
    }
}

fn normal(rng: &mut StdRng, mean: f64) -> f64 {
    let z: f64 = rng.sample(StandardNormal);
    mean + POSITION_SPREAD * z
}

fn uniform_column(rng: &mut StdRng, n: usize, low: f64, high: f64) -> Vec<f64> {
    (0..n).map(|_| rng.random_range(low..high)).collect()
}
