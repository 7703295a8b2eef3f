//! bizwiz - city configuration generator and on-demand data loader
//!
//! Module structure:
//! - `domain/` - Core types (CityConfiguration, LocationRow, LoadProgress)
//! - `io/` - External interfaces (city sources, collector, JSON store)
//! - `services/` - Business logic (ConfigGenerator, LoadOrchestrator, SyntheticFallback)
//! - `infra/` - Infrastructure (Config, Metrics)

use anyhow::bail;
use bizwiz::domain::CityConfiguration;
use bizwiz::infra::{Config, Metrics};
use bizwiz::io::{ConfigStore, UnavailableCollector};
use bizwiz::services::{LoadOrchestrator, LoadRequest, LoaderSettings, RequestOutcome};
use clap::{Parser, Subcommand};
use parking_lot::RwLock;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tracing::{info, warn};
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::EnvFilter;

const LONG_VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("BIZWIZ_GIT_HASH"), ")");

/// bizwiz - US city configurations for site-selection analysis
#[derive(Parser, Debug)]
#[command(name = "bizwiz", version, long_version = LONG_VERSION, about)]
struct Args {
    /// Path to TOML configuration file (falls back to CONFIG_FILE, then config/dev.toml)
    #[arg(short, long)]
    config: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Regenerate every city configuration from the city source
    Generate,
    /// List all configured city ids
    List,
    /// Find cities whose id or display name contains a query
    Search { query: String },
    /// List cities in a state
    State { state_code: String },
    /// List cities whose typical population range lies within bounds
    Population { min: u32, max: u32 },
    /// Summary of the stored configurations
    Stats,
    /// Make a city the current selection
    Select { city_id: String },
    /// Load location data for a city and report progress
    Load {
        city_id: String,
        /// Collect again even if this city's data is already loaded
        #[arg(long)]
        force_refresh: bool,
    },
}

fn init_logging(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(UtcTime::rfc_3339())
        .with_target(false)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.log_json);

    let config_path = args.config.clone().unwrap_or_else(|| Config::resolve_config_path(&[]));
    let config = Config::load_from_path(&config_path);
    info!(
        config_file = %config.config_file(),
        store_path = %config.store_path().display(),
        city_source = ?config.city_source(),
        collection_timeout_secs = %config.collection_timeout_secs(),
        synthetic_rows = %config.synthetic_rows(),
        "config_loaded"
    );

    // `generate` skips the load: loading a missing or corrupt document
    // already regenerates it
    let mut store = match args.command {
        Command::Generate => ConfigStore::from_config(&config),
        _ => ConfigStore::open(&config),
    };

    match args.command {
        Command::Generate => {
            let count = store.regenerate();
            println!("Generated {} city configurations in {}", count, store.path().display());
        }
        Command::List => {
            for city_id in store.list_cities() {
                println!("{}", city_id);
            }
        }
        Command::Search { query } => print_configs(&store.search(&query)),
        Command::State { state_code } => print_configs(&store.by_state(&state_code)),
        Command::Population { min, max } => {
            if min > max {
                bail!("population range is empty: {} > {}", min, max);
            }
            print_configs(&store.by_population_range(min, max))
        }
        Command::Stats => print_stats(&store),
        Command::Select { city_id } => {
            if !store.set_current(&city_id) {
                bail!("unknown city id: {}", city_id);
            }
            println!("Current city: {}", store.current_city_name());
        }
        Command::Load { city_id, force_refresh } => {
            run_load(&config, store, &city_id, force_refresh).await?;
        }
    }

    Ok(())
}

fn print_configs(configs: &[&CityConfiguration]) {
    for config in configs {
        let (low, high) = config.demographics.typical_population_range;
        println!(
            "{:<28} {:<32} pop {:>6}-{:<6} grid {:.3}",
            config.city_id.as_str(),
            config.display_name,
            low,
            high,
            config.bounds.grid_spacing
        );
    }
    println!("{} cities", configs.len());
}

fn print_stats(store: &ConfigStore) {
    let stats = store.stats();
    println!("Total cities:   {}", stats.total_cities);
    println!("States covered: {}", stats.states_covered);
    println!("Current city:   {}", store.current_city_name());
    println!(
        "Size classes:   small {} | medium {} | large {} | major {}",
        stats.size_classes.small,
        stats.size_classes.medium,
        stats.size_classes.large,
        stats.size_classes.major
    );
    println!("Top states:");
    for (state, count) in stats.per_state.iter().take(10) {
        println!("  {:<3} {}", state, count);
    }
}

async fn run_load(
    config: &Config,
    store: ConfigStore,
    city_id: &str,
    force_refresh: bool,
) -> anyhow::Result<()> {
    let metrics = Arc::new(Metrics::new());
    let settings = LoaderSettings::from_config(config);
    let poll_interval = settings.poll_interval.max(Duration::from_millis(10));
    let orchestrator = LoadOrchestrator::new(
        Arc::new(RwLock::new(store)),
        Arc::new(UnavailableCollector),
        settings,
        metrics.clone(),
        Handle::current(),
    );

    // Periodic metrics log (0 disables)
    let metrics_interval = config.metrics_interval_secs();
    if metrics_interval > 0 {
        let reporter = metrics.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(metrics_interval));
            interval.tick().await;
            loop {
                interval.tick().await;
                reporter.report().log();
            }
        });
    }

    let mut request = LoadRequest::new(city_id);
    if force_refresh {
        request = request.force_refresh();
    }
    match orchestrator.request_load(request) {
        RequestOutcome::Started { .. } => {}
        RequestOutcome::AlreadyLoaded => {
            println!("{} is already loaded", city_id);
            return Ok(());
        }
        RequestOutcome::AlreadyLoading { city_id } => {
            println!("A load for {} is already running", city_id);
            return Ok(());
        }
    }

    let mut interval = tokio::time::interval(poll_interval);
    let mut last_line = String::new();
    let status = loop {
        tokio::select! {
            _ = interval.tick() => {
                let status = orchestrator.snapshot();
                if !status.loading {
                    break status;
                }
                if let Some(progress) = &status.progress {
                    let line = format!("[{:>5.1}%] {}", progress.percent, progress.describe());
                    if line != last_line {
                        println!("{}", line);
                        last_line = line;
                    }
                }
            }
            _ = tokio::signal::ctrl_c() => {
                info!("shutdown_signal_received");
                orchestrator.cancel();
                break orchestrator.snapshot();
            }
        }
    };

    match &status.result {
        Some(data) if data.city_id.as_str() == city_id => {
            println!(
                "{}: {} locations ({})",
                data.source_config.display_name,
                data.locations.len(),
                data.source_label()
            );
            if let Some(r2) = data.metadata.train_r2 {
                println!("Model fit (R²): {:.2}", r2);
            }
            if let Some(error) = &data.metadata.error {
                println!("Fallback reason: {}", error);
            }
        }
        _ => {
            let reason = status.last_error.as_deref().unwrap_or("no data");
            warn!(city_id = %city_id, reason = %reason, "load_ended_without_data");
            println!("No data loaded for {}: {}", city_id, reason);
        }
    }

    metrics.report().log();
    Ok(())
}
