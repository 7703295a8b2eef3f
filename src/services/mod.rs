//! Services - business logic and state management
//!
//! This module contains the core business logic services:
//! - `generator` - Derives city configurations from raw census records
//! - `synthetic` - Deterministic stand-in datasets when collection fails
//! - `status` - Shared load status snapshots
//! - `orchestrator` - Background load coordination

pub mod generator;
pub mod orchestrator;
pub mod status;
pub mod synthetic;

// Re-export commonly used types
pub use generator::{ConfigGenerator, RawCityRecord, RecordError};
pub use orchestrator::{LoadOrchestrator, LoadRequest, LoaderSettings, RequestOutcome};
pub use status::{LoadPhase, LoadStatus, StatusBoard};
pub use synthetic::SyntheticFallback;
