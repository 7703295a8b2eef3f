//! bizwiz library
//!
//! City configuration generation and on-demand location data loading.
//! Exposes modules for integration testing and binary reuse.

pub mod domain;
pub mod infra;
pub mod io;
pub mod services;
