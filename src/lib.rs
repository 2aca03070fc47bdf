//! `AgriSphere` - Climate-resilient crop recommendations
//!
//! This library resolves a region from a search or a preset, loads its
//! averaged climate reading and recommends crops suited to that climate.

pub mod api;
pub mod cli;
pub mod config;
pub mod crops;
pub mod environment;
pub mod error;
pub mod geocoding;
pub mod http;
pub mod logging;
pub mod models;
pub mod notify;
pub mod region;
pub mod session;
pub mod web;

#[cfg(test)]
mod testing;

// Re-export core types for public API
pub use config::AgriSphereConfig;
pub use crops::{CATALOG, ClimateBand, CropAdvisor, Recommendation};
pub use environment::{EnvironmentalDataService, LoadOutcome, PowerClient};
pub use error::AgriSphereError;
pub use geocoding::{GeocodedPlace, GeocodingProvider};
pub use models::{CropRecord, EnvironmentalReading, EnvironmentalSummary, RegionSelection};
pub use region::{PRESET_REGIONS, PresetRegion, RegionResolver, SearchOutcome};
pub use session::{AppState, Session};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, AgriSphereError>;
