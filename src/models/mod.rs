//! Data models for the AgriSphere application
//!
//! This module contains the core domain models organized by concern:
//! - Location: the region a user selected
//! - Crop: catalog records shown as recommendation cards
//! - Environment: averaged climate readings and their observation period

pub mod crop;
pub mod environment;
pub mod location;

// Re-export all public types for convenient access
pub use crop::CropRecord;
pub use environment::{EnvironmentalReading, EnvironmentalSummary, ObservationPeriod};
pub use location::RegionSelection;
