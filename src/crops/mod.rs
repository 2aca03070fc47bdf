//! Crop module
//!
//! - The static crop catalog
//! - Banded climate classification and crop recommendations

pub mod advisor;
pub mod catalog;

pub use advisor::{ClimateBand, CropAdvisor, MAX_RECOMMENDATIONS, Recommendation};
pub use catalog::CATALOG;
