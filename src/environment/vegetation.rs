//! Vegetation index source
//!
//! No NDVI product is queried. The default source is a placeholder that
//! draws a pseudo-random value in [0.2, 1.0) and must not be read as
//! measured data. Tests and offline runs pin the value with
//! [`FixedVegetationIndex`].

use rand::RngExt;

use crate::models::RegionSelection;

pub const PLACEHOLDER_MIN: f64 = 0.2;
pub const PLACEHOLDER_MAX: f64 = 1.0;

pub trait VegetationIndexSource: Send + Sync {
    fn vegetation_index(&self, region: &RegionSelection) -> f64;
}

/// Placeholder NDVI estimate, uniformly drawn per call
pub struct PlaceholderVegetationIndex;

impl VegetationIndexSource for PlaceholderVegetationIndex {
    fn vegetation_index(&self, _region: &RegionSelection) -> f64 {
        rand::rng().random_range(PLACEHOLDER_MIN..PLACEHOLDER_MAX)
    }
}

/// Always reports the same value
pub struct FixedVegetationIndex(pub f64);

impl VegetationIndexSource for FixedVegetationIndex {
    fn vegetation_index(&self, _region: &RegionSelection) -> f64 {
        self.0
    }
}
