//! Region selection model for geographic coordinates and a display label

use serde::{Deserialize, Serialize};

/// A resolved region the user picked, either by search or by preset
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RegionSelection {
    /// Latitude in decimal degrees (WGS84)
    pub latitude: f64,
    /// Longitude in decimal degrees (WGS84)
    pub longitude: f64,
    /// Label shown to the user
    pub display_name: String,
}

impl RegionSelection {
    /// Create a new region selection
    #[must_use]
    pub fn new(latitude: f64, longitude: f64, display_name: impl Into<String>) -> Self {
        Self {
            latitude,
            longitude,
            display_name: display_name.into(),
        }
    }

    /// Format location as coordinates string
    #[must_use]
    pub fn format_coordinates(&self) -> String {
        format!("{:.4}, {:.4}", self.latitude, self.longitude)
    }

    /// Whether both coordinates lie inside the WGS84 domain
    #[must_use]
    pub fn has_valid_coordinates(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}
