//! Geocoding providers
//!
//! Resolve a free-text query into candidate places. Any provider that returns
//! latitude, longitude and a display name can back the region resolver.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::Result;
use crate::config::{GeocoderKind, GeocodingConfig};
use crate::models::RegionSelection;

pub mod nominatim;
pub mod open_meteo;

pub use nominatim::NominatimGeocoder;
pub use open_meteo::OpenMeteoGeocoder;

/// One match returned by a geocoder, best first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodedPlace {
    pub latitude: f64,
    pub longitude: f64,
    pub display_name: String,
}

impl From<GeocodedPlace> for RegionSelection {
    fn from(place: GeocodedPlace) -> Self {
        RegionSelection::new(place.latitude, place.longitude, place.display_name)
    }
}

#[async_trait]
pub trait GeocodingProvider: Send + Sync {
    /// Look up `query`. An empty vector means nothing matched.
    async fn lookup(&self, query: &str) -> Result<Vec<GeocodedPlace>>;
}

/// Build the provider selected in the configuration
pub fn from_config(config: &GeocodingConfig) -> Result<Arc<dyn GeocodingProvider>> {
    Ok(match config.provider {
        GeocoderKind::Nominatim => Arc::new(NominatimGeocoder::new(config)?),
        GeocoderKind::OpenMeteo => Arc::new(OpenMeteoGeocoder::new(config)?),
    })
}
