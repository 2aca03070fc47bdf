//! OpenStreetMap Nominatim geocoding (no API key required)

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use super::{GeocodedPlace, GeocodingProvider};
use crate::config::GeocodingConfig;
use crate::{AgriSphereError, Result, http};

pub struct NominatimGeocoder {
    client: Client,
    base_url: String,
}

/// Nominatim reports coordinates as decimal strings
#[derive(Debug, Deserialize)]
struct SearchResult {
    lat: String,
    lon: String,
    display_name: String,
}

impl TryFrom<SearchResult> for GeocodedPlace {
    type Error = AgriSphereError;

    fn try_from(result: SearchResult) -> Result<Self> {
        let latitude = result.lat.trim().parse::<f64>().map_err(|_| {
            AgriSphereError::network(format!("Invalid latitude in geocoding response: {}", result.lat))
        })?;
        let longitude = result.lon.trim().parse::<f64>().map_err(|_| {
            AgriSphereError::network(format!("Invalid longitude in geocoding response: {}", result.lon))
        })?;

        Ok(GeocodedPlace {
            latitude,
            longitude,
            display_name: result.display_name,
        })
    }
}

impl NominatimGeocoder {
    pub fn new(config: &GeocodingConfig) -> Result<Self> {
        Ok(Self {
            client: http::build_client(config.timeout_seconds, &config.user_agent)?,
            base_url: config.effective_base_url().trim_end_matches('/').to_string(),
        })
    }

    fn search_url(&self, query: &str) -> String {
        format!(
            "{}/search?format=json&q={}&limit=1",
            self.base_url,
            urlencoding::encode(query)
        )
    }
}

fn into_places(results: Vec<SearchResult>) -> Result<Vec<GeocodedPlace>> {
    results.into_iter().map(GeocodedPlace::try_from).collect()
}

#[async_trait]
impl GeocodingProvider for NominatimGeocoder {
    #[instrument(name = "nominatim_lookup", skip(self))]
    async fn lookup(&self, query: &str) -> Result<Vec<GeocodedPlace>> {
        let results: Vec<SearchResult> = http::get_json(&self.client, &self.search_url(query)).await?;
        let places = into_places(results)?;

        if places.is_empty() {
            warn!("No results found for location '{}'", query);
        } else {
            debug!(
                "Geocoding results: {:?}",
                places
                    .iter()
                    .map(|p| format!("{} ({:.4}, {:.4})", p.display_name, p.latitude, p.longitude))
                    .collect::<Vec<_>>()
            );
        }
        Ok(places)
    }
}
