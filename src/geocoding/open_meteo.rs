//! `OpenMeteo` geocoding API (no API key required)

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{info, instrument, warn};

use super::{GeocodedPlace, GeocodingProvider};
use crate::config::GeocodingConfig;
use crate::{Result, http};

pub struct OpenMeteoGeocoder {
    client: Client,
    base_url: String,
}

/// Geocoding response from `OpenMeteo`
#[derive(Debug, Deserialize)]
struct GeocodingResponse {
    results: Option<Vec<GeocodingResult>>,
}

#[derive(Debug, Deserialize)]
struct GeocodingResult {
    name: String,
    latitude: f64,
    longitude: f64,
    country: Option<String>,
    admin1: Option<String>,
}

impl From<GeocodingResult> for GeocodedPlace {
    fn from(result: GeocodingResult) -> Self {
        let display_name = [Some(result.name), result.admin1, result.country]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(", ");

        GeocodedPlace {
            latitude: result.latitude,
            longitude: result.longitude,
            display_name,
        }
    }
}

impl OpenMeteoGeocoder {
    pub fn new(config: &GeocodingConfig) -> Result<Self> {
        Ok(Self {
            client: http::build_client(config.timeout_seconds, &config.user_agent)?,
            base_url: config.effective_base_url().trim_end_matches('/').to_string(),
        })
    }

    fn search_url(&self, query: &str) -> String {
        format!(
            "{}/search?name={}&count=1&language=en&format=json",
            self.base_url,
            urlencoding::encode(query)
        )
    }
}

#[async_trait]
impl GeocodingProvider for OpenMeteoGeocoder {
    #[instrument(name = "open_meteo_lookup", skip(self))]
    async fn lookup(&self, query: &str) -> Result<Vec<GeocodedPlace>> {
        let response: GeocodingResponse =
            http::get_json(&self.client, &self.search_url(query)).await?;

        // A missing `results` key is how OpenMeteo says nothing matched
        let places: Vec<GeocodedPlace> = response
            .results
            .unwrap_or_default()
            .into_iter()
            .map(GeocodedPlace::from)
            .collect();

        if places.is_empty() {
            warn!("No results found for location '{}'", query);
        } else {
            info!("Found {} geocoding results for '{}'", places.len(), query);
        }
        Ok(places)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeocoderKind;

    #[test]
    fn test_search_url() {
        let config = GeocodingConfig {
            provider: GeocoderKind::OpenMeteo,
            ..GeocodingConfig::default()
        };
        let geocoder = OpenMeteoGeocoder::new(&config).unwrap();
        assert_eq!(
            geocoder.search_url("Addis Ababa"),
            "https://geocoding-api.open-meteo.com/v1/search?name=Addis%20Ababa&count=1&language=en&format=json"
        );
    }

    #[test]
    fn test_display_name_joins_admin_and_country() {
        let body = r#"{"results":[{"id":1,"name":"Interlaken","latitude":46.68387,"longitude":7.86638,"country":"Switzerland","admin1":"Bern"}]}"#;
        let response: GeocodingResponse = serde_json::from_str(body).unwrap();
        let place = GeocodedPlace::from(response.results.unwrap().remove(0));
        assert_eq!(place.display_name, "Interlaken, Bern, Switzerland");
        assert_eq!(place.latitude, 46.68387);
    }

    #[test]
    fn test_missing_results_key() {
        let response: GeocodingResponse = serde_json::from_str(r#"{"generationtime_ms":0.3}"#).unwrap();
        assert!(response.results.is_none());
    }
}
