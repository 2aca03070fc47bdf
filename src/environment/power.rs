//! NASA POWER daily point API client
//!
//! Requests daily 2m temperature (`T2M`), corrected precipitation
//! (`PRECTOTCORR`) and 2m relative humidity (`RH2M`) for a coordinate and
//! date range.

use std::collections::BTreeMap;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info, instrument};

use super::{ClimateDataProvider, ClimateSeries};
use crate::config::EnvironmentConfig;
use crate::models::{ObservationPeriod, RegionSelection};
use crate::{Result, http};

/// POWER marks missing days with this value
pub const FILL_VALUE: f64 = -999.0;

const PARAMETERS: &str = "T2M,PRECTOTCORR,RH2M";

pub struct PowerClient {
    client: Client,
    base_url: String,
    community: String,
}

#[derive(Debug, Deserialize)]
struct PowerResponse {
    properties: Properties,
}

#[derive(Debug, Deserialize)]
struct Properties {
    parameter: Parameters,
}

/// Each series is keyed by `YYYYMMDD`
#[derive(Debug, Deserialize)]
struct Parameters {
    #[serde(rename = "T2M", default)]
    temperature: BTreeMap<String, f64>,
    #[serde(rename = "PRECTOTCORR", default)]
    precipitation: BTreeMap<String, f64>,
    #[serde(rename = "RH2M", default)]
    relative_humidity: BTreeMap<String, f64>,
}

fn valid_samples(series: BTreeMap<String, f64>) -> Vec<f64> {
    series
        .into_values()
        .filter(|value| value.is_finite() && *value != FILL_VALUE)
        .collect()
}

impl From<PowerResponse> for ClimateSeries {
    fn from(response: PowerResponse) -> Self {
        let parameter = response.properties.parameter;
        ClimateSeries {
            temperature: valid_samples(parameter.temperature),
            precipitation: valid_samples(parameter.precipitation),
            relative_humidity: valid_samples(parameter.relative_humidity),
        }
    }
}

impl PowerClient {
    pub fn new(config: &EnvironmentConfig, user_agent: &str) -> Result<Self> {
        Ok(Self {
            client: http::build_client(config.timeout_seconds, user_agent)?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            community: config.community.clone(),
        })
    }

    fn daily_point_url(&self, region: &RegionSelection, period: &ObservationPeriod) -> String {
        let (start, end) = period.compact_bounds();
        format!(
            "{}/temporal/daily/point?parameters={}&community={}&longitude={}&latitude={}&start={}&end={}&format=JSON",
            self.base_url, PARAMETERS, self.community, region.longitude, region.latitude, start, end
        )
    }
}

#[async_trait]
impl ClimateDataProvider for PowerClient {
    #[instrument(name = "power_daily_point", skip(self, region, period), fields(region = %region.display_name))]
    async fn daily_series(
        &self,
        region: &RegionSelection,
        period: &ObservationPeriod,
    ) -> Result<ClimateSeries> {
        info!(
            "Getting daily climate series for coordinates: {}",
            region.format_coordinates()
        );

        let response: PowerResponse =
            http::get_json(&self.client, &self.daily_point_url(region, period)).await?;
        let series = ClimateSeries::from(response);

        debug!(
            temperature_days = series.temperature.len(),
            precipitation_days = series.precipitation.len(),
            humidity_days = series.relative_humidity.len(),
            "Parsed POWER series"
        );
        Ok(series)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_daily_point_url() {
        let client = PowerClient::new(&EnvironmentConfig::default(), "AgriSphere/test").unwrap();
        let region = RegionSelection::new(-8.7832, 34.5085, "Sub-Saharan Africa");
        let url = client.daily_point_url(&region, &ObservationPeriod::default());
        assert_eq!(
            url,
            "https://power.larc.nasa.gov/api/temporal/daily/point?parameters=T2M,PRECTOTCORR,RH2M&community=AG&longitude=34.5085&latitude=-8.7832&start=20240101&end=20240331&format=JSON"
        );
    }

    #[test]
    fn test_custom_period_in_url() {
        let client = PowerClient::new(&EnvironmentConfig::default(), "AgriSphere/test").unwrap();
        let region = RegionSelection::new(1.0, 2.0, "Test");
        let period = ObservationPeriod::new(
            NaiveDate::from_ymd_opt(2023, 7, 1).unwrap(),
            NaiveDate::from_ymd_opt(2023, 7, 31).unwrap(),
        );
        let url = client.daily_point_url(&region, &period);
        assert!(url.contains("&start=20230701&end=20230731&"));
    }

    #[test]
    fn test_parse_response_drops_fill_values() {
        let body = r#"{
            "type": "Feature",
            "geometry": {"type": "Point", "coordinates": [34.5085, -8.7832, 1200.0]},
            "properties": {
                "parameter": {
                    "T2M": {"20240101": 22.5, "20240102": 23.5, "20240103": -999.0},
                    "PRECTOTCORR": {"20240101": 6.0, "20240102": 8.0, "20240103": 10.0},
                    "RH2M": {"20240101": -999.0, "20240102": -999.0, "20240103": -999.0}
                }
            },
            "header": {"title": "NASA/POWER"}
        }"#;

        let response: PowerResponse = serde_json::from_str(body).unwrap();
        let series = ClimateSeries::from(response);

        assert_eq!(series.temperature, vec![22.5, 23.5]);
        assert_eq!(series.precipitation, vec![6.0, 8.0, 10.0]);
        assert!(series.relative_humidity.is_empty());
    }

    #[test]
    fn test_missing_parameter_is_empty_series() {
        let body = r#"{"properties": {"parameter": {"T2M": {"20240101": 5.0}}}}"#;
        let response: PowerResponse = serde_json::from_str(body).unwrap();
        let series = ClimateSeries::from(response);
        assert_eq!(series.temperature, vec![5.0]);
        assert!(series.precipitation.is_empty());
    }
}
