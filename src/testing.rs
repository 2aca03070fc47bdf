//! In-memory providers for unit tests

use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use crate::environment::{ClimateDataProvider, ClimateSeries};
use crate::geocoding::{GeocodedPlace, GeocodingProvider};
use crate::models::{ObservationPeriod, RegionSelection};
use crate::{AgriSphereError, Result};

/// Answers from a fixed table; unknown queries match nothing
#[derive(Default)]
pub struct StaticGeocoder {
    places: HashMap<String, Vec<GeocodedPlace>>,
    delays: HashMap<String, Duration>,
    failures: HashSet<String>,
    lookups: Arc<AtomicUsize>,
}

impl StaticGeocoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, query: &str, places: Vec<GeocodedPlace>) -> Self {
        self.places.insert(query.to_string(), places);
        self
    }

    pub fn with_delay(mut self, query: &str, delay: Duration) -> Self {
        self.delays.insert(query.to_string(), delay);
        self
    }

    /// Fail lookups of `query` with a network error (after any delay)
    pub fn with_failure(mut self, query: &str) -> Self {
        self.failures.insert(query.to_string());
        self
    }

    pub fn lookup_counter(&self) -> Arc<AtomicUsize> {
        self.lookups.clone()
    }
}

#[async_trait]
impl GeocodingProvider for StaticGeocoder {
    async fn lookup(&self, query: &str) -> Result<Vec<GeocodedPlace>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delays.get(query) {
            tokio::time::sleep(*delay).await;
        }
        if self.failures.contains(query) {
            return Err(AgriSphereError::network("timeout"));
        }
        Ok(self.places.get(query).cloned().unwrap_or_default())
    }
}

pub struct FailingGeocoder;

#[async_trait]
impl GeocodingProvider for FailingGeocoder {
    async fn lookup(&self, _query: &str) -> Result<Vec<GeocodedPlace>> {
        Err(AgriSphereError::network("connection reset by peer"))
    }
}

/// Returns the same series for every region, optionally after a delay
pub struct StaticClimate {
    series: ClimateSeries,
    delays: HashMap<String, Duration>,
}

impl StaticClimate {
    pub fn new(series: ClimateSeries) -> Self {
        Self {
            series,
            delays: HashMap::new(),
        }
    }

    /// Constant daily values for a week
    pub fn constant(temperature: f64, precipitation: f64, humidity: f64) -> Self {
        Self::new(ClimateSeries {
            temperature: vec![temperature; 7],
            precipitation: vec![precipitation; 7],
            relative_humidity: vec![humidity; 7],
        })
    }

    pub fn with_delay(mut self, region_name: &str, delay: Duration) -> Self {
        self.delays.insert(region_name.to_string(), delay);
        self
    }
}

#[async_trait]
impl ClimateDataProvider for StaticClimate {
    async fn daily_series(
        &self,
        region: &RegionSelection,
        _period: &ObservationPeriod,
    ) -> Result<ClimateSeries> {
        if let Some(delay) = self.delays.get(&region.display_name) {
            tokio::time::sleep(*delay).await;
        }
        Ok(self.series.clone())
    }
}

pub struct FailingClimate;

#[async_trait]
impl ClimateDataProvider for FailingClimate {
    async fn daily_series(
        &self,
        _region: &RegionSelection,
        _period: &ObservationPeriod,
    ) -> Result<ClimateSeries> {
        Err(AgriSphereError::network("API request failed with status: 503 Service Unavailable"))
    }
}
