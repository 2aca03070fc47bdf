//! Environmental data module
//!
//! Loads daily climate series for a region, reduces each series to its mean
//! and attaches a vegetation index to produce an [`EnvironmentalSummary`].

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use tracing::{debug, error, info};

use crate::Result;
use crate::models::{EnvironmentalReading, EnvironmentalSummary, ObservationPeriod, RegionSelection};
use crate::notify::{Notification, Notifier};

pub mod power;
pub mod vegetation;

pub use power::PowerClient;
pub use vegetation::{FixedVegetationIndex, PlaceholderVegetationIndex, VegetationIndexSource};

/// Daily samples for one region, missing days already removed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClimateSeries {
    pub temperature: Vec<f64>,
    pub precipitation: Vec<f64>,
    pub relative_humidity: Vec<f64>,
}

impl ClimateSeries {
    #[must_use]
    pub fn mean_reading(&self) -> EnvironmentalReading {
        EnvironmentalReading::new(
            mean(&self.temperature),
            mean(&self.precipitation),
            mean(&self.relative_humidity),
        )
    }
}

/// Arithmetic mean; NaN for an empty series
#[must_use]
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

#[async_trait]
pub trait ClimateDataProvider: Send + Sync {
    async fn daily_series(
        &self,
        region: &RegionSelection,
        period: &ObservationPeriod,
    ) -> Result<ClimateSeries>;
}

/// How a session load that did not fail ended
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    Loaded(EnvironmentalSummary),
    /// A load for a newer selection started first; this result was dropped
    Superseded,
}

pub struct EnvironmentalDataService {
    provider: Arc<dyn ClimateDataProvider>,
    vegetation: Arc<dyn VegetationIndexSource>,
    notifier: Arc<dyn Notifier>,
    period: ObservationPeriod,
    generation: AtomicU64,
}

impl EnvironmentalDataService {
    pub fn new(
        provider: Arc<dyn ClimateDataProvider>,
        vegetation: Arc<dyn VegetationIndexSource>,
        notifier: Arc<dyn Notifier>,
        period: ObservationPeriod,
    ) -> Self {
        Self {
            provider,
            vegetation,
            notifier,
            period,
            generation: AtomicU64::new(0),
        }
    }

    /// Fetch and summarize the climate for `region`, notifying the outcome.
    ///
    /// Independent of other calls; used by the stateless HTTP API.
    pub async fn fetch(&self, region: &RegionSelection) -> Result<EnvironmentalSummary> {
        let summary = self.summarize(region).await;
        self.report(&summary);
        summary
    }

    /// Like [`fetch`](Self::fetch), but a result is dropped when another
    /// `load` started after this one.
    pub async fn load(&self, region: &RegionSelection) -> Result<LoadOutcome> {
        let token = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let summary = self.summarize(region).await;

        if self.generation.load(Ordering::SeqCst) != token {
            debug!(token, "Discarding stale environmental data for {}", region.display_name);
            return Ok(LoadOutcome::Superseded);
        }

        self.report(&summary);
        summary.map(LoadOutcome::Loaded)
    }

    async fn summarize(&self, region: &RegionSelection) -> Result<EnvironmentalSummary> {
        let series = self.provider.daily_series(region, &self.period).await?;
        let reading = series.mean_reading();
        info!(
            "Environmental reading for {}: {} / {} / {}",
            region.display_name,
            reading.format_temperature(),
            reading.format_precipitation(),
            reading.format_soil_moisture()
        );

        Ok(EnvironmentalSummary {
            region: region.clone(),
            period: self.period,
            reading,
            vegetation_index: self.vegetation.vegetation_index(region),
        })
    }

    fn report(&self, summary: &Result<EnvironmentalSummary>) {
        match summary {
            Ok(_) => self
                .notifier
                .notify(Notification::success("Environmental data loaded successfully")),
            Err(e) => {
                error!("Error fetching environmental data: {}", e);
                self.notifier
                    .notify(Notification::error("Failed to load environmental data"));
            }
        }
    }
}
