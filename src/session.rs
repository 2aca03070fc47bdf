//! Application session
//!
//! [`AppState`] is owned by a single [`Session`]. Data flows one way: the
//! resolver reports a selection through its callback, the session stores it,
//! loads the environmental reading for it and derives the recommendations
//! from that reading.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};

use crate::Result;
use crate::crops::{CropAdvisor, Recommendation};
use crate::environment::{EnvironmentalDataService, LoadOutcome};
use crate::models::{EnvironmentalSummary, RegionSelection};
use crate::region::{PresetRegion, RegionResolver, SearchOutcome};

/// Everything the front end renders
#[derive(Debug, Clone, Default, Serialize)]
pub struct AppState {
    pub query: String,
    pub selected_region: Option<RegionSelection>,
    pub environment: Option<EnvironmentalSummary>,
    /// Present once a reading for the selected region is available
    pub recommendation: Option<Recommendation>,
}

pub struct Session {
    resolver: RegionResolver,
    environment: Arc<EnvironmentalDataService>,
    state: AppState,
}

impl Session {
    pub fn new(resolver: RegionResolver, environment: Arc<EnvironmentalDataService>) -> Self {
        Self {
            resolver,
            environment,
            state: AppState::default(),
        }
    }

    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.state.query = query.into();
    }

    /// Search for the current query and, on a match, load its data
    pub async fn search(&mut self) -> Result<()> {
        let mut selected = None;
        let outcome = self
            .resolver
            .search(&mut self.state.query, |selection| selected = Some(selection))
            .await?;

        match (outcome, selected) {
            (SearchOutcome::Selected(_), Some(selection)) => self.select_region(selection).await,
            _ => {
                debug!("Search produced no selection");
                Ok(())
            }
        }
    }

    /// Pick a preset region and load its data
    pub async fn select_preset(&mut self, preset: &PresetRegion) -> Result<()> {
        let mut selected = None;
        self.resolver
            .select_preset(preset, |selection| selected = Some(selection));

        match selected {
            Some(selection) => self.select_region(selection).await,
            None => Ok(()),
        }
    }

    /// Record a new selection, then load and classify its reading
    async fn select_region(&mut self, selection: RegionSelection) -> Result<()> {
        info!(
            "Selected region {} ({})",
            selection.display_name,
            selection.format_coordinates()
        );
        self.state.selected_region = Some(selection.clone());
        self.state.environment = None;
        self.state.recommendation = None;

        match self.environment.load(&selection).await? {
            LoadOutcome::Loaded(summary) => {
                let recommendation = CropAdvisor::recommend_for(&summary.reading);
                debug!(
                    band = %recommendation.band,
                    crops = ?recommendation.crop_names(),
                    "Recommendation for {}",
                    selection.display_name
                );
                self.state.environment = Some(summary);
                self.state.recommendation = Some(recommendation);
            }
            LoadOutcome::Superseded => {
                debug!("Environmental data for {} superseded", selection.display_name);
            }
        }
        Ok(())
    }
}
