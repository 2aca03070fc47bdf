use std::sync::Arc;

use axum::{
    Router,
    extract::{Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::AgriSphereError;
use crate::crops::{CATALOG, CropAdvisor, Recommendation};
use crate::environment::EnvironmentalDataService;
use crate::geocoding::GeocodingProvider;
use crate::models::{CropRecord, EnvironmentalSummary, RegionSelection};
use crate::notify::Notifier;
use crate::region::{PRESET_REGIONS, PresetRegion, RegionResolver, SearchOutcome};

/// Shared handles for the request handlers
#[derive(Clone)]
pub struct ApiState {
    pub geocoder: Arc<dyn GeocodingProvider>,
    pub notifier: Arc<dyn Notifier>,
    pub environment: Arc<EnvironmentalDataService>,
}

#[derive(Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

#[derive(Deserialize)]
pub struct RegionParams {
    pub lat: f64,
    pub lon: f64,
    pub name: Option<String>,
}

impl RegionParams {
    fn selection(self) -> Result<RegionSelection, StatusCode> {
        let name = self
            .name
            .unwrap_or_else(|| format!("{:.4}, {:.4}", self.lat, self.lon));
        let selection = RegionSelection::new(self.lat, self.lon, name);
        if selection.has_valid_coordinates() {
            Ok(selection)
        } else {
            Err(StatusCode::BAD_REQUEST)
        }
    }
}

#[derive(Deserialize)]
pub struct ReadingParams {
    pub temperature: f64,
    pub precipitation: f64,
    pub soil_moisture: Option<f64>,
}

#[derive(Serialize)]
pub struct Overview {
    pub environment: EnvironmentalSummary,
    pub recommendation: Recommendation,
}

fn status_for(err: &AgriSphereError) -> StatusCode {
    match err {
        AgriSphereError::NotFound { .. } => StatusCode::NOT_FOUND,
        AgriSphereError::Validation { .. } => StatusCode::BAD_REQUEST,
        AgriSphereError::Network { .. } => StatusCode::BAD_GATEWAY,
        AgriSphereError::Config { .. } | AgriSphereError::Io { .. } => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

fn to_status(err: AgriSphereError) -> StatusCode {
    let status = status_for(&err);
    warn!("Request failed with {}: {}", status, err);
    status
}

pub fn router(state: ApiState) -> Router {
    Router::new()
        .route("/regions/presets", get(get_presets))
        .route("/regions/search", get(search_region))
        .route("/environment", get(get_environment))
        .route("/recommendations", get(get_recommendations))
        .route("/overview", get(get_overview))
        .route("/crops", get(get_crops))
        .with_state(state)
}

async fn get_presets() -> Json<Vec<PresetRegion>> {
    Json(PRESET_REGIONS.to_vec())
}

async fn search_region(
    State(state): State<ApiState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<RegionSelection>, StatusCode> {
    let resolver = RegionResolver::new(state.geocoder.clone(), state.notifier.clone());
    let mut query = params.q;

    let outcome = resolver.search(&mut query, |_| {}).await.map_err(to_status)?;
    search_response(outcome)
}

/// A fresh resolver per request never sees a newer search, so `Superseded`
/// only arises if a resolver is ever shared between requests.
fn search_response(outcome: SearchOutcome) -> Result<Json<RegionSelection>, StatusCode> {
    match outcome {
        SearchOutcome::Selected(selection) => Ok(Json(selection)),
        SearchOutcome::Superseded => Err(StatusCode::CONFLICT),
    }
}

async fn get_environment(
    State(state): State<ApiState>,
    Query(params): Query<RegionParams>,
) -> Result<Json<EnvironmentalSummary>, StatusCode> {
    let region = params.selection()?;
    let summary = state.environment.fetch(&region).await.map_err(to_status)?;
    Ok(Json(summary))
}

async fn get_recommendations(Query(params): Query<ReadingParams>) -> Json<Recommendation> {
    Json(CropAdvisor::recommend(
        params.temperature,
        params.precipitation,
        params.soil_moisture.unwrap_or(0.0),
    ))
}

async fn get_overview(
    State(state): State<ApiState>,
    Query(params): Query<RegionParams>,
) -> Result<Json<Overview>, StatusCode> {
    let region = params.selection()?;
    let environment = state.environment.fetch(&region).await.map_err(to_status)?;
    let recommendation = CropAdvisor::recommend_for(&environment.reading);
    Ok(Json(Overview {
        environment,
        recommendation,
    }))
}

async fn get_crops() -> Json<Vec<&'static CropRecord>> {
    Json(CATALOG.to_vec())
}
