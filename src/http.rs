//! Shared HTTP plumbing for the geocoding and climate data clients

use std::time::{Duration, Instant};

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, warn};

use crate::{AgriSphereError, Result};

/// Responses slower than this are logged as a warning
const SLOW_RESPONSE: Duration = Duration::from_secs(5);

/// Build a client with the given timeout and user agent
pub fn build_client(timeout_seconds: u32, user_agent: &str) -> Result<Client> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_seconds.into()))
        .user_agent(user_agent)
        .build()
        .map_err(|e| AgriSphereError::config(format!("Failed to create HTTP client: {e}")))
}

/// GET `url` and decode the JSON body. Failures are not retried.
pub async fn get_json<T: DeserializeOwned>(client: &Client, url: &str) -> Result<T> {
    debug!("HTTP GET {}", url);
    let start_time = Instant::now();

    let response = client.get(url).send().await.map_err(|e| {
        error!("Request failed after {:.3}s: {}", start_time.elapsed().as_secs_f64(), e);
        AgriSphereError::from(e)
    })?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        warn!("HTTP {} from upstream: {}", status, body);
        return Err(AgriSphereError::network(format!(
            "API request failed with status: {} - {}",
            status,
            status.canonical_reason().unwrap_or("Unknown error")
        )));
    }

    let parse_start = Instant::now();
    let body = response.json::<T>().await.map_err(|e| {
        error!("Failed to parse response body: {}", e);
        AgriSphereError::from(e)
    })?;

    let total_duration = start_time.elapsed();
    info!(
        "Successful API request in {:.3}s (parse: {:.3}s)",
        total_duration.as_secs_f64(),
        parse_start.elapsed().as_secs_f64()
    );
    if total_duration > SLOW_RESPONSE {
        warn!("Slow API response detected: {:.3}s", total_duration.as_secs_f64());
    }

    Ok(body)
}
