//! Region Resolution Module
//!
//! Turns a free-text search or a preset pick into a [`RegionSelection`] and
//! hands it to the caller through a selection callback.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

use serde::Serialize;
use tracing::{debug, error, info};

use crate::geocoding::GeocodingProvider;
use crate::models::RegionSelection;
use crate::notify::{Notification, Notifier};
use crate::{AgriSphereError, Result};

/// A named quick-select region with fixed coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PresetRegion {
    pub name: &'static str,
    pub latitude: f64,
    pub longitude: f64,
}

impl PresetRegion {
    /// Find a preset by name, ignoring case
    #[must_use]
    pub fn find(name: &str) -> Option<&'static PresetRegion> {
        let name = name.trim();
        PRESET_REGIONS
            .iter()
            .find(|preset| preset.name.eq_ignore_ascii_case(name))
    }

    #[must_use]
    pub fn selection(&self) -> RegionSelection {
        RegionSelection::new(self.latitude, self.longitude, self.name)
    }
}

/// Regions facing climate challenges, offered without a network lookup
pub static PRESET_REGIONS: [PresetRegion; 4] = [
    PresetRegion {
        name: "Sub-Saharan Africa",
        latitude: -8.7832,
        longitude: 34.5085,
    },
    PresetRegion {
        name: "Middle East",
        latitude: 29.2985,
        longitude: 42.5510,
    },
    PresetRegion {
        name: "South Asia",
        latitude: 22.3511,
        longitude: 78.6677,
    },
    PresetRegion {
        name: "Amazon Basin",
        latitude: -3.4653,
        longitude: -62.2159,
    },
];

/// How a search that did not fail ended
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// The callback received this selection
    Selected(RegionSelection),
    /// A newer search started before this one resolved; the response was dropped
    Superseded,
}

/// Decrements the in-flight counter when a lookup finishes, however it ends
struct LoadingGuard<'a>(&'a AtomicUsize);

impl<'a> LoadingGuard<'a> {
    fn start(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(counter)
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Service for resolving region searches and preset picks
pub struct RegionResolver {
    geocoder: Arc<dyn GeocodingProvider>,
    notifier: Arc<dyn Notifier>,
    generation: AtomicU64,
    in_flight: AtomicUsize,
}

impl RegionResolver {
    pub fn new(geocoder: Arc<dyn GeocodingProvider>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            geocoder,
            notifier,
            generation: AtomicU64::new(0),
            in_flight: AtomicUsize::new(0),
        }
    }

    /// Whether a geocoding lookup is currently pending
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst) > 0
    }

    /// Geocode the text in `query` and pass the best match to `on_select`.
    ///
    /// On success the query buffer is cleared. An empty result set yields
    /// [`AgriSphereError::NotFound`] without calling `on_select`. If another
    /// search starts while this one is pending, this response is discarded.
    pub async fn search<F>(&self, query: &mut String, on_select: F) -> Result<SearchOutcome>
    where
        F: FnOnce(RegionSelection) + Send,
    {
        let trimmed = query.trim().to_string();
        if trimmed.is_empty() {
            self.notifier
                .notify(Notification::error("Please enter a location to search"));
            return Err(AgriSphereError::validation("Please enter a location to search"));
        }

        let token = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let _loading = LoadingGuard::start(&self.in_flight);
        debug!(token, "Geocoding location name: {}", trimmed);

        let places = match self.geocoder.lookup(&trimmed).await {
            Ok(places) => places,
            Err(e) => {
                if !self.is_current(token) {
                    debug!(token, "Discarding stale geocoding failure for '{}': {}", trimmed, e);
                    return Ok(SearchOutcome::Superseded);
                }
                error!("Error searching location '{}': {}", trimmed, e);
                self.notifier
                    .notify(Notification::error("Failed to search location. Please try again."));
                return Err(e);
            }
        };

        if !self.is_current(token) {
            debug!(token, "Discarding stale geocoding response for '{}'", trimmed);
            return Ok(SearchOutcome::Superseded);
        }

        let Some(place) = places.into_iter().next() else {
            self.notifier.notify(Notification::error(
                "Location not found. Please try a different search term.",
            ));
            return Err(AgriSphereError::not_found(trimmed));
        };

        let selection = RegionSelection::from(place);
        info!(
            "Found location: {} ({:.4}, {:.4})",
            selection.display_name, selection.latitude, selection.longitude
        );

        on_select(selection.clone());
        self.notifier.notify(Notification::success(format!(
            "Loading data for {}",
            selection.display_name
        )));
        query.clear();

        Ok(SearchOutcome::Selected(selection))
    }

    /// Select a preset region without touching the network
    pub fn select_preset<F>(&self, preset: &PresetRegion, on_select: F) -> RegionSelection
    where
        F: FnOnce(RegionSelection),
    {
        // A preset pick supersedes any pending search
        self.generation.fetch_add(1, Ordering::SeqCst);

        let selection = preset.selection();
        debug!("Selected preset region {}", preset.name);
        on_select(selection.clone());
        self.notifier
            .notify(Notification::success(format!("Loading data for {}", preset.name)));
        selection
    }

    fn is_current(&self, token: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == token
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geocoding::GeocodedPlace;
    use crate::notify::{NotificationLevel, RecordingNotifier};
    use crate::testing::{FailingGeocoder, StaticGeocoder};
    use std::time::Duration;

    fn resolver_with(
        geocoder: impl GeocodingProvider + 'static,
    ) -> (RegionResolver, Arc<RecordingNotifier>) {
        let notifier = Arc::new(RecordingNotifier::new());
        let resolver = RegionResolver::new(Arc::new(geocoder), notifier.clone());
        (resolver, notifier)
    }

    fn nairobi() -> GeocodedPlace {
        GeocodedPlace {
            latitude: -1.2864,
            longitude: 36.8172,
            display_name: "Nairobi, Kenya".to_string(),
        }
    }

    #[tokio::test]
    async fn test_first_result_invokes_callback_once() {
        let second = GeocodedPlace {
            latitude: 10.0,
            longitude: 10.0,
            display_name: "Elsewhere".to_string(),
        };
        let (resolver, notifier) =
            resolver_with(StaticGeocoder::new().with("Nairobi", vec![nairobi(), second]));

        let mut query = "  Nairobi ".to_string();
        let mut calls = Vec::new();
        let outcome = resolver
            .search(&mut query, |selection| calls.push(selection))
            .await
            .unwrap();

        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0], RegionSelection::new(-1.2864, 36.8172, "Nairobi, Kenya"));
        assert_eq!(outcome, SearchOutcome::Selected(calls[0].clone()));
        assert!(query.is_empty(), "query should be cleared on success");

        let received = notifier.received();
        assert_eq!(received, vec![Notification::success("Loading data for Nairobi, Kenya")]);
        assert!(!resolver.is_loading());
    }

    #[tokio::test]
    async fn test_empty_results_signal_not_found() {
        let (resolver, notifier) = resolver_with(StaticGeocoder::new());

        let mut query = "Atlantis".to_string();
        let mut called = false;
        let result = resolver.search(&mut query, |_| called = true).await;

        assert!(matches!(result, Err(AgriSphereError::NotFound { ref query }) if query == "Atlantis"));
        assert!(!called);
        assert_eq!(query, "Atlantis", "query is kept when nothing matched");
        assert_eq!(
            notifier.received(),
            vec![Notification::error(
                "Location not found. Please try a different search term."
            )]
        );
    }

    #[tokio::test]
    async fn test_transport_failure_is_surfaced() {
        let (resolver, notifier) = resolver_with(FailingGeocoder);

        let mut query = "Lima".to_string();
        let mut called = false;
        let result = resolver.search(&mut query, |_| called = true).await;

        assert!(matches!(result, Err(AgriSphereError::Network { .. })));
        assert!(!called);
        let received = notifier.received();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0].level, NotificationLevel::Error);
        assert_eq!(received[0].message, "Failed to search location. Please try again.");
    }

    #[tokio::test]
    async fn test_blank_query_never_reaches_geocoder() {
        let geocoder = StaticGeocoder::new();
        let lookups = geocoder.lookup_counter();
        let (resolver, notifier) = resolver_with(geocoder);

        let mut query = "   ".to_string();
        let result = resolver.search(&mut query, |_| {}).await;

        assert!(matches!(result, Err(AgriSphereError::Validation { .. })));
        assert_eq!(lookups.load(Ordering::SeqCst), 0);
        assert_eq!(
            notifier.received(),
            vec![Notification::error("Please enter a location to search")]
        );
    }

    #[tokio::test]
    async fn test_stale_response_is_discarded() {
        let geocoder = StaticGeocoder::new()
            .with("slow", vec![nairobi()])
            .with(
                "fast",
                vec![GeocodedPlace {
                    latitude: 29.3,
                    longitude: 42.55,
                    display_name: "Riyadh".to_string(),
                }],
            )
            .with_delay("slow", Duration::from_millis(30));
        let (resolver, notifier) = resolver_with(geocoder);

        let mut slow_query = "slow".to_string();
        let mut fast_query = "fast".to_string();
        let mut slow_calls = 0;
        let mut fast_calls = 0;

        let (slow, fast) = tokio::join!(
            resolver.search(&mut slow_query, |_| slow_calls += 1),
            resolver.search(&mut fast_query, |_| fast_calls += 1),
        );

        assert_eq!(slow.unwrap(), SearchOutcome::Superseded);
        assert!(matches!(fast.unwrap(), SearchOutcome::Selected(ref s) if s.display_name == "Riyadh"));
        assert_eq!(slow_calls, 0);
        assert_eq!(fast_calls, 1);
        assert_eq!(slow_query, "slow");
        assert_eq!(notifier.received().len(), 1);
    }

    #[tokio::test]
    async fn test_stale_failure_is_discarded() {
        let geocoder = StaticGeocoder::new()
            .with("fast", vec![nairobi()])
            .with_failure("slow")
            .with_delay("slow", Duration::from_millis(30));
        let (resolver, notifier) = resolver_with(geocoder);

        let mut slow_query = "slow".to_string();
        let mut fast_query = "fast".to_string();

        let (slow, fast) = tokio::join!(
            resolver.search(&mut slow_query, |_| {}),
            resolver.search(&mut fast_query, |_| {}),
        );

        assert!(matches!(slow, Ok(SearchOutcome::Superseded)), "got {slow:?}");
        assert!(matches!(fast, Ok(SearchOutcome::Selected(_))));
        assert_eq!(
            notifier.received(),
            vec![Notification::success("Loading data for Nairobi, Kenya")]
        );
        assert!(!resolver.is_loading());
    }

    #[tokio::test]
    async fn test_preset_supersedes_pending_search() {
        let geocoder = StaticGeocoder::new()
            .with("Nairobi", vec![nairobi()])
            .with_delay("Nairobi", Duration::from_millis(30));
        let (resolver, notifier) = resolver_with(geocoder);
        let preset = PresetRegion::find("South Asia").unwrap();

        let mut query = "Nairobi".to_string();
        let mut search_called = false;
        let mut preset_selected = None;

        let (searched, ()) = tokio::join!(
            resolver.search(&mut query, |_| search_called = true),
            async {
                tokio::time::sleep(Duration::from_millis(5)).await;
                assert!(resolver.is_loading());
                resolver.select_preset(preset, |s| preset_selected = Some(s));
            },
        );

        assert_eq!(searched.unwrap(), SearchOutcome::Superseded);
        assert!(!search_called);
        assert_eq!(query, "Nairobi");
        assert_eq!(preset_selected.map(|s| s.display_name), Some("South Asia".to_string()));
        assert_eq!(
            notifier.received(),
            vec![Notification::success("Loading data for South Asia")]
        );
    }

    #[test]
    fn test_preset_bypasses_network() {
        let geocoder = StaticGeocoder::new();
        let lookups = geocoder.lookup_counter();
        let (resolver, notifier) = resolver_with(geocoder);

        let preset = PresetRegion::find("amazon basin").unwrap();
        let mut selected = None;
        let selection = resolver.select_preset(preset, |s| selected = Some(s));

        assert_eq!(selection, RegionSelection::new(-3.4653, -62.2159, "Amazon Basin"));
        assert_eq!(selected, Some(selection));
        assert_eq!(lookups.load(Ordering::SeqCst), 0);
        assert_eq!(
            notifier.received(),
            vec![Notification::success("Loading data for Amazon Basin")]
        );
    }

    #[test]
    fn test_preset_table() {
        let names: Vec<&str> = PRESET_REGIONS.iter().map(|p| p.name).collect();
        assert_eq!(
            names,
            vec!["Sub-Saharan Africa", "Middle East", "South Asia", "Amazon Basin"]
        );
        let middle_east = PresetRegion::find("Middle East").unwrap();
        assert_eq!((middle_east.latitude, middle_east.longitude), (29.2985, 42.5510));
        assert!(PresetRegion::find("Antarctica").is_none());
    }
}
