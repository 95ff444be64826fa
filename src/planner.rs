//! Trip planning orchestrator.
//!
//! Composes location resolution, candidate search, tour sequencing, travel
//! and visit timing, day bucketing, and accommodation suggestion into the
//! two public operations. Provider failures never surface here as errors:
//! insufficient results simply produce a shorter or empty plan.

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::cache::TtlCache;
use crate::config::TripSmithConfig;
use crate::currency;
use crate::models::{AccommodationOption, DayPlan, GeocodeResult, PlaceCandidate, TimedStop};
use crate::providers::PlaceProvider;
use crate::resolver::LocationResolver;
use crate::stay;
use crate::trip::{
    CandidateSearch, TravelLeg, chunk_into_days, estimate_travel_legs, estimate_visit_minutes,
    format_duration, profile_for, sequence_by_nearest,
};

/// Inputs for a full trip plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripPlanRequest {
    pub location: String,
    pub days: u32,
    pub trip_type: String,
    /// Nightly budget in the location's local currency; the stay plan is
    /// only produced when this is present and positive.
    pub budget: Option<f64>,
    pub language: Option<String>,
    pub region: Option<String>,
}

/// Inputs for a standalone accommodation search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StayRequest {
    pub location: String,
    pub budget: Option<f64>,
    pub budget_currency: String,
    pub display_currency: String,
    pub language: Option<String>,
    pub region: Option<String>,
}

/// The two planner outputs: a day-by-day tour and ranked accommodations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TripPlanSuggestion {
    pub trip_plan: Vec<DayPlan>,
    pub stay_plan: Vec<AccommodationOption>,
}

pub struct TripPlanner<P> {
    provider: Arc<P>,
    resolver: LocationResolver<P>,
    candidates: CandidateSearch<P>,
    max_stay_options: usize,
}

impl<P: PlaceProvider> TripPlanner<P> {
    #[must_use]
    pub fn new(provider: Arc<P>, config: &TripSmithConfig) -> Self {
        let cache = Arc::new(TtlCache::new(Duration::from_secs(config.cache.ttl_seconds)));
        Self {
            resolver: LocationResolver::new(provider.clone(), cache.clone()),
            candidates: CandidateSearch::new(
                provider.clone(),
                cache,
                config.defaults.search_radius_m,
            ),
            max_stay_options: config.defaults.max_stay_options,
            provider,
        }
    }

    /// Build a day-by-day tour and, when a positive budget is supplied, a
    /// ranked stay plan. Empty location or zero days short-circuits to an
    /// empty suggestion without any provider calls.
    pub async fn plan(&self, request: &TripPlanRequest) -> TripPlanSuggestion {
        if request.location.trim().is_empty() || request.days == 0 {
            debug!("empty location or zero days, returning empty suggestion");
            return TripPlanSuggestion::default();
        }

        let language = request.language.as_deref();
        let region = request.region.as_deref();
        let Some(origin) = self.resolver.resolve(&request.location, language, region).await
        else {
            info!(location = %request.location, "location did not resolve");
            return TripPlanSuggestion::default();
        };

        let (budget_usd, local_currency) = currency::detect_budget_currency(
            request.budget,
            &request.location,
            origin.country.as_deref(),
        );
        let stay_budget = budget_usd.filter(|b| *b > 0.0);

        // The POI and lodging legs have no data dependency.
        let (trip_plan, stay_plan) = tokio::join!(
            self.build_tour(&origin, &request.trip_type, request.days, language),
            async {
                match stay_budget {
                    Some(budget) => {
                        stay::suggest_for_origin(
                            &self.candidates,
                            &origin,
                            Some(budget),
                            local_currency,
                            local_currency,
                            language,
                            region,
                            self.max_stay_options,
                        )
                        .await
                    }
                    None => Vec::new(),
                }
            }
        );

        info!(
            location = %origin.name,
            days = trip_plan.len(),
            stays = stay_plan.len(),
            "trip plan assembled"
        );
        TripPlanSuggestion {
            trip_plan,
            stay_plan,
        }
    }

    /// Standalone accommodation search, independently callable.
    pub async fn suggest_stays(&self, request: &StayRequest) -> Vec<AccommodationOption> {
        if request.location.trim().is_empty() {
            return Vec::new();
        }
        let language = request.language.as_deref();
        let region = request.region.as_deref();
        let Some(origin) = self.resolver.resolve(&request.location, language, region).await
        else {
            return Vec::new();
        };

        let budget_usd = request
            .budget
            .filter(|b| *b > 0.0)
            .map(|b| currency::convert(b, &request.budget_currency, "USD"));

        stay::suggest_for_origin(
            &self.candidates,
            &origin,
            budget_usd,
            &request.budget_currency,
            &request.display_currency,
            language,
            region,
            self.max_stay_options,
        )
        .await
    }

    async fn build_tour(
        &self,
        origin: &GeocodeResult,
        trip_type: &str,
        days: u32,
        language: Option<&str>,
    ) -> Vec<DayPlan> {
        let profile = profile_for(trip_type);
        let found = self.candidates.search_pois(origin, profile, language).await;
        debug!(
            trip_type = profile.label,
            candidates = found.len(),
            "candidates gathered"
        );

        let ordered = sequence_by_nearest(found, origin.point);
        let points: Vec<_> = ordered.iter().map(|c| c.point).collect();
        let legs = estimate_travel_legs(self.provider.as_ref(), &points).await;

        let stops = ordered
            .into_iter()
            .zip(legs)
            .map(|(candidate, leg)| timed_stop(candidate, leg))
            .collect();
        chunk_into_days(stops, days)
    }
}

fn timed_stop(candidate: PlaceCandidate, leg: TravelLeg) -> TimedStop {
    let visit_min = estimate_visit_minutes(&candidate.types, &candidate.name);
    TimedStop {
        name: candidate.name,
        description: candidate
            .description
            .unwrap_or_else(|| "A popular attraction worth visiting".to_string()),
        point: candidate.point,
        photo_url: candidate.photo_url,
        rating: candidate.rating,
        types: candidate.types,
        distance_from_previous_km: leg.distance_km,
        travel_duration_min: leg.duration_min,
        visit_duration_min: visit_min,
        distance_from_previous: format!("{:.1} km", leg.distance_km),
        travel_duration: format_duration(leg.duration_min),
        estimated_visit_duration: format_duration(visit_min),
    }
}
