//! Candidate retrieval with a tiered fallback chain.
//!
//! Trip-type profiles with only a keyword use a free-text search anchored
//! to the origin name; profiles with a type filter use a type-constrained
//! nearby search instead (the type-constrained endpoint does not honor
//! keywords, a provider limitation this module preserves). Lodging mode
//! reuses the same cache and detail backfill for accommodation terms.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, warn};

use super::profiles::TripTypeProfile;
use crate::cache::TtlCache;
use crate::models::{GeoPoint, GeocodeResult, PlaceCandidate};
use crate::providers::PlaceProvider;

const POI_SEARCH_LIMIT: usize = 20;
const LODGING_SEARCH_LIMIT: usize = 5;

pub struct CandidateSearch<P> {
    provider: Arc<P>,
    cache: Arc<TtlCache>,
    radius_m: u32,
}

impl<P: PlaceProvider> CandidateSearch<P> {
    #[must_use]
    pub fn new(provider: Arc<P>, cache: Arc<TtlCache>, radius_m: u32) -> Self {
        Self {
            provider,
            cache,
            radius_m,
        }
    }

    /// Retrieve points of interest around a resolved origin for one
    /// trip-type profile. Raw search results are cached; detail backfill
    /// runs on every call so cached entries still gain descriptions.
    pub async fn search_pois(
        &self,
        origin: &GeocodeResult,
        profile: &TripTypeProfile,
        language: Option<&str>,
    ) -> Vec<PlaceCandidate> {
        let key = format!(
            "near::{}::{}::{}::{}::{}::v2",
            origin.point.cache_key_fragment(),
            self.radius_m,
            profile.keyword,
            profile.included_type.unwrap_or(""),
            language.unwrap_or("")
        );

        let mut candidates = match self.cache.get::<Vec<PlaceCandidate>>(&key) {
            Some(cached) => cached,
            None => {
                let found =
                    dedupe_by_identity(self.run_poi_strategy(origin, profile, language).await);
                self.cache.put(&key, &found);
                found
            }
        };

        self.backfill_descriptions(&mut candidates).await;
        candidates
    }

    async fn run_poi_strategy(
        &self,
        origin: &GeocodeResult,
        profile: &TripTypeProfile,
        language: Option<&str>,
    ) -> Vec<PlaceCandidate> {
        let primary = if profile.included_type.is_none() {
            let query = format!("{} near {}", profile.primary_keyword(), origin.name);
            self.provider
                .search_text(&query, language, None, POI_SEARCH_LIMIT)
                .await
        } else {
            self.provider
                .search_nearby(
                    origin.point,
                    self.radius_m,
                    profile.included_type,
                    None,
                    language,
                )
                .await
        };

        match primary {
            Ok(candidates) => candidates,
            Err(error) => {
                warn!(trip_type = profile.label, %error, "primary candidate search failed");
                self.fallback_search(origin.point, profile, language).await
            }
        }
    }

    /// Fallback tiers: a generic nearby search with both filter and
    /// keyword, then a plain attractions search. A final failure yields an
    /// empty set, never an error.
    async fn fallback_search(
        &self,
        center: GeoPoint,
        profile: &TripTypeProfile,
        language: Option<&str>,
    ) -> Vec<PlaceCandidate> {
        match self
            .provider
            .search_nearby(
                center,
                self.radius_m,
                profile.included_type,
                Some(profile.keyword),
                language,
            )
            .await
        {
            Ok(candidates) => candidates,
            Err(error) => {
                warn!(%error, "keyword nearby fallback failed, trying attractions");
                self.provider
                    .search_nearby(
                        center,
                        self.radius_m,
                        Some("tourist_attraction"),
                        None,
                        language,
                    )
                    .await
                    .unwrap_or_else(|error| {
                        warn!(%error, "attractions fallback failed, no candidates");
                        Vec::new()
                    })
            }
        }
    }

    /// Retrieve lodging candidates for one budget-tier query term around a
    /// resolved origin. Falls back to a generic lodging nearby search when
    /// the text search fails.
    pub async fn search_lodging(
        &self,
        origin: &GeocodeResult,
        term: &str,
        language: Option<&str>,
        region: Option<&str>,
    ) -> Vec<PlaceCandidate> {
        let key = format!(
            "stay::{}::{}::{}::v1",
            origin.name,
            term,
            language.unwrap_or("")
        );
        if let Some(cached) = self.cache.get::<Vec<PlaceCandidate>>(&key) {
            return cached;
        }

        let query = format!("{term} in {}", origin.name);
        let found = match self
            .provider
            .search_text(&query, language, region, LODGING_SEARCH_LIMIT)
            .await
        {
            Ok(candidates) => candidates,
            Err(error) => {
                warn!(term, %error, "lodging text search failed, trying generic lodging");
                self.provider
                    .search_nearby(origin.point, self.radius_m, Some("lodging"), None, language)
                    .await
                    .unwrap_or_else(|error| {
                        warn!(%error, "generic lodging fallback failed");
                        Vec::new()
                    })
            }
        };

        self.cache.put(&key, &found);
        found
    }

    /// Backfill descriptions for candidates that lack one. Detail-fetch
    /// failures leave the candidate with whatever fields it already had.
    pub async fn backfill_descriptions(&self, candidates: &mut [PlaceCandidate]) {
        for candidate in candidates.iter_mut() {
            if candidate.description.is_some() {
                continue;
            }
            self.fetch_and_absorb(candidate).await;
        }
    }

    /// Backfill description and contact fields for lodging candidates.
    pub async fn backfill_contact_details(&self, candidates: &mut [PlaceCandidate]) {
        for candidate in candidates.iter_mut() {
            if candidate.description.is_some()
                && candidate.website.is_some()
                && candidate.phone.is_some()
            {
                continue;
            }
            self.fetch_and_absorb(candidate).await;
        }
    }

    async fn fetch_and_absorb(&self, candidate: &mut PlaceCandidate) {
        let Some(place_id) = candidate.place_id.clone() else {
            return;
        };
        match self.provider.place_details(&place_id).await {
            Ok(details) => candidate.absorb_details(details),
            Err(error) => {
                debug!(place_id, %error, "place details fetch failed, keeping partial data");
            }
        }
    }
}

/// Drop repeated places from merged search results, keeping the first
/// occurrence. Identity is the place id when present, else the lowercased
/// name.
fn dedupe_by_identity(candidates: Vec<PlaceCandidate>) -> Vec<PlaceCandidate> {
    let mut seen = HashSet::new();
    candidates
        .into_iter()
        .filter(|candidate| seen.insert(candidate.identity_key()))
        .collect()
}
