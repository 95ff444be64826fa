//! Free-text location resolution.
//!
//! Wraps the provider's geocoder behind the shared TTL cache. Resolution
//! never raises: a provider failure is logged and reported as "no match",
//! and callers degrade to empty downstream output.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::cache::TtlCache;
use crate::models::GeocodeResult;
use crate::providers::PlaceProvider;

pub struct LocationResolver<P> {
    provider: Arc<P>,
    cache: Arc<TtlCache>,
}

impl<P: PlaceProvider> LocationResolver<P> {
    #[must_use]
    pub fn new(provider: Arc<P>, cache: Arc<TtlCache>) -> Self {
        Self { provider, cache }
    }

    /// Resolve a free-text query to its best geocode match.
    ///
    /// Results (including empty ones) are cached under the normalized
    /// query; provider failures are not, so the next call retries.
    pub async fn resolve(
        &self,
        query: &str,
        language: Option<&str>,
        region: Option<&str>,
    ) -> Option<GeocodeResult> {
        let query = query.trim();
        if query.is_empty() {
            return None;
        }

        let key = format!(
            "geocode::{}::{}::{}",
            query.to_lowercase(),
            language.unwrap_or(""),
            region.unwrap_or("")
        );
        if let Some(cached) = self.cache.get::<Vec<GeocodeResult>>(&key) {
            return cached.into_iter().next();
        }

        match self.provider.geocode(query, language, region).await {
            Ok(results) => {
                debug!(query, count = results.len(), "geocoded location");
                self.cache.put(&key, &results);
                results.into_iter().next()
            }
            Err(error) => {
                warn!(query, %error, "geocoding failed, treating as no match");
                None
            }
        }
    }
}
