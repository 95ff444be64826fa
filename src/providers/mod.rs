//! Place/geocoding/distance provider boundary.
//!
//! The planning pipeline depends only on the [`PlaceProvider`] trait, so
//! tests can substitute a deterministic fake and production can plug in any
//! mapping/places API.

mod error;
mod google_places;

use async_trait::async_trait;

pub use error::{ProviderError, ProviderResult};
pub use google_places::GooglePlacesClient;

use crate::models::{GeoPoint, GeocodeResult, MatrixElement, PlaceCandidate, PlaceDetails};

/// Outbound operations the planner core needs from a mapping provider.
#[async_trait]
pub trait PlaceProvider: Send + Sync {
    /// Resolve a free-text query to candidate places.
    async fn geocode(
        &self,
        query: &str,
        language: Option<&str>,
        region: Option<&str>,
    ) -> ProviderResult<Vec<GeocodeResult>>;

    /// Free-text place search.
    async fn search_text(
        &self,
        query: &str,
        language: Option<&str>,
        region: Option<&str>,
        limit: usize,
    ) -> ProviderResult<Vec<PlaceCandidate>>;

    /// Nearby search around a point, optionally constrained by a place type
    /// and biased by a keyword.
    async fn search_nearby(
        &self,
        center: GeoPoint,
        radius_m: u32,
        included_type: Option<&str>,
        keyword: Option<&str>,
        language: Option<&str>,
    ) -> ProviderResult<Vec<PlaceCandidate>>;

    /// Fetch details for a single place.
    async fn place_details(&self, place_id: &str) -> ProviderResult<PlaceDetails>;

    /// Distance/duration for consecutive origin/destination pairs.
    ///
    /// `origins` and `destinations` have equal length; element `i` of the
    /// result pairs `origins[i]` with `destinations[i]`.
    async fn distance_matrix(
        &self,
        origins: &[GeoPoint],
        destinations: &[GeoPoint],
    ) -> ProviderResult<Vec<MatrixElement>>;
}
