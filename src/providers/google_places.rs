//! Google Maps / Places implementation of [`PlaceProvider`].
//!
//! Text search and place details use the Places API (New); nearby search
//! (which accepts a keyword bias) and the distance matrix use the classic
//! Maps endpoints. Every call has a fixed timeout and no retries; failures
//! are returned as typed [`ProviderError`]s for the caller to degrade on.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use tracing::debug;

use super::{PlaceProvider, ProviderError, ProviderResult};
use crate::config::TripSmithConfig;
use crate::models::{GeoPoint, GeocodeResult, MatrixElement, PlaceCandidate, PlaceDetails};
use crate::{Result, TripSmithError};

const PLACES_BASE_URL: &str = "https://places.googleapis.com/v1";
const MAPS_BASE_URL: &str = "https://maps.googleapis.com/maps/api";

const SEARCH_FIELD_MASK: &str = "places.id,places.displayName,places.location,places.types,\
     places.rating,places.userRatingCount,places.priceLevel,places.photos,\
     places.editorialSummary,places.formattedAddress,places.websiteUri,\
     places.internationalPhoneNumber";

const DETAILS_FIELD_MASK: &str = "id,displayName,editorialSummary,types,rating,userRatingCount,\
     internationalPhoneNumber,websiteUri";

/// Google Maps/Places API client
pub struct GooglePlacesClient {
    client: Client,
    api_key: String,
    places_base: String,
    maps_base: String,
}

impl GooglePlacesClient {
    /// Create a new client. Fails with a configuration error when no API
    /// key is present; this is the fatal path and is never caught
    /// internally.
    pub fn new(config: &TripSmithConfig) -> Result<Self> {
        let api_key = config.provider.api_key.clone().ok_or_else(|| {
            TripSmithError::config(
                "Missing Google Places API key (set TRIPSMITH_API_KEY or GOOGLE_PLACES_API_KEY)",
            )
        })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.provider.timeout_seconds))
            .user_agent(concat!("tripsmith/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ProviderError::Network)?;

        Ok(Self {
            client,
            api_key,
            places_base: PLACES_BASE_URL.to_string(),
            maps_base: MAPS_BASE_URL.to_string(),
        })
    }

    async fn check_status(response: reqwest::Response) -> ProviderResult<reqwest::Response> {
        if response.status().is_success() {
            return Ok(response);
        }
        let status = response.status().as_u16();
        let message = response.text().await.unwrap_or_default();
        Err(ProviderError::Api { status, message })
    }

    fn photo_url_v1(&self, photo_name: &str) -> String {
        format!(
            "{}/{}/media?maxWidthPx=400&key={}",
            self.places_base, photo_name, self.api_key
        )
    }

    fn photo_url_legacy(&self, photo_reference: &str) -> String {
        format!(
            "{}/place/photo?maxwidth=400&photo_reference={}&key={}",
            self.maps_base, photo_reference, self.api_key
        )
    }
}

#[async_trait]
impl PlaceProvider for GooglePlacesClient {
    #[tracing::instrument(level = "debug", skip(self))]
    async fn geocode(
        &self,
        query: &str,
        language: Option<&str>,
        region: Option<&str>,
    ) -> ProviderResult<Vec<GeocodeResult>> {
        let mut url = format!(
            "{}/geocode/json?address={}&key={}",
            self.maps_base,
            urlencoding::encode(query),
            self.api_key
        );
        if let Some(language) = language {
            url.push_str(&format!("&language={}", urlencoding::encode(language)));
        }
        if let Some(region) = region {
            url.push_str(&format!("&region={}", urlencoding::encode(region)));
        }

        let response = Self::check_status(self.client.get(&url).send().await?).await?;
        let body: wire::GeocodeResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Parse(e.to_string()))?;

        let results = body
            .results
            .unwrap_or_default()
            .into_iter()
            .map(wire::GeocodeEntry::into_result)
            .collect::<Vec<_>>();
        debug!(count = results.len(), "geocode results");
        Ok(results)
    }

    #[tracing::instrument(level = "debug", skip(self))]
    async fn search_text(
        &self,
        query: &str,
        language: Option<&str>,
        region: Option<&str>,
        limit: usize,
    ) -> ProviderResult<Vec<PlaceCandidate>> {
        let url = format!("{}/places:searchText", self.places_base);
        let mut body = json!({
            "textQuery": query,
            "maxResultCount": limit,
        });
        if let Some(language) = language {
            body["languageCode"] = json!(language);
        }
        if let Some(region) = region {
            body["regionCode"] = json!(region);
        }

        let response = self
            .client
            .post(&url)
            .header("X-Goog-Api-Key", &self.api_key)
            .header("X-Goog-FieldMask", SEARCH_FIELD_MASK)
            .json(&body)
            .send()
            .await?;
        let response = Self::check_status(response).await?;
        let body: wire::TextSearchResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Parse(e.to_string()))?;

        let candidates = body
            .places
            .unwrap_or_default()
            .into_iter()
            .filter_map(|place| place.into_candidate(|name| self.photo_url_v1(name)))
            .collect::<Vec<_>>();
        debug!(count = candidates.len(), "text search results");
        Ok(candidates)
    }

    #[tracing::instrument(level = "debug", skip(self))]
    async fn search_nearby(
        &self,
        center: GeoPoint,
        radius_m: u32,
        included_type: Option<&str>,
        keyword: Option<&str>,
        language: Option<&str>,
    ) -> ProviderResult<Vec<PlaceCandidate>> {
        let mut url = format!(
            "{}/place/nearbysearch/json?location={},{}&radius={}&key={}",
            self.maps_base, center.lat, center.lon, radius_m, self.api_key
        );
        if let Some(included_type) = included_type {
            url.push_str(&format!("&type={}", urlencoding::encode(included_type)));
        }
        if let Some(keyword) = keyword {
            url.push_str(&format!("&keyword={}", urlencoding::encode(keyword)));
        }
        if let Some(language) = language {
            url.push_str(&format!("&language={}", urlencoding::encode(language)));
        }

        let response = Self::check_status(self.client.get(&url).send().await?).await?;
        let body: wire::NearbySearchResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Parse(e.to_string()))?;

        let candidates = body
            .results
            .unwrap_or_default()
            .into_iter()
            .filter_map(|place| place.into_candidate(|reference| self.photo_url_legacy(reference)))
            .collect::<Vec<_>>();
        debug!(count = candidates.len(), "nearby search results");
        Ok(candidates)
    }

    #[tracing::instrument(level = "debug", skip(self))]
    async fn place_details(&self, place_id: &str) -> ProviderResult<PlaceDetails> {
        let url = format!("{}/places/{}", self.places_base, place_id);
        let response = self
            .client
            .get(&url)
            .header("X-Goog-Api-Key", &self.api_key)
            .header("X-Goog-FieldMask", DETAILS_FIELD_MASK)
            .send()
            .await?;
        let response = Self::check_status(response).await?;
        let place: wire::PlaceV1 = response
            .json()
            .await
            .map_err(|e| ProviderError::Parse(e.to_string()))?;

        Ok(place.into_details())
    }

    #[tracing::instrument(level = "debug", skip(self, origins, destinations))]
    async fn distance_matrix(
        &self,
        origins: &[GeoPoint],
        destinations: &[GeoPoint],
    ) -> ProviderResult<Vec<MatrixElement>> {
        let origins_param = join_points(origins);
        let destinations_param = join_points(destinations);
        let url = format!(
            "{}/distancematrix/json?origins={}&destinations={}&key={}",
            self.maps_base,
            urlencoding::encode(&origins_param),
            urlencoding::encode(&destinations_param),
            self.api_key
        );

        let response = Self::check_status(self.client.get(&url).send().await?).await?;
        let body: wire::MatrixResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Parse(e.to_string()))?;

        // The endpoint returns the full origins x destinations grid; pair i
        // is the diagonal element.
        let rows = body.rows.unwrap_or_default();
        let elements = (0..origins.len())
            .map(|i| {
                rows.get(i)
                    .and_then(|row| row.elements.get(i))
                    .map_or_else(
                        || MatrixElement {
                            distance_m: None,
                            duration_s: None,
                            status: "NOT_FOUND".to_string(),
                        },
                        wire::MatrixElementWire::to_element,
                    )
            })
            .collect();
        Ok(elements)
    }
}

fn join_points(points: &[GeoPoint]) -> String {
    points
        .iter()
        .map(|p| format!("{:.6},{:.6}", p.lat, p.lon))
        .collect::<Vec<_>>()
        .join("|")
}

/// Google API response structures and conversion utilities
mod wire {
    use serde::Deserialize;

    use crate::models::{GeoPoint, GeocodeResult, MatrixElement, PlaceCandidate, PlaceDetails};
    use crate::models::PriceLevel;

    // --- Geocoding (classic) ---

    #[derive(Debug, Deserialize)]
    pub struct GeocodeResponse {
        pub results: Option<Vec<GeocodeEntry>>,
    }

    #[derive(Debug, Deserialize)]
    pub struct GeocodeEntry {
        pub formatted_address: Option<String>,
        pub place_id: Option<String>,
        pub geometry: Geometry,
        #[serde(default)]
        pub address_components: Vec<AddressComponent>,
    }

    #[derive(Debug, Deserialize)]
    pub struct Geometry {
        pub location: LatLng,
    }

    #[derive(Debug, Deserialize)]
    pub struct LatLng {
        pub lat: f64,
        pub lng: f64,
    }

    #[derive(Debug, Deserialize)]
    pub struct AddressComponent {
        pub long_name: String,
        #[serde(default)]
        pub types: Vec<String>,
    }

    impl GeocodeEntry {
        fn component(&self, kind: &str) -> Option<&str> {
            self.address_components
                .iter()
                .find(|c| c.types.iter().any(|t| t == kind))
                .map(|c| c.long_name.as_str())
        }

        pub fn into_result(self) -> GeocodeResult {
            let name = self
                .component("locality")
                .or_else(|| self.component("administrative_area_level_1"))
                .map(str::to_string)
                .or_else(|| self.formatted_address.clone())
                .unwrap_or_default();
            let country = self.component("country").map(str::to_string);

            GeocodeResult {
                name,
                point: GeoPoint::new(self.geometry.location.lat, self.geometry.location.lng),
                place_id: self.place_id,
                formatted_address: self.formatted_address,
                country,
            }
        }
    }

    // --- Places API (New) ---

    #[derive(Debug, Deserialize)]
    pub struct TextSearchResponse {
        pub places: Option<Vec<PlaceV1>>,
    }

    #[derive(Debug, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct PlaceV1 {
        pub id: Option<String>,
        pub display_name: Option<LocalizedText>,
        pub location: Option<LatLngV1>,
        #[serde(default)]
        pub types: Vec<String>,
        pub rating: Option<f32>,
        pub user_rating_count: Option<u32>,
        pub price_level: Option<String>,
        #[serde(default)]
        pub photos: Vec<PhotoV1>,
        pub editorial_summary: Option<LocalizedText>,
        pub formatted_address: Option<String>,
        pub website_uri: Option<String>,
        pub international_phone_number: Option<String>,
    }

    #[derive(Debug, Deserialize)]
    pub struct LocalizedText {
        pub text: Option<String>,
    }

    #[derive(Debug, Deserialize)]
    pub struct LatLngV1 {
        pub latitude: f64,
        pub longitude: f64,
    }

    #[derive(Debug, Deserialize)]
    pub struct PhotoV1 {
        pub name: Option<String>,
    }

    impl PlaceV1 {
        /// Convert to a candidate; entries without a name or coordinates
        /// are unusable downstream and dropped.
        pub fn into_candidate(
            self,
            photo_url: impl Fn(&str) -> String,
        ) -> Option<PlaceCandidate> {
            let name = self.display_name.as_ref()?.text.clone()?;
            let location = self.location.as_ref()?;
            let point = GeoPoint::new(location.latitude, location.longitude);
            let photo = self
                .photos
                .first()
                .and_then(|p| p.name.as_deref())
                .map(photo_url);

            Some(PlaceCandidate {
                name,
                point,
                place_id: self.id,
                types: self.types,
                rating: self.rating,
                user_rating_count: self.user_rating_count,
                price_level: self
                    .price_level
                    .as_deref()
                    .and_then(PriceLevel::from_provider),
                photo_url: photo,
                description: self.editorial_summary.and_then(|s| s.text),
                formatted_address: self.formatted_address,
                website: self.website_uri,
                phone: self.international_phone_number,
            })
        }

        pub fn into_details(self) -> PlaceDetails {
            PlaceDetails {
                description: self.editorial_summary.and_then(|s| s.text),
                types: self.types,
                rating: self.rating,
                user_rating_count: self.user_rating_count,
                phone: self.international_phone_number,
                website: self.website_uri,
            }
        }
    }

    // --- Nearby search (classic) ---

    #[derive(Debug, Deserialize)]
    pub struct NearbySearchResponse {
        pub results: Option<Vec<LegacyPlace>>,
    }

    #[derive(Debug, Deserialize)]
    pub struct LegacyPlace {
        pub name: Option<String>,
        pub place_id: Option<String>,
        pub geometry: Option<Geometry>,
        #[serde(default)]
        pub types: Vec<String>,
        pub rating: Option<f32>,
        pub user_ratings_total: Option<u32>,
        pub price_level: Option<u8>,
        #[serde(default)]
        pub photos: Vec<LegacyPhoto>,
        pub vicinity: Option<String>,
    }

    #[derive(Debug, Deserialize)]
    pub struct LegacyPhoto {
        pub photo_reference: Option<String>,
    }

    impl LegacyPlace {
        pub fn into_candidate(
            self,
            photo_url: impl Fn(&str) -> String,
        ) -> Option<PlaceCandidate> {
            let name = self.name?;
            let location = &self.geometry.as_ref()?.location;
            let point = GeoPoint::new(location.lat, location.lng);
            let photo = self
                .photos
                .first()
                .and_then(|p| p.photo_reference.as_deref())
                .map(photo_url);

            Some(PlaceCandidate {
                name,
                point,
                place_id: self.place_id,
                types: self.types,
                rating: self.rating,
                user_rating_count: self.user_ratings_total,
                price_level: self.price_level.and_then(legacy_price_level),
                photo_url: photo,
                description: None,
                formatted_address: self.vicinity,
                website: None,
                phone: None,
            })
        }
    }

    fn legacy_price_level(level: u8) -> Option<PriceLevel> {
        match level {
            0 => Some(PriceLevel::Free),
            1 => Some(PriceLevel::Inexpensive),
            2 => Some(PriceLevel::Moderate),
            3 => Some(PriceLevel::Expensive),
            4 => Some(PriceLevel::VeryExpensive),
            _ => None,
        }
    }

    // --- Distance matrix (classic) ---

    #[derive(Debug, Deserialize)]
    pub struct MatrixResponse {
        pub rows: Option<Vec<MatrixRow>>,
    }

    #[derive(Debug, Deserialize)]
    pub struct MatrixRow {
        #[serde(default)]
        pub elements: Vec<MatrixElementWire>,
    }

    #[derive(Debug, Deserialize)]
    pub struct MatrixElementWire {
        pub status: Option<String>,
        pub distance: Option<MetricValue>,
        pub duration: Option<MetricValue>,
    }

    #[derive(Debug, Deserialize)]
    pub struct MetricValue {
        pub value: f64,
    }

    impl MatrixElementWire {
        pub fn to_element(&self) -> MatrixElement {
            MatrixElement {
                distance_m: self.distance.as_ref().map(|d| d.value),
                duration_s: self.duration.as_ref().map(|d| d.value),
                status: self.status.clone().unwrap_or_else(|| "UNKNOWN".to_string()),
            }
        }
    }
}
