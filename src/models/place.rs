//! Place and provider-boundary models.

use haversine::{Location as HaversineLocation, Units, distance};
use serde::{Deserialize, Serialize};

/// Geographic coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in decimal degrees
    pub lat: f64,
    /// Longitude in decimal degrees
    pub lon: f64,
}

impl GeoPoint {
    #[must_use]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Great-circle distance to another point in kilometers.
    #[must_use]
    pub fn distance_km(&self, other: &GeoPoint) -> f64 {
        let from = HaversineLocation {
            latitude: self.lat,
            longitude: self.lon,
        };
        let to = HaversineLocation {
            latitude: other.lat,
            longitude: other.lon,
        };
        distance(from, to, Units::Kilometers)
    }

    /// Coordinates rounded to 5 decimal places for cache key generation.
    #[must_use]
    pub fn cache_key_fragment(&self) -> String {
        format!("{:.5},{:.5}", self.lat, self.lon)
    }
}

/// Coarse provider-supplied lodging cost tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriceLevel {
    #[serde(rename = "PRICE_LEVEL_FREE")]
    Free,
    #[serde(rename = "PRICE_LEVEL_INEXPENSIVE")]
    Inexpensive,
    #[serde(rename = "PRICE_LEVEL_MODERATE")]
    Moderate,
    #[serde(rename = "PRICE_LEVEL_EXPENSIVE")]
    Expensive,
    #[serde(rename = "PRICE_LEVEL_VERY_EXPENSIVE")]
    VeryExpensive,
}

impl PriceLevel {
    /// Parse a provider price-level string.
    #[must_use]
    pub fn from_provider(value: &str) -> Option<Self> {
        match value.to_uppercase().as_str() {
            "PRICE_LEVEL_FREE" => Some(Self::Free),
            "PRICE_LEVEL_INEXPENSIVE" => Some(Self::Inexpensive),
            "PRICE_LEVEL_MODERATE" => Some(Self::Moderate),
            "PRICE_LEVEL_EXPENSIVE" => Some(Self::Expensive),
            "PRICE_LEVEL_VERY_EXPENSIVE" => Some(Self::VeryExpensive),
            _ => None,
        }
    }

    /// Nightly USD range this tier maps to.
    #[must_use]
    pub fn usd_range(self) -> (f64, f64) {
        match self {
            Self::Free => (0.0, 15.0),
            Self::Inexpensive => (15.0, 60.0),
            Self::Moderate => (60.0, 150.0),
            Self::Expensive => (150.0, 400.0),
            Self::VeryExpensive => (400.0, 1000.0),
        }
    }

    #[must_use]
    pub fn display_label(self) -> &'static str {
        match self {
            Self::Free => "Free",
            Self::Inexpensive => "Inexpensive",
            Self::Moderate => "Moderate",
            Self::Expensive => "Expensive",
            Self::VeryExpensive => "Very Expensive",
        }
    }
}

/// A place returned by text or nearby search, before timing/pricing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceCandidate {
    pub name: String,
    pub point: GeoPoint,
    pub place_id: Option<String>,
    #[serde(default)]
    pub types: Vec<String>,
    pub rating: Option<f32>,
    pub user_rating_count: Option<u32>,
    pub price_level: Option<PriceLevel>,
    pub photo_url: Option<String>,
    pub description: Option<String>,
    pub formatted_address: Option<String>,
    pub website: Option<String>,
    pub phone: Option<String>,
}

impl PlaceCandidate {
    /// Identity used for de-duplication: the place id when present,
    /// else the lowercased name.
    #[must_use]
    pub fn identity_key(&self) -> String {
        self.place_id
            .clone()
            .unwrap_or_else(|| self.name.to_lowercase())
    }

    /// Merge lazily fetched details into this candidate, keeping any
    /// fields it already had.
    pub fn absorb_details(&mut self, details: PlaceDetails) {
        if self.description.is_none() {
            self.description = details.description;
        }
        if !details.types.is_empty() && self.types.is_empty() {
            self.types = details.types;
        }
        if self.rating.is_none() {
            self.rating = details.rating;
        }
        if self.user_rating_count.is_none() {
            self.user_rating_count = details.user_rating_count;
        }
        if self.phone.is_none() {
            self.phone = details.phone;
        }
        if self.website.is_none() {
            self.website = details.website;
        }
    }
}

/// A geocoded place: canonical point plus naming metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodeResult {
    pub name: String,
    pub point: GeoPoint,
    pub place_id: Option<String>,
    pub formatted_address: Option<String>,
    pub country: Option<String>,
}

/// Lazily fetched place details, used to backfill candidates.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlaceDetails {
    pub description: Option<String>,
    #[serde(default)]
    pub types: Vec<String>,
    pub rating: Option<f32>,
    pub user_rating_count: Option<u32>,
    pub phone: Option<String>,
    pub website: Option<String>,
}

/// One origin/destination pair of a distance-matrix response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatrixElement {
    pub distance_m: Option<f64>,
    pub duration_s: Option<f64>,
    pub status: String,
}

impl MatrixElement {
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status == "OK"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_haversine_known_distance() {
        // Paris to London, roughly 344 km
        let paris = GeoPoint::new(48.8566, 2.3522);
        let london = GeoPoint::new(51.5074, -0.1278);
        let km = paris.distance_km(&london);
        assert!((330.0..360.0).contains(&km), "got {km}");
    }

    #[test]
    fn test_cache_key_fragment_rounds_to_five_places() {
        let point = GeoPoint::new(48.856_614_9, 2.352_221_9);
        assert_eq!(point.cache_key_fragment(), "48.85661,2.35222");
    }

    #[test]
    fn test_identity_prefers_place_id() {
        let mut candidate = sample_candidate("Louvre");
        candidate.place_id = Some("pid-1".to_string());
        assert_eq!(candidate.identity_key(), "pid-1");

        candidate.place_id = None;
        assert_eq!(candidate.identity_key(), "louvre");
    }

    #[test]
    fn test_absorb_details_keeps_existing_fields() {
        let mut candidate = sample_candidate("Musee d'Orsay");
        candidate.rating = Some(4.7);
        candidate.absorb_details(PlaceDetails {
            description: Some("Impressionist museum".to_string()),
            rating: Some(1.0),
            ..Default::default()
        });
        assert_eq!(candidate.rating, Some(4.7));
        assert_eq!(
            candidate.description.as_deref(),
            Some("Impressionist museum")
        );
    }

    #[test]
    fn test_price_level_parse_and_range() {
        let level = PriceLevel::from_provider("price_level_moderate").unwrap();
        assert_eq!(level, PriceLevel::Moderate);
        assert_eq!(level.usd_range(), (60.0, 150.0));
        assert!(PriceLevel::from_provider("PRICE_LEVEL_UNSPECIFIED").is_none());
    }

    fn sample_candidate(name: &str) -> PlaceCandidate {
        PlaceCandidate {
            name: name.to_string(),
            point: GeoPoint::new(48.86, 2.35),
            place_id: None,
            types: Vec::new(),
            rating: None,
            user_rating_count: None,
            price_level: None,
            photo_url: None,
            description: None,
            formatted_address: None,
            website: None,
            phone: None,
        }
    }
}
