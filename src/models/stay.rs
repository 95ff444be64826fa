//! Accommodation output models.

use serde::{Deserialize, Serialize};

use super::{GeoPoint, PriceLevel};

/// Inferred nightly price range in the display currency.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingRange {
    pub range_min: i64,
    pub range_max: i64,
    pub currency: String,
    pub per: String,
    /// Display label: the provider tier, "Estimated", or the budget category.
    pub level: String,
    pub user_budget: Option<i64>,
    pub user_budget_currency: String,
    pub google_price_level: Option<PriceLevel>,
}

/// External links for an accommodation option.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StayLinks {
    pub google_maps: String,
    pub website: Option<String>,
}

/// A ranked lodging suggestion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccommodationOption {
    pub name: String,
    pub location: String,
    pub address: String,
    pub rating: Option<f32>,
    pub pricing: PricingRange,
    pub links: StayLinks,
    pub photos: Vec<String>,
    pub coordinates: GeoPoint,
    pub description: String,
    pub category: String,
    pub user_rating_count: Option<u32>,
    pub phone: Option<String>,
}
