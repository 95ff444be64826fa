//! `TripSmith` - trip itinerary and accommodation suggestion engine
//!
//! This library turns a free-text location, a trip-type label, a trip
//! length in days, and an optional nightly budget into a day-by-day tour
//! of points of interest with travel/visit timing, plus a ranked list of
//! accommodation options priced against the budget.

pub mod cache;
pub mod config;
pub mod currency;
pub mod error;
pub mod models;
pub mod planner;
pub mod providers;
pub mod resolver;
pub mod stay;
pub mod trip;

// Re-export core types for public API
pub use cache::TtlCache;
pub use config::TripSmithConfig;
pub use error::TripSmithError;
pub use models::{
    AccommodationOption, DayPlan, GeoPoint, GeocodeResult, MatrixElement, PlaceCandidate,
    PlaceDetails, PriceLevel, PricingRange, TimedStop,
};
pub use planner::{StayRequest, TripPlanRequest, TripPlanSuggestion, TripPlanner};
pub use providers::{GooglePlacesClient, PlaceProvider, ProviderError};
pub use resolver::LocationResolver;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, TripSmithError>;
