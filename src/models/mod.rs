//! Domain models shared across the planning pipeline.

pub mod itinerary;
pub mod place;
pub mod stay;

pub use itinerary::{DayPlan, TimedStop};
pub use place::{GeoPoint, GeocodeResult, MatrixElement, PlaceCandidate, PlaceDetails, PriceLevel};
pub use stay::{AccommodationOption, PricingRange, StayLinks};
