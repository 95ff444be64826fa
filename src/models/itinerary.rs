//! Day-plan output models.

use serde::{Deserialize, Serialize};

use super::GeoPoint;

/// A tour stop with travel and visit timing attached.
///
/// Carries both the raw numbers and the rendered display strings
/// ("2.3 km", "5 min", "1h 20m") consumed by the rendering layer.
/// Immutable once placed into a `DayPlan`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimedStop {
    pub name: String,
    pub description: String,
    pub point: GeoPoint,
    pub photo_url: Option<String>,
    pub rating: Option<f32>,
    #[serde(default)]
    pub types: Vec<String>,
    pub distance_from_previous_km: f64,
    pub travel_duration_min: u32,
    pub visit_duration_min: u32,
    pub distance_from_previous: String,
    pub travel_duration: String,
    pub estimated_visit_duration: String,
}

impl TimedStop {
    /// Zero out the travel leg: the first stop of a tour or a day bucket
    /// represents "already at this stop", not a transition.
    pub fn zero_travel_leg(&mut self) {
        self.distance_from_previous_km = 0.0;
        self.travel_duration_min = 0;
        self.distance_from_previous = "0.0 km".to_string();
        self.travel_duration = "0 min".to_string();
    }
}

/// One day of the itinerary: a 1-based index and its ordered stops.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayPlan {
    pub day: u32,
    pub stops: Vec<TimedStop>,
}
