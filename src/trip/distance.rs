//! Travel distance/duration estimation along a sequenced tour.
//!
//! The primary path batches all consecutive pairs into one distance-matrix
//! request. The matrix is skipped entirely when the tour exceeds the
//! provider's element limit; there is no partial batching. Any pair the
//! matrix cannot answer falls back to a geometric estimate.

use tracing::{debug, warn};

use crate::models::{GeoPoint, MatrixElement};
use crate::providers::PlaceProvider;

/// Maximum origin/destination pairs in a single matrix request.
pub const MAX_MATRIX_ELEMENTS: usize = 25;

/// Computed travel leg into a stop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TravelLeg {
    pub distance_km: f64,
    pub duration_min: u32,
}

impl TravelLeg {
    const ZERO: Self = Self {
        distance_km: 0.0,
        duration_min: 0,
    };

    /// Geometric estimate: great-circle distance at ~30 km/h with a
    /// 5-minute floor.
    fn geometric(from: GeoPoint, to: GeoPoint) -> Self {
        let km = from.distance_km(&to);
        Self {
            distance_km: round_tenth(km),
            duration_min: (km * 2.0).round().max(5.0) as u32,
        }
    }
}

/// Estimate the travel leg into each stop of a sequenced tour.
///
/// Returns one leg per stop; the first is always zero, since the tour
/// starts there. Provider failures never propagate: every pair degrades
/// to the geometric estimate.
pub async fn estimate_travel_legs<P: PlaceProvider>(
    provider: &P,
    stops: &[GeoPoint],
) -> Vec<TravelLeg> {
    if stops.is_empty() {
        return Vec::new();
    }

    let pair_count = stops.len() - 1;
    let matrix = if pair_count == 0 {
        Vec::new()
    } else if pair_count > MAX_MATRIX_ELEMENTS {
        debug!(
            pairs = pair_count,
            limit = MAX_MATRIX_ELEMENTS,
            "tour exceeds matrix element limit, using geometric estimates"
        );
        Vec::new()
    } else {
        match provider
            .distance_matrix(&stops[..pair_count], &stops[1..])
            .await
        {
            Ok(elements) => elements,
            Err(error) => {
                warn!(%error, "distance matrix call failed, using geometric estimates");
                Vec::new()
            }
        }
    };

    let mut legs = Vec::with_capacity(stops.len());
    legs.push(TravelLeg::ZERO);
    for i in 1..stops.len() {
        let from_matrix = matrix.get(i - 1).and_then(leg_from_element);
        legs.push(
            from_matrix.unwrap_or_else(|| TravelLeg::geometric(stops[i - 1], stops[i])),
        );
    }
    legs
}

/// A matrix element yields a leg only when the provider marked it OK and
/// returned both metrics.
fn leg_from_element(element: &MatrixElement) -> Option<TravelLeg> {
    if !element.is_ok() {
        return None;
    }
    let meters = element.distance_m?;
    let seconds = element.duration_s?;
    Some(TravelLeg {
        distance_km: round_tenth(meters / 1000.0),
        duration_min: (seconds / 60.0).round() as u32,
    })
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
