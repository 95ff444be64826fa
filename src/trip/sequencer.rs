//! Greedy nearest-neighbor tour construction.

use crate::models::{GeoPoint, PlaceCandidate};

/// Order candidates by repeatedly stepping to the closest unvisited one,
/// starting from `origin`. Ties break toward the earlier input position.
///
/// The output is a permutation of the input: nothing is dropped or
/// duplicated. O(n^2), a heuristic rather than a TSP solver.
#[must_use]
pub fn sequence_by_nearest(
    mut candidates: Vec<PlaceCandidate>,
    origin: GeoPoint,
) -> Vec<PlaceCandidate> {
    let mut ordered = Vec::with_capacity(candidates.len());
    let mut current = origin;

    while !candidates.is_empty() {
        let mut nearest_idx = 0;
        let mut nearest_km = current.distance_km(&candidates[0].point);
        for (idx, candidate) in candidates.iter().enumerate().skip(1) {
            let km = current.distance_km(&candidate.point);
            if km < nearest_km {
                nearest_idx = idx;
                nearest_km = km;
            }
        }
        let next = candidates.remove(nearest_idx);
        current = next.point;
        ordered.push(next);
    }

    ordered
}
