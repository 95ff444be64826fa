//! Day bucketing for a sequenced, timed tour.

use crate::models::{DayPlan, TimedStop};

/// Pace rule: 3 stops per day on short trips, 2 on longer ones.
#[must_use]
pub fn stops_per_day(day_count: u32) -> usize {
    if day_count <= 3 { 3 } else { 2 }
}

/// Split timed stops into contiguous day-sized chunks in tour order.
///
/// Uses at most `day_count * pace` stops; the excess is discarded. The
/// first stop of every day has its travel leg zeroed, since each day
/// starts fresh at that stop.
#[must_use]
pub fn chunk_into_days(stops: Vec<TimedStop>, day_count: u32) -> Vec<DayPlan> {
    if day_count == 0 {
        return Vec::new();
    }
    let per_day = stops_per_day(day_count);
    let total = stops.len().min(day_count as usize * per_day);

    stops
        .into_iter()
        .take(total)
        .collect::<Vec<_>>()
        .chunks(per_day)
        .enumerate()
        .map(|(idx, chunk)| {
            let mut stops = chunk.to_vec();
            if let Some(first) = stops.first_mut() {
                first.zero_travel_leg();
            }
            DayPlan {
                day: idx as u32 + 1,
                stops,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    use crate::models::GeoPoint;

    fn stop(name: &str, travel_min: u32) -> TimedStop {
        TimedStop {
            name: name.to_string(),
            description: String::new(),
            point: GeoPoint::new(0.0, 0.0),
            photo_url: None,
            rating: None,
            types: Vec::new(),
            distance_from_previous_km: f64::from(travel_min),
            travel_duration_min: travel_min,
            visit_duration_min: 60,
            distance_from_previous: format!("{travel_min}.0 km"),
            travel_duration: format!("{travel_min} min"),
            estimated_visit_duration: "1 hr".to_string(),
        }
    }

    fn stops(count: usize) -> Vec<TimedStop> {
        (0..count).map(|i| stop(&format!("s{i}"), 10)).collect()
    }

    #[rstest]
    #[case(1, 3)]
    #[case(3, 3)]
    #[case(4, 2)]
    #[case(10, 2)]
    fn test_pace_rule(#[case] days: u32, #[case] expected: usize) {
        assert_eq!(stops_per_day(days), expected);
    }

    #[test]
    fn test_three_day_trip_uses_nine_stops() {
        let days = chunk_into_days(stops(12), 3);
        assert_eq!(days.len(), 3);
        let total: usize = days.iter().map(|d| d.stops.len()).sum();
        assert_eq!(total, 9);
        assert_eq!(
            days.iter().map(|d| d.day).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn test_long_trip_has_lighter_pace() {
        let days = chunk_into_days(stops(20), 5);
        assert_eq!(days.len(), 5);
        assert!(days.iter().all(|d| d.stops.len() == 2));
    }

    #[test]
    fn test_short_supply_yields_partial_days() {
        let days = chunk_into_days(stops(4), 3);
        assert_eq!(days.len(), 2);
        assert_eq!(days[0].stops.len(), 3);
        assert_eq!(days[1].stops.len(), 1);
    }

    #[test]
    fn test_first_stop_of_each_day_is_zeroed() {
        let days = chunk_into_days(stops(9), 3);
        for day in &days {
            let first = &day.stops[0];
            assert_eq!(first.distance_from_previous_km, 0.0);
            assert_eq!(first.travel_duration_min, 0);
            assert_eq!(first.distance_from_previous, "0.0 km");
            assert_eq!(first.travel_duration, "0 min");
            for later in &day.stops[1..] {
                assert_eq!(later.travel_duration_min, 10);
            }
        }
    }

    #[test]
    fn test_empty_stops_give_empty_plan() {
        assert!(chunk_into_days(Vec::new(), 3).is_empty());
    }
}
