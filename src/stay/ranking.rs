//! Budget relevance scoring and composite ranking.

use crate::models::AccommodationOption;

/// Score when no candidate matches the budget at all, so the result set
/// is never empty when any results exist.
pub const FALLBACK_SCORE: i32 = 10;

/// How well a USD price range matches a USD budget, 0-100.
///
/// 100 when the budget falls inside the range; 50-90 when the range
/// overlaps the ±30% budget band, proportional to the overlap fraction;
/// 0-30 when the range midpoint is within 50% of the budget; else 0.
#[must_use]
pub fn budget_relevance_score(budget: f64, range_min: f64, range_max: f64) -> i32 {
    if range_min <= budget && budget <= range_max {
        return 100;
    }

    if budget * 0.7 <= range_max && budget * 1.3 >= range_min {
        let overlap_start = range_min.max(budget * 0.7);
        let overlap_end = range_max.min(budget * 1.3);
        let overlap_size = (overlap_end - overlap_start).max(0.0);
        let range_size = (range_max - range_min).max(1.0);
        return (50.0 + (overlap_size / range_size) * 40.0) as i32;
    }

    let midpoint = (range_min + range_max) / 2.0;
    if (budget - midpoint).abs() <= budget * 0.5 {
        let distance_ratio = (budget - midpoint).abs() / budget;
        return (30.0 * (1.0 - distance_ratio)) as i32;
    }

    0
}

/// Composite ranking key: 40% budget fit, 40% rating, 20% review volume
/// (capped at 500 reviews).
#[must_use]
pub fn composite_score(budget_score: i32, option: &AccommodationOption) -> f64 {
    let rating = f64::from(option.rating.unwrap_or(0.0));
    let reviews = f64::from(option.user_rating_count.unwrap_or(0).min(500));
    f64::from(budget_score) * 0.4 + rating * 20.0 * 0.4 + reviews / 500.0 * 100.0 * 0.2
}

/// Order scored options by composite key, best first, keeping at most
/// `max_options`. The internal score is dropped from the output.
#[must_use]
pub fn rank(
    mut scored: Vec<(AccommodationOption, i32)>,
    max_options: usize,
) -> Vec<AccommodationOption> {
    scored.sort_by(|(a, a_score), (b, b_score)| {
        composite_score(*b_score, b).total_cmp(&composite_score(*a_score, a))
    });
    scored
        .into_iter()
        .take(max_options)
        .map(|(option, _)| option)
        .collect()
}
