//! Budget-tiered accommodation suggestions.
//!
//! Derives a budget category from the numeric budget, issues the
//! category's lodging searches, infers a price range per candidate from
//! the provider price level and the budget, scores by budget fit, and
//! returns the ranked top of the merged set.

pub mod pricing;
pub mod ranking;

use tracing::debug;

use crate::models::{AccommodationOption, GeocodeResult, PlaceCandidate, StayLinks};
use crate::providers::PlaceProvider;
use crate::trip::CandidateSearch;

/// Budget tier derived from a USD-normalized nightly budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetCategory {
    Budget,
    MidRange,
    Luxury,
}

impl BudgetCategory {
    /// Thresholds are per night in USD, inclusive upper bounds. An absent
    /// budget defaults to mid-range.
    #[must_use]
    pub fn from_budget(budget_usd: Option<f64>) -> Self {
        match budget_usd {
            None => Self::MidRange,
            Some(b) if b <= 60.0 => Self::Budget,
            Some(b) if b <= 250.0 => Self::MidRange,
            Some(_) => Self::Luxury,
        }
    }

    /// Lodging search terms issued for this tier.
    #[must_use]
    pub fn query_terms(self) -> &'static [&'static str] {
        match self {
            Self::Budget => &[
                "budget hotels",
                "hostels",
                "guesthouses",
                "backpacker accommodation",
            ],
            Self::MidRange => &["hotels", "boutique hotels", "bed and breakfast", "inns"],
            Self::Luxury => &[
                "luxury hotels",
                "5 star hotels",
                "resort",
                "premium accommodation",
            ],
        }
    }

    /// Base nightly USD range used when no other pricing signal exists.
    #[must_use]
    pub fn base_range_usd(self) -> (i64, i64) {
        match self {
            Self::Budget => (10, 60),
            Self::MidRange => (60, 250),
            Self::Luxury => (250, 800),
        }
    }

    #[must_use]
    pub fn display_label(self) -> &'static str {
        match self {
            Self::Budget => "Budget",
            Self::MidRange => "Mid-Range",
            Self::Luxury => "Luxury",
        }
    }
}

/// Accommodation type label inferred from the name and the search term
/// that found it.
fn categorize(name: &str, query_term: &str) -> &'static str {
    let name = name.to_lowercase();
    let query = query_term.to_lowercase();

    if name.contains("hostel") || name.contains("backpack") {
        "Hostel"
    } else if name.contains("resort") {
        "Resort"
    } else if name.contains("boutique") {
        "Boutique Hotel"
    } else if name.contains("inn") || name.contains("b&b") || name.contains("bed and breakfast") {
        "Inn/B&B"
    } else if name.contains("guest") {
        "Guesthouse"
    } else if query.contains("luxury") || query.contains("5 star") {
        "Luxury Hotel"
    } else {
        "Hotel"
    }
}

fn build_option(
    candidate: &PlaceCandidate,
    origin_name: &str,
    query_term: &str,
    pricing: crate::models::PricingRange,
) -> AccommodationOption {
    AccommodationOption {
        name: candidate.name.clone(),
        location: origin_name.to_string(),
        address: candidate.formatted_address.clone().unwrap_or_default(),
        rating: candidate.rating,
        pricing,
        links: StayLinks {
            google_maps: format!(
                "https://maps.google.com/?q={},{}",
                candidate.point.lat, candidate.point.lon
            ),
            website: candidate.website.clone(),
        },
        photos: candidate.photo_url.clone().into_iter().collect(),
        coordinates: candidate.point,
        description: candidate
            .description
            .clone()
            .unwrap_or_else(|| format!("Accommodation in {origin_name}")),
        category: categorize(&candidate.name, query_term).to_string(),
        user_rating_count: candidate.user_rating_count,
        phone: candidate.phone.clone(),
    }
}

/// Suggest accommodations around an already-resolved origin.
///
/// `budget_usd` is the USD-normalized nightly budget; scoring and category
/// derivation happen in USD, the output ranges in `display_currency`.
#[allow(clippy::too_many_arguments)]
pub async fn suggest_for_origin<P: PlaceProvider>(
    search: &CandidateSearch<P>,
    origin: &GeocodeResult,
    budget_usd: Option<f64>,
    budget_currency: &str,
    display_currency: &str,
    language: Option<&str>,
    region: Option<&str>,
    max_options: usize,
) -> Vec<AccommodationOption> {
    let category = BudgetCategory::from_budget(budget_usd);
    debug!(origin = %origin.name, ?category, "gathering lodging candidates");

    let mut merged: Vec<(AccommodationOption, f64, f64)> = Vec::new();
    for term in category.query_terms() {
        let mut candidates = search.search_lodging(origin, term, language, region).await;
        search.backfill_contact_details(&mut candidates).await;

        for candidate in &candidates {
            if merged.iter().any(|(option, _, _)| option.name == candidate.name) {
                continue;
            }
            let inferred = pricing::infer(
                candidate.price_level,
                category,
                budget_usd,
                budget_currency,
                display_currency,
            );
            merged.push((
                build_option(candidate, &origin.name, term, inferred.display),
                inferred.usd_min,
                inferred.usd_max,
            ));
        }
    }

    let scored: Vec<(AccommodationOption, i32)> = match budget_usd.filter(|b| *b > 0.0) {
        Some(budget) => {
            let relevant: Vec<_> = merged
                .iter()
                .map(|(_, min, max)| ranking::budget_relevance_score(budget, *min, *max))
                .collect();
            if relevant.iter().any(|score| *score > 0) {
                merged
                    .into_iter()
                    .zip(relevant)
                    .filter(|(_, score)| *score > 0)
                    .map(|((option, _, _), score)| (option, score))
                    .collect()
            } else {
                // Nothing matched the budget; keep everything with a flat
                // fallback score rather than returning nothing.
                merged
                    .into_iter()
                    .map(|(option, _, _)| (option, ranking::FALLBACK_SCORE))
                    .collect()
            }
        }
        None => merged
            .into_iter()
            .map(|(option, _, _)| (option, 0))
            .collect(),
    };

    ranking::rank(scored, max_options)
}
