//! Nightly price-range inference.
//!
//! Merges two independent signals: the provider's coarse price level
//! (mapped to fixed USD ranges) and the user's numeric budget (a ±25-30%
//! band). Ranges are computed in USD and converted to the display currency
//! only at the output boundary.

use super::BudgetCategory;
use crate::currency;
use crate::models::{PriceLevel, PricingRange};

/// An inferred range: the display-currency output plus the USD basis the
/// relevance score is computed against.
#[derive(Debug, Clone)]
pub struct InferredPricing {
    pub display: PricingRange,
    pub usd_min: f64,
    pub usd_max: f64,
}

/// Infer a nightly price range for one candidate.
///
/// `user_budget_usd` is the USD-normalized budget; `user_budget_currency`
/// is the currency the user originally stated it in, echoed for display.
#[must_use]
pub fn infer(
    price_level: Option<PriceLevel>,
    category: BudgetCategory,
    user_budget_usd: Option<f64>,
    user_budget_currency: &str,
    display_currency: &str,
) -> InferredPricing {
    let budget = user_budget_usd.filter(|b| *b > 0.0);

    // Primary signal: provider price level, then budget band, then the
    // category base range.
    let (price_min, price_max, level_display) = match price_level {
        Some(level) => {
            let (min, max) = level.usd_range();
            (min as i64, max as i64, level.display_label().to_string())
        }
        None => match budget {
            Some(b) => (
                ((b * 0.7) as i64).max(5),
                (b * 1.3) as i64,
                "Estimated".to_string(),
            ),
            None => {
                let (min, max) = category.base_range_usd();
                (min, max, category.display_label().to_string())
            }
        },
    };

    // With both signals, intersect the level range with a ±25% budget
    // band; an empty intersection is discarded for a ±20% band, widened
    // toward the level minimum when that minimum is within 2x the budget.
    let (final_min, final_max) = match (budget, price_level) {
        (Some(b), Some(_)) => {
            let user_min = ((b * 0.75) as i64).max(5);
            let user_max = (b * 1.25) as i64;
            let mut min = price_min.max(user_min);
            let mut max = price_max.min(user_max);
            if min >= max {
                min = (b * 0.8) as i64;
                max = (b * 1.2) as i64;
                if price_min > 0 && max < price_min && (price_min as f64) <= b * 2.0 {
                    min = price_min;
                    max = (price_min as f64 * 1.5) as i64;
                }
            }
            (min, max)
        }
        _ => (price_min, price_max),
    };

    let usd_min = final_min.max(5) as f64;
    let usd_max = final_max as f64;

    let display_min = currency::convert(usd_min, "USD", display_currency);
    let display_max = currency::convert(usd_max, "USD", display_currency);
    let user_budget_display =
        budget.map(|b| currency::convert(b, "USD", display_currency) as i64);

    InferredPricing {
        display: PricingRange {
            range_min: display_min as i64,
            range_max: display_max as i64,
            currency: display_currency.to_string(),
            per: "night".to_string(),
            level: level_display,
            user_budget: user_budget_display,
            user_budget_currency: user_budget_currency.to_string(),
            google_price_level: price_level,
        },
        usd_min,
        usd_max,
    }
}
