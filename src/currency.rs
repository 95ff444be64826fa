//! Currency conversion and inference.
//!
//! Rates are a fixed table of approximations, good enough for tiered price
//! estimates. Budgets are normalized to USD internally and converted back to
//! the display currency at the output boundary.

/// Approximate conversion rates to USD.
const USD_RATES: &[(&str, f64)] = &[
    ("USD", 1.0),
    ("INR", 0.012),
    ("EUR", 1.08),
    ("GBP", 1.27),
    ("CAD", 0.74),
    ("AUD", 0.66),
    ("JPY", 0.0067),
    ("CNY", 0.14),
    ("THB", 0.029),
    ("MYR", 0.22),
    ("SGD", 0.74),
];

/// Country name (lowercase) to local currency.
const COUNTRY_CURRENCIES: &[(&str, &str)] = &[
    ("india", "INR"),
    ("united states", "USD"),
    ("usa", "USD"),
    ("canada", "CAD"),
    ("united kingdom", "GBP"),
    ("uk", "GBP"),
    ("england", "GBP"),
    ("france", "EUR"),
    ("germany", "EUR"),
    ("spain", "EUR"),
    ("italy", "EUR"),
    ("netherlands", "EUR"),
    ("australia", "AUD"),
    ("japan", "JPY"),
    ("china", "CNY"),
    ("thailand", "THB"),
    ("malaysia", "MYR"),
    ("singapore", "SGD"),
];

/// Rate to USD for a currency code; unknown codes are treated as 1.0.
#[must_use]
pub fn rate_to_usd(code: &str) -> f64 {
    let code = code.to_uppercase();
    USD_RATES
        .iter()
        .find(|(c, _)| *c == code)
        .map_or(1.0, |(_, rate)| *rate)
}

/// Convert an amount between currencies via USD, rounded to 2 decimals.
#[must_use]
pub fn convert(amount: f64, from: &str, to: &str) -> f64 {
    if from == to {
        return amount;
    }
    let usd_amount = amount * rate_to_usd(from);
    let converted = usd_amount / rate_to_usd(to);
    (converted * 100.0).round() / 100.0
}

/// Infer the likely local currency for a location.
///
/// The geocoded country name takes precedence; the raw location string is
/// scanned for country hints as a fallback. Defaults to USD.
#[must_use]
pub fn currency_for_location(location: &str, resolved_country: Option<&str>) -> &'static str {
    if let Some(country) = resolved_country {
        let country = country.to_lowercase();
        if let Some((_, currency)) = COUNTRY_CURRENCIES.iter().find(|(c, _)| *c == country) {
            return currency;
        }
    }

    let location = location.to_lowercase();
    for (country, currency) in COUNTRY_CURRENCIES {
        if location.contains(country) {
            return currency;
        }
    }

    "USD"
}

/// Detect the display currency for a location and normalize the budget to
/// USD for internal processing.
///
/// Returns `(budget_in_usd, detected_currency)`. Non-positive and absent
/// budgets pass through unconverted.
#[must_use]
pub fn detect_budget_currency(
    budget: Option<f64>,
    location: &str,
    resolved_country: Option<&str>,
) -> (Option<f64>, &'static str) {
    let detected = currency_for_location(location, resolved_country);

    match budget {
        Some(amount) if amount > 0.0 => (Some(convert(amount, detected, "USD")), detected),
        other => (other, detected),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_identity_conversion() {
        assert_eq!(convert(100.0, "USD", "USD"), 100.0);
    }

    #[test]
    fn test_round_trip_is_approximate() {
        let eur = convert(100.0, "USD", "EUR");
        let back = convert(eur, "EUR", "USD");
        assert!((back - 100.0).abs() < 0.5);
    }

    #[test]
    fn test_inr_to_usd() {
        // 10000 INR * 0.012 = 120 USD
        assert_eq!(convert(10_000.0, "INR", "USD"), 120.0);
    }

    #[rstest]
    #[case("Paris, France", None, "EUR")]
    #[case("Bangkok", Some("Thailand"), "THB")]
    #[case("somewhere in india", None, "INR")]
    #[case("Atlantis", None, "USD")]
    fn test_currency_detection(
        #[case] location: &str,
        #[case] country: Option<&str>,
        #[case] expected: &str,
    ) {
        assert_eq!(currency_for_location(location, country), expected);
    }

    #[test]
    fn test_geocoded_country_wins_over_location_string() {
        assert_eq!(currency_for_location("Paris, France", Some("Japan")), "JPY");
    }

    #[test]
    fn test_detect_budget_converts_to_usd() {
        let (budget, currency) = detect_budget_currency(Some(10_000.0), "Mumbai, India", None);
        assert_eq!(currency, "INR");
        assert_eq!(budget, Some(120.0));
    }

    #[test]
    fn test_detect_budget_passes_through_none() {
        let (budget, currency) = detect_budget_currency(None, "Tokyo, Japan", None);
        assert_eq!(currency, "JPY");
        assert!(budget.is_none());
    }
}
