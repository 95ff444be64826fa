//! Visit-duration inference and duration rendering.
//!
//! An ordered rule table keyed by place category, evaluated in priority
//! order: exact type match, table keyword in the display name, then a few
//! name-based special cases for generic tags.

pub const DEFAULT_VISIT_MINUTES: u32 = 60;

/// Expected visit length per category, in minutes. Order matters for the
/// name-substring pass.
const VISIT_DURATIONS: &[(&str, u32)] = &[
    ("museum", 120),
    ("art_gallery", 90),
    ("science_museum", 150),
    ("history_museum", 120),
    ("temple", 60),
    ("church", 45),
    ("mosque", 45),
    ("monastery", 60),
    ("shrine", 30),
    ("heritage_site", 90),
    ("amusement_park", 300),
    ("theme_park", 360),
    ("zoo", 180),
    ("aquarium", 120),
    ("botanical_garden", 90),
    ("park", 60),
    ("tourist_attraction", 60),
    ("shopping_mall", 120),
    ("market", 90),
    ("bazaar", 90),
    ("restaurant", 90),
    ("cafe", 45),
    ("food_market", 60),
    ("national_park", 240),
    ("nature_reserve", 180),
    ("beach", 120),
    ("viewpoint", 30),
    ("lighthouse", 45),
    ("landmark", 45),
    ("monument", 30),
    ("castle", 120),
    ("fort", 90),
    ("palace", 120),
];

/// Type tags too generic to imply a duration on their own.
const GENERIC_TAGS: &[&str] = &["tourist_attraction", "establishment", "point_of_interest"];

fn table_lookup(category: &str) -> Option<u32> {
    VISIT_DURATIONS
        .iter()
        .find(|(key, _)| *key == category)
        .map(|(_, minutes)| *minutes)
}

/// Estimate how long a visitor spends at a place, in minutes.
#[must_use]
pub fn estimate_visit_minutes(types: &[String], name: &str) -> u32 {
    if types.is_empty() {
        return DEFAULT_VISIT_MINUTES;
    }

    for tag in types {
        if let Some(minutes) = table_lookup(&tag.to_lowercase()) {
            return minutes;
        }
    }

    let name = name.to_lowercase();
    for (keyword, minutes) in VISIT_DURATIONS {
        if name.contains(&keyword.replace('_', " ")) {
            return *minutes;
        }
    }

    if types
        .iter()
        .any(|t| GENERIC_TAGS.contains(&t.to_lowercase().as_str()))
    {
        if name.contains("museum") {
            return table_lookup("museum").unwrap_or(DEFAULT_VISIT_MINUTES);
        }
        if name.contains("temple") || name.contains("shrine") {
            return table_lookup("temple").unwrap_or(DEFAULT_VISIT_MINUTES);
        }
        if name.contains("market") || name.contains("bazaar") {
            return table_lookup("market").unwrap_or(DEFAULT_VISIT_MINUTES);
        }
        if name.contains("park") {
            return table_lookup("park").unwrap_or(DEFAULT_VISIT_MINUTES);
        }
    }

    DEFAULT_VISIT_MINUTES
}

/// Render minutes as a human string: "45 min", "2 hrs", "1h 20m".
#[must_use]
pub fn format_duration(minutes: u32) -> String {
    if minutes < 60 {
        return format!("{minutes} min");
    }
    let hours = minutes / 60;
    let remainder = minutes % 60;
    if remainder == 0 {
        if hours == 1 {
            "1 hr".to_string()
        } else {
            format!("{hours} hrs")
        }
    } else {
        format!("{hours}h {remainder}m")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn tags(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| (*v).to_string()).collect()
    }

    #[test]
    fn test_exact_type_match_wins() {
        let minutes = estimate_visit_minutes(&tags(&["museum", "establishment"]), "Somewhere");
        assert_eq!(minutes, 120);
    }

    #[test]
    fn test_type_match_is_case_insensitive() {
        assert_eq!(estimate_visit_minutes(&tags(&["Theme_Park"]), "X"), 360);
    }

    #[test]
    fn test_name_keyword_match() {
        // No table type, but "botanical garden" appears in the name.
        let minutes = estimate_visit_minutes(&tags(&["place"]), "City Botanical Garden");
        assert_eq!(minutes, 90);
    }

    #[test]
    fn test_generic_tag_name_special_cases() {
        assert_eq!(
            estimate_visit_minutes(&tags(&["point_of_interest"]), "Night Bazaar"),
            90
        );
        // "shrine" is itself a table keyword, so the name pass wins.
        assert_eq!(
            estimate_visit_minutes(&tags(&["establishment"]), "Golden Shrine"),
            30
        );
    }

    #[test]
    fn test_no_types_gives_default() {
        assert_eq!(estimate_visit_minutes(&[], "Grand Museum"), 60);
    }

    #[test]
    fn test_unmatched_falls_back_to_default() {
        assert_eq!(
            estimate_visit_minutes(&tags(&["mystery"]), "Nondescript Place"),
            DEFAULT_VISIT_MINUTES
        );
    }

    #[rstest]
    #[case(45, "45 min")]
    #[case(59, "59 min")]
    #[case(60, "1 hr")]
    #[case(80, "1h 20m")]
    #[case(120, "2 hrs")]
    #[case(300, "5 hrs")]
    #[case(0, "0 min")]
    fn test_format_duration(#[case] minutes: u32, #[case] expected: &str) {
        assert_eq!(format_duration(minutes), expected);
    }
}
