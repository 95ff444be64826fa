//! Trip-type search profiles.
//!
//! Each trip-type label maps to exactly one profile: a disjunctive keyword
//! string and optionally a place-type filter that biases the candidate
//! search. Unknown labels fall back to "Leisure".

/// Search strategy for one trip-type label.
#[derive(Debug, Clone, Copy)]
pub struct TripTypeProfile {
    pub label: &'static str,
    pub keyword: &'static str,
    pub included_type: Option<&'static str>,
}

impl TripTypeProfile {
    /// First alternative of the disjunctive keyword, used to build the
    /// free-text query.
    #[must_use]
    pub fn primary_keyword(&self) -> &'static str {
        self.keyword.split(" OR ").next().unwrap_or(self.keyword)
    }
}

const PROFILES: &[TripTypeProfile] = &[
    TripTypeProfile {
        label: "Adventure",
        keyword: "hiking OR trekking OR national park OR adventure",
        included_type: None,
    },
    TripTypeProfile {
        label: "Leisure",
        keyword: "park OR promenade OR landmark OR attraction",
        included_type: Some("tourist_attraction"),
    },
    TripTypeProfile {
        label: "Business",
        keyword: "convention center OR business district",
        included_type: None,
    },
    TripTypeProfile {
        label: "Wellness",
        keyword: "spa OR wellness center OR hot spring",
        included_type: None,
    },
    TripTypeProfile {
        label: "Cultural",
        keyword: "museum OR heritage site OR temple OR fort",
        included_type: None,
    },
    TripTypeProfile {
        label: "Romantic",
        keyword: "romantic viewpoint OR sunset point OR beach",
        included_type: None,
    },
    TripTypeProfile {
        label: "Family",
        keyword: "zoo OR theme park OR aquarium OR family attraction",
        included_type: None,
    },
    TripTypeProfile {
        label: "Solo",
        keyword: "popular attraction OR museum OR walking tour",
        included_type: None,
    },
    TripTypeProfile {
        label: "Friends/Group",
        keyword: "nightlife OR club OR market OR adventure park",
        included_type: None,
    },
    TripTypeProfile {
        label: "Luxury",
        keyword: "luxury shopping OR fine dining OR art gallery",
        included_type: None,
    },
    TripTypeProfile {
        label: "Budget/Backpacking",
        keyword: "backpacker hostel OR free attraction OR market",
        included_type: None,
    },
    TripTypeProfile {
        label: "Eco/Nature",
        keyword: "nature reserve OR national park OR botanical garden",
        included_type: None,
    },
    TripTypeProfile {
        label: "Spiritual/Pilgrimage",
        keyword: "temple OR church OR mosque OR monastery OR pilgrimage",
        included_type: None,
    },
    TripTypeProfile {
        label: "Food & Wine",
        keyword: "famous restaurant OR street food OR food market OR winery",
        included_type: Some("restaurant"),
    },
    TripTypeProfile {
        label: "Festival/Event",
        keyword: "festival venue OR event venue OR fairground",
        included_type: None,
    },
];

/// Look up the profile for a trip-type label; unknown labels get "Leisure".
#[must_use]
pub fn profile_for(trip_type: &str) -> &'static TripTypeProfile {
    PROFILES
        .iter()
        .find(|p| p.label == trip_type)
        .unwrap_or_else(|| &PROFILES[1])
}
