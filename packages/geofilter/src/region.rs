//! Metro Manila service region classification.
//!
//! The service region is a fixed keyword list checked by substring
//! against the lowercased place name. Substring matching is
//! intentionally permissive: "San Juan, La Union" matches the
//! "san juan" keyword even though it is outside Metro Manila. That
//! trade-off is accepted; geocoded place names for the service area
//! reliably contain one of these keywords.

use std::sync::LazyLock;

/// Place-name keywords covering the cities and municipality of
/// Metro Manila, including common unaccented spellings.
static METRO_MANILA_KEYWORDS: LazyLock<Vec<&'static str>> = LazyLock::new(|| {
    vec![
        "metro manila",
        "manila",
        "quezon city",
        "makati",
        "taguig",
        "pasig",
        "mandaluyong",
        "san juan",
        "marikina",
        "pasay",
        "paranaque",
        "parañaque",
        "las pinas",
        "las piñas",
        "muntinlupa",
        "caloocan",
        "malabon",
        "navotas",
        "valenzuela",
    ]
});

/// Returns `true` if `place_name` contains any service-region keyword.
///
/// Matching is case-insensitive and substring-based.
#[must_use]
pub fn is_within_service_region(place_name: &str) -> bool {
    let lowered = place_name.to_lowercase();
    METRO_MANILA_KEYWORDS
        .iter()
        .any(|keyword| lowered.contains(keyword))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_metro_manila_cities() {
        assert!(is_within_service_region("Makati City"));
        assert!(is_within_service_region("Quezon City, Metro Manila"));
        assert!(is_within_service_region("Taguig"));
        assert!(is_within_service_region("Las Piñas"));
        assert!(is_within_service_region("Las Pinas"));
    }

    #[test]
    fn rejects_places_outside_the_region() {
        assert!(!is_within_service_region("Cebu City"));
        assert!(!is_within_service_region("Davao City"));
        assert!(!is_within_service_region(""));
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert!(is_within_service_region("MAKATI"));
        assert!(is_within_service_region("makati"));
    }

    #[test]
    fn substring_matching_is_permissive() {
        // Known limitation: provincial namesakes match too.
        assert!(is_within_service_region("San Juan, La Union"));
    }
}
