//! Maps a decoded slug location back onto city/country filters.
//!
//! The slug does not say whether its location was a city or a country, so
//! resolution tries a city match first, then a country match.

use serde::{Deserialize, Serialize};

use super::{SearchFilters, SeoSlugParts};

/// One row of the `locations` dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationOption {
    #[serde(default)]
    pub city: String,
    pub country: String,
}

pub fn resolve_filters(
    parts: &SeoSlugParts,
    locations: &[LocationOption],
    experience: Option<String>,
) -> SearchFilters {
    let (city, country) = match parts.location.as_deref() {
        None => (String::new(), String::new()),
        Some(location) => resolve_location(location, locations),
    };

    SearchFilters {
        keyword: parts.keyword.clone(),
        country,
        city,
        experience,
    }
}

/// Returns `(city, country)`. Unknown locations are passed through as a
/// free-text city.
fn resolve_location(location: &str, locations: &[LocationOption]) -> (String, String) {
    let wanted = normalize(location);

    if let Some(hit) = locations
        .iter()
        .find(|l| !l.city.is_empty() && normalize(&l.city) == wanted)
    {
        return (hit.city.clone(), hit.country.clone());
    }

    if let Some(hit) = locations.iter().find(|l| normalize(&l.country) == wanted) {
        return (String::new(), hit.country.clone());
    }

    (location.to_string(), String::new())
}

/// Compares names the way they look after a slug round trip.
fn normalize(name: &str) -> String {
    super::deslugify(&super::slugify(name))
}
