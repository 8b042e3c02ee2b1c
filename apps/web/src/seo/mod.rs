//! SEO slug codec: converts search filters to and from URL path segments
//! such as `/python-jobs-in-dubai`.
//!
//! Every function here is pure and total. Malformed input degrades to empty
//! output; callers decide whether that means "not found".

pub mod ids;
pub mod locations;
pub mod router;

use serde::{Deserialize, Serialize};

pub const LISTING_ROOT: &str = "/referrals";

const JOBS_IN_PREFIX: &str = "jobs-in-";
const JOBS_IN_INFIX: &str = "-jobs-in-";
const JOBS_SUFFIX: &str = "-jobs";

/// Structured search intent. Built fresh per request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchFilters {
    #[serde(default)]
    pub keyword: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub city: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<String>,
}

/// Decoded form of an SEO slug. City and country are not distinguished.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeoSlugParts {
    pub keyword: String,
    pub location: Option<String>,
}

impl SeoSlugParts {
    pub fn is_empty(&self) -> bool {
        self.keyword.is_empty() && self.location.is_none()
    }
}

/// Lowercases, maps `&` to `and`, joins words with `-` and drops anything
/// outside `[a-z0-9-]`. Idempotent.
pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();
    let replaced = lowered.trim().replace('&', "and");

    let mut hyphenated = String::with_capacity(replaced.len());
    let mut in_whitespace = false;
    for c in replaced.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                hyphenated.push('-');
            }
            in_whitespace = true;
        } else {
            hyphenated.push(c);
            in_whitespace = false;
        }
    }

    // Hyphens are collapsed after stripping so that a removed character
    // between two separators cannot leave `--` behind.
    let mut slug = String::with_capacity(hyphenated.len());
    for c in hyphenated
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')
    {
        if c == '-' && slug.ends_with('-') {
            continue;
        }
        slug.push(c);
    }
    slug
}

/// Approximate inverse of [`slugify`]: percent-decodes, turns hyphens into
/// spaces and trims. Undecodable input is used as-is.
pub fn deslugify(text: &str) -> String {
    let decoded = urlencoding::decode(text)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| text.to_string());
    decoded.replace('-', " ").trim().to_string()
}

/// Canonical listing path for a set of filters. Always starts with `/`.
///
/// A keyword is only ever combined with a city; keyword plus country stays on
/// the plain keyword page.
pub fn build_seo_path(filters: &SearchFilters) -> String {
    let keyword = filters.keyword.trim();
    let city = filters.city.trim();
    let country = filters.country.trim();

    let location = if !city.is_empty() { city } else { country };
    let keyword_token = slugify(keyword);
    let location_token = slugify(location);

    match (!keyword.is_empty(), !location.is_empty()) {
        (true, _) if !city.is_empty() => format!("/{keyword_token}-jobs-in-{location_token}"),
        (true, _) => format!("/{keyword_token}-jobs"),
        (false, true) => format!("/jobs-in-{location_token}"),
        (false, false) => LISTING_ROOT.to_string(),
    }
}

/// Canonical path for a decoded slug. The location is kept as served,
/// whether it resolves to a city or a country.
pub fn path_for_parts(parts: &SeoSlugParts) -> String {
    let keyword = slugify(&parts.keyword);
    let location = parts.location.as_deref().map(slugify).unwrap_or_default();

    match (keyword.is_empty(), location.is_empty()) {
        (false, false) => format!("/{keyword}-jobs-in-{location}"),
        (false, true) => format!("/{keyword}-jobs"),
        (true, false) => format!("/jobs-in-{location}"),
        (true, true) => LISTING_ROOT.to_string(),
    }
}

/// Whether a path segment has one of the three SEO listing shapes.
pub fn is_seo_slug(slug: &str) -> bool {
    let slug = slug.to_lowercase();
    slug.starts_with(JOBS_IN_PREFIX) || slug.ends_with(JOBS_SUFFIX) || slug.contains(JOBS_IN_INFIX)
}

pub fn split_seo_slug(slug: &str) -> SeoSlugParts {
    let slug = slug.to_lowercase();

    if let Some(rest) = slug.strip_prefix(JOBS_IN_PREFIX) {
        return SeoSlugParts {
            keyword: String::new(),
            location: Some(deslugify(rest)),
        };
    }

    if let Some((keyword, location)) = slug.split_once(JOBS_IN_INFIX) {
        return SeoSlugParts {
            keyword: deslugify(keyword),
            location: Some(deslugify(location)),
        };
    }

    if let Some(keyword) = slug.strip_suffix(JOBS_SUFFIX) {
        return SeoSlugParts {
            keyword: deslugify(keyword),
            location: None,
        };
    }

    SeoSlugParts::default()
}
