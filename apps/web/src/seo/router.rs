use super::ids::{parse_detail_slug, DetailId};
use super::{is_seo_slug, split_seo_slug, SeoSlugParts, LISTING_ROOT, JOBS_SUFFIX};

/// Page type for a single top-level path segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageRoute {
    Listing(SeoSlugParts),
    Job { id: String },
    Company { id: String },
    NotFound,
}

/// Classifies a raw path segment, still percent-encoded as it appears in the
/// request URI. Decoding happens once, inside the codec or the id parser.
///
/// A `-jobs` suffix is always a keyword listing, since detail slugs end in
/// their id. Otherwise detail markers are checked before the SEO shapes, so
/// `rust-jobs-jid-9` is a job page rather than a listing.
pub fn classify(segment: &str) -> PageRoute {
    let segment = segment.trim_matches('/');
    let lowered = segment.to_ascii_lowercase();

    if lowered == LISTING_ROOT.trim_start_matches('/') {
        return PageRoute::Listing(SeoSlugParts::default());
    }
    if !lowered.ends_with(JOBS_SUFFIX) {
        match parse_detail_slug(segment) {
            Some(DetailId::Job(id)) => return PageRoute::Job { id },
            Some(DetailId::Company(id)) => return PageRoute::Company { id },
            None => {}
        }
    }
    if is_seo_slug(&lowered) {
        return PageRoute::Listing(split_seo_slug(segment));
    }

    PageRoute::NotFound
}
