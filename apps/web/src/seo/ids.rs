//! Detail-page slugs: `{title}-jid-{id}` for jobs, `{name}-cid-{id}` for companies.
//!
//! The id is percent-encoded into the slug and decoded on the way back, so
//! ids keep their case and may contain `/` or spaces.

use super::slugify;

const JOB_MARKER: &str = "jid-";
const COMPANY_MARKER: &str = "cid-";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailId {
    Job(String),
    Company(String),
}

pub fn job_slug(title: &str, id: &str) -> String {
    with_marker(title, JOB_MARKER, id)
}

pub fn company_slug(name: &str, id: &str) -> String {
    with_marker(name, COMPANY_MARKER, id)
}

fn with_marker(name: &str, marker: &str, id: &str) -> String {
    let name = slugify(name);
    let id = urlencoding::encode(id);
    if name.is_empty() {
        format!("{marker}{id}")
    } else {
        format!("{name}-{marker}{id}")
    }
}

/// Parses a raw (still percent-encoded) path segment.
///
/// The marker whose occurrence is furthest right wins, so a name that itself
/// contains `jid`/`cid` cannot capture the id. A marker must open the slug or
/// follow a `-`; `acid-7` is not a company slug.
pub fn parse_detail_slug(slug: &str) -> Option<DetailId> {
    // ASCII lowercasing keeps byte offsets, so positions index the original.
    let lowered = format!("-{}", slug.to_ascii_lowercase());
    let job = lowered.rfind(&format!("-{JOB_MARKER}"));
    let company = lowered.rfind(&format!("-{COMPANY_MARKER}"));

    let (pos, is_job) = match (job, company) {
        (Some(j), Some(c)) if j > c => (j, true),
        (_, Some(c)) => (c, false),
        (Some(j), None) => (j, true),
        (None, None) => return None,
    };

    // `pos` is in the padded string; the leading `-` cancels the shift.
    let marker_len = if is_job { JOB_MARKER.len() } else { COMPANY_MARKER.len() };
    let raw_id = &slug[pos + marker_len..];
    if raw_id.is_empty() {
        return None;
    }
    let id = urlencoding::decode(raw_id)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| raw_id.to_string());

    Some(if is_job {
        DetailId::Job(id)
    } else {
        DetailId::Company(id)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(id: &str) -> Option<DetailId> {
        Some(DetailId::Job(id.to_string()))
    }

    fn company(id: &str) -> Option<DetailId> {
        Some(DetailId::Company(id.to_string()))
    }

    #[test]
    fn test_job_slug() {
        assert_eq!(job_slug("Senior Rust Engineer", "4821"), "senior-rust-engineer-jid-4821");
        assert_eq!(job_slug("", "12"), "jid-12");
    }

    #[test]
    fn test_company_slug() {
        assert_eq!(company_slug("Procter & Gamble", "77"), "procter-and-gamble-cid-77");
    }

    #[test]
    fn test_ids_are_encoded_into_the_slug() {
        assert_eq!(job_slug("Dev", "a/b c1"), "dev-jid-a%2Fb%20c1");
        assert_eq!(parse_detail_slug("dev-jid-a%2Fb%20c1"), job("a/b c1"));
    }

    #[test]
    fn test_parse_job_slug() {
        assert_eq!(parse_detail_slug("senior-rust-engineer-jid-4821"), job("4821"));
        assert_eq!(parse_detail_slug("jid-12"), job("12"));
        assert_eq!(parse_detail_slug("python-jobs"), None);
    }

    #[test]
    fn test_parse_keeps_id_case() {
        assert_eq!(parse_detail_slug("rust-dev-jid-AbC123"), job("AbC123"));
        assert_eq!(parse_detail_slug("Rust-Dev-JID-AbC123"), job("AbC123"));
    }

    #[test]
    fn test_rightmost_marker_wins() {
        assert_eq!(parse_detail_slug("jid-labs-cid-5"), company("5"));
        assert_eq!(parse_detail_slug("cid-capital-jid-9"), job("9"));
        assert_eq!(parse_detail_slug("jid-lead-jid-99"), job("99"));
    }

    #[test]
    fn test_company_names_with_markers_round_trip() {
        for (name, id) in [("JID Labs", "5"), ("Acme CID Holdings", "x-9"), ("jid", "AbC")] {
            let slug = company_slug(name, id);
            assert_eq!(parse_detail_slug(&slug), company(id), "slug {slug}");
        }
    }

    #[test]
    fn test_hyphenated_id() {
        let slug = job_slug("Platform Engineer", "550e8400-e29b-41d4");
        assert_eq!(parse_detail_slug(&slug), job("550e8400-e29b-41d4"));
    }

    #[test]
    fn test_rejects_empty_id() {
        assert_eq!(parse_detail_slug("rust-jid-"), None);
        assert_eq!(parse_detail_slug("cid-"), None);
    }

    #[test]
    fn test_marker_must_be_word_boundary() {
        assert_eq!(parse_detail_slug("acid-7"), None);
        assert_eq!(parse_detail_slug("acme-cid-7"), company("7"));
    }
}
