//! Domain-like tokens cited in a response.
//!
//! Every distinct match becomes a citation with placeholder metadata;
//! frequency aggregation and domain-type classification happen elsewhere.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::types::DomainCitation;

pub const UNKNOWN_CITATION_TYPE: &str = "unknown";

static DOMAIN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([a-zA-Z0-9-]+\.)+[a-zA-Z]{2,}").expect("valid domain regex")
});

/// Extract distinct domains from `text`, in first-occurrence order.
///
/// Matching is case-sensitive on the raw text, so `Acme.com` and `acme.com`
/// are distinct citations.
#[must_use]
pub fn extract_domains(text: &str) -> Vec<DomainCitation> {
    let mut seen = HashSet::new();

    DOMAIN_RE
        .find_iter(text)
        .map(|m| m.as_str())
        .filter(|domain| seen.insert(*domain))
        .map(|domain| DomainCitation {
            domain: domain.to_string(),
            used: 1,
            avg_citations: 0.0,
            citation_type: UNKNOWN_CITATION_TYPE.to_string(),
        })
        .collect()
}
