use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Mention count per entity name (brand name as given, competitor tracked name).
pub type MentionCounts = BTreeMap<String, usize>;

/// One prompt and the generative-AI answer it produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptResponse {
    pub prompt: String,
    pub response: String,
}

/// A competitor as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Competitor {
    pub display_name: String,
    /// Name matched against response text and used as the metrics key.
    pub tracked_name: String,
}

/// Per-entity metrics for one response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandMetric {
    pub name: String,
    pub display_name: String,
    /// Response-level sentiment in `[1, 100]`, shared by every entity.
    pub sentiment: u8,
    /// 1-based rank by first occurrence; `0` when never mentioned.
    pub position: usize,
    /// Share of all mentions in `[0.0, 100.0]`.
    pub visibility: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainCitation {
    pub domain: String,
    pub used: u32,
    pub avg_citations: f64,
    #[serde(rename = "type")]
    pub citation_type: String,
}

/// Analysis of a single (prompt, response) pair.
///
/// `brands` holds the main brand first, then competitors in input order.
/// The top-level `sentiment`, `position` and `visibility` repeat the main
/// brand's metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub prompt: String,
    pub response: String,
    pub country: String,
    pub sentiment: u8,
    pub position: usize,
    pub visibility: f64,
    pub mentions: MentionCounts,
    pub domains: Vec<DomainCitation>,
    pub word_volume: usize,
    pub brands: Vec<BrandMetric>,
}

/// Averages of one entity's metrics across many results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandOverview {
    pub name: String,
    pub avg_visibility: f64,
    pub avg_position: f64,
    pub avg_sentiment: f64,
    /// Number of results the averages were taken over.
    pub responses: usize,
}
