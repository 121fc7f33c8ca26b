//! Brand visibility analysis for generative-AI answers.
//!
//! Given response text, a target brand, and an ordered list of competitors,
//! measures how often and how early each entity is mentioned, what share of
//! all mentions the brand holds, which domains the answer cites, and the
//! response's overall sentiment on a 1-100 scale.

pub mod aliases;
pub mod domains;
pub mod error;
pub mod mentions;
pub mod overview;
pub mod pipeline;
pub mod position;
pub mod scorer;
pub mod types;
pub mod visibility;

pub use aliases::{generate_aliases, AliasSet, TrackedEntity};
pub use domains::extract_domains;
pub use error::AnalysisError;
pub use mentions::{claim_mentions, count_mentions};
pub use overview::summarize_brands;
pub use pipeline::{word_volume, Analyzer, AnalyzerBuilder};
pub use position::{brand_position, rank_positions};
pub use scorer::{
    lexicon_score, rescale_sentiment, LexiconClassifier, SentimentClassifier, SentimentScorer,
};
pub use types::{
    AnalysisResult, BrandMetric, BrandOverview, Competitor, DomainCitation, MentionCounts,
    PromptResponse,
};
pub use visibility::brand_visibility;
