//! Per-response analysis orchestration.

use std::sync::Arc;

use crate::aliases::TrackedEntity;
use crate::domains::extract_domains;
use crate::error::AnalysisError;
use crate::mentions::count_mentions;
use crate::position::rank_positions;
use crate::scorer::{SentimentClassifier, SentimentScorer};
use crate::types::{AnalysisResult, BrandMetric, Competitor, PromptResponse};
use crate::visibility::brand_visibility;

/// Number of whitespace-delimited tokens in `text`.
#[must_use]
pub fn word_volume(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Builds an [`Analyzer`]. A sentiment classifier is required.
#[derive(Default)]
pub struct AnalyzerBuilder {
    classifier: Option<Arc<dyn SentimentClassifier>>,
}

impl AnalyzerBuilder {
    #[must_use]
    pub fn sentiment(mut self, classifier: Arc<dyn SentimentClassifier>) -> Self {
        self.classifier = Some(classifier);
        self
    }

    /// # Errors
    ///
    /// Returns [`AnalysisError::MissingSentimentModel`] if no classifier was set.
    pub fn build(self) -> Result<Analyzer, AnalysisError> {
        let classifier = self
            .classifier
            .ok_or(AnalysisError::MissingSentimentModel)?;
        Ok(Analyzer {
            scorer: SentimentScorer::new(classifier),
        })
    }
}

/// Stateless brand-visibility analyzer.
///
/// Holds only the read-only sentiment capability, so one instance can be
/// shared across threads and reused for any number of batches.
#[derive(Debug, Clone)]
pub struct Analyzer {
    scorer: SentimentScorer,
}

impl Analyzer {
    #[must_use]
    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::default()
    }

    /// Analyze each response for `brand_name` against `competitors`.
    ///
    /// Returns one result per input response, in input order. Competitor
    /// order decides mention attribution on overlapping text and breaks
    /// position ties. Names are expected to be non-empty; an empty name is
    /// simply never found.
    #[must_use]
    pub fn analyze_responses(
        &self,
        responses: &[PromptResponse],
        country: &str,
        brand_name: &str,
        competitors: &[Competitor],
    ) -> Vec<AnalysisResult> {
        let brand = TrackedEntity::new(brand_name);
        let rivals: Vec<TrackedEntity> = competitors
            .iter()
            .map(|c| TrackedEntity::new(&c.tracked_name))
            .collect();

        let results: Vec<AnalysisResult> = responses
            .iter()
            .enumerate()
            .map(|(idx, r)| self.analyze_one(idx, r, country, &brand, &rivals, competitors))
            .collect();

        tracing::debug!(
            brand = brand_name,
            competitors = competitors.len(),
            responses = results.len(),
            "analysis batch complete"
        );

        results
    }

    fn analyze_one(
        &self,
        idx: usize,
        input: &PromptResponse,
        country: &str,
        brand: &TrackedEntity,
        rivals: &[TrackedEntity],
        competitors: &[Competitor],
    ) -> AnalysisResult {
        let text = input.response.as_str();

        let mentions = count_mentions(text, brand, rivals);
        let sentiment = self.scorer.score(text);

        let pool: Vec<&TrackedEntity> = std::iter::once(brand).chain(rivals).collect();
        let positions = rank_positions(text, &pool);

        let display_names =
            std::iter::once(brand.name()).chain(competitors.iter().map(|c| c.display_name.as_str()));

        let brands: Vec<BrandMetric> = pool
            .iter()
            .zip(positions)
            .zip(display_names)
            .map(|((entity, position), display_name)| BrandMetric {
                name: entity.name().to_string(),
                display_name: display_name.to_string(),
                sentiment,
                position,
                visibility: brand_visibility(&mentions, entity),
            })
            .collect();

        let domains = extract_domains(text);
        let word_volume = word_volume(text);

        tracing::debug!(
            prompt_index = idx,
            sentiment,
            position = brands[0].position,
            mentions = mentions.values().sum::<usize>(),
            domains = domains.len(),
            word_volume,
            "analyzed response"
        );

        AnalysisResult {
            prompt: input.prompt.clone(),
            response: input.response.clone(),
            country: country.to_string(),
            sentiment,
            position: brands[0].position,
            visibility: brands[0].visibility,
            mentions,
            domains,
            word_volume,
            brands,
        }
    }
}
