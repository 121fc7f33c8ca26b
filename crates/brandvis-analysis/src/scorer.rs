//! Response-level sentiment scoring.
//!
//! Classification is an injected capability ([`SentimentClassifier`]) that
//! reports a raw score in `[0.0, 2.0]`. [`SentimentScorer`] rescales that to
//! `[1, 100]`. [`LexiconClassifier`] is the built-in model.

use std::sync::Arc;

/// Word weights for AI answers that compare brands, products and services.
///
/// Keys are lowercase single words. Values in `(0.0, 1.0]` are positive,
/// in `[-1.0, 0.0)` are negative. The summed score is clamped to `[-1.0, 1.0]`.
pub(crate) const LEXICON: &[(&str, f32)] = &[
    // Positive signals
    ("best", 0.5),
    ("excellent", 0.5),
    ("leading", 0.4),
    ("trusted", 0.4),
    ("reliable", 0.4),
    ("recommended", 0.4),
    ("recommend", 0.4),
    ("popular", 0.3),
    ("innovative", 0.4),
    ("affordable", 0.3),
    ("great", 0.4),
    ("good", 0.3),
    ("strong", 0.3),
    ("secure", 0.3),
    ("quality", 0.3),
    ("convenient", 0.3),
    ("transparent", 0.3),
    ("award-winning", 0.5),
    ("love", 0.5),
    ("top", 0.3),
    // Negative signals
    ("worst", -0.6),
    ("poor", -0.4),
    ("bad", -0.4),
    ("unreliable", -0.5),
    ("expensive", -0.3),
    ("complaints", -0.5),
    ("lawsuit", -0.5),
    ("scam", -0.7),
    ("fraud", -0.7),
    ("outdated", -0.4),
    ("slow", -0.3),
    ("risky", -0.4),
    ("limited", -0.2),
    ("hidden", -0.3),
    ("problem", -0.3),
    ("issues", -0.3),
    ("concern", -0.3),
    ("warning", -0.4),
    ("decline", -0.4),
    ("controversy", -0.5),
];

/// Score a text string using the lexicon.
///
/// Splits text into lowercase words, sums matching weights, and clamps
/// the result to `[-1.0, 1.0]`. Returns `0.0` for empty or unknown text.
#[must_use]
pub fn lexicon_score(text: &str) -> f32 {
    let mut score = 0.0_f32;
    for word in text.split_whitespace() {
        let w = word
            .trim_matches(|c: char| !c.is_alphabetic())
            .to_lowercase();
        if let Some(&(_, weight)) = LEXICON.iter().find(|(lex_word, _)| *lex_word == w) {
            score += weight;
        }
    }
    score.clamp(-1.0, 1.0)
}

/// The `classify(text) -> raw score` capability.
///
/// Implementations must be safe to call concurrently and must not change
/// after construction. Raw scores are expected in `[0.0, 2.0]`; anything
/// outside is clamped by the scorer, not rejected.
pub trait SentimentClassifier: Send + Sync {
    fn classify(&self, text: &str) -> f64;
}

/// Lexicon model mapped onto the raw `[0.0, 2.0]` range.
///
/// Neutral text classifies as `1.0`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconClassifier;

impl SentimentClassifier for LexiconClassifier {
    fn classify(&self, text: &str) -> f64 {
        f64::from(lexicon_score(text)) + 1.0
    }
}

/// Rescale a raw `[0.0, 2.0]` score onto `[1, 100]`.
///
/// `floor(raw / 2 * 99) + 1`, clamped. NaN scores `1`.
#[must_use]
pub fn rescale_sentiment(raw: f64) -> u8 {
    let scaled = (raw / 2.0 * 99.0).floor();
    if scaled.is_nan() {
        return 1;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let bucket = scaled.clamp(0.0, 99.0) as u8;
    bucket + 1
}

/// Applies [`rescale_sentiment`] to an injected classifier's output.
#[derive(Clone)]
pub struct SentimentScorer {
    classifier: Arc<dyn SentimentClassifier>,
}

impl SentimentScorer {
    #[must_use]
    pub fn new(classifier: Arc<dyn SentimentClassifier>) -> Self {
        Self { classifier }
    }

    #[must_use]
    pub fn score(&self, text: &str) -> u8 {
        rescale_sentiment(self.classifier.classify(text))
    }
}

impl std::fmt::Debug for SentimentScorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SentimentScorer").finish_non_exhaustive()
    }
}
