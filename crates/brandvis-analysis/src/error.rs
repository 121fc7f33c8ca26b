use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("sentiment model not initialized: supply a classifier before building the analyzer")]
    MissingSentimentModel,
}
