//! `analyze` and `overview` command handlers.

use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use brandvis_analysis::{
    summarize_brands, AnalysisResult, Analyzer, Competitor, LexiconClassifier, PromptResponse,
};
use brandvis_core::BrandsFile;

/// Read prompt/response pairs from a JSON file, or stdin when `path` is `-`.
pub(crate) fn read_responses(path: &Path) -> anyhow::Result<Vec<PromptResponse>> {
    let raw = if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read responses from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read responses file {}", path.display()))?
    };

    parse_responses(&raw)
}

pub(crate) fn parse_responses(raw: &str) -> anyhow::Result<Vec<PromptResponse>> {
    serde_json::from_str(raw).context("responses must be a JSON array of {prompt, response}")
}

/// Competitors in file order, display names resolved.
pub(crate) fn competitors_from(brands: &BrandsFile) -> Vec<Competitor> {
    brands
        .competitors
        .iter()
        .map(|c| Competitor {
            display_name: c.display_name().to_string(),
            tracked_name: c.tracked_name.trim().to_string(),
        })
        .collect()
}

fn analyze(
    brands_path: &Path,
    responses_path: &Path,
    country: &str,
) -> anyhow::Result<Vec<AnalysisResult>> {
    let brands = brandvis_core::load_brands(brands_path)?;
    let responses = read_responses(responses_path)?;
    let competitors = competitors_from(&brands);

    // The classifier is loaded once and shared read-only for the whole run.
    let analyzer = Analyzer::builder()
        .sentiment(Arc::new(LexiconClassifier))
        .build()?;

    tracing::info!(
        brand = %brands.brand.name,
        competitors = competitors.len(),
        responses = responses.len(),
        "analyzing responses"
    );

    Ok(analyzer.analyze_responses(&responses, country, brands.brand.name.trim(), &competitors))
}

/// Print every `AnalysisResult` as a pretty JSON array.
///
/// # Errors
///
/// Returns an error if the brands file or responses cannot be loaded.
pub(crate) fn run_analyze(
    brands_path: &Path,
    responses_path: &Path,
    country: &str,
) -> anyhow::Result<()> {
    let results = analyze(brands_path, responses_path, country)?;
    println!("{}", serde_json::to_string_pretty(&results)?);
    Ok(())
}

/// Print per-brand averages across all responses.
///
/// # Errors
///
/// Returns an error if the brands file or responses cannot be loaded.
pub(crate) fn run_overview(
    brands_path: &Path,
    responses_path: &Path,
    country: &str,
) -> anyhow::Result<()> {
    let results = analyze(brands_path, responses_path, country)?;
    let overview = summarize_brands(&results);
    println!("{}", serde_json::to_string_pretty(&overview)?);
    Ok(())
}
