//! Cross-response averages per entity.

use crate::types::{AnalysisResult, BrandOverview};

#[derive(Default)]
struct Totals {
    visibility: f64,
    position: f64,
    sentiment: f64,
    responses: usize,
}

/// Average each entity's visibility, position and sentiment over `results`.
///
/// Entities are keyed by `BrandMetric::name` and listed in first-appearance
/// order. Unmentioned responses contribute position `0` to the average, the
/// same as any stored metric row would.
#[must_use]
pub fn summarize_brands(results: &[AnalysisResult]) -> Vec<BrandOverview> {
    let mut order: Vec<String> = Vec::new();
    let mut totals: Vec<Totals> = Vec::new();

    for metric in results.iter().flat_map(|r| &r.brands) {
        let idx = match order.iter().position(|n| *n == metric.name) {
            Some(idx) => idx,
            None => {
                order.push(metric.name.clone());
                totals.push(Totals::default());
                order.len() - 1
            }
        };
        let t = &mut totals[idx];
        t.visibility += metric.visibility;
        #[allow(clippy::cast_precision_loss)]
        let position = metric.position as f64;
        t.position += position;
        t.sentiment += f64::from(metric.sentiment);
        t.responses += 1;
    }

    order
        .into_iter()
        .zip(totals)
        .map(|(name, t)| {
            #[allow(clippy::cast_precision_loss)]
            let n = t.responses as f64;
            BrandOverview {
                name,
                avg_visibility: t.visibility / n,
                avg_position: t.position / n,
                avg_sentiment: t.sentiment / n,
                responses: t.responses,
            }
        })
        .collect()
}
