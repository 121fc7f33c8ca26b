//! Whole-word mention counting with first-claim attribution.
//!
//! The target is matched first, then competitors in the order given. Each
//! alias match claims its byte span of the lowercased text; any later match
//! overlapping a claimed span is discarded, whichever entity it belongs to.
//! Earlier entities therefore win overlapping text, and no span is ever
//! credited twice.

use std::ops::Range;

use crate::aliases::TrackedEntity;
use crate::types::MentionCounts;

fn overlaps(a: &Range<usize>, b: &Range<usize>) -> bool {
    a.start < b.end && b.start < a.end
}

/// Claimed spans per entity, target first then competitors in input order.
///
/// Offsets index into `text.to_lowercase()`.
#[must_use]
pub fn claim_mentions(
    text: &str,
    target: &TrackedEntity,
    competitors: &[TrackedEntity],
) -> Vec<Vec<Range<usize>>> {
    let lower = text.to_lowercase();
    let mut claimed: Vec<Range<usize>> = Vec::new();

    std::iter::once(target)
        .chain(competitors)
        .map(|entity| {
            let mut spans = Vec::new();
            for re in entity.matchers() {
                for m in re.find_iter(&lower) {
                    let span = m.range();
                    if claimed.iter().any(|c| overlaps(c, &span)) {
                        continue;
                    }
                    claimed.push(span.clone());
                    spans.push(span);
                }
            }
            spans
        })
        .collect()
}

/// Count mentions of the target and each competitor in `text`.
///
/// Every entity gets an entry, including those with zero mentions.
#[must_use]
pub fn count_mentions(
    text: &str,
    target: &TrackedEntity,
    competitors: &[TrackedEntity],
) -> MentionCounts {
    let spans = claim_mentions(text, target, competitors);

    std::iter::once(target)
        .chain(competitors)
        .zip(spans)
        .map(|(entity, spans)| (entity.name().to_string(), spans.len()))
        .collect()
}
