//! Reading-order rank of entities in a response.
//!
//! An entity's offset is the earliest case-insensitive substring hit of any
//! of its aliases (no word boundaries). Entities that never occur are
//! unranked and get position `0`. Equal offsets are broken by pool order:
//! the target first, then competitors as supplied.

use crate::aliases::TrackedEntity;

fn first_offset(lower: &str, entity: &TrackedEntity) -> Option<usize> {
    entity
        .aliases()
        .iter()
        .filter(|alias| !alias.is_empty())
        .filter_map(|alias| lower.find(alias))
        .min()
}

/// Positions for every entity in `pool`, in the same order.
#[must_use]
pub fn rank_positions(text: &str, pool: &[&TrackedEntity]) -> Vec<usize> {
    let lower = text.to_lowercase();
    let offsets: Vec<Option<usize>> = pool.iter().map(|e| first_offset(&lower, e)).collect();

    offsets
        .iter()
        .enumerate()
        .map(|(idx, offset)| {
            let Some(own) = offset else {
                return 0;
            };
            let ahead = offsets
                .iter()
                .enumerate()
                .filter(|(other, o)| match o {
                    Some(o) => *o < *own || (*o == *own && *other < idx),
                    None => false,
                })
                .count();
            ahead + 1
        })
        .collect()
}

/// Rank of `target` among itself and `competitors`.
///
/// Returns `0` when none of the target's aliases occur in `text`.
#[must_use]
pub fn brand_position(text: &str, target: &TrackedEntity, competitors: &[TrackedEntity]) -> usize {
    let pool: Vec<&TrackedEntity> = std::iter::once(target).chain(competitors).collect();
    rank_positions(text, &pool)[0]
}
