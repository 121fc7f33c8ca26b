use crate::aliases::TrackedEntity;
use crate::types::MentionCounts;

/// Share of all recorded mentions that belong to `target`, as a percentage.
///
/// A count belongs to the target when its key matches the target's name or
/// any of its aliases, ignoring case. Returns `0.0` when nothing was mentioned.
#[must_use]
pub fn brand_visibility(mentions: &MentionCounts, target: &TrackedEntity) -> f64 {
    let name = target.name().to_lowercase();
    let mut total = 0_usize;
    let mut own = 0_usize;

    for (key, count) in mentions {
        total += count;
        if key.to_lowercase() == name || target.aliases().matches_name(key) {
            own += count;
        }
    }

    if total == 0 {
        return 0.0;
    }

    #[allow(clippy::cast_precision_loss)]
    let share = own as f64 / total as f64;
    share * 100.0
}
