//! Common-substring similarity ratio.

use crate::substring::common_substrings;

/// Normalized similarity between two texts from their deduplicated
/// common-substring set:
/// `Σ len(s) / max(len(a), len(b))`, clamped into `[0, 1]`.
///
/// Because the set is deduplicated, repeated occurrences of the same
/// substring count once, so the raw sum is a lower bound on total
/// character overlap — except that extension prefixes of a long run each
/// count, which can push the raw sum past the denominator. Clamping keeps
/// the ratio in range and makes `similarity_ratio(a, a, k) == 1.0` for
/// any `k <= len(a)`.
///
/// Both texts empty is defined as 0.0.
pub fn similarity_ratio(a: &str, b: &str, min_len: usize) -> f64 {
    let denom = a.chars().count().max(b.chars().count());
    if denom == 0 {
        return 0.0;
    }
    let total: usize = common_substrings(a, b, min_len)
        .iter()
        .map(|s| s.chars().count())
        .sum();
    (total as f64 / denom as f64).min(1.0)
}
