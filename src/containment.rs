//! Exact Broder containment.
//!
//! Containment here is computed over the full distinct-substring sets of
//! both texts, without shingling or MinHash sketches. That makes the
//! measure exact but quadratic: enumerating the substrings of a text of
//! `n` characters costs O(n²) time and set space. Acceptable for short to
//! medium documents; this is a documented scalability ceiling, not
//! something the engine works around.

use fxhash::FxHashSet;

/// Texts longer than this (in characters) get a warning before the
/// quadratic substring enumeration.
const QUADRATIC_WARN_CHARS: usize = 4096;

/// Fraction of `a`'s distinct substrings (every contiguous span, not just
/// common ones) that also occur somewhere in `b`.
///
/// Returns a ratio in `[0, 1]`. An empty `a` has no substrings and is
/// defined as 0.0. Cost is O(|a|² + |b|²) in time and set space — see the
/// module docs before feeding large documents through this.
pub fn containment(a: &str, b: &str) -> f64 {
    let a_len = a.chars().count();
    let b_len = b.chars().count();
    if a_len.max(b_len) > QUADRATIC_WARN_CHARS {
        tracing::warn!(
            a_chars = a_len,
            b_chars = b_len,
            "containment enumerates all substrings; cost grows quadratically with text length"
        );
    }

    let subs_a = distinct_substrings(a);
    if subs_a.is_empty() {
        return 0.0;
    }
    let subs_b = distinct_substrings(b);

    let contained = subs_a.iter().filter(|s| subs_b.contains(*s)).count();
    contained as f64 / subs_a.len() as f64
}

/// Every distinct contiguous character span of `text`, deduplicated.
fn distinct_substrings(text: &str) -> FxHashSet<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut out = FxHashSet::default();
    for i in 0..chars.len() {
        let mut s = String::new();
        for &c in &chars[i..] {
            s.push(c);
            out.insert(s.clone());
        }
    }
    out
}
