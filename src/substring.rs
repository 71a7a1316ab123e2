//! Common-substring enumeration between two texts.
//!
//! The finder fills a longest-common-suffix DP table: cell `(i, j)` holds
//! the length of the longest run ending at `a[i-1]` and `b[j-1]`. Every
//! time a run reaches `min_len` the run seen so far is recorded, so a run
//! of length `min_len + 2` contributes three substrings of increasing
//! length. Duplicate substrings at different offsets collapse via set
//! semantics. O(|a|·|b|) time; only two table rows are kept live.

use fxhash::FxHashSet;

/// All distinct substrings of at least `min_len` characters that occur
/// contiguously in both `a` and `b`.
///
/// Matching is strict and character-for-character; there are no edit
/// operations here. `min_len == 0` yields an empty set — callers validate
/// the threshold through [`AnalysisConfig`](crate::AnalysisConfig).
pub fn common_substrings(a: &str, b: &str, min_len: usize) -> FxHashSet<String> {
    let mut out = FxHashSet::default();
    if min_len == 0 {
        return out;
    }

    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    if a_chars.len() < min_len || b_chars.len() < min_len {
        return out;
    }

    let mut prev = vec![0usize; b_chars.len() + 1];
    let mut cur = vec![0usize; b_chars.len() + 1];

    for i in 1..=a_chars.len() {
        for j in 1..=b_chars.len() {
            if a_chars[i - 1] == b_chars[j - 1] {
                let run = prev[j - 1] + 1;
                cur[j] = run;
                if run >= min_len {
                    out.insert(a_chars[i - run..i].iter().collect());
                }
            } else {
                cur[j] = 0;
            }
        }
        std::mem::swap(&mut prev, &mut cur);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(set: &FxHashSet<String>) -> Vec<&str> {
        let mut v: Vec<&str> = set.iter().map(String::as_str).collect();
        v.sort_unstable();
        v
    }

    #[test]
    fn shared_prefix_yields_extension_prefixes() {
        let set = common_substrings("abcde", "abcxy", 2);
        assert_eq!(sorted(&set), vec!["ab", "abc"]);
    }

    #[test]
    fn run_longer_than_threshold_yields_one_substring_per_extension() {
        // "abcdefg" shares the 7-char run; min_len 5 keeps 3 of its prefixes.
        let set = common_substrings("abcdefg", "xxabcdefgxx", 5);
        assert_eq!(sorted(&set), vec!["abcde", "abcdef", "abcdefg"]);
    }

    #[test]
    fn duplicate_occurrences_collapse() {
        let set = common_substrings("abab", "ab", 2);
        assert_eq!(sorted(&set), vec!["ab"]);
    }

    #[test]
    fn disjoint_texts_share_nothing() {
        assert!(common_substrings("aaaa", "bbbb", 2).is_empty());
    }

    #[test]
    fn empty_inputs_yield_empty_set() {
        assert!(common_substrings("", "", 1).is_empty());
        assert!(common_substrings("abc", "", 1).is_empty());
        assert!(common_substrings("", "abc", 1).is_empty());
    }

    #[test]
    fn zero_min_len_yields_empty_set() {
        assert!(common_substrings("abc", "abc", 0).is_empty());
    }

    #[test]
    fn multibyte_runs_match_on_characters() {
        let set = common_substrings("ღმერთსი", "ამერთსო", 3);
        assert!(set.contains("მერთს"));
    }

    #[test]
    fn symmetric_up_to_substring_origin() {
        // Substrings are cut from the first argument, but the set of
        // contents is the same either way.
        let ab = common_substrings("concatenate", "intercalate", 3);
        let ba = common_substrings("intercalate", "concatenate", 3);
        assert_eq!(ab, ba);
    }
}
