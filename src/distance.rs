//! Levenshtein edit distance.

/// Minimum number of single-character insertions, deletions, and
/// substitutions that transform `a` into `b`.
///
/// Total function: defined for all inputs including empty strings, and the
/// result never exceeds `max(len(a), len(b))` in characters. O(|a|·|b|)
/// time with two live table rows.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    if a_chars.is_empty() {
        return b_chars.len();
    }
    if b_chars.is_empty() {
        return a_chars.len();
    }

    // prev[j] = distance between a[..i-1] and b[..j].
    let mut prev: Vec<usize> = (0..=b_chars.len()).collect();
    let mut cur = vec![0usize; b_chars.len() + 1];

    for (i, &ca) in a_chars.iter().enumerate() {
        cur[0] = i + 1;
        for (j, &cb) in b_chars.iter().enumerate() {
            cur[j + 1] = if ca == cb {
                prev[j]
            } else {
                1 + prev[j].min(prev[j + 1]).min(cur[j])
            };
        }
        std::mem::swap(&mut prev, &mut cur);
    }

    prev[b_chars.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kitten_to_sitting_is_three() {
        assert_eq!(edit_distance("kitten", "sitting"), 3);
    }

    #[test]
    fn identity_is_zero() {
        assert_eq!(edit_distance("", ""), 0);
        assert_eq!(edit_distance("same text", "same text"), 0);
    }

    #[test]
    fn empty_side_costs_full_length() {
        assert_eq!(edit_distance("", "abcd"), 4);
        assert_eq!(edit_distance("abcd", ""), 4);
    }

    #[test]
    fn symmetric() {
        assert_eq!(
            edit_distance("flaw", "lawn"),
            edit_distance("lawn", "flaw")
        );
    }

    #[test]
    fn counts_characters_not_bytes() {
        // Each substitution is one multibyte character.
        assert_eq!(edit_distance("über", "ûber"), 1);
    }

    #[test]
    fn triangle_inequality_holds() {
        let texts = ["kitten", "sitting", "", "mitten", "knitting"];
        for a in texts {
            for b in texts {
                for c in texts {
                    assert!(
                        edit_distance(a, c) <= edit_distance(a, b) + edit_distance(b, c),
                        "triangle violated for ({a:?}, {b:?}, {c:?})"
                    );
                }
            }
        }
    }
}
