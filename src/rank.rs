//! Ranking of document pairs by matrix value.

use std::cmp::Ordering;

use serde::Serialize;

use crate::matrix::SimilarityMatrix;

/// An unordered document pair with its similarity score; `left < right`
/// always.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RankedPair {
    pub left: usize,
    pub right: usize,
    pub score: f64,
}

/// Every unordered index pair `(i, j)` with `i < j`, in lexicographic
/// order. C(n, 2) entries.
pub fn pair_indices(n: usize) -> Vec<(usize, usize)> {
    let mut pairs = Vec::with_capacity(n * n.saturating_sub(1) / 2);
    for i in 0..n {
        for j in (i + 1)..n {
            pairs.push((i, j));
        }
    }
    pairs
}

/// All pairs of the matrix ordered by similarity, descending.
///
/// The matrix is an explicit argument rather than captured state, and the
/// sort is stable: pairs with equal scores keep their lexicographic
/// `(i, j)` insertion order. Scores are finite by construction, so the
/// `Ordering::Equal` fallback never reorders anything real.
pub fn rank_pairs(matrix: &SimilarityMatrix) -> Vec<RankedPair> {
    let mut pairs: Vec<RankedPair> = pair_indices(matrix.len())
        .into_iter()
        .map(|(i, j)| RankedPair {
            left: i,
            right: j,
            score: matrix.get(i, j),
        })
        .collect();

    pairs.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    pairs
}
