//! The all-pairs similarity matrix.

use rayon::prelude::*;
use serde::Serialize;

use crate::config::AnalysisConfig;
use crate::rank::pair_indices;
use crate::similarity::similarity_ratio;

/// Symmetric n×n matrix of pairwise similarity ratios with a zero
/// diagonal. Built once over a corpus and immutable afterward.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarityMatrix {
    n: usize,
    /// Row-major n×n storage.
    values: Vec<f64>,
}

impl SimilarityMatrix {
    /// Score every unordered document pair and mirror the value into both
    /// cells. No pair is skipped and there is no similarity floor; each
    /// cell is an independent pure function of two documents, so the pair
    /// loop runs on the rayon pool when `cfg.use_parallel` is set, with
    /// identical output to the sequential path.
    pub fn build<S: AsRef<str> + Sync>(texts: &[S], cfg: &AnalysisConfig) -> Self {
        let n = texts.len();
        let pairs = pair_indices(n);

        let score = |&(i, j): &(usize, usize)| {
            similarity_ratio(texts[i].as_ref(), texts[j].as_ref(), cfg.min_substring_len)
        };

        let scored: Vec<f64> = if cfg.use_parallel {
            pairs.par_iter().map(score).collect()
        } else {
            pairs.iter().map(score).collect()
        };

        let mut values = vec![0.0; n * n];
        for (&(i, j), s) in pairs.iter().zip(scored) {
            values[i * n + j] = s;
            values[j * n + i] = s;
        }

        Self { n, values }
    }

    /// Number of documents the matrix covers.
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Similarity of documents `i` and `j`. Panics when an index is out
    /// of bounds, like slice indexing.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        assert!(i < self.n && j < self.n, "matrix index out of bounds");
        self.values[i * self.n + j]
    }
}
