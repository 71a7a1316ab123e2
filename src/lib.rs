//! Pairwise document similarity engine.
//!
//! `dupfind` measures textual similarity across a corpus of documents and
//! reports the most similar pairs with their overlapping spans
//! highlighted. Three independent metrics are computed over raw character
//! sequences:
//!
//! - **Common-substring ratio** ([`similarity_ratio`]) — deduplicated
//!   common substrings of a minimum length, normalized by the longer
//!   text. This metric drives the all-pairs [`SimilarityMatrix`] and the
//!   ranking.
//! - **Edit distance** ([`edit_distance`]) — classic Levenshtein.
//! - **Broder containment** ([`containment`]) — the exact fraction of one
//!   text's substrings present in the other. Quadratic; see the module
//!   docs for the cost ceiling.
//!
//! ## Pure function guarantee
//!
//! The engine does no I/O and holds no state across runs: the same texts
//! and config produce the same report on any machine, with or without the
//! parallel pair loop. Reading documents ([`corpus::load_dir`]) and
//! writing the HTML report ([`report::render_html`]) are thin
//! collaborators around the core.

pub mod config;
pub mod containment;
pub mod corpus;
pub mod distance;
pub mod error;
pub mod highlight;
pub mod matrix;
pub mod rank;
pub mod report;
pub mod similarity;
pub mod substring;

pub use crate::config::AnalysisConfig;
pub use crate::containment::containment;
pub use crate::corpus::Document;
pub use crate::distance::edit_distance;
pub use crate::error::SimilarityError;
pub use crate::highlight::highlight_pair;
pub use crate::matrix::SimilarityMatrix;
pub use crate::rank::{pair_indices, rank_pairs, RankedPair};
pub use crate::report::{render_html, AnalysisReport, ReportEntry};
pub use crate::similarity::similarity_ratio;
pub use crate::substring::common_substrings;

use std::time::Instant;

use rayon::prelude::*;

/// Run the full analysis over an ordered sequence of document texts.
///
/// Builds the similarity matrix, ranks every unordered pair descending,
/// and computes edit distance, containment, and highlights for the top
/// `cfg.top_k` pairs. Fails fast on an invalid config or a corpus of
/// fewer than two documents.
pub fn analyze<S: AsRef<str> + Sync>(
    texts: &[S],
    cfg: &AnalysisConfig,
) -> Result<AnalysisReport, SimilarityError> {
    cfg.validate()?;
    if texts.len() < 2 {
        return Err(SimilarityError::EmptyCorpus(texts.len()));
    }

    let started = Instant::now();
    let matrix = SimilarityMatrix::build(texts, cfg);
    let ranking = rank_pairs(&matrix);

    let top: Vec<(usize, RankedPair)> = ranking
        .iter()
        .copied()
        .take(cfg.top_k)
        .enumerate()
        .collect();

    let make_entry = |&(k, pair): &(usize, RankedPair)| {
        let a = texts[pair.left].as_ref();
        let b = texts[pair.right].as_ref();
        let (highlighted_left, highlighted_right) =
            highlight_pair(a, b, cfg.min_substring_len);
        ReportEntry {
            rank: k + 1,
            left: pair.left,
            right: pair.right,
            similarity: pair.score,
            edit_distance: edit_distance(a, b),
            containment: containment(a, b),
            highlighted_left,
            highlighted_right,
        }
    };

    // Per-pair detail is independent too, so it shares the parallel flag.
    let entries: Vec<ReportEntry> = if cfg.use_parallel {
        top.par_iter().map(make_entry).collect()
    } else {
        top.iter().map(make_entry).collect()
    };

    tracing::info!(
        documents = texts.len(),
        pairs = ranking.len(),
        detailed = entries.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "analysis complete"
    );

    Ok(AnalysisReport {
        matrix,
        ranking,
        entries,
    })
}
