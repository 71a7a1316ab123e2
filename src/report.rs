//! Report types and HTML rendering.
//!
//! The engine produces [`AnalysisReport`]; rendering it to HTML is a thin
//! presentation step kept out of the core. One section per ranked pair,
//! ratios rounded to two decimal places.

use serde::Serialize;

use crate::matrix::SimilarityMatrix;
use crate::rank::RankedPair;

/// Per-pair detail computed for the top-ranked pairs only.
#[derive(Debug, Clone, Serialize)]
pub struct ReportEntry {
    /// 1-based rank of the pair.
    pub rank: usize,
    pub left: usize,
    pub right: usize,
    pub similarity: f64,
    pub edit_distance: usize,
    pub containment: f64,
    /// Left text with common spans wrapped in `<mark>`, HTML-escaped.
    pub highlighted_left: String,
    /// Right text, same treatment.
    pub highlighted_right: String,
}

/// Everything one analysis run produces.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub matrix: SimilarityMatrix,
    /// All C(n, 2) pairs, ordered by similarity descending.
    pub ranking: Vec<RankedPair>,
    /// Detail entries for the top-k pairs.
    pub entries: Vec<ReportEntry>,
}

/// Render the report as a standalone HTML document.
///
/// `labels` names documents by index; indices without a label fall back
/// to `doc N`. Highlighted fragments are already escaped by the
/// highlighter, so they are embedded verbatim.
pub fn render_html(report: &AnalysisReport, labels: &[String]) -> String {
    let label = |i: usize| {
        labels
            .get(i)
            .cloned()
            .unwrap_or_else(|| format!("doc {i}"))
    };

    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html><head><meta charset=\"utf-8\">");
    html.push_str("<title>Most Similar Document Pairs</title></head><body>\n");
    html.push_str(&format!(
        "<h1>{} Most Similar Document Pairs</h1>\n",
        report.entries.len()
    ));

    for entry in &report.entries {
        html.push_str(&format!(
            "<h2>Pair {} — {} vs {} (similarity: {:.2}, edit distance: {}, containment: {:.2})</h2>\n",
            entry.rank,
            label(entry.left),
            label(entry.right),
            entry.similarity,
            entry.edit_distance,
            entry.containment,
        ));
        html.push_str(&format!("<h3>Text 1:</h3><p>{}</p>\n", entry.highlighted_left));
        html.push_str(&format!("<h3>Text 2:</h3><p>{}</p>\n", entry.highlighted_right));
    }

    html.push_str("</body></html>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{analyze, AnalysisConfig};

    fn sample_report() -> AnalysisReport {
        let cfg = AnalysisConfig {
            min_substring_len: 2,
            top_k: 2,
            use_parallel: false,
        };
        analyze(&["abcde", "abcxy", "xycde"], &cfg).expect("analysis succeeds")
    }

    #[test]
    fn html_has_one_section_per_entry() {
        let report = sample_report();
        let html = render_html(&report, &[]);
        assert_eq!(html.matches("<h2>").count(), report.entries.len());
        assert!(html.contains("<title>Most Similar Document Pairs</title>"));
    }

    #[test]
    fn ratios_are_rounded_to_two_decimals() {
        let report = sample_report();
        let html = render_html(&report, &[]);
        assert!(html.contains("similarity: 1.00"));
    }

    #[test]
    fn labels_are_used_when_present() {
        let report = sample_report();
        let labels = vec!["a.txt".to_string(), "b.txt".to_string(), "c.txt".to_string()];
        let html = render_html(&report, &labels);
        assert!(html.contains("a.txt vs b.txt"));
    }

    #[test]
    fn missing_labels_fall_back_to_indices() {
        let report = sample_report();
        let html = render_html(&report, &[]);
        assert!(html.contains("doc 0 vs doc 1"));
    }

    #[test]
    fn report_serializes_to_json() {
        let report = sample_report();
        let json = serde_json::to_value(&report).expect("report serializes");
        assert!(json.get("matrix").is_some());
        assert_eq!(json["entries"].as_array().map(Vec::len), Some(2));
    }
}
