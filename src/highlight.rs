//! Marking common spans in a document pair.
//!
//! For each common substring the renderer takes its **first** occurrence
//! in each text independently. All span offsets are computed up front over
//! the raw text, overlapping or touching spans are merged, and rendering
//! walks the text segment by segment — later spans can never shift or
//! corrupt markup that was already emitted. Occurrences past the first
//! are left unmarked, matching the original tool's behavior.

use fxhash::FxHashSet;

use crate::substring::common_substrings;

/// Both texts of a pair with their common spans wrapped in
/// `<mark>…</mark>` and everything HTML-escaped.
pub fn highlight_pair(a: &str, b: &str, min_len: usize) -> (String, String) {
    let common = common_substrings(a, b, min_len);
    let spans_a = first_occurrence_spans(a, &common);
    let spans_b = first_occurrence_spans(b, &common);
    (render_marked(a, &spans_a), render_marked(b, &spans_b))
}

/// Byte span of the first occurrence of every needle in `text`, merged
/// into sorted, non-overlapping ranges.
fn first_occurrence_spans(text: &str, needles: &FxHashSet<String>) -> Vec<(usize, usize)> {
    let mut spans: Vec<(usize, usize)> = needles
        .iter()
        .filter_map(|s| text.find(s.as_str()).map(|start| (start, start + s.len())))
        .collect();
    merge_spans(&mut spans);
    spans
}

/// Sort spans and collapse any that overlap or touch.
fn merge_spans(spans: &mut Vec<(usize, usize)>) {
    spans.sort_unstable();
    let mut merged: Vec<(usize, usize)> = Vec::with_capacity(spans.len());
    for &(start, end) in spans.iter() {
        match merged.last_mut() {
            Some((_, last_end)) if start <= *last_end => *last_end = (*last_end).max(end),
            _ => merged.push((start, end)),
        }
    }
    *spans = merged;
}

/// Render `text` with the given sorted non-overlapping byte spans wrapped
/// in `<mark>` tags. Escaping happens per segment, after spans are fixed,
/// so offsets computed over the raw text stay valid.
fn render_marked(text: &str, spans: &[(usize, usize)]) -> String {
    let mut out = String::with_capacity(text.len() + spans.len() * "<mark></mark>".len());
    let mut cursor = 0;
    for &(start, end) in spans {
        out.push_str(&escape_html(&text[cursor..start]));
        out.push_str("<mark>");
        out.push_str(&escape_html(&text[start..end]));
        out.push_str("</mark>");
        cursor = end;
    }
    out.push_str(&escape_html(&text[cursor..]));
    out
}

/// Minimal HTML escaping for text nodes.
fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}
