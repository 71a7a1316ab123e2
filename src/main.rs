//! Batch duplicate-content detector.
//!
//! Reads every text file in a dataset directory, scores all document
//! pairs, and writes an HTML report of the most similar pairs with their
//! common spans highlighted.
//!
//! Usage: `dupfind [DATASET_DIR] [OUTPUT_HTML]` (defaults: `dataset`,
//! `similar_texts.html`). Log verbosity follows `RUST_LOG`.

use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::Context;

use dupfind::{analyze, corpus, render_html, AnalysisConfig};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env::var("RUST_LOG").unwrap_or_else(|_| "info".into()))
        .with_target(false)
        .init();

    let mut args = env::args().skip(1);
    let dataset = PathBuf::from(args.next().unwrap_or_else(|| "dataset".into()));
    let output = PathBuf::from(args.next().unwrap_or_else(|| "similar_texts.html".into()));

    let documents = corpus::load_dir(&dataset)
        .with_context(|| format!("loading corpus from {}", dataset.display()))?;
    tracing::info!(
        documents = documents.len(),
        dir = %dataset.display(),
        "corpus loaded"
    );

    let cfg = AnalysisConfig::default();
    let texts: Vec<&str> = documents.iter().map(|d| d.text.as_str()).collect();
    let report = analyze(&texts, &cfg)?;

    let labels: Vec<String> = documents.iter().map(|d| d.label()).collect();
    let html = render_html(&report, &labels);
    fs::write(&output, html)
        .with_context(|| format!("writing report to {}", output.display()))?;
    tracing::info!(path = %output.display(), "report written");

    Ok(())
}
