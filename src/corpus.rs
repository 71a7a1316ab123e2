//! Corpus loading.
//!
//! The engine itself never touches the filesystem; this module is the I/O
//! collaborator that turns a directory of text files into an ordered
//! sequence of documents with stable indices.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::SimilarityError;

/// One corpus document: raw text plus its stable position index and, when
/// loaded from disk, the source path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub index: usize,
    pub path: Option<PathBuf>,
    pub text: String,
}

impl Document {
    /// Build a document from in-memory text.
    pub fn from_text(index: usize, text: impl Into<String>) -> Self {
        Self {
            index,
            path: None,
            text: text.into(),
        }
    }

    /// Human-readable name for reports: the file name when the document
    /// came from disk, otherwise its index.
    pub fn label(&self) -> String {
        self.path
            .as_deref()
            .and_then(Path::file_name)
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| format!("doc {}", self.index))
    }
}

/// Read every regular file in `dir` into a document.
///
/// Entries are sorted by path before indexing so document indices are
/// stable across runs and platforms. Subdirectories are skipped.
pub fn load_dir(dir: &Path) -> Result<Vec<Document>, SimilarityError> {
    let entries = fs::read_dir(dir).map_err(|source| SimilarityError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut paths: Vec<PathBuf> = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| SimilarityError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if path.is_file() {
            paths.push(path);
        }
    }
    paths.sort();

    let mut documents = Vec::with_capacity(paths.len());
    for (index, path) in paths.into_iter().enumerate() {
        let text = fs::read_to_string(&path).map_err(|source| SimilarityError::Io {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(index, path = %path.display(), bytes = text.len(), "loaded document");
        documents.push(Document {
            index,
            path: Some(path),
            text,
        });
    }

    Ok(documents)
}
