//! Configuration for a similarity analysis run.
//!
//! [`AnalysisConfig`] is cheap to clone and serde-friendly so it can be
//! loaded from external configuration or embedded in higher-level configs.

use serde::{Deserialize, Serialize};

use crate::error::SimilarityError;

/// Tuning knobs for one analysis run over a corpus.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnalysisConfig {
    /// Minimum length, in characters, for a run to count as a common
    /// substring. Must be >= 1.
    #[serde(default = "AnalysisConfig::default_min_substring_len")]
    pub min_substring_len: usize,
    /// Number of top-ranked pairs that get the expensive per-pair metrics
    /// (edit distance, containment, highlighting).
    #[serde(default = "AnalysisConfig::default_top_k")]
    pub top_k: usize,
    /// Evaluate document pairs on the rayon thread pool. Output is
    /// identical to the sequential path; each pair is an independent pure
    /// computation.
    #[serde(default = "AnalysisConfig::default_use_parallel")]
    pub use_parallel: bool,
}

impl AnalysisConfig {
    pub(crate) fn default_min_substring_len() -> usize {
        5
    }

    pub(crate) fn default_top_k() -> usize {
        10
    }

    pub(crate) fn default_use_parallel() -> bool {
        true
    }

    /// Validate the configuration before a run.
    pub fn validate(&self) -> Result<(), SimilarityError> {
        if self.min_substring_len == 0 {
            return Err(SimilarityError::InvalidConfig(
                "min_substring_len must be greater than zero".into(),
            ));
        }
        if self.top_k == 0 {
            return Err(SimilarityError::InvalidConfig(
                "top_k must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            min_substring_len: Self::default_min_substring_len(),
            top_k: Self::default_top_k(),
            use_parallel: Self::default_use_parallel(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let cfg = AnalysisConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.min_substring_len, 5);
        assert_eq!(cfg.top_k, 10);
        assert!(cfg.use_parallel);
    }

    #[test]
    fn zero_min_substring_len_rejected() {
        let cfg = AnalysisConfig {
            min_substring_len: 0,
            ..AnalysisConfig::default()
        };
        let err = cfg.validate().expect_err("config should be invalid");
        match err {
            SimilarityError::InvalidConfig(msg) => assert!(msg.contains("min_substring_len")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn zero_top_k_rejected() {
        let cfg = AnalysisConfig {
            top_k: 0,
            ..AnalysisConfig::default()
        };
        let err = cfg.validate().expect_err("config should be invalid");
        match err {
            SimilarityError::InvalidConfig(msg) => assert!(msg.contains("top_k")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let cfg: AnalysisConfig = serde_json::from_str("{}").expect("empty object deserializes");
        assert_eq!(cfg, AnalysisConfig::default());
    }
}
