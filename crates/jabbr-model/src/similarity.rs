//! Similarity report and confidence bands.

use serde::{Deserialize, Serialize};

/// Component breakdown of a mixed similarity score, all in percent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityReport {
    /// Left input, alphanumeric only, uppercased.
    pub left_normalized: String,
    /// Right input, alphanumeric only, uppercased.
    pub right_normalized: String,
    pub overlap_ratio: f32,
    pub edit_similarity: f32,
    pub lcs_similarity: f32,
    pub second_lcs_similarity: f32,
    /// Blended score clamped to `[0, 100]`.
    pub mixed_score: f32,
}

impl SimilarityReport {
    /// Mixed score as written to tables: two decimals.
    #[must_use]
    pub fn formatted(&self) -> String {
        format_score(self.mixed_score)
    }
}

/// Formats a percentage with two decimals.
#[must_use]
pub fn format_score(score: f32) -> String {
    format!("{score:.2}")
}

/// Review bands for a mixed similarity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ConfidenceLevel {
    /// Below the medium threshold; check by hand.
    Low,
    /// Plausible; worth a glance.
    Medium,
    /// Very likely correct.
    High,
}

impl ConfidenceLevel {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

/// Percent thresholds separating the confidence bands.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceThresholds {
    /// Minimum score for [`ConfidenceLevel::High`] (default: 80).
    pub high: f32,
    /// Minimum score for [`ConfidenceLevel::Medium`] (default: 60).
    pub medium: f32,
}

impl Default for ConfidenceThresholds {
    fn default() -> Self {
        Self {
            high: 80.0,
            medium: 60.0,
        }
    }
}

impl ConfidenceThresholds {
    #[must_use]
    pub fn categorize(&self, score: f32) -> ConfidenceLevel {
        if score >= self.high {
            ConfidenceLevel::High
        } else if score >= self.medium {
            ConfidenceLevel::Medium
        } else {
            ConfidenceLevel::Low
        }
    }
}
