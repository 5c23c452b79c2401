use std::collections::BTreeMap;
use std::path::PathBuf;

use jabbr_model::{Bucket, BucketMismatch, ConfidenceLevel, ConfidenceThresholds, MatchResult};

/// Outcome of a `jabbr match` run.
#[derive(Debug)]
pub struct MatchRunResult {
    pub corpus: PathBuf,
    pub queries: PathBuf,
    /// `None` when the table went to stdout.
    pub output: Option<PathBuf>,
    /// Corpus entries per bucket, in bucket order.
    pub bucket_sizes: [usize; Bucket::COUNT],
    pub mismatches: Vec<BucketMismatch>,
    pub results: Vec<MatchResult>,
    /// Similarity per result when scoring was requested; `None` for no-match rows.
    pub scores: Option<Vec<Option<f32>>>,
    pub thresholds: ConfidenceThresholds,
}

impl MatchRunResult {
    pub fn matched(&self) -> usize {
        self.results.iter().filter(|result| result.is_match()).count()
    }

    /// Unmatched queries per reason label, sorted by label.
    pub fn unmatched_by_reason(&self) -> BTreeMap<&'static str, usize> {
        let mut counts = BTreeMap::new();
        for reason in self.results.iter().filter_map(|result| result.no_match) {
            *counts.entry(reason.label()).or_insert(0) += 1;
        }
        counts
    }

    pub fn confidence_bands(&self) -> Option<BTreeMap<ConfidenceLevel, usize>> {
        let scores = self.scores.as_ref()?;
        Some(band_counts(scores.iter().flatten().copied(), &self.thresholds))
    }
}

/// Outcome of a `jabbr score` run.
#[derive(Debug)]
pub struct ScoreRunResult {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub scores: Vec<f32>,
    /// Data rows passed through because they had fewer than two cells.
    pub skipped: usize,
    pub thresholds: ConfidenceThresholds,
}

impl ScoreRunResult {
    pub fn confidence_bands(&self) -> BTreeMap<ConfidenceLevel, usize> {
        band_counts(self.scores.iter().copied(), &self.thresholds)
    }
}

/// Counts scores per confidence band; every band is present.
pub fn band_counts(
    scores: impl Iterator<Item = f32>,
    thresholds: &ConfidenceThresholds,
) -> BTreeMap<ConfidenceLevel, usize> {
    let mut counts = BTreeMap::from([
        (ConfidenceLevel::High, 0),
        (ConfidenceLevel::Medium, 0),
        (ConfidenceLevel::Low, 0),
    ]);
    for score in scores {
        *counts.entry(thresholds.categorize(score)).or_insert(0) += 1;
    }
    counts
}
