use std::fmt;

use serde::{Deserialize, Serialize};

use crate::bucket::Bucket;

/// Why a query produced no match. None of these stop a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NoMatchReason {
    /// The query cleaned to an empty string.
    EmptyQuery,
    /// The cleaned query starts with something other than an ASCII letter.
    NonAlphabeticLead(char),
    /// The selected bucket holds no entries.
    EmptyBucket(Bucket),
}

impl NoMatchReason {
    /// Short label used in summaries.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::EmptyQuery => "empty query",
            Self::NonAlphabeticLead(_) => "non-letter lead",
            Self::EmptyBucket(_) => "empty bucket",
        }
    }
}

impl fmt::Display for NoMatchReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyQuery => write!(f, "query is empty after cleaning"),
            Self::NonAlphabeticLead(ch) => {
                write!(f, "query does not start with a letter A-Z (found '{ch}')")
            }
            Self::EmptyBucket(bucket) => write!(f, "corpus bucket {bucket} is empty"),
        }
    }
}

/// Outcome of matching one query abbreviation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Query as read.
    pub query: String,
    /// Query after cleaning (letters, digits and `.` only).
    pub cleaned: String,
    /// Bucket searched, when one could be derived.
    pub bucket: Option<Bucket>,
    /// Normalized full name of the winning entry.
    pub matched_fullname: Option<String>,
    /// Corpus text of the winning entry as read.
    pub matched_source: Option<String>,
    /// Sum of the five edit distances; lower is better.
    pub aggregate_score: Option<usize>,
    pub no_match: Option<NoMatchReason>,
}

impl MatchResult {
    /// A result with no match for the given reason.
    pub fn unmatched(
        query: impl Into<String>,
        cleaned: impl Into<String>,
        bucket: Option<Bucket>,
        reason: NoMatchReason,
    ) -> Self {
        Self {
            query: query.into(),
            cleaned: cleaned.into(),
            bucket,
            matched_fullname: None,
            matched_source: None,
            aggregate_score: None,
            no_match: Some(reason),
        }
    }

    #[must_use]
    pub fn is_match(&self) -> bool {
        self.matched_fullname.is_some()
    }
}
