#![deny(unsafe_code)]

pub mod bucket;
pub mod corpus;
pub mod error;
pub mod matching;
pub mod options;
pub mod similarity;

pub use bucket::Bucket;
pub use corpus::{BucketMismatch, CorpusRecord};
pub use error::{ModelError, Result};
pub use matching::{MatchResult, NoMatchReason};
pub use options::{CapacityLimits, DEFAULT_MAX_ENTRIES_PER_BUCKET, DEFAULT_MAX_QUERIES};
pub use similarity::{ConfidenceLevel, ConfidenceThresholds, SimilarityReport, format_score};
