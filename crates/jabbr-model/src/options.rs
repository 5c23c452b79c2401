//! Run-wide options.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Default maximum number of corpus entries per bucket.
pub const DEFAULT_MAX_ENTRIES_PER_BUCKET: usize = 10_000;

/// Default maximum number of query rows.
pub const DEFAULT_MAX_QUERIES: usize = 512;

/// Capacity bounds for the corpus index and the query list.
///
/// `None` means unbounded. Exceeding a bound is an error, never a silent
/// truncation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapacityLimits {
    pub max_entries_per_bucket: Option<usize>,
    pub max_queries: Option<usize>,
}

impl Default for CapacityLimits {
    fn default() -> Self {
        Self {
            max_entries_per_bucket: Some(DEFAULT_MAX_ENTRIES_PER_BUCKET),
            max_queries: Some(DEFAULT_MAX_QUERIES),
        }
    }
}

impl CapacityLimits {
    /// No bounds at all; containers grow as needed.
    #[must_use]
    pub fn unbounded() -> Self {
        Self {
            max_entries_per_bucket: None,
            max_queries: None,
        }
    }

    /// Fails when `count` queries would exceed the configured bound.
    pub fn check_queries(&self, count: usize) -> Result<()> {
        match self.max_queries {
            Some(limit) if count > limit => Err(ModelError::QueryCapacity { limit }),
            _ => Ok(()),
        }
    }
}
