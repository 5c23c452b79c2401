//! First-letter partitions of the reference corpus.
//!
//! The corpus file is pre-split into four columns by leading letter; the
//! column position is the only source of an entry's bucket. Queries pick a
//! bucket from their own first character using the same ranges.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// One of the four corpus partitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Bucket {
    /// Names beginning A-D (corpus column 0).
    AToD,
    /// Names beginning E-K (corpus column 1).
    EToK,
    /// Names beginning L-O (corpus column 2).
    LToO,
    /// Names beginning P-Z (corpus column 3).
    PToZ,
}

impl Bucket {
    /// Number of buckets (and corpus columns).
    pub const COUNT: usize = 4;

    /// All buckets in column order.
    pub const ALL: [Bucket; Self::COUNT] = [Self::AToD, Self::EToK, Self::LToO, Self::PToZ];

    /// Column index of this bucket in the corpus source.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::AToD => 0,
            Self::EToK => 1,
            Self::LToO => 2,
            Self::PToZ => 3,
        }
    }

    /// Bucket for a corpus column index.
    pub fn from_index(index: usize) -> Result<Self> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(ModelError::InvalidBucket(index))
    }

    /// Bucket whose letter range contains `ch` (ASCII, case-insensitive).
    ///
    /// Returns `None` for digits, punctuation and anything outside A-Z.
    #[must_use]
    pub fn for_leading(ch: char) -> Option<Self> {
        match ch.to_ascii_uppercase() {
            'A'..='D' => Some(Self::AToD),
            'E'..='K' => Some(Self::EToK),
            'L'..='O' => Some(Self::LToO),
            'P'..='Z' => Some(Self::PToZ),
            _ => None,
        }
    }

    /// Inclusive letter range covered by this bucket.
    #[must_use]
    pub fn letter_range(self) -> (char, char) {
        match self {
            Self::AToD => ('A', 'D'),
            Self::EToK => ('E', 'K'),
            Self::LToO => ('L', 'O'),
            Self::PToZ => ('P', 'Z'),
        }
    }

    /// Whether `ch` falls inside this bucket's nominal range.
    #[must_use]
    pub fn contains(self, ch: char) -> bool {
        Self::for_leading(ch) == Some(self)
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (start, end) = self.letter_range();
        write!(f, "{start}-{end}")
    }
}
