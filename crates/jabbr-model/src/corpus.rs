use serde::{Deserialize, Serialize};

use crate::bucket::Bucket;

/// One row of the four-column corpus source.
///
/// Quoting and escaping are already resolved; an empty string is an empty
/// cell. Each non-empty cell belongs to the bucket of its column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusRecord {
    pub names: [String; Bucket::COUNT],
}

impl CorpusRecord {
    /// Builds a record from up to four cells; missing cells are empty.
    pub fn from_cells<I, S>(cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut record = Self::default();
        for (slot, cell) in record.names.iter_mut().zip(cells) {
            *slot = cell.into();
        }
        record
    }

    /// Non-empty cells paired with their bucket, in column order.
    pub fn cells(&self) -> impl Iterator<Item = (Bucket, &str)> {
        Bucket::ALL
            .into_iter()
            .zip(self.names.iter())
            .filter(|(_, name)| !name.is_empty())
            .map(|(bucket, name)| (bucket, name.as_str()))
    }
}

/// An entry whose name does not start inside its bucket's letter range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketMismatch {
    pub bucket: Bucket,
    /// Insertion position inside the bucket.
    pub position: usize,
    pub fullname: String,
}
