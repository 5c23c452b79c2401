//! Corpus of canonical journal names partitioned into buckets.

use jabbr_model::{Bucket, BucketMismatch, CapacityLimits, CorpusRecord, ModelError};
use tracing::{debug, warn};

use crate::error::IndexError;
use crate::normalize::normalize_name;
use crate::synth::{AbbreviationVariants, synthesize};

/// A reference journal name with its bucket and synthesized variants.
///
/// Immutable once built; the variants always belong to `fullname`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalEntry {
    fullname: String,
    source_name: String,
    bucket: Bucket,
    variants: AbbreviationVariants,
}

impl CanonicalEntry {
    pub fn new(source_name: impl Into<String>, bucket: Bucket) -> Self {
        let source_name = source_name.into();
        let fullname = normalize_name(&source_name);
        let variants = synthesize(&fullname);
        Self {
            fullname,
            source_name,
            bucket,
            variants,
        }
    }

    /// Normalized name: space-separated alphanumeric tokens, case kept.
    pub fn fullname(&self) -> &str {
        &self.fullname
    }

    /// Name as it appeared in the corpus source.
    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    pub fn bucket(&self) -> Bucket {
        self.bucket
    }

    pub fn variants(&self) -> &AbbreviationVariants {
        &self.variants
    }

    /// Whether the name starts inside its bucket's letter range.
    pub fn in_nominal_range(&self) -> bool {
        self.fullname
            .chars()
            .next()
            .is_some_and(|ch| self.bucket.contains(ch))
    }
}

/// Canonical entries per bucket, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct CorpusIndex {
    buckets: [Vec<CanonicalEntry>; Bucket::COUNT],
    max_entries_per_bucket: Option<usize>,
    mismatches: Vec<BucketMismatch>,
}

impl CorpusIndex {
    /// Empty index bounded by `limits.max_entries_per_bucket`.
    pub fn new(limits: &CapacityLimits) -> Self {
        Self {
            max_entries_per_bucket: limits.max_entries_per_bucket,
            ..Self::default()
        }
    }

    /// Builds an index from corpus records, row by row.
    ///
    /// Every non-empty cell goes to the bucket of its column.
    pub fn from_records<'a, I>(records: I, limits: &CapacityLimits) -> Result<Self, IndexError>
    where
        I: IntoIterator<Item = &'a CorpusRecord>,
    {
        let mut index = Self::new(limits);
        for record in records {
            for (bucket, name) in record.cells() {
                index.insert(bucket, name)?;
            }
        }
        debug!(
            entries = index.len(),
            mismatches = index.mismatches.len(),
            "corpus index built"
        );
        Ok(index)
    }

    /// Appends a corpus name to `bucket`.
    ///
    /// Names whose first letter falls outside the bucket's range are still
    /// inserted and recorded in [`CorpusIndex::mismatches`].
    pub fn insert(
        &mut self,
        bucket: Bucket,
        source_name: impl Into<String>,
    ) -> Result<&CanonicalEntry, IndexError> {
        let entries = &mut self.buckets[bucket.index()];
        if let Some(limit) = self.max_entries_per_bucket
            && entries.len() >= limit
        {
            return Err(ModelError::BucketCapacity { bucket, limit }.into());
        }

        let entry = CanonicalEntry::new(source_name, bucket);
        let position = entries.len();
        if !entry.in_nominal_range() {
            warn!(
                bucket = %bucket,
                position,
                fullname = %entry.fullname(),
                "corpus name outside its bucket range"
            );
            self.mismatches.push(BucketMismatch {
                bucket,
                position,
                fullname: entry.fullname().to_string(),
            });
        }
        entries.push(entry);
        Ok(&entries[position])
    }

    /// Entries of `bucket` in insertion order.
    pub fn entries_in(&self, bucket: Bucket) -> &[CanonicalEntry] {
        &self.buckets[bucket.index()]
    }

    pub fn bucket_len(&self, bucket: Bucket) -> usize {
        self.buckets[bucket.index()].len()
    }

    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Vec::is_empty)
    }

    /// Entries whose name does not start inside their bucket's range.
    pub fn mismatches(&self) -> &[BucketMismatch] {
        &self.mismatches
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_variants_follow_fullname() {
        let entry = CanonicalEntry::new(" Journal of  Physics ", Bucket::EToK);
        assert_eq!(entry.fullname(), "Journal of Physics");
        assert_eq!(entry.source_name(), " Journal of  Physics ");
        assert_eq!(entry.variants().full, "Journal of Physics");
        assert_eq!(entry.variants().initials, "JOP");
        assert!(entry.in_nominal_range());
    }

    #[test]
    fn insertion_order_is_kept() {
        let mut index = CorpusIndex::new(&CapacityLimits::unbounded());
        index.insert(Bucket::PToZ, "Physics Letters").unwrap();
        index.insert(Bucket::PToZ, "Zoology Today").unwrap();
        index.insert(Bucket::PToZ, "Physics Reports").unwrap();

        let names: Vec<_> = index
            .entries_in(Bucket::PToZ)
            .iter()
            .map(CanonicalEntry::fullname)
            .collect();
        assert_eq!(names, vec!["Physics Letters", "Zoology Today", "Physics Reports"]);
        assert!(index.entries_in(Bucket::AToD).is_empty());
        assert_eq!(index.len(), 3);
    }

    #[test]
    fn overflow_is_an_error() {
        let limits = CapacityLimits {
            max_entries_per_bucket: Some(1),
            max_queries: None,
        };
        let mut index = CorpusIndex::new(&limits);
        index.insert(Bucket::AToD, "Acta One").unwrap();
        let error = index.insert(Bucket::AToD, "Acta Two").unwrap_err();
        assert!(matches!(
            error,
            IndexError::Capacity(ModelError::BucketCapacity {
                bucket: Bucket::AToD,
                limit: 1
            })
        ));
        // Other buckets keep their own budget.
        assert!(index.insert(Bucket::EToK, "Econometrica").is_ok());
        assert_eq!(index.bucket_len(Bucket::AToD), 1);
    }

    #[test]
    fn mismatched_names_are_flagged_not_rejected() {
        let records = vec![
            CorpusRecord::from_cells(["Zeitschrift fur Physik", "Ecology", "", ""]),
            CorpusRecord::from_cells(["", "", "", "***"]),
        ];
        let index = CorpusIndex::from_records(&records, &CapacityLimits::default()).unwrap();
        assert_eq!(index.len(), 3);
        let flagged: Vec<_> = index
            .mismatches()
            .iter()
            .map(|m| (m.bucket, m.fullname.as_str()))
            .collect();
        assert_eq!(
            flagged,
            vec![(Bucket::AToD, "Zeitschrift fur Physik"), (Bucket::PToZ, "")]
        );
    }
}
