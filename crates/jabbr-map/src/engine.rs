//! Matching engine: picks the best corpus entry for a query abbreviation.

use jabbr_model::{Bucket, MatchResult, NoMatchReason};
use tracing::{debug, trace};

use crate::distance::edit_distance;
use crate::error::MatchError;
use crate::index::{CanonicalEntry, CorpusIndex};
use crate::normalize::clean_abbreviation;

/// Multiplier for a variant whose first character differs from the query's.
///
/// Stays at 1: lead mismatches are not penalized.
pub const LEAD_MISMATCH_WEIGHT: usize = 1;

/// A query row, as read and after cleaning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputAbbreviation {
    pub raw: String,
    pub cleaned: String,
}

impl InputAbbreviation {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let cleaned = clean_abbreviation(&raw);
        Self { raw, cleaned }
    }

    /// Bucket selected by the first cleaned character.
    pub fn bucket(&self) -> Result<Bucket, NoMatchReason> {
        let first = self.cleaned.chars().next().ok_or(NoMatchReason::EmptyQuery)?;
        Bucket::for_leading(first).ok_or(NoMatchReason::NonAlphabeticLead(first))
    }
}

/// Resolves query abbreviations against an immutable corpus index.
#[derive(Debug, Clone)]
pub struct JournalMatcher {
    index: CorpusIndex,
}

impl JournalMatcher {
    pub fn new(index: CorpusIndex) -> Self {
        Self { index }
    }

    pub fn index(&self) -> &CorpusIndex {
        &self.index
    }

    /// Finds the entry with the lowest aggregate edit distance.
    ///
    /// Only the bucket of the query's first letter is searched. On equal
    /// scores the earliest inserted entry wins. Queries that clean to
    /// nothing or start with a non-letter come back unmatched; only a
    /// failed distance computation is an error.
    pub fn match_query(&self, raw: &str) -> Result<MatchResult, MatchError> {
        let input = InputAbbreviation::new(raw);
        let bucket = match input.bucket() {
            Ok(bucket) => bucket,
            Err(reason) => {
                debug!(query = %input.raw, %reason, "query not matched");
                return Ok(MatchResult::unmatched(input.raw, input.cleaned, None, reason));
            }
        };

        let mut best: Option<(&CanonicalEntry, usize)> = None;
        for entry in self.index.entries_in(bucket) {
            let score = aggregate_score(&input.cleaned, entry)?;
            trace!(
                query = %input.cleaned,
                candidate = %entry.fullname(),
                score,
                "scored candidate"
            );
            if best.is_none_or(|(_, min)| score < min) {
                best = Some((entry, score));
            }
        }

        let Some((entry, score)) = best else {
            let reason = NoMatchReason::EmptyBucket(bucket);
            debug!(query = %input.raw, %reason, "query not matched");
            return Ok(MatchResult::unmatched(
                input.raw,
                input.cleaned,
                Some(bucket),
                reason,
            ));
        };

        debug!(
            query = %input.raw,
            matched = %entry.fullname(),
            score,
            "query matched"
        );
        Ok(MatchResult {
            query: input.raw,
            cleaned: input.cleaned,
            bucket: Some(bucket),
            matched_fullname: Some(entry.fullname().to_string()),
            matched_source: Some(entry.source_name().to_string()),
            aggregate_score: Some(score),
            no_match: None,
        })
    }
}

/// Sum of edit distances from a cleaned query to all five variants of `entry`.
pub fn aggregate_score(cleaned_query: &str, entry: &CanonicalEntry) -> Result<usize, MatchError> {
    let lead = cleaned_query.chars().next();
    let mut sum = 0usize;
    for (_, variant) in entry.variants().iter() {
        let mut distance = edit_distance(cleaned_query, variant)?;
        if let (Some(query_lead), Some(variant_lead)) = (lead, variant.chars().next())
            && !query_lead.eq_ignore_ascii_case(&variant_lead)
        {
            distance *= LEAD_MISMATCH_WEIGHT;
        }
        sum += distance;
    }
    Ok(sum)
}

#[cfg(test)]
mod tests {
    use jabbr_model::CapacityLimits;

    use super::*;

    fn matcher(names: &[(Bucket, &str)]) -> JournalMatcher {
        let mut index = CorpusIndex::new(&CapacityLimits::unbounded());
        for (bucket, name) in names {
            index.insert(*bucket, *name).expect("insert");
        }
        JournalMatcher::new(index)
    }

    #[test]
    fn input_bucket_selection() {
        assert_eq!(InputAbbreviation::new("Ann. Phys.").bucket(), Ok(Bucket::AToD));
        assert_eq!(
            InputAbbreviation::new(" , ").bucket(),
            Err(NoMatchReason::EmptyQuery)
        );
        assert_eq!(
            InputAbbreviation::new(".J Sci").bucket(),
            Err(NoMatchReason::NonAlphabeticLead('.'))
        );
    }

    #[test]
    fn aggregate_score_sums_all_variants() {
        let entry = CanonicalEntry::new("Journal Of Computer Science", Bucket::EToK);
        // Distances to JOCS, J. Of Comp. Sci., full, trigram, lead word.
        let expected = ["JOCS", "J. Of Comp. Sci.", "Journal Of Computer Science", "Jou Of Com Sci", "Journal"]
            .iter()
            .map(|variant| edit_distance("JOCS", variant).unwrap())
            .sum::<usize>();
        assert_eq!(aggregate_score("JOCS", &entry).unwrap(), expected);
    }

    #[test]
    fn empty_bucket_is_reported() {
        let engine = matcher(&[(Bucket::AToD, "Acta Materialia")]);
        let result = engine.match_query("Phys. Rev.").unwrap();
        assert!(!result.is_match());
        assert_eq!(result.bucket, Some(Bucket::PToZ));
        assert_eq!(result.no_match, Some(NoMatchReason::EmptyBucket(Bucket::PToZ)));
    }

    #[test]
    fn picks_closest_candidate() {
        let engine = matcher(&[
            (Bucket::PToZ, "Physical Review Letters"),
            (Bucket::PToZ, "Psychology Today"),
            (Bucket::PToZ, "Physics Reports"),
        ]);
        let result = engine.match_query("Phys. Rep.").unwrap();
        assert_eq!(result.matched_fullname.as_deref(), Some("Physics Reports"));
        assert_eq!(result.cleaned, "Phys.Rep.");
        assert!(result.aggregate_score.is_some());
    }
}
