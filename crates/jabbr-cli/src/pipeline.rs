//! Matching pipeline with explicit stages.
//!
//! 1. **Corpus**: read the four-column corpus and build the bucketed index
//! 2. **Queries**: read the query list
//! 3. **Match**: resolve every query against the index
//! 4. **Score**: optionally grade each match with the mixed similarity
//! 5. **Output**: assemble and write the result table
//!
//! Each stage takes the output of the previous one and returns typed results.

use std::io;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use jabbr_ingest::{QueryList, read_corpus, read_query_list, write_rows, write_rows_to};
use jabbr_map::{CorpusIndex, JournalMatcher, mixed_similarity};
use jabbr_model::{CapacityLimits, MatchResult, format_score};
use tracing::{info, info_span, warn};

/// Header of the matched-name column.
pub const MATCHED_HEADER: &str = "matched_fullname";

/// Header of the optional similarity column.
pub const SIMILARITY_HEADER: &str = jabbr_ingest::SIMILARITY_HEADER;

// ============================================================================
// Stage 1: Corpus
// ============================================================================

/// Reads the corpus and builds a matcher over it.
pub fn load_corpus(path: &Path, limits: &CapacityLimits) -> Result<JournalMatcher> {
    let span = info_span!("corpus", path = %path.display());
    let _guard = span.enter();
    let start = Instant::now();

    let records = read_corpus(path)?;
    let index = CorpusIndex::from_records(&records, limits)
        .with_context(|| format!("index corpus: {}", path.display()))?;
    info!(
        rows = records.len(),
        entries = index.len(),
        mismatches = index.mismatches().len(),
        duration_ms = start.elapsed().as_millis(),
        "corpus indexed"
    );
    Ok(JournalMatcher::new(index))
}

// ============================================================================
// Stage 2: Queries
// ============================================================================

pub fn load_queries(path: &Path, limits: &CapacityLimits) -> Result<QueryList> {
    let span = info_span!("queries", path = %path.display());
    let _guard = span.enter();
    let list = read_query_list(path, limits)?;
    info!(queries = list.queries.len(), "queries read");
    Ok(list)
}

// ============================================================================
// Stage 3: Match
// ============================================================================

/// Matches queries in input order, advancing `progress` once per query.
pub fn match_queries(
    matcher: &JournalMatcher,
    queries: &[String],
    progress: &ProgressBar,
) -> Result<Vec<MatchResult>> {
    let span = info_span!("match", queries = queries.len());
    let _guard = span.enter();
    let start = Instant::now();

    let mut results = Vec::with_capacity(queries.len());
    for (row, query) in queries.iter().enumerate() {
        let result = matcher
            .match_query(query)
            .with_context(|| format!("match query row {}: {query:?}", row + 2))?;
        if let Some(reason) = result.no_match {
            warn!(row = row + 2, query = %query, %reason, "no match");
        }
        results.push(result);
        progress.inc(1);
    }
    progress.finish_and_clear();

    let matched = results.iter().filter(|result| result.is_match()).count();
    info!(
        matched,
        unmatched = results.len() - matched,
        duration_ms = start.elapsed().as_millis(),
        "queries matched"
    );
    Ok(results)
}

/// Progress bar over `len` queries; hidden when disabled.
pub fn query_progress(len: usize, enabled: bool) -> ProgressBar {
    if !enabled {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new(len as u64);
    if let Ok(style) = ProgressStyle::with_template(
        "[{elapsed_precise}] {bar:30.cyan/blue} {pos}/{len} Matching queries...",
    ) {
        bar.set_style(style);
    }
    bar
}

// ============================================================================
// Stage 4: Score
// ============================================================================

/// Name written for a result: normalized by default, corpus text on request.
pub fn output_name(result: &MatchResult, corpus_names: bool) -> Option<&str> {
    if corpus_names {
        result.matched_source.as_deref()
    } else {
        result.matched_fullname.as_deref()
    }
}

/// Mixed similarity between each query and its written name.
pub fn score_matches(results: &[MatchResult], corpus_names: bool) -> Result<Vec<Option<f32>>> {
    let span = info_span!("score", rows = results.len());
    let _guard = span.enter();
    let scores = results
        .iter()
        .map(|result| {
            output_name(result, corpus_names)
                .map(|name| mixed_similarity(&result.query, name))
                .transpose()
                .with_context(|| format!("score query {:?}", result.query))
        })
        .collect::<Result<Vec<_>>>()?;
    info!(scored = scores.iter().flatten().count(), "matches scored");
    Ok(scores)
}

// ============================================================================
// Stage 5: Output
// ============================================================================

/// Result table: header, then one row per query in input order.
pub fn match_table(
    header: &str,
    results: &[MatchResult],
    scores: Option<&[Option<f32>]>,
    corpus_names: bool,
) -> Vec<Vec<String>> {
    let mut head = vec![header.to_string(), MATCHED_HEADER.to_string()];
    if scores.is_some() {
        head.push(SIMILARITY_HEADER.to_string());
    }
    let mut rows = Vec::with_capacity(results.len() + 1);
    rows.push(head);
    for (position, result) in results.iter().enumerate() {
        let mut row = vec![
            result.query.clone(),
            output_name(result, corpus_names).unwrap_or_default().to_string(),
        ];
        if let Some(scores) = scores {
            let score = scores.get(position).copied().flatten();
            row.push(score.map(format_score).unwrap_or_default());
        }
        rows.push(row);
    }
    rows
}

/// Writes a table to `output`, or to stdout when no path is given.
pub fn write_table(rows: &[Vec<String>], output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => write_rows(path, rows)?,
        None => write_rows_to(io::stdout().lock(), rows)?,
    }
    info!(rows = rows.len(), "table written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use jabbr_model::{Bucket, NoMatchReason};

    fn matched(query: &str, fullname: &str, source: &str) -> MatchResult {
        MatchResult {
            query: query.to_string(),
            cleaned: query.to_string(),
            bucket: Some(Bucket::PToZ),
            matched_fullname: Some(fullname.to_string()),
            matched_source: Some(source.to_string()),
            aggregate_score: Some(3),
            no_match: None,
        }
    }

    #[test]
    fn unmatched_rows_have_empty_cells() {
        let results = vec![
            matched("Phys Rev", "Physical Review", "Physical Review."),
            MatchResult::unmatched("3D Res", "3DRes", None, NoMatchReason::NonAlphabeticLead('3')),
        ];
        let scores = vec![Some(71.5), None];
        let table = match_table("abbr", &results, Some(&scores), true);
        assert_eq!(
            table,
            vec![
                vec!["abbr", MATCHED_HEADER, SIMILARITY_HEADER],
                vec!["Phys Rev", "Physical Review.", "71.50"],
                vec!["3D Res", "", ""],
            ]
        );
    }
}
