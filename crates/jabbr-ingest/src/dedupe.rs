//! Duplicate counting for raw abbreviation lists.

use std::collections::HashMap;
use std::path::Path;

use anyhow::Result;

use crate::table::write_rows;

/// A distinct abbreviation seen more than once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateCount {
    /// First spelling seen.
    pub abbreviation: String,
    pub count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DedupeResult {
    /// First spelling of every distinct row, in first-seen order.
    pub unique: Vec<String>,
    /// Rows seen more than once, in first-seen order.
    pub duplicates: Vec<DuplicateCount>,
}

/// Collapses rows that are equal ignoring ASCII case.
pub fn dedupe_abbreviations<S: AsRef<str>>(rows: &[S]) -> DedupeResult {
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut unique = Vec::new();
    let mut counts = Vec::new();
    for row in rows {
        let row = row.as_ref();
        let key = row.to_ascii_lowercase();
        match positions.get(&key) {
            Some(&position) => counts[position] += 1,
            None => {
                positions.insert(key, unique.len());
                unique.push(row.to_string());
                counts.push(1usize);
            }
        }
    }
    let duplicates = unique
        .iter()
        .zip(&counts)
        .filter(|(_, count)| **count > 1)
        .map(|(abbreviation, count)| DuplicateCount {
            abbreviation: abbreviation.clone(),
            count: *count,
        })
        .collect();
    DedupeResult { unique, duplicates }
}

/// Writes the distinct list (under `header`) and the duplicate counts table.
pub fn write_dedupe(
    result: &DedupeResult,
    header: &str,
    unique_path: &Path,
    counts_path: &Path,
) -> Result<()> {
    let unique_rows = std::iter::once(header).chain(result.unique.iter().map(String::as_str));
    write_rows(unique_path, unique_rows.map(|row| [row]))?;

    let count_rows = std::iter::once(["abbreviation".to_string(), "count".to_string()]).chain(
        result
            .duplicates
            .iter()
            .map(|dup| [dup.abbreviation.clone(), dup.count.to_string()]),
    );
    write_rows(counts_path, count_rows)
}
