//! Expansion of a deduplicated mapping back to one row per original query.

use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;

use anyhow::Result;
use regex::Regex;
use tracing::warn;

use crate::table::{CellTrim, read_rows};

static LIST_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:\d+\.\s*|[-•*]\s*)+").expect("list marker pattern is valid")
});

/// Strips leading ordinals (`1. `) and bullets (`-`, `•`, `*`).
pub fn clean_full_name(full: &str) -> String {
    LIST_MARKER.replace(full, "").trim().to_string()
}

/// Reads an `abbreviation,count` table; rows with a bad count are skipped.
pub fn read_counts(path: &Path) -> Result<HashMap<String, usize>> {
    let mut counts = HashMap::new();
    for (line, row) in read_rows(path, CellTrim::Keep)?.into_iter().enumerate().skip(1) {
        let [abbreviation, count, ..] = row.as_slice() else {
            warn!(path = %path.display(), line = line + 1, "count row has fewer than two cells");
            continue;
        };
        match count.trim().parse::<usize>() {
            Ok(count) => {
                counts.insert(abbreviation.clone(), count);
            }
            Err(error) => {
                warn!(path = %path.display(), line = line + 1, %error, "skipping count row");
            }
        }
    }
    Ok(counts)
}

/// Reads `(abbreviation, full_name)` pairs from the first two columns,
/// skipping the header row.
pub fn read_mappings(path: &Path) -> Result<Vec<(String, String)>> {
    Ok(read_rows(path, CellTrim::Keep)?
        .into_iter()
        .skip(1)
        .map(|mut row| {
            row.resize(2, String::new());
            let full = row.pop().unwrap_or_default();
            let abbreviation = row.pop().unwrap_or_default();
            (abbreviation, full)
        })
        .collect())
}

/// Repeats each mapping by its duplicate count (1 when absent) and cleans
/// the full name.
pub fn expand_mappings(
    mappings: &[(String, String)],
    counts: &HashMap<String, usize>,
) -> Vec<(String, String)> {
    let mut expanded = Vec::with_capacity(mappings.len());
    for (abbreviation, full) in mappings {
        let repeat = counts.get(abbreviation).copied().unwrap_or(1);
        let cleaned = clean_full_name(full);
        for _ in 0..repeat {
            expanded.push((abbreviation.clone(), cleaned.clone()));
        }
    }
    expanded
}
