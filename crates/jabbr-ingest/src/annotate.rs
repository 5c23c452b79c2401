//! Appends a similarity column to a table of matched pairs.

use anyhow::{Context, Result};
use jabbr_map::mixed_similarity;
use jabbr_model::format_score;
use tracing::warn;

/// Header of the appended column.
pub const SIMILARITY_HEADER: &str = "similarity";

/// Outcome of annotating a table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnnotationStats {
    /// Mixed scores of the annotated rows, in row order.
    pub scores: Vec<f32>,
    /// Data rows left untouched because they had fewer than two cells.
    pub skipped: usize,
}

/// Writes `mixedScore(row[0], row[1])` into the third cell of every data row.
///
/// The first row is the header: with exactly two cells it gains
/// `similarity`, with more its third cell is overwritten. Rows with fewer
/// than two cells are passed through.
pub fn annotate_similarity(rows: &mut [Vec<String>]) -> Result<AnnotationStats> {
    let mut stats = AnnotationStats::default();
    let Some((header, data)) = rows.split_first_mut() else {
        return Ok(stats);
    };
    set_third(header, SIMILARITY_HEADER.to_string());

    for (offset, row) in data.iter_mut().enumerate() {
        if row.len() < 2 {
            warn!(line = offset + 2, cells = row.len(), "row has fewer than two cells");
            stats.skipped += 1;
            continue;
        }
        let score = mixed_similarity(&row[0], &row[1])
            .with_context(|| format!("score row {}", offset + 2))?;
        set_third(row, format_score(score));
        stats.scores.push(score);
    }
    Ok(stats)
}

fn set_third(row: &mut Vec<String>, value: String) {
    match row.len() {
        0 | 1 => {}
        2 => row.push(value),
        _ => row[2] = value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|cell| (*cell).to_string()).collect()
    }

    #[test]
    fn appends_and_overwrites() {
        let mut rows = vec![
            row(&["abbreviation", "matched_fullname"]),
            row(&["Phys Rev", "Physical Review"]),
            row(&["lonely"]),
            row(&["Cell", "Cell", "stale"]),
        ];
        let stats = annotate_similarity(&mut rows).unwrap();
        assert_eq!(rows[0], row(&["abbreviation", "matched_fullname", "similarity"]));
        assert_eq!(rows[2], row(&["lonely"]));
        assert_eq!(rows[3][2], "100.00");
        assert_eq!(stats.skipped, 1);
        assert_eq!(stats.scores.len(), 2);
        let value: f32 = rows[1][2].parse().unwrap();
        assert!((0.0..=100.0).contains(&value));
    }

    #[test]
    fn header_with_extra_columns_is_overwritten() {
        let mut rows = vec![row(&["a", "b", "score", "note"])];
        annotate_similarity(&mut rows).unwrap();
        assert_eq!(rows[0], row(&["a", "b", "similarity", "note"]));
    }

    #[test]
    fn empty_table_is_fine() {
        let mut rows: Vec<Vec<String>> = Vec::new();
        assert_eq!(annotate_similarity(&mut rows).unwrap(), AnnotationStats::default());
    }
}
