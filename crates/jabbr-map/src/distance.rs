//! Levenshtein edit distance over ASCII text.

use crate::error::DistanceError;

/// Case-insensitive Levenshtein distance with unit costs.
///
/// Uses the full `(len1 + 1) x (len2 + 1)` table. The table is reserved up
/// front with `try_reserve_exact`, so an allocation failure comes back as an
/// error instead of aborting or being folded into a score. Comparison is
/// byte-wise and folds ASCII case only.
pub fn edit_distance(left: &str, right: &str) -> Result<usize, DistanceError> {
    let left = left.as_bytes();
    let right = right.as_bytes();
    if left.is_empty() {
        return Ok(right.len());
    }
    if right.is_empty() {
        return Ok(left.len());
    }

    let rows = left.len() + 1;
    let cols = right.len() + 1;
    let cells = rows
        .checked_mul(cols)
        .ok_or(DistanceError::TableTooLarge { rows, cols })?;
    let mut table: Vec<usize> = Vec::new();
    table
        .try_reserve_exact(cells)
        .map_err(|source| DistanceError::Allocation { cells, source })?;
    table.resize(cells, 0);

    for i in 0..rows {
        table[i * cols] = i;
    }
    for (j, cell) in table.iter_mut().enumerate().take(cols) {
        *cell = j;
    }

    for i in 1..rows {
        for j in 1..cols {
            let cost = usize::from(!left[i - 1].eq_ignore_ascii_case(&right[j - 1]));
            let deletion = table[(i - 1) * cols + j] + 1;
            let insertion = table[i * cols + j - 1] + 1;
            let substitution = table[(i - 1) * cols + j - 1] + cost;
            table[i * cols + j] = deletion.min(insertion).min(substitution);
        }
    }

    Ok(table[cells - 1])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn distance(left: &str, right: &str) -> usize {
        edit_distance(left, right).expect("edit distance")
    }

    #[test]
    fn classic_examples() {
        assert_eq!(distance("kitten", "sitting"), 3);
        assert_eq!(distance("flaw", "lawn"), 2);
        assert_eq!(distance("abc", "abc"), 0);
    }

    #[test]
    fn empty_inputs() {
        assert_eq!(distance("", ""), 0);
        assert_eq!(distance("", "abc"), 3);
        assert_eq!(distance("abcd", ""), 4);
    }

    #[test]
    fn ignores_ascii_case() {
        assert_eq!(distance("JOCS", "jocs"), 0);
        assert_eq!(distance("J.Comp.Sci.", "j. comp. sci."), 2);
    }
}
