//! Multi-metric similarity used to grade an already matched pair.
//!
//! Inputs are projected to uppercase alphanumerics first. The mixed score
//! blends four percentages as
//! `(overlap + edit + (lcs + second_lcs)) / 3`, clamped to `[0, 100]`.
//! The common-substring pair is summed, not averaged.

use jabbr_model::SimilarityReport;

use crate::distance::edit_distance;
use crate::error::DistanceError;

/// Keeps ASCII letters and digits, uppercased.
pub fn alphanumeric_upper(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|ch| ch.to_ascii_uppercase())
        .collect()
}

/// Share of `left` covered by characters of `right`, in percent.
///
/// Walks `right` and consumes matching characters from the multiset of
/// `left`. Not symmetric.
pub fn overlap_ratio(left: &str, right: &str) -> f32 {
    if left.is_empty() {
        return 0.0;
    }
    let mut available = [0usize; 256];
    for byte in left.bytes() {
        available[usize::from(byte.to_ascii_lowercase())] += 1;
    }
    let mut matched = 0usize;
    for byte in right.bytes() {
        let slot = &mut available[usize::from(byte.to_ascii_lowercase())];
        if *slot > 0 {
            *slot -= 1;
            matched += 1;
        }
    }
    (matched as f32 / left.len() as f32) * 100.0
}

/// `(1 - distance / len(right)) * 100`; 100 when `right` is empty.
///
/// Negative when the distance exceeds the length of `right`.
pub fn edit_similarity(left: &str, right: &str) -> Result<f32, DistanceError> {
    let max_distance = edit_distance("", right)?;
    let distance = edit_distance(left, right)?;
    if max_distance == 0 {
        return Ok(100.0);
    }
    Ok((1.0 - distance as f32 / max_distance as f32) * 100.0)
}

/// Longest and second-longest run lengths seen while filling the
/// longest-common-substring table.
///
/// The second value is the largest table cell strictly below the running
/// maximum at the time it was seen, or the previous maximum when a new
/// one is reached. It need not be a separate occurrence.
pub fn common_substring_lengths(left: &str, right: &str) -> (usize, usize) {
    let left = left.as_bytes();
    let right = right.as_bytes();
    if left.is_empty() || right.is_empty() {
        return (0, 0);
    }

    let mut previous = vec![0usize; right.len() + 1];
    let mut current = vec![0usize; right.len() + 1];
    let mut longest = 0usize;
    let mut second = 0usize;
    for &l in left {
        for (j, &r) in right.iter().enumerate() {
            if l == r {
                let run = previous[j] + 1;
                current[j + 1] = run;
                if run > longest {
                    second = longest;
                    longest = run;
                } else if run > second && run < longest {
                    second = run;
                }
            } else {
                current[j + 1] = 0;
            }
        }
        std::mem::swap(&mut previous, &mut current);
    }
    (longest, second)
}

fn substring_percentage(length: usize, left: &str, right: &str) -> f32 {
    if length == 0 {
        return 0.0;
    }
    (length as f32 / left.len().max(right.len()) as f32) * 100.0
}

/// Longest common substring length over the longer input, in percent.
pub fn lcs_similarity(left: &str, right: &str) -> f32 {
    let (longest, _) = common_substring_lengths(left, right);
    substring_percentage(longest, left, right)
}

/// Second-longest table value over the longer input, in percent.
pub fn second_lcs_similarity(left: &str, right: &str) -> f32 {
    let (_, second) = common_substring_lengths(left, right);
    substring_percentage(second, left, right)
}

/// Grades a pair of strings.
pub fn compare(left: &str, right: &str) -> Result<SimilarityReport, DistanceError> {
    let left_normalized = alphanumeric_upper(left);
    let right_normalized = alphanumeric_upper(right);

    let overlap_ratio = overlap_ratio(&left_normalized, &right_normalized);
    let edit_similarity = edit_similarity(&left_normalized, &right_normalized)?;
    let (longest, second) = common_substring_lengths(&left_normalized, &right_normalized);
    let lcs_similarity = substring_percentage(longest, &left_normalized, &right_normalized);
    let second_lcs_similarity = substring_percentage(second, &left_normalized, &right_normalized);

    let blended =
        (overlap_ratio + edit_similarity + (lcs_similarity + second_lcs_similarity)) / 3.0;

    Ok(SimilarityReport {
        left_normalized,
        right_normalized,
        overlap_ratio,
        edit_similarity,
        lcs_similarity,
        second_lcs_similarity,
        mixed_score: blended.clamp(0.0, 100.0),
    })
}

/// Mixed score of a pair, clamped to `[0, 100]`.
pub fn mixed_similarity(left: &str, right: &str) -> Result<f32, DistanceError> {
    compare(left, right).map(|report| report.mixed_score)
}
