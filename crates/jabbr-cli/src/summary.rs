use std::collections::BTreeMap;
use std::fmt::Write as _;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use jabbr_cli::types::{MatchRunResult, ScoreRunResult};
use jabbr_map::AbbreviationVariants;
use jabbr_model::{Bucket, ConfidenceLevel, ConfidenceThresholds, SimilarityReport, format_score};

/// Mismatched corpus names listed individually before eliding the rest.
const MAX_LISTED_MISMATCHES: usize = 20;

pub fn render_match_summary(result: &MatchRunResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Corpus: {}", result.corpus.display());
    let _ = writeln!(out, "Queries: {}", result.queries.display());
    let _ = writeln!(out, "Output: {}", output_label(result.output.as_deref()));

    let mut table = Table::new();
    table.set_header(vec![header_cell("Queries"), header_cell("Count")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    let matched = result.matched();
    table.add_row(vec![Cell::new("Total"), Cell::new(result.results.len())]);
    table.add_row(vec![
        Cell::new("Matched"),
        count_cell(matched, Color::Green),
    ]);
    for (reason, count) in result.unmatched_by_reason() {
        table.add_row(vec![
            Cell::new(format!("No match: {reason}")),
            count_cell(count, Color::Yellow),
        ]);
    }
    let _ = writeln!(out, "{table}");

    let mut buckets = Table::new();
    buckets.set_header(vec![
        header_cell("Bucket"),
        header_cell("Entries"),
        header_cell("Out of range"),
    ]);
    apply_table_style(&mut buckets);
    align_column(&mut buckets, 1, CellAlignment::Right);
    align_column(&mut buckets, 2, CellAlignment::Right);
    for bucket in Bucket::ALL {
        let out_of_range = result
            .mismatches
            .iter()
            .filter(|mismatch| mismatch.bucket == bucket)
            .count();
        buckets.add_row(vec![
            Cell::new(bucket),
            Cell::new(result.bucket_sizes[bucket.index()]),
            count_cell(out_of_range, Color::Yellow),
        ]);
    }
    let _ = writeln!(out, "{buckets}");

    if !result.mismatches.is_empty() {
        let mut table = Table::new();
        table.set_header(vec![
            header_cell("Bucket"),
            header_cell("Position"),
            header_cell("Name"),
        ]);
        apply_table_style(&mut table);
        align_column(&mut table, 1, CellAlignment::Right);
        for mismatch in result.mismatches.iter().take(MAX_LISTED_MISMATCHES) {
            let name = if mismatch.fullname.is_empty() {
                dim_cell("(empty)")
            } else {
                Cell::new(&mismatch.fullname)
            };
            table.add_row(vec![Cell::new(mismatch.bucket), Cell::new(mismatch.position), name]);
        }
        let _ = writeln!(out, "Corpus names outside their bucket range:");
        let _ = writeln!(out, "{table}");
        let hidden = result.mismatches.len().saturating_sub(MAX_LISTED_MISMATCHES);
        if hidden > 0 {
            let _ = writeln!(out, "... and {hidden} more");
        }
    }

    if let Some(bands) = result.confidence_bands() {
        let _ = writeln!(out, "{}", confidence_table(&bands, &result.thresholds));
    }
    out
}

pub fn render_score_summary(result: &ScoreRunResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Input: {}", result.input.display());
    let _ = writeln!(out, "Output: {}", output_label(result.output.as_deref()));

    let mut table = Table::new();
    table.set_header(vec![header_cell("Rows"), header_cell("Count")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Scored"), Cell::new(result.scores.len())]);
    table.add_row(vec![
        Cell::new("Passed through"),
        count_cell(result.skipped, Color::Yellow),
    ]);
    if !result.scores.is_empty() {
        let mean = result.scores.iter().sum::<f32>() / result.scores.len() as f32;
        table.add_row(vec![Cell::new("Mean similarity"), Cell::new(format_score(mean))]);
    }
    let _ = writeln!(out, "{table}");
    let _ = writeln!(
        out,
        "{}",
        confidence_table(&result.confidence_bands(), &result.thresholds)
    );
    out
}

pub fn render_variants(names: &[(String, AbbreviationVariants)]) -> String {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Name"),
        header_cell("Kind"),
        header_cell("Variant"),
    ]);
    apply_table_style(&mut table);
    for (name, variants) in names {
        for (position, (kind, value)) in variants.iter().enumerate() {
            let name_cell = if position == 0 {
                Cell::new(name).add_attribute(Attribute::Bold)
            } else {
                Cell::new("")
            };
            table.add_row(vec![name_cell, dim_cell(kind.label()), Cell::new(value)]);
        }
    }
    table.to_string()
}

pub fn render_report(report: &SimilarityReport, thresholds: &ConfidenceThresholds) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Left:  {}", report.left_normalized);
    let _ = writeln!(out, "Right: {}", report.right_normalized);

    let mut table = Table::new();
    table.set_header(vec![header_cell("Component"), header_cell("Score")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (label, value) in [
        ("Character overlap", report.overlap_ratio),
        ("Edit similarity", report.edit_similarity),
        ("Longest common substring", report.lcs_similarity),
        ("Second common substring", report.second_lcs_similarity),
    ] {
        table.add_row(vec![Cell::new(label), Cell::new(format_score(value))]);
    }
    let level = thresholds.categorize(report.mixed_score);
    table.add_row(vec![
        Cell::new("Mixed").add_attribute(Attribute::Bold),
        Cell::new(report.formatted())
            .fg(level_color(level))
            .add_attribute(Attribute::Bold),
    ]);
    let _ = writeln!(out, "{table}");
    let _ = writeln!(out, "Confidence: {}", level.label());
    out
}

fn confidence_table(
    bands: &BTreeMap<ConfidenceLevel, usize>,
    thresholds: &ConfidenceThresholds,
) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Confidence"),
        header_cell("Range"),
        header_cell("Rows"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for (level, count) in bands.iter().rev() {
        let range = match level {
            ConfidenceLevel::High => format!(">= {}", thresholds.high),
            ConfidenceLevel::Medium => format!(">= {}", thresholds.medium),
            ConfidenceLevel::Low => format!("< {}", thresholds.medium),
        };
        table.add_row(vec![
            Cell::new(level.label()).fg(level_color(*level)),
            dim_cell(range),
            Cell::new(count),
        ]);
    }
    table
}

fn output_label(path: Option<&std::path::Path>) -> String {
    path.map_or_else(|| "stdout".to_string(), |path| path.display().to_string())
}

fn level_color(level: ConfidenceLevel) -> Color {
    match level {
        ConfidenceLevel::High => Color::Green,
        ConfidenceLevel::Medium => Color::Yellow,
        ConfidenceLevel::Low => Color::Red,
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
