use std::io::{self, IsTerminal};
use std::time::Instant;

use anyhow::{Context, Result};
use jabbr_ingest::{
    CellTrim, annotate_similarity, dedupe_abbreviations, expand_mappings, read_counts,
    read_mappings, read_query_list, read_rows, write_dedupe,
};
use jabbr_map::{compare, synthesize};
use jabbr_model::{Bucket, CapacityLimits};
use serde_json::json;
use tracing::{info, info_span};

use jabbr_cli::pipeline::{
    load_corpus, load_queries, match_queries, match_table, query_progress, score_matches,
    write_table,
};
use jabbr_cli::types::{MatchRunResult, ScoreRunResult};

use crate::cli::{CompareArgs, DedupeArgs, ExpandArgs, MatchArgs, ScoreArgs, VariantsArgs};
use crate::summary::{render_report, render_variants};

pub fn run_match(args: &MatchArgs) -> Result<MatchRunResult> {
    let span = info_span!("match_run", corpus = %args.corpus.display());
    let _guard = span.enter();
    let limits = args.capacity.limits();

    let matcher = load_corpus(&args.corpus, &limits)?;
    let list = load_queries(&args.queries, &limits)?;

    let progress = query_progress(
        list.queries.len(),
        !args.no_progress && io::stderr().is_terminal(),
    );
    let results = match_queries(&matcher, &list.queries, &progress)?;

    let scores = if args.with_similarity {
        Some(score_matches(&results, args.corpus_names)?)
    } else {
        None
    };

    let rows = match_table(&list.header, &results, scores.as_deref(), args.corpus_names);
    write_table(&rows, args.output.as_deref())?;

    let index = matcher.index();
    Ok(MatchRunResult {
        corpus: args.corpus.clone(),
        queries: args.queries.clone(),
        output: args.output.clone(),
        bucket_sizes: Bucket::ALL.map(|bucket| index.bucket_len(bucket)),
        mismatches: index.mismatches().to_vec(),
        results,
        scores,
        thresholds: args.thresholds.thresholds(),
    })
}

pub fn run_score(args: &ScoreArgs) -> Result<ScoreRunResult> {
    let span = info_span!("score_run", input = %args.input.display());
    let _guard = span.enter();
    let start = Instant::now();

    let mut rows = read_rows(&args.input, CellTrim::Trim)?;
    let stats = annotate_similarity(&mut rows)
        .with_context(|| format!("score {}", args.input.display()))?;
    write_table(&rows, args.output.as_deref())?;
    info!(
        scored = stats.scores.len(),
        skipped = stats.skipped,
        duration_ms = start.elapsed().as_millis(),
        "table scored"
    );

    Ok(ScoreRunResult {
        input: args.input.clone(),
        output: args.output.clone(),
        scores: stats.scores,
        skipped: stats.skipped,
        thresholds: args.thresholds.thresholds(),
    })
}

pub fn run_dedupe(args: &DedupeArgs) -> Result<()> {
    let list = read_query_list(&args.input, &CapacityLimits::unbounded())?;
    let result = dedupe_abbreviations(&list.queries);
    write_dedupe(&result, &list.header, &args.unique, &args.counts)?;
    info!(
        rows = list.queries.len(),
        distinct = result.unique.len(),
        duplicated = result.duplicates.len(),
        "abbreviations deduplicated"
    );
    Ok(())
}

pub fn run_expand(args: &ExpandArgs) -> Result<()> {
    let mappings = read_mappings(&args.mapping)?;
    let counts = read_counts(&args.counts)?;
    let expanded = expand_mappings(&mappings, &counts);

    let header = ["abbreviation".to_string(), "full_name".to_string()];
    let rows: Vec<Vec<String>> = std::iter::once(header.to_vec())
        .chain(expanded.into_iter().map(|(abbr, full)| vec![abbr, full]))
        .collect();
    write_table(&rows, args.output.as_deref())?;
    info!(
        mappings = mappings.len(),
        rows = rows.len() - 1,
        "mappings expanded"
    );
    Ok(())
}

pub fn run_variants(args: &VariantsArgs) -> Result<()> {
    let variants: Vec<_> = args
        .names
        .iter()
        .map(|name| (name.clone(), synthesize(name)))
        .collect();
    if args.json {
        let entries: Vec<_> = variants
            .iter()
            .map(|(name, variants)| json!({ "name": name, "variants": variants }))
            .collect();
        let text = serde_json::to_string_pretty(&entries).context("serialize variants")?;
        println!("{text}");
    } else {
        println!("{}", render_variants(&variants));
    }
    Ok(())
}

pub fn run_compare(args: &CompareArgs) -> Result<()> {
    let report = compare(&args.left, &args.right).context("compare strings")?;
    print!("{}", render_report(&report, &args.thresholds.thresholds()));
    Ok(())
}
