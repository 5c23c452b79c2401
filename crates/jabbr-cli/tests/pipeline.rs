//! Integration tests for the pipeline stages.

use std::fs;
use std::path::PathBuf;

use jabbr_cli::pipeline::{
    MATCHED_HEADER, load_corpus, load_queries, match_queries, match_table, query_progress,
    score_matches,
};
use jabbr_model::{Bucket, CapacityLimits, NoMatchReason};
use tempfile::TempDir;

const CORPUS: &str = "\
a-d,e-k,l-o,p-z
\"Acta Crystallographica, Section A\",Journal of Physics,Nature Physics,Physical Review Letters
,,Zoology Today,Zeitschrift fur Physik
";

const QUERIES: &str = "\
abbreviation
J. Phys.
Phys. Rev. Lett.
3D Res
\"Acta Cryst., A\"
";

fn fixture(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn corpus_stage_builds_buckets_and_flags_mismatches() {
    let dir = TempDir::new().unwrap();
    let corpus = fixture(&dir, "corpus.csv", CORPUS);

    let matcher = load_corpus(&corpus, &CapacityLimits::default()).unwrap();
    let index = matcher.index();
    assert_eq!(index.bucket_len(Bucket::AToD), 1);
    assert_eq!(index.bucket_len(Bucket::LToO), 2);
    assert_eq!(index.bucket_len(Bucket::PToZ), 2);
    assert_eq!(index.mismatches().len(), 1);
    assert_eq!(index.mismatches()[0].fullname, "Zoology Today");
}

#[test]
fn bucket_overflow_aborts_corpus_stage() {
    let dir = TempDir::new().unwrap();
    let corpus = fixture(&dir, "corpus.csv", CORPUS);
    let limits = CapacityLimits {
        max_entries_per_bucket: Some(1),
        max_queries: None,
    };
    let error = load_corpus(&corpus, &limits).unwrap_err();
    assert!(format!("{error:#}").contains("configured capacity is 1 entries"));
}

#[test]
fn matched_table_keeps_query_order() {
    let dir = TempDir::new().unwrap();
    let corpus = fixture(&dir, "corpus.csv", CORPUS);
    let queries = fixture(&dir, "queries.csv", QUERIES);
    let limits = CapacityLimits::default();

    let matcher = load_corpus(&corpus, &limits).unwrap();
    let list = load_queries(&queries, &limits).unwrap();
    let results = match_queries(&matcher, &list.queries, &query_progress(4, false)).unwrap();

    assert_eq!(
        results[2].no_match,
        Some(NoMatchReason::NonAlphabeticLead('3'))
    );
    let table = match_table(&list.header, &results, None, false);
    assert_eq!(table[0], vec!["abbreviation", MATCHED_HEADER]);
    let names: Vec<_> = table[1..].iter().map(|row| row[1].as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Journal of Physics",
            "Physical Review Letters",
            "",
            "Acta Crystallographica Section A",
        ]
    );

    let with_source = match_table(&list.header, &results, None, true);
    assert_eq!(with_source[4][1], "Acta Crystallographica, Section A");
}

#[test]
fn scores_exist_only_for_matches() {
    let dir = TempDir::new().unwrap();
    let corpus = fixture(&dir, "corpus.csv", CORPUS);
    let queries = fixture(&dir, "queries.csv", QUERIES);
    let limits = CapacityLimits::default();

    let matcher = load_corpus(&corpus, &limits).unwrap();
    let list = load_queries(&queries, &limits).unwrap();
    let results = match_queries(&matcher, &list.queries, &query_progress(4, false)).unwrap();
    let scores = score_matches(&results, false).unwrap();

    assert_eq!(scores.len(), 4);
    assert!(scores[2].is_none());
    for score in scores.iter().flatten() {
        assert!((0.0..=100.0).contains(score));
    }
}
