//! File-level behavior of the readers and writers.

use std::collections::HashMap;
use std::fs;

use jabbr_ingest::{
    CellTrim, dedupe_abbreviations, expand_mappings, format_record, parse_record, read_corpus,
    read_counts, read_mappings, read_query_list, read_rows, write_dedupe, write_rows,
};
use jabbr_model::{Bucket, CapacityLimits};
use proptest::prelude::*;
use tempfile::TempDir;

#[test]
fn corpus_rows_skip_header_and_trim_cells() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("corpus.csv");
    fs::write(
        &path,
        "a-d,e-k,l-o,p-z\n Acta Physica ,, Optics Letters ,\n,Journal of Physics,,Physical Review,extra\n",
    )
    .unwrap();

    let records = read_corpus(&path).unwrap();
    assert_eq!(records.len(), 2);
    let first: Vec<_> = records[0].cells().collect();
    assert_eq!(
        first,
        vec![(Bucket::AToD, "Acta Physica"), (Bucket::LToO, "Optics Letters")]
    );
    let second: Vec<_> = records[1].cells().collect();
    assert_eq!(
        second,
        vec![(Bucket::EToK, "Journal of Physics"), (Bucket::PToZ, "Physical Review")]
    );
}

#[test]
fn query_rows_keep_their_text() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("queries.csv");
    fs::write(&path, "abbreviation\nPhys. Rev.\n\"J. Phys., A\"\nNat, Phys\n").unwrap();

    let list = read_query_list(&path, &CapacityLimits::default()).unwrap();
    assert_eq!(list.header, "abbreviation");
    assert_eq!(list.queries, vec!["Phys. Rev.", "J. Phys., A", "Nat, Phys"]);
}

#[test]
fn blank_query_lines_stay_in_place() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("queries.csv");
    fs::write(&path, "abbreviation\nPhys. Rev.\n\nNature\n").unwrap();

    let list = read_query_list(&path, &CapacityLimits::default()).unwrap();
    assert_eq!(list.queries, vec!["Phys. Rev.", "", "Nature"]);
}

#[test]
fn stray_quote_stays_on_its_line() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("queries.csv");
    fs::write(&path, "abbreviation\n\"Nature\nCell\r\nPhys. Rev.\n").unwrap();

    let list = read_query_list(&path, &CapacityLimits::default()).unwrap();
    assert_eq!(list.queries.len(), 3);
    assert!(list.queries[0].contains("Nature"));
    assert!(!list.queries[0].contains('\n'));
    assert_eq!(list.queries[1..], ["Cell", "Phys. Rev."]);
}

#[test]
fn byte_order_mark_is_dropped_from_the_first_cell_only() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("queries.csv");
    fs::write(&path, "\u{feff}abbreviation\nNature\u{feff}\n").unwrap();

    let list = read_query_list(&path, &CapacityLimits::default()).unwrap();
    assert_eq!(list.header, "abbreviation");
    assert_eq!(list.queries, vec!["Nature\u{feff}"]);
}

#[test]
fn non_utf8_bytes_are_replaced_not_fatal() {
    let dir = TempDir::new().unwrap();
    let corpus = dir.path().join("corpus.csv");
    fs::write(&corpus, b"a-d,e-k,l-o,p-z\n,,,Zeitschrift f\xfcr Physik\n").unwrap();
    let queries = dir.path().join("queries.csv");
    fs::write(&queries, b"abbreviation\nZ. f\xfcr Phys.\n").unwrap();

    let records = read_corpus(&corpus).unwrap();
    assert_eq!(records[0].names[3], "Zeitschrift f\u{fffd}r Physik");
    let list = read_query_list(&queries, &CapacityLimits::default()).unwrap();
    assert_eq!(list.queries, vec!["Z. f\u{fffd}r Phys."]);
}

#[test]
fn too_many_queries_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("queries.csv");
    fs::write(&path, "abbreviation\nA\nB\nC\n").unwrap();
    let limits = CapacityLimits {
        max_entries_per_bucket: None,
        max_queries: Some(2),
    };

    let error = read_query_list(&path, &limits).unwrap_err();
    assert!(format!("{error:#}").contains("3 query rows"));
}

#[test]
fn missing_file_names_the_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.csv");
    let error = read_corpus(&path).unwrap_err();
    assert!(error.to_string().contains("absent.csv"));
}

#[test]
fn dedupe_then_expand_restores_row_count() {
    let dir = TempDir::new().unwrap();
    let unique = dir.path().join("unique.csv");
    let counts = dir.path().join("counts.csv");
    let mapping = dir.path().join("mapping.csv");

    let rows = ["Phys. Rev.", "Nature", "phys. rev.", "J. Phys., A", "PHYS. REV."];
    let result = dedupe_abbreviations(&rows);
    write_dedupe(&result, "abbreviation", &unique, &counts).unwrap();

    assert_eq!(
        fs::read_to_string(&unique).unwrap(),
        "abbreviation\nPhys. Rev.\nNature\n\"J. Phys., A\"\n"
    );
    assert_eq!(
        fs::read_to_string(&counts).unwrap(),
        "abbreviation,count\nPhys. Rev.,3\n"
    );

    write_rows(
        &mapping,
        [
            ["abbreviation", "full_name"],
            ["Phys. Rev.", "1. Physical Review"],
            ["Nature", "- Nature"],
            ["J. Phys., A", "Journal of Physics A"],
        ],
    )
    .unwrap();

    let mappings = read_mappings(&mapping).unwrap();
    let expanded = expand_mappings(&mappings, &read_counts(&counts).unwrap());
    assert_eq!(expanded.len(), rows.len());
    assert_eq!(expanded[2], ("Phys. Rev.".to_string(), "Physical Review".to_string()));
    assert_eq!(expanded[3], ("Nature".to_string(), "Nature".to_string()));
}

#[test]
fn bad_count_rows_are_skipped() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("counts.csv");
    fs::write(&path, "abbreviation,count\nA,2\nB,many\nC\nD, 4 \n").unwrap();
    let counts = read_counts(&path).unwrap();
    assert_eq!(
        counts,
        HashMap::from([("A".to_string(), 2), ("D".to_string(), 4)])
    );
}

#[test]
fn ragged_rows_are_read() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ragged.csv");
    fs::write(&path, "a,b,c\nonly\nx , y\n").unwrap();
    let rows = read_rows(&path, CellTrim::Trim).unwrap();
    assert_eq!(rows[1], vec!["only"]);
    assert_eq!(rows[2], vec!["x", "y"]);
}

proptest! {
    #[test]
    fn written_fields_parse_back(fields in prop::collection::vec("[a-zA-Z ,.\"]{1,12}", 1..5)) {
        let line = format_record(&fields).unwrap();
        prop_assert_eq!(parse_record(&line).unwrap(), fields);
    }
}
