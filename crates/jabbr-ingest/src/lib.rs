//! Tabular collaborators: corpus and query readers, result writers and the
//! duplicate-counting pre/post processing around a matching run.

#![deny(unsafe_code)]

pub mod annotate;
pub mod corpus;
pub mod dedupe;
pub mod expand;
pub mod queries;
pub mod table;

pub use annotate::{AnnotationStats, SIMILARITY_HEADER, annotate_similarity};
pub use corpus::read_corpus;
pub use dedupe::{DedupeResult, DuplicateCount, dedupe_abbreviations, write_dedupe};
pub use expand::{clean_full_name, expand_mappings, read_counts, read_mappings};
pub use queries::{QueryList, read_query_list};
pub use table::{
    CellTrim, format_record, parse_record, read_line_rows, read_rows, write_rows, write_rows_to,
};
