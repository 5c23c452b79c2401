use std::path::Path;

use anyhow::{Context, Result};
use jabbr_model::CapacityLimits;
use tracing::debug;

use crate::table::read_line_rows;

/// Query abbreviations in file order, with the header kept for output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryList {
    pub header: String,
    pub queries: Vec<String>,
}

/// Rejoins the cells of a row split on unquoted commas.
fn join_row(row: Vec<String>) -> String {
    row.join(",")
}

/// Reads one abbreviation per line.
///
/// Every line after the header is a query, empty lines included. Quoted
/// cells are unquoted; a line split by unquoted commas is joined back so
/// that the query is the line text as written.
pub fn read_query_list(path: &Path, limits: &CapacityLimits) -> Result<QueryList> {
    let mut rows = read_line_rows(path)?.into_iter();
    let header = rows.next().map(join_row).unwrap_or_default();
    let queries: Vec<String> = rows.map(join_row).collect();
    limits
        .check_queries(queries.len())
        .with_context(|| format!("{}: {} query rows", path.display(), queries.len()))?;
    debug!(path = %path.display(), queries = queries.len(), "query list read");
    Ok(QueryList { header, queries })
}
