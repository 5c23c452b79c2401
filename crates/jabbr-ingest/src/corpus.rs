use std::path::Path;

use anyhow::Result;
use jabbr_model::CorpusRecord;
use tracing::debug;

use crate::table::{CellTrim, read_rows};

/// Reads the four-column corpus table, skipping its header row.
///
/// Cells are trimmed; columns past the fourth are ignored.
pub fn read_corpus(path: &Path) -> Result<Vec<CorpusRecord>> {
    let rows = read_rows(path, CellTrim::Trim)?;
    let records: Vec<CorpusRecord> = rows
        .into_iter()
        .skip(1)
        .map(CorpusRecord::from_cells)
        .collect();
    debug!(path = %path.display(), rows = records.len(), "corpus read");
    Ok(records)
}
