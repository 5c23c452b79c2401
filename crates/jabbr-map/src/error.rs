//! Error types for matching operations.

use std::collections::TryReserveError;

use jabbr_model::ModelError;
use thiserror::Error;

/// Failure to build an edit-distance table.
#[derive(Debug, Error)]
pub enum DistanceError {
    /// The table dimensions overflow the address space.
    #[error("edit distance table of {rows}x{cols} cells is too large")]
    TableTooLarge { rows: usize, cols: usize },
    /// The allocator refused the table.
    #[error("failed to allocate edit distance table of {cells} cells: {source}")]
    Allocation {
        cells: usize,
        #[source]
        source: TryReserveError,
    },
}

/// Errors from matching a query against the corpus.
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("scoring candidates failed: {0}")]
    Distance(#[from] DistanceError),
}

/// Errors from building the corpus index.
#[derive(Debug, Error)]
pub enum IndexError {
    #[error(transparent)]
    Capacity(#[from] ModelError),
}
