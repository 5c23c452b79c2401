//! Library side of the `jabbr` binary: logging setup and the matching
//! pipeline stages.

pub mod logging;
pub mod pipeline;
pub mod types;
