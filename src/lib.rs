//! Workscan - workspace data-extraction for the `wscan` CLI tool.
//!
//! This library scans a multi-project workspace (git repositories, agent
//! definitions, markdown learning notes, skill directories) and aggregates
//! everything into a single normalized JSON document. Extraction is
//! best-effort: every leaf-level read swallows its own failures and
//! contributes a neutral default, so one malformed file never aborts a run.

pub mod cli;
pub mod extract;
pub mod fsutil;
pub mod models;
pub mod overrides;

/// Library-level error type for workscan operations.
///
/// Only the top-level workspace enumeration and the final output write
/// surface errors; everything below that level is individually
/// fault-tolerant and reports nothing.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Workspace root is not a directory: {0}")]
    NotADirectory(String),
}

/// Result type alias for workscan operations.
pub type Result<T> = std::result::Result<T, Error>;
