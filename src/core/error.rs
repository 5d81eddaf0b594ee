//! Defines the custom error type for the `core` module.

use std::path::PathBuf;
use thiserror::Error;

/// The primary error type for the `core` module.
///
/// Icon resolution itself never fails. This enum covers the collaborators
/// around it: loading icon tables, walking directories and parsing category
/// names that arrive as plain strings.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Represents an I/O error, typically from file system operations.
    #[error("I/O error for path {1}: {0}")]
    Io(#[source] std::io::Error, PathBuf),

    /// An icon table file could not be parsed as either supported layout.
    #[error("Invalid icon table in {1}: {0}")]
    IconTable(#[source] serde_json::Error, PathBuf),

    /// Represents a failure while walking a directory tree.
    #[error("Directory walk failed: {0}")]
    Walk(#[from] ignore::Error),

    /// A path whose name is not valid UTF-8 and therefore has no icon name.
    #[error("Path is not valid UTF-8: {0}")]
    NonUtf8Path(PathBuf),

    /// A category name outside the closed set of file categories.
    #[error("Unknown file category: {0}")]
    UnknownCategory(String),
}
