//! Error types for loading and resolution.
//!
//! Most queries degrade to empty results instead of failing. The variants
//! here cover the operations that must report failure to their caller.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the inkmap toolchain.
#[derive(Debug, Error)]
pub enum InkError {
    /// Reading a source file failed.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A workspace root is missing or not a directory.
    #[error("directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    /// The configured file pattern is not a valid glob.
    #[error("invalid file pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    /// Walking the workspace directory tree failed.
    #[error("failed to walk workspace: {0}")]
    Walk(#[from] walkdir::Error),

    /// No divert target with this name is visible from the query position.
    #[error("no definition for `{name}` in scope of {}:{line}", .path.display())]
    DefinitionNotFound {
        name: String,
        path: PathBuf,
        line: u32,
    },
}

impl InkError {
    /// Create an IO error for a path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Check whether this is the "no definition available" outcome.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::DefinitionNotFound { .. })
    }
}

/// Result alias used across the crate.
pub type Result<T, E = InkError> = std::result::Result<T, E>;
