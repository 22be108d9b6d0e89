//! Structured error types for catalogctl-core.
//!
//! Uses `thiserror` so library consumers can match on the failure kind.
//! The CLI wraps these in `anyhow` for context. A missing resource is not an
//! error here: lookups return `Option` and removals return `bool`.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::frontmatter::FrontmatterError;

/// Main error type for catalog store operations
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Write without override targeted an id that is already stored
    #[error("Failed to write {id} ({label}) as it already exists")]
    AlreadyExists { id: String, label: String },

    /// A stored file exists but is not a valid document for this kind
    #[error("Malformed document {path:?}: {reason}")]
    Malformed { path: PathBuf, reason: String },

    /// Identifier cannot be used as a file name
    #[error("Invalid resource id '{id}': {reason}")]
    InvalidId { id: String, reason: String },

    /// Record could not be turned into front-matter and body
    #[error("Failed to encode {id}: {reason}")]
    Encode { id: String, reason: String },

    /// I/O operation failed
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {reason}")]
    Config { reason: String },
}

/// Result type alias for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;

impl CatalogError {
    /// Create a conflict error for an existing id
    pub fn already_exists(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self::AlreadyExists {
            id: id.into(),
            label: label.into(),
        }
    }

    /// Create a malformed document error
    pub fn malformed(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Malformed {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Wrap a codec failure for the file at `path`
    pub fn frontmatter(path: impl Into<PathBuf>, source: FrontmatterError) -> Self {
        Self::malformed(path, source.to_string())
    }

    /// Create an invalid id error
    pub fn invalid_id(id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidId {
            id: id.into(),
            reason: reason.into(),
        }
    }

    /// Create an encode error
    pub fn encode(id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Encode {
            id: id.into(),
            reason: reason.into(),
        }
    }

    /// Create a config error
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }

    /// True for the write conflict raised when override is off
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::AlreadyExists { .. })
    }
}
