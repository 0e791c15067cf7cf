//! Error conditions raised beneath the request router.
//!
//! Every variant is converted into an error [`Response`](crate::core::types::Response)
//! by the router; none of them is fatal to the process.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub type GatewayResult<T> = Result<T, GatewayError>;

#[derive(Debug, Error)]
pub enum GatewayError {
    /// The caller sent no request at all (JSON `null`).
    #[error("Request cannot be null")]
    NullRequest,

    /// The request could not be decoded into the request shape.
    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    #[error("Unsupported request category: {0}")]
    UnsupportedCategory(String),

    #[error("Unsupported request type: {0}")]
    UnsupportedOperation(String),

    #[error("Line number is required for update operations")]
    MissingLineNumber,

    #[error("Directory is required for tree operations")]
    MissingDirectory,

    /// Read/Update/Create/Delete were sent without a file path.
    #[error("File path is required for {0} operations")]
    MissingFilePath(&'static str),

    #[error("Directory alias '{0}' not found")]
    AliasNotFound(String),

    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    /// Update target outside `[1, line_count + 1]`.
    #[error("Line number {line} is out of range")]
    LineOutOfRange { line: i64, line_count: usize },

    /// Transient failure from the host filesystem, surfaced as-is.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl GatewayError {
    pub fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// True for conditions detected before any path resolution or I/O.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::NullRequest
                | Self::MalformedRequest(_)
                | Self::UnsupportedCategory(_)
                | Self::UnsupportedOperation(_)
                | Self::MissingLineNumber
                | Self::MissingDirectory
                | Self::MissingFilePath(_)
        )
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::FileNotFound(_) | Self::DirectoryNotFound(_))
    }
}
