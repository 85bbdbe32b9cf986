// Error types for the finder library
// Classified I/O errors with path context plus checksum and algorithm errors

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the hash engine and the combination search.
#[derive(Error, Debug)]
pub enum FinderError {
    #[error("File not found: {}", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("Permission denied while {operation}: {}", .path.display())]
    PermissionDenied { path: PathBuf, operation: String },

    #[error("I/O error while {operation}: {source}")]
    Io {
        path: Option<PathBuf>,
        operation: String,
        #[source]
        source: io::Error,
    },

    #[error("Unsupported hash algorithm: {name}")]
    UnsupportedAlgorithm { name: String },

    #[error("Invalid target checksum {checksum:?} for {algorithm}: expected {expected} hex characters")]
    InvalidChecksum {
        checksum: String,
        algorithm: String,
        expected: usize,
    },
}

impl FinderError {
    /// Classify an `io::Error`, attaching the operation and the path it hit.
    pub fn from_io(err: io::Error, operation: &str, path: Option<PathBuf>) -> Self {
        match (err.kind(), path) {
            (io::ErrorKind::NotFound, Some(path)) => FinderError::FileNotFound { path },
            (io::ErrorKind::PermissionDenied, Some(path)) => FinderError::PermissionDenied {
                path,
                operation: operation.to_string(),
            },
            (_, path) => FinderError::Io {
                path,
                operation: operation.to_string(),
                source: err,
            },
        }
    }
}

impl From<io::Error> for FinderError {
    fn from(err: io::Error) -> Self {
        FinderError::from_io(err, "accessing the file system", None)
    }
}
