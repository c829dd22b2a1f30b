//! Error types for the fragmented SQLite file store.

use std::io;

/// Store error type with contextual variants.
///
/// Every variant names the path and/or the operation that failed.
/// Uses `#[non_exhaustive]` for forward compatibility.
///
/// # Examples
///
/// ```rust
/// use sqlitefs::FsError;
///
/// let err = FsError::NotFound { path: "missing.txt".into() };
/// assert_eq!(err.to_string(), "not found: missing.txt");
/// ```
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum FsError {
    /// Path, file or directory does not exist.
    #[error("not found: {path}")]
    NotFound {
        /// The path that was not found.
        path: String,
    },

    /// A directory listing was requested on a file handle.
    #[error("not a directory: {path}")]
    NotADirectory {
        /// The path that is not a directory.
        path: String,
    },

    /// Bad argument, e.g. a seek to a negative offset.
    #[error("{operation}: invalid argument: {path} ({reason})")]
    InvalidArgument {
        /// The operation that rejected the argument.
        operation: &'static str,
        /// The path the operation was applied to.
        path: String,
        /// What was wrong with the argument.
        reason: String,
    },

    /// Write or flush attempted after a successful close.
    #[error("writer closed: {path}")]
    WriterClosed {
        /// The path the writer was bound to.
        path: String,
    },

    /// Any other failure reported by the storage engine.
    #[error("{operation} failed for {path}: {source}")]
    Storage {
        /// The operation that failed.
        operation: &'static str,
        /// The path involved in the operation.
        path: String,
        /// The underlying SQLite error.
        #[source]
        source: rusqlite::Error,
    },

    /// The commit queue is gone because the store was shut down.
    #[error("{operation}: store is closed")]
    StoreClosed {
        /// The operation that was attempted.
        operation: &'static str,
    },

    /// I/O error outside the storage engine (e.g. spawning the commit thread).
    #[error("{operation} failed: {source}")]
    Io {
        /// The operation that failed.
        operation: &'static str,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Stored bytes could not be decoded as requested.
    #[error("invalid data: {path} ({details})")]
    InvalidData {
        /// The path with invalid data.
        path: String,
        /// Details about the invalid data.
        details: String,
    },
}

impl FsError {
    /// Wrap a storage error with the operation name and path.
    pub(crate) fn storage(
        operation: &'static str,
        path: impl Into<String>,
        source: rusqlite::Error,
    ) -> Self {
        FsError::Storage {
            operation,
            path: path.into(),
            source,
        }
    }

    /// Replace the path of a `NotFound` or `Storage` error.
    ///
    /// Backend errors about fragments name the row key; callers that know
    /// the user-facing path report that instead.
    pub(crate) fn with_path(self, path: &str) -> Self {
        match self {
            FsError::NotFound { .. } => FsError::NotFound { path: path.into() },
            FsError::Storage {
                operation, source, ..
            } => FsError::Storage {
                operation,
                path: path.into(),
                source,
            },
            other => other,
        }
    }

    /// Returns `true` for [`FsError::NotFound`].
    #[inline]
    pub fn is_not_found(&self) -> bool {
        matches!(self, FsError::NotFound { .. })
    }
}

impl From<FsError> for io::Error {
    fn from(error: FsError) -> Self {
        let kind = match &error {
            FsError::NotFound { .. } => io::ErrorKind::NotFound,
            FsError::InvalidArgument { .. } => io::ErrorKind::InvalidInput,
            FsError::InvalidData { .. } => io::ErrorKind::InvalidData,
            FsError::WriterClosed { .. } | FsError::StoreClosed { .. } => {
                io::ErrorKind::BrokenPipe
            }
            _ => io::ErrorKind::Other,
        };
        io::Error::new(kind, error)
    }
}
