//! Path-keyed metadata rows.

use crate::{FileKind, FileRecord, FsError};

/// Access to the flat, path-keyed `file_metadata` table.
///
/// Paths are stored without a leading slash. Directories are never required
/// to have rows of their own; callers infer them from prefixes.
///
/// # Object Safety
///
/// This trait is object-safe and can be used as `dyn MetadataStore`.
pub trait MetadataStore: Send + Sync {
    /// Exact-match lookup of one row.
    ///
    /// Returns `Ok(None)` if no row has this path.
    fn find_record(&self, path: &str) -> Result<Option<FileRecord>, FsError>;

    /// Whether any row's path starts with `prefix`.
    ///
    /// The empty prefix matches every row. Matching is byte-exact (no
    /// wildcards, no case folding).
    fn has_prefix(&self, prefix: &str) -> Result<bool, FsError>;

    /// All rows whose path starts with `prefix`, ordered by path.
    fn scan_prefix(&self, prefix: &str) -> Result<Vec<FileRecord>, FsError>;

    /// Create the row for `path`, or update kind and MIME type in place.
    ///
    /// The surrogate key of an existing row is preserved and every fragment
    /// attached to it is removed in the same transaction, so a rewritten file
    /// starts empty. Returns the row id.
    fn create_record(
        &self,
        path: &str,
        kind: FileKind,
        mime_type: Option<&str>,
    ) -> Result<i64, FsError>;
}
