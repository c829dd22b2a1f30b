//! # Path Index
//!
//! Resolves a request path against the flat `file_metadata` table.
//!
//! ## Responsibility
//! - Normalize request paths (one leading slash stripped, `""`/`"/"` = root)
//! - Classify a path as a stored file, an inferred directory, or absent
//!
//! Directories are never looked up as rows of their own: a directory exists
//! if it is the root, or if at least one stored path starts with
//! `dir + "/"`.

use crate::backend::MetadataStore;
use crate::{FileKind, FileRecord, FsError};

/// Outcome of [`PathIndex::resolve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
    /// A stored file row.
    File(FileRecord),
    /// A directory; the prefix ends in `/`, except for the root (`""`).
    Directory(String),
    /// Neither a file nor a prefix of any stored path.
    NotFound,
}

/// Strip one leading slash; `"."` and `"/"` collapse to the root (`""`).
///
/// ```rust
/// use sqlitefs::path_index::normalize;
///
/// assert_eq!(normalize("/docs/a.txt"), "docs/a.txt");
/// assert_eq!(normalize("/"), "");
/// assert_eq!(normalize("."), "");
/// ```
pub fn normalize(name: &str) -> &str {
    if name == "." {
        return "";
    }
    name.strip_prefix('/').unwrap_or(name)
}

/// Whether a normalized path names the root.
#[inline]
pub fn is_root(normalized: &str) -> bool {
    normalized.is_empty()
}

/// Directory prefix used for scans: `""` for the root, else `path` + `/`.
pub fn dir_prefix(normalized: &str) -> String {
    if is_root(normalized) || normalized.ends_with('/') {
        normalized.to_string()
    } else {
        format!("{normalized}/")
    }
}

/// Base name of a normalized path (`/` for the root).
pub fn base_name(normalized: &str) -> String {
    let trimmed = normalized.trim_end_matches('/');
    if trimmed.is_empty() {
        return "/".to_string();
    }
    match trimmed.rsplit_once('/') {
        Some((_, name)) => name.to_string(),
        None => trimmed.to_string(),
    }
}

/// Path lookups over a [`MetadataStore`].
pub struct PathIndex<'a, M: ?Sized> {
    store: &'a M,
}

impl<'a, M: MetadataStore + ?Sized> PathIndex<'a, M> {
    /// Bind an index to a metadata store.
    pub fn new(store: &'a M) -> Self {
        Self { store }
    }

    /// Resolve a request path.
    ///
    /// # Errors
    ///
    /// - [`FsError::Storage`] if a lookup fails
    pub fn resolve(&self, name: &str) -> Result<Resolved, FsError> {
        let path = normalize(name);
        if is_root(path) {
            return Ok(Resolved::Directory(String::new()));
        }

        if let Some(record) = self.store.find_record(path)? {
            if record.kind == FileKind::File {
                return Ok(Resolved::File(record));
            }
        }

        let prefix = dir_prefix(path);
        if self.store.has_prefix(&prefix)? {
            Ok(Resolved::Directory(prefix))
        } else {
            Ok(Resolved::NotFound)
        }
    }

    /// Whether a directory prefix (as returned in [`Resolved::Directory`])
    /// still exists. The root always does.
    pub fn dir_exists(&self, prefix: &str) -> Result<bool, FsError> {
        if is_root(prefix) {
            return Ok(true);
        }
        self.store.has_prefix(prefix)
    }
}
