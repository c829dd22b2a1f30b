//! # Directory Enumeration
//!
//! Builds immediate-child listings from the flat path table.
//!
//! A listing of `docs/` prefix-scans every row under it and keeps the first
//! path segment after the prefix:
//!
//! | Stored path | Relative | Child | Kind |
//! |-------------|----------|-------|------|
//! | `docs/a.txt` | `a.txt` | `a.txt` | file |
//! | `docs/img/x.png` | `img/x.png` | `img` | dir |
//! | `docs/empty/` | `empty/` | `empty` | dir |
//! | `docs/` | `` | (skipped) | |
//!
//! Children are deduplicated by name and returned in name order. File sizes
//! are the sum of the stored fragment lengths.
//!
//! Bounded listings go through a [`DirCursor`] that resumes after the last
//! name it returned, so successive pages are disjoint and advance.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use crate::backend::Backend;
use crate::path_index::PathIndex;
use crate::{DirEntry, FileKind, FsError};

/// Immediate-child listings over a [`Backend`].
pub struct DirectoryEnumerator<'a> {
    backend: &'a dyn Backend,
}

impl<'a> DirectoryEnumerator<'a> {
    /// Bind an enumerator to a backend.
    pub fn new(backend: &'a dyn Backend) -> Self {
        Self { backend }
    }

    /// All immediate children of `prefix`, sorted by name.
    ///
    /// `prefix` is a directory prefix as produced by
    /// [`dir_prefix`](crate::path_index::dir_prefix): `""` for the root,
    /// otherwise ending in `/`.
    ///
    /// # Errors
    ///
    /// - [`FsError::NotFound`] if the directory does not exist
    /// - [`FsError::Storage`] if a scan or size lookup fails
    pub fn list(&self, prefix: &str) -> Result<Vec<DirEntry>, FsError> {
        let mut children: BTreeMap<String, DirEntry> = BTreeMap::new();

        for record in self.backend.scan_prefix(prefix)? {
            let Some(rel) = record.path.strip_prefix(prefix) else {
                continue;
            };
            let (name, nested) = match rel.split_once('/') {
                Some((name, _)) => (name, true),
                None => (rel, false),
            };
            if name.is_empty() || name == "/" {
                continue;
            }
            let is_dir = nested || record.path.ends_with('/') || record.kind == FileKind::Dir;

            match children.entry(name.to_string()) {
                Entry::Occupied(mut existing) => {
                    if is_dir && !existing.get().is_dir {
                        existing.insert(dir_entry(prefix, name));
                    }
                }
                Entry::Vacant(slot) => {
                    let entry = if is_dir {
                        dir_entry(prefix, name)
                    } else {
                        let size = self
                            .backend
                            .stored_len(record.id)
                            .map_err(|e| e.with_path(&record.path))?;
                        DirEntry {
                            name: name.to_string(),
                            path: record.path.clone(),
                            is_dir: false,
                            size,
                        }
                    };
                    slot.insert(entry);
                }
            }
        }

        if children.is_empty() && !PathIndex::new(self.backend).dir_exists(prefix)? {
            return Err(FsError::NotFound {
                path: prefix.trim_end_matches('/').to_string(),
            });
        }
        Ok(children.into_values().collect())
    }

    /// The next page of children of `prefix` after `cursor`.
    ///
    /// `limit == 0` returns everything left. An exhausted cursor yields an
    /// empty vector.
    pub fn page(
        &self,
        prefix: &str,
        cursor: &mut DirCursor,
        limit: usize,
    ) -> Result<Vec<DirEntry>, FsError> {
        let entries = self.list(prefix)?;
        Ok(cursor.advance(entries, limit))
    }
}

fn dir_entry(prefix: &str, name: &str) -> DirEntry {
    DirEntry {
        name: name.to_string(),
        path: format!("{prefix}{name}/"),
        is_dir: true,
        size: 0,
    }
}

/// Resume position of a bounded directory listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirCursor {
    last: Option<String>,
}

impl DirCursor {
    /// A cursor positioned before the first child.
    pub fn new() -> Self {
        Self::default()
    }

    /// Name of the last child handed out, if any.
    pub fn last(&self) -> Option<&str> {
        self.last.as_deref()
    }

    /// Forget the position.
    pub fn reset(&mut self) {
        self.last = None;
    }

    /// Take up to `limit` entries (all if 0) that sort after the position.
    ///
    /// `entries` must be sorted by name.
    pub(crate) fn advance(&mut self, entries: Vec<DirEntry>, limit: usize) -> Vec<DirEntry> {
        let remaining = entries
            .into_iter()
            .filter(|e| self.last.as_deref().is_none_or(|last| e.name.as_str() > last));
        let page: Vec<DirEntry> = if limit == 0 {
            remaining.collect()
        } else {
            remaining.take(limit).collect()
        };
        if let Some(tail) = page.last() {
            self.last = Some(tail.name.clone());
        }
        page
    }
}

/// Iterator over directory entries.
///
/// - Outer `Result` (from [`SqliteFs::read_dir`](crate::SqliteFs::read_dir)) =
///   "does this directory exist?"
/// - Inner `Result` (per item) = "can I read this entry?"
///
/// # Example
///
/// ```rust
/// use sqlitefs::{FsError, SqliteFs};
///
/// fn list_names(fs: &SqliteFs) -> Result<Vec<String>, FsError> {
///     let mut names = Vec::new();
///     for entry in fs.read_dir("/")? {
///         names.push(entry?.name);
///     }
///     Ok(names)
/// }
/// ```
pub struct ReadDirIter(Box<dyn Iterator<Item = Result<DirEntry, FsError>> + Send + 'static>);

impl ReadDirIter {
    /// Create from any compatible iterator.
    pub fn new<I>(iter: I) -> Self
    where
        I: Iterator<Item = Result<DirEntry, FsError>> + Send + 'static,
    {
        Self(Box::new(iter))
    }

    /// Create from a listing that was read in one scan.
    pub fn from_entries(entries: Vec<DirEntry>) -> Self {
        Self(Box::new(entries.into_iter().map(Ok)))
    }

    /// Collect all entries, short-circuiting on first error.
    pub fn collect_all(self) -> Result<Vec<DirEntry>, FsError> {
        self.collect()
    }
}

impl Iterator for ReadDirIter {
    type Item = Result<DirEntry, FsError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }
}

impl std::fmt::Debug for ReadDirIter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReadDirIter").finish_non_exhaustive()
    }
}
