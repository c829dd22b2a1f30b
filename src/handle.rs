//! # File Handles
//!
//! What [`SqliteFs::open`](crate::SqliteFs::open) returns: a stored file
//! with a [`ReadCursor`], or an inferred directory with a listing position.
//!
//! | Operation | File | Directory |
//! |-----------|------|-----------|
//! | `read` | bytes from the cursor | `Ok(0)` |
//! | `seek` | moves the cursor | `Start(0)` rewinds the listing |
//! | `stat` | stored size, MIME type | size 0 |
//! | `read_dir` | [`FsError::NotADirectory`] | next page of children |
//!
//! Handles hold no transaction. `close` only marks the handle unusable; any
//! later call fails with [`FsError::InvalidArgument`].

use std::io;
use std::sync::Arc;

use crate::backend::Backend;
use crate::dir::{DirCursor, DirectoryEnumerator};
use crate::path_index::base_name;
use crate::reader::ReadCursor;
use crate::{DirEntry, FileRecord, FsError, Metadata};

enum Kind {
    File {
        cursor: ReadCursor,
        file_id: i64,
        mime_type: Option<String>,
    },
    Dir {
        prefix: String,
        listing: DirCursor,
    },
}

/// An open file or directory.
pub struct FileHandle {
    backend: Arc<dyn Backend>,
    path: String,
    kind: Kind,
    closed: bool,
}

impl std::fmt::Debug for FileHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileHandle")
            .field("path", &self.path)
            .field("is_dir", &self.is_dir())
            .field("closed", &self.closed)
            .finish_non_exhaustive()
    }
}

impl FileHandle {
    pub(crate) fn file(backend: Arc<dyn Backend>, record: FileRecord) -> Result<Self, FsError> {
        let cursor = ReadCursor::open(backend.clone(), &record)?;
        Ok(Self {
            backend,
            path: record.path,
            kind: Kind::File {
                cursor,
                file_id: record.id,
                mime_type: record.mime_type,
            },
            closed: false,
        })
    }

    pub(crate) fn dir(backend: Arc<dyn Backend>, prefix: String) -> Self {
        Self {
            backend,
            path: prefix.clone(),
            kind: Kind::Dir {
                prefix,
                listing: DirCursor::new(),
            },
            closed: false,
        }
    }

    /// Stored path (directories end in `/`, the root is `""`).
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Whether this handle is a directory.
    pub fn is_dir(&self) -> bool {
        matches!(self.kind, Kind::Dir { .. })
    }

    /// Stored MIME type; `None` for directories.
    pub fn mime_type(&self) -> Option<&str> {
        match &self.kind {
            Kind::File { mime_type, .. } => mime_type.as_deref(),
            Kind::Dir { .. } => None,
        }
    }

    /// Read into `buf`; `Ok(0)` means end of data.
    ///
    /// See [`ReadCursor::read`] for how missing or short fragments are
    /// handled.
    pub fn read(&mut self, buf: &mut [u8]) -> Result<usize, FsError> {
        self.ensure_open("read")?;
        match &mut self.kind {
            Kind::File { cursor, .. } => cursor.read(buf),
            Kind::Dir { .. } => Ok(0),
        }
    }

    /// Reposition a file cursor, or rewind a directory listing.
    ///
    /// # Errors
    ///
    /// - [`FsError::InvalidArgument`] for a negative resulting offset, or
    ///   any directory seek other than `SeekFrom::Start(0)`
    pub fn seek(&mut self, pos: io::SeekFrom) -> Result<u64, FsError> {
        self.ensure_open("seek")?;
        match &mut self.kind {
            Kind::File { cursor, .. } => cursor.seek(pos),
            Kind::Dir { listing, .. } => match pos {
                io::SeekFrom::Start(0) => {
                    listing.reset();
                    Ok(0)
                }
                _ => Err(FsError::InvalidArgument {
                    operation: "seek",
                    path: self.path.clone(),
                    reason: "directories can only be rewound".into(),
                }),
            },
        }
    }

    /// Name, size and kind of the open entry.
    ///
    /// File size is the sum of the stored fragment lengths at call time.
    pub fn stat(&self) -> Result<Metadata, FsError> {
        self.ensure_open("stat")?;
        match &self.kind {
            Kind::File {
                file_id, mime_type, ..
            } => {
                let size = self
                    .backend
                    .stored_len(*file_id)
                    .map_err(|e| e.with_path(&self.path))?;
                Ok(Metadata::file(base_name(&self.path), size, mime_type.clone()))
            }
            Kind::Dir { .. } => Ok(Metadata::dir(base_name(&self.path))),
        }
    }

    /// Next page of immediate children, in name order.
    ///
    /// `limit == 0` returns all remaining children. Successive calls advance;
    /// once exhausted an empty vector is returned.
    ///
    /// # Errors
    ///
    /// - [`FsError::NotADirectory`] on a file handle
    /// - [`FsError::NotFound`] if the directory no longer exists
    pub fn read_dir(&mut self, limit: usize) -> Result<Vec<DirEntry>, FsError> {
        self.ensure_open("read_dir")?;
        match &mut self.kind {
            Kind::File { .. } => Err(FsError::NotADirectory {
                path: self.path.clone(),
            }),
            Kind::Dir { prefix, listing } => {
                DirectoryEnumerator::new(self.backend.as_ref()).page(prefix, listing, limit)
            }
        }
    }

    /// Mark the handle unusable. Idempotent.
    pub fn close(&mut self) -> Result<(), FsError> {
        self.closed = true;
        Ok(())
    }

    fn ensure_open(&self, operation: &'static str) -> Result<(), FsError> {
        if self.closed {
            return Err(FsError::InvalidArgument {
                operation,
                path: self.path.clone(),
                reason: "handle is closed".into(),
            });
        }
        Ok(())
    }
}

impl io::Read for FileHandle {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        Ok(FileHandle::read(self, buf)?)
    }
}

impl io::Seek for FileHandle {
    fn seek(&mut self, pos: io::SeekFrom) -> io::Result<u64> {
        Ok(FileHandle::seek(self, pos)?)
    }
}
