//! # Store
//!
//! [`SqliteFs`] ties the pieces together: one shared [`Backend`], one commit
//! actor for every mutation, and a MIME strategy.
//!
//! ```text
//! open(path) ──▶ PathIndex ──▶ FileHandle { ReadCursor | directory listing }
//! new_writer(path) ──▶ Writer ──▶ CommitHandle ──▶ CommitActor ──▶ Backend
//! ```
//!
//! Reads query the backend directly and may run concurrently with each
//! other and with the actor. There is no cross-read consistency: a reader
//! may observe a file while it is being written.

use std::path::Path;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::debug;

use crate::backend::Backend;
use crate::commit::{CommitActor, CommitHandle};
use crate::dir::{DirectoryEnumerator, ReadDirIter};
use crate::path_index::{PathIndex, Resolved, normalize};
use crate::{
    CommonTypes, FileHandle, FsError, LayerExt, Metadata, MimeResolver, SqliteBackend,
    StoreOptions, TracingLayer, Writer,
};

/// A fragmented file store over SQLite.
///
/// # Example
///
/// ```rust
/// use std::io::{Read, Write};
/// use sqlitefs::SqliteFs;
///
/// let fs = SqliteFs::open_in_memory()?;
///
/// let mut w = fs.new_writer("/dir/file.txt")?;
/// w.write_all(b"hi")?;
/// w.close()?;
///
/// let mut dir = fs.open("dir")?;
/// let entries = dir.read_dir(0)?;
/// assert_eq!(entries[0].name, "file.txt");
/// assert_eq!(entries[0].size, 2);
///
/// let mut s = String::new();
/// fs.open("/dir/file.txt")?.read_to_string(&mut s)?;
/// assert_eq!(s, "hi");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct SqliteFs {
    backend: Arc<dyn Backend>,
    commit: CommitHandle,
    actor: Mutex<Option<CommitActor>>,
    mime: Box<dyn MimeResolver>,
}

impl std::fmt::Debug for SqliteFs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteFs")
            .field("commit", &self.commit)
            .field("closed", &self.is_closed())
            .finish_non_exhaustive()
    }
}

impl SqliteFs {
    /// Open (or create) a database file.
    pub fn open_database(path: impl AsRef<Path>, options: StoreOptions) -> Result<Self, FsError> {
        let backend = SqliteBackend::open(path, &options)?;
        Self::with_backend(backend, options)
    }

    /// A store over a private in-memory database.
    pub fn open_in_memory() -> Result<Self, FsError> {
        Self::with_backend(SqliteBackend::open_in_memory()?, StoreOptions::default())
    }

    /// A store over any [`Backend`], e.g. one wrapped in a [`Layer`](crate::Layer).
    ///
    /// Starts the commit actor.
    pub fn with_backend<B: Backend + 'static>(
        backend: B,
        options: StoreOptions,
    ) -> Result<Self, FsError> {
        let backend: Arc<dyn Backend> = if options.trace_storage {
            Arc::new(backend.layer(TracingLayer))
        } else {
            Arc::new(backend)
        };
        let (actor, commit) = CommitActor::spawn(backend.clone(), options.queue_capacity)?;
        debug!(
            queue_capacity = options.queue_capacity,
            trace_storage = options.trace_storage,
            "store opened"
        );
        Ok(Self {
            backend,
            commit,
            actor: Mutex::new(Some(actor)),
            mime: Box::new(CommonTypes),
        })
    }

    /// Replace the MIME strategy used by new writers.
    pub fn with_mime_resolver(mut self, resolver: impl MimeResolver + 'static) -> Self {
        self.mime = Box::new(resolver);
        self
    }

    /// Open a file or directory.
    ///
    /// # Errors
    ///
    /// - [`FsError::NotFound`] if the path is neither a file nor a prefix of one
    /// - [`FsError::StoreClosed`] after [`close`](Self::close)
    pub fn open(&self, path: &str) -> Result<FileHandle, FsError> {
        self.ensure_open("open")?;
        match PathIndex::new(self.backend.as_ref()).resolve(path)? {
            Resolved::File(record) => FileHandle::file(self.backend.clone(), record),
            Resolved::Directory(prefix) => Ok(FileHandle::dir(self.backend.clone(), prefix)),
            Resolved::NotFound => Err(FsError::NotFound {
                path: normalize(path).to_string(),
            }),
        }
    }

    /// Start writing a file. Nothing is stored until the first fragment
    /// fills or the writer is closed.
    ///
    /// Writing a path that already exists replaces its content from the
    /// first fragment on.
    ///
    /// # Errors
    ///
    /// - [`FsError::InvalidArgument`] for the root or a path ending in `/`
    /// - [`FsError::StoreClosed`] after [`close`](Self::close)
    pub fn new_writer(&self, path: &str) -> Result<Writer, FsError> {
        self.ensure_open("new_writer")?;
        let path = normalize(path);
        if path.is_empty() || path.ends_with('/') {
            return Err(FsError::InvalidArgument {
                operation: "new_writer",
                path: path.to_string(),
                reason: "not a file path".into(),
            });
        }
        let mime_type = self.mime.mime_type(path);
        Ok(Writer::new(self.commit.clone(), path.to_string(), mime_type))
    }

    /// Name, size and kind of a path.
    pub fn metadata(&self, path: &str) -> Result<Metadata, FsError> {
        self.open(path)?.stat()
    }

    /// Every immediate child of a directory, in name order.
    ///
    /// # Errors
    ///
    /// - [`FsError::NotFound`] if the directory does not exist
    /// - [`FsError::NotADirectory`] if the path is a file
    pub fn read_dir(&self, path: &str) -> Result<ReadDirIter, FsError> {
        self.ensure_open("read_dir")?;
        match PathIndex::new(self.backend.as_ref()).resolve(path)? {
            Resolved::Directory(prefix) => {
                let entries = DirectoryEnumerator::new(self.backend.as_ref()).list(&prefix)?;
                Ok(ReadDirIter::from_entries(entries))
            }
            Resolved::File(record) => Err(FsError::NotADirectory { path: record.path }),
            Resolved::NotFound => Err(FsError::NotFound {
                path: normalize(path).to_string(),
            }),
        }
    }

    /// Drain the commit queue and stop the actor. Idempotent.
    ///
    /// Handles already open keep reading; writers fail with
    /// [`FsError::StoreClosed`] on their next commit.
    pub fn close(&self) {
        if let Some(actor) = self.actor.lock().take() {
            actor.shutdown();
            debug!("store closed");
        }
    }

    /// Whether [`close`](Self::close) has run.
    pub fn is_closed(&self) -> bool {
        self.actor.lock().is_none()
    }

    /// The shared backend reads go through.
    pub fn backend(&self) -> &Arc<dyn Backend> {
        &self.backend
    }

    fn ensure_open(&self, operation: &'static str) -> Result<(), FsError> {
        if self.is_closed() {
            return Err(FsError::StoreClosed { operation });
        }
        Ok(())
    }
}

impl Drop for SqliteFs {
    fn drop(&mut self) {
        self.close();
    }
}
