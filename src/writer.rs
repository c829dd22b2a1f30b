//! # Writer
//!
//! Buffers an append-only byte stream and commits it as fragments through
//! the store's [`CommitHandle`].
//!
//! - The file record is created once, just before the first fragment is
//!   committed, or at [`Writer::close`] for content shorter than one
//!   fragment (a zero-byte file gets a record and no fragments).
//! - Fragments are committed in strictly increasing index order; every one
//!   except the last is exactly [`FRAGMENT_SIZE`] bytes.
//! - `close` is idempotent after success; `write` and `flush` afterwards
//!   fail with [`FsError::WriterClosed`].

use std::io;

use tracing::{trace, warn};

use crate::commit::CommitHandle;
use crate::{FRAGMENT_SIZE, FsError};

/// Write session for one path, returned by
/// [`SqliteFs::new_writer`](crate::SqliteFs::new_writer).
///
/// Dropping an unclosed writer closes it; failures at that point can only
/// be logged, so call [`close`](Self::close) to observe them.
///
/// # Example
///
/// ```rust
/// use std::io::Write;
/// use sqlitefs::SqliteFs;
///
/// let fs = SqliteFs::open_in_memory()?;
/// let mut w = fs.new_writer("/notes/today.txt")?;
/// w.write_all(b"hello")?;
/// w.close()?;
/// assert_eq!(fs.metadata("notes/today.txt")?.size, 5);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct Writer {
    commit: CommitHandle,
    path: String,
    mime_type: String,
    buffer: Vec<u8>,
    fragment_index: u64,
    file_created: bool,
    closed: bool,
}

impl std::fmt::Debug for Writer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Writer")
            .field("path", &self.path)
            .field("buffered", &self.buffer.len())
            .field("fragment_index", &self.fragment_index)
            .field("closed", &self.closed)
            .finish_non_exhaustive()
    }
}

impl Writer {
    pub(crate) fn new(commit: CommitHandle, path: String, mime_type: String) -> Self {
        Self {
            commit,
            path,
            mime_type,
            buffer: Vec::with_capacity(FRAGMENT_SIZE),
            fragment_index: 0,
            file_created: false,
            closed: false,
        }
    }

    /// Stored path this writer targets.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// MIME type recorded for the file.
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// Whether [`close`](Self::close) has succeeded.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Append `data`, committing every full fragment it completes.
    ///
    /// Returns the number of bytes taken from `data`. When a commit fails
    /// after part of `data` was committed, that count is returned and the
    /// rest of `data` is dropped from the buffer; when nothing of `data` was
    /// committed, the error is returned and the buffer is left as it was.
    ///
    /// A short count is the only sign of a partial failure here; the error
    /// itself is logged. The fragment that failed stays buffered, so the next
    /// `write` or [`close`](Self::close) retries it and returns the error if
    /// it persists.
    ///
    /// # Errors
    ///
    /// - [`FsError::WriterClosed`] after a successful close
    /// - any error from record creation or a fragment commit
    pub fn write(&mut self, data: &[u8]) -> Result<usize, FsError> {
        self.ensure_open()?;
        let before = self.buffer.len();
        self.buffer.extend_from_slice(data);

        let mut committed = 0usize;
        while self.buffer.len() >= FRAGMENT_SIZE {
            if let Err(err) = self.commit_head() {
                let accepted = committed.saturating_sub(before).min(data.len());
                let keep = self.buffer.len() - (data.len() - accepted);
                self.buffer.truncate(keep);
                if accepted == 0 {
                    return Err(err);
                }
                warn!(path = %self.path, accepted, error = %err, "partial write");
                return Ok(accepted);
            }
            committed += FRAGMENT_SIZE;
        }
        Ok(data.len())
    }

    /// Commit the buffered tail and finish the file.
    ///
    /// # Errors
    ///
    /// Any error from record creation or the final commit. The writer stays
    /// open in that case and `close` may be retried.
    pub fn close(&mut self) -> Result<(), FsError> {
        if self.closed {
            return Ok(());
        }
        if !self.buffer.is_empty() || self.fragment_index == 0 {
            self.ensure_created()?;
        }
        if !self.buffer.is_empty() {
            self.commit
                .write_fragment(&self.path, self.fragment_index, self.buffer.clone())?;
            self.buffer.clear();
            self.fragment_index += 1;
        }
        self.closed = true;
        trace!(path = %self.path, fragments = self.fragment_index, "writer closed");
        Ok(())
    }

    fn ensure_open(&self) -> Result<(), FsError> {
        if self.closed {
            return Err(FsError::WriterClosed {
                path: self.path.clone(),
            });
        }
        Ok(())
    }

    fn ensure_created(&mut self) -> Result<(), FsError> {
        if !self.file_created {
            self.commit.create_record(&self.path, &self.mime_type)?;
            self.file_created = true;
        }
        Ok(())
    }

    /// Commit the first `FRAGMENT_SIZE` buffered bytes as the next fragment.
    fn commit_head(&mut self) -> Result<(), FsError> {
        self.ensure_created()?;
        let head = self.buffer[..FRAGMENT_SIZE].to_vec();
        self.commit
            .write_fragment(&self.path, self.fragment_index, head)?;
        self.fragment_index += 1;
        self.buffer.drain(..FRAGMENT_SIZE);
        Ok(())
    }
}

impl io::Write for Writer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(Writer::write(self, buf)?)
    }

    /// Fragments are committed as they fill; there is nothing to flush.
    fn flush(&mut self) -> io::Result<()> {
        Ok(self.ensure_open()?)
    }
}

impl Drop for Writer {
    fn drop(&mut self) {
        if self.closed {
            return;
        }
        warn!(path = %self.path, "writer dropped without close");
        if let Err(err) = self.close() {
            warn!(path = %self.path, error = %err, "closing dropped writer failed");
        }
    }
}
