//! # Read Cursor
//!
//! Maps a linear byte offset onto `(fragment index, offset in fragment)` and
//! stitches fragment reads into a streaming read.
//!
//! ```text
//! offset ──▶ index = offset / FRAGMENT_SIZE ──▶ read_range(id, index, internal, want)
//!            internal = offset % FRAGMENT_SIZE
//! ```
//!
//! ## End of data
//!
//! A read returns `Ok(0)` only at the end of data. A short read that drains
//! the remaining bytes returns `Ok(n)`, and the following call `Ok(0)`.
//!
//! | Condition during one call | Result |
//! |---------------------------|--------|
//! | `offset >= size` on entry | `Ok(0)` |
//! | stored fragment shorter than expected | bytes so far, cursor skips to the next fragment |
//! | fragment row missing | bytes so far (or `Ok(0)`), treated as truncation |
//! | other storage failure | bytes so far; the error is returned by the next call |

use std::io::SeekFrom;
use std::sync::Arc;

use tracing::trace;

use crate::backend::Backend;
use crate::{FRAGMENT_SIZE, FileRecord, FsError};

/// Per-handle read state for one stored file.
pub struct ReadCursor {
    backend: Arc<dyn Backend>,
    file_id: i64,
    path: String,
    offset: u64,
    size: u64,
    pending: Option<FsError>,
}

impl std::fmt::Debug for ReadCursor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReadCursor")
            .field("file_id", &self.file_id)
            .field("path", &self.path)
            .field("offset", &self.offset)
            .field("size", &self.size)
            .finish_non_exhaustive()
    }
}

/// Logical size of a file from its fragment layout.
///
/// A record with no fragments is an empty file.
///
/// # Errors
///
/// - [`FsError::NotFound`] if neither fragments nor the record exist
pub(crate) fn total_size(
    backend: &dyn Backend,
    file_id: i64,
    path: &str,
) -> Result<u64, FsError> {
    match backend
        .fragment_stats(file_id)
        .map_err(|e| e.with_path(path))?
    {
        Some(stats) => Ok(stats.total_size()),
        None => match backend.find_record(path)? {
            Some(_) => Ok(0),
            None => Err(FsError::NotFound {
                path: path.to_string(),
            }),
        },
    }
}

impl ReadCursor {
    /// Bind a cursor to a stored file, computing its size once.
    pub(crate) fn open(backend: Arc<dyn Backend>, record: &FileRecord) -> Result<Self, FsError> {
        let size = total_size(backend.as_ref(), record.id, &record.path)?;
        Ok(Self {
            backend,
            file_id: record.id,
            path: record.path.clone(),
            offset: 0,
            size,
            pending: None,
        })
    }

    /// Current offset.
    #[inline]
    pub fn position(&self) -> u64 {
        self.offset
    }

    /// Size computed at open (or by the last `SeekFrom::End`).
    #[inline]
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Stored path of the file.
    #[inline]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Read into `buf`, returning `Ok(0)` only at end of data.
    pub fn read(&mut self, buf: &mut [u8]) -> Result<usize, FsError> {
        if let Some(err) = self.pending.take() {
            return Err(err);
        }
        if buf.is_empty() || self.offset >= self.size {
            return Ok(0);
        }

        let fragment = FRAGMENT_SIZE as u64;
        let mut filled = 0;
        while filled < buf.len() && self.offset < self.size {
            let index = self.offset / fragment;
            let internal = self.offset % fragment;
            let want = ((fragment - internal) as usize).min(buf.len() - filled);

            match self
                .backend
                .read_range(self.file_id, index, internal, want)
            {
                Ok(bytes) => {
                    let k = bytes.len().min(want);
                    buf[filled..filled + k].copy_from_slice(&bytes[..k]);
                    filled += k;
                    self.offset += k as u64;
                    if k == 0 {
                        if self.offset >= self.size {
                            break;
                        }
                        // Short or empty row: continue at the next fragment.
                        self.offset = (index + 1) * fragment;
                    }
                }
                Err(FsError::NotFound { .. }) => {
                    trace!(path = %self.path, index, filled, "fragment missing, treating as end of data");
                    break;
                }
                Err(err) => {
                    let err = err.with_path(&self.path);
                    if filled == 0 {
                        return Err(err);
                    }
                    self.pending = Some(err);
                    break;
                }
            }
        }
        Ok(filled)
    }

    /// Move the cursor. `SeekFrom::End` recomputes the size first.
    ///
    /// Seeking past the end is allowed; the next read returns `Ok(0)`.
    ///
    /// # Errors
    ///
    /// - [`FsError::InvalidArgument`] if the resulting offset is negative
    pub fn seek(&mut self, pos: SeekFrom) -> Result<u64, FsError> {
        let target = match pos {
            SeekFrom::Start(n) => i128::from(n),
            SeekFrom::Current(delta) => i128::from(self.offset) + i128::from(delta),
            SeekFrom::End(delta) => {
                self.size = total_size(self.backend.as_ref(), self.file_id, &self.path)?;
                i128::from(self.size) + i128::from(delta)
            }
        };
        let offset = u64::try_from(target).map_err(|_| FsError::InvalidArgument {
            operation: "seek",
            path: self.path.clone(),
            reason: format!("resulting offset {target} is out of range"),
        })?;
        self.offset = offset;
        self.pending = None;
        Ok(offset)
    }
}
