//! Byte-range access to fragment rows.

use crate::{FragmentStats, FsError};

/// Byte-range read/write primitive over `(file_id, fragment_index) -> blob`.
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync`. Reads run concurrently with
/// each other and with the commit actor.
///
/// # Object Safety
///
/// This trait is object-safe and can be used as `dyn FragmentStore`.
pub trait FragmentStore: Send + Sync {
    /// Read up to `len` bytes starting `offset` bytes into one fragment.
    ///
    /// Returns fewer bytes than requested when the stored fragment is
    /// shorter; that is not an error. An offset at or past the end of the
    /// fragment yields an empty vector.
    ///
    /// # Errors
    ///
    /// - [`FsError::NotFound`] if no row exists for the key
    /// - [`FsError::Storage`] for any other engine failure
    fn read_range(
        &self,
        file_id: i64,
        index: u64,
        offset: u64,
        len: usize,
    ) -> Result<Vec<u8>, FsError>;

    /// Insert or replace one fragment.
    ///
    /// Re-sending the same `(file_id, index)` replaces the previous bytes.
    fn write_fragment(&self, file_id: i64, index: u64, bytes: &[u8]) -> Result<(), FsError>;

    /// Fragment count and length of the highest-indexed fragment.
    ///
    /// Returns `Ok(None)` when the file has no fragment rows.
    fn fragment_stats(&self, file_id: i64) -> Result<Option<FragmentStats>, FsError>;

    /// Sum of all fragment lengths of a file (0 without fragments).
    fn stored_len(&self, file_id: i64) -> Result<u64, FsError>;
}
