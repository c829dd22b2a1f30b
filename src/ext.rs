//! # Extension Traits
//!
//! Whole-file convenience methods on top of handles and writers.
//!
//! ## Overview
//!
//! [`FsExt`] has only default methods and a blanket implementation for
//! anything that can lend a [`SqliteFs`] (`SqliteFs` itself, `Arc<SqliteFs>`,
//! `&SqliteFs`, ...).
//!
//! ## Available Methods
//!
//! | Method | Description |
//! |--------|-------------|
//! | [`read_all`](FsExt::read_all) | Read a whole file |
//! | [`read_to_string`](FsExt::read_to_string) | Read a whole file as UTF-8 |
//! | [`write_all`](FsExt::write_all) | Write and close a file in one call |
//! | [`exists`](FsExt::exists) | Check if a file or directory exists |
//! | [`is_file`](FsExt::is_file) | Check if path is a stored file |
//! | [`is_dir`](FsExt::is_dir) | Check if path is a directory |
//! | [`file_size`](FsExt::file_size) | Stored size of a path |
//!
//! ## JSON Support (Feature-Gated)
//!
//! With the `serde` feature enabled, [`FsExtJson`] adds `read_json` and
//! `write_json`.
//!
//! ```toml
//! [dependencies]
//! sqlitefs = { version = "0.1", features = ["serde"] }
//! ```

use crate::{FRAGMENT_SIZE, FsError, SqliteFs};

/// Extension methods for a [`SqliteFs`].
///
/// # Example
///
/// ```rust
/// use sqlitefs::{FsExt, SqliteFs};
///
/// let fs = SqliteFs::open_in_memory()?;
/// fs.write_all("/config/app.toml", b"debug = true")?;
///
/// assert!(fs.is_file("config/app.toml")?);
/// assert!(fs.is_dir("/config")?);
/// assert_eq!(fs.read_to_string("config/app.toml")?, "debug = true");
/// # Ok::<(), sqlitefs::FsError>(())
/// ```
pub trait FsExt: AsRef<SqliteFs> {
    /// Read a whole file.
    ///
    /// A directory reads as empty.
    fn read_all(&self, path: &str) -> Result<Vec<u8>, FsError> {
        let mut handle = self.as_ref().open(path)?;
        let mut data = Vec::new();
        let mut buf = vec![0u8; FRAGMENT_SIZE];
        loop {
            let n = handle.read(&mut buf)?;
            if n == 0 {
                return Ok(data);
            }
            data.extend_from_slice(&buf[..n]);
        }
    }

    /// Read a whole file as UTF-8.
    ///
    /// # Errors
    ///
    /// - [`FsError::InvalidData`] if the content is not valid UTF-8
    fn read_to_string(&self, path: &str) -> Result<String, FsError> {
        let data = self.read_all(path)?;
        String::from_utf8(data).map_err(|e| FsError::InvalidData {
            path: path.to_string(),
            details: e.to_string(),
        })
    }

    /// Write `data` as the content of `path` and close the writer.
    fn write_all(&self, path: &str, data: &[u8]) -> Result<(), FsError> {
        let mut writer = self.as_ref().new_writer(path)?;
        let mut rest = data;
        while !rest.is_empty() {
            let n = writer.write(rest)?;
            rest = &rest[n..];
        }
        writer.close()
    }

    /// Check if the path is a stored file or a directory.
    ///
    /// Returns `Ok(false)` if the path doesn't exist (not an error).
    fn exists(&self, path: &str) -> Result<bool, FsError> {
        match self.as_ref().metadata(path) {
            Ok(_) => Ok(true),
            Err(FsError::NotFound { .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Check if the path points to a stored file.
    ///
    /// Returns `Ok(false)` if the path doesn't exist (not an error).
    fn is_file(&self, path: &str) -> Result<bool, FsError> {
        match self.as_ref().metadata(path) {
            Ok(m) => Ok(m.is_file()),
            Err(FsError::NotFound { .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Check if the path points to a directory (the root always does).
    ///
    /// Returns `Ok(false)` if the path doesn't exist (not an error).
    fn is_dir(&self, path: &str) -> Result<bool, FsError> {
        match self.as_ref().metadata(path) {
            Ok(m) => Ok(m.is_dir),
            Err(FsError::NotFound { .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Get the size of a file in bytes (0 for directories).
    ///
    /// # Errors
    ///
    /// Returns `FsError::NotFound` if the path doesn't exist.
    fn file_size(&self, path: &str) -> Result<u64, FsError> {
        Ok(self.as_ref().metadata(path)?.size)
    }
}

impl AsRef<SqliteFs> for SqliteFs {
    fn as_ref(&self) -> &SqliteFs {
        self
    }
}

// Blanket implementation - anything that lends a store gets FsExt for free
impl<T: AsRef<SqliteFs> + ?Sized> FsExt for T {}

// =============================================================================
// JSON Support (Feature-Gated)
// =============================================================================

#[cfg(feature = "serde")]
mod json {
    use super::*;
    use serde::{Serialize, de::DeserializeOwned};

    /// JSON serialization extension methods.
    ///
    /// Available when the `serde` feature is enabled.
    pub trait FsExtJson: FsExt {
        /// Read a file and deserialize it as JSON.
        ///
        /// # Errors
        ///
        /// - `FsError::NotFound` if the file doesn't exist
        /// - `FsError::InvalidData` if the file isn't UTF-8 or JSON parsing failed
        fn read_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, FsError> {
            let data = self.read_to_string(path)?;
            serde_json::from_str(&data).map_err(|e| FsError::InvalidData {
                path: path.to_string(),
                details: e.to_string(),
            })
        }

        /// Serialize a value and write it as pretty-printed JSON.
        fn write_json<T: Serialize>(&self, path: &str, value: &T) -> Result<(), FsError> {
            let json = serde_json::to_string_pretty(value).map_err(|e| FsError::InvalidData {
                path: path.to_string(),
                details: e.to_string(),
            })?;
            self.write_all(path, json.as_bytes())
        }
    }

    // Blanket implementation
    impl<B: FsExt + ?Sized> FsExtJson for B {}
}

#[cfg(feature = "serde")]
pub use json::FsExtJson;
