//! Core types for the fragmented file store.

use std::time::SystemTime;

/// Size of every stored fragment except a file's last one.
///
/// Part of the on-disk format: data written with one fragment size cannot be
/// read back with another, so this is not runtime configuration.
pub const FRAGMENT_SIZE: usize = 16 * 1024;

/// MIME type recorded when the lookup strategy has no answer.
pub const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

/// Kind of a stored path row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FileKind {
    /// Regular file made of fragments.
    File,
    /// Explicit directory marker row.
    Dir,
}

impl FileKind {
    /// The value stored in the `type` column.
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            FileKind::File => "file",
            FileKind::Dir => "dir",
        }
    }

    /// Parse the `type` column; anything other than `dir` is a file.
    #[inline]
    pub fn from_column(value: &str) -> Self {
        if value == "dir" {
            FileKind::Dir
        } else {
            FileKind::File
        }
    }
}

/// One `file_metadata` row.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FileRecord {
    /// Surrogate key referenced by fragments.
    pub id: i64,
    /// Unique path, without a leading slash.
    pub path: String,
    /// File or directory marker.
    pub kind: FileKind,
    /// MIME type (files only).
    pub mime_type: Option<String>,
}

/// Fragment count and last fragment length of one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FragmentStats {
    /// Number of stored fragments.
    pub count: u64,
    /// Length of the fragment with the highest index.
    pub last_len: u64,
}

impl FragmentStats {
    /// Logical file size implied by the fragment layout.
    #[inline]
    pub fn total_size(&self) -> u64 {
        if self.count == 0 {
            return 0;
        }
        (self.count - 1) * FRAGMENT_SIZE as u64 + self.last_len
    }
}

/// Result of a stat on a file or directory.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metadata {
    /// Base name (`/` for the root).
    pub name: String,
    /// Size in bytes (0 for directories).
    pub size: u64,
    /// Permissions reported for the entry.
    pub permissions: Permissions,
    /// Modification time. The schema stores none, so this is the stat time.
    #[cfg_attr(feature = "serde", serde(with = "system_time_serde"))]
    pub modified: SystemTime,
    /// Whether the entry is a directory.
    pub is_dir: bool,
    /// Stored MIME type (files only).
    pub mime_type: Option<String>,
}

impl Metadata {
    /// Returns `true` if this is a regular file.
    #[inline]
    pub fn is_file(&self) -> bool {
        !self.is_dir
    }

    pub(crate) fn file(name: String, size: u64, mime_type: Option<String>) -> Self {
        Self {
            name,
            size,
            permissions: Permissions::default_file(),
            modified: SystemTime::now(),
            is_dir: false,
            mime_type,
        }
    }

    pub(crate) fn dir(name: String) -> Self {
        Self {
            name,
            size: 0,
            permissions: Permissions::default_dir(),
            modified: SystemTime::now(),
            is_dir: true,
            mime_type: None,
        }
    }
}

/// An immediate child returned by a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DirEntry {
    /// Child name (single segment, no slashes).
    pub name: String,
    /// Full stored path of the child (directories end in `/`).
    pub path: String,
    /// Whether the child is a (possibly virtual) directory.
    pub is_dir: bool,
    /// Size in bytes (0 for directories).
    pub size: u64,
}

/// Unix-style permissions stored as a mode bitmask.
///
/// The store keeps no permissions; these are the fixed values it reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Permissions(u32);

impl Permissions {
    /// Create permissions from a Unix mode (e.g., 0o755).
    #[inline]
    pub const fn from_mode(mode: u32) -> Self {
        Self(mode & 0o7777)
    }

    /// Get the raw mode value.
    #[inline]
    pub const fn mode(&self) -> u32 {
        self.0
    }

    /// Reported permissions for a file (0o644 = rw-r--r--).
    #[inline]
    pub const fn default_file() -> Self {
        Self(0o644)
    }

    /// Reported permissions for a directory (0o755 = rwxr-xr-x).
    #[inline]
    pub const fn default_dir() -> Self {
        Self(0o755)
    }
}

impl Default for Permissions {
    fn default() -> Self {
        Self::default_file()
    }
}

#[cfg(feature = "serde")]
mod system_time_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::{Duration, SystemTime, UNIX_EPOCH};

    pub fn serialize<S>(time: &SystemTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let duration = time.duration_since(UNIX_EPOCH).unwrap_or(Duration::ZERO);
        (duration.as_secs(), duration.subsec_nanos()).serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<SystemTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let (secs, nanos): (u64, u32) = Deserialize::deserialize(deserializer)?;
        Ok(UNIX_EPOCH + Duration::new(secs, nanos))
    }
}
