//! # sqlitefs
//!
//! A hierarchical, random-access file store kept in SQLite.
//!
//! Files are split into fixed-size fragments stored as blob rows. Directories
//! are never stored: they are *inferred* from path prefixes of the flat
//! `file_metadata` table.
//!
//! ---
//!
//! ## Quick Start
//!
//! ```rust
//! use std::io::{Read, Seek, SeekFrom, Write};
//! use sqlitefs::SqliteFs;
//!
//! let fs = SqliteFs::open_in_memory()?;
//!
//! let mut w = fs.new_writer("/reports/2024.csv")?;
//! w.write_all(b"month,total\njan,12\n")?;
//! w.close()?;
//!
//! let mut f = fs.open("/reports/2024.csv")?;
//! f.seek(SeekFrom::Start(12))?;
//! let mut rest = String::new();
//! f.read_to_string(&mut rest)?;
//! assert_eq!(rest, "jan,12\n");
//!
//! let names: Vec<_> = fs
//!     .read_dir("/")?
//!     .map(|e| e.map(|e| e.name))
//!     .collect::<Result<_, _>>()?;
//! assert_eq!(names, ["reports"]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ---
//!
//! ## Core Types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`SqliteFs`] | The store: `open`, `new_writer`, `metadata`, `read_dir`, `close` |
//! | [`FileHandle`] | Open file (read/seek/stat) or directory (paged listing) |
//! | [`Writer`] | Buffers a byte stream into fragments |
//! | [`Backend`] | Storage seam: [`MetadataStore`] + [`FragmentStore`] |
//! | [`SqliteBackend`] | The shipped backend over `rusqlite` |
//! | [`FsError`] | Error type with path and operation context |
//! | [`Metadata`] | Name, size, kind, MIME type of a path |
//! | [`DirEntry`] | Single directory listing entry |
//!
//! ---
//!
//! ## Storage Layout
//!
//! ```text
//! file_metadata   (id, path UNIQUE, type 'file'|'dir', mime_type)
//! file_fragments  (file_id, fragment_index, fragment BLOB)   PK(file_id, fragment_index)
//! ```
//!
//! A file of length `L` has fragments `0 .. ceil(L / FRAGMENT_SIZE)`; every
//! fragment but the last is exactly [`FRAGMENT_SIZE`] bytes. An empty file
//! has a metadata row and no fragments.
//!
//! ---
//!
//! ## Concurrency
//!
//! Every mutation goes through one commit actor per store, handled strictly
//! in arrival order. Reads (`read`, `seek`, `stat`, listings) query the
//! backend directly and run concurrently with each other and with the actor.
//! A reader may observe a file mid-write.
//!
//! [`SqliteFs`] is `Send + Sync`; share it with `Arc<SqliteFs>`.
//!
//! ---
//!
//! ## Error Handling
//!
//! All operations return `Result<T, FsError>`. Errors include context:
//!
//! ```rust
//! use sqlitefs::FsError;
//!
//! let err = FsError::InvalidArgument {
//!     operation: "seek",
//!     path: "a.bin".into(),
//!     reason: "resulting offset -1 is out of range".into(),
//! };
//! assert_eq!(
//!     err.to_string(),
//!     "seek: invalid argument: a.bin (resulting offset -1 is out of range)"
//! );
//! ```
//!
//! Handles and writers also implement `std::io::{Read, Seek, Write}`; there
//! `FsError` converts into `std::io::Error` with a matching kind.
//!
//! ---
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | Serialization for [`Metadata`], [`DirEntry`], [`StoreOptions`], etc., plus the `FsExtJson` helpers |

// Private modules
mod backend;
mod commit;
mod dir;
mod error;
mod ext;
mod handle;
mod layer;
mod mime;
mod options;
mod reader;
mod store;
mod types;
mod writer;

/// Path normalization and file/directory resolution.
pub mod path_index;

// Public re-exports - error types
pub use error::FsError;

// Public re-exports - core types
pub use types::{
    DEFAULT_MIME_TYPE, DirEntry, FRAGMENT_SIZE, FileKind, FileRecord, FragmentStats, Metadata,
    Permissions,
};

// Public re-exports - storage seam
pub use backend::{Backend, FragmentStore, MetadataStore, SqliteBackend};

// Public re-exports - store surface
pub use dir::{DirCursor, DirectoryEnumerator, ReadDirIter};
pub use handle::FileHandle;
pub use options::StoreOptions;
pub use reader::ReadCursor;
pub use store::SqliteFs;
pub use writer::Writer;

// Public re-exports - infrastructure
pub use ext::FsExt;
pub use layer::{Layer, LayerExt, TracingLayer, Traced};
pub use mime::{CommonTypes, MimeResolver, OctetStream};

// Conditional re-exports
#[cfg(feature = "serde")]
pub use ext::FsExtJson;
