//! # Storage Traits
//!
//! The seam between the file store and the relational engine behind it.
//!
//! ## Trait Layout
//!
//! ```text
//! MetadataStore (file_metadata rows) + FragmentStore (file_fragments rows) = Backend
//! ```
//!
//! | Trait | Rows | Used by |
//! |-------|------|---------|
//! | [`MetadataStore`] | `file_metadata` | path index, directory enumerator, commit actor |
//! | [`FragmentStore`] | `file_fragments` | read cursor, directory sizes, commit actor |
//!
//! [`Backend`] has a blanket implementation: implement both component traits
//! and the store accepts your type. [`SqliteBackend`] is the implementation
//! shipped with the crate; tests wrap it in a [`Layer`](crate::Layer) to
//! observe or break individual calls.
//!
//! ## Thread Safety
//!
//! All traits require `Send + Sync` and take `&self`. Reads are issued
//! directly from many handles at once while the commit actor mutates through
//! the same backend, so implementations synchronize internally.

mod fragment_store;
mod metadata_store;
pub mod sqlite;

pub use fragment_store::FragmentStore;
pub use metadata_store::MetadataStore;
pub use sqlite::SqliteBackend;

/// Complete storage backend for a [`SqliteFs`](crate::SqliteFs).
///
/// Automatically implemented for any type implementing both component traits.
pub trait Backend: MetadataStore + FragmentStore {}

impl<T: MetadataStore + FragmentStore> Backend for T {}
