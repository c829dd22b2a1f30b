//! # Layer Trait
//!
//! Tower-style middleware composition for storage backends.
//!
//! ## How It Works
//!
//! ```text
//! Backend ──▶ Layer::layer() ──▶ Wrapped Backend
//! ```
//!
//! Each middleware provides:
//! 1. A wrapper struct that implements [`MetadataStore`] and [`FragmentStore`]
//! 2. A `Layer` implementation that creates the wrapper
//!
//! The crate ships [`TracingLayer`], which the store installs when
//! [`StoreOptions::trace_storage`](crate::StoreOptions::trace_storage) is set.
//! Tests use the same mechanism to count, record or fail individual calls.
//!
//! ## Fluent Composition
//!
//! ```rust
//! use sqlitefs::{LayerExt, SqliteBackend, TracingLayer};
//!
//! let backend = SqliteBackend::open_in_memory()?.layer(TracingLayer);
//! # Ok::<(), sqlitefs::FsError>(())
//! ```

use tracing::trace;

use crate::backend::{Backend, FragmentStore, MetadataStore};
use crate::{FileKind, FileRecord, FragmentStats, FsError};

/// A layer that wraps a backend to add functionality.
///
/// # Design Notes
///
/// - `layer(self, backend)` consumes both the layer and backend
/// - The resulting `Backend` type should implement [`Backend`] again so
///   layers can be stacked
///
/// # Example
///
/// ```rust
/// use sqlitefs::Layer;
///
/// struct CountingMiddleware<B> {
///     inner: B,
/// }
///
/// struct CountingLayer;
///
/// impl<B> Layer<B> for CountingLayer {
///     type Backend = CountingMiddleware<B>;
///
///     fn layer(self, backend: B) -> Self::Backend {
///         CountingMiddleware { inner: backend }
///     }
/// }
/// ```
pub trait Layer<B> {
    /// The resulting backend type after applying this layer.
    type Backend;

    /// Wrap the given backend with this layer's functionality.
    fn layer(self, backend: B) -> Self::Backend;
}

/// Extension trait for fluent layer composition.
///
/// Provides the `.layer()` method on any [`Backend`].
pub trait LayerExt: Backend + Sized {
    /// Apply a layer to this backend.
    fn layer<L: Layer<Self>>(self, layer: L) -> L::Backend {
        layer.layer(self)
    }
}

impl<B: Backend> LayerExt for B {}

/// Emits a `trace` event for every storage call.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLayer;

impl<B: Backend> Layer<B> for TracingLayer {
    type Backend = Traced<B>;

    fn layer(self, backend: B) -> Self::Backend {
        Traced { inner: backend }
    }
}

/// Backend produced by [`TracingLayer`].
#[derive(Debug)]
pub struct Traced<B> {
    inner: B,
}

impl<B> Traced<B> {
    /// The wrapped backend.
    pub fn inner(&self) -> &B {
        &self.inner
    }
}

impl<B: MetadataStore> MetadataStore for Traced<B> {
    fn find_record(&self, path: &str) -> Result<Option<FileRecord>, FsError> {
        let result = self.inner.find_record(path);
        trace!(path, found = matches!(result, Ok(Some(_))), "find_record");
        result
    }

    fn has_prefix(&self, prefix: &str) -> Result<bool, FsError> {
        let result = self.inner.has_prefix(prefix);
        trace!(prefix, ok = result.is_ok(), "has_prefix");
        result
    }

    fn scan_prefix(&self, prefix: &str) -> Result<Vec<FileRecord>, FsError> {
        let result = self.inner.scan_prefix(prefix);
        trace!(
            prefix,
            rows = result.as_ref().map(Vec::len).unwrap_or(0),
            "scan_prefix"
        );
        result
    }

    fn create_record(
        &self,
        path: &str,
        kind: FileKind,
        mime_type: Option<&str>,
    ) -> Result<i64, FsError> {
        let result = self.inner.create_record(path, kind, mime_type);
        trace!(path, kind = kind.as_str(), ok = result.is_ok(), "create_record");
        result
    }
}

impl<B: FragmentStore> FragmentStore for Traced<B> {
    fn read_range(
        &self,
        file_id: i64,
        index: u64,
        offset: u64,
        len: usize,
    ) -> Result<Vec<u8>, FsError> {
        let result = self.inner.read_range(file_id, index, offset, len);
        trace!(
            file_id,
            index,
            offset,
            len,
            got = result.as_ref().map(Vec::len).unwrap_or(0),
            "read_range"
        );
        result
    }

    fn write_fragment(&self, file_id: i64, index: u64, bytes: &[u8]) -> Result<(), FsError> {
        let result = self.inner.write_fragment(file_id, index, bytes);
        trace!(file_id, index, len = bytes.len(), ok = result.is_ok(), "write_fragment");
        result
    }

    fn fragment_stats(&self, file_id: i64) -> Result<Option<FragmentStats>, FsError> {
        let result = self.inner.fragment_stats(file_id);
        trace!(file_id, ok = result.is_ok(), "fragment_stats");
        result
    }

    fn stored_len(&self, file_id: i64) -> Result<u64, FsError> {
        let result = self.inner.stored_len(file_id);
        trace!(file_id, ok = result.is_ok(), "stored_len");
        result
    }
}
