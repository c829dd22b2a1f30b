//! Store configuration.

use std::time::Duration;

/// Runtime options for opening a store.
///
/// Fragment size is deliberately absent: it is part of the on-disk format
/// (see [`FRAGMENT_SIZE`](crate::FRAGMENT_SIZE)).
///
/// # Example
///
/// ```rust
/// use sqlitefs::StoreOptions;
/// use std::time::Duration;
///
/// let opts = StoreOptions {
///     busy_timeout: Duration::from_secs(1),
///     ..StoreOptions::default()
/// };
/// assert!(opts.wal);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StoreOptions {
    /// How long SQLite waits on a locked database before failing.
    pub busy_timeout: Duration,
    /// Put file databases in WAL journal mode. Ignored for in-memory stores.
    pub wal: bool,
    /// Wrap the backend in a [`TracingLayer`](crate::TracingLayer).
    pub trace_storage: bool,
    /// Bound of the commit queue; `0` means unbounded.
    pub queue_capacity: usize,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            busy_timeout: Duration::from_secs(5),
            wal: true,
            trace_storage: false,
            queue_capacity: 64,
        }
    }
}
