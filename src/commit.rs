//! # Commit Actor
//!
//! The single serialized mutation path of a store.
//!
//! Every writer funnels record creation and fragment writes through one
//! dedicated thread. Requests are handled strictly one at a time in arrival
//! order, and each is answered before the next is taken off the queue. There
//! is no per-file lock: this queue is the only ordering mechanism for
//! mutations, which is what keeps two writers from interleaving inside a
//! fragment.
//!
//! ```text
//! Writer ──┐
//! Writer ──┼──▶ [ request queue ] ──▶ CommitActor thread ──▶ Backend
//! Writer ──┘          ▲                       │
//!                     └──── reply slot ◀──────┘
//! ```
//!
//! Reads never pass through here.

use std::sync::Arc;
use std::thread::JoinHandle;

use async_channel::{Receiver, Sender};
use tracing::{debug, trace, warn};

use crate::backend::Backend;
use crate::{FileKind, FsError};

type Reply<T> = Sender<Result<T, FsError>>;

enum Request {
    CreateRecord {
        path: String,
        mime_type: String,
        reply: Reply<i64>,
    },
    WriteFragment {
        path: String,
        index: u64,
        bytes: Vec<u8>,
        reply: Reply<()>,
    },
}

/// Cloneable submission side of the commit queue.
#[derive(Clone)]
pub struct CommitHandle {
    tx: Sender<Request>,
}

impl std::fmt::Debug for CommitHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommitHandle")
            .field("queued", &self.tx.len())
            .field("closed", &self.tx.is_closed())
            .finish()
    }
}

impl CommitHandle {
    /// Create (or update) the file row for `path`; blocks until committed.
    pub fn create_record(&self, path: &str, mime_type: &str) -> Result<i64, FsError> {
        let (reply, slot) = async_channel::bounded(1);
        self.round_trip(
            "create",
            Request::CreateRecord {
                path: path.to_string(),
                mime_type: mime_type.to_string(),
                reply,
            },
            slot,
        )
    }

    /// Upsert fragment `index` of the file at `path`; blocks until committed.
    pub fn write_fragment(&self, path: &str, index: u64, bytes: Vec<u8>) -> Result<(), FsError> {
        let (reply, slot) = async_channel::bounded(1);
        self.round_trip(
            "write fragment",
            Request::WriteFragment {
                path: path.to_string(),
                index,
                bytes,
                reply,
            },
            slot,
        )
    }

    fn round_trip<T>(
        &self,
        operation: &'static str,
        request: Request,
        slot: Receiver<Result<T, FsError>>,
    ) -> Result<T, FsError> {
        self.tx
            .send_blocking(request)
            .map_err(|_| FsError::StoreClosed { operation })?;
        slot.recv_blocking()
            .map_err(|_| FsError::StoreClosed { operation })?
    }
}

/// Owner of the commit thread.
///
/// Dropping it without calling [`shutdown`](Self::shutdown) detaches the
/// thread, which still exits once every [`CommitHandle`] is gone.
pub(crate) struct CommitActor {
    tx: Sender<Request>,
    thread: JoinHandle<()>,
}

impl CommitActor {
    /// Start the consumer thread. `capacity == 0` means an unbounded queue.
    pub(crate) fn spawn(
        backend: Arc<dyn Backend>,
        capacity: usize,
    ) -> Result<(Self, CommitHandle), FsError> {
        let (tx, rx) = if capacity == 0 {
            async_channel::unbounded()
        } else {
            async_channel::bounded(capacity)
        };
        let thread = std::thread::Builder::new()
            .name("sqlitefs-commit".into())
            .spawn(move || run(backend, rx))
            .map_err(|source| FsError::Io {
                operation: "spawn commit actor",
                source,
            })?;
        let handle = CommitHandle { tx: tx.clone() };
        Ok((Self { tx, thread }, handle))
    }

    /// Stop accepting requests, drain what is queued, and join the thread.
    pub(crate) fn shutdown(self) {
        self.tx.close();
        if self.thread.join().is_err() {
            warn!("commit actor panicked");
        }
    }
}

fn run(backend: Arc<dyn Backend>, rx: Receiver<Request>) {
    debug!("commit actor started");
    while let Ok(request) = rx.recv_blocking() {
        match request {
            Request::CreateRecord {
                path,
                mime_type,
                reply,
            } => {
                let result =
                    backend.create_record(&path, FileKind::File, Some(mime_type.as_str()));
                trace!(path = %path, mime_type = %mime_type, ok = result.is_ok(), "created record");
                let _ = reply.send_blocking(result);
            }
            Request::WriteFragment {
                path,
                index,
                bytes,
                reply,
            } => {
                let result = write_fragment(backend.as_ref(), &path, index, &bytes);
                trace!(path = %path, index, len = bytes.len(), ok = result.is_ok(), "committed fragment");
                let _ = reply.send_blocking(result);
            }
        }
    }
    debug!("commit actor drained");
}

fn write_fragment(
    backend: &dyn Backend,
    path: &str,
    index: u64,
    bytes: &[u8],
) -> Result<(), FsError> {
    let record = backend.find_record(path)?.ok_or_else(|| FsError::NotFound {
        path: path.to_string(),
    })?;
    backend
        .write_fragment(record.id, index, bytes)
        .map_err(|e| e.with_path(path))
}
