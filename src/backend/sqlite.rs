//! SQLite implementation of the storage traits.
//!
//! Schema (the effective on-disk contract):
//!
//! ```text
//! file_metadata(id PK autoincrement, path TEXT UNIQUE NOT NULL,
//!               type TEXT NOT NULL CHECK(type IN ('file','dir')),
//!               mime_type TEXT NULL)
//! file_fragments(file_id -> file_metadata(id), fragment_index, fragment BLOB,
//!                PRIMARY KEY(file_id, fragment_index))
//! ```
//!
//! Prefix matching uses `substr(path, 1, length(?)) = ?` rather than `LIKE`
//! so that `%`, `_` and letter case in stored paths are matched literally.

use std::path::Path;

use parking_lot::Mutex;
use rusqlite::{Connection, OpenFlags, OptionalExtension, Row, params};
use tracing::debug;

use super::{FragmentStore, MetadataStore};
use crate::{FileKind, FileRecord, FragmentStats, FsError, StoreOptions};

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS file_metadata (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        path TEXT UNIQUE NOT NULL,
        type TEXT NOT NULL CHECK (type IN ('file', 'dir')),
        mime_type TEXT NULL
    );
    CREATE TABLE IF NOT EXISTS file_fragments (
        file_id INTEGER NOT NULL,
        fragment_index INTEGER NOT NULL,
        fragment BLOB NOT NULL,
        PRIMARY KEY (file_id, fragment_index),
        FOREIGN KEY (file_id) REFERENCES file_metadata(id)
    );
    CREATE INDEX IF NOT EXISTS idx_file_metadata_path ON file_metadata(path);
    CREATE INDEX IF NOT EXISTS idx_file_fragments_length ON file_fragments(file_id, length(fragment));
";

/// [`Backend`](super::Backend) over a single SQLite connection.
///
/// The connection sits behind a mutex; each trait call holds it for one
/// statement (or one short transaction), so concurrent readers interleave at
/// statement granularity and see whatever the engine has committed.
///
/// Reads are serialized with each other and with the commit actor on that
/// mutex. Every fragment read is a single short statement, so a reader
/// waits for at most one commit, but readers never run in parallel.
/// Processes that need parallel readers can open further `SqliteBackend`s
/// on the same file with [`StoreOptions::wal`] set.
pub struct SqliteBackend {
    conn: Mutex<Connection>,
}

impl SqliteBackend {
    /// Open (or create) a database file and bootstrap the schema.
    pub fn open(path: impl AsRef<Path>, options: &StoreOptions) -> Result<Self, FsError> {
        let path = path.as_ref();
        let shown = path.display().to_string();
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_WRITE
                | OpenFlags::SQLITE_OPEN_CREATE
                | OpenFlags::SQLITE_OPEN_FULL_MUTEX,
        )
        .map_err(|e| FsError::storage("open", shown.clone(), e))?;
        conn.busy_timeout(options.busy_timeout)
            .map_err(|e| FsError::storage("open", shown.clone(), e))?;
        if options.wal {
            conn.execute_batch("PRAGMA journal_mode = WAL; PRAGMA synchronous = NORMAL;")
                .map_err(|e| FsError::storage("open", shown.clone(), e))?;
        }
        debug!(path = %shown, wal = options.wal, "opened sqlite database");
        Self::from_connection(conn)
    }

    /// Create a private in-memory database with the schema in place.
    pub fn open_in_memory() -> Result<Self, FsError> {
        let conn =
            Connection::open_in_memory().map_err(|e| FsError::storage("open", ":memory:", e))?;
        Self::from_connection(conn)
    }

    /// Adopt an already-open connection, creating tables if needed.
    pub fn from_connection(conn: Connection) -> Result<Self, FsError> {
        conn.execute_batch(SCHEMA)
            .map_err(|e| FsError::storage("create tables", "", e))?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Run raw statements against the underlying connection.
    ///
    /// Intended for inspection and maintenance; mutations made here bypass
    /// the commit actor.
    pub fn with_connection<T>(
        &self,
        f: impl FnOnce(&Connection) -> rusqlite::Result<T>,
    ) -> Result<T, FsError> {
        let conn = self.conn.lock();
        f(&conn).map_err(|e| FsError::storage("query", "", e))
    }

    fn record_from_row(row: &Row<'_>) -> rusqlite::Result<FileRecord> {
        let kind: String = row.get(2)?;
        Ok(FileRecord {
            id: row.get(0)?,
            path: row.get(1)?,
            kind: FileKind::from_column(&kind),
            mime_type: row.get(3)?,
        })
    }
}

impl std::fmt::Debug for SqliteBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteBackend").finish_non_exhaustive()
    }
}

fn fragment_label(file_id: i64, index: u64) -> String {
    format!("file #{file_id} fragment {index}")
}

impl MetadataStore for SqliteBackend {
    fn find_record(&self, path: &str) -> Result<Option<FileRecord>, FsError> {
        let conn = self.conn.lock();
        conn.query_row(
            "SELECT id, path, type, mime_type FROM file_metadata WHERE path = ?1",
            params![path],
            Self::record_from_row,
        )
        .optional()
        .map_err(|e| FsError::storage("lookup", path, e))
    }

    fn has_prefix(&self, prefix: &str) -> Result<bool, FsError> {
        let conn = self.conn.lock();
        conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM file_metadata WHERE substr(path, 1, length(?1)) = ?1)",
            params![prefix],
            |row| row.get(0),
        )
        .map_err(|e| FsError::storage("prefix lookup", prefix, e))
    }

    fn scan_prefix(&self, prefix: &str) -> Result<Vec<FileRecord>, FsError> {
        let conn = self.conn.lock();
        let mut stmt = conn
            .prepare_cached(
                "SELECT id, path, type, mime_type FROM file_metadata
                 WHERE substr(path, 1, length(?1)) = ?1
                 ORDER BY path",
            )
            .map_err(|e| FsError::storage("scan", prefix, e))?;
        let rows = stmt
            .query_map(params![prefix], Self::record_from_row)
            .map_err(|e| FsError::storage("scan", prefix, e))?;
        rows.collect::<rusqlite::Result<Vec<_>>>()
            .map_err(|e| FsError::storage("scan", prefix, e))
    }

    fn create_record(
        &self,
        path: &str,
        kind: FileKind,
        mime_type: Option<&str>,
    ) -> Result<i64, FsError> {
        let mut conn = self.conn.lock();
        let tx = conn
            .transaction()
            .map_err(|e| FsError::storage("create", path, e))?;
        tx.execute(
            "INSERT INTO file_metadata (path, type, mime_type) VALUES (?1, ?2, ?3)
             ON CONFLICT(path) DO UPDATE SET type = excluded.type, mime_type = excluded.mime_type",
            params![path, kind.as_str(), mime_type],
        )
        .map_err(|e| FsError::storage("create", path, e))?;
        let id: i64 = tx
            .query_row(
                "SELECT id FROM file_metadata WHERE path = ?1",
                params![path],
                |row| row.get(0),
            )
            .map_err(|e| FsError::storage("create", path, e))?;
        tx.execute("DELETE FROM file_fragments WHERE file_id = ?1", params![id])
            .map_err(|e| FsError::storage("create", path, e))?;
        tx.commit().map_err(|e| FsError::storage("create", path, e))?;
        Ok(id)
    }
}

impl FragmentStore for SqliteBackend {
    fn read_range(
        &self,
        file_id: i64,
        index: u64,
        offset: u64,
        len: usize,
    ) -> Result<Vec<u8>, FsError> {
        let conn = self.conn.lock();
        let bytes: Option<Vec<u8>> = conn
            .query_row(
                "SELECT COALESCE(substr(fragment, ?1, ?2), x'') FROM file_fragments
                 WHERE file_id = ?3 AND fragment_index = ?4",
                params![offset as i64 + 1, len as i64, file_id, index as i64],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| FsError::storage("read", fragment_label(file_id, index), e))?;
        bytes.ok_or_else(|| FsError::NotFound {
            path: fragment_label(file_id, index),
        })
    }

    fn write_fragment(&self, file_id: i64, index: u64, bytes: &[u8]) -> Result<(), FsError> {
        let conn = self.conn.lock();
        conn.execute(
            "INSERT OR REPLACE INTO file_fragments (file_id, fragment_index, fragment)
             VALUES (?1, ?2, ?3)",
            params![file_id, index as i64, bytes],
        )
        .map_err(|e| FsError::storage("write fragment", fragment_label(file_id, index), e))?;
        Ok(())
    }

    fn fragment_stats(&self, file_id: i64) -> Result<Option<FragmentStats>, FsError> {
        let conn = self.conn.lock();
        let (count, last_len): (i64, i64) = conn
            .query_row(
                "SELECT COUNT(*),
                        COALESCE((SELECT length(fragment) FROM file_fragments
                                  WHERE file_id = ?1
                                  ORDER BY fragment_index DESC LIMIT 1), 0)
                 FROM file_fragments WHERE file_id = ?1",
                params![file_id],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .map_err(|e| FsError::storage("size", format!("file #{file_id}"), e))?;
        if count == 0 {
            return Ok(None);
        }
        Ok(Some(FragmentStats {
            count: count as u64,
            last_len: last_len as u64,
        }))
    }

    fn stored_len(&self, file_id: i64) -> Result<u64, FsError> {
        let conn = self.conn.lock();
        let total: i64 = conn
            .query_row(
                "SELECT COALESCE(SUM(length(fragment)), 0) FROM file_fragments WHERE file_id = ?1",
                params![file_id],
                |row| row.get(0),
            )
            .map_err(|e| FsError::storage("size", format!("file #{file_id}"), e))?;
        Ok(total as u64)
    }
}
