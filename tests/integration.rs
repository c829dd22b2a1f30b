//! Integration tests against the public store API.
//!
//! These tests verify that:
//! 1. Content written through a `Writer` reads back byte-for-byte
//! 2. Stored fragments follow the fixed-size layout
//! 3. Seek, end-of-data and listing behave as documented
//! 4. Commits from concurrent writers never interleave
//! 5. Storage failures surface with the path that failed

use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;
use sqlitefs::*;

const F: usize = FRAGMENT_SIZE;

fn pattern(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 253) as u8).collect()
}

fn write_file(fs: &SqliteFs, path: &str, data: &[u8]) {
    let mut w = fs.new_writer(path).unwrap();
    w.write_all(data).unwrap();
    w.close().unwrap();
}

fn read_to_end(handle: &mut FileHandle, chunk: usize) -> Vec<u8> {
    let mut out = Vec::new();
    let mut buf = vec![0u8; chunk];
    loop {
        let n = handle.read(&mut buf).unwrap();
        if n == 0 {
            return out;
        }
        out.extend_from_slice(&buf[..n]);
    }
}

/// `(fragment_index, length)` of every stored fragment of `path`.
fn fragment_layout(db: &Path, path: &str) -> Vec<(i64, i64)> {
    let inspector = SqliteBackend::open(db, &StoreOptions::default()).unwrap();
    inspector
        .with_connection(|conn| {
            let mut stmt = conn.prepare(
                "SELECT f.fragment_index, length(f.fragment)
                 FROM file_fragments f JOIN file_metadata m ON m.id = f.file_id
                 WHERE m.path = ?1 ORDER BY f.fragment_index",
            )?;
            let rows = stmt.query_map([path], |r| Ok((r.get(0)?, r.get(1)?)))?;
            rows.collect()
        })
        .unwrap()
}

// =============================================================================
// Instrumented backends
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
enum Event {
    Create { path: String, id: i64 },
    Fragment { file_id: i64, index: u64, len: usize },
}

#[derive(Default)]
struct Log {
    events: Mutex<Vec<Event>>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl Log {
    fn mutations(&self) -> usize {
        self.events.lock().len()
    }
}

/// Records every mutation and the highest number observed at once.
struct RecordingLayer(Arc<Log>);

struct Recording<B> {
    inner: B,
    log: Arc<Log>,
}

impl<B: Backend> Layer<B> for RecordingLayer {
    type Backend = Recording<B>;

    fn layer(self, backend: B) -> Self::Backend {
        Recording {
            inner: backend,
            log: self.0,
        }
    }
}

impl<B> Recording<B> {
    fn enter(&self) {
        let now = self.log.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.log.max_in_flight.fetch_max(now, Ordering::SeqCst);
        // Widen the window in which an overlapping commit would be seen.
        std::thread::yield_now();
    }

    fn exit(&self) {
        self.log.in_flight.fetch_sub(1, Ordering::SeqCst);
    }
}

impl<B: MetadataStore> MetadataStore for Recording<B> {
    fn find_record(&self, path: &str) -> Result<Option<FileRecord>, FsError> {
        self.inner.find_record(path)
    }

    fn has_prefix(&self, prefix: &str) -> Result<bool, FsError> {
        self.inner.has_prefix(prefix)
    }

    fn scan_prefix(&self, prefix: &str) -> Result<Vec<FileRecord>, FsError> {
        self.inner.scan_prefix(prefix)
    }

    fn create_record(
        &self,
        path: &str,
        kind: FileKind,
        mime_type: Option<&str>,
    ) -> Result<i64, FsError> {
        self.enter();
        let result = self.inner.create_record(path, kind, mime_type);
        if let Ok(id) = result {
            self.log.events.lock().push(Event::Create {
                path: path.to_string(),
                id,
            });
        }
        self.exit();
        result
    }
}

impl<B: FragmentStore> FragmentStore for Recording<B> {
    fn read_range(
        &self,
        file_id: i64,
        index: u64,
        offset: u64,
        len: usize,
    ) -> Result<Vec<u8>, FsError> {
        self.inner.read_range(file_id, index, offset, len)
    }

    fn write_fragment(&self, file_id: i64, index: u64, bytes: &[u8]) -> Result<(), FsError> {
        self.enter();
        let result = self.inner.write_fragment(file_id, index, bytes);
        if result.is_ok() {
            self.log.events.lock().push(Event::Fragment {
                file_id,
                index,
                len: bytes.len(),
            });
        }
        self.exit();
        result
    }

    fn fragment_stats(&self, file_id: i64) -> Result<Option<FragmentStats>, FsError> {
        self.inner.fragment_stats(file_id)
    }

    fn stored_len(&self, file_id: i64) -> Result<u64, FsError> {
        self.inner.stored_len(file_id)
    }
}

/// Fails fragment reads or writes at one fragment index.
#[derive(Clone, Copy)]
struct FailAt {
    read_index: Option<u64>,
    write_index: Option<u64>,
}

struct Failing<B> {
    inner: B,
    at: FailAt,
}

impl<B: Backend> Layer<B> for FailAt {
    type Backend = Failing<B>;

    fn layer(self, backend: B) -> Self::Backend {
        Failing {
            inner: backend,
            at: self,
        }
    }
}

fn injected(operation: &'static str) -> FsError {
    FsError::Storage {
        operation,
        path: "injected".into(),
        source: rusqlite::Error::InvalidQuery,
    }
}

impl<B: MetadataStore> MetadataStore for Failing<B> {
    fn find_record(&self, path: &str) -> Result<Option<FileRecord>, FsError> {
        self.inner.find_record(path)
    }

    fn has_prefix(&self, prefix: &str) -> Result<bool, FsError> {
        self.inner.has_prefix(prefix)
    }

    fn scan_prefix(&self, prefix: &str) -> Result<Vec<FileRecord>, FsError> {
        self.inner.scan_prefix(prefix)
    }

    fn create_record(
        &self,
        path: &str,
        kind: FileKind,
        mime_type: Option<&str>,
    ) -> Result<i64, FsError> {
        self.inner.create_record(path, kind, mime_type)
    }
}

impl<B: FragmentStore> FragmentStore for Failing<B> {
    fn read_range(
        &self,
        file_id: i64,
        index: u64,
        offset: u64,
        len: usize,
    ) -> Result<Vec<u8>, FsError> {
        if self.at.read_index == Some(index) {
            return Err(injected("read"));
        }
        self.inner.read_range(file_id, index, offset, len)
    }

    fn write_fragment(&self, file_id: i64, index: u64, bytes: &[u8]) -> Result<(), FsError> {
        if self.at.write_index == Some(index) {
            return Err(injected("write fragment"));
        }
        self.inner.write_fragment(file_id, index, bytes)
    }

    fn fragment_stats(&self, file_id: i64) -> Result<Option<FragmentStats>, FsError> {
        self.inner.fragment_stats(file_id)
    }

    fn stored_len(&self, file_id: i64) -> Result<u64, FsError> {
        self.inner.stored_len(file_id)
    }
}

// =============================================================================
// Round trip and layout
// =============================================================================

#[test]
fn round_trip_at_fragment_boundaries() {
    let fs = SqliteFs::open_in_memory().unwrap();
    for len in [0, F - 1, F, F + 1, 3 * F + 17] {
        let path = format!("/sizes/{len}.bin");
        let data = pattern(len);
        write_file(&fs, &path, &data);

        let mut h = fs.open(&path).unwrap();
        assert_eq!(read_to_end(&mut h, 5000), data, "length {len}");
        assert_eq!(fs.metadata(&path).unwrap().size, len as u64);
    }
}

#[test]
fn fragment_layout_matches_length() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("layout.db");
    let fs = SqliteFs::open_database(&db, StoreOptions::default()).unwrap();

    for len in [0, 1, F - 1, F, F + 1, 2 * F, 3 * F + 17] {
        let path = format!("l{len}");
        write_file(&fs, &path, &pattern(len));

        let layout = fragment_layout(&db, &path);
        let expected_count = len.div_ceil(F);
        assert_eq!(layout.len(), expected_count, "length {len}");
        for (i, (index, frag_len)) in layout.iter().enumerate() {
            assert_eq!(*index, i as i64);
            let expected = if i + 1 < expected_count {
                F
            } else if len % F == 0 {
                F
            } else {
                len % F
            };
            assert_eq!(*frag_len, expected as i64, "length {len} fragment {i}");
        }
    }
}

#[test]
fn data_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("reopen.db");
    let data = pattern(2 * F + 9);
    {
        let fs = SqliteFs::open_database(&db, StoreOptions::default()).unwrap();
        write_file(&fs, "keep/me.bin", &data);
        fs.close();
    }
    let fs = SqliteFs::open_database(&db, StoreOptions::default()).unwrap();
    let mut h = fs.open("/keep/me.bin").unwrap();
    assert_eq!(read_to_end(&mut h, F), data);
}

// =============================================================================
// Read cursor
// =============================================================================

#[test]
fn seek_then_read_matches_suffix() {
    let fs = SqliteFs::open_in_memory().unwrap();
    let data = pattern(3 * F + 17);
    write_file(&fs, "s.bin", &data);

    for k in [0, 1, F - 1, F, F + 1, 2 * F + 5, data.len() - 1, data.len()] {
        let mut h = fs.open("s.bin").unwrap();
        assert_eq!(h.seek(SeekFrom::Start(k as u64)).unwrap(), k as u64);
        assert_eq!(read_to_end(&mut h, 3000), &data[k..], "offset {k}");
    }
}

#[test]
fn eof_convention() {
    let fs = SqliteFs::open_in_memory().unwrap();
    write_file(&fs, "ten.bin", &pattern(10));
    let mut h = fs.open("ten.bin").unwrap();

    let mut buf = [0u8; 6];
    assert_eq!(h.read(&mut buf).unwrap(), 6);
    assert_eq!(h.read(&mut buf).unwrap(), 4);
    assert_eq!(h.read(&mut buf).unwrap(), 0);
    assert_eq!(h.read(&mut buf).unwrap(), 0);
}

#[test]
fn one_fragment_in_four_reads() {
    let fs = SqliteFs::open_in_memory().unwrap();
    write_file(&fs, "quarter.bin", &pattern(F));
    let mut h = fs.open("quarter.bin").unwrap();

    let mut buf = vec![0u8; 4096];
    for _ in 0..4 {
        assert_eq!(h.read(&mut buf).unwrap(), 4096);
    }
    assert_eq!(h.read(&mut buf).unwrap(), 0);
}

#[test]
fn single_read_spans_two_fragments() {
    let fs = SqliteFs::open_in_memory().unwrap();
    let mut data = vec![b'A'; F];
    data.push(b'X');
    write_file(&fs, "ax.bin", &data);

    let mut h = fs.open("ax.bin").unwrap();
    let mut buf = vec![0u8; F + 1];
    assert_eq!(h.read(&mut buf).unwrap(), F + 1);
    assert_eq!(buf[F], b'X');
    assert!(buf[..F].iter().all(|&b| b == b'A'));
}

#[test]
fn negative_seek_is_invalid_argument() {
    let fs = SqliteFs::open_in_memory().unwrap();
    write_file(&fs, "n.bin", b"abc");
    let mut h = fs.open("n.bin").unwrap();
    let err = h.seek(SeekFrom::End(-4)).unwrap_err();
    assert!(matches!(err, FsError::InvalidArgument { ref path, .. } if path == "n.bin"));
}

#[test]
fn missing_middle_fragment_truncates_cleanly() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("holes.db");
    let fs = SqliteFs::open_database(&db, StoreOptions::default()).unwrap();
    write_file(&fs, "holey.bin", &pattern(3 * F));

    SqliteBackend::open(&db, &StoreOptions::default())
        .unwrap()
        .with_connection(|conn| {
            conn.execute(
                "DELETE FROM file_fragments WHERE fragment_index = 1
                 AND file_id = (SELECT id FROM file_metadata WHERE path = 'holey.bin')",
                [],
            )
        })
        .unwrap();

    let mut h = fs.open("holey.bin").unwrap();
    let mut buf = vec![0u8; 3 * F];
    assert_eq!(h.read(&mut buf).unwrap(), F);
    assert_eq!(h.read(&mut buf).unwrap(), 0);
}

#[test]
fn storage_error_after_bytes_is_reported_on_next_read() {
    let backend = SqliteBackend::open_in_memory().unwrap().layer(FailAt {
        read_index: Some(1),
        write_index: None,
    });
    let fs = SqliteFs::with_backend(backend, StoreOptions::default()).unwrap();
    write_file(&fs, "d/e.bin", &pattern(2 * F));

    let mut h = fs.open("d/e.bin").unwrap();
    let mut buf = vec![0u8; 2 * F];
    assert_eq!(h.read(&mut buf).unwrap(), F);
    let err = h.read(&mut buf).unwrap_err();
    assert!(matches!(err, FsError::Storage { ref path, .. } if path == "d/e.bin"));
}

#[test]
fn io_traits_work_together() {
    let fs = SqliteFs::open_in_memory().unwrap();
    let data = pattern(F + 300);
    write_file(&fs, "io.bin", &data);

    let mut h = fs.open("io.bin").unwrap();
    Seek::seek(&mut h, SeekFrom::End(-300)).unwrap();
    let mut tail = Vec::new();
    Read::read_to_end(&mut h, &mut tail).unwrap();
    assert_eq!(tail, &data[F..]);
}

// =============================================================================
// Writer
// =============================================================================

#[test]
fn empty_file_stat() {
    let fs = SqliteFs::open_in_memory().unwrap();
    let mut w = fs.new_writer("empty.txt").unwrap();
    w.close().unwrap();

    let meta = fs.metadata("/empty.txt").unwrap();
    assert_eq!(meta.size, 0);
    assert!(!meta.is_dir);
    assert_eq!(meta.name, "empty.txt");
}

#[test]
fn second_close_performs_no_mutation() {
    let log = Arc::new(Log::default());
    let backend = SqliteBackend::open_in_memory()
        .unwrap()
        .layer(RecordingLayer(log.clone()));
    let fs = SqliteFs::with_backend(backend, StoreOptions::default()).unwrap();

    let mut w = fs.new_writer("twice.txt").unwrap();
    w.write_all(b"once").unwrap();
    w.close().unwrap();
    let after_first = log.mutations();
    w.close().unwrap();
    drop(w);
    assert_eq!(log.mutations(), after_first);
    assert_eq!(after_first, 2);
}

#[test]
fn write_after_close_fails() {
    let fs = SqliteFs::open_in_memory().unwrap();
    let mut w = fs.new_writer("c.txt").unwrap();
    w.close().unwrap();
    assert!(matches!(w.write(b"x"), Err(FsError::WriterClosed { ref path }) if path == "c.txt"));
    assert!(Write::write_all(&mut w, b"x").is_err());
}

#[test]
fn partial_write_reports_committed_bytes() {
    let backend = SqliteBackend::open_in_memory().unwrap().layer(FailAt {
        read_index: None,
        write_index: Some(1),
    });
    let fs = SqliteFs::with_backend(backend, StoreOptions::default()).unwrap();

    let mut w = fs.new_writer("partial.bin").unwrap();
    assert_eq!(w.write(&pattern(3 * F)).unwrap(), F);
    let err = w.write(&pattern(F)).unwrap_err();
    assert!(matches!(err, FsError::Storage { ref path, .. } if path == "partial.bin"));

    // Only the first fragment reached storage.
    assert_eq!(fs.metadata("partial.bin").unwrap().size, F as u64);
}

#[test]
fn rewriting_a_path_keeps_its_record() {
    let fs = SqliteFs::open_in_memory().unwrap();
    write_file(&fs, "same.txt", b"first version");
    write_file(&fs, "same.txt", b"second version");

    let entries = fs.read_dir("/").unwrap().collect_all().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(fs.read_to_string("same.txt").unwrap(), "second version");
}

#[test]
fn shorter_rewrite_replaces_all_content() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("rewrite.db");
    let fs = SqliteFs::open_database(&db, StoreOptions::default()).unwrap();
    write_file(&fs, "f.bin", &vec![b'O'; 3 * F]);
    assert_eq!(fragment_layout(&db, "f.bin").len(), 3);

    write_file(&fs, "f.bin", b"new");
    assert_eq!(fs.read_all("f.bin").unwrap(), b"new");
    assert_eq!(fs.metadata("f.bin").unwrap().size, 3);
    assert_eq!(fragment_layout(&db, "f.bin"), vec![(0, 3)]);
    let mut handle = fs.open("f.bin").unwrap();
    assert_eq!(read_to_end(&mut handle, 4096), b"new");

    write_file(&fs, "f.bin", b"");
    assert!(fs.read_all("f.bin").unwrap().is_empty());
    assert_eq!(fs.metadata("f.bin").unwrap().size, 0);
    assert!(fragment_layout(&db, "f.bin").is_empty());
}

#[test]
fn serialized_writers_never_interleave() {
    let log = Arc::new(Log::default());
    let backend = SqliteBackend::open_in_memory()
        .unwrap()
        .layer(RecordingLayer(log.clone()));
    let options = StoreOptions {
        queue_capacity: 1,
        ..StoreOptions::default()
    };
    let fs = Arc::new(SqliteFs::with_backend(backend, options).unwrap());
    let len = 5 * F + 7;

    let writers: Vec<_> = ["left.bin", "right.bin"]
        .into_iter()
        .map(|path| {
            let fs = fs.clone();
            std::thread::spawn(move || {
                let data = pattern(len);
                let mut w = fs.new_writer(path).unwrap();
                for chunk in data.chunks(1000) {
                    w.write_all(chunk).unwrap();
                }
                w.close().unwrap();
            })
        })
        .collect();
    for w in writers {
        w.join().unwrap();
    }

    assert_eq!(log.max_in_flight.load(Ordering::SeqCst), 1);

    let events = log.events.lock().clone();
    for path in ["left.bin", "right.bin"] {
        let id = events
            .iter()
            .find_map(|e| match e {
                Event::Create { path: p, id } if p == path => Some(*id),
                _ => None,
            })
            .unwrap();
        let fragments: Vec<(u64, usize)> = events
            .iter()
            .filter_map(|e| match e {
                Event::Fragment {
                    file_id,
                    index,
                    len,
                } if *file_id == id => Some((*index, *len)),
                _ => None,
            })
            .collect();
        let expected: Vec<(u64, usize)> = (0..6u64)
            .map(|i| (i, if i < 5 { F } else { 7 }))
            .collect();
        assert_eq!(fragments, expected, "{path}");
        assert_eq!(fs.read_all(path).unwrap(), pattern(len));
    }
}

#[test]
fn reads_run_alongside_writes() {
    let fs = Arc::new(SqliteFs::open_in_memory().unwrap());
    write_file(&fs, "stable.bin", &pattern(2 * F));

    let writer = {
        let fs = fs.clone();
        std::thread::spawn(move || write_file(&fs, "busy.bin", &pattern(8 * F)))
    };
    for _ in 0..20 {
        let mut h = fs.open("stable.bin").unwrap();
        assert_eq!(read_to_end(&mut h, 7000), pattern(2 * F));
    }
    writer.join().unwrap();
    assert_eq!(fs.metadata("busy.bin").unwrap().size, (8 * F) as u64);
}

// =============================================================================
// Directories
// =============================================================================

#[test]
fn root_exists_without_files() {
    let fs = SqliteFs::open_in_memory().unwrap();
    let meta = fs.metadata("/").unwrap();
    assert!(meta.is_dir);
    assert_eq!(meta.name, "/");
    assert!(fs.read_dir("").unwrap().collect_all().unwrap().is_empty());
}

#[test]
fn root_listing_infers_directories() {
    let fs = SqliteFs::open_in_memory().unwrap();
    write_file(&fs, "a.txt", b"abc");
    write_file(&fs, "b/c.txt", b"hi");

    let mut root = fs.open("/").unwrap();
    let entries = root.read_dir(0).unwrap();
    let summary: Vec<(&str, bool)> = entries
        .iter()
        .map(|e| (e.name.as_str(), e.is_dir))
        .collect();
    assert_eq!(summary, vec![("a.txt", false), ("b", true)]);
    assert!(entries.iter().all(|e| !e.name.is_empty() && e.name != "/"));
}

#[test]
fn directory_listing_reports_sizes() {
    let fs = SqliteFs::open_in_memory().unwrap();
    write_file(&fs, "dir/file.txt", b"hi");

    let mut dir = fs.open("dir").unwrap();
    let entries = dir.read_dir(0).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].name, "file.txt");
    assert_eq!(entries[0].size, 2);
    assert!(!entries[0].is_dir);

    let meta = dir.stat().unwrap();
    assert!(meta.is_dir);
    assert_eq!(meta.name, "dir");
}

#[test]
fn bounded_listing_advances() {
    let fs = SqliteFs::open_in_memory().unwrap();
    for name in ["p/1", "p/2", "p/3", "p/4/x", "p/5"] {
        write_file(&fs, name, b"-");
    }

    let mut dir = fs.open("/p").unwrap();
    let mut seen = Vec::new();
    loop {
        let page = dir.read_dir(2).unwrap();
        if page.is_empty() {
            break;
        }
        assert!(page.len() <= 2);
        seen.extend(page.into_iter().map(|e| e.name));
    }
    assert_eq!(seen, ["1", "2", "3", "4", "5"]);
}

#[test]
fn listing_a_file_is_not_a_directory() {
    let fs = SqliteFs::open_in_memory().unwrap();
    write_file(&fs, "plain.txt", b"x");
    let mut h = fs.open("plain.txt").unwrap();
    assert!(matches!(h.read_dir(0), Err(FsError::NotADirectory { .. })));
}

#[test]
fn missing_paths_are_not_found() {
    let fs = SqliteFs::open_in_memory().unwrap();
    write_file(&fs, "dir/file.txt", b"hi");
    assert!(fs.open("missing.txt").unwrap_err().is_not_found());
    assert!(fs.open("di").unwrap_err().is_not_found());
    assert!(fs.read_dir("/nope").unwrap_err().is_not_found());

    let io_err: std::io::Error = fs.open("missing.txt").unwrap_err().into();
    assert_eq!(io_err.kind(), std::io::ErrorKind::NotFound);
}

#[test]
fn prefix_names_are_matched_literally() {
    let fs = SqliteFs::open_in_memory().unwrap();
    write_file(&fs, "100%/a_b.txt", b"x");
    assert!(fs.is_dir("100%").unwrap());
    assert!(!fs.is_dir("100_").unwrap());
    assert!(!fs.exists("100%/a%b.txt").unwrap());
}

// =============================================================================
// Store lifecycle
// =============================================================================

#[test]
fn close_drains_pending_commits() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("drain.db");
    let fs = SqliteFs::open_database(&db, StoreOptions::default()).unwrap();
    write_file(&fs, "done.bin", &pattern(F + 1));
    fs.close();

    assert!(matches!(fs.new_writer("x"), Err(FsError::StoreClosed { .. })));
    assert_eq!(fragment_layout(&db, "done.bin").len(), 2);
}

#[test]
fn mime_type_is_recorded() {
    let fs = SqliteFs::open_in_memory().unwrap();
    write_file(&fs, "img/photo.jpg", b"\xff\xd8");
    write_file(&fs, "blob.unknownext", b"?");

    assert_eq!(fs.open("img/photo.jpg").unwrap().mime_type(), Some("image/jpeg"));
    assert_eq!(
        fs.metadata("blob.unknownext").unwrap().mime_type.as_deref(),
        Some(DEFAULT_MIME_TYPE)
    );
}

#[test]
fn logs_can_be_captured() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("sqlitefs=trace")
        .with_test_writer()
        .try_init();
    let options = StoreOptions {
        trace_storage: true,
        ..StoreOptions::default()
    };
    let fs = SqliteFs::with_backend(SqliteBackend::open_in_memory().unwrap(), options).unwrap();
    write_file(&fs, "traced.txt", b"hello");
    assert_eq!(fs.read_to_string("traced.txt").unwrap(), "hello");
}
