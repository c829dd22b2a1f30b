//! # MIME Resolution
//!
//! Strategy trait for mapping a file path to the MIME type recorded in
//! `file_metadata.mime_type`.
//!
//! The store records whatever the strategy returns and falls back to
//! [`DEFAULT_MIME_TYPE`] when it returns `None`. No platform MIME database
//! is consulted.
//!
//! ## Implementors
//!
//! - [`OctetStream`]: always `None`, i.e. everything is the default type
//! - [`CommonTypes`]: a small built-in extension table (the store default)
//! - any `Fn(&str) -> Option<String> + Send + Sync`

use crate::DEFAULT_MIME_TYPE;

/// Strategy for resolving a MIME type from a path.
///
/// # Example
///
/// ```rust
/// use sqlitefs::MimeResolver;
///
/// let by_suffix = |path: &str| path.ends_with(".md").then(|| "text/markdown".to_string());
/// assert_eq!(by_suffix.resolve("notes/a.md").as_deref(), Some("text/markdown"));
/// assert_eq!(by_suffix.mime_type("a.bin"), "application/octet-stream");
/// ```
pub trait MimeResolver: Send + Sync {
    /// MIME type for `path`, or `None` if unknown.
    fn resolve(&self, path: &str) -> Option<String>;

    /// MIME type for `path`, falling back to [`DEFAULT_MIME_TYPE`].
    fn mime_type(&self, path: &str) -> String {
        self.resolve(path)
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| DEFAULT_MIME_TYPE.to_string())
    }
}

impl<F> MimeResolver for F
where
    F: Fn(&str) -> Option<String> + Send + Sync,
{
    fn resolve(&self, path: &str) -> Option<String> {
        self(path)
    }
}

/// Resolver that knows no types.
#[derive(Debug, Clone, Copy, Default)]
pub struct OctetStream;

impl MimeResolver for OctetStream {
    fn resolve(&self, _path: &str) -> Option<String> {
        None
    }
}

/// Resolver over a fixed table of common extensions (case-insensitive).
#[derive(Debug, Clone, Copy, Default)]
pub struct CommonTypes;

const COMMON_TYPES: &[(&str, &str)] = &[
    ("css", "text/css; charset=utf-8"),
    ("csv", "text/csv; charset=utf-8"),
    ("gif", "image/gif"),
    ("htm", "text/html; charset=utf-8"),
    ("html", "text/html; charset=utf-8"),
    ("jpeg", "image/jpeg"),
    ("jpg", "image/jpeg"),
    ("js", "text/javascript; charset=utf-8"),
    ("json", "application/json"),
    ("md", "text/markdown; charset=utf-8"),
    ("mjs", "text/javascript; charset=utf-8"),
    ("pdf", "application/pdf"),
    ("png", "image/png"),
    ("svg", "image/svg+xml"),
    ("txt", "text/plain; charset=utf-8"),
    ("wasm", "application/wasm"),
    ("webp", "image/webp"),
    ("xml", "text/xml; charset=utf-8"),
    ("zip", "application/zip"),
];

/// Extension of the last path segment, without the dot.
fn extension(path: &str) -> Option<&str> {
    let name = path.rsplit('/').next().unwrap_or(path);
    match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => Some(ext),
        _ => None,
    }
}

impl MimeResolver for CommonTypes {
    fn resolve(&self, path: &str) -> Option<String> {
        let ext = extension(path)?.to_ascii_lowercase();
        COMMON_TYPES
            .binary_search_by(|(e, _)| (*e).cmp(ext.as_str()))
            .ok()
            .map(|i| COMMON_TYPES[i].1.to_string())
    }
}
