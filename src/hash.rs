//! File content digests
//!
//! xxHash3 (64-bit) over the full file content. Digests exist only to
//! answer "same bytes or not" between a baseline file and a modified file;
//! nothing is persisted.

use std::fs;
use std::path::Path;

use tracing::{error, warn};
use xxhash_rust::xxh3::xxh3_64;

/// Outcome of digesting one file.
///
/// Compared structurally: two `Empty` files are equal, as are two
/// `Unreadable` files - an unreadable baseline/modified pair degrades to
/// "unchanged" instead of aborting the run. `Empty` and `Unreadable` never
/// equal `Hashed`, even for a content digest of numeric zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileDigest {
    /// xxHash3 of the full file content
    Hashed(u64),
    /// Zero-byte file
    Empty,
    /// The file could not be read; the failure has been logged
    Unreadable,
}

/// Digest one file. Never fails: empty and unreadable files produce their
/// own variants and a log line.
pub fn digest_file(path: &Path) -> FileDigest {
    match fs::read(path) {
        Ok(bytes) if bytes.is_empty() => {
            warn!("empty file: {}", path.display());
            FileDigest::Empty
        }
        Ok(bytes) => FileDigest::Hashed(xxh3_64(&bytes)),
        Err(err) => {
            error!("failed to hash {}: {err}", path.display());
            FileDigest::Unreadable
        }
    }
}
