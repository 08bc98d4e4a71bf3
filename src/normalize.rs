//! Canonical asset key derivation
//!
//! Frame-split sprite exports produce one physical file per frame
//! (`sHero_f0.png`, `sHero_f1.png`); all frames belong to one logical asset
//! keyed `sHero`. Files under a `backgrounds` directory keep their literal
//! file name as the key, even when it happens to contain the frame marker.
//!
//! The same derivation runs when indexing the baseline tree and when
//! classifying the modified tree; baseline/modified matching depends on
//! that symmetry.

use std::ffi::OsStr;
use std::path::Path;

/// Directory segment whose files are exempt from frame collapsing
const BACKGROUNDS_SEGMENT: &str = "backgrounds";

/// Derive the canonical key for a file, given its path relative to the
/// tree root it was discovered under.
pub fn canonical_key(rel_path: &Path) -> String {
    let name = match rel_path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => return String::new(),
    };

    if under_backgrounds(rel_path) {
        return name;
    }

    match frame_marker_index(&name) {
        Some(idx) => name[..idx].to_string(),
        None => name,
    }
}

/// Byte offset of the first `_f<digit>` marker in a file name, if any
fn frame_marker_index(name: &str) -> Option<usize> {
    let bytes = name.as_bytes();
    (0..bytes.len()).find(|&i| {
        bytes[i..].starts_with(b"_f") && bytes.get(i + 2).is_some_and(u8::is_ascii_digit)
    })
}

/// True when any directory segment of the relative path is `backgrounds`.
/// Only directories count; a file named `backgrounds` is still collapsed.
fn under_backgrounds(rel_path: &Path) -> bool {
    rel_path.parent().is_some_and(|dir| {
        dir.components()
            .any(|c| c.as_os_str() == OsStr::new(BACKGROUNDS_SEGMENT))
    })
}
