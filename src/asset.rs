//! Files observed in a source tree

use std::path::{Path, PathBuf};

use crate::normalize::canonical_key;

/// A file discovered during a tree walk. Immutable once discovered; both
/// scan phases describe files through this type so the canonical key is
/// derived exactly once, the same way, on each side of the diff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetFile {
    /// Absolute path of the file
    pub abs_path: PathBuf,
    /// Path relative to the tree root it was discovered under
    pub rel_path: PathBuf,
    /// Canonical key the file is matched by
    pub canonical_key: String,
}

impl AssetFile {
    /// Describe a file found under `root`. Returns `None` when `abs_path`
    /// is not inside `root`.
    pub fn discover(root: &Path, abs_path: &Path) -> Option<Self> {
        let rel_path = abs_path.strip_prefix(root).ok()?.to_path_buf();
        let canonical_key = canonical_key(&rel_path);
        Some(Self {
            abs_path: abs_path.to_path_buf(),
            rel_path,
            canonical_key,
        })
    }
}
