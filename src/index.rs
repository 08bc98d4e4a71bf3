//! Baseline tree indexing
//!
//! Builds the canonical-key to baseline-path map the classifier reads.
//! The scan is parallel; the index is immutable once built. Multiple
//! physical baseline files sharing one canonical key (frame-split sprites)
//! collapse into a single entry: the lexicographically smallest path is
//! retained, independent of walk scheduling, so the retained path is
//! identical run to run.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use ignore::{WalkBuilder, WalkState};
use tracing::warn;

use crate::asset::AssetFile;
use crate::error::{DeltaError, DeltaResult};

/// Canonical key -> baseline path mapping for one baseline tree
#[derive(Debug, Default)]
pub struct BaselineIndex {
    entries: HashMap<String, PathBuf>,
}

impl BaselineIndex {
    /// Scan `root` recursively with `threads` workers and index every file.
    pub fn build(root: &Path, threads: usize) -> DeltaResult<Self> {
        if !root.is_dir() {
            return Err(DeltaError::MissingTree {
                path: root.to_path_buf(),
            });
        }

        let entries: Mutex<HashMap<String, PathBuf>> = Mutex::new(HashMap::new());

        let walker = WalkBuilder::new(root)
            .standard_filters(false)
            .follow_links(false)
            .threads(threads)
            .build_parallel();

        walker.run(|| {
            Box::new(|result| {
                let entry = match result {
                    Ok(entry) => entry,
                    Err(err) => {
                        warn!("walk error in baseline tree: {err}");
                        return WalkState::Continue;
                    }
                };
                if !entry.file_type().is_some_and(|t| t.is_file()) {
                    return WalkState::Continue;
                }

                let Some(asset) = AssetFile::discover(root, entry.path()) else {
                    return WalkState::Continue;
                };

                let mut map = entries.lock().unwrap_or_else(PoisonError::into_inner);
                match map.entry(asset.canonical_key) {
                    Entry::Occupied(mut slot) => {
                        if asset.abs_path < *slot.get() {
                            slot.insert(asset.abs_path);
                        }
                    }
                    Entry::Vacant(slot) => {
                        slot.insert(asset.abs_path);
                    }
                }
                WalkState::Continue
            })
        });

        Ok(Self {
            entries: entries
                .into_inner()
                .unwrap_or_else(PoisonError::into_inner),
        })
    }

    /// Baseline path retained for a canonical key
    pub fn get(&self, key: &str) -> Option<&Path> {
        self.entries.get(key).map(PathBuf::as_path)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
