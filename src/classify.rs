//! Modified-tree classification and survivor copy
//!
//! Walks the modified tree in parallel, classifies every file against the
//! baseline index, and copies Changed/New/AlwaysCopy files into the output
//! tree at their modified-tree relative path. Unchanged files are not
//! copied and leave no trace in the output tree.

use std::fs;
use std::io;
use std::path::Path;
use std::sync::{Mutex, PoisonError};

use ignore::{WalkBuilder, WalkState};
use serde::Serialize;
use tracing::{error, info, warn};

use crate::asset::AssetFile;
use crate::error::{DeltaError, DeltaResult};
use crate::hash::digest_file;
use crate::index::BaselineIndex;

/// How one modified-tree file relates to the baseline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Same canonical key, equal content digest; not copied
    Unchanged,
    /// Same canonical key, different content digest
    Changed,
    /// Canonical key absent from the baseline index
    New,
    /// The asset manifest; copied regardless of baseline state
    AlwaysCopy,
}

/// Per-class file counts for one classification pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DeltaSummary {
    pub new: usize,
    pub changed: usize,
    pub unchanged: usize,
    pub always_copy: usize,
    /// Files whose copy failed; the failure is logged, the run continues
    pub failed: usize,
}

impl DeltaSummary {
    /// Files that reached the output tree
    pub fn copied(&self) -> usize {
        self.new + self.changed + self.always_copy
    }

    /// Every file the pass observed
    pub fn total(&self) -> usize {
        self.copied() + self.unchanged + self.failed
    }

    fn record(&mut self, classification: Classification) {
        match classification {
            Classification::Unchanged => self.unchanged += 1,
            Classification::Changed => self.changed += 1,
            Classification::New => self.new += 1,
            Classification::AlwaysCopy => self.always_copy += 1,
        }
    }
}

/// Classifies modified-tree files against a completed baseline index
pub struct DeltaClassifier<'a> {
    index: &'a BaselineIndex,
    manifest_name: String,
    threads: usize,
}

impl<'a> DeltaClassifier<'a> {
    pub fn new(index: &'a BaselineIndex, manifest_name: impl Into<String>, threads: usize) -> Self {
        Self {
            index,
            manifest_name: manifest_name.into(),
            threads,
        }
    }

    /// Classify one discovered file. Pure apart from reading the two
    /// files' bytes.
    pub fn classify(&self, asset: &AssetFile) -> Classification {
        if asset.canonical_key.eq_ignore_ascii_case(&self.manifest_name) {
            return Classification::AlwaysCopy;
        }

        match self.index.get(&asset.canonical_key) {
            None => Classification::New,
            Some(baseline) => {
                if digest_file(baseline) == digest_file(&asset.abs_path) {
                    Classification::Unchanged
                } else {
                    Classification::Changed
                }
            }
        }
    }

    /// Walk `modified_root` with the configured worker count, classify every
    /// file, and copy survivors under `output_root`. Per-file failures are
    /// logged and counted; only a missing modified root aborts.
    pub fn classify_tree(
        &self,
        modified_root: &Path,
        output_root: &Path,
    ) -> DeltaResult<DeltaSummary> {
        if !modified_root.is_dir() {
            return Err(DeltaError::MissingTree {
                path: modified_root.to_path_buf(),
            });
        }

        let summary: Mutex<DeltaSummary> = Mutex::new(DeltaSummary::default());

        let walker = WalkBuilder::new(modified_root)
            .standard_filters(false)
            .follow_links(false)
            .threads(self.threads)
            .build_parallel();

        walker.run(|| {
            Box::new(|result| {
                let entry = match result {
                    Ok(entry) => entry,
                    Err(err) => {
                        warn!("walk error in modified tree: {err}");
                        return WalkState::Continue;
                    }
                };
                if !entry.file_type().is_some_and(|t| t.is_file()) {
                    return WalkState::Continue;
                }

                let Some(asset) = AssetFile::discover(modified_root, entry.path()) else {
                    return WalkState::Continue;
                };

                let classification = self.classify(&asset);
                let rel = asset.rel_path.as_path();
                match classification {
                    Classification::Unchanged => {}
                    Classification::Changed => info!("file modified: {}", rel.display()),
                    Classification::New => info!("new file: {}", rel.display()),
                    Classification::AlwaysCopy => info!("copying manifest: {}", rel.display()),
                }

                let outcome = if classification == Classification::Unchanged {
                    Ok(())
                } else {
                    copy_into(&asset.abs_path, &output_root.join(rel))
                };

                let mut summary = summary.lock().unwrap_or_else(PoisonError::into_inner);
                match outcome {
                    Ok(()) => summary.record(classification),
                    Err(err) => {
                        error!("failed to copy {}: {err}", rel.display());
                        summary.failed += 1;
                    }
                }
                WalkState::Continue
            })
        });

        Ok(summary
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner))
    }
}

/// Copy `src` to `dest`, creating intermediate directories and overwriting
/// any existing destination.
fn copy_into(src: &Path, dest: &Path) -> io::Result<()> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::copy(src, dest)?;
    Ok(())
}
