//! Input-tree deletion and output-tree pruning
//!
//! Runs last. Deleting the export trees is irreversible and off by
//! default; pruning only touches directories the classification pass left
//! with no files in them.

use std::fs;
use std::path::Path;

use tracing::{debug, error, info, warn};

/// Post-run cleanup policy
#[derive(Debug, Clone, Copy, Default)]
pub struct TreeSanitizer {
    pub delete_baseline: bool,
    pub delete_modified: bool,
}

impl TreeSanitizer {
    pub fn new(delete_baseline: bool, delete_modified: bool) -> Self {
        Self {
            delete_baseline,
            delete_modified,
        }
    }

    /// Delete the input trees per policy, then prune empty directories out
    /// of the output tree. Failures are logged, never fatal.
    pub fn clean(&self, baseline_root: &Path, modified_root: &Path, output_root: &Path) {
        if !output_root.is_dir() {
            warn!("no output tree to clean: {}", output_root.display());
            return;
        }

        if self.delete_modified && modified_root.is_dir() {
            info!("deleting modified tree: {}", modified_root.display());
            if let Err(err) = fs::remove_dir_all(modified_root) {
                error!("failed to delete {}: {err}", modified_root.display());
            }
        }

        if self.delete_baseline && baseline_root.is_dir() {
            info!("deleting baseline tree: {}", baseline_root.display());
            if let Err(err) = fs::remove_dir_all(baseline_root) {
                error!("failed to delete {}: {err}", baseline_root.display());
            }
        }

        prune_empty_dirs(output_root, true);
    }
}

/// Depth-first removal of directories with zero remaining entries. The
/// output root itself is never deleted.
fn prune_empty_dirs(dir: &Path, is_root: bool) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            warn!("failed to read {}: {err}", dir.display());
            return;
        }
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            prune_empty_dirs(&path, false);
        }
    }

    if is_root {
        return;
    }

    match fs::read_dir(dir) {
        Ok(mut remaining) if remaining.next().is_none() => match fs::remove_dir(dir) {
            Ok(()) => debug!("deleted empty folder: {}", dir.display()),
            Err(err) => warn!("failed to delete {}: {err}", dir.display()),
        },
        _ => {}
    }
}
