//! Pipeline orchestration
//!
//! `DeltaEngine` owns the run configuration and tree layout and executes
//! the phases in order: baseline indexing, modified-tree classification,
//! per-category config consolidation, cleanup. Indexing fully completes
//! before classification starts, and consolidation only reads the output
//! tree the classification pass produced.

use std::path::PathBuf;
use std::thread;

use tracing::info;

use crate::classify::{DeltaClassifier, DeltaSummary};
use crate::config::Config;
use crate::consolidate::ConfigConsolidator;
use crate::error::{DeltaError, DeltaResult};
use crate::index::BaselineIndex;
use crate::sanitize::TreeSanitizer;

/// The three directory trees a run operates on
#[derive(Debug, Clone)]
pub struct TreeLayout {
    /// Unmodified reference extraction
    pub baseline_root: PathBuf,
    /// Extraction to diff against the baseline
    pub modified_root: PathBuf,
    /// Receives only Changed/New/AlwaysCopy files
    pub output_root: PathBuf,
}

/// One pipeline run over a fixed configuration and tree layout
pub struct DeltaEngine {
    config: Config,
    layout: TreeLayout,
    threads: usize,
}

impl DeltaEngine {
    pub fn new(config: Config, layout: TreeLayout) -> Self {
        Self {
            config,
            layout,
            threads: worker_threads(),
        }
    }

    /// Run the full pipeline, returning the classification summary.
    pub fn run(&self) -> DeltaResult<DeltaSummary> {
        for root in [&self.layout.baseline_root, &self.layout.modified_root] {
            if !root.is_dir() {
                return Err(DeltaError::MissingTree { path: root.clone() });
            }
        }

        let index = BaselineIndex::build(&self.layout.baseline_root, self.threads)?;
        info!("indexed {} baseline assets", index.len());

        let classifier = DeltaClassifier::new(
            &index,
            self.config.manifest.file_name.clone(),
            self.threads,
        );
        let summary =
            classifier.classify_tree(&self.layout.modified_root, &self.layout.output_root)?;

        let consolidator =
            ConfigConsolidator::new(&self.layout.modified_root, &self.layout.output_root);
        for category in self.config.enabled_categories() {
            consolidator.consolidate(category)?;
        }

        TreeSanitizer::new(
            self.config.cleanup.delete_baseline,
            self.config.cleanup.delete_modified,
        )
        .clean(
            &self.layout.baseline_root,
            &self.layout.modified_root,
            &self.layout.output_root,
        );

        info!(
            "done, delta files are in {}",
            self.layout.output_root.display()
        );
        Ok(summary)
    }
}

/// One walker worker per available core, minus one for the coordinating
/// thread; never less than one.
pub fn worker_threads() -> usize {
    thread::available_parallelism().map_or(1, |n| n.get().saturating_sub(1).max(1))
}
