//! Per-category config fragment consolidation
//!
//! After classification, each enabled category's fragments are filtered to
//! the assets that survived into the output tree, copied alongside them,
//! and concatenated into one consolidated document. Fragments for assets
//! the diff dropped never reach the consolidated document.

use std::collections::HashSet;
use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use tracing::{debug, error, info, warn};

use crate::category::{Category, MERGED_PREFIX};
use crate::error::DeltaResult;
use crate::schema::parse_fragment;

/// Filters, copies, and merges config fragments for one pipeline run
pub struct ConfigConsolidator<'a> {
    modified_root: &'a Path,
    output_root: &'a Path,
}

impl<'a> ConfigConsolidator<'a> {
    pub fn new(modified_root: &'a Path, output_root: &'a Path) -> Self {
        Self {
            modified_root,
            output_root,
        }
    }

    /// Copy surviving fragments into the output config folder, then merge
    /// them into the category's consolidated document.
    pub fn consolidate(&self, category: Category) -> DeltaResult<()> {
        info!("consolidating {category} configuration");
        self.copy_matching_fragments(category)?;
        self.merge_fragments(category)
    }

    /// A fragment survives when its file stem matches the stem of any file
    /// in the category's output asset folder. Categories whose asset folder
    /// never made it into the output tree have nothing to consolidate.
    fn copy_matching_fragments(&self, category: Category) -> DeltaResult<()> {
        let output_asset_dir = self.output_root.join(category.asset_dir());
        let modified_config_dir = self.modified_root.join(category.config_dir());
        if !output_asset_dir.is_dir() || !modified_config_dir.is_dir() {
            return Ok(());
        }

        let surviving = asset_stems(&output_asset_dir);
        let output_config_dir = self.output_root.join(category.config_dir());
        fs::create_dir_all(&output_config_dir)?;

        for fragment in yaml_files(&modified_config_dir)? {
            let Some(stem) = file_stem(&fragment) else {
                continue;
            };
            if !surviving.contains(&stem) {
                continue;
            }
            self.check_schema(category, &fragment);

            let Some(name) = fragment.file_name() else {
                continue;
            };
            match fs::copy(&fragment, output_config_dir.join(name)) {
                Ok(_) => debug!("copied config: {}", fragment.display()),
                Err(err) => error!("failed to copy {}: {err}", fragment.display()),
            }
        }
        Ok(())
    }

    /// Schema drift is a warning, not an error: the merge is textual and
    /// proceeds either way.
    fn check_schema(&self, category: Category, fragment: &Path) {
        let Ok(text) = fs::read_to_string(fragment) else {
            return;
        };
        if let Err(err) = parse_fragment(category, &text) {
            warn!(
                "fragment {} does not match the {category} schema: {err}",
                fragment.display()
            );
        }
    }

    fn merge_fragments(&self, category: Category) -> DeltaResult<()> {
        let config_dir = self.output_root.join(category.config_dir());
        if !config_dir.is_dir() {
            return Ok(());
        }

        let merged_path = config_dir.join(category.merged_file_name());
        if merged_path.exists() {
            warn!(
                "removing stale consolidated document: {}",
                merged_path.display()
            );
            if let Err(err) = fs::remove_file(&merged_path) {
                error!("failed to remove {}: {err}", merged_path.display());
            }
        }

        let mut fragments: Vec<PathBuf> = yaml_files(&config_dir)?
            .into_iter()
            .filter(|path| {
                file_name_str(path).is_some_and(|name| !name.starts_with(MERGED_PREFIX))
            })
            .collect();
        fragments.sort();

        if fragments.is_empty() {
            info!("no {category} config fragments to merge");
            return Ok(());
        }

        info!(
            "merging {} {category} config fragments into {}",
            fragments.len(),
            category.merged_file_name()
        );

        let mut document = String::new();
        let mut merged: Vec<&PathBuf> = Vec::with_capacity(fragments.len());
        for fragment in &fragments {
            match fs::read_to_string(fragment) {
                Ok(text) => {
                    document.push_str(&text);
                    document.push('\n');
                    merged.push(fragment);
                }
                Err(err) => error!("failed to read {}: {err}", fragment.display()),
            }
        }
        fs::write(&merged_path, document)?;

        // only fragments that made it into the document are removed
        for fragment in merged {
            if let Err(err) = fs::remove_file(fragment) {
                error!("failed to remove {}: {err}", fragment.display());
            }
        }
        Ok(())
    }
}

/// File stems of every file under `dir`, recursively. Extension-blind: an
/// asset surviving under any extension counts as present.
fn asset_stems(dir: &Path) -> HashSet<String> {
    let mut stems = HashSet::new();
    for entry in WalkBuilder::new(dir)
        .standard_filters(false)
        .follow_links(false)
        .build()
    {
        match entry {
            Ok(entry) => {
                if entry.file_type().is_some_and(|t| t.is_file()) {
                    if let Some(stem) = entry.path().file_stem() {
                        stems.insert(stem.to_string_lossy().into_owned());
                    }
                }
            }
            Err(err) => warn!("walk error in {}: {err}", dir.display()),
        }
    }
    stems
}

/// Top-level `*.yaml` files of `dir`, in no particular order
fn yaml_files(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file()
            && path
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml"))
        {
            files.push(path);
        }
    }
    Ok(files)
}

fn file_stem(path: &Path) -> Option<String> {
    path.file_stem().map(|s| s.to_string_lossy().into_owned())
}

fn file_name_str(path: &Path) -> Option<&str> {
    path.file_name().and_then(OsStr::to_str)
}
