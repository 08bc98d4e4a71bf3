//! Shared helpers for moddelta integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use moddelta::{Config, DeltaEngine, DeltaSummary, TreeLayout};

/// Write a file under `root`, creating parent directories.
pub fn write_file(root: &Path, rel: &str, contents: &[u8]) -> PathBuf {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, contents).unwrap();
    path
}

/// Relative paths of every file under `root`, sorted, `/`-separated.
pub fn list_files(root: &Path) -> Vec<String> {
    fn visit(root: &Path, dir: &Path, out: &mut Vec<String>) {
        let Ok(entries) = fs::read_dir(dir) else {
            return;
        };
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                visit(root, &path, out);
            } else {
                let rel = path.strip_prefix(root).unwrap();
                out.push(
                    rel.components()
                        .map(|c| c.as_os_str().to_string_lossy())
                        .collect::<Vec<_>>()
                        .join("/"),
                );
            }
        }
    }

    let mut out = Vec::new();
    visit(root, root, &mut out);
    out.sort();
    out
}

/// Baseline/modified/output trees rooted in one temp directory.
pub struct TreeFixture {
    _dir: TempDir,
    pub baseline: PathBuf,
    pub modified: PathBuf,
    pub output: PathBuf,
}

impl TreeFixture {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let baseline = dir.path().join("baseline");
        let modified = dir.path().join("modified");
        let output = dir.path().join("output");
        fs::create_dir_all(&baseline).unwrap();
        fs::create_dir_all(&modified).unwrap();
        Self {
            _dir: dir,
            baseline,
            modified,
            output,
        }
    }

    pub fn layout(&self) -> TreeLayout {
        TreeLayout {
            baseline_root: self.baseline.clone(),
            modified_root: self.modified.clone(),
            output_root: self.output.clone(),
        }
    }

    /// Run the full pipeline with default configuration.
    pub fn run(&self) -> DeltaSummary {
        self.run_with(Config::default())
    }

    /// Run the full pipeline with the given configuration.
    pub fn run_with(&self, config: Config) -> DeltaSummary {
        DeltaEngine::new(config, self.layout()).run().unwrap()
    }
}
