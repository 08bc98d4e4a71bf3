//! Run configuration
//!
//! Loaded from a TOML file with environment overrides (MODDELTA_*). Every
//! section defaults, so a missing file means a full default run: all
//! categories enabled, input trees kept, `data.json` as the manifest.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::error::{DeltaError, DeltaResult};

fn default_true() -> bool {
    true
}

fn default_manifest_name() -> String {
    "data.json".to_string()
}

/// Per-category enablement flags
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoriesConfig {
    #[serde(default = "default_true")]
    pub textures: bool,

    #[serde(default = "default_true")]
    pub backgrounds: bool,

    #[serde(default = "default_true")]
    pub audio: bool,
}

impl Default for CategoriesConfig {
    fn default() -> Self {
        Self {
            textures: true,
            backgrounds: true,
            audio: true,
        }
    }
}

/// Input-tree cleanup policy; deletion is irreversible and off by default
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CleanupConfig {
    #[serde(default)]
    pub delete_baseline: bool,

    #[serde(default)]
    pub delete_modified: bool,
}

/// Manifest pass-through settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestConfig {
    /// File name copied regardless of diff state, matched case-insensitively
    #[serde(default = "default_manifest_name")]
    pub file_name: String,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            file_name: default_manifest_name(),
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub categories: CategoriesConfig,

    #[serde(default)]
    pub cleanup: CleanupConfig,

    #[serde(default)]
    pub manifest: ManifestConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> DeltaResult<Self> {
        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| DeltaError::InvalidConfig {
            file: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Load from `path` if it exists, otherwise defaults. Environment
    /// overrides apply either way.
    pub fn load_or_default(path: &Path) -> DeltaResult<Self> {
        let config = if path.exists() {
            Self::load(path)?
        } else {
            Self::default()
        };
        Ok(config.with_env_overrides())
    }

    /// Apply environment variable overrides (MODDELTA_* prefix)
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(val) = std::env::var("MODDELTA_DELETE_BASELINE") {
            self.cleanup.delete_baseline = parse_bool(&val);
        }

        if let Ok(val) = std::env::var("MODDELTA_DELETE_MODIFIED") {
            self.cleanup.delete_modified = parse_bool(&val);
        }

        if let Ok(val) = std::env::var("MODDELTA_MANIFEST") {
            if !val.trim().is_empty() {
                self.manifest.file_name = val;
            }
        }

        self
    }

    /// Enabled categories, in consolidation order
    pub fn enabled_categories(&self) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|&category| match category {
                Category::Textures => self.categories.textures,
                Category::Backgrounds => self.categories.backgrounds,
                Category::Audio => self.categories.audio,
            })
            .collect()
    }
}

fn parse_bool(val: &str) -> bool {
    val.to_lowercase() != "false" && val != "0"
}
