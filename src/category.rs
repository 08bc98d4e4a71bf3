//! Asset categories and their on-disk layout
//!
//! Each category owns three locations relative to a tree root: the folder
//! its asset files live in, the folder its per-asset config fragments live
//! in, and the name of the consolidated document the merge step produces.

use std::fmt;
use std::path::PathBuf;

/// Name prefix carried by consolidated documents. The merge step skips any
/// file already carrying it so a consolidated document is never re-merged
/// into itself.
pub const MERGED_PREFIX: &str = "merged_";

/// An asset category with its own configuration bundle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Textures,
    Backgrounds,
    Audio,
}

impl Category {
    /// All categories, in consolidation order
    pub const ALL: [Category; 3] = [Category::Textures, Category::Backgrounds, Category::Audio];

    /// Asset folder, relative to a tree root
    pub fn asset_dir(self) -> PathBuf {
        match self {
            Category::Textures => PathBuf::from("textures"),
            Category::Backgrounds => ["textures", "backgrounds"].iter().collect(),
            Category::Audio => PathBuf::from("audio"),
        }
    }

    /// Config-fragment folder, relative to a tree root
    pub fn config_dir(self) -> PathBuf {
        match self {
            Category::Textures => ["config", "textures_properties"].iter().collect(),
            Category::Backgrounds => {
                ["config", "textures_properties", "backgrounds_properties"]
                    .iter()
                    .collect()
            }
            Category::Audio => ["config", "audio_properties"].iter().collect(),
        }
    }

    /// File name of the consolidated per-category document
    pub fn merged_file_name(self) -> &'static str {
        match self {
            Category::Textures => "merged_textures.yaml",
            Category::Backgrounds => "merged_backgrounds.yaml",
            Category::Audio => "merged_audio.yaml",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Category::Textures => "textures",
            Category::Backgrounds => "backgrounds",
            Category::Audio => "audio",
        })
    }
}
