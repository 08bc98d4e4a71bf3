//! Moddelta - delta asset tree extraction and config consolidation
//!
//! Moddelta takes two full asset extractions of a game (a pristine baseline
//! and a modded one), keeps only the files the mod changed or added, and
//! rebuilds the per-category configuration bundles for the surviving
//! assets. The result is a minimal delta tree a mod loader can ship instead
//! of a full extraction.

pub mod asset;
pub mod category;
pub mod classify;
pub mod config;
pub mod consolidate;
pub mod engine;
pub mod error;
pub mod hash;
pub mod index;
pub mod normalize;
pub mod sanitize;
pub mod schema;

// Re-exports for convenience
pub use asset::AssetFile;
pub use category::{Category, MERGED_PREFIX};
pub use classify::{Classification, DeltaClassifier, DeltaSummary};
pub use config::Config;
pub use consolidate::ConfigConsolidator;
pub use engine::{worker_threads, DeltaEngine, TreeLayout};
pub use error::{DeltaError, DeltaResult};
pub use hash::{digest_file, FileDigest};
pub use index::BaselineIndex;
pub use normalize::canonical_key;
pub use sanitize::TreeSanitizer;
