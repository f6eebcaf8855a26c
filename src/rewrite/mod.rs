//! Rewriting of build outputs.
//!
//! This module handles:
//! - In-memory assets handed over by a build tool (emit phase)
//! - Files on disk under a root directory (done phase), with a dry-run preview

pub mod assets;
pub mod files;

pub use assets::{Asset, AssetContent, AssetMap, Compilation, MemoryAsset, rewrite_assets};
pub use files::{FileChange, preview_files, rewrite_files};
