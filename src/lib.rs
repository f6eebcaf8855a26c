//! content-replace - regex content substitution for build outputs.
//!
//! This library provides the core functionality for content-replace, including:
//! - Options parsing and validation into an immutable configuration
//! - Ordered, first-match regex substitution over text and byte payloads
//! - File selection by extension plus include/exclude path fragments
//! - Rewriting of in-memory build assets or of files on disk
//! - A plugin that hooks into a build tool's emit or done phase
//!
//! # Example
//!
//! ```no_run
//! use content_replace::config::Options;
//! use content_replace::hooks::{BuildTool, ContentReplacePlugin, Hook};
//!
//! struct Compiler {
//!     hooks: Vec<Hook>,
//! }
//!
//! impl BuildTool for Compiler {
//!     fn register(&mut self, hook: Hook) {
//!         self.hooks.push(hook);
//!     }
//! }
//!
//! let options = Options {
//!     test: Some("__VERSION__".to_string()),
//!     use_: Some("1.0.0".to_string()),
//!     exts: Some(vec!["js".to_string()]),
//!     ..Default::default()
//! };
//!
//! let mut compiler = Compiler { hooks: Vec::new() };
//! ContentReplacePlugin::new(options).apply(&mut compiler);
//! ```

pub mod config;
pub mod error;
pub mod hooks;
pub mod rewrite;
pub mod rules;
pub mod select;

pub use error::{ReplaceError, Result};
