//! Build tool integration for content-replace.
//!
//! This module handles:
//! - Choosing the emit or done phase from the configuration
//! - Registering the rewrite hook through the [`BuildTool`] trait

pub mod plugin;

pub use plugin::{BuildTool, ContentReplacePlugin, DoneCallback, EmitCallback, Hook, Phase};
