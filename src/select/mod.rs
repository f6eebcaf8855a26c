//! File selection for on-disk rewriting.
//!
//! Files are chosen by extension, then narrowed by include and exclude path
//! fragments using plain substring matching.

pub mod selector;

pub use selector::{FileSelector, extension_of};
