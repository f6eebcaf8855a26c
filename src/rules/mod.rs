//! Content substitution for content-replace.
//!
//! Rules are regex substitutions applied in order, first match only, to text
//! or to single-byte-per-char byte payloads.

pub mod replacer;

pub use replacer::{Substitution, apply_to_bytes, apply_to_text};
