//! Options loading and validation for content-replace.
//!
//! This module handles:
//! - TOML options file parsing
//! - Validation into an immutable [`Configuration`]
//! - Rule normalization (legacy `test`/`use` pair plus `rules`)

pub mod parser;
pub mod types;

pub use parser::{OPTIONS_FILE_NAME, generate_init_template, parse_options_file, parse_options_str};
pub use types::{Configuration, InvalidReason, Mode, Options, Rule, RuleOptions, Validation};
