use crate::config::types::Options;
use crate::error::{Result, ReplaceError};
use std::path::Path;

/// Default options file name looked up in the working directory.
pub const OPTIONS_FILE_NAME: &str = ".content-replace.toml";

/// Parse an options file from the given path.
pub fn parse_options_file(path: &Path) -> Result<Options> {
	if !path.exists() {
		return Err(ReplaceError::ConfigNotFound {
			path: path.to_path_buf(),
		});
	}

	let content = std::fs::read_to_string(path).map_err(|source| ReplaceError::ConfigReadError {
		path: path.to_path_buf(),
		source,
	})?;

	parse_options_str(&content, path)
}

/// Parse options from a string (useful for testing).
///
/// Parsing only checks shape. Use
/// [`Configuration::from_options`](crate::config::Configuration::from_options)
/// to validate.
pub fn parse_options_str(content: &str, path: &Path) -> Result<Options> {
	toml::from_str(content).map_err(|source| ReplaceError::ConfigParseError {
		path: path.to_path_buf(),
		source,
	})
}

/// Template written by `content-replace --init`.
pub fn generate_init_template() -> String {
	r#"# content-replace options
#
# Extensions (without the leading dot) of the files to rewrite.
exts = ["js", "css"]

# Root directory of the build output. When set, files under it are
# rewritten in place; when empty, in-memory assets are rewritten instead.
path = "dist"

# Only rewrite files whose path contains one of these (relative to `path`).
includes = []

# Never rewrite files whose path contains one of these (relative to `path`).
excludes = []

# Rules apply in order. Only the first match of each pattern is replaced.
[[rules]]
test = "__VERSION__"
use = "1.0.0"
"#
	.to_string()
}
