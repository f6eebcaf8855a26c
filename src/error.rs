use std::path::PathBuf;

/// Library-level structured errors for content-replace.
///
/// Use `thiserror` for structured errors that library consumers can match on.
/// The CLI binary wraps these with `anyhow` for rich context chains.
#[derive(Debug, thiserror::Error)]
pub enum ReplaceError {
	#[error("Options file not found: {path}")]
	ConfigNotFound { path: PathBuf },

	#[error("Failed to read options file: {path}")]
	ConfigReadError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse options file: {path}")]
	ConfigParseError {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	#[error("Invalid regex pattern in rule: {pattern}")]
	InvalidRegex {
		pattern: String,
		#[source]
		source: regex::Error,
	},

	#[error("Failed to read file: {path}")]
	FileReadError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to write file: {path}")]
	FileWriteError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to walk directory: {root}")]
	WalkError {
		root: PathBuf,
		#[source]
		source: walkdir::Error,
	},

	#[error("Root path is not a directory: {path}")]
	NotADirectory { path: PathBuf },
}

/// Result type alias using ReplaceError.
pub type Result<T> = std::result::Result<T, ReplaceError>;
