use crate::config::types::Configuration;
use crate::error::{Result, ReplaceError};
use crate::rules::apply_to_text;
use crate::select::FileSelector;
use std::path::{Path, PathBuf};

/// A file whose content would change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileChange {
	pub path: PathBuf,
	pub original: String,
	pub rewritten: String,
}

/// Rewrite the selected files under the configured root, in place.
///
/// Every selected file is overwritten, whether or not a rule matched. There
/// is no backup and no atomic swap. The first read or write failure aborts
/// the remaining files. Returns the paths written.
pub fn rewrite_files(config: &Configuration) -> Result<Vec<PathBuf>> {
	let root = Path::new(&config.root_path);
	let files = FileSelector::from_config(config).select(root)?;

	for file in &files {
		let original = read_text(file)?;
		let rewritten = apply_to_text(&original, &config.rules)?;
		std::fs::write(file, rewritten).map_err(|source| ReplaceError::FileWriteError {
			path: file.clone(),
			source,
		})?;
		tracing::info!(file = %file.display(), "rewrote file");
	}

	Ok(files)
}

/// Compute what [`rewrite_files`] would change, without writing anything.
pub fn preview_files(config: &Configuration) -> Result<Vec<FileChange>> {
	let root = Path::new(&config.root_path);
	let files = FileSelector::from_config(config).select(root)?;

	let mut changes = Vec::new();
	for path in files {
		let original = read_text(&path)?;
		let rewritten = apply_to_text(&original, &config.rules)?;
		if rewritten != original {
			changes.push(FileChange {
				path,
				original,
				rewritten,
			});
		}
	}

	Ok(changes)
}

/// Read a file as UTF-8, replacing invalid sequences.
fn read_text(path: &Path) -> Result<String> {
	let bytes = std::fs::read(path).map_err(|source| ReplaceError::FileReadError {
		path: path.to_path_buf(),
		source,
	})?;
	Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::config::types::Rule;
	use std::fs;

	fn config(root: &Path, rules: Vec<Rule>, includes: &[&str], excludes: &[&str]) -> Configuration {
		Configuration {
			extensions: vec!["js".to_string()],
			rules,
			root_path: root.to_string_lossy().into_owned(),
			include_paths: includes.iter().map(|s| s.to_string()).collect(),
			exclude_paths: excludes.iter().map(|s| s.to_string()).collect(),
		}
	}

	#[test]
	fn test_rewrite_round_trip() {
		let temp_dir = tempfile::tempdir().unwrap();
		let root = temp_dir.path();
		let original = "const v = \"__VERSION__\"; // __VERSION__\n";
		fs::write(root.join("app.js"), original).unwrap();

		let rules = vec![Rule::new("__VERSION__", "1.2.3"), Rule::new(r"//\s*(\S+)", "// was $1")];
		let config = config(root, rules.clone(), &[], &[]);
		let written = rewrite_files(&config).unwrap();

		assert_eq!(written, vec![root.join("app.js")]);
		assert_eq!(
			fs::read_to_string(root.join("app.js")).unwrap(),
			apply_to_text(original, &rules).unwrap()
		);
	}

	#[test]
	fn test_filtered_files_untouched() {
		let temp_dir = tempfile::tempdir().unwrap();
		let root = temp_dir.path();
		fs::create_dir_all(root.join("src")).unwrap();
		fs::create_dir_all(root.join("src/vendor")).unwrap();
		fs::write(root.join("src/a.js"), "foo").unwrap();
		fs::write(root.join("src/vendor/b.js"), "foo").unwrap();
		fs::write(root.join("c.js"), "foo").unwrap();
		fs::write(root.join("d.css"), "foo").unwrap();

		let config = config(root, vec![Rule::new("foo", "bar")], &["src"], &["src/vendor"]);
		rewrite_files(&config).unwrap();

		assert_eq!(fs::read_to_string(root.join("src/a.js")).unwrap(), "bar");
		assert_eq!(fs::read_to_string(root.join("src/vendor/b.js")).unwrap(), "foo");
		assert_eq!(fs::read_to_string(root.join("c.js")).unwrap(), "foo");
		assert_eq!(fs::read_to_string(root.join("d.css")).unwrap(), "foo");
	}

	#[test]
	fn test_preview_does_not_write() {
		let temp_dir = tempfile::tempdir().unwrap();
		let root = temp_dir.path();
		fs::write(root.join("a.js"), "foo foo").unwrap();
		fs::write(root.join("b.js"), "nothing here").unwrap();

		let config = config(root, vec![Rule::new("foo", "bar")], &[], &[]);
		let changes = preview_files(&config).unwrap();

		assert_eq!(
			changes,
			vec![FileChange {
				path: root.join("a.js"),
				original: "foo foo".to_string(),
				rewritten: "bar foo".to_string(),
			}]
		);
		assert_eq!(fs::read_to_string(root.join("a.js")).unwrap(), "foo foo");
	}

	#[test]
	fn test_missing_root_is_error() {
		let temp_dir = tempfile::tempdir().unwrap();
		let config = config(&temp_dir.path().join("missing"), vec![Rule::new("a", "b")], &[], &[]);

		assert!(rewrite_files(&config).is_err());
	}

	#[test]
	fn test_invalid_pattern_aborts_before_write() {
		let temp_dir = tempfile::tempdir().unwrap();
		let root = temp_dir.path();
		fs::write(root.join("a.js"), "foo").unwrap();

		let config = config(root, vec![Rule::new("[", "x")], &[], &[]);
		match rewrite_files(&config).unwrap_err() {
			ReplaceError::InvalidRegex { pattern, .. } => assert_eq!(pattern, "["),
			_ => panic!("Expected InvalidRegex error"),
		}
		assert_eq!(fs::read_to_string(root.join("a.js")).unwrap(), "foo");
	}
}
