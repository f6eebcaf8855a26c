use crate::config::types::Configuration;
use crate::error::{Result, ReplaceError};
use std::path::{MAIN_SEPARATOR, MAIN_SEPARATOR_STR, Path, PathBuf};
use walkdir::WalkDir;

/// Extension of a file name: the text after its last `.`.
///
/// `x.min.js` has extension `js`. Names without a dot, names whose only dot
/// leads (`.env`), and names ending in a dot have none.
pub fn extension_of(name: &str) -> Option<&str> {
	let (stem, ext) = name.rsplit_once('.')?;
	if stem.is_empty() || ext.is_empty() {
		return None;
	}
	Some(ext)
}

/// Picks the files under a root directory that should be rewritten.
#[derive(Debug)]
pub struct FileSelector<'a> {
	extensions: &'a [String],
	include_list: Vec<String>,
	exclude_list: Vec<String>,
}

impl<'a> FileSelector<'a> {
	/// Build a selector rooted at `root`.
	///
	/// Include and exclude entries are resolved against `root`. Exclude
	/// entries may use `/` regardless of platform.
	pub fn new(
		root: &Path,
		extensions: &'a [String],
		includes: &[String],
		excludes: &[String],
	) -> Self {
		let include_list = includes
			.iter()
			.map(|item| resolve_fragment(root, item))
			.collect();
		let exclude_list = excludes
			.iter()
			.map(|item| resolve_fragment(root, &item.replace('/', MAIN_SEPARATOR_STR)))
			.collect();

		FileSelector {
			extensions,
			include_list,
			exclude_list,
		}
	}

	/// Build a selector from a configuration's root path and filters.
	pub fn from_config(config: &'a Configuration) -> Self {
		FileSelector::new(
			Path::new(&config.root_path),
			&config.extensions,
			&config.include_paths,
			&config.exclude_paths,
		)
	}

	/// Recursively list the files under `root` whose extension is configured.
	///
	/// Order follows the directory listing; nothing is sorted.
	pub fn list_candidates(&self, root: &Path) -> Result<Vec<PathBuf>> {
		// A missing root is reported by the walk itself.
		if root.exists() && !root.is_dir() {
			return Err(ReplaceError::NotADirectory {
				path: root.to_path_buf(),
			});
		}

		let mut files = Vec::new();
		for entry in WalkDir::new(root).min_depth(1).follow_links(true) {
			let entry = entry.map_err(|source| ReplaceError::WalkError {
				root: root.to_path_buf(),
				source,
			})?;

			if entry.file_type().is_dir() {
				continue;
			}

			let name = entry.file_name().to_string_lossy();
			if extension_of(&name).is_some_and(|ext| self.extensions.iter().any(|e| e == ext)) {
				files.push(entry.path().to_path_buf());
			}
		}

		Ok(files)
	}

	/// Whether `file` passes the include filter. An empty list includes all.
	pub fn is_included(&self, file: &Path) -> bool {
		if self.include_list.is_empty() {
			return true;
		}
		let file = file.to_string_lossy();
		self.include_list.iter().any(|item| file.contains(item.as_str()))
	}

	/// Whether `file` matches the exclude filter. An empty list excludes none.
	pub fn is_excluded(&self, file: &Path) -> bool {
		let file = file.to_string_lossy();
		self.exclude_list.iter().any(|item| file.contains(item.as_str()))
	}

	/// Candidates under `root` that pass the include filter and are not excluded.
	pub fn select(&self, root: &Path) -> Result<Vec<PathBuf>> {
		let selected: Vec<PathBuf> = self
			.list_candidates(root)?
			.into_iter()
			.filter(|file| self.is_included(file) && !self.is_excluded(file))
			.collect();

		tracing::debug!(
			root = %root.display(),
			count = selected.len(),
			"selected files"
		);

		Ok(selected)
	}
}

/// `root` + separator + `fragment`, joined the way walked entry paths are.
fn resolve_fragment(root: &Path, fragment: &str) -> String {
	let fragment = fragment.trim_start_matches(MAIN_SEPARATOR);
	root.join(fragment).to_string_lossy().into_owned()
}
