use serde::Deserialize;
use std::fmt;

/// Raw options as supplied by the caller or read from an options file.
///
/// Every field is optional here so that missing values surface as a
/// [`Validation::Invalid`] outcome rather than a parse failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Options {
	/// Legacy single pattern, paired with `use`.
	pub test: Option<String>,

	/// Legacy single replacement, paired with `test`.
	#[serde(rename = "use")]
	pub use_: Option<String>,

	/// File extensions to rewrite, without the leading dot.
	pub exts: Option<Vec<String>>,

	/// Ordered substitution rules.
	pub rules: Option<Vec<RuleOptions>>,

	/// Root directory. When non-empty, files on disk are rewritten after the
	/// build instead of the in-memory assets.
	pub path: Option<String>,

	/// Path fragments (relative to `path`) a file must contain to be rewritten.
	pub includes: Option<Vec<String>>,

	/// Path fragments (relative to `path`) that exclude a file from rewriting.
	pub excludes: Option<Vec<String>>,
}

/// A `{ test, use }` pair inside the `rules` list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RuleOptions {
	pub test: String,

	#[serde(rename = "use")]
	pub use_: String,
}

/// A regex substitution rule. Rules apply in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
	/// Regex source.
	pub pattern: String,

	/// Replacement, with `$1`/`${name}` group expansion.
	pub replacement: String,
}

impl Rule {
	pub fn new(pattern: impl Into<String>, replacement: impl Into<String>) -> Self {
		Rule {
			pattern: pattern.into(),
			replacement: replacement.into(),
		}
	}
}

impl From<RuleOptions> for Rule {
	fn from(opts: RuleOptions) -> Self {
		Rule::new(opts.test, opts.use_)
	}
}

/// Where rewriting happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
	/// Rewrite build-tool assets before they are written out.
	InMemoryAsset,
	/// Rewrite files under the root path after the build completes.
	OnDisk,
}

impl Mode {
	pub fn as_str(&self) -> &'static str {
		match self {
			Mode::InMemoryAsset => "in-memory-asset",
			Mode::OnDisk => "on-disk",
		}
	}
}

/// Why a set of options was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
	MissingExtensions,
	EmptyExtensions,
	MissingRules,
}

impl fmt::Display for InvalidReason {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let msg = match self {
			InvalidReason::MissingExtensions => "`exts` is required",
			InvalidReason::EmptyExtensions => "`exts` must not be empty",
			InvalidReason::MissingRules => "either `test` and `use`, or a non-empty `rules` list, is required",
		};
		f.write_str(msg)
	}
}

/// Outcome of validating [`Options`].
#[derive(Debug, Clone)]
pub enum Validation {
	Valid(Configuration),
	Invalid(InvalidReason),
}

impl Validation {
	/// The configuration, if valid.
	pub fn ok(self) -> Option<Configuration> {
		match self {
			Validation::Valid(config) => Some(config),
			Validation::Invalid(_) => None,
		}
	}
}

/// Validated, immutable configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
	pub extensions: Vec<String>,
	pub rules: Vec<Rule>,
	pub root_path: String,
	pub include_paths: Vec<String>,
	pub exclude_paths: Vec<String>,
}

impl Configuration {
	/// Validate raw options and normalize them into a configuration.
	///
	/// A legacy `test`/`use` pair is appended after the explicit `rules`.
	pub fn from_options(options: Options) -> Validation {
		let extensions = match options.exts {
			None => return Validation::Invalid(InvalidReason::MissingExtensions),
			Some(exts) if exts.is_empty() => {
				return Validation::Invalid(InvalidReason::EmptyExtensions);
			}
			Some(exts) => exts,
		};

		let has_legacy = options.test.is_some() && options.use_.is_some();
		let mut rules: Vec<Rule> = options
			.rules
			.unwrap_or_default()
			.into_iter()
			.map(Rule::from)
			.collect();

		if !has_legacy && rules.is_empty() {
			return Validation::Invalid(InvalidReason::MissingRules);
		}

		// An empty legacy pattern or replacement passes validation but adds no rule.
		if let (Some(test), Some(use_)) = (options.test, options.use_)
			&& !test.is_empty()
			&& !use_.is_empty()
		{
			rules.push(Rule::new(test, use_));
		}

		Validation::Valid(Configuration {
			extensions,
			rules,
			root_path: options.path.unwrap_or_default(),
			include_paths: options.includes.unwrap_or_default(),
			exclude_paths: options.excludes.unwrap_or_default(),
		})
	}

	pub fn mode(&self) -> Mode {
		if self.root_path.is_empty() {
			Mode::InMemoryAsset
		} else {
			Mode::OnDisk
		}
	}

	/// Whether `ext` is one of the configured extensions.
	pub fn has_extension(&self, ext: &str) -> bool {
		self.extensions.iter().any(|e| e == ext)
	}
}
