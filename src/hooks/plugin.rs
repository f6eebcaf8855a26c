use crate::config::types::{Configuration, Mode, Options};
use crate::error::Result;
use crate::rewrite::{Compilation, rewrite_assets, rewrite_files};

/// Build tool lifecycle point a hook runs at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
	/// Assets are final in memory but not yet written out.
	Emit,
	/// The whole build has finished.
	Done,
}

impl Phase {
	pub fn as_str(&self) -> &'static str {
		match self {
			Phase::Emit => "emit",
			Phase::Done => "done",
		}
	}
}

impl From<Mode> for Phase {
	fn from(mode: Mode) -> Self {
		match mode {
			Mode::InMemoryAsset => Phase::Emit,
			Mode::OnDisk => Phase::Done,
		}
	}
}

/// Callback for the emit phase.
pub type EmitCallback = Box<dyn FnMut(&mut Compilation) -> Result<()>>;

/// Callback for the done phase.
pub type DoneCallback = Box<dyn FnMut() -> Result<()>>;

/// A lifecycle hook. Returning `Ok(())` signals completion.
pub enum Hook {
	Emit(EmitCallback),
	Done(DoneCallback),
}

impl Hook {
	pub fn phase(&self) -> Phase {
		match self {
			Hook::Emit(_) => Phase::Emit,
			Hook::Done(_) => Phase::Done,
		}
	}
}

/// Hook registration offered by the build tool.
pub trait BuildTool {
	fn register(&mut self, hook: Hook);
}

/// Rewrites build output content once the build tool reaches the right phase.
///
/// Assets are rewritten in the emit phase when no root path is configured;
/// otherwise files under the root path are rewritten in the done phase.
#[derive(Debug, Clone)]
pub struct ContentReplacePlugin {
	config: Option<Configuration>,
}

impl ContentReplacePlugin {
	/// Create the plugin from raw options.
	///
	/// Invalid options produce an inert plugin that never registers a hook.
	/// Use [`Configuration::from_options`] to find out why options were
	/// rejected.
	pub fn new(options: Options) -> Self {
		ContentReplacePlugin {
			config: Configuration::from_options(options).ok(),
		}
	}

	pub fn from_config(config: Configuration) -> Self {
		ContentReplacePlugin {
			config: Some(config),
		}
	}

	pub fn config(&self) -> Option<&Configuration> {
		self.config.as_ref()
	}

	pub fn is_inert(&self) -> bool {
		self.config.is_none()
	}

	/// Phase the plugin hooks into, if any.
	pub fn phase(&self) -> Option<Phase> {
		self.config.as_ref().map(|config| Phase::from(config.mode()))
	}

	/// Register the plugin's single hook with the build tool.
	pub fn apply<T: BuildTool + ?Sized>(&self, tool: &mut T) {
		let Some(config) = self.config.clone() else {
			return;
		};

		let hook = match Phase::from(config.mode()) {
			Phase::Emit => Hook::Emit(Box::new(move |compilation: &mut Compilation| {
				rewrite_assets(&mut compilation.assets, &config)?;
				Ok(())
			})),
			Phase::Done => Hook::Done(Box::new(move || {
				rewrite_files(&config)?;
				Ok(())
			})),
		};

		tool.register(hook);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::rewrite::{AssetContent, AssetMap, MemoryAsset};
	use std::fs;

	#[derive(Default)]
	struct RecordingTool {
		hooks: Vec<Hook>,
	}

	impl BuildTool for RecordingTool {
		fn register(&mut self, hook: Hook) {
			self.hooks.push(hook);
		}
	}

	impl RecordingTool {
		fn emit(&mut self, compilation: &mut Compilation) {
			for hook in &mut self.hooks {
				if let Hook::Emit(callback) = hook {
					callback(&mut *compilation).unwrap();
				}
			}
		}

		fn done(&mut self) {
			for hook in &mut self.hooks {
				if let Hook::Done(callback) = hook {
					callback().unwrap();
				}
			}
		}
	}

	fn options(exts: Option<Vec<&str>>) -> Options {
		Options {
			test: Some("foo".to_string()),
			use_: Some("bar".to_string()),
			exts: exts.map(|list| list.into_iter().map(String::from).collect()),
			..Default::default()
		}
	}

	#[test]
	fn test_phase_as_str() {
		assert_eq!(Phase::Emit.as_str(), "emit");
		assert_eq!(Phase::Done.as_str(), "done");
	}

	#[test]
	fn test_missing_exts_registers_nothing() {
		let plugin = ContentReplacePlugin::new(options(None));
		let mut tool = RecordingTool::default();
		plugin.apply(&mut tool);

		assert!(plugin.is_inert());
		assert!(plugin.phase().is_none());
		assert!(tool.hooks.is_empty());
	}

	#[test]
	fn test_empty_exts_registers_nothing() {
		let plugin = ContentReplacePlugin::new(options(Some(vec![])));
		let mut tool = RecordingTool::default();
		plugin.apply(&mut tool);

		assert!(plugin.is_inert());
		assert!(tool.hooks.is_empty());
	}

	#[test]
	fn test_emit_phase_rewrites_assets() {
		let plugin = ContentReplacePlugin::new(options(Some(vec!["txt"])));
		let mut tool = RecordingTool::default();
		plugin.apply(&mut tool);

		assert_eq!(tool.hooks.len(), 1);
		assert_eq!(tool.hooks[0].phase(), Phase::Emit);

		let mut assets = AssetMap::new();
		assets.insert("a.txt".to_string(), Box::new(MemoryAsset::text("foo baz foo")));
		let mut compilation = Compilation::new(assets);
		tool.emit(&mut compilation);

		assert_eq!(
			compilation.assets["a.txt"].content(),
			AssetContent::Text("bar baz foo".to_string())
		);
	}

	#[test]
	fn test_done_phase_rewrites_files() {
		let temp_dir = tempfile::tempdir().unwrap();
		fs::write(temp_dir.path().join("a.txt"), "foo baz foo").unwrap();

		let mut opts = options(Some(vec!["txt"]));
		opts.path = Some(temp_dir.path().to_string_lossy().into_owned());
		let plugin = ContentReplacePlugin::new(opts);
		let mut tool = RecordingTool::default();
		plugin.apply(&mut tool);

		assert_eq!(plugin.phase(), Some(Phase::Done));
		assert_eq!(tool.hooks.len(), 1);
		assert_eq!(tool.hooks[0].phase(), Phase::Done);

		// Emit does nothing in on-disk mode.
		let mut compilation = Compilation::default();
		tool.emit(&mut compilation);
		assert_eq!(
			fs::read_to_string(temp_dir.path().join("a.txt")).unwrap(),
			"foo baz foo"
		);

		tool.done();
		assert_eq!(
			fs::read_to_string(temp_dir.path().join("a.txt")).unwrap(),
			"bar baz foo"
		);
	}
}
