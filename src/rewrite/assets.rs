use crate::config::types::Configuration;
use crate::error::Result;
use crate::rules::{apply_to_bytes, apply_to_text};
use std::collections::BTreeMap;

/// Content returned by an [`Asset`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetContent {
	Text(String),
	Bytes(Vec<u8>),
	/// Content of a kind this crate doesn't rewrite.
	Opaque,
}

/// An in-memory build output.
///
/// Build tools implement this for their own asset type; rewritten assets are
/// stored back as [`MemoryAsset`].
pub trait Asset {
	/// Current content.
	fn content(&self) -> AssetContent;

	/// Length of the content in bytes.
	fn length(&self) -> usize;
}

/// Build tool assets keyed by output file name.
pub type AssetMap = BTreeMap<String, Box<dyn Asset>>;

/// What the emit hook receives from the build tool.
#[derive(Default)]
pub struct Compilation {
	pub assets: AssetMap,
}

impl Compilation {
	pub fn new(assets: AssetMap) -> Self {
		Compilation { assets }
	}
}

/// An asset held entirely in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryAsset {
	content: AssetContent,
}

impl MemoryAsset {
	pub fn new(content: AssetContent) -> Self {
		MemoryAsset { content }
	}

	pub fn text(text: impl Into<String>) -> Self {
		MemoryAsset::new(AssetContent::Text(text.into()))
	}

	pub fn bytes(bytes: impl Into<Vec<u8>>) -> Self {
		MemoryAsset::new(AssetContent::Bytes(bytes.into()))
	}
}

impl Asset for MemoryAsset {
	fn content(&self) -> AssetContent {
		self.content.clone()
	}

	fn length(&self) -> usize {
		match &self.content {
			AssetContent::Text(text) => text.len(),
			AssetContent::Bytes(bytes) => bytes.len(),
			AssetContent::Opaque => 0,
		}
	}
}

/// Extension of an asset name: the text after the last `.` of its last `/`
/// segment. Unlike files on disk, a leading dot counts, so `.env` has `env`.
fn asset_extension(name: &str) -> Option<&str> {
	let base = name.rsplit_once('/').map_or(name, |(_, base)| base);
	let (_, ext) = base.rsplit_once('.')?;
	if ext.is_empty() {
		return None;
	}
	Some(ext)
}

/// Rewrite every asset whose extension is configured.
///
/// Text and byte content go through the matching replacer and the entry is
/// replaced by a [`MemoryAsset`] of the same kind. Opaque assets are left
/// as they are. Returns the names of the rewritten assets.
pub fn rewrite_assets(assets: &mut AssetMap, config: &Configuration) -> Result<Vec<String>> {
	let keys: Vec<String> = assets
		.keys()
		.filter(|name| asset_extension(name).is_some_and(|ext| config.has_extension(ext)))
		.cloned()
		.collect();
	tracing::info!(assets = ?keys, "filter assets by extension");

	let mut rewritten = Vec::with_capacity(keys.len());
	for key in keys {
		let Some(asset) = assets.get(&key) else {
			continue;
		};

		let out = match asset.content() {
			AssetContent::Text(text) => AssetContent::Text(apply_to_text(&text, &config.rules)?),
			AssetContent::Bytes(bytes) => {
				AssetContent::Bytes(apply_to_bytes(&bytes, &config.rules)?)
			}
			AssetContent::Opaque => {
				tracing::debug!(asset = %key, "skipping asset with opaque content");
				continue;
			}
		};

		assets.insert(key.clone(), Box::new(MemoryAsset::new(out)));
		rewritten.push(key);
	}

	Ok(rewritten)
}
