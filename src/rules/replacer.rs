use crate::config::types::Rule;
use crate::error::{Result, ReplaceError};
use regex::Regex;

/// A compiled rule.
#[derive(Debug)]
pub struct Substitution {
	/// The pattern to match.
	pub pattern: Regex,

	/// The replacement string.
	pub replacement: String,
}

impl Substitution {
	/// Compile a rule's pattern.
	pub fn compile(rule: &Rule) -> Result<Self> {
		let pattern = Regex::new(&rule.pattern).map_err(|source| ReplaceError::InvalidRegex {
			pattern: rule.pattern.clone(),
			source,
		})?;

		Ok(Substitution {
			pattern,
			replacement: rule.replacement.clone(),
		})
	}

	/// Replace the first match only.
	pub fn apply(&self, input: &str) -> String {
		self.pattern.replace(input, &self.replacement).into_owned()
	}
}

/// Apply every rule, in order, to `text`.
///
/// Each rule replaces only its first match and sees the output of the
/// previous rule. Patterns are compiled on every call.
pub fn apply_to_text(text: &str, rules: &[Rule]) -> Result<String> {
	let mut out = text.to_string();
	for rule in rules {
		let sub = Substitution::compile(rule)?;
		out = sub.apply(&out);
		tracing::debug!(pattern = %rule.pattern, "applied rule");
	}
	Ok(out)
}

/// Apply every rule to a byte payload.
///
/// Each byte is read as the char with the same code point and each output
/// char is written back as its low 8 bits. This is only lossless for
/// single-byte encodings; multi-byte UTF-8 content gets mangled.
pub fn apply_to_bytes(bytes: &[u8], rules: &[Rule]) -> Result<Vec<u8>> {
	let text: String = bytes.iter().map(|&b| char::from(b)).collect();
	let out = apply_to_text(&text, rules)?;
	Ok(out.chars().map(|c| c as u32 as u8).collect())
}
