//! Format invocation arguments.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Variables substituted into a format definition (e.g. a color value).
pub type FormatVars = BTreeMap<String, String>;

/// Explicit target of a format operation.
///
/// When absent, formats apply to the current selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatTarget {
	/// A single node addressed by its path from the root.
	Node(Vec<usize>),
	/// A range between two positions, each a path as in [`crate::Bookmark`].
	Range {
		/// Range start.
		start: Vec<usize>,
		/// Range end.
		end: Vec<usize>,
	},
}

/// Definition of a named format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatDefinition {
	/// Inline element to wrap with.
	pub inline: Option<String>,
	/// Block element to convert to.
	pub block: Option<String>,
	/// Classes to add.
	pub classes: Vec<String>,
	/// Inline styles to set; values may reference `%var` placeholders.
	pub styles: BTreeMap<String, String>,
	/// Attributes to set; values may reference `%var` placeholders.
	pub attributes: BTreeMap<String, String>,
}

/// Named format definitions known to the editor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormatRegistry {
	formats: BTreeMap<String, Vec<FormatDefinition>>,
}

impl FormatRegistry {
	/// Creates an empty registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers definitions under `name`, replacing earlier ones.
	pub fn register(&mut self, name: impl Into<String>, defs: Vec<FormatDefinition>) {
		self.formats.insert(name.into(), defs);
	}

	/// Returns the definitions registered under `name`.
	pub fn get(&self, name: &str) -> Option<&[FormatDefinition]> {
		self.formats.get(name).map(Vec::as_slice)
	}

	/// Returns `true` if `name` is registered.
	pub fn contains(&self, name: &str) -> bool {
		self.formats.contains_key(name)
	}
}
