//! Content values and the argument records that travel with them.

use serde::{Deserialize, Serialize};

use crate::Fragment;

/// Output format requested from a content getter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentFormat {
	/// Serialized markup after the output filters ran.
	#[default]
	Html,
	/// Serialized markup exactly as held by the document, no filters.
	Raw,
	/// Plain text.
	Text,
	/// The filtered content tree itself.
	Tree,
}

impl ContentFormat {
	/// Returns `true` for formats that are produced from the content tree.
	///
	/// These are the formats a collaboration engine can serve; the others
	/// need the local document.
	pub fn is_content_model(self) -> bool {
		matches!(self, ContentFormat::Html | ContentFormat::Tree)
	}
}

/// Editor content, either serialized markup or an already-parsed tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Content {
	/// Serialized markup or text.
	Markup(String),
	/// Parsed content tree.
	Tree(Fragment),
}

impl From<String> for Content {
	fn from(value: String) -> Self {
		Content::Markup(value)
	}
}

impl From<&str> for Content {
	fn from(value: &str) -> Self {
		Content::Markup(value.to_string())
	}
}

impl From<Fragment> for Content {
	fn from(value: Fragment) -> Self {
		Content::Tree(value)
	}
}

/// Options for reading content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentArgs {
	/// Suppress get-content events in the host.
	pub no_events: bool,
	/// Read the selection rather than the whole document.
	pub selection: bool,
}

/// Options for replacing the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetContentArgs {
	/// Format of the incoming markup.
	pub format: ContentFormat,
	/// Suppress set-content events in the host.
	pub no_events: bool,
	/// Leave the selection untouched after replacing content.
	pub no_selection: bool,
}

impl Default for SetContentArgs {
	fn default() -> Self {
		Self {
			format: ContentFormat::Html,
			no_events: false,
			no_selection: false,
		}
	}
}

impl SetContentArgs {
	/// Arguments used when restoring an undo level.
	pub fn raw() -> Self {
		Self {
			format: ContentFormat::Raw,
			no_events: true,
			no_selection: true,
		}
	}
}

/// Details for inserting content at the selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InsertDetails {
	/// Content comes from a paste.
	pub paste: bool,
	/// Merge adjacent matching inline formats.
	pub merge: bool,
}

/// Flags for the local markup parser.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
	/// Markup is a whole document body rather than an inline fragment.
	pub is_root_content: bool,
	/// Markup is about to be inserted into the document.
	pub insert: bool,
}
