use serde::{Deserialize, Serialize};

/// Opaque token sufficient to restore a selection.
///
/// Positions are node paths from the document root: each entry is a child
/// index, the last entry is an offset within the addressed node. The adaptor
/// layer never interprets them; only the selection host does.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bookmark {
	/// Anchor position.
	pub start: Vec<usize>,
	/// Focus position. Equal to `start` for a collapsed caret.
	pub end: Vec<usize>,
	/// Whether the selection runs from `start` to `end`.
	pub forward: bool,
}

impl Bookmark {
	/// Collapsed caret at `path`.
	pub fn caret(path: Vec<usize>) -> Self {
		Self {
			end: path.clone(),
			start: path,
			forward: true,
		}
	}

	/// Range selection from `start` to `end`.
	pub fn range(start: Vec<usize>, end: Vec<usize>) -> Self {
		Self {
			start,
			end,
			forward: true,
		}
	}

	/// Returns `true` if the bookmark marks a caret rather than a range.
	pub fn is_collapsed(&self) -> bool {
		self.start == self.end
	}
}
