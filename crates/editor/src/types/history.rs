//! Undo level types.
//!
//! An [`UndoLevel`] is one snapshot in the plain-mode history: the serialized
//! document plus the selection bookmarks needed to put the caret back where
//! it was. Collaboration engines own their own history; for them the adaptor
//! hands out [`UndoLevel::dummy`] sentinels that carry no content.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use vellum_primitives::Bookmark;


/// How an undo level stores the document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UndoLevelType {
	/// `content` holds a full-document serialization.
	#[default]
	Complete,
	/// `fragments` holds partial-content markers in document order.
	Fragmented,
}

/// Snapshot of the document and selection at one point in history.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UndoLevel {
	/// Storage kind.
	#[serde(rename = "type")]
	pub kind: UndoLevelType,
	/// Partial-content markers, only used by fragmented levels.
	pub fragments: Vec<String>,
	/// Serialized document, only used by complete levels.
	pub content: String,
	/// Selection when the level was captured.
	pub bookmark: Option<Bookmark>,
	/// Selection just before the change that followed this level.
	pub before_bookmark: Option<Bookmark>,
}

impl UndoLevel {
	/// Creates a complete level from a full-document serialization.
	pub fn complete(content: impl Into<String>, bookmark: Option<Bookmark>) -> Self {
		Self {
			kind: UndoLevelType::Complete,
			fragments: Vec::new(),
			content: content.into(),
			bookmark,
			before_bookmark: None,
		}
	}

	/// Creates a fragmented level.
	pub fn fragmented(fragments: Vec<String>, bookmark: Option<Bookmark>) -> Self {
		Self {
			kind: UndoLevelType::Fragmented,
			fragments,
			content: String::new(),
			bookmark,
			before_bookmark: None,
		}
	}

	/// Sentinel returned when a collaboration engine owns history.
	///
	/// Never replayed; its fields carry no meaning.
	pub fn dummy() -> Self {
		Self::default()
	}

	/// Returns `true` if this level has the shape of the dummy sentinel.
	pub fn is_dummy(&self) -> bool {
		*self == Self::dummy()
	}

	/// Document content this level restores.
	pub fn level_content(&self) -> Cow<'_, str> {
		match self.kind {
			UndoLevelType::Complete => Cow::Borrowed(&self.content),
			UndoLevelType::Fragmented => Cow::Owned(self.fragments.concat()),
		}
	}

	/// Returns `true` if both levels restore the same document content.
	///
	/// Bookmarks are ignored: a level that only moves the caret is not a
	/// change.
	pub fn is_eq(&self, other: &UndoLevel) -> bool {
		self.level_content() == other.level_content()
	}
}

/// Notifications emitted by the plain-mode history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UndoEvent {
	/// A level was committed.
	AddUndo {
		/// The committed level.
		level: UndoLevel,
		/// The level the cursor was on before the commit.
		last_level: Option<UndoLevel>,
	},
	/// The document changed relative to its first level.
	Change {
		/// The committed level.
		level: UndoLevel,
		/// The level the cursor was on before the commit.
		last_level: Option<UndoLevel>,
	},
	/// The cursor moved back and `level` was restored.
	Undo {
		/// The restored level.
		level: UndoLevel,
	},
	/// The cursor moved forward and `level` was restored.
	Redo {
		/// The restored level.
		level: UndoLevel,
	},
	/// All levels were discarded.
	ClearUndos,
}
