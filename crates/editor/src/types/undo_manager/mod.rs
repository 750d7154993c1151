//! Plain-mode undo level store.
//!
//! The [`UndoManager`] owns the linear level history and the cursor into it.
//! [`Locks`] is the reentrancy counter shared by nested transactions: while it
//! is held, no level is committed and no before-change bookmark is recorded.
//!
//! # Layout
//!
//! ```text
//! levels:  [ L0 ][ L1 ][ L2 ][ L3 ]
//!                       ^ index          has_undo: index > 0
//!                                        has_redo: index + 1 < len
//! commit:  [ L0 ][ L1 ][ L2 ][ new ]     (L3 discarded)
//! ```
//!
//! The store is pure state. Capturing and restoring the document is done by
//! the plain adaptor, which has access to the content and selection hosts.

use std::cell::Cell;
use std::rc::Rc;

use tracing::trace;
use vellum_primitives::Bookmark;

use super::UndoLevel;

/// Linear undo history for a single document.
#[derive(Debug, Default)]
pub struct UndoManager {
	/// Committed levels, oldest first.
	levels: Vec<UndoLevel>,
	/// Cursor into `levels`. `0` when empty.
	index: usize,
	/// Selection recorded by the last unlocked `before_change`.
	before_bookmark: Option<Bookmark>,
}

impl UndoManager {
	/// Creates an empty store.
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns all levels, oldest first.
	pub fn levels(&self) -> &[UndoLevel] {
		&self.levels
	}

	/// Returns the number of levels.
	pub fn len(&self) -> usize {
		self.levels.len()
	}

	/// Returns `true` if no level has been committed.
	pub fn is_empty(&self) -> bool {
		self.levels.is_empty()
	}

	/// Returns the cursor position.
	pub fn index(&self) -> usize {
		self.index
	}

	/// Returns the level under the cursor.
	pub fn current(&self) -> Option<&UndoLevel> {
		self.levels.get(self.index)
	}

	/// Returns the level at `index`.
	pub fn level(&self, index: usize) -> Option<&UndoLevel> {
		self.levels.get(index)
	}

	pub(crate) fn level_mut(&mut self, index: usize) -> Option<&mut UndoLevel> {
		self.levels.get_mut(index)
	}

	/// Returns `true` if the cursor can move back.
	pub fn has_undo(&self) -> bool {
		self.index > 0
	}

	/// Returns `true` if the cursor can move forward.
	pub fn has_redo(&self) -> bool {
		self.index + 1 < self.levels.len()
	}

	/// Returns the pending before-change bookmark.
	pub fn before_bookmark(&self) -> Option<&Bookmark> {
		self.before_bookmark.as_ref()
	}

	pub(crate) fn set_before_bookmark(&mut self, bookmark: Bookmark) {
		self.before_bookmark = Some(bookmark);
	}

	/// Appends `level` after the cursor and moves the cursor onto it.
	///
	/// The level under the cursor receives the pending before-change bookmark,
	/// levels after the cursor are discarded, and with a `limit` the oldest
	/// levels are dropped until at most `limit` remain.
	pub(crate) fn commit(&mut self, level: UndoLevel, limit: Option<usize>) {
		if let Some(bookmark) = self.before_bookmark.clone()
			&& let Some(current) = self.levels.get_mut(self.index)
		{
			current.before_bookmark = Some(bookmark);
		}

		if !self.levels.is_empty() && self.index + 1 < self.levels.len() {
			trace!(
				discarded = self.levels.len() - self.index - 1,
				"redo levels discarded"
			);
			self.levels.truncate(self.index + 1);
		}

		self.levels.push(level);

		if let Some(limit) = limit
			&& self.levels.len() > limit
		{
			let excess = self.levels.len() - limit;
			trace!(excess, limit, "oldest undo levels trimmed");
			self.levels.drain(..excess);
		}

		self.index = self.levels.len() - 1;
		trace!(index = self.index, levels = self.levels.len(), "undo level pushed");
	}

	/// Moves the cursor back one level and returns the level moved to.
	pub(crate) fn step_back(&mut self) -> Option<&UndoLevel> {
		if !self.has_undo() {
			trace!("undo: nothing to undo");
			return None;
		}
		self.index -= 1;
		trace!(index = self.index, "undo: cursor moved back");
		self.levels.get(self.index)
	}

	/// Moves the cursor forward one level and returns the level moved to.
	pub(crate) fn step_forward(&mut self) -> Option<&UndoLevel> {
		if !self.has_redo() {
			trace!("redo: nothing to redo");
			return None;
		}
		self.index += 1;
		trace!(index = self.index, "redo: cursor moved forward");
		self.levels.get(self.index)
	}

	/// Discards every level and resets the cursor.
	pub(crate) fn clear(&mut self) {
		trace!(cleared = self.levels.len(), "undo levels cleared");
		self.levels.clear();
		self.index = 0;
	}
}

/// Reentrancy counter suppressing level creation inside transactions.
///
/// Clones share the same counter, so a guard can be held across a callback
/// that also borrows the editor mutably.
#[derive(Debug, Clone, Default)]
pub struct Locks(Rc<Cell<usize>>);

impl Locks {
	/// Creates an unlocked counter.
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the current nesting depth.
	pub fn count(&self) -> usize {
		self.0.get()
	}

	/// Returns `true` if no transaction is in progress.
	pub fn is_unlocked(&self) -> bool {
		self.0.get() == 0
	}

	/// Increments the counter until the returned guard is dropped.
	#[must_use = "the lock is released as soon as the guard is dropped"]
	pub fn acquire(&self) -> LockGuard {
		self.0.set(self.0.get() + 1);
		LockGuard {
			locks: self.clone(),
		}
	}
}

/// Scoped hold on [`Locks`]. Releases on drop, including during unwinding.
#[derive(Debug)]
pub struct LockGuard {
	locks: Locks,
}

impl Drop for LockGuard {
	fn drop(&mut self) {
		let count = self.locks.0.get();
		self.locks.0.set(count.saturating_sub(1));
	}
}
