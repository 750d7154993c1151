//! Plain-mode history operations.
//!
//! These drive the [`UndoManager`] against the local hosts: capturing the
//! document into a level, restoring a level into the document, and the
//! lock discipline around transactions.
//!
//! [`UndoManager`]: crate::types::UndoManager

use tracing::{debug, trace};
use vellum_primitives::{Content, SetContentArgs};

use super::Editor;
use crate::types::{UndoEvent, UndoLevel, UndoLevelType};

/// Captures the current document and selection as a level.
fn capture_level(editor: &Editor) -> UndoLevel {
	let bookmark = Some(editor.selection.bookmark());
	match editor.content.fragments() {
		Some(fragments) => UndoLevel::fragmented(fragments, bookmark),
		None => UndoLevel::complete(editor.content.snapshot(), bookmark),
	}
}

/// Restores `level` into the document. `before` selects the level's
/// before-change bookmark instead of its own.
fn apply_level(editor: &mut Editor, level: &UndoLevel, before: bool) {
	match level.kind {
		UndoLevelType::Fragmented => editor.content.write_fragments(&level.fragments),
		UndoLevelType::Complete => {
			editor
				.content
				.set_content(Content::Markup(level.content.clone()), &SetContentArgs::raw());
		}
	}

	let bookmark = if before {
		level.before_bookmark.as_ref()
	} else {
		level.bookmark.as_ref()
	};
	if let Some(bookmark) = bookmark {
		editor.selection.move_to_bookmark(bookmark);
	}
}

pub(crate) fn before_change(editor: &mut Editor) {
	if editor.locks.is_unlocked() {
		let bookmark = editor.selection.bookmark();
		editor.undo_manager.set_before_bookmark(bookmark);
	}
}

pub(crate) fn add_undo_level(editor: &mut Editor) -> Option<UndoLevel> {
	if !editor.locks.is_unlocked() {
		trace!(locks = editor.locks.count(), "undo level suppressed by lock");
		return None;
	}

	let level = capture_level(editor);
	let last_level = editor.undo_manager.current().cloned();

	if !editor.allow_level(&level, last_level.as_ref()) {
		debug!("undo level rejected by before-add hook");
		return None;
	}

	if last_level.as_ref().is_some_and(|last| last.is_eq(&level)) {
		trace!("undo level skipped, content unchanged");
		return None;
	}

	let limit = editor.config().level_limit();
	editor.undo_manager.commit(level.clone(), limit);

	let changed = editor.undo_manager.index() > 0;
	if changed {
		editor.set_dirty(true);
	}
	editor.fire(UndoEvent::AddUndo {
		level: level.clone(),
		last_level: last_level.clone(),
	});
	if changed {
		editor.fire(UndoEvent::Change {
			level: level.clone(),
			last_level,
		});
	}

	Some(level)
}

pub(crate) fn undo(editor: &mut Editor) -> Option<UndoLevel> {
	let level = editor.undo_manager.step_back().cloned()?;
	apply_level(editor, &level, true);
	editor.set_dirty(true);
	editor.fire(UndoEvent::Undo {
		level: level.clone(),
	});
	Some(level)
}

pub(crate) fn redo(editor: &mut Editor) -> Option<UndoLevel> {
	let level = editor.undo_manager.step_forward().cloned()?;
	apply_level(editor, &level, false);
	editor.set_dirty(true);
	editor.fire(UndoEvent::Redo {
		level: level.clone(),
	});
	Some(level)
}

pub(crate) fn clear(editor: &mut Editor) {
	editor.undo_manager.clear();
	editor.fire(UndoEvent::ClearUndos);
}

pub(crate) fn reset(editor: &mut Editor) {
	clear(editor);
	add_undo_level(editor);
}

pub(crate) fn transact(editor: &mut Editor, f: impl FnOnce(&mut Editor)) -> Option<UndoLevel> {
	before_change(editor);
	ignore(editor, f);
	add_undo_level(editor)
}

pub(crate) fn ignore(editor: &mut Editor, f: impl FnOnce(&mut Editor)) {
	let _guard = editor.locks.acquire();
	f(editor);
}

pub(crate) fn extra(
	editor: &mut Editor,
	first: impl FnOnce(&mut Editor),
	second: impl FnOnce(&mut Editor),
) {
	if transact(editor, first).is_none() {
		return;
	}

	let index = editor.undo_manager.index();
	let bookmark = editor
		.undo_manager
		.level(index)
		.and_then(|level| level.bookmark.clone());
	let previous = index
		.checked_sub(1)
		.and_then(|i| editor.undo_manager.level(i))
		.cloned();
	if let Some(previous) = previous {
		apply_level(editor, &previous, true);
	}

	if transact(editor, second).is_some() {
		let first_index = editor.undo_manager.index().checked_sub(1);
		if let Some(level) = first_index.and_then(|i| editor.undo_manager.level_mut(i)) {
			level.before_bookmark = bookmark;
		}
	}
}
