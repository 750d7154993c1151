use vellum_primitives::{
	Content, ContentArgs, ContentFormat, FormatRegistry, FormatTarget, FormatVars, InsertDetails,
	SetContentArgs,
};

use crate::editor::{Editor, history};
use crate::types::UndoLevel;

/// Local, synchronous strategy.
///
/// Stateless: history lives in the editor's [`UndoManager`], content in its
/// hosts. Constructing one is free, which is what lets the collaborative
/// adaptor build a fresh instance for every fallback.
///
/// [`UndoManager`]: crate::types::UndoManager
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainAdaptor;

impl PlainAdaptor {
	/// Creates the adaptor.
	pub fn new() -> Self {
		Self
	}

	/// Records the selection ahead of a change, unless a transaction is open.
	pub fn before_change(&self, editor: &mut Editor) {
		history::before_change(editor);
	}

	/// Commits the current document as a new level.
	///
	/// Returns `None` while locked, when a hook rejects the level, or when the
	/// document matches the level under the cursor.
	pub fn add_undo_level(&self, editor: &mut Editor) -> Option<UndoLevel> {
		history::add_undo_level(editor)
	}

	/// Restores the previous level. Returns `None` at the start of history.
	pub fn undo(&self, editor: &mut Editor) -> Option<UndoLevel> {
		history::undo(editor)
	}

	/// Restores the next level. Returns `None` at the end of history.
	pub fn redo(&self, editor: &mut Editor) -> Option<UndoLevel> {
		history::redo(editor)
	}

	/// Discards all levels.
	pub fn clear(&self, editor: &mut Editor) {
		history::clear(editor);
	}

	/// Discards all levels and seeds one from the current document.
	pub fn reset(&self, editor: &mut Editor) {
		history::reset(editor);
	}

	/// Returns `true` if there is a level before the cursor.
	pub fn has_undo(&self, editor: &Editor) -> bool {
		editor.undo_manager.has_undo()
	}

	/// Returns `true` if there is a level after the cursor.
	pub fn has_redo(&self, editor: &Editor) -> bool {
		editor.undo_manager.has_redo()
	}

	/// Runs `f` as one undoable step. Nested transactions fold into the
	/// outermost one.
	pub fn transact(&self, editor: &mut Editor, f: impl FnOnce(&mut Editor)) -> Option<UndoLevel> {
		history::transact(editor, f)
	}

	/// Runs `f` without recording history.
	pub fn ignore(&self, editor: &mut Editor, f: impl FnOnce(&mut Editor)) {
		history::ignore(editor, f);
	}

	/// Runs `first` and `second` as two adjacent undoable steps.
	pub fn extra(
		&self,
		editor: &mut Editor,
		first: impl FnOnce(&mut Editor),
		second: impl FnOnce(&mut Editor),
	) {
		history::extra(editor, first, second);
	}

	/// Applies a named format through the local format engine.
	pub fn apply_format(
		&self,
		editor: &mut Editor,
		name: &str,
		vars: Option<&FormatVars>,
		target: Option<&FormatTarget>,
	) {
		editor.formatter.apply(name, vars, target);
	}

	/// Removes a named format through the local format engine.
	pub fn remove_format(
		&self,
		editor: &mut Editor,
		name: &str,
		vars: Option<&FormatVars>,
		target: Option<&FormatTarget>,
		similar: bool,
	) {
		editor.formatter.remove(name, vars, target, similar);
	}

	/// Toggles a named format through the local format engine.
	pub fn toggle_format(
		&self,
		editor: &mut Editor,
		formats: &FormatRegistry,
		name: &str,
		vars: Option<&FormatVars>,
		target: Option<&FormatTarget>,
	) {
		editor.formatter.toggle(formats, name, vars, target);
	}

	/// Reads the document.
	pub fn get_content(&self, editor: &Editor, args: &ContentArgs, format: ContentFormat) -> Content {
		editor.content.get_content(format, args)
	}

	/// Replaces the document.
	pub fn set_content(&self, editor: &mut Editor, content: Content, args: &SetContentArgs) -> Content {
		editor.content.set_content(content, args)
	}

	/// Inserts at the selection.
	pub fn insert_content(&self, editor: &mut Editor, value: Content, details: &InsertDetails) {
		editor.content.insert_content(value, details);
	}

	/// Reads the selected content.
	pub fn get_selected_content(
		&self,
		editor: &Editor,
		format: ContentFormat,
		args: &ContentArgs,
	) -> String {
		editor.selection.get_selected_content(format, args)
	}
}
