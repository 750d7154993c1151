use std::fmt;
use std::rc::Rc;

use tracing::{debug, warn};
use vellum_primitives::{
	Content, ContentArgs, ContentFormat, FormatVars, InsertDetails, ParseOptions, SetContentArgs,
};

use super::PlainAdaptor;
use crate::editor::Editor;
use crate::error::{EditorError, Result};
use crate::rtc::RtcRuntime;
use crate::types::UndoLevel;

fn unsupported(operation: &'static str) -> EditorError {
	warn!(operation, "plain history operation invoked on collaborative editor");
	EditorError::Unsupported { operation }
}

/// Strategy backed by a collaboration engine.
///
/// History belongs to the engine. Undo and redo return [`UndoLevel::dummy`];
/// operations that only make sense for local history fail with
/// [`EditorError::Unsupported`].
#[derive(Clone)]
pub struct RtcAdaptor {
	runtime: Rc<dyn RtcRuntime>,
	is_remote: bool,
}

impl RtcAdaptor {
	/// Wraps a ready engine.
	pub fn new(runtime: Rc<dyn RtcRuntime>, is_remote: bool) -> Self {
		Self { runtime, is_remote }
	}

	/// Returns `true` if the engine reported remote peers at setup.
	pub fn is_remote(&self) -> bool {
		self.is_remote
	}

	/// Returns the engine.
	pub fn runtime(&self) -> &Rc<dyn RtcRuntime> {
		&self.runtime
	}

	/// No-op; the engine tracks change boundaries itself.
	pub fn before_change(&self) {}

	/// Always fails.
	pub fn add_undo_level(&self) -> Result<Option<UndoLevel>> {
		Err(unsupported("add_undo_level"))
	}

	/// Undoes in the engine.
	pub fn undo(&self) -> UndoLevel {
		self.runtime.undo();
		UndoLevel::dummy()
	}

	/// Redoes in the engine.
	pub fn redo(&self) -> UndoLevel {
		self.runtime.redo();
		UndoLevel::dummy()
	}

	/// Always fails.
	pub fn clear(&self) -> Result<()> {
		Err(unsupported("clear"))
	}

	/// Always fails.
	pub fn reset(&self) -> Result<()> {
		Err(unsupported("reset"))
	}

	pub fn has_undo(&self) -> bool {
		self.runtime.has_undo()
	}

	pub fn has_redo(&self) -> bool {
		self.runtime.has_redo()
	}

	/// Runs `f` inside an engine transaction.
	pub fn transact(&self, editor: &mut Editor, f: impl FnOnce(&mut Editor)) -> UndoLevel {
		self.runtime.transact(Box::new(move || f(editor)));
		UndoLevel::dummy()
	}

	/// Always fails; the callback is not run.
	pub fn ignore(&self) -> Result<()> {
		Err(unsupported("ignore"))
	}

	/// Always fails; neither callback is run.
	pub fn extra(&self) -> Result<()> {
		Err(unsupported("extra"))
	}

	pub fn apply_format(&self, name: &str, vars: Option<&FormatVars>) {
		self.runtime.apply_format(name, &vars.cloned().unwrap_or_default());
	}

	pub fn remove_format(&self, name: &str, vars: Option<&FormatVars>) {
		self.runtime.remove_format(name, &vars.cloned().unwrap_or_default());
	}

	pub fn toggle_format(&self, name: &str, vars: Option<&FormatVars>) {
		self.runtime.toggle_format(name, &vars.cloned().unwrap_or_default());
	}

	/// Reads the shared document.
	///
	/// `Html` and `Tree` come from the engine fragment after the local output
	/// filters ran; other formats are served by a fresh [`PlainAdaptor`].
	pub fn get_content(&self, editor: &Editor, args: &ContentArgs, format: ContentFormat) -> Content {
		if !format.is_content_model() {
			debug!(?format, "content format served by local pipeline");
			return PlainAdaptor::new().get_content(editor, args, format);
		}

		let mut fragment = self.runtime.get_content().unwrap_or_default();
		editor.content.run_filters(&mut fragment);
		match format {
			ContentFormat::Tree => Content::Tree(fragment),
			_ => Content::Markup(editor.content.serialize(&fragment)),
		}
	}

	/// Reads the engine selection.
	///
	/// `Html` and `Tree` serialize the filtered engine selection; other
	/// formats are served by a fresh [`PlainAdaptor`].
	pub fn get_selected_content(
		&self,
		editor: &Editor,
		format: ContentFormat,
		args: &ContentArgs,
	) -> String {
		if !format.is_content_model() {
			debug!(?format, "selection format served by local pipeline");
			return PlainAdaptor::new().get_selected_content(editor, format, args);
		}

		let mut fragment = self.runtime.get_selected_content().unwrap_or_default();
		editor.content.run_filters(&mut fragment);
		editor.content.serialize(&fragment)
	}

	/// Replaces the shared document and returns `content` unchanged.
	///
	/// The engine may normalize what it receives; callers that need the
	/// applied result must read it back with [`RtcAdaptor::get_content`].
	pub fn set_content(&self, editor: &Editor, content: Content, _args: &SetContentArgs) -> Content {
		let options = ParseOptions {
			is_root_content: true,
			insert: true,
		};
		let fragment = match &content {
			Content::Tree(fragment) => fragment.clone(),
			Content::Markup(markup) => editor.content.parse(markup, options),
		};
		self.runtime.set_content(fragment);
		content
	}

	/// Inserts at the engine selection.
	pub fn insert_content(&self, editor: &Editor, value: Content, _details: &InsertDetails) {
		let options = ParseOptions {
			is_root_content: false,
			insert: true,
		};
		let fragment = match value {
			Content::Tree(fragment) => fragment,
			Content::Markup(markup) => editor.content.parse(&markup, options),
		};
		self.runtime.insert_content(fragment);
	}
}

impl fmt::Debug for RtcAdaptor {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("RtcAdaptor")
			.field("is_remote", &self.is_remote)
			.finish_non_exhaustive()
	}
}
