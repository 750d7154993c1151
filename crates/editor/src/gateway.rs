//! Setup and dispatch.
//!
//! [`setup`] picks the strategy once per editor: the plain adaptor when no
//! `rtc` plugin is registered, the collaborative adaptor once the plugin's
//! engine is ready. Every other function forwards to whichever adaptor was
//! installed and fails with [`EditorError::NotInitialized`] before that.
//!
//! ```text
//! [Uninitialized] --no rtc plugin-------------------------> [Plain]
//! [Uninitialized] --rtc plugin--> [Awaiting engine] --ok--> [Collaborative]
//!                                        |
//!                                        +--err--> failure returned, nothing installed
//! ```

use tracing::{debug, warn};
use vellum_primitives::{
	BoxFutureLocal, Content, ContentArgs, ContentFormat, FormatRegistry, FormatTarget, FormatVars,
	InsertDetails, SetContentArgs,
};

use crate::adaptor::{Adaptor, PlainAdaptor, RtcAdaptor};
use crate::editor::Editor;
use crate::error::{EditorError, Result};
use crate::rtc::RTC_PLUGIN;
use crate::types::UndoLevel;

/// Engine readiness wait returned by [`setup`]. Resolves to the engine's
/// `is_remote` flag.
///
/// Holds the editor mutably until it resolves, so nothing can be forwarded
/// to a half-installed adaptor.
pub type PendingSetup<'a> = BoxFutureLocal<'a, Result<bool>>;

fn installed(editor: &Editor) -> Result<Adaptor> {
	editor.adaptor.clone().ok_or(EditorError::NotInitialized)
}

/// Returns `true` if a plugin named `rtc` is registered.
pub fn is_rtc(editor: &Editor) -> bool {
	editor.plugins().contains(RTC_PLUGIN)
}

/// Installs the editor's adaptor.
///
/// Without an `rtc` plugin the plain adaptor is installed immediately and
/// `Ok(None)` is returned. Otherwise the returned future waits for the
/// engine, installs the collaborative adaptor and yields `is_remote`. If the
/// engine fails, the error is returned and no adaptor is installed.
///
/// The returned value borrows the editor on both paths; drop it (or await it)
/// before using the editor again.
pub fn setup(editor: &mut Editor) -> Result<Option<PendingSetup<'_>>> {
	if editor.adaptor.is_some() {
		return Err(EditorError::AlreadyInitialized);
	}

	let Some(plugin) = editor.plugins().get(RTC_PLUGIN) else {
		editor.install_adaptor(Adaptor::Plain(PlainAdaptor::new()));
		debug!("plain adaptor installed");
		return Ok(None);
	};
	let ready = plugin.rtc().ok_or(EditorError::MissingRtcApi)?.setup();

	Ok(Some(Box::pin(async move {
		let engine = match ready.await {
			Ok(engine) => engine,
			Err(error) => {
				warn!(%error, "collaboration engine setup failed");
				return Err(error.into());
			}
		};
		let is_remote = engine.is_remote;
		editor.install_adaptor(Adaptor::Collaborative(RtcAdaptor::new(
			engine.runtime,
			is_remote,
		)));
		debug!(is_remote, "collaborative adaptor installed");
		Ok(is_remote)
	})))
}

/// Records the selection ahead of a change.
pub fn before_change(editor: &mut Editor) -> Result<()> {
	match installed(editor)? {
		Adaptor::Plain(plain) => plain.before_change(editor),
		Adaptor::Collaborative(rtc) => rtc.before_change(),
	}
	Ok(())
}

/// Commits the current document as an undo level.
pub fn add_undo_level(editor: &mut Editor) -> Result<Option<UndoLevel>> {
	match installed(editor)? {
		Adaptor::Plain(plain) => Ok(plain.add_undo_level(editor)),
		Adaptor::Collaborative(rtc) => rtc.add_undo_level(),
	}
}

/// Steps history back.
pub fn undo(editor: &mut Editor) -> Result<Option<UndoLevel>> {
	match installed(editor)? {
		Adaptor::Plain(plain) => Ok(plain.undo(editor)),
		Adaptor::Collaborative(rtc) => Ok(Some(rtc.undo())),
	}
}

/// Steps history forward.
pub fn redo(editor: &mut Editor) -> Result<Option<UndoLevel>> {
	match installed(editor)? {
		Adaptor::Plain(plain) => Ok(plain.redo(editor)),
		Adaptor::Collaborative(rtc) => Ok(Some(rtc.redo())),
	}
}

/// Discards history.
pub fn clear(editor: &mut Editor) -> Result<()> {
	match installed(editor)? {
		Adaptor::Plain(plain) => {
			plain.clear(editor);
			Ok(())
		}
		Adaptor::Collaborative(rtc) => rtc.clear(),
	}
}

/// Discards history and seeds it from the current document.
pub fn reset(editor: &mut Editor) -> Result<()> {
	match installed(editor)? {
		Adaptor::Plain(plain) => {
			plain.reset(editor);
			Ok(())
		}
		Adaptor::Collaborative(rtc) => rtc.reset(),
	}
}

pub fn has_undo(editor: &Editor) -> Result<bool> {
	match installed(editor)? {
		Adaptor::Plain(plain) => Ok(plain.has_undo(editor)),
		Adaptor::Collaborative(rtc) => Ok(rtc.has_undo()),
	}
}

pub fn has_redo(editor: &Editor) -> Result<bool> {
	match installed(editor)? {
		Adaptor::Plain(plain) => Ok(plain.has_redo(editor)),
		Adaptor::Collaborative(rtc) => Ok(rtc.has_redo()),
	}
}

/// Runs `f` as one undoable step.
///
/// Under the collaborative adaptor the returned level is the dummy sentinel.
pub fn transact(editor: &mut Editor, f: impl FnOnce(&mut Editor)) -> Result<Option<UndoLevel>> {
	match installed(editor)? {
		Adaptor::Plain(plain) => Ok(plain.transact(editor, f)),
		Adaptor::Collaborative(rtc) => Ok(Some(rtc.transact(editor, f))),
	}
}

/// Runs `f` without recording history.
pub fn ignore(editor: &mut Editor, f: impl FnOnce(&mut Editor)) -> Result<()> {
	match installed(editor)? {
		Adaptor::Plain(plain) => {
			plain.ignore(editor, f);
			Ok(())
		}
		Adaptor::Collaborative(rtc) => rtc.ignore(),
	}
}

/// Runs `first` and `second` as two adjacent undoable steps.
pub fn extra(
	editor: &mut Editor,
	first: impl FnOnce(&mut Editor),
	second: impl FnOnce(&mut Editor),
) -> Result<()> {
	match installed(editor)? {
		Adaptor::Plain(plain) => {
			plain.extra(editor, first, second);
			Ok(())
		}
		Adaptor::Collaborative(rtc) => rtc.extra(),
	}
}

/// Applies a named format at `target`, or at the selection.
pub fn apply_format(
	editor: &mut Editor,
	name: &str,
	vars: Option<&FormatVars>,
	target: Option<&FormatTarget>,
) -> Result<()> {
	match installed(editor)? {
		Adaptor::Plain(plain) => plain.apply_format(editor, name, vars, target),
		Adaptor::Collaborative(rtc) => rtc.apply_format(name, vars),
	}
	Ok(())
}

/// Removes a named format at `target`, or at the selection.
pub fn remove_format(
	editor: &mut Editor,
	name: &str,
	vars: Option<&FormatVars>,
	target: Option<&FormatTarget>,
	similar: bool,
) -> Result<()> {
	match installed(editor)? {
		Adaptor::Plain(plain) => plain.remove_format(editor, name, vars, target, similar),
		Adaptor::Collaborative(rtc) => rtc.remove_format(name, vars),
	}
	Ok(())
}

/// Toggles a named format at `target`, or at the selection.
pub fn toggle_format(
	editor: &mut Editor,
	formats: &FormatRegistry,
	name: &str,
	vars: Option<&FormatVars>,
	target: Option<&FormatTarget>,
) -> Result<()> {
	match installed(editor)? {
		Adaptor::Plain(plain) => plain.toggle_format(editor, formats, name, vars, target),
		Adaptor::Collaborative(rtc) => rtc.toggle_format(name, vars),
	}
	Ok(())
}

/// Reads the document in `format`.
pub fn get_content(editor: &Editor, args: &ContentArgs, format: ContentFormat) -> Result<Content> {
	match installed(editor)? {
		Adaptor::Plain(plain) => Ok(plain.get_content(editor, args, format)),
		Adaptor::Collaborative(rtc) => Ok(rtc.get_content(editor, args, format)),
	}
}

/// Replaces the document.
///
/// The collaborative adaptor returns `content` as given, not as applied.
pub fn set_content(editor: &mut Editor, content: Content, args: &SetContentArgs) -> Result<Content> {
	match installed(editor)? {
		Adaptor::Plain(plain) => Ok(plain.set_content(editor, content, args)),
		Adaptor::Collaborative(rtc) => Ok(rtc.set_content(editor, content, args)),
	}
}

/// Inserts at the selection.
pub fn insert_content(editor: &mut Editor, value: Content, details: &InsertDetails) -> Result<()> {
	match installed(editor)? {
		Adaptor::Plain(plain) => plain.insert_content(editor, value, details),
		Adaptor::Collaborative(rtc) => rtc.insert_content(editor, value, details),
	}
	Ok(())
}

/// Reads the selected content in `format`.
pub fn get_selected_content(
	editor: &Editor,
	format: ContentFormat,
	args: &ContentArgs,
) -> Result<String> {
	match installed(editor)? {
		Adaptor::Plain(plain) => Ok(plain.get_selected_content(editor, format, args)),
		Adaptor::Collaborative(rtc) => Ok(rtc.get_selected_content(editor, format, args)),
	}
}
