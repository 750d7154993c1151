//! Collaboration engine surface.
//!
//! A collaboration engine is supplied by the plugin registered as `rtc`. The
//! editor only ever sees the capability set below; network, merge and
//! history logic stay inside the engine.

use std::fmt;
use std::rc::Rc;

use thiserror::Error;
use vellum_primitives::{BoxFutureLocal, FormatVars, Fragment};

/// Name under which the collaboration plugin registers.
pub const RTC_PLUGIN: &str = "rtc";

/// Failures reported by a collaboration engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RtcError {
	/// The engine could not be reached or started.
	#[error("collaboration engine unavailable: {0}")]
	Unavailable(String),
	/// The engine refused the session.
	#[error("collaboration session rejected: {0}")]
	Rejected(String),
}

/// A ready collaboration engine.
pub struct RtcSetup {
	/// Engine operations.
	pub runtime: Rc<dyn RtcRuntime>,
	/// Whether the document is shared with remote peers.
	pub is_remote: bool,
}

impl fmt::Debug for RtcSetup {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("RtcSetup")
			.field("is_remote", &self.is_remote)
			.finish_non_exhaustive()
	}
}

/// Entry point exposed by the `rtc` plugin.
pub trait RtcPlugin {
	/// Starts the engine. Resolves once it is ready to serve the editor.
	fn setup(&self) -> BoxFutureLocal<'static, Result<RtcSetup, RtcError>>;
}

/// Operations of a ready collaboration engine.
///
/// Formats act on the engine's own notion of the active selection.
pub trait RtcRuntime {
	/// Undoes the last change in the engine's history.
	fn undo(&self);
	/// Redoes the last undone change in the engine's history.
	fn redo(&self);
	/// Returns `true` if the engine has history to undo.
	fn has_undo(&self) -> bool;
	/// Returns `true` if the engine has history to redo.
	fn has_redo(&self) -> bool;
	/// Runs `f` as one engine transaction.
	fn transact(&self, f: Box<dyn FnOnce() + '_>);
	/// Applies a format at the engine selection.
	fn apply_format(&self, name: &str, vars: &FormatVars);
	/// Removes a format at the engine selection.
	fn remove_format(&self, name: &str, vars: &FormatVars);
	/// Toggles a format at the engine selection.
	fn toggle_format(&self, name: &str, vars: &FormatVars);
	/// Returns the shared document.
	fn get_content(&self) -> Option<Fragment>;
	/// Replaces the shared document.
	fn set_content(&self, fragment: Fragment);
	/// Inserts at the engine selection.
	fn insert_content(&self, fragment: Fragment);
	/// Returns the content under the engine selection.
	fn get_selected_content(&self) -> Option<Fragment>;
}
