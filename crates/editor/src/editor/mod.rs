//! Editor instance state.
//!
//! The [`Editor`] owns the local subsystems, the plugin registry, the
//! plain-mode history and, once [`gateway::setup`] has run, exactly one
//! [`Adaptor`]. Everything else in the crate operates on an `&mut Editor`.
//!
//! ```text
//! Editor
//! ├── content / formatter / selection   // local hosts
//! ├── plugins: PluginRegistry           // `rtc` selects the collaborative adaptor
//! ├── undo_manager + locks              // plain-mode history
//! └── adaptor: Option<Adaptor>          // installed once by setup
//! ```
//!
//! [`gateway::setup`]: crate::gateway::setup

/// Plain-mode history operations.
pub(crate) mod history;

use std::fmt;
use std::rc::Rc;

use tracing::trace;

use crate::adaptor::Adaptor;
use crate::host::{ContentHost, FormatHost, Hosts, SelectionHost};
use crate::plugins::{Plugin, PluginRegistry};
use crate::types::{EditorConfig, Locks, UndoEvent, UndoLevel, UndoManager};

type BeforeAddUndoHook = Box<dyn FnMut(&UndoLevel, Option<&UndoLevel>) -> bool>;
type UndoListener = Box<dyn FnMut(&UndoEvent)>;

/// Callbacks observing the plain-mode history.
#[derive(Default)]
struct UndoHooks {
	before_add: Vec<BeforeAddUndoHook>,
	listeners: Vec<UndoListener>,
}

/// A single editor instance.
pub struct Editor {
	pub(crate) content: Box<dyn ContentHost>,
	pub(crate) formatter: Box<dyn FormatHost>,
	pub(crate) selection: Box<dyn SelectionHost>,
	pub(crate) undo_manager: UndoManager,
	pub(crate) locks: Locks,
	pub(crate) adaptor: Option<Adaptor>,
	plugins: PluginRegistry,
	config: EditorConfig,
	dirty: bool,
	hooks: UndoHooks,
}

impl Editor {
	/// Creates an editor over the given hosts. No adaptor is installed until
	/// [`crate::gateway::setup`] runs.
	pub fn new(hosts: Hosts, config: EditorConfig) -> Self {
		Self {
			content: hosts.content,
			formatter: hosts.formatter,
			selection: hosts.selection,
			undo_manager: UndoManager::new(),
			locks: Locks::new(),
			adaptor: None,
			plugins: PluginRegistry::new(),
			config,
			dirty: false,
			hooks: UndoHooks::default(),
		}
	}

	/// Registers a plugin. Must happen before setup for `rtc` to be detected.
	pub fn register_plugin(&mut self, name: impl Into<String>, plugin: Rc<dyn Plugin>) {
		self.plugins.add(name, plugin);
	}

	/// Returns the plugin registry.
	pub fn plugins(&self) -> &PluginRegistry {
		&self.plugins
	}

	/// Returns the editor configuration.
	pub fn config(&self) -> &EditorConfig {
		&self.config
	}

	/// Returns the plain-mode history.
	pub fn undo_manager(&self) -> &UndoManager {
		&self.undo_manager
	}

	/// Returns the transaction locks.
	pub fn locks(&self) -> &Locks {
		&self.locks
	}

	/// Returns the installed adaptor.
	pub fn adaptor(&self) -> Option<&Adaptor> {
		self.adaptor.as_ref()
	}

	/// Returns `true` if the document changed since the flag was last cleared.
	pub fn is_dirty(&self) -> bool {
		self.dirty
	}

	/// Sets the dirty flag.
	pub fn set_dirty(&mut self, dirty: bool) {
		self.dirty = dirty;
	}

	/// Registers a hook consulted before a level is committed. Returning
	/// `false` drops the level.
	pub fn on_before_add_undo(
		&mut self,
		hook: impl FnMut(&UndoLevel, Option<&UndoLevel>) -> bool + 'static,
	) {
		self.hooks.before_add.push(Box::new(hook));
	}

	/// Registers a listener for history events.
	pub fn on_undo_event(&mut self, listener: impl FnMut(&UndoEvent) + 'static) {
		self.hooks.listeners.push(Box::new(listener));
	}

	pub(crate) fn install_adaptor(&mut self, adaptor: Adaptor) {
		trace!(?adaptor, "adaptor installed");
		self.adaptor = Some(adaptor);
	}

	/// Runs every before-add hook; all must accept the level.
	pub(crate) fn allow_level(&mut self, level: &UndoLevel, last: Option<&UndoLevel>) -> bool {
		let mut allowed = true;
		for hook in &mut self.hooks.before_add {
			allowed &= hook(level, last);
		}
		allowed
	}

	pub(crate) fn fire(&mut self, event: UndoEvent) {
		for listener in &mut self.hooks.listeners {
			listener(&event);
		}
	}
}

impl fmt::Debug for Editor {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Editor")
			.field("adaptor", &self.adaptor)
			.field("plugins", &self.plugins)
			.field("undo_manager", &self.undo_manager)
			.field("locks", &self.locks.count())
			.field("dirty", &self.dirty)
			.finish_non_exhaustive()
	}
}
