//! Plugin registry.

use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use crate::rtc::RtcPlugin;

/// A registered editor plugin.
pub trait Plugin {
	/// Returns the collaboration entry point, for plugins that provide one.
	fn rtc(&self) -> Option<&dyn RtcPlugin> {
		None
	}
}

/// Plugins registered on an editor, keyed by name.
#[derive(Default)]
pub struct PluginRegistry {
	plugins: BTreeMap<String, Rc<dyn Plugin>>,
}

impl PluginRegistry {
	/// Creates an empty registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers `plugin` under `name`, replacing any previous entry.
	pub fn add(&mut self, name: impl Into<String>, plugin: Rc<dyn Plugin>) {
		self.plugins.insert(name.into(), plugin);
	}

	/// Returns the plugin registered under `name`.
	pub fn get(&self, name: &str) -> Option<Rc<dyn Plugin>> {
		self.plugins.get(name).cloned()
	}

	/// Returns `true` if a plugin is registered under `name`.
	pub fn contains(&self, name: &str) -> bool {
		self.plugins.contains_key(name)
	}

	/// Returns registered names in sorted order.
	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.plugins.keys().map(String::as_str)
	}
}

impl fmt::Debug for PluginRegistry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_list().entries(self.names()).finish()
	}
}
