//! Editor configuration.

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error parsing TOML syntax or an unknown/mistyped key.
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),
}

/// Static editor options, fixed for the lifetime of an editor instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EditorConfig {
	/// Maximum number of undo levels retained in plain mode. `0` keeps every
	/// level.
	pub custom_undo_redo_levels: usize,
}

impl EditorConfig {
	/// Parses configuration from TOML. Missing keys take their defaults.
	pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
		Ok(toml::from_str(input)?)
	}

	/// Returns the undo level limit, if one is configured.
	pub fn level_limit(&self) -> Option<usize> {
		(self.custom_undo_redo_levels > 0).then_some(self.custom_undo_redo_levels)
	}
}
