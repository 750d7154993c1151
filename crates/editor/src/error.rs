//! Error types for adaptor setup and dispatch.

use thiserror::Error;

use crate::rtc::RtcError;

/// Errors surfaced by the dispatch gateway and the adaptors.
#[derive(Debug, Error)]
pub enum EditorError {
	/// A plain-history operation was invoked while a collaboration engine owns
	/// history.
	#[error("{operation} is not supported while a collaboration engine owns history")]
	Unsupported {
		/// Name of the rejected operation.
		operation: &'static str,
	},

	/// An operation was forwarded before `setup` installed an adaptor.
	#[error("editor adaptor used before setup completed")]
	NotInitialized,

	/// `setup` was called on an editor that already has an adaptor.
	#[error("editor adaptor is already installed")]
	AlreadyInitialized,

	/// The plugin registered as `rtc` does not expose a collaboration engine.
	#[error("plugin `rtc` does not expose a collaboration engine")]
	MissingRtcApi,

	/// The collaboration engine failed to become ready.
	#[error("collaboration engine setup failed: {0}")]
	Setup(#[from] RtcError),
}

/// Result type for gateway and adaptor operations.
pub type Result<T, E = EditorError> = std::result::Result<T, E>;
