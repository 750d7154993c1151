#![cfg_attr(test, allow(unused_crate_dependencies))]
//! Editor adaptor core.
//!
//! Lets a rich-text editor swap, once at initialization, between a local
//! strategy for content mutation and undo/redo and one delegated to a
//! collaboration engine, behind one stable set of operations.
//!
//! # Main Types
//!
//! - [`Editor`] - An editor instance: local hosts, plugins, history, adaptor
//! - [`Adaptor`] - The installed strategy, [`PlainAdaptor`] or [`RtcAdaptor`]
//! - [`UndoManager`] - Plain-mode level history
//!
//! # Usage
//!
//! Call [`gateway::setup`] once, awaiting the returned future when a
//! collaboration plugin is registered, then drive the editor through the
//! other [`gateway`] functions.

/// Execution strategies.
pub mod adaptor;
/// Editor instance state.
pub mod editor;
/// Gateway and adaptor errors.
pub mod error;
/// Setup and dispatch.
pub mod gateway;
/// Local subsystems consumed by the editor.
pub mod host;
/// Plugin registry.
pub mod plugins;
/// Collaboration engine surface.
pub mod rtc;
/// Configuration and history types.
pub mod types;

pub use adaptor::{Adaptor, PlainAdaptor, RtcAdaptor};
pub use editor::Editor;
pub use error::{EditorError, Result};
pub use gateway::{
	PendingSetup, add_undo_level, apply_format, before_change, clear, extra, get_content,
	get_selected_content, has_redo, has_undo, ignore, insert_content, is_rtc, redo,
	remove_format, reset, set_content, setup, toggle_format, transact, undo,
};
pub use host::{ContentHost, FormatHost, Hosts, SelectionHost};
pub use plugins::{Plugin, PluginRegistry};
pub use rtc::{RTC_PLUGIN, RtcError, RtcPlugin, RtcRuntime, RtcSetup};
pub use types::{
	ConfigError, EditorConfig, LockGuard, Locks, UndoEvent, UndoLevel, UndoLevelType,
	UndoManager,
};
