//! Editor-level types: configuration, undo levels and the level store.

/// Editor configuration.
pub mod config;
/// Undo level and event types.
pub mod history;
/// Plain-mode level store and reentrancy locks.
pub mod undo_manager;

pub use config::{ConfigError, EditorConfig};
pub use history::{UndoEvent, UndoLevel, UndoLevelType};
pub use undo_manager::{LockGuard, Locks, UndoManager};
