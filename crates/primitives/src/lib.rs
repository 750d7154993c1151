//! Core types shared by the editor adaptors: content trees, content values,
//! selection bookmarks and format arguments.

/// Selection restore tokens.
pub mod bookmark;
/// Content values, formats and argument records.
pub mod content;
/// Format invocation arguments and definitions.
pub mod format;
/// Parsed content trees.
pub mod fragment;
/// Async future aliases.
pub mod future;

pub use bookmark::Bookmark;
pub use content::{
	Content, ContentArgs, ContentFormat, InsertDetails, ParseOptions, SetContentArgs,
};
pub use format::{FormatDefinition, FormatRegistry, FormatTarget, FormatVars};
pub use fragment::{Fragment, Node};
pub use future::{BoxFutureLocal, poll_once};
