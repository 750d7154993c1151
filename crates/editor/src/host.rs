//! Local subsystems the editor consumes.
//!
//! Parsing, serialization, formatting and selection handling live outside
//! this crate. The plain adaptor drives them directly; the collaborative
//! adaptor borrows the content pipeline to parse incoming markup, filter
//! engine fragments, and serve formats the engine cannot.

use vellum_primitives::{
	Bookmark, Content, ContentArgs, ContentFormat, FormatRegistry, FormatTarget, FormatVars,
	Fragment, InsertDetails, ParseOptions, SetContentArgs,
};

/// The local content pipeline: parser, serializer, filters and the document.
pub trait ContentHost {
	/// Parses markup into a content tree.
	fn parse(&self, markup: &str, options: ParseOptions) -> Fragment;

	/// Serializes a content tree to markup.
	fn serialize(&self, fragment: &Fragment) -> String;

	/// Runs the serializer's node and attribute filters over a tree.
	fn run_filters(&self, fragment: &mut Fragment);

	/// Reads the document in `format`.
	fn get_content(&self, format: ContentFormat, args: &ContentArgs) -> Content;

	/// Replaces the document, returning the content that was applied.
	fn set_content(&mut self, content: Content, args: &SetContentArgs) -> Content;

	/// Inserts content at the selection.
	fn insert_content(&mut self, content: Content, details: &InsertDetails);

	/// Trimmed raw serialization used for undo snapshots.
	///
	/// Must exclude transient markup such as caret containers so that two
	/// snapshots of the same document compare equal.
	fn snapshot(&self) -> String;

	/// Fragmented representation of the document, when the host keeps one.
	///
	/// Returning `Some` makes undo snapshots fragmented levels.
	fn fragments(&self) -> Option<Vec<String>> {
		None
	}

	/// Restores a fragmented snapshot.
	fn write_fragments(&mut self, fragments: &[String]) {
		self.set_content(Content::Markup(fragments.concat()), &SetContentArgs::raw());
	}
}

/// The local format engine.
pub trait FormatHost {
	/// Applies the named format.
	fn apply(&mut self, name: &str, vars: Option<&FormatVars>, target: Option<&FormatTarget>);

	/// Removes the named format. With `similar`, removes formats that match
	/// on element only, ignoring variables.
	fn remove(
		&mut self,
		name: &str,
		vars: Option<&FormatVars>,
		target: Option<&FormatTarget>,
		similar: bool,
	);

	/// Applies the named format if absent at the selection, removes it
	/// otherwise.
	fn toggle(
		&mut self,
		formats: &FormatRegistry,
		name: &str,
		vars: Option<&FormatVars>,
		target: Option<&FormatTarget>,
	);
}

/// The local selection engine.
pub trait SelectionHost {
	/// Captures the current selection.
	fn bookmark(&self) -> Bookmark;

	/// Restores a previously captured selection.
	fn move_to_bookmark(&mut self, bookmark: &Bookmark);

	/// Reads the selected content in `format`.
	fn get_selected_content(&self, format: ContentFormat, args: &ContentArgs) -> String;
}

/// The local subsystems an editor is built from.
pub struct Hosts {
	/// Content pipeline.
	pub content: Box<dyn ContentHost>,
	/// Format engine.
	pub formatter: Box<dyn FormatHost>,
	/// Selection engine.
	pub selection: Box<dyn SelectionHost>,
}
