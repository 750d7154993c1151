//! Parsed content trees.
//!
//! A [`Fragment`] is the tree form of editor content: what the local parser
//! produces, what the serializer consumes, and what a collaboration engine
//! exchanges with the editor. Only the shape lives here; parsing,
//! serialization and filtering belong to the content host.

use serde::{Deserialize, Serialize};


/// A single node of a content tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Node {
	/// Element with a tag name, ordered attributes and children.
	Element {
		/// Tag name, lowercase.
		name: String,
		/// Attributes in document order.
		attrs: Vec<(String, String)>,
		/// Child nodes.
		children: Vec<Node>,
	},
	/// Text run.
	Text {
		/// Unescaped text.
		value: String,
	},
	/// Comment node.
	Comment {
		/// Comment body.
		value: String,
	},
}

impl Node {
	/// Creates an empty element.
	pub fn element(name: impl Into<String>) -> Self {
		Node::Element {
			name: name.into(),
			attrs: Vec::new(),
			children: Vec::new(),
		}
	}

	/// Creates a text node.
	pub fn text(value: impl Into<String>) -> Self {
		Node::Text {
			value: value.into(),
		}
	}

	/// Creates a comment node.
	pub fn comment(value: impl Into<String>) -> Self {
		Node::Comment {
			value: value.into(),
		}
	}

	/// Sets an attribute, replacing an existing value of the same name.
	///
	/// Has no effect on text and comment nodes.
	pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.set_attr(key, value);
		self
	}

	/// Appends a child. Has no effect on text and comment nodes.
	pub fn with_child(mut self, child: Node) -> Self {
		if let Node::Element { children, .. } = &mut self {
			children.push(child);
		}
		self
	}

	/// Sets an attribute in place.
	pub fn set_attr(&mut self, key: impl Into<String>, value: impl Into<String>) {
		let Node::Element { attrs, .. } = self else {
			return;
		};
		let key = key.into();
		let value = value.into();
		match attrs.iter_mut().find(|(k, _)| *k == key) {
			Some((_, v)) => *v = value,
			None => attrs.push((key, value)),
		}
	}

	/// Removes an attribute, returning its previous value.
	pub fn remove_attr(&mut self, key: &str) -> Option<String> {
		let Node::Element { attrs, .. } = self else {
			return None;
		};
		let pos = attrs.iter().position(|(k, _)| k == key)?;
		Some(attrs.remove(pos).1)
	}

	/// Returns the value of an attribute.
	pub fn attr(&self, key: &str) -> Option<&str> {
		match self {
			Node::Element { attrs, .. } => attrs
				.iter()
				.find(|(k, _)| k == key)
				.map(|(_, v)| v.as_str()),
			_ => None,
		}
	}

	/// Returns the tag name for elements.
	pub fn name(&self) -> Option<&str> {
		match self {
			Node::Element { name, .. } => Some(name),
			_ => None,
		}
	}

	/// Returns the child list for elements, empty otherwise.
	pub fn children(&self) -> &[Node] {
		match self {
			Node::Element { children, .. } => children,
			_ => &[],
		}
	}

	/// Concatenated text of this node and its descendants.
	pub fn text_content(&self) -> String {
		let mut out = String::new();
		self.collect_text(&mut out);
		out
	}

	fn collect_text(&self, out: &mut String) {
		match self {
			Node::Text { value } => out.push_str(value),
			Node::Element { children, .. } => {
				for child in children {
					child.collect_text(out);
				}
			}
			Node::Comment { .. } => {}
		}
	}

	fn walk_mut(&mut self, f: &mut impl FnMut(&mut Node)) {
		f(self);
		if let Node::Element { children, .. } = self {
			for child in children {
				child.walk_mut(f);
			}
		}
	}

	fn retain(&mut self, keep: &mut impl FnMut(&Node) -> bool) {
		if let Node::Element { children, .. } = self {
			children.retain(|child| keep(child));
			for child in children {
				child.retain(keep);
			}
		}
	}
}

/// An ordered list of top-level nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fragment {
	/// Top-level nodes in document order.
	pub children: Vec<Node>,
}

impl Fragment {
	/// Creates an empty fragment.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a fragment from top-level nodes.
	pub fn from_nodes(children: impl IntoIterator<Item = Node>) -> Self {
		Self {
			children: children.into_iter().collect(),
		}
	}

	/// Returns `true` if the fragment has no nodes.
	pub fn is_empty(&self) -> bool {
		self.children.is_empty()
	}

	/// Appends a top-level node.
	pub fn push(&mut self, node: Node) {
		self.children.push(node);
	}

	/// Concatenated text of every node.
	pub fn text_content(&self) -> String {
		let mut out = String::new();
		for node in &self.children {
			node.collect_text(&mut out);
		}
		out
	}

	/// Visits every node depth-first, parents before children.
	pub fn walk_mut(&mut self, mut f: impl FnMut(&mut Node)) {
		for node in &mut self.children {
			node.walk_mut(&mut f);
		}
	}

	/// Drops every node, at any depth, for which `keep` returns `false`.
	///
	/// A dropped element takes its whole subtree with it.
	pub fn retain(&mut self, mut keep: impl FnMut(&Node) -> bool) {
		self.children.retain(|node| keep(node));
		for node in &mut self.children {
			node.retain(&mut keep);
		}
	}
}
