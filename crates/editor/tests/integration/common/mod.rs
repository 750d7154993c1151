//! Test doubles for editor integration tests.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use tokio::sync::oneshot;
use vellum_editor::{
	ContentHost, Editor, EditorConfig, FormatHost, Hosts, Plugin, RTC_PLUGIN, RtcError, RtcPlugin,
	RtcRuntime, RtcSetup, SelectionHost,
};
use vellum_primitives::{
	Bookmark, BoxFutureLocal, Content, ContentArgs, ContentFormat, FormatRegistry, FormatTarget,
	FormatVars, Fragment, InsertDetails, Node, ParseOptions, SetContentArgs,
};

/// Document state shared by the local host doubles.
#[derive(Debug)]
pub struct DocState {
	pub html: String,
	pub bookmark: Bookmark,
	pub fragments: Option<Vec<String>>,
	pub log: Vec<String>,
}

pub type SharedDoc = Rc<RefCell<DocState>>;

pub fn init_tracing() {
	let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn serialize_node(node: &Node, out: &mut String) {
	match node {
		Node::Element {
			name,
			attrs,
			children,
		} => {
			out.push('<');
			out.push_str(name);
			for (k, v) in attrs {
				out.push_str(&format!(" {k}=\"{v}\""));
			}
			out.push('>');
			for child in children {
				serialize_node(child, out);
			}
			out.push_str(&format!("</{name}>"));
		}
		Node::Text { value } => out.push_str(value),
		Node::Comment { value } => out.push_str(&format!("<!--{value}-->")),
	}
}

pub fn serialize(fragment: &Fragment) -> String {
	let mut out = String::new();
	for node in &fragment.children {
		serialize_node(node, &mut out);
	}
	out
}

fn strip_tags(markup: &str) -> String {
	let mut out = String::new();
	let mut in_tag = false;
	for ch in markup.chars() {
		match ch {
			'<' => in_tag = true,
			'>' => in_tag = false,
			c if !in_tag => out.push(c),
			_ => {}
		}
	}
	out
}

/// Content pipeline over a markup string. Parsing wraps text in a paragraph;
/// filters drop comments and `data-bogus` attributes.
pub struct MockContent(pub SharedDoc);

impl ContentHost for MockContent {
	fn parse(&self, markup: &str, options: ParseOptions) -> Fragment {
		self.0.borrow_mut().log.push(format!(
			"parse:{markup}:root={}:insert={}",
			options.is_root_content, options.insert
		));
		Fragment::from_nodes([Node::element("p").with_child(Node::text(markup))])
	}

	fn serialize(&self, fragment: &Fragment) -> String {
		serialize(fragment)
	}

	fn run_filters(&self, fragment: &mut Fragment) {
		fragment.retain(|node| !matches!(node, Node::Comment { .. }));
		fragment.walk_mut(|node| {
			node.remove_attr("data-bogus");
		});
	}

	fn get_content(&self, format: ContentFormat, _args: &ContentArgs) -> Content {
		let html = self.0.borrow().html.clone();
		match format {
			ContentFormat::Html | ContentFormat::Raw => Content::Markup(html),
			ContentFormat::Text => Content::Markup(strip_tags(&html)),
			ContentFormat::Tree => Content::Tree(Fragment::from_nodes([Node::text(html)])),
		}
	}

	fn set_content(&mut self, content: Content, args: &SetContentArgs) -> Content {
		let html = match &content {
			Content::Markup(markup) => markup.clone(),
			Content::Tree(fragment) => serialize(fragment),
		};
		let mut doc = self.0.borrow_mut();
		doc.log.push(format!("set_content:{:?}:{html}", args.format));
		doc.html = html;
		content
	}

	fn insert_content(&mut self, content: Content, _details: &InsertDetails) {
		let html = match &content {
			Content::Markup(markup) => markup.clone(),
			Content::Tree(fragment) => serialize(fragment),
		};
		self.0.borrow_mut().html.push_str(&html);
	}

	fn snapshot(&self) -> String {
		self.0.borrow().html.clone()
	}

	fn fragments(&self) -> Option<Vec<String>> {
		self.0.borrow().fragments.clone()
	}
}

pub struct MockSelection(pub SharedDoc);

impl SelectionHost for MockSelection {
	fn bookmark(&self) -> Bookmark {
		self.0.borrow().bookmark.clone()
	}

	fn move_to_bookmark(&mut self, bookmark: &Bookmark) {
		let mut doc = self.0.borrow_mut();
		doc.log.push(format!("move_to_bookmark:{:?}", bookmark.start));
		doc.bookmark = bookmark.clone();
	}

	fn get_selected_content(&self, format: ContentFormat, _args: &ContentArgs) -> String {
		format!("local-selection:{format:?}")
	}
}

pub struct MockFormatter(pub SharedDoc);

impl FormatHost for MockFormatter {
	fn apply(&mut self, name: &str, vars: Option<&FormatVars>, target: Option<&FormatTarget>) {
		self.0
			.borrow_mut()
			.log
			.push(format!("apply:{name}:{vars:?}:{target:?}"));
	}

	fn remove(
		&mut self,
		name: &str,
		vars: Option<&FormatVars>,
		target: Option<&FormatTarget>,
		similar: bool,
	) {
		self.0
			.borrow_mut()
			.log
			.push(format!("remove:{name}:{vars:?}:{target:?}:{similar}"));
	}

	fn toggle(
		&mut self,
		formats: &FormatRegistry,
		name: &str,
		vars: Option<&FormatVars>,
		target: Option<&FormatTarget>,
	) {
		self.0.borrow_mut().log.push(format!(
			"toggle:{name}:{vars:?}:{target:?}:known={}",
			formats.contains(name)
		));
	}
}

/// Builds an editor over `html` without running setup.
pub fn editor_with(html: &str, config: EditorConfig) -> (Editor, SharedDoc) {
	let doc = Rc::new(RefCell::new(DocState {
		html: html.to_string(),
		bookmark: Bookmark::caret(vec![0, 0]),
		fragments: None,
		log: Vec::new(),
	}));
	let hosts = Hosts {
		content: Box::new(MockContent(doc.clone())),
		formatter: Box::new(MockFormatter(doc.clone())),
		selection: Box::new(MockSelection(doc.clone())),
	};
	(Editor::new(hosts, config), doc)
}

/// Builds an editor with the plain adaptor installed.
pub fn plain_editor(html: &str) -> (Editor, SharedDoc) {
	plain_editor_with(html, EditorConfig::default())
}

pub fn plain_editor_with(html: &str, config: EditorConfig) -> (Editor, SharedDoc) {
	init_tracing();
	let (mut editor, doc) = editor_with(html, config);
	assert!(vellum_editor::setup(&mut editor).expect("setup").is_none());
	(editor, doc)
}

/// Replaces the document directly through the shared state, the way a user
/// edit would.
pub fn type_text(doc: &SharedDoc, html: &str, caret: usize) {
	let mut doc = doc.borrow_mut();
	doc.html = html.to_string();
	doc.bookmark = Bookmark::caret(vec![0, caret]);
}

#[derive(Debug, Default)]
pub struct EngineState {
	pub log: Vec<String>,
	pub content: Option<Fragment>,
	pub selection: Option<Fragment>,
	pub has_undo: bool,
	pub has_redo: bool,
	pub depth: usize,
}

/// Collaboration engine double recording every call.
#[derive(Debug, Default)]
pub struct MockEngine {
	pub state: RefCell<EngineState>,
}

impl MockEngine {
	pub fn log(&self) -> Vec<String> {
		self.state.borrow().log.clone()
	}

	fn record(&self, entry: String) {
		self.state.borrow_mut().log.push(entry);
	}
}

impl RtcRuntime for MockEngine {
	fn undo(&self) {
		self.record("undo".into());
	}

	fn redo(&self) {
		self.record("redo".into());
	}

	fn has_undo(&self) -> bool {
		self.state.borrow().has_undo
	}

	fn has_redo(&self) -> bool {
		self.state.borrow().has_redo
	}

	fn transact(&self, f: Box<dyn FnOnce() + '_>) {
		self.record("transact:begin".into());
		self.state.borrow_mut().depth += 1;
		f();
		self.state.borrow_mut().depth -= 1;
		self.record("transact:end".into());
	}

	fn apply_format(&self, name: &str, vars: &FormatVars) {
		self.record(format!("apply_format:{name}:{vars:?}"));
	}

	fn remove_format(&self, name: &str, vars: &FormatVars) {
		self.record(format!("remove_format:{name}:{vars:?}"));
	}

	fn toggle_format(&self, name: &str, vars: &FormatVars) {
		self.record(format!("toggle_format:{name}:{vars:?}"));
	}

	fn get_content(&self) -> Option<Fragment> {
		self.state.borrow().content.clone()
	}

	fn set_content(&self, fragment: Fragment) {
		let mut state = self.state.borrow_mut();
		state.log.push(format!("set_content:{}", serialize(&fragment)));
		state.content = Some(fragment);
	}

	fn insert_content(&self, fragment: Fragment) {
		let depth = self.state.borrow().depth;
		self.record(format!("insert_content:{}:depth={depth}", serialize(&fragment)));
	}

	fn get_selected_content(&self) -> Option<Fragment> {
		self.state.borrow().selection.clone()
	}
}

/// `rtc` plugin whose engine becomes ready when the paired sender fires.
pub struct MockRtcPlugin {
	ready: Cell<Option<oneshot::Receiver<Result<RtcSetup, RtcError>>>>,
}

impl MockRtcPlugin {
	pub fn deferred() -> (Rc<Self>, oneshot::Sender<Result<RtcSetup, RtcError>>) {
		let (tx, rx) = oneshot::channel();
		let plugin = Rc::new(Self {
			ready: Cell::new(Some(rx)),
		});
		(plugin, tx)
	}

	pub fn ready(engine: Rc<MockEngine>, is_remote: bool) -> Rc<Self> {
		let (plugin, tx) = Self::deferred();
		let runtime: Rc<dyn RtcRuntime> = engine;
		tx.send(Ok(RtcSetup { runtime, is_remote }))
			.expect("receiver alive");
		plugin
	}

	pub fn failing(error: RtcError) -> Rc<Self> {
		let (plugin, tx) = Self::deferred();
		tx.send(Err(error)).expect("receiver alive");
		plugin
	}
}

impl RtcPlugin for MockRtcPlugin {
	fn setup(&self) -> BoxFutureLocal<'static, Result<RtcSetup, RtcError>> {
		let ready = self.ready.take();
		Box::pin(async move {
			match ready {
				Some(rx) => rx
					.await
					.unwrap_or_else(|_| Err(RtcError::Unavailable("engine dropped".into()))),
				None => Err(RtcError::Rejected("setup already called".into())),
			}
		})
	}
}

impl Plugin for MockRtcPlugin {
	fn rtc(&self) -> Option<&dyn RtcPlugin> {
		Some(self)
	}
}

/// Builds an editor with the collaborative adaptor installed.
pub async fn rtc_editor(html: &str, is_remote: bool) -> (Editor, SharedDoc, Rc<MockEngine>) {
	init_tracing();
	let (mut editor, doc) = editor_with(html, EditorConfig::default());
	let engine = Rc::new(MockEngine::default());
	editor.register_plugin(RTC_PLUGIN, MockRtcPlugin::ready(engine.clone(), is_remote));
	let pending = vellum_editor::setup(&mut editor)
		.expect("setup")
		.expect("rtc setup is asynchronous");
	let remote = pending.await.expect("engine ready");
	assert_eq!(remote, is_remote);
	(editor, doc, engine)
}
