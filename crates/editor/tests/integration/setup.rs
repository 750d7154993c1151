//! Adaptor selection and the uninitialized state.

use std::rc::Rc;

use pretty_assertions::assert_eq;
use vellum_editor::{EditorConfig, EditorError, Plugin, RTC_PLUGIN, RtcError, RtcSetup, gateway};
use vellum_primitives::{Content, ContentArgs, ContentFormat, SetContentArgs, poll_once};

use crate::common::{MockEngine, MockRtcPlugin, editor_with, init_tracing, rtc_editor};

/// Plugin registered under the collaboration name without an engine.
struct Inert;

impl Plugin for Inert {}

#[test]
fn no_rtc_plugin_installs_plain_adaptor() {
	init_tracing();
	let (mut editor, _doc) = editor_with("<p>a</p>", EditorConfig::default());
	editor.register_plugin("lists", Rc::new(Inert));

	assert!(!gateway::is_rtc(&editor));
	assert!(gateway::setup(&mut editor).unwrap().is_none());

	let adaptor = editor.adaptor().expect("installed");
	assert!(!adaptor.is_collaborative());
	assert!(!adaptor.is_remote());
}

#[tokio::test]
async fn rtc_plugin_installs_collaborative_adaptor() {
	for is_remote in [false, true] {
		let (editor, _doc, _engine) = rtc_editor("", is_remote).await;
		assert!(gateway::is_rtc(&editor));
		let adaptor = editor.adaptor().expect("installed");
		assert!(adaptor.is_collaborative());
		assert_eq!(adaptor.is_remote(), is_remote);
	}
}

#[tokio::test]
async fn setup_stays_pending_until_engine_is_ready() {
	init_tracing();
	let (mut editor, _doc) = editor_with("", EditorConfig::default());
	let (plugin, ready) = MockRtcPlugin::deferred();
	editor.register_plugin(RTC_PLUGIN, plugin);

	let mut pending = gateway::setup(&mut editor).unwrap().expect("pending");
	assert!(poll_once(pending.as_mut()).is_none());
	assert!(poll_once(pending.as_mut()).is_none());

	let engine = Rc::new(MockEngine::default());
	ready
		.send(Ok(RtcSetup {
			runtime: engine,
			is_remote: true,
		}))
		.expect("setup future alive");
	assert!(pending.await.unwrap());

	assert!(editor.adaptor().is_some_and(|a| a.is_collaborative()));
}

#[test]
fn operations_before_setup_fail() {
	init_tracing();
	let (mut editor, _doc) = editor_with("<p>a</p>", EditorConfig::default());

	assert!(matches!(gateway::undo(&mut editor), Err(EditorError::NotInitialized)));
	assert!(matches!(gateway::has_undo(&editor), Err(EditorError::NotInitialized)));
	assert!(matches!(
		gateway::get_content(&editor, &ContentArgs::default(), ContentFormat::Html),
		Err(EditorError::NotInitialized)
	));
	assert!(matches!(
		gateway::set_content(&mut editor, Content::from("x"), &SetContentArgs::default()),
		Err(EditorError::NotInitialized)
	));

	let mut ran = false;
	let result = gateway::transact(&mut editor, |_| ran = true);
	assert!(matches!(result, Err(EditorError::NotInitialized)));
	assert!(!ran);
}

#[tokio::test]
async fn failed_engine_leaves_editor_uninitialized() {
	init_tracing();
	let (mut editor, _doc) = editor_with("", EditorConfig::default());
	let error = RtcError::Unavailable("connection refused".into());
	editor.register_plugin(RTC_PLUGIN, MockRtcPlugin::failing(error.clone()));

	let pending = gateway::setup(&mut editor).unwrap().expect("pending");
	match pending.await {
		Err(EditorError::Setup(err)) => assert_eq!(err, error),
		other => panic!("expected setup failure, got {other:?}"),
	}

	assert!(editor.adaptor().is_none());
	assert!(matches!(gateway::redo(&mut editor), Err(EditorError::NotInitialized)));
}

#[tokio::test]
async fn dropped_engine_reports_unavailable() {
	init_tracing();
	let (mut editor, _doc) = editor_with("", EditorConfig::default());
	let (plugin, ready) = MockRtcPlugin::deferred();
	editor.register_plugin(RTC_PLUGIN, plugin);
	drop(ready);

	let pending = gateway::setup(&mut editor).unwrap().expect("pending");
	assert!(matches!(
		pending.await,
		Err(EditorError::Setup(RtcError::Unavailable(_)))
	));
}

#[tokio::test]
async fn second_setup_is_rejected() {
	let (mut editor, _doc, _engine) = rtc_editor("", false).await;
	assert!(matches!(
		gateway::setup(&mut editor),
		Err(EditorError::AlreadyInitialized)
	));
	assert!(editor.adaptor().is_some_and(|a| a.is_collaborative()));
}

#[test]
fn rtc_plugin_without_engine_is_rejected() {
	init_tracing();
	let (mut editor, _doc) = editor_with("", EditorConfig::default());
	editor.register_plugin(RTC_PLUGIN, Rc::new(Inert));

	assert!(gateway::is_rtc(&editor));
	assert!(matches!(gateway::setup(&mut editor), Err(EditorError::MissingRtcApi)));
	assert!(editor.adaptor().is_none());
}
