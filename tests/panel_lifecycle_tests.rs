//! Button and sidebar lifecycle against the in-memory document

use futures::executor::block_on;
use marble_inspector::panel::{
    load_resource, Completion, ContentSession, ContextHandle, Effect, FetchError, FetchTicket, LoadOutcome,
    VirtualDocument, WorldSource,
};
use marble_inspector::view::panel::PanelContent;
use marble_inspector::view::Action;
use marble_inspector::{InspectorOptions, NavigationSource, StaleResponsePolicy, Translator, WorldId, WorldRecord};
use std::collections::HashMap;
use std::time::Duration;

const WORLD_A: &str = "https://marble.worldlabs.ai/world/123e4567-e89b-12d3-a456-426614174000";
const WORLD_B: &str = "https://marble.worldlabs.ai/world/aaaaaaaa-bbbb-cccc-dddd-eeeeeeeeeeee";
const EXPLORE: &str = "https://marble.worldlabs.ai/explore";

/// Serves records keyed by world id; unknown ids answer 404.
struct FixtureSource {
    records: HashMap<String, WorldRecord>,
}

impl FixtureSource {
    fn new() -> Self {
        let mut records = HashMap::new();
        records.insert("123e4567-e89b-12d3-a456-426614174000".to_string(), named("Alpha"));
        records.insert("aaaaaaaa-bbbb-cccc-dddd-eeeeeeeeeeee".to_string(), named("Beta"));
        Self { records }
    }
}

impl WorldSource for FixtureSource {
    async fn fetch_world(&self, world_id: &WorldId) -> Result<WorldRecord, FetchError> {
        self.records.get(world_id.as_str()).cloned().ok_or(FetchError::Status(404))
    }
}

fn named(name: &str) -> WorldRecord {
    WorldRecord {
        display_name: Some(name.to_string()),
        ..Default::default()
    }
}

fn session(options: &InspectorOptions) -> ContentSession<VirtualDocument> {
    ContentSession::new(options, VirtualDocument::new())
}

fn open(session: &mut ContentSession<VirtualDocument>, t: &Translator) -> FetchTicket {
    let mut clipboard = String::new();
    match session.dispatch(Action::OpenPanel, &mut clipboard, t) {
        Some(Effect::Fetch(ticket)) => ticket,
        other => panic!("expected a fetch, got {:?}", other),
    }
}

fn load(session: &ContentSession<VirtualDocument>, ticket: &FetchTicket) -> LoadOutcome {
    block_on(load_resource(session.host(), &FixtureSource::new(), ticket.world_id()))
}

#[test]
fn test_button_appears_only_on_world_pages() {
    let t = Translator::default();
    let mut session = session(&InspectorOptions::default());

    session.navigate(NavigationSource::Startup, EXPLORE, &t);
    assert_eq!(session.host().button_count(), 0);

    session.navigate(NavigationSource::LocationChange, WORLD_A, &t);
    assert_eq!(session.host().button_count(), 1);

    session.navigate(NavigationSource::LocationChange, WORLD_B, &t);
    assert_eq!(session.host().button_count(), 1);

    session.navigate(NavigationSource::PopState, EXPLORE, &t);
    assert_eq!(session.host().button_count(), 0);
    assert_eq!(session.host().sidebar_count(), 0);
}

#[test]
fn test_open_load_close() {
    let t = Translator::default();
    let mut session = session(&InspectorOptions::default());
    session.navigate(NavigationSource::Startup, WORLD_A, &t);

    let ticket = open(&mut session, &t);
    assert_eq!(session.host().sidebar_count(), 1);
    assert!(session.host().sidebar_text().contains("Loading world data..."));

    let outcome = load(&session, &ticket);
    assert_eq!(session.complete(&ticket, outcome, &t), Completion::Rendered);
    assert!(session.host().sidebar_text().contains("Alpha"));

    let mut clipboard = String::new();
    assert_eq!(session.dispatch(Action::ClosePanel, &mut clipboard, &t), None);
    assert_eq!(session.host().sidebar_count(), 0);
    assert_eq!(session.host().button_count(), 1);
}

#[test]
fn test_reopening_never_duplicates_sidebar() {
    let t = Translator::default();
    let mut session = session(&InspectorOptions::default());
    session.navigate(NavigationSource::Startup, WORLD_A, &t);

    open(&mut session, &t);
    open(&mut session, &t);
    assert_eq!(session.host().sidebar_count(), 1);
}

#[test]
fn test_failed_fetch_shows_error() {
    let t = Translator::default();
    let mut session = session(&InspectorOptions::default());
    session.navigate(
        NavigationSource::Startup,
        "https://marble.worldlabs.ai/world/00000000-0000-0000-0000-000000000000",
        &t,
    );

    let ticket = open(&mut session, &t);
    let outcome = load(&session, &ticket);
    assert_eq!(outcome, LoadOutcome::Failed(FetchError::Status(404)));

    assert_eq!(session.complete(&ticket, outcome, &t), Completion::Rendered);
    assert_eq!(session.controller().content(), Some(&PanelContent::Error));
    assert!(session.host().sidebar_text().contains("Failed to load world data"));
}

#[test]
fn test_navigating_with_open_sidebar_refetches() {
    let t = Translator::default();
    let mut session = session(&InspectorOptions::default());
    session.navigate(NavigationSource::Startup, WORLD_A, &t);
    let first = open(&mut session, &t);

    let second = session
        .navigate(NavigationSource::LocationChange, WORLD_B, &t)
        .expect("open sidebar follows navigation");
    assert_eq!(second.world_id().as_str(), "aaaaaaaa-bbbb-cccc-dddd-eeeeeeeeeeee");
    assert!(second.generation() > first.generation());

    let outcome = load(&session, &second);
    assert_eq!(session.complete(&second, outcome, &t), Completion::Rendered);
    assert!(session.host().sidebar_text().contains("Beta"));

    // the first world's response arrives late
    let late = load(&session, &first);
    assert_eq!(session.complete(&first, late, &t), Completion::Stale);
    assert!(session.host().sidebar_text().contains("Beta"));
}

#[test]
fn test_render_policy_shows_late_response() {
    let options = InspectorOptions {
        stale_responses: StaleResponsePolicy::Render,
        ..Default::default()
    };
    let t = Translator::default();
    let mut session = session(&options);
    session.navigate(NavigationSource::Startup, WORLD_A, &t);
    let first = open(&mut session, &t);
    session.navigate(NavigationSource::LocationChange, WORLD_B, &t);

    let late = load(&session, &first);
    assert_eq!(session.complete(&first, late, &t), Completion::Rendered);
    assert!(session.host().sidebar_text().contains("Alpha"));
}

#[test]
fn test_closed_sidebar_ignores_response() {
    let t = Translator::default();
    let mut session = session(&InspectorOptions::default());
    session.navigate(NavigationSource::Startup, WORLD_A, &t);
    let ticket = open(&mut session, &t);

    let mut clipboard = String::new();
    session.dispatch(Action::ClosePanel, &mut clipboard, &t);

    let outcome = load(&session, &ticket);
    assert_eq!(session.complete(&ticket, outcome, &t), Completion::NoSidebar);
    assert_eq!(session.host().sidebar_count(), 0);
}

#[test]
fn test_invalid_context_blocks_everything() {
    let t = Translator::default();
    let context = ContextHandle::new();
    let mut session = ContentSession::new(&InspectorOptions::default(), VirtualDocument::with_context(context.clone()));
    session.navigate(NavigationSource::Startup, WORLD_A, &t);
    let before = session.host().mutation_count();

    context.invalidate();

    assert_eq!(session.navigate(NavigationSource::LocationChange, WORLD_B, &t), None);
    let mut clipboard = String::new();
    assert_eq!(session.dispatch(Action::OpenPanel, &mut clipboard, &t), None);
    session.rerender(&t);
    assert_eq!(session.host().mutation_count(), before);
}

#[test]
fn test_copy_and_download_need_loaded_world() {
    let t = Translator::default();
    let mut session = session(&InspectorOptions::default());
    session.navigate(NavigationSource::Startup, WORLD_A, &t);
    let ticket = open(&mut session, &t);

    let mut clipboard = String::from("untouched");
    assert_eq!(session.dispatch(Action::CopyPrompt, &mut clipboard, &t), None);
    assert_eq!(clipboard, "untouched");

    let outcome = load(&session, &ticket);
    session.complete(&ticket, outcome, &t);

    match session.dispatch(Action::CopyPrompt, &mut clipboard, &t) {
        Some(Effect::Flash(flash)) => {
            assert_eq!(flash.label_at(Duration::ZERO), "Copied!");
            assert_eq!(flash.label_at(flash.revert_after), "Copy Prompt");
            assert_eq!(flash.revert_after, Duration::from_millis(2000));
        }
        other => panic!("expected a label flash, got {:?}", other),
    }
    // Alpha has no prompt
    assert_eq!(clipboard, "");

    match session.dispatch(Action::DownloadInputImage, &mut clipboard, &t) {
        Some(Effect::Download(link)) => assert_eq!(link.filename, "input-image.png"),
        other => panic!("expected a download, got {:?}", other),
    }
}

#[test]
fn test_repeated_reports_of_same_url_change_nothing() {
    let t = Translator::default();
    let mut session = session(&InspectorOptions::default());
    session.navigate(NavigationSource::Startup, WORLD_A, &t);
    let ticket = open(&mut session, &t);
    let outcome = load(&session, &ticket);
    session.complete(&ticket, outcome, &t);
    let mutations = session.host().mutation_count();

    for source in [NavigationSource::LocationChange, NavigationSource::PopState, NavigationSource::Poll] {
        assert_eq!(session.navigate(source, WORLD_A, &t), None, "{:?}", source);
    }

    assert_eq!(session.host().mutation_count(), mutations);
    assert_eq!(session.host().button_count(), 1);
    assert_eq!(session.host().sidebar_count(), 1);
}

#[test]
fn test_leaving_world_with_open_sidebar_clears_everything() {
    let t = Translator::default();
    let mut session = session(&InspectorOptions::default());
    session.navigate(NavigationSource::Startup, WORLD_A, &t);
    let ticket = open(&mut session, &t);

    assert_eq!(session.navigate(NavigationSource::Poll, EXPLORE, &t), None);
    assert_eq!(session.host().sidebar_count(), 0);
    assert_eq!(session.host().button_count(), 0);
    assert!(session.watcher().current_world_id().is_none());
    assert!(session.controller().content().is_none());

    // the request started before leaving resolves afterwards
    let mutations = session.host().mutation_count();
    let outcome = load(&session, &ticket);
    assert_eq!(session.complete(&ticket, outcome, &t), Completion::Stale);
    assert_eq!(session.host().mutation_count(), mutations);
}
