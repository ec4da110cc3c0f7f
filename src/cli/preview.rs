//! Run the content-script lifecycle against a page URL without a browser

use anyhow::Result;

use crate::i18n::Translator;
use crate::panel::{load_resource, Completion, ContentSession, Effect, VirtualDocument, WorldSource};
use crate::view::panel::PanelContent;
use crate::view::Action;
use crate::watcher::NavigationSource;
use crate::InspectorOptions;

/// What the sidebar ended up showing for a page.
#[derive(Debug)]
pub struct Preview {
    pub completion: Completion,
    pub content: Option<PanelContent>,
    pub sidebar_html: String,
    pub sidebar_text: String,
}

/// Land on `url`, click the trigger button and wait for the sidebar to load.
///
/// Fails when `url` is not a world page.
pub async fn run_preview<S: WorldSource>(
    options: &InspectorOptions,
    source: &S,
    url: &str,
    t: &Translator,
) -> Result<Preview> {
    let mut session = ContentSession::new(options, VirtualDocument::new());

    session.navigate(NavigationSource::Startup, url, t);
    if session.watcher().current_world_id().is_none() {
        anyhow::bail!("not a world page: {}", url);
    }

    // nothing on the clipboard is touched by opening the panel
    let mut clipboard = String::new();
    let ticket = match session.dispatch(Action::OpenPanel, &mut clipboard, t) {
        Some(Effect::Fetch(ticket)) => ticket,
        other => anyhow::bail!("opening the panel did not request a fetch: {:?}", other),
    };

    let outcome = load_resource(session.host(), source, ticket.world_id()).await;
    let completion = session.complete(&ticket, outcome, t);

    let document = session.host();
    Ok(Preview {
        completion,
        content: session.controller().content().cloned(),
        sidebar_html: document.sidebar().map(|n| n.to_html()).unwrap_or_default(),
        sidebar_text: document.sidebar_text(),
    })
}
