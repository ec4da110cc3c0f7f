//! Single-page navigation tracking
//!
//! marble.worldlabs.ai is a single-page app, so moving between worlds never
//! reloads the content script. Three inputs report the current URL: the
//! framework's location-change event, the browser's `popstate`, and a
//! one-second poll. They all feed [`NavigationWatcher::observe`], and the
//! identifier comparison in [`NavigationWatcher::reconcile`] is what keeps
//! duplicate reports for the same transition harmless.

use crate::models::WorldId;
use crate::parser::extract_world_id;

/// Where a URL observation came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationSource {
    LocationChange,
    PopState,
    Poll,
    /// The content script's first look at the page.
    Startup,
}

/// What the panel has to react to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationSignal {
    ResourceChanged(WorldId),
    ResourceCleared,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WatcherState {
    pub current_world_id: Option<WorldId>,
    pub last_url: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct NavigationWatcher {
    state: WatcherState,
}

impl NavigationWatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &WatcherState {
        &self.state
    }

    pub fn current_world_id(&self) -> Option<&WorldId> {
        self.state.current_world_id.as_ref()
    }

    /// Feed one URL report from any source.
    ///
    /// Polls that see the same URL as last time are dropped before
    /// reconciliation; event-driven reports always reconcile.
    pub fn observe(&mut self, source: NavigationSource, url: &str) -> Option<NavigationSignal> {
        if source == NavigationSource::Poll && self.state.last_url.as_deref() == Some(url) {
            return None;
        }

        if self.state.last_url.as_deref() != Some(url) {
            log::debug!("URL change detected via {:?}: {}", source, url);
            self.state.last_url = Some(url.to_string());
        }

        self.reconcile(url)
    }

    /// Compare the world in `url` with the stored one.
    pub fn reconcile(&mut self, url: &str) -> Option<NavigationSignal> {
        let world_id = extract_world_id(url);
        if world_id.is_some() && world_id == self.state.current_world_id {
            return None;
        }

        match world_id {
            Some(id) => {
                self.state.current_world_id = Some(id.clone());
                Some(NavigationSignal::ResourceChanged(id))
            }
            None if self.state.current_world_id.is_some() => {
                self.state.current_world_id = None;
                Some(NavigationSignal::ResourceCleared)
            }
            None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORLD_A: &str = "https://marble.worldlabs.ai/world/123e4567-e89b-12d3-a456-426614174000";
    const WORLD_B: &str = "https://marble.worldlabs.ai/world/00000000-1111-2222-3333-444444444444";
    const EXPLORE: &str = "https://marble.worldlabs.ai/explore";

    #[test]
    fn test_first_world_is_a_change() {
        let mut watcher = NavigationWatcher::new();
        match watcher.observe(NavigationSource::Startup, WORLD_A) {
            Some(NavigationSignal::ResourceChanged(id)) => {
                assert_eq!(id.as_str(), "123e4567-e89b-12d3-a456-426614174000")
            }
            other => panic!("unexpected signal {:?}", other),
        }
        assert_eq!(watcher.state().last_url.as_deref(), Some(WORLD_A));
    }

    #[test]
    fn test_reconcile_is_idempotent() {
        let mut watcher = NavigationWatcher::new();
        assert!(watcher.reconcile(WORLD_A).is_some());
        assert!(watcher.reconcile(WORLD_A).is_none());
        assert!(watcher.reconcile(WORLD_A).is_none());
    }

    #[test]
    fn test_same_world_different_url_is_not_a_change() {
        let mut watcher = NavigationWatcher::new();
        watcher.observe(NavigationSource::Startup, WORLD_A);
        let with_query = format!("{}?view=orbit", WORLD_A);
        assert!(watcher.observe(NavigationSource::Poll, &with_query).is_none());
        assert_eq!(watcher.state().last_url.as_deref(), Some(with_query.as_str()));
    }

    #[test]
    fn test_all_sources_deduplicate_one_transition() {
        let mut watcher = NavigationWatcher::new();
        watcher.observe(NavigationSource::Startup, WORLD_A);

        let signals: Vec<_> = [
            NavigationSource::LocationChange,
            NavigationSource::PopState,
            NavigationSource::Poll,
        ]
        .into_iter()
        .filter_map(|source| watcher.observe(source, WORLD_B))
        .collect();

        assert_eq!(signals.len(), 1);
        assert!(matches!(signals[0], NavigationSignal::ResourceChanged(_)));
    }

    #[test]
    fn test_leaving_world_pages_clears_state() {
        let mut watcher = NavigationWatcher::new();
        watcher.observe(NavigationSource::Startup, WORLD_A);
        assert_eq!(
            watcher.observe(NavigationSource::PopState, EXPLORE),
            Some(NavigationSignal::ResourceCleared)
        );
        assert!(watcher.current_world_id().is_none());
        assert!(watcher.observe(NavigationSource::LocationChange, EXPLORE).is_none());
    }

    #[test]
    fn test_non_world_pages_never_signal() {
        let mut watcher = NavigationWatcher::new();
        assert!(watcher.observe(NavigationSource::Startup, EXPLORE).is_none());
        assert!(watcher.observe(NavigationSource::Poll, "https://marble.worldlabs.ai/").is_none());
    }
}
