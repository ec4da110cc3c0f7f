//! URL parsing and navigation deduplication

use marble_inspector::{extract_world_id, NavigationSignal, NavigationSource, NavigationWatcher};
use test_case::test_case;

const ID: &str = "123e4567-e89b-12d3-a456-426614174000";

#[test_case("https://marble.worldlabs.ai/world/123e4567-e89b-12d3-a456-426614174000", Some(ID) ; "plain world page")]
#[test_case("https://marble.worldlabs.ai/world/123e4567-e89b-12d3-a456-426614174000/edit", Some(ID) ; "trailing path")]
#[test_case("https://marble.worldlabs.ai/world/123e4567-e89b-12d3-a456-426614174000?tab=info", Some(ID) ; "query string")]
#[test_case("https://marble.worldlabs.ai/world/123e4567", None ; "identifier too short")]
#[test_case("https://marble.worldlabs.ai/world/123E4567-E89B-12D3-A456-426614174000", None ; "uppercase hex")]
#[test_case("https://marble.worldlabs.ai/explore", None ; "not a world page")]
#[test_case("", None ; "empty url")]
fn test_extract_world_id(url: &str, expected: Option<&str>) {
    let id = extract_world_id(url);
    assert_eq!(id.as_ref().map(|id| id.as_str()), expected);
}

#[test]
fn test_back_and_forth_between_worlds() {
    let a = format!("https://marble.worldlabs.ai/world/{}", ID);
    let b = "https://marble.worldlabs.ai/world/aaaaaaaa-bbbb-cccc-dddd-eeeeeeeeeeee";
    let mut watcher = NavigationWatcher::new();

    assert!(matches!(
        watcher.observe(NavigationSource::Startup, &a),
        Some(NavigationSignal::ResourceChanged(_))
    ));
    assert!(matches!(
        watcher.observe(NavigationSource::LocationChange, b),
        Some(NavigationSignal::ResourceChanged(_))
    ));
    // popstate back to the first world
    match watcher.observe(NavigationSource::PopState, &a) {
        Some(NavigationSignal::ResourceChanged(id)) => assert_eq!(id.as_str(), ID),
        other => panic!("expected a change back to the first world, got {:?}", other),
    }
    // the poll sees the same URL right after
    assert_eq!(watcher.observe(NavigationSource::Poll, &a), None);
}

#[test]
fn test_poll_detects_change_missed_by_events() {
    let mut watcher = NavigationWatcher::new();
    watcher.observe(NavigationSource::Startup, "https://marble.worldlabs.ai/");

    let url = format!("https://marble.worldlabs.ai/world/{}", ID);
    assert!(watcher.observe(NavigationSource::Poll, &url).is_some());
    assert_eq!(watcher.current_world_id().map(|id| id.as_str()), Some(ID));
}
