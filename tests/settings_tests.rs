//! Language preference flow between the popup and the content script

use futures::executor::block_on;
use marble_inspector::models::ExtensionMessage;
use marble_inspector::panel::{ContentSession, VirtualDocument};
use marble_inspector::settings::{load_language, save_language, MemoryStore, Messenger, PopupState, LANGUAGE_KEY};
use marble_inspector::{InspectorOptions, Language, NavigationSource, Translator};
use std::cell::RefCell;

/// Records messages; `delivers` mimics a tab with or without the content script.
struct RecordingMessenger {
    delivers: bool,
    sent: RefCell<Vec<ExtensionMessage>>,
}

impl RecordingMessenger {
    fn new(delivers: bool) -> Self {
        Self { delivers, sent: RefCell::new(Vec::new()) }
    }
}

impl Messenger for RecordingMessenger {
    async fn send_to_active_tab(&self, message: &ExtensionMessage) -> bool {
        self.sent.borrow_mut().push(message.clone());
        self.delivers
    }
}

#[test]
fn test_popup_save_flow() {
    let store = MemoryStore::new();
    let messenger = RecordingMessenger::new(true);

    let mut popup = PopupState::loaded(block_on(load_language(&store)));
    assert!(!popup.can_save());

    popup.select(Language::ZhCn);
    assert!(popup.can_save());

    let delivered = block_on(save_language(&store, &messenger, popup.selected())).unwrap();
    popup.mark_saved(Language::ZhCn);

    assert!(delivered);
    assert!(popup.show_save_success());
    assert!(!popup.can_save());
    assert_eq!(store.raw(LANGUAGE_KEY).as_deref(), Some("zh_CN"));
    assert_eq!(
        messenger.sent.borrow().as_slice(),
        &[ExtensionMessage::LanguageChanged { language: Language::ZhCn }]
    );
}

#[test]
fn test_tab_without_content_script_still_saves() {
    let store = MemoryStore::new();
    let messenger = RecordingMessenger::new(false);

    let delivered = block_on(save_language(&store, &messenger, Language::ZhCn)).unwrap();
    assert!(!delivered);
    assert_eq!(block_on(load_language(&store)), Language::ZhCn);
}

#[test]
fn test_language_change_message_rerenders_panel() {
    let message: ExtensionMessage =
        serde_json::from_str(r#"{"type":"LANGUAGE_CHANGED","language":"zh_CN"}"#).unwrap();
    let ExtensionMessage::LanguageChanged { language } = message;

    let mut session = ContentSession::new(&InspectorOptions::default(), VirtualDocument::new());
    session.navigate(
        NavigationSource::Startup,
        "https://marble.worldlabs.ai/world/123e4567-e89b-12d3-a456-426614174000",
        &Translator::new(Language::En),
    );
    let button = session.host().button().and_then(|b| b.as_element()).cloned().unwrap();
    assert_eq!(button.attribute("title"), Some("Show world details"));

    session.rerender(&Translator::new(language));
    let button = session.host().button().and_then(|b| b.as_element()).cloned().unwrap();
    assert_ne!(button.attribute("title"), Some("Show world details"));
    assert_eq!(session.host().button_count(), 1);
}
