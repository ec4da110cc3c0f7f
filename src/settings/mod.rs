//! Language preference storage and the popup's settings flow

pub mod popup;

pub use popup::PopupState;

use crate::models::{ExtensionMessage, Language};
use std::cell::RefCell;
use std::collections::HashMap;
use std::future::Future;
use thiserror::Error;

/// Key of the preference inside the extension's local storage area.
pub const LANGUAGE_KEY: &str = "preferredLanguage";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("stored value for {key} is invalid: {value}")]
    Invalid { key: String, value: String },
}

/// Extension-scoped key-value storage holding the language preference.
pub trait SettingsStore {
    /// The saved language, or the default when nothing was saved yet.
    fn language(&self) -> impl Future<Output = Result<Language, StorageError>>;

    fn set_language(&self, language: Language) -> impl Future<Output = Result<(), StorageError>>;
}

/// Delivery of one-shot messages to the active tab's content script.
pub trait Messenger {
    /// Best effort; returns whether a receiver got the message.
    fn send_to_active_tab(&self, message: &ExtensionMessage) -> impl Future<Output = bool>;
}

/// In-memory store, used natively and in tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    pub fn insert_raw(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
    }
}

impl SettingsStore for MemoryStore {
    async fn language(&self) -> Result<Language, StorageError> {
        match self.raw(LANGUAGE_KEY) {
            None => Ok(Language::default()),
            Some(value) => decode_language(&value),
        }
    }

    async fn set_language(&self, language: Language) -> Result<(), StorageError> {
        self.insert_raw(LANGUAGE_KEY, language.code());
        Ok(())
    }
}

/// Turn a stored code back into a language.
pub fn decode_language(value: &str) -> Result<Language, StorageError> {
    Language::from_code(value).ok_or_else(|| StorageError::Invalid {
        key: LANGUAGE_KEY.to_string(),
        value: value.to_string(),
    })
}

/// Read the preference, falling back to the default on any storage error.
pub async fn load_language<S: SettingsStore>(store: &S) -> Language {
    match store.language().await {
        Ok(language) => {
            log::debug!("Loaded preferred language: {}", language);
            language
        }
        Err(err) => {
            log::error!("Failed to load language: {}", err);
            Language::default()
        }
    }
}

/// Persist `language`, verify it, and tell the active tab about it.
///
/// Returns whether the content script received the change; a tab without the
/// content script is not an error.
pub async fn save_language<S, M>(store: &S, messenger: &M, language: Language) -> Result<bool, StorageError>
where
    S: SettingsStore,
    M: Messenger,
{
    log::info!("Saving settings with language: {}", language);
    store.set_language(language).await?;

    let saved = store.language().await?;
    if saved != language {
        log::warn!("Saved language reads back as {}, expected {}", saved, language);
    }

    let delivered = messenger
        .send_to_active_tab(&ExtensionMessage::LanguageChanged { language })
        .await;
    if !delivered {
        log::debug!("Content script not available in the active tab");
    }

    Ok(delivered)
}
