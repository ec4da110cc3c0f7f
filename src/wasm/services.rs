//! Browser implementations of the crate's seams

use std::rc::Rc;

use gloo_net::http::Request;
use js_sys::{Array, Object, Reflect};
use serde::Serialize;
use serde_wasm_bindgen::Serializer;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};

use super::bindings;
use crate::models::{ExtensionMessage, Language, WorldId, WorldRecord};
use crate::panel::{Clipboard, ContextHandle, FetchError, HostingContext, WorldSource};
use crate::parser::{parse_world_record, world_api_url};
use crate::settings::{decode_language, Messenger, SettingsStore, StorageError, LANGUAGE_KEY};

/// Hosting context backed by the extension runtime.
///
/// The first check that finds the runtime gone latches the shared handle, so
/// every clone sees the invalidation from then on.
#[derive(Debug, Clone, Default)]
pub struct ExtensionContext {
    handle: ContextHandle,
}

impl ExtensionContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle(&self) -> &ContextHandle {
        &self.handle
    }
}

impl HostingContext for ExtensionContext {
    fn is_invalid(&self) -> bool {
        if !self.handle.is_invalid() && bindings::runtime_id().is_none() {
            self.handle.invalidate();
        }
        self.handle.is_invalid()
    }
}

/// World records fetched with the page's `fetch`.
#[derive(Debug, Clone)]
pub struct GlooWorldSource {
    base_url: Rc<str>,
}

impl GlooWorldSource {
    pub fn new(base_url: &str) -> Self {
        Self { base_url: Rc::from(base_url) }
    }
}

impl WorldSource for GlooWorldSource {
    async fn fetch_world(&self, world_id: &WorldId) -> Result<WorldRecord, FetchError> {
        let url = world_api_url(&self.base_url, world_id);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(FetchError::Status(response.status()));
        }

        let body = response
            .binary()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        parse_world_record(&body).map_err(|e| FetchError::Decode(format!("{:#}", e)))
    }
}

/// `chrome.storage.local`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl SettingsStore for BrowserStorage {
    async fn language(&self) -> Result<Language, StorageError> {
        let key = JsValue::from_str(LANGUAGE_KEY);
        let items = JsFuture::from(bindings::storage_get(&key).map_err(unavailable)?)
            .await
            .map_err(unavailable)?;

        match Reflect::get(&items, &key).map_err(unavailable)?.as_string() {
            Some(code) => decode_language(&code),
            None => Ok(Language::default()),
        }
    }

    async fn set_language(&self, language: Language) -> Result<(), StorageError> {
        let items = Object::new();
        Reflect::set(&items, &JsValue::from_str(LANGUAGE_KEY), &JsValue::from_str(language.code()))
            .map_err(unavailable)?;
        JsFuture::from(bindings::storage_set(&items).map_err(unavailable)?)
            .await
            .map_err(unavailable)?;
        Ok(())
    }
}

fn unavailable(err: JsValue) -> StorageError {
    StorageError::Unavailable(format!("{:?}", err))
}

/// `chrome.tabs.sendMessage` to the active tab of the current window.
#[derive(Debug, Clone, Copy, Default)]
pub struct TabMessenger;

impl TabMessenger {
    async fn send(&self, message: &ExtensionMessage) -> Result<(), JsValue> {
        let query = Object::new();
        Reflect::set(&query, &JsValue::from_str("active"), &JsValue::TRUE)?;
        Reflect::set(&query, &JsValue::from_str("currentWindow"), &JsValue::TRUE)?;

        let tabs: Array = JsFuture::from(bindings::tabs_query(&query)?).await?.dyn_into()?;
        let tab_id = Reflect::get(&tabs.get(0), &JsValue::from_str("id"))?
            .as_f64()
            .ok_or_else(|| JsValue::from_str("no active tab"))?;

        let payload = message.serialize(&Serializer::json_compatible())?;
        JsFuture::from(bindings::tabs_send_message(tab_id, &payload)?).await?;
        Ok(())
    }
}

impl Messenger for TabMessenger {
    async fn send_to_active_tab(&self, message: &ExtensionMessage) -> bool {
        match self.send(message).await {
            Ok(()) => true,
            Err(err) => {
                log::debug!("Message not delivered: {:?}", err);
                false
            }
        }
    }
}

/// `navigator.clipboard`; the write finishes in the background.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserClipboard;

impl Clipboard for BrowserClipboard {
    fn write_text(&mut self, text: &str) {
        match bindings::clipboard_write_text(text) {
            Ok(promise) => spawn_local(async move {
                if let Err(err) = JsFuture::from(promise).await {
                    log::error!("Failed to copy prompt: {:?}", err);
                }
            }),
            Err(err) => log::error!("Clipboard unavailable: {:?}", err),
        }
    }
}
