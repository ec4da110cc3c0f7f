//! Extension APIs not covered by web-sys

use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = ["chrome", "storage", "local"], js_name = get)]
    pub fn storage_get(keys: &JsValue) -> Result<Promise, JsValue>;

    #[wasm_bindgen(catch, js_namespace = ["chrome", "storage", "local"], js_name = set)]
    pub fn storage_set(items: &JsValue) -> Result<Promise, JsValue>;

    #[wasm_bindgen(catch, js_namespace = ["chrome", "tabs"], js_name = query)]
    pub fn tabs_query(query: &JsValue) -> Result<Promise, JsValue>;

    #[wasm_bindgen(catch, js_namespace = ["chrome", "tabs"], js_name = sendMessage)]
    pub fn tabs_send_message(tab_id: f64, message: &JsValue) -> Result<Promise, JsValue>;

    #[wasm_bindgen(catch, js_namespace = ["chrome", "runtime", "onMessage"], js_name = addListener)]
    pub fn add_message_listener(listener: &Function) -> Result<(), JsValue>;

    #[wasm_bindgen(catch, js_namespace = ["navigator", "clipboard"], js_name = writeText)]
    pub fn clipboard_write_text(text: &str) -> Result<Promise, JsValue>;
}

/// `chrome.runtime.id`, which disappears once the extension is reloaded or
/// removed underneath a running content script.
pub fn runtime_id() -> Option<String> {
    let chrome = Reflect::get(&js_sys::global(), &JsValue::from_str("chrome")).ok()?;
    if chrome.is_undefined() || chrome.is_null() {
        return None;
    }
    let runtime = Reflect::get(&chrome, &JsValue::from_str("runtime")).ok()?;
    if runtime.is_undefined() || runtime.is_null() {
        return None;
    }
    Reflect::get(&runtime, &JsValue::from_str("id")).ok()?.as_string()
}
