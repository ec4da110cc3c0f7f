//! Settings popup

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element};

use super::dom::{build_node, Dispatch, Listener};
use super::services::{BrowserStorage, TabMessenger};
use crate::models::Language;
use crate::settings::{load_language, save_language, PopupState};
use crate::view::popup::{render_popup, POPUP_ROOT_ID};
use crate::view::Action;
use crate::InspectorOptions;

struct PopupRuntime {
    document: Document,
    root: Element,
    dispatch: Dispatch,
    state: PopupState,
    save_notice_ms: u32,
    listeners: Vec<Listener>,
}

impl PopupRuntime {
    fn render(&mut self) {
        let node = render_popup(&self.state);
        let mut listeners = Vec::new();
        match build_node(&self.document, &node, &self.dispatch, &mut listeners) {
            Ok(built) => {
                self.root.set_text_content(None);
                if let Err(err) = self.root.append_child(&built) {
                    log::error!("Failed to render popup: {:?}", err);
                }
                self.listeners = listeners;
            }
            Err(err) => log::error!("Failed to render popup: {:?}", err),
        }
    }
}

thread_local! {
    static POPUP: RefCell<Option<PopupRuntime>> = RefCell::new(None);
}

fn with_popup<R>(f: impl FnOnce(&mut PopupRuntime) -> R) -> Option<R> {
    POPUP.with(|cell| cell.borrow_mut().as_mut().map(f))
}

/// Entry point called by `popup.js`.
#[wasm_bindgen]
pub fn start_popup() -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let root = document
        .get_element_by_id(POPUP_ROOT_ID)
        .ok_or_else(|| JsValue::from_str("popup root element missing"))?;

    let dispatch: Dispatch = Rc::new(|action: Action| spawn_local(async move { handle_action(action) }));
    let mut runtime = PopupRuntime {
        document,
        root,
        dispatch,
        state: PopupState::loading(),
        save_notice_ms: InspectorOptions::default().save_notice_ms,
        listeners: Vec::new(),
    };
    runtime.render();
    POPUP.with(|cell| *cell.borrow_mut() = Some(runtime));

    spawn_local(async {
        let language = load_language(&BrowserStorage).await;
        with_popup(|popup| {
            popup.state = PopupState::loaded(language);
            popup.render();
        });
    });

    Ok(())
}

fn handle_action(action: Action) {
    match action {
        Action::SelectLanguage(language) => {
            with_popup(|popup| {
                popup.state.select(language);
                popup.render();
            });
        }
        Action::SaveSettings => {
            let Some(language) = with_popup(|popup| popup.state.can_save().then(|| popup.state.selected())).flatten()
            else {
                return;
            };
            spawn_local(async move { save(language).await });
        }
        other => log::warn!("{:?} is not handled by the popup", other),
    }
}

async fn save(language: Language) {
    match save_language(&BrowserStorage, &TabMessenger, language).await {
        Ok(_) => {
            let notice_ms = with_popup(|popup| {
                popup.state.mark_saved(language);
                popup.render();
                popup.save_notice_ms
            });
            if let Some(notice_ms) = notice_ms {
                Timeout::new(notice_ms, || {
                    with_popup(|popup| {
                        popup.state.dismiss_save_success();
                        popup.render();
                    });
                })
                .forget();
            }
        }
        Err(err) => log::error!("Failed to save settings: {}", err),
    }
}
