//! Content script on marble.worldlabs.ai

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use gloo_timers::callback::{Interval, Timeout};
use js_sys::Reflect;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Event, EventTarget, Window};

use super::bindings;
use super::dom::{self, Dispatch, DomHost, Listener};
use super::services::{BrowserClipboard, BrowserStorage, ExtensionContext, GlooWorldSource};
use crate::i18n::Translator;
use crate::models::{ExtensionMessage, Language};
use crate::panel::{load_resource, ContentSession, Effect, FetchTicket, HostingContext, LabelFlash};
use crate::settings::load_language;
use crate::view::panel::COPY_PROMPT_ID;
use crate::view::Action;
use crate::watcher::NavigationSource;
use crate::InspectorOptions;

struct ContentRuntime {
    window: Window,
    session: ContentSession<DomHost>,
    source: GlooWorldSource,
    translator: Translator,
    poll: Option<Interval>,
    listeners: Vec<(EventTarget, &'static str, Listener)>,
    _on_message: Option<Closure<dyn FnMut(JsValue)>>,
}

thread_local! {
    static CONTENT: RefCell<Option<ContentRuntime>> = RefCell::new(None);
}

fn with_runtime<R>(f: impl FnOnce(&mut ContentRuntime) -> R) -> Option<R> {
    CONTENT.with(|cell| cell.borrow_mut().as_mut().map(f))
}

/// Entry point called by `content.js`.
#[wasm_bindgen]
pub fn start_content_script() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window.document().ok_or_else(|| JsValue::from_str("no document"))?;
    let options = InspectorOptions::default();

    // Clicks are handled after the listener returns, so a handler may tear
    // down the element it is attached to.
    let dispatch: Dispatch = Rc::new(|action: Action| spawn_local(async move { handle_action(action) }));

    let host = DomHost::new(document, ExtensionContext::new(), dispatch);
    let mut runtime = ContentRuntime {
        window: window.clone(),
        session: ContentSession::new(&options, host),
        source: GlooWorldSource::new(&options.api_base_url),
        translator: Translator::new(Language::default()),
        poll: None,
        listeners: Vec::new(),
        _on_message: None,
    };

    listen(&mut runtime, window.clone().into(), "popstate", NavigationSource::PopState)?;
    if let Ok(navigation) = Reflect::get(&window, &JsValue::from_str("navigation")) {
        if let Ok(target) = navigation.dyn_into::<EventTarget>() {
            listen(&mut runtime, target, "currententrychange", NavigationSource::LocationChange)?;
        }
    }

    let message_listener = Closure::<dyn FnMut(JsValue)>::new(on_message);
    match bindings::add_message_listener(message_listener.as_ref().unchecked_ref()) {
        Ok(()) => runtime._on_message = Some(message_listener),
        Err(err) => log::warn!("Cannot listen for extension messages: {:?}", err),
    }

    runtime.poll = Some(Interval::new(options.poll_interval_ms, || {
        observe_location(NavigationSource::Poll)
    }));

    CONTENT.with(|cell| *cell.borrow_mut() = Some(runtime));
    log::info!("Marble inspector content script started");

    spawn_local(async {
        let language = load_language(&BrowserStorage).await;
        with_runtime(|rt| rt.translator = Translator::new(language));
        observe_location(NavigationSource::Startup);
    });

    Ok(())
}

fn listen(
    runtime: &mut ContentRuntime,
    target: EventTarget,
    event: &'static str,
    source: NavigationSource,
) -> Result<(), JsValue> {
    let listener = Listener::new(move |_: Event| observe_location(source));
    target.add_event_listener_with_callback(event, listener.as_ref().unchecked_ref())?;
    runtime.listeners.push((target, event, listener));
    Ok(())
}

fn observe_location(source: NavigationSource) {
    let ticket = with_runtime(|rt| {
        if rt.session.host().is_invalid() {
            rt.shut_down();
            return None;
        }
        let url = rt.window.location().href().ok()?;
        rt.session.navigate(source, &url, &rt.translator)
    });

    if let Some(ticket) = ticket.flatten() {
        start_fetch(ticket);
    }
}

fn on_message(message: JsValue) {
    match serde_wasm_bindgen::from_value::<ExtensionMessage>(message) {
        Ok(ExtensionMessage::LanguageChanged { language }) => {
            log::info!("Language changed to {}", language);
            with_runtime(|rt| {
                rt.translator = Translator::new(language);
                rt.session.rerender(&rt.translator);
            });
        }
        Err(err) => log::debug!("Ignoring message: {}", err),
    }
}

fn handle_action(action: Action) {
    let effect = with_runtime(|rt| {
        let mut clipboard = BrowserClipboard;
        rt.session.dispatch(action, &mut clipboard, &rt.translator)
    });

    match effect.flatten() {
        Some(Effect::Fetch(ticket)) => start_fetch(ticket),
        Some(Effect::Download(link)) => {
            let result = with_runtime(|rt| dom::download(rt.session.host().document(), &link));
            if let Some(Err(err)) = result {
                log::error!("Failed to download input image: {:?}", err);
            }
        }
        Some(Effect::Flash(flash)) => {
            with_runtime(|rt| flash_label(rt, flash));
        }
        None => {}
    }
}

fn start_fetch(ticket: FetchTicket) {
    let Some((context, source)) =
        with_runtime(|rt| (rt.session.host().context().clone(), rt.source.clone()))
    else {
        return;
    };

    spawn_local(async move {
        let outcome = load_resource(&context, &source, ticket.world_id()).await;
        with_runtime(|rt| {
            let completion = rt.session.complete(&ticket, outcome, &rt.translator);
            log::debug!("Fetch for {} finished: {:?}", ticket.world_id(), completion);
        });
    });
}

fn flash_label(rt: &ContentRuntime, flash: LabelFlash) {
    let document = rt.session.host().document().clone();
    let Some(button) = document.get_element_by_id(COPY_PROMPT_ID) else {
        return;
    };
    button.set_text_content(Some(flash.label_at(Duration::ZERO)));

    let millis = u32::try_from(flash.revert_after.as_millis()).unwrap_or(u32::MAX);
    Timeout::new(millis, move || {
        if let Some(button) = document.get_element_by_id(COPY_PROMPT_ID) {
            button.set_text_content(Some(flash.label_at(flash.revert_after)));
        }
    })
    .forget();
}

impl ContentRuntime {
    /// Stop watching the page once the extension context is gone.
    fn shut_down(&mut self) {
        let listeners: Vec<_> = self.listeners.drain(..).collect();
        let poll = self.poll.take();
        if listeners.is_empty() && poll.is_none() {
            return;
        }
        log::info!("Extension context invalidated, stopping URL watching");

        // called from inside one of these callbacks; release them afterwards
        spawn_local(async move {
            for (target, event, listener) in listeners {
                dom::detach(&target, event, &listener);
            }
            drop(poll);
        });
    }
}
