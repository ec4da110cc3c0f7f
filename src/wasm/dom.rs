//! Rendering [`Node`] trees into the page

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, EventTarget, HtmlAnchorElement};

use super::services::ExtensionContext;
use crate::panel::{DownloadLink, HostingContext, PanelHost};
use crate::view::panel::{BUTTON_ID, CONTENT_ID, SIDEBAR_ID};
use crate::view::{Action, Node};

pub type Listener = Closure<dyn FnMut(Event)>;

/// Receives clicks on rendered elements.
pub type Dispatch = Rc<dyn Fn(Action)>;

/// Build real DOM nodes for `node`. Click listeners are pushed to
/// `listeners` and stay attached for as long as the caller keeps them.
pub fn build_node(
    document: &Document,
    node: &Node,
    dispatch: &Dispatch,
    listeners: &mut Vec<Listener>,
) -> Result<web_sys::Node, JsValue> {
    let element = match node {
        Node::Text(text) => return Ok(document.create_text_node(text).into()),
        Node::Element(element) => element,
    };

    let el = document.create_element(element.tag)?;
    if let Some(id) = element.id {
        el.set_id(id);
    }
    if !element.classes.is_empty() {
        el.set_class_name(&element.classes.join(" "));
    }
    for (name, value) in &element.attributes {
        el.set_attribute(name, value)?;
    }
    for child in &element.children {
        el.append_child(&build_node(document, child, dispatch, listeners)?)?;
    }

    if let Some(action) = element.on_click {
        let dispatch = Rc::clone(dispatch);
        let listener = Listener::new(move |event: Event| {
            event.prevent_default();
            dispatch(action);
        });
        el.add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())?;
        listeners.push(listener);
    }

    Ok(el.into())
}

/// Remove `listener` from `target`; failures are only logged.
pub fn detach(target: &EventTarget, event: &str, listener: &Listener) {
    if let Err(err) = target.remove_event_listener_with_callback(event, listener.as_ref().unchecked_ref()) {
        log::debug!("Failed to remove {} listener: {:?}", event, err);
    }
}

/// Click a transient anchor so the browser downloads `link`.
pub fn download(document: &Document, link: &DownloadLink) -> Result<(), JsValue> {
    let body = document.body().ok_or_else(|| JsValue::from_str("document has no body"))?;
    let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&link.href);
    anchor.set_download(&link.filename);
    body.append_child(&anchor)?;
    anchor.click();
    anchor.remove();
    Ok(())
}

struct Mounted {
    element: web_sys::Element,
    _listeners: Vec<Listener>,
}

/// [`PanelHost`] on the live page.
pub struct DomHost {
    document: Document,
    context: ExtensionContext,
    dispatch: Dispatch,
    button: Option<Mounted>,
    sidebar: Option<Mounted>,
    content_listeners: Vec<Listener>,
}

impl DomHost {
    pub fn new(document: Document, context: ExtensionContext, dispatch: Dispatch) -> Self {
        Self {
            document,
            context,
            dispatch,
            button: None,
            sidebar: None,
            content_listeners: Vec::new(),
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn context(&self) -> &ExtensionContext {
        &self.context
    }

    fn mount(&self, node: &Node) -> Option<Mounted> {
        let mut listeners = Vec::new();
        let result = build_node(&self.document, node, &self.dispatch, &mut listeners).and_then(|built| {
            let body = self
                .document
                .body()
                .ok_or_else(|| JsValue::from_str("document has no body"))?;
            body.append_child(&built)?;
            built.dyn_into::<web_sys::Element>().map_err(JsValue::from)
        });

        match result {
            Ok(element) => Some(Mounted { element, _listeners: listeners }),
            Err(err) => {
                log::error!("Failed to mount panel element: {:?}", err);
                None
            }
        }
    }

    /// Drop the tracked element and anything else carrying its id.
    fn remove(&self, mounted: Option<Mounted>, id: &str) -> bool {
        let mut removed = false;
        if let Some(mounted) = mounted {
            mounted.element.remove();
            removed = true;
        }
        while let Some(stray) = self.document.get_element_by_id(id) {
            stray.remove();
            removed = true;
        }
        removed
    }
}

impl HostingContext for DomHost {
    fn is_invalid(&self) -> bool {
        self.context.is_invalid()
    }
}

impl PanelHost for DomHost {
    fn has_button(&self) -> bool {
        self.document.get_element_by_id(BUTTON_ID).is_some()
    }

    fn mount_button(&mut self, button: Node) {
        self.button = self.mount(&button);
    }

    fn remove_button(&mut self) -> bool {
        let mounted = self.button.take();
        self.remove(mounted, BUTTON_ID)
    }

    fn has_sidebar(&self) -> bool {
        self.document.get_element_by_id(SIDEBAR_ID).is_some()
    }

    fn mount_sidebar(&mut self, sidebar: Node) {
        self.sidebar = self.mount(&sidebar);
    }

    fn remove_sidebar(&mut self) -> bool {
        self.content_listeners.clear();
        let mounted = self.sidebar.take();
        self.remove(mounted, SIDEBAR_ID)
    }

    fn replace_content(&mut self, content: Node) -> bool {
        let Some(slot) = self.document.get_element_by_id(CONTENT_ID) else {
            return false;
        };

        let mut listeners = Vec::new();
        match build_node(&self.document, &content, &self.dispatch, &mut listeners) {
            Ok(built) => {
                slot.set_text_content(None);
                if let Err(err) = slot.append_child(&built) {
                    log::error!("Failed to replace sidebar content: {:?}", err);
                    return false;
                }
                self.content_listeners = listeners;
                true
            }
            Err(err) => {
                log::error!("Failed to render sidebar content: {:?}", err);
                false
            }
        }
    }
}
