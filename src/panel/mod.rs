//! Trigger button and sidebar lifecycle
//!
//! [`PanelController`] decides what the page should show; a [`PanelHost`]
//! performs the actual mounting. The browser front end implements the host
//! on the real DOM, tests and the CLI use [`VirtualDocument`].

pub mod loader;
pub mod affordance;
pub mod document;
pub mod session;

pub use loader::{load_resource, FetchError, LoadOutcome, WorldSource};
pub use affordance::{Clipboard, DownloadLink, LabelFlash};
pub use document::VirtualDocument;
pub use session::{ContentSession, Effect};

use crate::i18n::Translator;
use crate::models::WorldId;
use crate::view::panel::{render_button, render_sidebar, PanelContent};
use crate::view::Node;
use crate::watcher::NavigationSignal;
use crate::{InspectorOptions, StaleResponsePolicy};
use std::cell::Cell;
use std::rc::Rc;

/// Whether the extension may still touch the page.
///
/// Once the extension is reloaded or removed, the content script keeps
/// running but its context is gone; nothing may be mounted after that.
pub trait HostingContext {
    fn is_invalid(&self) -> bool;
}

/// Shared invalidation flag. Clones observe the same flag.
#[derive(Debug, Clone, Default)]
pub struct ContextHandle(Rc<Cell<bool>>);

impl ContextHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn invalidate(&self) {
        if !self.0.replace(true) {
            log::info!("Extension context invalidated");
        }
    }
}

impl HostingContext for ContextHandle {
    fn is_invalid(&self) -> bool {
        self.0.get()
    }
}

/// The document the panel is mounted into.
pub trait PanelHost: HostingContext {
    fn has_button(&self) -> bool;

    fn mount_button(&mut self, button: Node);

    /// Returns whether a button was removed.
    fn remove_button(&mut self) -> bool;

    fn has_sidebar(&self) -> bool;

    fn mount_sidebar(&mut self, sidebar: Node);

    /// Returns whether a sidebar was removed.
    fn remove_sidebar(&mut self) -> bool;

    /// Replace the sidebar's content region. Returns `false` when there is no
    /// sidebar to put it in.
    fn replace_content(&mut self, content: Node) -> bool;
}

/// A request the controller wants issued, tagged so its response can be
/// matched against the controller's state when it comes back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    world_id: WorldId,
    generation: u64,
}

impl FetchTicket {
    pub fn world_id(&self) -> &WorldId {
        &self.world_id
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// What happened to a completed fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Rendered,
    /// The hosting context went away or the load was abandoned.
    Suppressed,
    /// A newer request superseded this one.
    Stale,
    /// The sidebar was closed while the request was in flight.
    NoSidebar,
}

#[derive(Debug)]
pub struct PanelController {
    stale_responses: StaleResponsePolicy,
    input_image_filename: String,
    copied_label_ms: u32,
    active: Option<WorldId>,
    generation: u64,
    content: Option<PanelContent>,
}

impl PanelController {
    pub fn new(options: &InspectorOptions) -> Self {
        Self {
            stale_responses: options.stale_responses,
            input_image_filename: options.input_image_filename.clone(),
            copied_label_ms: options.copied_label_ms,
            active: None,
            generation: 0,
            content: None,
        }
    }

    /// World the trigger button is currently bound to.
    pub fn active_world(&self) -> Option<&WorldId> {
        self.active.as_ref()
    }

    /// Content shown in the open sidebar, if any.
    pub fn content(&self) -> Option<&PanelContent> {
        self.content.as_ref()
    }

    pub fn on_signal<H: PanelHost>(
        &mut self,
        signal: NavigationSignal,
        host: &mut H,
        t: &Translator,
    ) -> Option<FetchTicket> {
        match signal {
            NavigationSignal::ResourceChanged(world_id) => self.show_world(world_id, host, t),
            NavigationSignal::ResourceCleared => {
                self.clear(host);
                None
            }
        }
    }

    fn show_world<H: PanelHost>(&mut self, world_id: WorldId, host: &mut H, t: &Translator) -> Option<FetchTicket> {
        host.remove_button();
        host.mount_button(render_button(t));
        self.active = Some(world_id.clone());

        if !host.has_sidebar() {
            return None;
        }

        log::debug!("Sidebar is open, updating content for new world: {}", world_id);
        self.set_content(PanelContent::Loading, host, t);
        Some(self.issue(world_id))
    }

    fn clear<H: PanelHost>(&mut self, host: &mut H) {
        host.remove_button();
        host.remove_sidebar();
        self.active = None;
        self.content = None;
        // responses still in flight belong to a page we left
        self.generation += 1;
    }

    /// Open (or reopen) the sidebar for the active world.
    pub fn open_panel<H: PanelHost>(&mut self, host: &mut H, t: &Translator) -> Option<FetchTicket> {
        if host.is_invalid() {
            log::debug!("Extension context invalidated, not opening sidebar");
            return None;
        }
        let world_id = self.active.clone()?;

        host.remove_sidebar();
        host.mount_sidebar(render_sidebar(&PanelContent::Loading, t));
        self.content = Some(PanelContent::Loading);
        Some(self.issue(world_id))
    }

    pub fn close_panel<H: PanelHost>(&mut self, host: &mut H) {
        host.remove_sidebar();
        self.content = None;
    }

    /// Apply the outcome of a fetch started for `ticket`.
    pub fn complete<H: PanelHost>(
        &mut self,
        ticket: &FetchTicket,
        outcome: LoadOutcome,
        host: &mut H,
        t: &Translator,
    ) -> Completion {
        if host.is_invalid() {
            log::debug!("Extension context invalidated before UI update, aborting");
            return Completion::Suppressed;
        }

        let content = match outcome {
            LoadOutcome::Abandoned => return Completion::Suppressed,
            LoadOutcome::Loaded(record) => PanelContent::Loaded(record),
            LoadOutcome::Failed(err) => {
                log::error!("Error fetching world data for {}: {}", ticket.world_id, err);
                PanelContent::Error
            }
        };

        if ticket.generation != self.generation && self.stale_responses == StaleResponsePolicy::Discard {
            log::debug!("Dropping stale response for {}", ticket.world_id);
            return Completion::Stale;
        }

        if !host.has_sidebar() {
            return Completion::NoSidebar;
        }

        self.set_content(content, host, t);
        Completion::Rendered
    }

    /// Re-render everything mounted, e.g. after a language change.
    pub fn rerender<H: PanelHost>(&mut self, host: &mut H, t: &Translator) {
        if host.is_invalid() {
            return;
        }
        if host.has_button() {
            host.remove_button();
            host.mount_button(render_button(t));
        }
        if let Some(content) = self.content.clone() {
            if host.has_sidebar() {
                host.remove_sidebar();
                host.mount_sidebar(render_sidebar(&content, t));
            }
        }
    }

    /// Copy the loaded world's prompt to `clipboard`.
    ///
    /// Returns the label change to show on the copy button, or `None` when no
    /// world is loaded.
    pub fn copy_prompt<C: Clipboard + ?Sized>(&self, clipboard: &mut C, t: &Translator) -> Option<LabelFlash> {
        let record = self.content.as_ref()?.record()?;
        Some(affordance::copy_prompt(record, clipboard, t, self.copied_label_ms))
    }

    /// Download target for the loaded world's input image.
    pub fn input_image_download(&self) -> Option<DownloadLink> {
        let record = self.content.as_ref()?.record()?;
        Some(affordance::input_image_download(record, &self.input_image_filename))
    }

    fn set_content<H: PanelHost>(&mut self, content: PanelContent, host: &mut H, t: &Translator) {
        let node = content.render(t);
        if host.replace_content(node) {
            self.content = Some(content);
        }
    }

    fn issue(&mut self, world_id: WorldId) -> FetchTicket {
        self.generation += 1;
        FetchTicket { world_id, generation: self.generation }
    }
}
