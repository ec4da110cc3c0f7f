//! Navigation watcher and panel controller wired to one host

use super::{Clipboard, Completion, DownloadLink, FetchTicket, LabelFlash, LoadOutcome, PanelController, PanelHost};
use crate::i18n::Translator;
use crate::view::Action;
use crate::watcher::{NavigationSource, NavigationWatcher};
use crate::InspectorOptions;

/// Side effect the front end has to carry out after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Fetch(FetchTicket),
    Download(DownloadLink),
    Flash(LabelFlash),
}

/// Everything the content script keeps for one page.
#[derive(Debug)]
pub struct ContentSession<H> {
    watcher: NavigationWatcher,
    controller: PanelController,
    host: H,
}

impl<H: PanelHost> ContentSession<H> {
    pub fn new(options: &InspectorOptions, host: H) -> Self {
        Self {
            watcher: NavigationWatcher::new(),
            controller: PanelController::new(options),
            host,
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn watcher(&self) -> &NavigationWatcher {
        &self.watcher
    }

    pub fn controller(&self) -> &PanelController {
        &self.controller
    }

    /// Report the page URL from one of the navigation sources.
    pub fn navigate(&mut self, source: NavigationSource, url: &str, t: &Translator) -> Option<FetchTicket> {
        if self.host.is_invalid() {
            log::debug!("Extension context invalidated, skipping {:?} update", source);
            return None;
        }
        let signal = self.watcher.observe(source, url)?;
        self.controller.on_signal(signal, &mut self.host, t)
    }

    /// Handle a click on a rendered element.
    pub fn dispatch(&mut self, action: Action, clipboard: &mut dyn Clipboard, t: &Translator) -> Option<Effect> {
        match action {
            Action::OpenPanel => self.controller.open_panel(&mut self.host, t).map(Effect::Fetch),
            Action::ClosePanel => {
                self.controller.close_panel(&mut self.host);
                None
            }
            Action::CopyPrompt => self.controller.copy_prompt(clipboard, t).map(Effect::Flash),
            Action::DownloadInputImage => self.controller.input_image_download().map(Effect::Download),
            Action::SelectLanguage(_) | Action::SaveSettings => {
                log::warn!("{:?} is a popup action", action);
                None
            }
        }
    }

    pub fn complete(&mut self, ticket: &FetchTicket, outcome: LoadOutcome, t: &Translator) -> Completion {
        self.controller.complete(ticket, outcome, &mut self.host, t)
    }

    pub fn rerender(&mut self, t: &Translator) {
        self.controller.rerender(&mut self.host, t);
    }
}
