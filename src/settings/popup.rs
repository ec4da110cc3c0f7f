//! Popup state: the language being picked versus the one saved

use crate::i18n::Translator;
use crate::models::Language;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PopupState {
    loaded: bool,
    selected: Language,
    saved: Language,
    show_save_success: bool,
}

impl PopupState {
    /// State before the stored preference has been read.
    pub fn loading() -> Self {
        Self::default()
    }

    pub fn loaded(language: Language) -> Self {
        Self {
            loaded: true,
            selected: language,
            saved: language,
            show_save_success: false,
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn selected(&self) -> Language {
        self.selected
    }

    pub fn saved(&self) -> Language {
        self.saved
    }

    pub fn select(&mut self, language: Language) {
        self.selected = language;
    }

    /// Saving is only offered when the selection differs from what is stored.
    pub fn can_save(&self) -> bool {
        self.loaded && self.selected != self.saved
    }

    pub fn mark_saved(&mut self, language: Language) {
        self.saved = language;
        self.show_save_success = true;
    }

    pub fn show_save_success(&self) -> bool {
        self.show_save_success
    }

    pub fn dismiss_save_success(&mut self) {
        self.show_save_success = false;
    }

    /// The popup previews the selected language before it is saved.
    pub fn translator(&self) -> Translator {
        Translator::new(self.selected)
    }
}
