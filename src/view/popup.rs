//! Settings popup rendering

use super::{Action, Element, Node};
use crate::models::Language;
use crate::settings::PopupState;

pub const POPUP_ROOT_ID: &str = "app";

pub fn render_popup(state: &PopupState) -> Node {
    let t = state.translator();

    if !state.is_loaded() {
        return Element::new("div")
            .class("popup-loading")
            .text(t.t("popupLoading"))
            .into();
    }

    let selected = state.selected();

    let options = Language::ALL.iter().map(|language| {
        let mut option = Element::new("button")
            .class("language-option")
            .attr("type", "button")
            .child(Element::new("span").class("flag").text(language.flag()))
            .child(Element::new("span").class("name").text(language.native_name()))
            .on_click(Action::SelectLanguage(*language));
        if *language == selected {
            option = option.class("active");
        }
        Node::from(option)
    });

    let language_section = Element::new("div")
        .class("settings-section")
        .child(Element::new("h3").text(t.t("languageSetting")))
        .child(
            Element::new("div")
                .class("current-language-info")
                .child(Element::new("span").text(format!("{}: ", t.t("currentLanguage"))))
                .child(Element::new("strong").text(format!("{} {}", selected.flag(), selected.native_name()))),
        )
        .child(
            Element::new("div")
                .class("language-selector")
                .child(Element::new("label").text(format!("{}:", t.t("selectLanguage"))))
                .child(Element::new("div").class("language-options").children(options)),
        );

    let status_section = Element::new("div")
        .class("status-section")
        .child(Element::new("h3").text(t.t("extensionStatus")))
        .child(
            Element::new("div")
                .class("status-item")
                .child(Element::new("span").class("status-indicator").text("✅"))
                .child(Element::new("span").text(t.t("extensionEnabled"))),
        );

    let instructions = ["instruction1", "instruction2", "instruction3"]
        .iter()
        .map(|key| Node::from(Element::new("li").text(t.t(key))));

    let instructions_section = Element::new("div")
        .class("instructions-section")
        .child(Element::new("h3").text(t.t("instructions")))
        .child(Element::new("ul").children(instructions));

    let mut save_button = Element::new("button")
        .class("save-button")
        .attr("type", "button")
        .text(t.t("saveSettings"))
        .on_click(Action::SaveSettings);
    if !state.can_save() {
        save_button = save_button.attr("disabled", "");
    }

    let mut action_section = Element::new("div").class("action-section").child(save_button);
    if state.show_save_success() {
        action_section = action_section.child(
            Element::new("div").class("success-message").text(t.t("settingsSaved")),
        );
    }

    Element::new("div")
        .class("extension-popup")
        .child(
            Element::new("div")
                .class("popup-header")
                .child(Element::new("h2").text(t.t("popupTitle"))),
        )
        .child(
            Element::new("div")
                .class("popup-content")
                .child(language_section)
                .child(status_section)
                .child(instructions_section)
                .child(action_section),
        )
        .into()
}
