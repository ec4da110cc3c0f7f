//! Trigger button and sidebar rendering
//!
//! All functions here are pure: a record and a translator in, a [`Node`]
//! out. Each field of the record falls back on its own, so a sparse record
//! still renders a complete panel.

use super::{Action, Element, Node};
use crate::i18n::Translator;
use crate::models::WorldRecord;
use crate::utils::quality_label;

pub const BUTTON_ID: &str = "marble-extension-button";
pub const SIDEBAR_ID: &str = "marble-extension-sidebar";
pub const CONTENT_ID: &str = "sidebar-content";
pub const CLOSE_ID: &str = "close-sidebar";
pub const COPY_PROMPT_ID: &str = "copy-prompt";
pub const DOWNLOAD_INPUT_ID: &str = "download-input";

/// What the sidebar's content region currently shows.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelContent {
    Loading,
    Loaded(WorldRecord),
    Error,
}

impl PanelContent {
    pub fn render(&self, t: &Translator) -> Node {
        match self {
            PanelContent::Loading => render_loading(t),
            PanelContent::Loaded(record) => render_world(record, t),
            PanelContent::Error => render_error(t),
        }
    }

    pub fn record(&self) -> Option<&WorldRecord> {
        match self {
            PanelContent::Loaded(record) => Some(record),
            _ => None,
        }
    }
}

/// Floating button that opens the sidebar
pub fn render_button(t: &Translator) -> Node {
    Element::new("button")
        .id(BUTTON_ID)
        .class("marble-extension-float-btn")
        .attr("title", t.t("showWorldDetails"))
        .attr("type", "button")
        .text("📋")
        .on_click(Action::OpenPanel)
        .into()
}

/// Sidebar shell with header, close button and the given content
pub fn render_sidebar(content: &PanelContent, t: &Translator) -> Node {
    let header = Element::new("div")
        .class("marble-extension-header")
        .child(Element::new("h3").class("marble-extension-title").text(t.t("worldDetails")))
        .child(
            Element::new("button")
                .id(CLOSE_ID)
                .class("marble-extension-close")
                .attr("title", t.t("close"))
                .attr("type", "button")
                .text("✕")
                .on_click(Action::ClosePanel),
        );

    let body = Element::new("div")
        .id(CONTENT_ID)
        .class("marble-extension-content")
        .child(content.render(t));

    Element::new("div")
        .id(SIDEBAR_ID)
        .class("marble-extension-sidebar")
        .child(header)
        .child(body)
        .into()
}

pub fn render_loading(t: &Translator) -> Node {
    Element::new("p")
        .class("marble-extension-text-body")
        .text(t.t("loadingWorldData"))
        .into()
}

pub fn render_error(t: &Translator) -> Node {
    Element::new("p")
        .class("marble-extension-error")
        .attr("style", "color: red;")
        .text(t.t("failedToLoadWorldData"))
        .into()
}

/// Full world details
pub fn render_world(record: &WorldRecord, t: &Translator) -> Node {
    let unknown = t.t("unknown");

    let mut sections = vec![
        title_section(record, t, &unknown),
        stats_section(record, t),
        prompt_section(record, t),
    ];

    if let Some(uri) = record.input_image_uri() {
        sections.push(input_image_section(uri, t));
    }

    sections.push(section(
        t.t("model"),
        Element::new("p")
            .class("marble-extension-model-badge")
            .text(record.model().unwrap_or(unknown.as_str())),
    ));

    if let Some(urls) = record.export_urls() {
        let links = urls.iter().map(|(quality, url)| {
            let label = quality_label(quality);
            Node::from(
                Element::new("a")
                    .class("marble-extension-btn")
                    .class("marble-extension-btn-purple")
                    .attr("href", url.as_str())
                    .attr("download", "")
                    .text(t.t_with("downloadQuality", &[label.as_str()])),
            )
        });
        sections.push(section(
            t.t("exportFiles"),
            Element::new("div").class("marble-extension-space-y-2").children(links),
        ));
    }

    Element::new("div")
        .class("marble-extension-space-y-6")
        .children(sections)
        .into()
}

fn title_section(record: &WorldRecord, t: &Translator, unknown: &str) -> Node {
    Element::new("div")
        .child(
            Element::new("h4")
                .class("marble-extension-text-title")
                .text(record.display_name().unwrap_or(unknown)),
        )
        .child(
            Element::new("p")
                .class("marble-extension-byline")
                .class("marble-extension-text-body")
                .text(t.t_with("by", &[record.owner_display_name().unwrap_or(unknown)])),
        )
        .into()
}

fn stats_section(record: &WorldRecord, t: &Translator) -> Node {
    let likes = record.like_count().to_string();
    section(
        t.t("stats"),
        Element::new("div")
            .class("marble-extension-stats")
            .child(Element::new("span").attr("style", "color: #ef4444;").text("❤️"))
            .child(
                Element::new("span")
                    .class("marble-extension-like-count")
                    .text(t.t_with("likes", &[likes.as_str()])),
            ),
    )
}

fn prompt_section(record: &WorldRecord, t: &Translator) -> Node {
    let prompt_text = record
        .text_prompt()
        .map(str::to_string)
        .unwrap_or_else(|| t.t("noPromptAvailable"));

    Element::new("div")
        .child(subtitle(t.t("prompt")))
        .child(Element::new("div").class("marble-extension-prompt-box").text(prompt_text))
        .child(
            Element::new("button")
                .id(COPY_PROMPT_ID)
                .class("marble-extension-btn")
                .class("marble-extension-btn-primary")
                .attr("type", "button")
                .attr("style", "margin-top: 8px;")
                .text(t.t("copyPrompt"))
                .on_click(Action::CopyPrompt),
        )
        .into()
}

fn input_image_section(uri: &str, t: &Translator) -> Node {
    Element::new("div")
        .class("marble-extension-input-image")
        .child(subtitle(t.t("inputImage")))
        .child(
            Element::new("img")
                .class("marble-extension-image")
                .attr("src", uri)
                .attr("alt", t.t("inputImageAlt")),
        )
        .child(
            Element::new("button")
                .id(DOWNLOAD_INPUT_ID)
                .class("marble-extension-btn")
                .class("marble-extension-btn-success")
                .attr("type", "button")
                .text(t.t("downloadImage"))
                .on_click(Action::DownloadInputImage),
        )
        .into()
}

fn section(title: String, body: Element) -> Node {
    Element::new("div").child(subtitle(title)).child(body).into()
}

fn subtitle(text: String) -> Element {
    Element::new("h5").class("marble-extension-text-subtitle").text(text)
}
