//! Copy-prompt and download-image actions on a loaded world

use crate::i18n::Translator;
use crate::models::WorldRecord;
use std::time::Duration;

pub trait Clipboard {
    fn write_text(&mut self, text: &str);
}

impl Clipboard for String {
    fn write_text(&mut self, text: &str) {
        self.clear();
        self.push_str(text);
    }
}

/// A temporary button label that reverts after `revert_after`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelFlash {
    pub label: String,
    pub revert_to: String,
    pub revert_after: Duration,
}

impl LabelFlash {
    /// Label shown `elapsed` after the flash started.
    pub fn label_at(&self, elapsed: Duration) -> &str {
        if elapsed < self.revert_after {
            &self.label
        } else {
            &self.revert_to
        }
    }
}

/// A file the page should download by clicking a transient anchor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadLink {
    pub href: String,
    pub filename: String,
}

/// Put the prompt text (empty when the world has none) on the clipboard.
pub fn copy_prompt<C: Clipboard + ?Sized>(
    record: &WorldRecord,
    clipboard: &mut C,
    t: &Translator,
    copied_label_ms: u32,
) -> LabelFlash {
    clipboard.write_text(record.text_prompt().unwrap_or(""));
    LabelFlash {
        label: t.t("copied"),
        revert_to: t.t("copyPrompt"),
        revert_after: Duration::from_millis(u64::from(copied_label_ms)),
    }
}

pub fn input_image_download(record: &WorldRecord, filename: &str) -> DownloadLink {
    DownloadLink {
        href: record.input_image_uri().unwrap_or("").to_string(),
        filename: filename.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GenerationInput, Prompt};

    fn with_prompt(text: &str) -> WorldRecord {
        WorldRecord {
            generation_input: Some(GenerationInput {
                prompt: Some(Prompt { text_prompt: Some(text.to_string()), image_prompt: None }),
                model: None,
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_copy_exact_prompt() {
        let mut clipboard = String::from("previous");
        let flash = copy_prompt(&with_prompt("  a misty harbor\n"), &mut clipboard, &Translator::default(), 2000);
        assert_eq!(clipboard, "  a misty harbor\n");
        assert_eq!(flash.label, "Copied!");
        assert_eq!(flash.revert_to, "Copy Prompt");
    }

    #[test]
    fn test_copy_without_prompt_writes_empty_string() {
        let mut clipboard = String::from("previous");
        copy_prompt(&WorldRecord::default(), &mut clipboard, &Translator::default(), 2000);
        assert_eq!(clipboard, "");
    }

    #[test]
    fn test_label_reverts_after_exactly_two_seconds() {
        let mut clipboard = String::new();
        let flash = copy_prompt(&with_prompt("x"), &mut clipboard, &Translator::default(), 2000);
        assert_eq!(flash.revert_after, Duration::from_millis(2000));
        assert_eq!(flash.label_at(Duration::from_millis(0)), "Copied!");
        assert_eq!(flash.label_at(Duration::from_millis(1999)), "Copied!");
        assert_eq!(flash.label_at(Duration::from_millis(2000)), "Copy Prompt");
    }

    #[test]
    fn test_download_link_defaults() {
        let link = input_image_download(&WorldRecord::default(), "input-image.png");
        assert_eq!(link.href, "");
        assert_eq!(link.filename, "input-image.png");
    }
}
