//! Translation tables and lookup
//!
//! Keys follow the `_locales/<lang>/messages.json` naming of the packaged
//! extension, and messages use Chrome's positional `$1` placeholders, so the
//! same tables feed both the in-page renderer and the packager.

mod tables;

use crate::models::Language;
use std::collections::BTreeMap;

pub use tables::MessageTable;

/// Message lookup for one language, falling back to English and then to the
/// key itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Translator {
    language: Language,
}

impl Translator {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn t(&self, key: &str) -> String {
        self.t_with(key, &[])
    }

    /// Look up `key` and replace `$1`, `$2`, ... with `substitutions`.
    pub fn t_with(&self, key: &str, substitutions: &[&str]) -> String {
        let template = messages(self.language)
            .get(key)
            .or_else(|| messages(Language::En).get(key))
            .copied();

        match template {
            Some(template) => substitute(template, substitutions),
            None => {
                log::warn!("missing translation for {}", key);
                key.to_string()
            }
        }
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::new(Language::default())
    }
}

/// The full message table for `language`.
pub fn messages(language: Language) -> &'static MessageTable {
    match language {
        Language::En => &tables::EN,
        Language::ZhCn => &tables::ZH_CN,
    }
}

/// `_locales/<lang>/messages.json` contents for `language`.
pub fn locale_messages(language: Language) -> serde_json::Value {
    let entries: BTreeMap<&str, serde_json::Value> = messages(language)
        .iter()
        .map(|(key, message)| (*key, serde_json::json!({ "message": message })))
        .collect();
    serde_json::json!(entries)
}

fn substitute(template: &str, substitutions: &[&str]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '$' {
            if let Some(index) = chars.peek().and_then(|d| d.to_digit(10)) {
                chars.next();
                if let Some(value) = (index as usize).checked_sub(1).and_then(|i| substitutions.get(i)) {
                    out.push_str(value);
                }
                continue;
            }
        }
        out.push(c);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_lookup() {
        let t = Translator::new(Language::En);
        assert_eq!(t.t("copyPrompt"), "Copy Prompt");
        assert_eq!(t.t("copied"), "Copied!");
    }

    #[test]
    fn test_substitution() {
        let t = Translator::new(Language::En);
        assert_eq!(t.t_with("by", &["ada"]), "by ada");
        assert_eq!(t.t_with("likes", &["3"]), "3 likes");
    }

    #[test]
    fn test_chinese_table() {
        let t = Translator::new(Language::ZhCn);
        assert_eq!(t.t("copied"), "已复制！");
        assert_eq!(t.t_with("by", &["ada"]), "作者：ada");
    }

    #[test]
    fn test_missing_key_returns_key() {
        let t = Translator::new(Language::ZhCn);
        assert_eq!(t.t("doesNotExist"), "doesNotExist");
    }

    #[test]
    fn test_missing_substitution_is_dropped() {
        assert_eq!(substitute("$1 and $2", &["a"]), "a and ");
        assert_eq!(substitute("costs $ 5", &[]), "costs $ 5");
    }

    #[test]
    fn test_tables_have_same_keys() {
        let en: Vec<_> = messages(Language::En).keys().collect();
        let zh: Vec<_> = messages(Language::ZhCn).keys().collect();
        assert_eq!(en, zh);
    }

    #[test]
    fn test_locale_messages_shape() {
        let json = locale_messages(Language::En);
        assert_eq!(json["worldDetails"]["message"], "World Details");
    }
}
