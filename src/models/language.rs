//! Display language preference

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Languages the extension ships translations for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    En,
    #[serde(rename = "zh_CN")]
    ZhCn,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported language code: {0}")]
pub struct UnknownLanguage(pub String);

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::ZhCn];

    /// Locale code, also the `_locales` directory name.
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::ZhCn => "zh_CN",
        }
    }

    /// Name of the language in itself.
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::ZhCn => "中文",
        }
    }

    pub fn flag(&self) -> &'static str {
        match self {
            Language::En => "🇺🇸",
            Language::ZhCn => "🇨🇳",
        }
    }

    /// Accepts the stored codes plus the BCP 47 spellings browsers report.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().replace('-', "_").to_ascii_lowercase().as_str() {
            "en" | "en_us" | "en_gb" => Some(Language::En),
            "zh" | "zh_cn" | "zh_hans" => Some(Language::ZhCn),
            _ => None,
        }
    }
}

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_code(s).ok_or_else(|| UnknownLanguage(s.to_string()))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
