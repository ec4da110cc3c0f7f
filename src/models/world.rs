//! World records as served by the Marble API

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Identifier of a world as it appears in `/world/<id>` page URLs.
///
/// Only built by [`crate::parser::extract_world_id`] and
/// [`crate::parser::parse_world_id`], so it always holds a 36 character
/// token of lowercase hex digits and hyphens.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct WorldId(String);

impl WorldId {
    pub(crate) fn from_token(token: &str) -> Self {
        Self(token.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WorldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for WorldId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A world as returned by `GET /api/v1/worlds/{id}`.
///
/// Every field is optional; the API omits whatever a world does not have and
/// the sidebar falls back per field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorldRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_data: Option<ApplicationData>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<WorldStats>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generation_input: Option<GenerationInput>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generation_output: Option<GenerationOutput>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApplicationData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_display_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorldStats {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub like_count: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerationInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<Prompt>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Prompt {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_prompt: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_prompt: Option<ImagePrompt>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImagePrompt {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerationOutput {
    /// Export quality (e.g. `100k`, `500k`, `full_res`) to download URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spz_urls: Option<BTreeMap<String, String>>,
}

/// Treats empty strings like missing values.
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

impl WorldRecord {
    pub fn display_name(&self) -> Option<&str> {
        non_empty(&self.display_name)
    }

    pub fn owner_display_name(&self) -> Option<&str> {
        self.application_data
            .as_ref()
            .and_then(|data| non_empty(&data.owner_display_name))
    }

    /// Like count, zero when the record carries no stats.
    pub fn like_count(&self) -> u64 {
        self.stats
            .as_ref()
            .and_then(|stats| stats.like_count)
            .unwrap_or(0)
    }

    fn prompt(&self) -> Option<&Prompt> {
        self.generation_input
            .as_ref()
            .and_then(|input| input.prompt.as_ref())
    }

    pub fn text_prompt(&self) -> Option<&str> {
        self.prompt().and_then(|prompt| non_empty(&prompt.text_prompt))
    }

    pub fn input_image_uri(&self) -> Option<&str> {
        self.prompt()
            .and_then(|prompt| prompt.image_prompt.as_ref())
            .and_then(|image| non_empty(&image.uri))
    }

    pub fn model(&self) -> Option<&str> {
        self.generation_input
            .as_ref()
            .and_then(|input| non_empty(&input.model))
    }

    /// Export downloads keyed by quality; `None` when the world has none.
    pub fn export_urls(&self) -> Option<&BTreeMap<String, String>> {
        self.generation_output
            .as_ref()
            .and_then(|output| output.spz_urls.as_ref())
            .filter(|urls| !urls.is_empty())
    }
}
