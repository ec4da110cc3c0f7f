//! Manifest V3 data structures for the packaged extension

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    pub manifest_version: u8,
    pub name: String,
    pub version: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_locale: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<Action>,

    #[serde(default)]
    pub permissions: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub host_permissions: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub content_scripts: Vec<ContentScript>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub web_accessible_resources: Vec<WebAccessibleResource>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_security_policy: Option<ContentSecurityPolicy>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub icons: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_popup: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentScript {
    pub matches: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub js: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub css: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebAccessibleResource {
    pub resources: Vec<String>,
    pub matches: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentSecurityPolicy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension_pages: Option<String>,
}

impl Manifest {
    /// Every file the manifest expects to find in the package.
    pub fn referenced_files(&self) -> Vec<&str> {
        let mut files: Vec<&str> = self
            .content_scripts
            .iter()
            .flat_map(|cs| cs.js.iter().map(String::as_str))
            .collect();
        if let Some(popup) = self.action.as_ref().and_then(|a| a.default_popup.as_deref()) {
            files.push(popup);
        }
        files
    }
}
