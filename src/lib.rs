//! Marble World Inspector
//!
//! A browser extension for marble.worldlabs.ai that adds a floating button to
//! world pages and opens a sidebar with the world's metadata: owner, likes,
//! prompt, input image, model and export downloads. A popup lets the user pick
//! the display language.
//!
//! Everything that does not touch the DOM lives in plain modules so it can be
//! exercised natively; the `wasm` module wires it into the page.

pub mod models;
pub mod parser;
pub mod i18n;
pub mod view;
pub mod watcher;
pub mod panel;
pub mod settings;
pub mod packager;
pub mod validator;
pub mod utils;

#[cfg(feature = "cli")]
pub mod cli;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use models::{Language, WorldId, WorldRecord, ExtensionMessage};
pub use parser::{extract_world_id, parse_world_record};
pub use i18n::Translator;
pub use watcher::{NavigationWatcher, NavigationSignal, NavigationSource};
pub use panel::{PanelController, PanelHost, HostingContext, FetchTicket, LoadOutcome, load_resource};

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default endpoint serving world records, one per `/{world_id}`.
pub const DEFAULT_API_BASE_URL: &str = "https://marble2-kgw-prod-iac1.wlt-ai.art/api/v1/worlds";

/// Pages the content script is injected into.
pub const DEFAULT_MATCH_PATTERN: &str = "*://marble.worldlabs.ai/*";

/// Runtime options shared by the content script, the popup and the CLI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InspectorOptions {
    pub api_base_url: String,
    pub match_pattern: String,
    pub poll_interval_ms: u32,
    pub copied_label_ms: u32,
    pub save_notice_ms: u32,
    pub input_image_filename: String,
    pub stale_responses: StaleResponsePolicy,
}

impl InspectorOptions {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(u64::from(self.poll_interval_ms))
    }

    pub fn copied_label_duration(&self) -> Duration {
        Duration::from_millis(u64::from(self.copied_label_ms))
    }

    pub fn save_notice_duration(&self) -> Duration {
        Duration::from_millis(u64::from(self.save_notice_ms))
    }
}

impl Default for InspectorOptions {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            match_pattern: DEFAULT_MATCH_PATTERN.to_string(),
            poll_interval_ms: 1000,
            copied_label_ms: 2000,
            save_notice_ms: 2000,
            input_image_filename: "input-image.png".to_string(),
            stale_responses: StaleResponsePolicy::Discard,
        }
    }
}

/// What to do with a response that arrives after the panel moved on to
/// another world (or was reset) while the page itself stayed alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StaleResponsePolicy {
    /// Drop it; only the most recently requested world may render.
    #[default]
    Discard,
    /// Render it anyway as long as the hosting context is still valid.
    Render,
}
