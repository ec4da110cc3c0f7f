//! Unpacked extension and archive building

pub mod builder;
pub mod assets;

use crate::i18n::{locale_messages, Translator};
use crate::models::{Action, ContentScript, ContentSecurityPolicy, Language, Manifest, WebAccessibleResource};
use crate::InspectorOptions;
use anyhow::Result;
use std::path::{Path, PathBuf};

/// Directory, inside the package, holding the wasm-bindgen output.
pub const WASM_PKG_DIR: &str = "pkg";

#[derive(Debug, Clone)]
pub struct PackageOptions {
    pub version: String,
    /// wasm-bindgen/wasm-pack output to copy into the package.
    pub wasm_pkg: Option<PathBuf>,
    pub create_archive: bool,
}

impl Default for PackageOptions {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            wasm_pkg: None,
            create_archive: true,
        }
    }
}

/// Manifest V3 for the extension.
///
/// Name and description are `__MSG_*__` references resolved from `_locales`.
pub fn build_manifest(options: &InspectorOptions, version: &str) -> Manifest {
    let title = Translator::new(Language::En).t("extName");

    Manifest {
        manifest_version: 3,
        name: "__MSG_extName__".to_string(),
        version: version.to_string(),
        description: Some("__MSG_extDescription__".to_string()),
        default_locale: Some(Language::En.code().to_string()),
        action: Some(Action {
            default_popup: Some(assets::POPUP_HTML.to_string()),
            default_title: Some(title),
        }),
        permissions: vec!["storage".to_string()],
        host_permissions: Vec::new(),
        content_scripts: vec![ContentScript {
            matches: vec![options.match_pattern.clone()],
            js: vec![assets::CONTENT_JS.to_string()],
            // panel classes ship unstyled
            css: Vec::new(),
            run_at: Some("document_idle".to_string()),
        }],
        web_accessible_resources: vec![WebAccessibleResource {
            resources: vec![format!("{}/*", WASM_PKG_DIR)],
            matches: vec![options.match_pattern.clone()],
        }],
        content_security_policy: Some(ContentSecurityPolicy {
            extension_pages: Some("script-src 'self' 'wasm-unsafe-eval'; object-src 'self'".to_string()),
        }),
        icons: None,
    }
}

/// `_locales/<code>/messages.json` for every shipped language.
pub fn locale_files() -> Vec<(PathBuf, serde_json::Value)> {
    Language::ALL
        .iter()
        .map(|language| {
            let path = PathBuf::from("_locales").join(language.code()).join("messages.json");
            (path, locale_messages(*language))
        })
        .collect()
}

/// Build the unpacked extension in `output_path` and, if requested, a zip
/// archive next to it. Returns the archive path when one was written.
pub fn build_extension(
    options: &InspectorOptions,
    package: &PackageOptions,
    output_path: &Path,
) -> Result<Option<PathBuf>> {
    let manifest = build_manifest(options, &package.version);
    builder::build_directory(&manifest, package.wasm_pkg.as_deref(), output_path)?;

    if !package.create_archive {
        return Ok(None);
    }

    let zip_path = output_path.with_extension("zip");
    builder::create_zip_from_directory(output_path, &zip_path)?;
    log::info!("Wrote extension archive {}", zip_path.display());
    Ok(Some(zip_path))
}
