//! Structural validation of a built extension

use crate::models::Manifest;
use crate::parser::manifest::parse_manifest_from_file;
use anyhow::Result;
use std::path::Path;

pub fn validate_structure(package_dir: &Path) -> Result<()> {
    let manifest = parse_manifest_from_file(package_dir.join("manifest.json"))?;

    validate_manifest(&manifest)?;
    validate_files(&manifest, package_dir)?;

    Ok(())
}

fn validate_manifest(manifest: &Manifest) -> Result<()> {
    if manifest.name.is_empty() {
        anyhow::bail!("Manifest name is required");
    }

    if manifest.version.is_empty() {
        anyhow::bail!("Manifest version is required");
    }

    if manifest.content_scripts.iter().all(|cs| cs.matches.is_empty()) {
        anyhow::bail!("Content script has no match patterns");
    }

    let uses_messages = manifest.name.starts_with("__MSG_")
        || manifest.description.as_deref().map_or(false, |d| d.starts_with("__MSG_"));
    if uses_messages && manifest.default_locale.is_none() {
        anyhow::bail!("default_locale is required when the manifest uses __MSG_ references");
    }

    Ok(())
}

fn validate_files(manifest: &Manifest, package_dir: &Path) -> Result<()> {
    for file in manifest.referenced_files() {
        if !package_dir.join(file).is_file() {
            anyhow::bail!("Manifest references missing file: {}", file);
        }
    }

    if let Some(locale) = &manifest.default_locale {
        let messages = package_dir.join("_locales").join(locale).join("messages.json");
        if !messages.is_file() {
            anyhow::bail!("Missing messages for default locale {}", locale);
        }
    }

    Ok(())
}
