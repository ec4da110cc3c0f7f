//! Manifest parsing for built packages

use crate::models::Manifest;
use anyhow::{Context, Result};
use std::path::Path;

/// Parse manifest.json from bytes
pub fn parse_manifest(content: &[u8]) -> Result<Manifest> {
    let content_str = std::str::from_utf8(content)
        .context("Invalid UTF-8 in manifest.json")?;

    // json5 also accepts hand-edited manifests with comments
    let manifest: Manifest = json5::from_str(content_str)
        .context("Failed to parse manifest.json")?;

    if manifest.manifest_version != 3 {
        anyhow::bail!("Unsupported manifest version: {}", manifest.manifest_version);
    }

    Ok(manifest)
}

/// Parse manifest.json from file path
pub fn parse_manifest_from_file(path: impl AsRef<Path>) -> Result<Manifest> {
    let content = std::fs::read(path.as_ref())
        .context("Failed to read manifest file")?;
    parse_manifest(&content)
}
