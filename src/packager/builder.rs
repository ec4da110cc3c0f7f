//! Extension directory and archive writer

use super::{assets, locale_files, WASM_PKG_DIR};
use crate::models::Manifest;
use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use walkdir::WalkDir;
use zip::write::{FileOptions, ZipWriter};
use zip::CompressionMethod;

/// Write the unpacked extension: manifest, locales, bootstraps and the
/// optional wasm-bindgen output.
pub fn build_directory(manifest: &Manifest, wasm_pkg: Option<&Path>, output_path: &Path) -> Result<()> {
    fs::create_dir_all(output_path)
        .with_context(|| format!("Failed to create {}", output_path.display()))?;

    let manifest_json = serde_json::to_string_pretty(manifest)?;
    fs::write(output_path.join("manifest.json"), manifest_json)?;

    for (path, messages) in locale_files() {
        write_file(output_path, &path, serde_json::to_string_pretty(&messages)?.as_bytes())?;
    }

    for (name, content) in assets::static_files() {
        write_file(output_path, Path::new(name), content.as_bytes())?;
    }

    if let Some(pkg) = wasm_pkg {
        copy_directory(pkg, &output_path.join(WASM_PKG_DIR))?;
    }

    Ok(())
}

fn write_file(root: &Path, relative: &Path, content: &[u8]) -> Result<()> {
    let file_path = root.join(relative);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&file_path, content)
        .with_context(|| format!("Failed to write {}", file_path.display()))
}

fn copy_directory(source_dir: &Path, dest_dir: &Path) -> Result<()> {
    if !source_dir.is_dir() {
        anyhow::bail!("wasm package directory not found: {}", source_dir.display());
    }

    for entry in WalkDir::new(source_dir).into_iter().filter_map(|e| e.ok()) {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let relative_path = path.strip_prefix(source_dir)
            .context("Failed to get relative path")?;
        // wasm-pack scaffolding, not needed at runtime
        if matches!(relative_path.to_str(), Some(".gitignore" | "package.json" | "README.md")) {
            continue;
        }
        write_file(dest_dir, relative_path, &fs::read(path)?)?;
    }

    Ok(())
}

pub fn create_zip_from_directory(source_dir: &Path, zip_path: &Path) -> Result<()> {
    let file = File::create(zip_path)
        .context("Failed to create ZIP file")?;
    let mut zip = ZipWriter::new(file);

    let options = FileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .unix_permissions(0o644);

    for entry in WalkDir::new(source_dir).sort_by_file_name().into_iter().filter_map(|e| e.ok()) {
        let path = entry.path();
        if path.is_file() {
            let relative_path = path.strip_prefix(source_dir)
                .context("Failed to get relative path")?;

            // archive entries always use forward slashes
            let name = relative_path.to_string_lossy().replace('\\', "/");
            zip.start_file(name, options)?;
            let content = fs::read(path)?;
            zip.write_all(&content)?;
        }
    }

    zip.finish()?;
    Ok(())
}
