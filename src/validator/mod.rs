//! Validation module

pub mod structure;

use anyhow::Result;
use std::path::Path;

/// Check that a built extension directory is loadable.
pub fn validate_extension(package_dir: &Path) -> Result<()> {
    structure::validate_structure(package_dir)
}
