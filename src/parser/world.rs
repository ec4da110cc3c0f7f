//! World record parsing

use crate::models::WorldRecord;
use anyhow::{Context, Result};

/// Parse a world record from the API response body
pub fn parse_world_record(content: &[u8]) -> Result<WorldRecord> {
    let content_str = std::str::from_utf8(content)
        .context("Invalid UTF-8 in world record")?;

    let record: WorldRecord = serde_json::from_str(content_str)
        .context("Failed to parse world record")?;

    Ok(record)
}
