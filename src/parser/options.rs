//! Inspector option files (JSON5)

use crate::InspectorOptions;
use anyhow::{Context, Result};
use std::path::Path;

/// Parse options from JSON5 text. Missing fields keep their defaults.
pub fn parse_options(content: &str) -> Result<InspectorOptions> {
    let options: InspectorOptions = json5::from_str(content)
        .context("Failed to parse inspector options")?;

    if options.api_base_url.trim().is_empty() {
        anyhow::bail!("api_base_url must not be empty");
    }

    if options.poll_interval_ms == 0 {
        anyhow::bail!("poll_interval_ms must be greater than zero");
    }

    Ok(options)
}

/// Parse options from a file path
pub fn parse_options_from_file(path: impl AsRef<Path>) -> Result<InspectorOptions> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read options file {}", path.display()))?;
    parse_options(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StaleResponsePolicy;

    #[test]
    fn test_empty_object_gives_defaults() {
        let options = parse_options("{}").unwrap();
        assert_eq!(options, InspectorOptions::default());
    }

    #[test]
    fn test_partial_options_with_comments() {
        let options = parse_options(r#"{
            // staging API
            api_base_url: "https://staging.example/api/v1/worlds",
            poll_interval_ms: 500,
            stale_responses: "render",
        }"#).unwrap();

        assert_eq!(options.api_base_url, "https://staging.example/api/v1/worlds");
        assert_eq!(options.poll_interval_ms, 500);
        assert_eq!(options.stale_responses, StaleResponsePolicy::Render);
        assert_eq!(options.copied_label_ms, 2000);
    }

    #[test]
    fn test_zero_poll_interval_rejected() {
        assert!(parse_options("{ poll_interval_ms: 0 }").is_err());
    }

    #[test]
    fn test_empty_base_url_rejected() {
        assert!(parse_options(r#"{ api_base_url: "" }"#).is_err());
    }
}
