//! World identifiers embedded in marble.worldlabs.ai page URLs

use crate::models::WorldId;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // `/world/<id>` anywhere in the URL; the id is 36 chars of lowercase hex and hyphens
    static ref WORLD_PATH_PATTERN: Regex = Regex::new(r"/world/([a-f0-9-]{36})").unwrap();

    static ref WORLD_TOKEN_PATTERN: Regex = Regex::new(r"^[a-f0-9-]{36}$").unwrap();
}

/// Extract the world identifier from a page URL.
///
/// Returns `None` when the URL is not a world detail page.
pub fn extract_world_id(url: &str) -> Option<WorldId> {
    WORLD_PATH_PATTERN
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| WorldId::from_token(m.as_str()))
}

/// Accept a bare identifier, as typed on the command line.
pub fn parse_world_id(token: &str) -> Option<WorldId> {
    let token = token.trim();
    if WORLD_TOKEN_PATTERN.is_match(token) {
        Some(WorldId::from_token(token))
    } else {
        None
    }
}

/// Endpoint serving the record for `id`.
pub fn world_api_url(base_url: &str, id: &WorldId) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), id)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ID: &str = "123e4567-e89b-12d3-a456-426614174000";

    #[test]
    fn test_extract_from_world_page() {
        let url = format!("https://marble.worldlabs.ai/world/{}", ID);
        assert_eq!(extract_world_id(&url).unwrap().as_str(), ID);
    }

    #[test]
    fn test_extract_ignores_query_and_fragment() {
        let url = format!("https://marble.worldlabs.ai/world/{}?tab=info#top", ID);
        assert_eq!(extract_world_id(&url).unwrap().as_str(), ID);
    }

    #[test]
    fn test_no_id_outside_world_pages() {
        assert!(extract_world_id("https://marble.worldlabs.ai/").is_none());
        assert!(extract_world_id("https://marble.worldlabs.ai/explore").is_none());
        assert!(extract_world_id(&format!("https://marble.worldlabs.ai/worlds/{}", ID)).is_none());
    }

    #[test]
    fn test_uppercase_ids_do_not_match() {
        let url = format!("https://marble.worldlabs.ai/world/{}", ID.to_uppercase());
        assert!(extract_world_id(&url).is_none());
    }

    #[test]
    fn test_short_token_does_not_match() {
        assert!(extract_world_id("https://marble.worldlabs.ai/world/123e4567").is_none());
    }

    #[test]
    fn test_parse_bare_token() {
        assert_eq!(parse_world_id(ID).unwrap().as_str(), ID);
        assert_eq!(parse_world_id(&format!("  {}\n", ID)).unwrap().as_str(), ID);
        assert!(parse_world_id("not-a-world").is_none());
        assert!(parse_world_id(&format!("{}0", ID)).is_none());
    }

    #[test]
    fn test_world_api_url() {
        let id = parse_world_id(ID).unwrap();
        assert_eq!(
            world_api_url("https://api.example/worlds/", &id),
            format!("https://api.example/worlds/{}", ID)
        );
    }
}
