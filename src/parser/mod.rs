//! Parsing for page URLs, API responses, option files and manifests

pub mod url;
pub mod world;
pub mod options;
pub mod manifest;

pub use url::{extract_world_id, parse_world_id, world_api_url};
pub use world::parse_world_record;
pub use options::{parse_options, parse_options_from_file};
pub use manifest::parse_manifest;
