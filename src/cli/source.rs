//! World records over HTTP with reqwest

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;

use crate::models::{WorldId, WorldRecord};
use crate::panel::{FetchError, WorldSource};
use crate::parser::{parse_world_record, world_api_url};

pub struct HttpWorldSource {
    client: Client,
    base_url: String,
}

impl HttpWorldSource {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("marble-inspector/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(30))
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }
}

impl WorldSource for HttpWorldSource {
    async fn fetch_world(&self, world_id: &WorldId) -> Result<WorldRecord, FetchError> {
        let url = world_api_url(&self.base_url, world_id);
        log::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        parse_world_record(&body).map_err(|e| FetchError::Decode(format!("{:#}", e)))
    }
}
