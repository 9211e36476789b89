use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use crate::models::{ApiRecord, PageRecord};
use crate::FeedUrl;

/// Client for the site's rendered-content feed.
///
/// The feed exposes two collections: per-page metadata with compressed
/// content, and API-reference compressed-content records. A failed fetch is
/// fatal for that collection only; callers decide what to do with whatever
/// data they already have.
pub struct FeedClient {
    base_url: FeedUrl,
}

impl FeedClient {
    pub fn new(base_url: FeedUrl) -> Self {
        Self { base_url }
    }

    async fn fetch<T: DeserializeOwned>(&self, url: impl AsRef<str>) -> Result<T, FeedError> {
        let client = reqwest::Client::new();

        let resp = client
            .get(url.as_ref())
            .send()
            .await
            .map_err(|e| FeedError::Unreachable(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(FeedError::Status(resp.status().as_u16()));
        }

        debug!(url = url.as_ref(), "Fetched feed collection");

        resp.json::<T>()
            .await
            .map_err(|e| FeedError::Parsing(format!("Failed to parse response as JSON: {}", e)))
    }

    /// Fetch the per-page metadata + compressed-content records.
    pub async fn fetch_pages(&self) -> Result<Vec<PageRecord>, FeedError> {
        let url = self.base_url.append_path("/page-data");
        self.fetch(url).await
    }

    /// Fetch the API-reference compressed-content records.
    pub async fn fetch_api_records(&self) -> Result<Vec<ApiRecord>, FeedError> {
        let url = self.base_url.append_path("/api-data");
        self.fetch(url).await
    }
}

#[derive(Error, Debug)]
pub enum FeedError {
    #[error("Feed unreachable: {0}")]
    Unreachable(String),
    #[error("Feed returned status {0}")]
    Status(u16),
    #[error("ParsingError: {0}")]
    Parsing(String),
}
