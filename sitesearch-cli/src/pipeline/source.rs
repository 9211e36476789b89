use async_trait::async_trait;
use pagefeed::models::{ApiRecord, PageRecord};
use pagefeed::{FeedClient, FeedError};

/// Where the indexer gets its raw records from.
///
/// Abstracts the content feed so the pipeline can run against canned
/// records in tests.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Fetch the per-page metadata + compressed-content records.
    async fn fetch_pages(&self) -> Result<Vec<PageRecord>, FeedError>;

    /// Fetch the API-reference compressed-content records.
    async fn fetch_api_records(&self) -> Result<Vec<ApiRecord>, FeedError>;
}

/// Content source backed by the live feed.
pub struct FeedContentSource {
    client: FeedClient,
}

impl FeedContentSource {
    pub fn new(client: FeedClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ContentSource for FeedContentSource {
    async fn fetch_pages(&self) -> Result<Vec<PageRecord>, FeedError> {
        self.client.fetch_pages().await
    }

    async fn fetch_api_records(&self) -> Result<Vec<ApiRecord>, FeedError> {
        self.client.fetch_api_records().await
    }
}
