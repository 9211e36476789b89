use std::time::Duration;

use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::domain::{SearchRequest, SearchResponse};
use crate::SearchUrl;

/// Connection settings for the hosted search index.
#[derive(Clone, Debug)]
pub struct SearchEndpoint {
    pub url: String,
    pub api_key: String,
}

/// Handle to the hosted search index.
///
/// Constructed explicitly with [`SearchClient::open`] and passed to
/// whatever layer issues searches; there is no ambient singleton. Callers
/// that start a heartbeat must call [`SearchClient::close`] to stop it;
/// dropping the handle leaves the task running.
pub struct SearchClient {
    http: reqwest::Client,
    endpoint: SearchUrl,
    api_key: String,
    heartbeat: Option<JoinHandle<()>>,
}

impl SearchClient {
    /// Open a client handle against the hosted index.
    pub fn open(endpoint: SearchEndpoint) -> Result<Self, SearchError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| SearchError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            endpoint: SearchUrl::new(endpoint.url),
            api_key: endpoint.api_key,
            heartbeat: None,
        })
    }

    /// Keep the hosted deployment warm by pinging it on an interval.
    ///
    /// Idempotent: a second call while a heartbeat is running does nothing.
    pub fn start_heartbeat(&mut self, interval: Duration) {
        if self.heartbeat.is_some() {
            return;
        }

        let http = self.http.clone();
        let url = self.endpoint.append_path("/health");
        let api_key = self.api_key.clone();

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            // The opening search warms the deployment already.
            ticker.tick().await;

            loop {
                ticker.tick().await;
                match http.get(url.as_ref()).bearer_auth(&api_key).send().await {
                    Ok(resp) => debug!(status = resp.status().as_u16(), "Heartbeat ping"),
                    Err(e) => warn!(error = %e, "Heartbeat ping failed"),
                }
            }
        });

        self.heartbeat = Some(handle);
    }

    /// Execute one search against the hosted index.
    pub async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, SearchError> {
        let url = self.endpoint.append_path("/search");

        let resp = self
            .http
            .post(url.as_ref())
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| SearchError::Transport(e.to_string()))?;

        if resp.status() == 401 || resp.status() == 403 {
            return Err(SearchError::Unauthorized);
        }
        if !resp.status().is_success() {
            return Err(SearchError::Service(resp.status().as_u16()));
        }

        resp.json::<SearchResponse>()
            .await
            .map_err(|e| SearchError::Parsing(format!("Failed to parse response as JSON: {}", e)))
    }

    /// Close the handle, stopping the heartbeat task if one is running.
    pub fn close(mut self) {
        if let Some(handle) = self.heartbeat.take() {
            handle.abort();
        }
    }
}

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Unauthorized")]
    Unauthorized,
    #[error("TransportError: {0}")]
    Transport(String),
    #[error("Search service returned status {0}")]
    Service(u16),
    #[error("ParsingError: {0}")]
    Parsing(String),
}
