// Page download.
//
// The rest of the crate only sees `PageSource`, so tests can feed markup
// without touching the network.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, info};

use crate::config::SourceConfig;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed: {source}")]
    Request { url: String, source: reqwest::Error },

    #[error("{url} returned HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("failed to read response body from {url}: {source}")]
    Body { url: String, source: reqwest::Error },
}

/// Something that can produce the leaderboard page markup.
#[async_trait]
pub trait PageSource {
    async fn fetch(&self) -> Result<String, FetchError>;
}

/// Fetches the page over HTTP(S) with a fixed user agent.
pub struct HttpPageSource {
    http: reqwest::Client,
    url: String,
}

impl HttpPageSource {
    pub fn new(source: &SourceConfig) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .user_agent(source.user_agent.as_str())
            .timeout(Duration::from_secs(source.timeout_secs))
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self {
            http,
            url: source.url.clone(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl PageSource for HttpPageSource {
    async fn fetch(&self) -> Result<String, FetchError> {
        debug!("GET {}", self.url);
        let response = self
            .http
            .get(&self.url)
            .send()
            .await
            .map_err(|source| FetchError::Request {
                url: self.url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: self.url.clone(),
                status,
            });
        }

        let body = response.text().await.map_err(|source| FetchError::Body {
            url: self.url.clone(),
            source,
        })?;
        info!("Fetched {} bytes from {}", body.len(), self.url);
        Ok(body)
    }
}

/// A fixed page held in memory, for callers that already have the markup.
pub struct StaticPage(pub String);

#[async_trait]
impl PageSource for StaticPage {
    async fn fetch(&self) -> Result<String, FetchError> {
        Ok(self.0.clone())
    }
}
