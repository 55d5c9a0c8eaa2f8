//! HTTP page fetching over reqwest.

use async_trait::async_trait;
use std::time::Duration;
use url::Url;

use super::protocols::HtmlFetcher;
use crate::errors::FetchError;

/// Maximum number of redirects to follow.
const MAX_REDIRECTS: usize = 10;

/// Fetches pages with a shared reqwest client.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Creates a fetcher sending the given user agent.
    pub fn new(user_agent: &str) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .build()
            .map_err(|e| FetchError::network(e.to_string()))?;
        Ok(Self { client })
    }

    /// Wraps an existing client.
    #[must_use]
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    async fn fetch_body(&self, url: &Url) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| FetchError::network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::status_code(status.as_u16()));
        }

        response
            .text()
            .await
            .map_err(|e| FetchError::network(e.to_string()))
    }
}

#[async_trait]
impl HtmlFetcher for HttpFetcher {
    async fn fetch(&self, url: &Url, timeout: Duration) -> Result<String, FetchError> {
        // Dropping the in-flight future on expiry closes the connection.
        tokio::time::timeout(timeout, self.fetch_body(url))
            .await
            .map_err(|_| FetchError::timeout(timeout))?
    }
}
