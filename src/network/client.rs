//! HTTP client for requests to the news index

use crate::error::SearchError;
use anyhow::Result;
use reqwest::Client;
use std::time::Duration;

const USER_AGENT: &str = concat!("newsdesk/", env!("CARGO_PKG_VERSION"));

/// A raw upstream response with the body fully read.
///
/// Reading the body eagerly means the connection is back in the pool (or
/// closed) before any handler looks at the payload; handlers never hold
/// network resources.
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub status: u16,
    pub text: String,
}

impl UpstreamResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Shared HTTP client with newsdesk defaults.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .gzip(true)
            .build()?;
        Ok(Self { client })
    }

    /// Issue a GET with query parameters and a per-request timeout.
    ///
    /// The timeout bounds the whole exchange including the body read, so a
    /// call abandoned by its deadline signal still terminates promptly on
    /// its own task.
    pub async fn get(
        &self,
        url: &str,
        params: &[(String, String)],
        timeout: Duration,
    ) -> Result<UpstreamResponse, SearchError> {
        let response = self
            .client
            .get(url)
            .query(params)
            .timeout(timeout)
            .send()
            .await?;

        let status = response.status().as_u16();
        let text = response.text().await?;

        Ok(UpstreamResponse { status, text })
    }
}
