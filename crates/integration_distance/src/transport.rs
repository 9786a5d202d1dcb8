//! HTTP transport for Distance Matrix requests
//!
//! The client only needs "send a GET, get status and body back", so the
//! network is reached through [`HttpTransport`]. Tests substitute a fake.

use std::time::Duration;

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use reqwest::Client;
use reqwest::header::CONNECTION;
use tracing::debug;

use crate::config::DistanceConfig;
use crate::error::DistanceError;

/// Status and body of a completed HTTP exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body as text
    pub body: String,
}

impl HttpResponse {
    /// Create a response from a status code and body
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Transport used to issue a single GET request
#[cfg_attr(test, automock)]
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Send a GET request to a fully assembled URL
    ///
    /// # Errors
    ///
    /// Returns [`DistanceError::TransportError`] if the request could not be
    /// completed or the body could not be read.
    async fn get(&self, url: &str) -> Result<HttpResponse, DistanceError>;
}

/// `reqwest`-backed transport
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
    timeout_secs: u64,
}

impl ReqwestTransport {
    /// Create a transport with the timeouts from `config`
    ///
    /// Idle connections are never kept, so every request opens its own
    /// connection and releases it once the body has been read.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &DistanceConfig) -> Result<Self, DistanceError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .timeout(Duration::from_secs(config.timeout_secs))
            .pool_max_idle_per_host(0)
            .build()
            .map_err(|e| DistanceError::ConfigurationError(e.to_string()))?;

        Ok(Self {
            client,
            timeout_secs: config.timeout_secs,
        })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, DistanceError> {
        let response = self
            .client
            .get(url)
            .header(CONNECTION, "close")
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    DistanceError::transport(format!(
                        "request timed out after {} seconds",
                        self.timeout_secs
                    ))
                } else {
                    DistanceError::transport(format!("connection failed: {e}"))
                }
            })?;

        let status = response.status().as_u16();
        debug!(status, "Received Distance Matrix response");

        let body = response
            .text()
            .await
            .map_err(|e| DistanceError::transport(format!("failed to read body: {e}")))?;

        Ok(HttpResponse { status, body })
    }
}
