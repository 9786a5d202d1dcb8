//! Google Distance Matrix client
//!
//! Fetches driving distances from one origin to many destinations, splitting
//! the destinations into batches the service accepts and merging the results.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::config::DistanceConfig;
use crate::error::DistanceError;
use crate::models::{Destinations, DistanceResult};
use crate::status::{ApiStatus, STATUS_OK};
use crate::transport::{HttpResponse, HttpTransport, ReqwestTransport};
use crate::urlencoding;

/// Separator the service expects between destinations
const DESTINATION_SEPARATOR: &str = "|";

/// Unit system requested from the service
const UNITS: &str = "imperial";

/// Stand-in for the API key in logged URLs
const REDACTED_KEY: &str = "[REDACTED]";

/// Trait for driving distance clients
#[async_trait]
pub trait DistanceClient: Send + Sync {
    /// Fetch driving distances and durations from `origin` to every destination
    ///
    /// Destinations beyond the batch size are requested in consecutive
    /// batches and merged under the single origin. The first failing batch
    /// aborts the call.
    async fn get_driving_distances(
        &self,
        origin: &str,
        destinations: Destinations,
    ) -> Result<DistanceResult, DistanceError>;
}

/// Distance Matrix client over an [`HttpTransport`]
#[derive(Debug)]
pub struct GoogleDistanceClient<T = ReqwestTransport> {
    transport: T,
    api_key: SecretString,
    endpoint: String,
    batch_size: usize,
}

impl GoogleDistanceClient {
    /// Create a new client backed by `reqwest`
    ///
    /// # Errors
    ///
    /// Returns [`DistanceError::ConfigurationError`] if the API key is missing
    /// or empty, the configuration is otherwise invalid, or the HTTP client
    /// cannot be initialized.
    pub fn new(config: &DistanceConfig) -> Result<Self, DistanceError> {
        config
            .validate()
            .map_err(DistanceError::ConfigurationError)?;
        let transport = ReqwestTransport::new(config)?;
        Self::with_transport(config, transport)
    }

    /// Create a client with default settings and the given API key
    ///
    /// # Errors
    ///
    /// Returns [`DistanceError::ConfigurationError`] if the API key is empty.
    pub fn from_api_key(api_key: &str) -> Result<Self, DistanceError> {
        Self::new(&DistanceConfig::with_api_key(api_key))
    }
}

impl<T: HttpTransport> GoogleDistanceClient<T> {
    /// Create a client that sends requests through `transport`
    ///
    /// # Errors
    ///
    /// Returns [`DistanceError::ConfigurationError`] if the configuration is invalid.
    pub fn with_transport(config: &DistanceConfig, transport: T) -> Result<Self, DistanceError> {
        config
            .validate()
            .map_err(DistanceError::ConfigurationError)?;

        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| DistanceError::ConfigurationError("api_key is required".to_string()))?;

        Ok(Self {
            transport,
            api_key,
            endpoint: config.endpoint.clone(),
            batch_size: config.batch_size,
        })
    }

    /// Maximum destinations sent per request
    #[must_use]
    pub const fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Build the request URL for one batch
    ///
    /// Parameters are emitted in a fixed order: origins, destinations,
    /// units, key.
    fn build_url(&self, origin: &str, destinations: &[String]) -> String {
        self.url_with_key(
            origin,
            destinations,
            &urlencoding::encode(self.api_key.expose_secret()),
        )
    }

    /// Request URL with the key replaced, safe to log
    fn redacted_url(&self, origin: &str, destinations: &[String]) -> String {
        self.url_with_key(origin, destinations, REDACTED_KEY)
    }

    fn url_with_key(&self, origin: &str, destinations: &[String], key: &str) -> String {
        format!(
            "{}?origins={}&destinations={}&units={}&key={}",
            self.endpoint,
            urlencoding::encode(origin),
            urlencoding::encode(&destinations.join(DESTINATION_SEPARATOR)),
            UNITS,
            key
        )
    }

    /// Request distances for a single batch of destinations
    async fn process_batch(
        &self,
        origin: &str,
        destinations: &[String],
    ) -> Result<DistanceResult, DistanceError> {
        debug!(
            url = %self.redacted_url(origin, destinations),
            "Sending Distance Matrix request"
        );
        let url = self.build_url(origin, destinations);
        let response = self.transport.get(&url).await?;
        Self::interpret_response(response)
    }

    /// Turn an HTTP response into a result or a typed failure
    fn interpret_response(response: HttpResponse) -> Result<DistanceResult, DistanceError> {
        if response.status != 200 {
            return Err(DistanceError::transport(format!("HTTP {}", response.status)));
        }

        if response.body.trim().is_empty() {
            return Err(DistanceError::transport("empty response body"));
        }

        let payload: Value = serde_json::from_str(&response.body)
            .map_err(|e| DistanceError::transport(format!("invalid JSON: {e}")))?;

        let status = payload
            .get("status")
            .and_then(Value::as_str)
            .filter(|status| !status.is_empty())
            .ok_or_else(|| DistanceError::transport("response has no status"))?;

        match status {
            STATUS_OK => {},
            other => {
                let status = ApiStatus::from_code(other);
                warn!(%status, reason = status.reason(), "Distance Matrix request rejected");
                return Err(DistanceError::ApiError { status });
            },
        }

        Ok(DistanceResult::new(payload))
    }
}

#[async_trait]
impl<T: HttpTransport> DistanceClient for GoogleDistanceClient<T> {
    #[instrument(skip(self, destinations), fields(destinations = destinations.len()))]
    async fn get_driving_distances(
        &self,
        origin: &str,
        destinations: Destinations,
    ) -> Result<DistanceResult, DistanceError> {
        let invalid = || DistanceError::ApiError {
            status: ApiStatus::InvalidRequest,
        };

        if origin.trim().is_empty() {
            return Err(invalid());
        }

        let batch_count = destinations.len().div_ceil(self.batch_size);
        let mut batches = destinations.batches(self.batch_size);

        // An empty destination list yields no batch and is rejected unsent
        let first = batches.next().ok_or_else(invalid)?;
        debug!(batch = 1, of = batch_count, size = first.len(), "Requesting distance batch");
        let mut merged = self.process_batch(origin, first).await?;

        for (index, batch) in batches.enumerate() {
            debug!(
                batch = index + 2,
                of = batch_count,
                size = batch.len(),
                "Requesting distance batch"
            );

            merged.merge(self.process_batch(origin, batch).await?);
        }

        debug!(batches = batch_count, "Driving distances fetched");
        Ok(merged)
    }
}
