//! Distance service configuration

use std::fmt;

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Maximum number of destinations the service accepts per call
pub const DEFAULT_BATCH_SIZE: usize = 25;

/// Distance Matrix endpoint
pub const DEFAULT_ENDPOINT: &str = "https://maps.googleapis.com/maps/api/distancematrix/json";

/// Configuration for the Google Distance Matrix client
#[derive(Clone, Serialize, Deserialize)]
pub struct DistanceConfig {
    /// API key (sensitive - uses `SecretString`)
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// Distance Matrix endpoint URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Maximum destinations per request
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,

    /// Connection timeout in seconds
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,

    /// Overall request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl fmt::Debug for DistanceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DistanceConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("endpoint", &self.endpoint)
            .field("batch_size", &self.batch_size)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

const fn default_batch_size() -> usize {
    DEFAULT_BATCH_SIZE
}

const fn default_connect_timeout_secs() -> u64 {
    2
}

const fn default_timeout_secs() -> u64 {
    10
}

impl Default for DistanceConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: default_endpoint(),
            batch_size: default_batch_size(),
            connect_timeout_secs: default_connect_timeout_secs(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl DistanceConfig {
    /// Create a default configuration with the given API key
    #[must_use]
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(SecretString::from(api_key.into())),
            ..Default::default()
        }
    }

    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            timeout_secs: 5,
            ..Self::with_api_key("test-key")
        }
    }

    /// Get the API key as a string reference, if one is set
    #[must_use]
    pub fn api_key_str(&self) -> Option<&str> {
        self.api_key.as_ref().map(ExposeSecret::expose_secret)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        match self.api_key_str() {
            None => return Err("api_key is required".to_string()),
            Some(key) if key.trim().is_empty() => {
                return Err("api_key must not be empty".to_string());
            },
            Some(_) => {},
        }

        if self.endpoint.is_empty() {
            return Err("endpoint must not be empty".to_string());
        }

        if self.batch_size == 0 {
            return Err("batch_size must be greater than 0".to_string());
        }

        if self.connect_timeout_secs == 0 {
            return Err("connect_timeout_secs must be greater than 0".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        Ok(())
    }
}
