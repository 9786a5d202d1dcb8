//! Driving distance integration
//!
//! Fetches road-travel distances and durations from one origin to one or
//! more destinations via the
//! [Google Distance Matrix API](https://developers.google.com/maps/documentation/distance-matrix).
//!
//! # Architecture
//!
//! [`DistanceClient`] defines the interface, implemented by
//! [`GoogleDistanceClient`]. Destinations are split into batches of at most
//! [`DEFAULT_BATCH_SIZE`] (configurable), requested one after another, and
//! merged under the single origin. Requests go through an [`HttpTransport`],
//! which is [`ReqwestTransport`] in production and a fake in tests.
//!
//! Failures are reported as [`DistanceError`]: configuration errors at
//! construction, transport errors for anything that breaks on the wire, and
//! API errors carrying the service's [`ApiStatus`] and its reason text.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_distance::{DistanceClient, GoogleDistanceClient};
//!
//! let client = GoogleDistanceClient::from_api_key("my-api-key")?;
//!
//! let result = client
//!     .get_driving_distances("SW1A 1AA", ["EC1A 1BB", "M1 1AE"].into())
//!     .await?;
//!
//! for (address, element) in result.destination_addresses().iter().zip(result.elements()) {
//!     println!("{address}: {}", element["distance"]["text"]);
//! }
//! ```

mod client;
mod config;
mod error;
mod models;
mod status;
mod transport;
mod urlencoding;

pub use client::{DistanceClient, GoogleDistanceClient};
pub use config::{DEFAULT_BATCH_SIZE, DEFAULT_ENDPOINT, DistanceConfig};
pub use error::DistanceError;
pub use models::{Destinations, DistanceResult};
pub use status::{ApiStatus, REASON_TABLE, STATUS_OK};
pub use transport::{HttpResponse, HttpTransport, ReqwestTransport};
