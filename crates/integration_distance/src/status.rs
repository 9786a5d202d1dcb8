//! Distance Matrix status vocabulary
//!
//! The remote service reports the outcome of every call in a top-level
//! `status` string. Every non-OK value maps to a fixed human-readable reason.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Non-OK status codes reported by the Distance Matrix service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApiStatus {
    /// The request was malformed
    InvalidRequest,
    /// Too many origins or destinations in one request
    MaxElementsExceeded,
    /// The application has exceeded its quota
    OverQueryLimit,
    /// The service refused the request (usually a key problem)
    RequestDenied,
    /// A server-side error, or a status this client does not know
    UnknownError,
}

/// Fixed mapping from status code to reason text
pub const REASON_TABLE: [(ApiStatus, &str, &str); 5] = [
    (
        ApiStatus::InvalidRequest,
        "INVALID_REQUEST",
        "The provided request was invalid",
    ),
    (
        ApiStatus::MaxElementsExceeded,
        "MAX_ELEMENTS_EXCEEDED",
        "Exceeded max number of origins or destinations",
    ),
    (
        ApiStatus::OverQueryLimit,
        "OVER_QUERY_LIMIT",
        "Too many requests have been received from your application",
    ),
    (
        ApiStatus::RequestDenied,
        "REQUEST_DENIED",
        "The service denied use of the distance calculation for your application",
    ),
    (
        ApiStatus::UnknownError,
        "UNKNOWN_ERROR",
        "An unknown error occurred, it may succeed if you try again",
    ),
];

/// Status value signalling success
pub const STATUS_OK: &str = "OK";

impl ApiStatus {
    const fn entry(self) -> (Self, &'static str, &'static str) {
        REASON_TABLE[self as usize]
    }

    /// Wire representation of the status
    #[must_use]
    pub const fn code(self) -> &'static str {
        self.entry().1
    }

    /// Human-readable reason from the reason table
    #[must_use]
    pub const fn reason(self) -> &'static str {
        self.entry().2
    }

    /// Map a wire status to a known code
    ///
    /// Unrecognized values collapse to [`ApiStatus::UnknownError`].
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        REASON_TABLE
            .iter()
            .find(|(_, wire, _)| *wire == code)
            .map_or(Self::UnknownError, |(status, _, _)| *status)
    }
}

impl fmt::Display for ApiStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
