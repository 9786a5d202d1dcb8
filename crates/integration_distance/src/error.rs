//! Distance error types

use thiserror::Error;

use crate::status::ApiStatus;

/// Errors that can occur while fetching driving distances
///
/// Transport and API failures display exactly the reason text of the
/// status they map to, so callers can surface the message unchanged.
#[derive(Debug, Error)]
pub enum DistanceError {
    /// The client was constructed with an invalid configuration
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Network failure, non-200 response, or an unusable body
    #[error("{}", ApiStatus::UnknownError.reason())]
    TransportError {
        /// What went wrong on the wire (for logs, not for display)
        detail: String,
    },

    /// The service answered with a non-OK status
    #[error("{}", .status.reason())]
    ApiError {
        /// Status reported by the service
        status: ApiStatus,
    },
}

impl DistanceError {
    pub(crate) fn transport(detail: impl Into<String>) -> Self {
        Self::TransportError {
            detail: detail.into(),
        }
    }

    /// Status code this failure maps to
    ///
    /// Transport failures map to `UNKNOWN_ERROR`; configuration errors
    /// have no remote counterpart.
    #[must_use]
    pub const fn status(&self) -> Option<ApiStatus> {
        match self {
            Self::ConfigurationError(_) => None,
            Self::TransportError { .. } => Some(ApiStatus::UnknownError),
            Self::ApiError { status } => Some(*status),
        }
    }

    /// Returns true if repeating the same call may succeed
    ///
    /// Advisory only, the client never retries on its own.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::TransportError { .. }
                | Self::ApiError {
                    status: ApiStatus::OverQueryLimit | ApiStatus::UnknownError,
                }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_errors() {
        assert!(DistanceError::transport("HTTP 500").is_retryable());
        assert!(
            DistanceError::ApiError {
                status: ApiStatus::OverQueryLimit
            }
            .is_retryable()
        );
        assert!(
            DistanceError::ApiError {
                status: ApiStatus::UnknownError
            }
            .is_retryable()
        );
    }

    #[test]
    fn test_non_retryable_errors() {
        assert!(!DistanceError::ConfigurationError("test".to_string()).is_retryable());
        assert!(
            !DistanceError::ApiError {
                status: ApiStatus::RequestDenied
            }
            .is_retryable()
        );
        assert!(
            !DistanceError::ApiError {
                status: ApiStatus::InvalidRequest
            }
            .is_retryable()
        );
    }

    #[test]
    fn test_transport_error_displays_unknown_reason() {
        let err = DistanceError::transport("connection reset");
        assert_eq!(
            err.to_string(),
            "An unknown error occurred, it may succeed if you try again"
        );
        assert_eq!(err.status(), Some(ApiStatus::UnknownError));
    }

    #[test]
    fn test_api_error_displays_reason() {
        let err = DistanceError::ApiError {
            status: ApiStatus::MaxElementsExceeded,
        };
        assert_eq!(
            err.to_string(),
            "Exceeded max number of origins or destinations"
        );
        assert_eq!(err.status(), Some(ApiStatus::MaxElementsExceeded));
    }

    #[test]
    fn test_configuration_error_display() {
        let err = DistanceError::ConfigurationError("api_key must not be empty".to_string());
        assert!(err.to_string().contains("api_key"));
        assert_eq!(err.status(), None);
    }
}
