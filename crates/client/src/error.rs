//! Collector error types.

use ledgerdesk_shared::AppError;
use thiserror::Error;

/// Errors raised while fetching from the backend.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Configured base URL is not a valid URL.
    #[error("Invalid base URL '{0}'")]
    InvalidBaseUrl(String),

    /// Request could not be sent or the response could not be read.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend answered with a non-success status.
    #[error("{resource} request failed with status {status}")]
    Status {
        /// Resource requested.
        resource: &'static str,
        /// HTTP status code.
        status: u16,
    },

    /// Response body was not JSON.
    #[error("Could not decode {resource} response: {message}")]
    Decode {
        /// Resource requested.
        resource: &'static str,
        /// Decoder message.
        message: String,
    },

    /// A record the view depends on is missing.
    #[error("{resource} {id} not found")]
    NotFound {
        /// Resource searched.
        resource: &'static str,
        /// Record ID.
        id: i64,
    },
}

impl From<ClientError> for AppError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::InvalidBaseUrl(_) => Self::Configuration(err.to_string()),
            ClientError::Decode { .. } => Self::Decode(err.to_string()),
            ClientError::NotFound { .. } => Self::NotFound(err.to_string()),
            ClientError::Http(_) | ClientError::Status { .. } => {
                Self::ExternalService(err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maps_to_app_error() {
        let status = ClientError::Status {
            resource: "sales",
            status: 502,
        };
        assert_eq!(status.to_string(), "sales request failed with status 502");
        assert!(matches!(AppError::from(status), AppError::ExternalService(_)));

        let missing = ClientError::NotFound {
            resource: "customer",
            id: 9,
        };
        assert!(matches!(AppError::from(missing), AppError::NotFound(_)));

        let decode = ClientError::Decode {
            resource: "stocks",
            message: "expected value".to_string(),
        };
        assert!(matches!(AppError::from(decode), AppError::Decode(_)));

        let url = ClientError::InvalidBaseUrl("::".to_string());
        assert!(matches!(AppError::from(url), AppError::Configuration(_)));
    }
}
