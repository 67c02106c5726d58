use thiserror::Error as ThisError;

use crate::domain::errors::SwiftError;

/// Infrastructure errors raised by the HTTP client
#[derive(ThisError, Debug)]
pub enum SwiftClientError {
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP error: {status} - {message}")]
    Http { status: u16, message: String },

    #[error("Token response carried no X-Subject-Token header")]
    MissingSubjectToken,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("No {interface} '{service_type}' endpoint in region '{region}' in the token catalog")]
    NoStorageEndpoint {
        service_type: String,
        region: String,
        interface: String,
    },
}

/// Convert infrastructure SwiftClientError to domain SwiftError
impl From<SwiftClientError> for SwiftError {
    fn from(err: SwiftClientError) -> Self {
        match err {
            SwiftClientError::Transport(e) => SwiftError::BackendUnavailable {
                message: e.to_string(),
            },
            SwiftClientError::Http { status: 401, message } => {
                SwiftError::Unauthorized { message }
            }
            SwiftClientError::Http { status, message } => {
                SwiftError::UnexpectedStatus { status, message }
            }
            SwiftClientError::MissingSubjectToken
            | SwiftClientError::Serialization(_)
            | SwiftClientError::NoStorageEndpoint { .. } => SwiftError::InvalidResponse {
                message: err.to_string(),
            },
        }
    }
}
