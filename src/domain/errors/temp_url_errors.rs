use super::{KeyStoreError, SwiftError, ValidationError};
use crate::domain::models::Interface;
use thiserror::Error;

/// Errors raised while locating the object-store endpoint in a service catalog
#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    #[error("Token request failed: {0}")]
    Token(SwiftError),

    /// Configuration error: never retried
    #[error("No '{service_type}' service named '{service_name}' with a {interface} endpoint in region '{region}'")]
    ServiceNotFound {
        service_name: String,
        service_type: String,
        region: String,
        interface: Interface,
    },

    #[error("Catalog endpoint '{url}' is not a valid URL: {reason}")]
    InvalidEndpoint { url: String, reason: String },
}

impl CatalogError {
    /// Whether retrying the same request could succeed
    pub fn is_retryable(&self) -> bool {
        match self {
            CatalogError::Token(err) => err.is_transient(),
            CatalogError::ServiceNotFound { .. } | CatalogError::InvalidEndpoint { .. } => false,
        }
    }
}

/// Errors raised while generating a temporary URL
#[derive(Debug, Clone, Error)]
pub enum TempUrlError {
    #[error("Invalid temporary URL request: {0}")]
    InvalidRequest(#[from] ValidationError),

    #[error("Signing key unavailable: {0}")]
    KeyUnavailable(#[from] KeyStoreError),

    #[error("Catalog resolution failed: {0}")]
    CatalogResolutionFailed(#[from] CatalogError),
}

/// Result type for temporary URL operations
pub type SignedUrlResult<T> = Result<T, TempUrlError>;
