use super::SwiftError;
use thiserror::Error;

/// Errors raised by a persistent state store
#[derive(Debug, Clone, Error)]
pub enum StateError {
    #[error("State backend error: {message}")]
    Backend { message: String },

    #[error("Corrupt state entry '{name}': {reason}")]
    Corrupt { name: String, reason: String },
}

/// Errors raised while reading or provisioning the account signing key
#[derive(Debug, Clone, Error)]
pub enum ProvisionError {
    #[error("Account metadata could not be read: {0}")]
    AccountUnreachable(SwiftError),

    #[error("Signing key write was rejected: {0}")]
    WriteRejected(SwiftError),
}

/// Errors raised by the signing key cache
#[derive(Debug, Clone, Error)]
pub enum KeyStoreError {
    #[error("Backend unavailable while fetching signing key: {0}")]
    BackendUnavailable(ProvisionError),

    #[error("Signing key provisioning failed: {0}")]
    ProvisioningFailed(ProvisionError),

    #[error("Signing key cache failure: {0}")]
    State(#[from] StateError),
}

impl From<ProvisionError> for KeyStoreError {
    fn from(err: ProvisionError) -> Self {
        match err {
            ProvisionError::AccountUnreachable(_) => KeyStoreError::BackendUnavailable(err),
            ProvisionError::WriteRejected(_) => KeyStoreError::ProvisioningFailed(err),
        }
    }
}
