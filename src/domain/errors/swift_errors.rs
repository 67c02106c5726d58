use crate::domain::value_objects::ContainerName;

/// Errors reported by the object-storage backend
#[derive(Debug, Clone)]
pub enum SwiftError {
    /// The account endpoint could not be read
    AccountUnreachable { status: Option<u16>, message: String },

    /// The backend refused an account metadata update
    WriteRejected { status: u16, message: String },

    /// Identity service refused to issue a token
    TokenRejected { status: u16, message: String },

    /// The request was not authorized
    Unauthorized { message: String },

    /// The container does not exist
    ContainerNotFound { container: ContainerName },

    /// Unexpected response from the backend
    UnexpectedStatus { status: u16, message: String },

    /// The backend returned a body or header that could not be understood
    InvalidResponse { message: String },

    /// Network failure or timeout while talking to the backend
    BackendUnavailable { message: String },
}

impl SwiftError {
    /// Status code reported for this failure, `0` when no HTTP status applies
    pub fn code(&self) -> u16 {
        match self {
            SwiftError::AccountUnreachable { status, .. } => status.unwrap_or(0),
            SwiftError::WriteRejected { status, .. }
            | SwiftError::TokenRejected { status, .. }
            | SwiftError::UnexpectedStatus { status, .. } => *status,
            SwiftError::Unauthorized { .. } => 401,
            SwiftError::ContainerNotFound { .. } => 404,
            SwiftError::InvalidResponse { .. } | SwiftError::BackendUnavailable { .. } => 0,
        }
    }

    /// Whether the failure is a transport problem rather than a backend answer
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            SwiftError::BackendUnavailable { .. } | SwiftError::AccountUnreachable { status: None, .. }
        )
    }
}

impl std::fmt::Display for SwiftError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SwiftError::AccountUnreachable { status, message } => match status {
                Some(status) => write!(f, "Account unreachable ({}): {}", status, message),
                None => write!(f, "Account unreachable: {}", message),
            },
            SwiftError::WriteRejected { status, message } => {
                write!(f, "Account update rejected ({}): {}", status, message)
            }
            SwiftError::TokenRejected { status, message } => {
                write!(f, "Token request rejected ({}): {}", status, message)
            }
            SwiftError::Unauthorized { message } => write!(f, "Unauthorized: {}", message),
            SwiftError::ContainerNotFound { container } => {
                write!(f, "Container not found: {}", container)
            }
            SwiftError::UnexpectedStatus { status, message } => {
                write!(f, "Unexpected backend status {}: {}", status, message)
            }
            SwiftError::InvalidResponse { message } => {
                write!(f, "Invalid backend response: {}", message)
            }
            SwiftError::BackendUnavailable { message } => {
                write!(f, "Backend unavailable: {}", message)
            }
        }
    }
}

impl std::error::Error for SwiftError {}

/// Result type for backend operations
pub type SwiftResult<T> = Result<T, SwiftError>;
