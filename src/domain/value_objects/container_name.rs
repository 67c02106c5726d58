use crate::domain::errors::ValidationError;

/// Maximum container name length accepted by Swift, in bytes
pub const MAX_CONTAINER_NAME_LEN: usize = 256;

/// A validated Swift container name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContainerName(String);

impl ContainerName {
    /// Create a new ContainerName with Swift validation rules
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();

        if value.is_empty() {
            return Err(ValidationError::EmptyContainerName);
        }

        if value.len() > MAX_CONTAINER_NAME_LEN {
            return Err(ValidationError::ContainerNameTooLong {
                actual: value.len(),
                max: MAX_CONTAINER_NAME_LEN,
            });
        }

        // Container names are a single path segment
        for c in ['/', '\\', '\0', '?', '#'] {
            if value.contains(c) {
                return Err(ValidationError::InvalidContainerNameCharacter(c));
            }
        }

        Ok(Self(value))
    }

    /// Get the container name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ContainerName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
