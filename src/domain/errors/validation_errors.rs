/// Validation errors for domain value objects and settings
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    // ObjectPath validation errors
    EmptyObjectPath,
    ObjectPathTooLong {
        actual: usize,
        max: usize,
    },
    InvalidObjectPathCharacter(char),
    ObjectPathTraversal,

    // ContainerName validation errors
    EmptyContainerName,
    ContainerNameTooLong {
        actual: usize,
        max: usize,
    },
    InvalidContainerNameCharacter(char),

    // SigningKey validation errors
    EmptySigningKey,

    // Settings validation errors
    EmptyRegion,
    MissingCredential(String),

    // Temporary URL request errors
    ZeroTtl,
    UnsupportedMethod(String),
    InvalidField {
        field: String,
        value: String,
        expected: String,
    },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ObjectPath errors
            ValidationError::EmptyObjectPath => write!(f, "Object path cannot be empty"),
            ValidationError::ObjectPathTooLong { actual, max } => {
                write!(f, "Object path too long: {} bytes (max: {})", actual, max)
            }
            ValidationError::InvalidObjectPathCharacter(c) => {
                write!(f, "Invalid character in object path: {:?}", c)
            }
            ValidationError::ObjectPathTraversal => {
                write!(f, "Object path cannot contain '.' or '..' segments")
            }

            // ContainerName errors
            ValidationError::EmptyContainerName => write!(f, "Container name cannot be empty"),
            ValidationError::ContainerNameTooLong { actual, max } => {
                write!(
                    f,
                    "Container name too long: {} bytes (max: {})",
                    actual, max
                )
            }
            ValidationError::InvalidContainerNameCharacter(c) => {
                write!(f, "Invalid character in container name: {:?}", c)
            }

            ValidationError::EmptySigningKey => write!(f, "Signing key cannot be empty"),

            // Settings errors
            ValidationError::EmptyRegion => write!(f, "Region cannot be empty"),
            ValidationError::MissingCredential(field) => {
                write!(f, "Missing credential field: {}", field)
            }

            // Request errors
            ValidationError::ZeroTtl => {
                write!(f, "Temporary URL lifetime must be at least one second")
            }
            ValidationError::UnsupportedMethod(method) => {
                write!(
                    f,
                    "Unsupported temporary URL method '{}' (expected GET, HEAD, PUT, POST or DELETE)",
                    method
                )
            }
            ValidationError::InvalidField {
                field,
                value,
                expected,
            } => {
                write!(
                    f,
                    "Invalid value for field '{}': '{}' (expected: {})",
                    field, value, expected
                )
            }
        }
    }
}

impl std::error::Error for ValidationError {}
