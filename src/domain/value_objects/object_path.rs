use crate::domain::errors::ValidationError;

/// Maximum object name length accepted by Swift, in bytes
pub const MAX_OBJECT_PATH_LEN: usize = 1024;

/// A validated object path inside a container, always in forward-slash form
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectPath(String);

impl ObjectPath {
    /// Create a new ObjectPath with validation
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();

        if value.is_empty() {
            return Err(ValidationError::EmptyObjectPath);
        }

        if value.len() > MAX_OBJECT_PATH_LEN {
            return Err(ValidationError::ObjectPathTooLong {
                actual: value.len(),
                max: MAX_OBJECT_PATH_LEN,
            });
        }

        if value.contains('\0') {
            return Err(ValidationError::InvalidObjectPathCharacter('\0'));
        }

        if value.contains('\\') {
            return Err(ValidationError::InvalidObjectPathCharacter('\\'));
        }

        if value.split('/').any(|segment| segment == "." || segment == "..") {
            return Err(ValidationError::ObjectPathTraversal);
        }

        Ok(Self(value))
    }

    /// Build an ObjectPath from a host URI such as `swift://dir\file.txt`.
    ///
    /// The scheme is dropped and platform separators become `/`. Slashes are
    /// trimmed from both ends so the result is relative to the container.
    pub fn from_uri(uri: &str) -> Result<Self, ValidationError> {
        let target = match uri.find("://") {
            Some(idx) => &uri[idx + 3..],
            None => uri,
        };

        let normalized = target.replace('\\', "/");
        Self::new(normalized.trim_matches('/'))
    }

    /// Get the path as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Iterate over the `/`-separated segments
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/')
    }

    /// The path with every segment percent-encoded, for use in a URL
    pub fn to_url_path(&self) -> String {
        self.segments()
            .map(|segment| urlencoding::encode(segment).into_owned())
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl std::fmt::Display for ObjectPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
