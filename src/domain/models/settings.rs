use crate::domain::{
    errors::ValidationError,
    models::{Interface, DEFAULT_TTL_SECONDS},
    value_objects::ContainerName,
};

/// How the backend user is identified to the identity service
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserIdentity {
    Id(String),
    Name { name: String, domain: String },
}

/// Credentials of the backend user tokens are issued for
#[derive(Clone, PartialEq, Eq)]
pub struct UserCredentials {
    identity: UserIdentity,
    password: String,
}

impl UserCredentials {
    pub fn by_id(id: impl Into<String>, password: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ValidationError::MissingCredential("user id".to_string()));
        }
        Self::with_identity(UserIdentity::Id(id), password.into())
    }

    pub fn by_name(
        name: impl Into<String>,
        domain: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        let domain = domain.into();
        if name.is_empty() {
            return Err(ValidationError::MissingCredential("user name".to_string()));
        }
        if domain.is_empty() {
            return Err(ValidationError::MissingCredential("user domain".to_string()));
        }
        Self::with_identity(UserIdentity::Name { name, domain }, password.into())
    }

    fn with_identity(identity: UserIdentity, password: String) -> Result<Self, ValidationError> {
        if password.is_empty() {
            return Err(ValidationError::MissingCredential("password".to_string()));
        }
        Ok(Self { identity, password })
    }

    pub fn identity(&self) -> &UserIdentity {
        &self.identity
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl std::fmt::Debug for UserCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserCredentials")
            .field("identity", &self.identity)
            .field("password", &"**redacted**")
            .finish()
    }
}

/// Which catalog entry is the object store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceSelector {
    pub name: String,
    pub service_type: String,
    pub interface: Interface,
}

impl Default for ServiceSelector {
    fn default() -> Self {
        Self {
            name: "swift".to_string(),
            service_type: "object-store".to_string(),
            interface: Interface::Public,
        }
    }
}

/// Validated adapter configuration
#[derive(Debug, Clone)]
pub struct AdapterSettings {
    container: ContainerName,
    region: String,
    user: UserCredentials,
    service: ServiceSelector,
    default_ttl: u64,
}

impl AdapterSettings {
    pub fn new(
        container: impl Into<String>,
        region: impl Into<String>,
        user: UserCredentials,
    ) -> Result<Self, ValidationError> {
        let container = ContainerName::new(container)?;
        let region = region.into();
        if region.trim().is_empty() {
            return Err(ValidationError::EmptyRegion);
        }

        Ok(Self {
            container,
            region,
            user,
            service: ServiceSelector::default(),
            default_ttl: DEFAULT_TTL_SECONDS,
        })
    }

    /// Override the catalog entry used to locate the object store
    pub fn with_service(mut self, service: ServiceSelector) -> Self {
        self.service = service;
        self
    }

    /// Override the lifetime used by `external_url`
    pub fn with_default_ttl(mut self, ttl_seconds: u64) -> Result<Self, ValidationError> {
        if ttl_seconds == 0 {
            return Err(ValidationError::ZeroTtl);
        }
        self.default_ttl = ttl_seconds;
        Ok(self)
    }

    pub fn container(&self) -> &ContainerName {
        &self.container
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn user(&self) -> &UserCredentials {
        &self.user
    }

    pub fn service(&self) -> &ServiceSelector {
        &self.service
    }

    pub fn default_ttl(&self) -> u64 {
        self.default_ttl
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> UserCredentials {
        UserCredentials::by_id("u-123", "secret").unwrap()
    }

    #[test]
    fn test_valid_settings() {
        let settings = AdapterSettings::new("mycontainer", "RegionOne", user()).unwrap();
        assert_eq!(settings.container().as_str(), "mycontainer");
        assert_eq!(settings.region(), "RegionOne");
        assert_eq!(settings.default_ttl(), 300);
        assert_eq!(settings.service(), &ServiceSelector::default());
    }

    #[test]
    fn test_invalid_settings() {
        assert_eq!(
            AdapterSettings::new("", "RegionOne", user()).unwrap_err(),
            ValidationError::EmptyContainerName
        );
        assert_eq!(
            AdapterSettings::new("c", " ", user()).unwrap_err(),
            ValidationError::EmptyRegion
        );
        assert!(AdapterSettings::new("c", "r", user())
            .unwrap()
            .with_default_ttl(0)
            .is_err());
    }

    #[test]
    fn test_credentials_validation() {
        assert!(UserCredentials::by_id("", "pw").is_err());
        assert!(UserCredentials::by_id("id", "").is_err());
        assert!(UserCredentials::by_name("alice", "", "pw").is_err());
        assert!(UserCredentials::by_name("alice", "Default", "pw").is_ok());
    }

    #[test]
    fn test_credentials_debug_is_redacted() {
        let debug = format!("{:?}", user());
        assert!(!debug.contains("secret"));
        assert!(debug.contains("u-123"));
    }
}
