use chrono::{DateTime, Utc};
use std::str::FromStr;

use crate::domain::errors::ValidationError;

/// Endpoint visibility in an identity service catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Interface {
    #[default]
    Public,
    Internal,
    Admin,
}

impl Interface {
    pub fn as_str(&self) -> &'static str {
        match self {
            Interface::Public => "public",
            Interface::Internal => "internal",
            Interface::Admin => "admin",
        }
    }
}

impl std::fmt::Display for Interface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Interface {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "public" | "publicurl" => Ok(Interface::Public),
            "internal" | "internalurl" => Ok(Interface::Internal),
            "admin" | "adminurl" => Ok(Interface::Admin),
            _ => Err(ValidationError::InvalidField {
                field: "interface".to_string(),
                value: s.to_string(),
                expected: "public, internal or admin".to_string(),
            }),
        }
    }
}

/// A single endpoint of a catalog service
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEndpoint {
    pub region: String,
    pub interface: Interface,
    pub url: String,
}

/// A service entry of a catalog
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogService {
    pub name: String,
    pub service_type: String,
    pub endpoints: Vec<CatalogEndpoint>,
}

/// The service catalog carried by an authentication token
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ServiceCatalog {
    pub services: Vec<CatalogService>,
}

impl ServiceCatalog {
    pub fn new(services: Vec<CatalogService>) -> Self {
        Self { services }
    }

    /// Find the URL of the endpoint matching every selector.
    ///
    /// A service with an empty name matches on type alone.
    pub fn service_url(
        &self,
        service_name: &str,
        service_type: &str,
        region: &str,
        interface: Interface,
    ) -> Option<&str> {
        self.services
            .iter()
            .filter(|service| service.service_type == service_type)
            .filter(|service| service.name.is_empty() || service.name == service_name)
            .flat_map(|service| service.endpoints.iter())
            .find(|endpoint| endpoint.region == region && endpoint.interface == interface)
            .map(|endpoint| endpoint.url.as_str())
    }
}

/// A token issued by the identity service
#[derive(Clone)]
pub struct AuthToken {
    pub id: String,
    pub expires_at: Option<DateTime<Utc>>,
    pub catalog: ServiceCatalog,
}

impl std::fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthToken")
            .field("id", &"**redacted**")
            .field("expires_at", &self.expires_at)
            .field("catalog", &self.catalog)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> ServiceCatalog {
        ServiceCatalog::new(vec![
            CatalogService {
                name: "keystone".to_string(),
                service_type: "identity".to_string(),
                endpoints: vec![CatalogEndpoint {
                    region: "RegionOne".to_string(),
                    interface: Interface::Public,
                    url: "https://identity.example.com/v3".to_string(),
                }],
            },
            CatalogService {
                name: "swift".to_string(),
                service_type: "object-store".to_string(),
                endpoints: vec![
                    CatalogEndpoint {
                        region: "RegionOne".to_string(),
                        interface: Interface::Internal,
                        url: "http://10.0.0.5:8080/v1/AUTH_x".to_string(),
                    },
                    CatalogEndpoint {
                        region: "RegionOne".to_string(),
                        interface: Interface::Public,
                        url: "https://swift.example.com/v1/AUTH_x".to_string(),
                    },
                    CatalogEndpoint {
                        region: "RegionTwo".to_string(),
                        interface: Interface::Public,
                        url: "https://swift2.example.com/v1/AUTH_x".to_string(),
                    },
                ],
            },
        ])
    }

    #[test]
    fn test_service_url_matches_region_and_interface() {
        let catalog = catalog();
        assert_eq!(
            catalog.service_url("swift", "object-store", "RegionOne", Interface::Public),
            Some("https://swift.example.com/v1/AUTH_x")
        );
        assert_eq!(
            catalog.service_url("swift", "object-store", "RegionOne", Interface::Internal),
            Some("http://10.0.0.5:8080/v1/AUTH_x")
        );
        assert_eq!(
            catalog.service_url("swift", "object-store", "RegionTwo", Interface::Public),
            Some("https://swift2.example.com/v1/AUTH_x")
        );
    }

    #[test]
    fn test_service_url_missing() {
        let catalog = catalog();
        assert_eq!(
            catalog.service_url("swift", "object-store", "RegionThree", Interface::Public),
            None
        );
        assert_eq!(
            catalog.service_url("swift", "object-store", "RegionTwo", Interface::Admin),
            None
        );
        assert_eq!(
            catalog.service_url("other", "object-store", "RegionOne", Interface::Public),
            None
        );
    }

    #[test]
    fn test_unnamed_service_matches_on_type() {
        let mut catalog = catalog();
        catalog.services[1].name.clear();
        assert!(catalog
            .service_url("swift", "object-store", "RegionOne", Interface::Public)
            .is_some());
    }

    #[test]
    fn test_interface_parsing() {
        assert_eq!("public".parse::<Interface>().unwrap(), Interface::Public);
        assert_eq!("INTERNAL".parse::<Interface>().unwrap(), Interface::Internal);
        assert_eq!("adminURL".parse::<Interface>().unwrap(), Interface::Admin);
        assert!("private".parse::<Interface>().is_err());
    }
}
