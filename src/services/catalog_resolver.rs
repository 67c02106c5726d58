use std::sync::Arc;
use tracing::debug;
use url::Url;

use crate::{
    domain::{
        errors::CatalogError,
        models::{AdapterSettings, Interface, ServiceSelector, UserCredentials},
    },
    ports::backend::SwiftBackend,
};

/// Locates the object-store endpoint through a freshly issued token.
///
/// Tokens expire, so nothing is cached: every call issues a new one.
#[derive(Clone)]
pub struct CatalogResolver {
    backend: Arc<dyn SwiftBackend>,
    user: UserCredentials,
    region: String,
    service: ServiceSelector,
}

impl CatalogResolver {
    pub fn new(backend: Arc<dyn SwiftBackend>, settings: &AdapterSettings) -> Self {
        Self {
            backend,
            user: settings.user().clone(),
            region: settings.region().to_string(),
            service: settings.service().clone(),
        }
    }

    /// Resolve the configured object-store endpoint
    pub async fn resolve(&self) -> Result<Url, CatalogError> {
        self.resolve_base_path(
            &self.service.name,
            &self.service.service_type,
            &self.region,
            self.service.interface,
        )
        .await
    }

    /// Resolve the endpoint URL for a (service, region, interface) selector
    pub async fn resolve_base_path(
        &self,
        service_name: &str,
        service_type: &str,
        region: &str,
        interface: Interface,
    ) -> Result<Url, CatalogError> {
        let token = self
            .backend
            .issue_token(&self.user)
            .await
            .map_err(CatalogError::Token)?;

        let endpoint = token
            .catalog
            .service_url(service_name, service_type, region, interface)
            .ok_or_else(|| CatalogError::ServiceNotFound {
                service_name: service_name.to_string(),
                service_type: service_type.to_string(),
                region: region.to_string(),
                interface,
            })?;

        debug!(region, %interface, endpoint, "Resolved object-store endpoint");

        Url::parse(endpoint).map_err(|e| CatalogError::InvalidEndpoint {
            url: endpoint.to_string(),
            reason: e.to_string(),
        })
    }
}
