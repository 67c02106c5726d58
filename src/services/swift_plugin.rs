use std::sync::Arc;

use crate::{
    domain::{
        errors::{SignedUrlResult, SwiftResult},
        models::ContainerMetadata,
        value_objects::ContainerName,
    },
    ports::{
        backend::SwiftBackend,
        services::{ContainerHealthService, SignedUrlService},
    },
};

/// Handle bound to the configured container. Object I/O is not handled here.
#[derive(Clone)]
pub struct ContainerAdapter {
    backend: Arc<dyn SwiftBackend>,
    container: ContainerName,
}

impl ContainerAdapter {
    pub fn new(backend: Arc<dyn SwiftBackend>, container: ContainerName) -> Self {
        Self { backend, container }
    }

    pub fn container(&self) -> &ContainerName {
        &self.container
    }

    pub async fn metadata(&self) -> SwiftResult<ContainerMetadata> {
        self.backend.head_container(&self.container).await
    }
}

/// What the host file-abstraction layer talks to
#[derive(Clone)]
pub struct SwiftStoragePlugin {
    adapter: ContainerAdapter,
    signed_urls: Arc<dyn SignedUrlService>,
    health: Arc<dyn ContainerHealthService>,
}

impl SwiftStoragePlugin {
    pub fn new(
        adapter: ContainerAdapter,
        signed_urls: Arc<dyn SignedUrlService>,
        health: Arc<dyn ContainerHealthService>,
    ) -> Self {
        Self {
            adapter,
            signed_urls,
            health,
        }
    }

    pub fn adapter(&self) -> ContainerAdapter {
        self.adapter.clone()
    }

    pub async fn external_url(&self, uri: &str) -> SignedUrlResult<String> {
        self.signed_urls.external_url(uri).await
    }

    pub async fn ensure(&self, force: bool) -> Vec<String> {
        self.health.ensure(force).await
    }
}
