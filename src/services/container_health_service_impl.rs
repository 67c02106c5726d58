use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::{
    domain::value_objects::ContainerName,
    ports::{backend::SwiftBackend, services::ContainerHealthService},
};

/// Verifies the configured container exists. Never creates it.
#[derive(Clone)]
pub struct ContainerHealthServiceImpl {
    backend: Arc<dyn SwiftBackend>,
    container: ContainerName,
}

impl ContainerHealthServiceImpl {
    pub fn new(backend: Arc<dyn SwiftBackend>, container: ContainerName) -> Self {
        Self { backend, container }
    }
}

#[async_trait]
impl ContainerHealthService for ContainerHealthServiceImpl {
    async fn ensure(&self, _force: bool) -> Vec<String> {
        match self.backend.head_container(&self.container).await {
            Ok(_) => {
                debug!(container = %self.container, "Container is reachable");
                Vec::new()
            }
            Err(e) => {
                warn!(container = %self.container, error = %e, "Container check failed");
                vec![format!("{}: {}", e.code(), e)]
            }
        }
    }
}
