use async_trait::async_trait;
use chrono::{Duration, Utc};
use parking_lot::Mutex;
use std::collections::HashSet;
use std::sync::Arc;

use crate::{
    domain::{
        errors::{SwiftError, SwiftResult},
        models::{
            AccountMetadata, AuthToken, CatalogEndpoint, CatalogService, ContainerMetadata,
            Interface, ServiceCatalog, UserCredentials,
        },
        value_objects::{ContainerName, SigningKey},
    },
    ports::backend::SwiftBackend,
};

/// Region the default in-memory catalog advertises
pub const MEMORY_REGION: &str = "RegionOne";

/// Public endpoint the default in-memory catalog advertises
pub const MEMORY_ENDPOINT: &str = "http://127.0.0.1:8080/v1/AUTH_memory";

/// Number of calls made to each backend operation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BackendCalls {
    pub fetch_account: usize,
    pub write_temp_url_key: usize,
    pub issue_token: usize,
    pub head_container: usize,
}

#[derive(Default)]
struct BackendState {
    account_key: Option<SigningKey>,
    containers: HashSet<String>,
    catalog: ServiceCatalog,
    calls: BackendCalls,
    account_read_failure: Option<SwiftError>,
    account_write_failure: Option<SwiftError>,
    token_failure: Option<SwiftError>,
    container_failure: Option<SwiftError>,
}

/// In-memory SwiftBackend for tests and local development.
/// Records calls and can be told to fail individual operations.
#[derive(Clone)]
pub struct InMemorySwiftBackend {
    state: Arc<Mutex<BackendState>>,
}

impl InMemorySwiftBackend {
    /// A backend whose catalog has one public object-store endpoint
    pub fn new() -> Self {
        Self::with_endpoint(MEMORY_REGION, MEMORY_ENDPOINT)
    }

    pub fn with_endpoint(region: &str, url: &str) -> Self {
        Self::with_catalog(ServiceCatalog::new(vec![CatalogService {
            name: "swift".to_string(),
            service_type: "object-store".to_string(),
            endpoints: vec![CatalogEndpoint {
                region: region.to_string(),
                interface: Interface::Public,
                url: url.to_string(),
            }],
        }]))
    }

    pub fn with_catalog(catalog: ServiceCatalog) -> Self {
        Self {
            state: Arc::new(Mutex::new(BackendState {
                catalog,
                ..BackendState::default()
            })),
        }
    }

    pub fn create_container(&self, name: &str) {
        self.state.lock().containers.insert(name.to_string());
    }

    pub fn set_account_key(&self, key: Option<SigningKey>) {
        self.state.lock().account_key = key;
    }

    pub fn account_key(&self) -> Option<SigningKey> {
        self.state.lock().account_key.clone()
    }

    pub fn calls(&self) -> BackendCalls {
        self.state.lock().calls
    }

    pub fn fail_account_reads(&self, err: SwiftError) {
        self.state.lock().account_read_failure = Some(err);
    }

    pub fn fail_account_writes(&self, err: SwiftError) {
        self.state.lock().account_write_failure = Some(err);
    }

    pub fn fail_tokens(&self, err: SwiftError) {
        self.state.lock().token_failure = Some(err);
    }

    pub fn fail_containers(&self, err: SwiftError) {
        self.state.lock().container_failure = Some(err);
    }

    pub fn clear_failures(&self) {
        let mut state = self.state.lock();
        state.account_read_failure = None;
        state.account_write_failure = None;
        state.token_failure = None;
        state.container_failure = None;
    }
}

impl Default for InMemorySwiftBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SwiftBackend for InMemorySwiftBackend {
    async fn fetch_account(&self) -> SwiftResult<AccountMetadata> {
        let mut state = self.state.lock();
        state.calls.fetch_account += 1;
        if let Some(err) = &state.account_read_failure {
            return Err(err.clone());
        }

        Ok(AccountMetadata {
            temp_url_key: state.account_key.clone(),
            temp_url_key_2: None,
            container_count: Some(state.containers.len() as u64),
            object_count: Some(0),
            bytes_used: Some(0),
        })
    }

    async fn write_temp_url_key(&self, key: &SigningKey) -> SwiftResult<()> {
        let mut state = self.state.lock();
        state.calls.write_temp_url_key += 1;
        if let Some(err) = &state.account_write_failure {
            return Err(err.clone());
        }

        state.account_key = Some(key.clone());
        Ok(())
    }

    async fn issue_token(&self, _user: &UserCredentials) -> SwiftResult<AuthToken> {
        let mut state = self.state.lock();
        state.calls.issue_token += 1;
        if let Some(err) = &state.token_failure {
            return Err(err.clone());
        }

        Ok(AuthToken {
            id: format!("memory-token-{}", state.calls.issue_token),
            expires_at: Some(Utc::now() + Duration::hours(1)),
            catalog: state.catalog.clone(),
        })
    }

    async fn head_container(&self, container: &ContainerName) -> SwiftResult<ContainerMetadata> {
        let mut state = self.state.lock();
        state.calls.head_container += 1;
        if let Some(err) = &state.container_failure {
            return Err(err.clone());
        }

        if !state.containers.contains(container.as_str()) {
            return Err(SwiftError::ContainerNotFound {
                container: container.clone(),
            });
        }

        Ok(ContainerMetadata {
            name: container.clone(),
            object_count: Some(0),
            bytes_used: Some(0),
        })
    }
}
