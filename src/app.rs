use std::{sync::Arc, time::Duration};
use tracing::info;

use crate::{
    adapters::outbound::{
        persistence::{InMemoryStateStore, SqlStateStore},
        storage::swift::{
            InMemorySwiftBackend, SwiftClientConfig, SwiftHttpClient, MEMORY_ENDPOINT,
            MEMORY_REGION,
        },
    },
    config::SwiftArgs,
    domain::{
        errors::ValidationError,
        models::{AdapterSettings, UserCredentials},
    },
    ports::{
        backend::SwiftBackend,
        services::{ContainerHealthService, SignedUrlService},
        state::StateStore,
    },
    services::{
        AccountKeyProvisioner, CatalogResolver, ContainerAdapter, ContainerHealthServiceImpl,
        KeyStore, SignedUrlServiceImpl, SwiftStoragePlugin,
    },
};

/// Default request timeout for the Swift HTTP client
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the application
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub settings: AdapterSettings,
    pub swift_backend: SwiftBackendKind,
    pub state_backend: StateBackend,
}

impl AppConfig {
    pub fn new(settings: AdapterSettings) -> Self {
        Self {
            settings,
            swift_backend: SwiftBackendKind::InMemory,
            state_backend: StateBackend::InMemory,
        }
    }

    /// Read the configuration from environment variables
    pub fn from_env() -> Result<Self, AppError> {
        SwiftArgs::from_env()
            .and_then(|args| args.to_app_config())
            .map_err(|e| AppError::Configuration {
                message: format!("{:#}", e),
            })
    }
}

/// Object-store backend configuration
#[derive(Debug, Clone)]
pub enum SwiftBackendKind {
    /// In-process fake; the configured container is created up front
    InMemory,
    Keystone {
        auth_url: String,
        project_id: Option<String>,
        timeout: Duration,
    },
}

/// State store configuration
#[derive(Debug, Clone)]
pub enum StateBackend {
    InMemory,
    Sqlite { url: String },
}

/// Application dependencies container
pub struct AppDependencies {
    pub backend: Arc<dyn SwiftBackend>,
    pub state_store: Arc<dyn StateStore>,
}

/// Application services container
pub struct AppServices {
    pub plugin: SwiftStoragePlugin,
    pub key_store: Arc<KeyStore>,
    pub signed_url_service: Arc<dyn SignedUrlService>,
    pub health_service: Arc<dyn ContainerHealthService>,
}

/// Application builder for dependency injection
pub struct AppBuilder {
    config: AppConfig,
    backend: Option<Arc<dyn SwiftBackend>>,
    state_store: Option<Arc<dyn StateStore>>,
}

impl AppBuilder {
    pub fn new(settings: AdapterSettings) -> Self {
        Self::from_config(AppConfig::new(settings))
    }

    pub fn from_config(config: AppConfig) -> Self {
        Self {
            config,
            backend: None,
            state_store: None,
        }
    }

    pub fn with_swift_backend(mut self, backend: SwiftBackendKind) -> Self {
        self.config.swift_backend = backend;
        self
    }

    pub fn with_state_backend(mut self, backend: StateBackend) -> Self {
        self.config.state_backend = backend;
        self
    }

    /// Use an already constructed backend instead of the configured one
    pub fn with_backend(mut self, backend: Arc<dyn SwiftBackend>) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Use an already constructed state store instead of the configured one
    pub fn with_state_store(mut self, state_store: Arc<dyn StateStore>) -> Self {
        self.state_store = Some(state_store);
        self
    }

    /// Build the application dependencies
    pub async fn build_dependencies(&self) -> Result<AppDependencies, AppError> {
        let backend = match &self.backend {
            Some(backend) => backend.clone(),
            None => self.create_backend()?,
        };

        let state_store = match &self.state_store {
            Some(state_store) => state_store.clone(),
            None => self.create_state_store().await?,
        };

        Ok(AppDependencies {
            backend,
            state_store,
        })
    }

    /// Build the complete application with services
    pub async fn build(self) -> Result<AppServices, AppError> {
        let deps = self.build_dependencies().await?;
        let settings = &self.config.settings;

        let key_store = Arc::new(KeyStore::new(
            deps.state_store.clone(),
            AccountKeyProvisioner::new(deps.backend.clone()),
        ));
        let catalog = CatalogResolver::new(deps.backend.clone(), settings);

        let signed_url_service: Arc<dyn SignedUrlService> = Arc::new(SignedUrlServiceImpl::new(
            key_store.clone(),
            catalog,
            settings,
        ));
        let health_service: Arc<dyn ContainerHealthService> = Arc::new(
            ContainerHealthServiceImpl::new(deps.backend.clone(), settings.container().clone()),
        );

        let plugin = SwiftStoragePlugin::new(
            ContainerAdapter::new(deps.backend, settings.container().clone()),
            signed_url_service.clone(),
            health_service.clone(),
        );

        info!(
            container = %settings.container(),
            region = settings.region(),
            "Swift storage adapter ready"
        );

        Ok(AppServices {
            plugin,
            key_store,
            signed_url_service,
            health_service,
        })
    }

    fn create_backend(&self) -> Result<Arc<dyn SwiftBackend>, AppError> {
        match &self.config.swift_backend {
            SwiftBackendKind::InMemory => {
                let backend =
                    InMemorySwiftBackend::with_endpoint(self.config.settings.region(), MEMORY_ENDPOINT);
                backend.create_container(self.config.settings.container().as_str());
                Ok(Arc::new(backend))
            }
            SwiftBackendKind::Keystone {
                auth_url,
                project_id,
                timeout,
            } => {
                let client = SwiftHttpClient::new(
                    SwiftClientConfig {
                        auth_url: auth_url.clone(),
                        project_id: project_id.clone(),
                        timeout: *timeout,
                    },
                    self.config.settings.clone(),
                )
                .map_err(|e| AppError::BackendInit {
                    message: e.to_string(),
                })?;
                Ok(Arc::new(client))
            }
        }
    }

    async fn create_state_store(&self) -> Result<Arc<dyn StateStore>, AppError> {
        match &self.config.state_backend {
            StateBackend::InMemory => Ok(Arc::new(InMemoryStateStore::new())),
            StateBackend::Sqlite { url } => {
                let store = SqlStateStore::connect(url)
                    .await
                    .map_err(|e| AppError::StateInit {
                        message: e.to_string(),
                    })?;
                Ok(Arc::new(store))
            }
        }
    }
}

/// Application-level errors
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Invalid setting: {0}")]
    InvalidSetting(#[from] ValidationError),

    #[error("Backend initialization error: {message}")]
    BackendInit { message: String },

    #[error("State store initialization error: {message}")]
    StateInit { message: String },
}

/// Create an in-memory application for testing and development
pub async fn create_in_memory_app(container: &str) -> Result<AppServices, AppError> {
    let settings = AdapterSettings::new(container, MEMORY_REGION, memory_credentials()?)?;
    AppBuilder::new(settings).build().await
}

/// Create application from environment variables
pub async fn create_app_from_env() -> Result<AppServices, AppError> {
    AppBuilder::from_config(AppConfig::from_env()?).build().await
}

fn memory_credentials() -> Result<UserCredentials, AppError> {
    Ok(UserCredentials::by_id("memory", "memory")?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::TemporaryUrlRequest;

    #[tokio::test]
    async fn test_create_in_memory_app() {
        let app = create_in_memory_app("uploads").await.unwrap();

        assert!(app.plugin.ensure(false).await.is_empty());
        assert_eq!(app.plugin.adapter().container().as_str(), "uploads");

        let url = app.plugin.external_url("swift://a/b.txt").await.unwrap();
        assert!(url.starts_with("http://127.0.0.1:8080/v1/AUTH_memory/uploads/a/b.txt?"));
    }

    #[tokio::test]
    async fn test_injected_backend_is_used() {
        let backend = Arc::new(InMemorySwiftBackend::new());
        let settings = AdapterSettings::new(
            "missing",
            MEMORY_REGION,
            UserCredentials::by_id("u", "p").unwrap(),
        )
        .unwrap();

        let app = AppBuilder::new(settings)
            .with_backend(backend.clone())
            .build()
            .await
            .unwrap();

        assert_eq!(
            app.plugin.ensure(true).await,
            vec!["404: Container not found: missing".to_string()]
        );
        assert_eq!(backend.calls().head_container, 1);
    }

    #[tokio::test]
    async fn test_key_is_shared_between_services() {
        let app = create_in_memory_app("uploads").await.unwrap();

        let first = app
            .signed_url_service
            .generate(TemporaryUrlRequest::get("x.txt"))
            .await
            .unwrap();
        let key = app.key_store.get_or_create_key().await.unwrap();

        assert_eq!(
            first.signature,
            crate::domain::models::compute_signature(
                &key,
                first.method,
                first.expires,
                &first.resource_path
            )
        );
    }

    #[tokio::test]
    async fn test_sqlite_state_backend() {
        let settings = AdapterSettings::new(
            "uploads",
            MEMORY_REGION,
            UserCredentials::by_id("u", "p").unwrap(),
        )
        .unwrap();

        let deps = AppBuilder::new(settings)
            .with_state_backend(StateBackend::Sqlite {
                url: "sqlite::memory:".to_string(),
            })
            .build_dependencies()
            .await
            .unwrap();

        assert!(deps.state_store.get("anything").await.unwrap().is_none());
    }
}
