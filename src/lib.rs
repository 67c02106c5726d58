pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

// Re-export key types for convenience

// Domain types - value objects, models and errors
pub use domain::{
    // Models
    AccountMetadata,
    AdapterSettings,
    AuthToken,
    // Errors
    CatalogError,
    // Value objects
    ContainerName,
    KeyStoreError,
    ObjectPath,
    SigningKey,
    StateError,
    SwiftError,
    TempUrlError,
    TempUrlMethod,
    TemporaryUrlRequest,
    TemporaryUrlResult,
    UserCredentials,
    ValidationError,
};

// Port types - interfaces for external systems
pub use ports::{ContainerHealthService, SignedUrlService, StateStore, SwiftBackend};

// Service implementations - business logic
pub use services::{
    AccountKeyProvisioner, CatalogResolver, ContainerAdapter, ContainerHealthServiceImpl,
    KeyStore, SignedUrlServiceImpl, SwiftStoragePlugin,
};

// Application factory and configuration
pub use app::{
    AppBuilder, AppConfig, AppDependencies, AppError, AppServices, StateBackend,
    SwiftBackendKind, create_app_from_env, create_in_memory_app,
};

// Adapter types - infrastructure implementations
pub use adapters::outbound::{
    persistence::{InMemoryStateStore, SqlStateStore},
    storage::{InMemorySwiftBackend, SwiftHttpClient},
};

// Public facade for easy construction
pub mod prelude {
    pub use crate::{
        AppBuilder, AppServices, ContainerName, ObjectPath, SignedUrlService, SigningKey,
        SwiftStoragePlugin, TempUrlMethod, TemporaryUrlRequest, create_in_memory_app,
    };
}
