use std::time::Duration;
use swift_storage_adapter::{
    AppConfig, AppError, StateBackend, SwiftBackendKind, create_app_from_env,
    domain::models::{Interface, UserIdentity},
};

const VARS: &[&str] = &[
    "SWIFT_CONTAINER",
    "SWIFT_REGION",
    "SWIFT_USER_ID",
    "SWIFT_USER_NAME",
    "SWIFT_USER_DOMAIN",
    "SWIFT_PASSWORD",
    "SWIFT_AUTH_URL",
    "SWIFT_PROJECT_ID",
    "SWIFT_BACKEND",
    "SWIFT_SERVICE_NAME",
    "SWIFT_SERVICE_TYPE",
    "SWIFT_INTERFACE",
    "SWIFT_TEMP_URL_TTL",
    "SWIFT_TIMEOUT_SECS",
    "STATE_BACKEND",
    "STATE_DATABASE_URL",
];

fn reset_env(vars: &[(&str, &str)]) {
    for name in VARS {
        std::env::remove_var(name);
    }
    for (name, value) in vars {
        std::env::set_var(name, value);
    }
}

// The process environment is shared, so every scenario runs in one test.
#[tokio::test]
async fn test_config_from_environment() {
    reset_env(&[]);
    assert!(matches!(
        AppConfig::from_env(),
        Err(AppError::Configuration { .. })
    ));

    reset_env(&[("SWIFT_CONTAINER", "uploads"), ("SWIFT_TEMP_URL_TTL", "3600")]);
    let config = AppConfig::from_env().unwrap();
    assert!(matches!(config.swift_backend, SwiftBackendKind::InMemory));
    assert!(matches!(config.state_backend, StateBackend::InMemory));
    assert_eq!(config.settings.container().as_str(), "uploads");
    assert_eq!(config.settings.region(), "RegionOne");
    assert_eq!(config.settings.default_ttl(), 3600);

    let app = create_app_from_env().await.unwrap();
    let url = app.plugin.external_url("swift://a.txt").await.unwrap();
    assert!(url.starts_with("http://127.0.0.1:8080/v1/AUTH_memory/uploads/a.txt?"));

    reset_env(&[
        ("SWIFT_CONTAINER", "uploads"),
        ("SWIFT_REGION", "RegionTwo"),
        ("SWIFT_BACKEND", "keystone"),
        ("SWIFT_AUTH_URL", "https://keystone.example.com/v3"),
        ("SWIFT_PROJECT_ID", "p-123"),
        ("SWIFT_USER_NAME", "alice"),
        ("SWIFT_USER_DOMAIN", "Default"),
        ("SWIFT_PASSWORD", "secret"),
        ("SWIFT_INTERFACE", "internal"),
        ("SWIFT_TIMEOUT_SECS", "5"),
        ("STATE_BACKEND", "sqlite"),
        ("STATE_DATABASE_URL", "sqlite::memory:"),
    ]);
    let config = AppConfig::from_env().unwrap();
    match &config.swift_backend {
        SwiftBackendKind::Keystone {
            auth_url,
            project_id,
            timeout,
        } => {
            assert_eq!(auth_url, "https://keystone.example.com/v3");
            assert_eq!(project_id.as_deref(), Some("p-123"));
            assert_eq!(*timeout, Duration::from_secs(5));
        }
        other => panic!("Expected Keystone backend, got {:?}", other),
    }
    assert!(matches!(
        &config.state_backend,
        StateBackend::Sqlite { url } if url == "sqlite::memory:"
    ));
    assert_eq!(config.settings.region(), "RegionTwo");
    assert_eq!(config.settings.service().interface, Interface::Internal);
    assert_eq!(
        config.settings.user().identity(),
        &UserIdentity::Name {
            name: "alice".to_string(),
            domain: "Default".to_string(),
        }
    );

    reset_env(&[("SWIFT_CONTAINER", "uploads"), ("SWIFT_BACKEND", "keystone")]);
    let err = AppConfig::from_env().unwrap_err();
    assert!(err.to_string().contains("SWIFT_AUTH_URL"));

    reset_env(&[("SWIFT_CONTAINER", "uploads"), ("STATE_BACKEND", "redis")]);
    let err = AppConfig::from_env().unwrap_err();
    assert!(err.to_string().contains("redis"));

    reset_env(&[]);
}
