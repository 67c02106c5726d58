use axum_test::TestServer;
use serde_json::Value;
use std::sync::Arc;
use swift_storage_adapter::{
    AppBuilder, AppServices, InMemorySwiftBackend, SwiftError,
    adapters::inbound::http::{
        dto::{EnsureResponseDto, TempUrlResponseDto},
        router::{AppState, create_router},
    },
    create_in_memory_app,
    domain::models::{AdapterSettings, UserCredentials},
};

fn server_for(services: AppServices) -> TestServer {
    let state = AppState {
        signed_url_service: services.signed_url_service,
        health_service: services.health_service,
    };

    TestServer::new(create_router(state)).unwrap()
}

async fn setup_test_server() -> TestServer {
    server_for(create_in_memory_app("uploads").await.unwrap())
}

async fn setup_with_backend(backend: Arc<InMemorySwiftBackend>) -> TestServer {
    let settings = AdapterSettings::new(
        "uploads",
        "RegionOne",
        UserCredentials::by_id("user", "password").unwrap(),
    )
    .unwrap();

    let services = AppBuilder::new(settings)
        .with_backend(backend)
        .build()
        .await
        .unwrap();
    server_for(services)
}

#[tokio::test]
async fn test_external_url_defaults() {
    let server = setup_test_server().await;

    let response = server
        .get("/external-url")
        .add_query_param("uri", "swift://reports/2024/q1.pdf")
        .await;

    response.assert_status_ok();
    let body: TempUrlResponseDto = response.json();
    assert_eq!(body.method, "GET");
    assert!(body
        .url
        .starts_with("http://127.0.0.1:8080/v1/AUTH_memory/uploads/reports/2024/q1.pdf?"));
    assert!(body.url.ends_with(&format!("&temp_url_expires={}", body.expires)));
}

#[tokio::test]
async fn test_external_url_uses_configured_default_ttl() {
    let settings = AdapterSettings::new(
        "uploads",
        "RegionOne",
        UserCredentials::by_id("user", "password").unwrap(),
    )
    .unwrap()
    .with_default_ttl(3600)
    .unwrap();
    let backend = Arc::new(InMemorySwiftBackend::new());
    backend.create_container("uploads");
    let services = AppBuilder::new(settings)
        .with_backend(backend)
        .build()
        .await
        .unwrap();
    let plugin_url = services.plugin.external_url("swift://a.txt").await.unwrap();
    let server = server_for(services);

    let before = chrono::Utc::now().timestamp();
    let response = server
        .get("/external-url")
        .add_query_param("uri", "swift://a.txt")
        .await;

    response.assert_status_ok();
    let body: TempUrlResponseDto = response.json();
    assert!((body.expires - (before + 3600)).abs() <= 1);

    let plugin_expires: i64 = plugin_url
        .rsplit("temp_url_expires=")
        .next()
        .unwrap()
        .parse()
        .unwrap();
    assert!((body.expires - plugin_expires).abs() <= 1);
}

#[tokio::test]
async fn test_external_url_with_method_and_ttl() {
    let server = setup_test_server().await;

    let response = server
        .get("/external-url")
        .add_query_param("uri", "upload.bin")
        .add_query_param("ttl", "60")
        .add_query_param("method", "put")
        .await;

    response.assert_status_ok();
    let body: TempUrlResponseDto = response.json();
    assert_eq!(body.method, "PUT");
    assert!(body.expires - chrono::Utc::now().timestamp() <= 61);
}

#[tokio::test]
async fn test_invalid_requests_are_bad_request() {
    let server = setup_test_server().await;

    let zero_ttl = server
        .get("/external-url")
        .add_query_param("uri", "file.txt")
        .add_query_param("ttl", "0")
        .await;
    zero_ttl.assert_status_bad_request();
    let body: Value = zero_ttl.json();
    assert_eq!(body["error"], "InvalidRequest");

    let bad_method = server
        .get("/external-url")
        .add_query_param("uri", "file.txt")
        .add_query_param("method", "PATCH")
        .await;
    bad_method.assert_status_bad_request();

    let empty_uri = server.get("/external-url").add_query_param("uri", "").await;
    empty_uri.assert_status_bad_request();

    let missing_uri = server.get("/external-url").await;
    missing_uri.assert_status_bad_request();
}

#[tokio::test]
async fn test_backend_failure_is_bad_gateway() {
    let backend = Arc::new(InMemorySwiftBackend::new());
    backend.fail_account_reads(SwiftError::AccountUnreachable {
        status: Some(503),
        message: "maintenance".to_string(),
    });
    let server = setup_with_backend(backend).await;

    let response = server
        .get("/external-url")
        .add_query_param("uri", "file.txt")
        .await;

    response.assert_status(http::StatusCode::BAD_GATEWAY);
    let body: Value = response.json();
    assert_eq!(body["error"], "KeyUnavailable");
}

#[tokio::test]
async fn test_missing_catalog_entry_is_server_error() {
    let backend = Arc::new(InMemorySwiftBackend::with_endpoint(
        "RegionTwo",
        "https://swift.example.com/v1/AUTH_x",
    ));
    let server = setup_with_backend(backend).await;

    let response = server
        .get("/external-url")
        .add_query_param("uri", "file.txt")
        .await;

    response.assert_status(http::StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body["details"]["region"], "RegionOne");
}

#[tokio::test]
async fn test_ensure_healthy_container() {
    let server = setup_test_server().await;

    let response = server.get("/ensure").add_query_param("force", "true").await;

    response.assert_status_ok();
    let body: EnsureResponseDto = response.json();
    assert!(body.healthy);
    assert!(body.errors.is_empty());
}

#[tokio::test]
async fn test_ensure_reports_failures_with_ok_status() {
    let backend = Arc::new(InMemorySwiftBackend::new());
    backend.create_container("uploads");
    backend.fail_containers(SwiftError::BackendUnavailable {
        message: "connection reset".to_string(),
    });
    let server = setup_with_backend(backend).await;

    let response = server.get("/ensure").await;

    response.assert_status_ok();
    let body: EnsureResponseDto = response.json();
    assert!(!body.healthy);
    assert_eq!(body.errors, vec!["0: Backend unavailable: connection reset"]);
}
