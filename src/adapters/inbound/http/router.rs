use axum::{Router, routing::get};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use super::handlers::{ensure_container, generate_temp_url};
use crate::ports::services::{ContainerHealthService, SignedUrlService};

/// Application state containing all services
#[derive(Clone)]
pub struct AppState {
    pub signed_url_service: Arc<dyn SignedUrlService>,
    pub health_service: Arc<dyn ContainerHealthService>,
}

/// Create the main application router with all endpoints
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/external-url", get(generate_temp_url))
        .route("/ensure", get(ensure_container))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}
