use axum::{
    Json,
    extract::{Query, State},
};

use crate::adapters::inbound::http::{
    dto::{EnsureQueryDto, EnsureResponseDto},
    router::AppState,
};

/// Report container health; failures are part of the body, never an error status
pub async fn ensure_container(
    State(app_state): State<AppState>,
    Query(query): Query<EnsureQueryDto>,
) -> Json<EnsureResponseDto> {
    let errors = app_state.health_service.ensure(query.force).await;
    Json(EnsureResponseDto::from(errors))
}
