use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use tracing::warn;

use crate::{
    adapters::inbound::http::{
        dto::{status_for, ErrorResponseDto, TempUrlQueryDto, TempUrlResponseDto},
        router::AppState,
    },
    domain::models::{TempUrlMethod, TemporaryUrlRequest},
};

/// Handle temporary URL generation
pub async fn generate_temp_url(
    State(app_state): State<AppState>,
    Query(query): Query<TempUrlQueryDto>,
) -> Result<Json<TempUrlResponseDto>, (StatusCode, Json<ErrorResponseDto>)> {
    let method = match query.method.as_deref() {
        Some(method) => method.parse::<TempUrlMethod>().map_err(|e| {
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponseDto::bad_request(&e.to_string())),
            )
        })?,
        None => TempUrlMethod::default(),
    };

    let request = TemporaryUrlRequest::builder()
        .uri(query.uri.clone())
        .method(method)
        .maybe_ttl_seconds(query.ttl)
        .build();

    let result = app_state
        .signed_url_service
        .generate(request)
        .await
        .map_err(|e| {
            let status_code = status_for(&e);
            if status_code.is_server_error() {
                warn!(uri = %query.uri, error = %e, "Temporary URL generation failed");
            }
            (status_code, Json(ErrorResponseDto::from_temp_url_error(&e)))
        })?;

    Ok(Json(TempUrlResponseDto::from(result)))
}
