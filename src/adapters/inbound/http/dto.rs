use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::{
    errors::{CatalogError, TempUrlError},
    models::TemporaryUrlResult,
};

/// Query for `GET /external-url`; a missing `ttl` uses the configured default
#[derive(Debug, Clone, Deserialize)]
pub struct TempUrlQueryDto {
    pub uri: String,
    pub ttl: Option<u64>,
    pub method: Option<String>,
}

/// DTO for a generated temporary URL
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TempUrlResponseDto {
    pub url: String,
    pub signature: String,
    pub expires: i64,
    pub method: String,
}

impl From<TemporaryUrlResult> for TempUrlResponseDto {
    fn from(result: TemporaryUrlResult) -> Self {
        Self {
            url: result.url,
            signature: result.signature,
            expires: result.expires,
            method: result.method.to_string(),
        }
    }
}

/// Query for `GET /ensure`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EnsureQueryDto {
    #[serde(default)]
    pub force: bool,
}

/// DTO for the container health report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnsureResponseDto {
    pub healthy: bool,
    pub errors: Vec<String>,
}

impl From<Vec<String>> for EnsureResponseDto {
    fn from(errors: Vec<String>) -> Self {
        Self {
            healthy: errors.is_empty(),
            errors,
        }
    }
}

/// DTO for error responses
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponseDto {
    pub error: String,
    pub message: String,
    pub details: Option<HashMap<String, serde_json::Value>>,
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponseDto {
    pub fn from_temp_url_error(error: &TempUrlError) -> Self {
        let mut details = HashMap::new();

        let kind = match error {
            TempUrlError::InvalidRequest(_) => "InvalidRequest",
            TempUrlError::KeyUnavailable(_) => "KeyUnavailable",
            TempUrlError::CatalogResolutionFailed(err) => {
                if let CatalogError::ServiceNotFound {
                    service_type,
                    region,
                    interface,
                    ..
                } = err
                {
                    details.insert(
                        "service_type".to_string(),
                        serde_json::Value::String(service_type.clone()),
                    );
                    details.insert(
                        "region".to_string(),
                        serde_json::Value::String(region.clone()),
                    );
                    details.insert(
                        "interface".to_string(),
                        serde_json::Value::String(interface.to_string()),
                    );
                }
                "CatalogResolutionFailed"
            }
        };

        ErrorResponseDto {
            error: kind.to_string(),
            message: error.to_string(),
            details: if details.is_empty() {
                None
            } else {
                Some(details)
            },
            timestamp: Utc::now(),
        }
    }

    pub fn bad_request(message: &str) -> Self {
        ErrorResponseDto {
            error: "BadRequest".to_string(),
            message: message.to_string(),
            details: None,
            timestamp: Utc::now(),
        }
    }
}

/// Map temporary URL failures to HTTP status codes
pub fn status_for(err: &TempUrlError) -> http::StatusCode {
    match err {
        TempUrlError::InvalidRequest(_) => http::StatusCode::BAD_REQUEST,
        TempUrlError::KeyUnavailable(_) => http::StatusCode::BAD_GATEWAY,
        TempUrlError::CatalogResolutionFailed(CatalogError::Token(_)) => {
            http::StatusCode::BAD_GATEWAY
        }
        TempUrlError::CatalogResolutionFailed(
            CatalogError::ServiceNotFound { .. } | CatalogError::InvalidEndpoint { .. },
        ) => http::StatusCode::INTERNAL_SERVER_ERROR,
    }
}
