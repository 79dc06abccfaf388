use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value as JsonValue};

/// Response type for health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Custom error type for API endpoints
///
/// Every request-time failure funnels through this type. It maps each failure
/// to an HTTP status and a JSON body with a `message` field; the envelope
/// middleware then reshapes that body into the uniform error envelope. Errors
/// never escape to the transport layer and never terminate the process.
#[derive(Debug)]
pub enum ApiError {
    /// Inbound payload failed schema validation; one message per field
    Validation(Vec<String>),
    /// Requested resource does not exist
    NotFound(String),
    /// JSON parsing error
    JsonError(serde_json::Error),
    /// Unexpected internal failure
    Internal(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message): (StatusCode, JsonValue) = match self {
            ApiError::Validation(errors) => (StatusCode::BAD_REQUEST, json!(errors)),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, json!(msg)),
            ApiError::JsonError(err) => (
                StatusCode::BAD_REQUEST,
                json!(format!("JSON parse error: {}", err)),
            ),
            ApiError::Internal(err) => {
                tracing::error!("internal error: {:#}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!("Internal Server Error"),
                )
            }
        };

        (status, Json(json!({ "message": message }))).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Internal(err)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::JsonError(err)
    }
}
