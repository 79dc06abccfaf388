use crate::error::ApiError;
use crate::models::{EchoRequest, EchoResponse, ECHO_SCHEMA};
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};
use serde_json::Value as JsonValue;

/// POST /echo handler - Echo back a validated payload
///
/// The raw body is checked against `ECHO_SCHEMA` first: undeclared fields are
/// stripped and declared fields coerced, so the handler only ever sees the
/// declared shape.
#[utoipa::path(
    post,
    path = "/echo",
    request_body = EchoRequest,
    responses(
        (status = 200, description = "Validated payload echoed back", body = EchoResponse),
        (status = 400, description = "Payload failed schema validation")
    ),
    tag = "echo"
)]
pub async fn echo_handler(
    State(_state): State<AppState>,
    Json(raw): Json<JsonValue>,
) -> Result<(StatusCode, Json<EchoResponse>), ApiError> {
    let validated = ECHO_SCHEMA.validate(raw)?;
    let payload: EchoRequest = serde_json::from_value(validated)?;

    tracing::debug!("Echoing payload: {}", payload.message);
    Ok((
        StatusCode::OK,
        Json(EchoResponse {
            message: payload.message,
            count: payload.count,
        }),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use axum::{body::Body, http::Request, routing::post, Router};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn test_app() -> Router {
        let config = Config {
            api_path: "api".to_string(),
            doc_path: "docs".to_string(),
            port: 3000,
        };
        let state = AppState {
            config: Arc::new(config),
        };

        Router::new()
            .route(crate::routes::ECHO, post(echo_handler))
            .with_state(state)
    }

    async fn post_json(app: Router, body: serde_json::Value) -> axum::response::Response {
        app.oneshot(
            Request::builder()
                .method("POST")
                .uri("/echo")
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_string(&body).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn test_echo_success() {
        let response = post_json(
            test_app(),
            serde_json::json!({ "message": "hello", "count": 3 }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let echoed: EchoResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(echoed.message, "hello");
        assert_eq!(echoed.count, Some(3));
    }

    #[tokio::test]
    async fn test_echo_strips_undeclared_fields_and_coerces() {
        let response = post_json(
            test_app(),
            serde_json::json!({ "message": "hi", "count": "42", "extra": true }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["count"], serde_json::json!(42));
        assert!(value.get("extra").is_none());
    }

    #[tokio::test]
    async fn test_echo_missing_required_field() {
        let response = post_json(test_app(), serde_json::json!({ "count": 1 })).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        let messages = value["message"].as_array().unwrap();
        assert!(messages
            .iter()
            .any(|m| m.as_str().unwrap().contains("message is required")));
    }
}
