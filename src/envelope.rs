use axum::{
    body::Body,
    extract::Request,
    http::{header, HeaderValue, StatusCode},
    middleware::Next,
    response::Response,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value as JsonValue};

/// Uniform shape of every successful API response.
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessEnvelope {
    pub success: bool,
    pub status_code: u16,
    #[schema(value_type = Object)]
    pub data: JsonValue,
}

/// Uniform shape of every API error response.
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorEnvelope {
    pub success: bool,
    pub status_code: u16,
    /// A string, or an array of strings for validation failures
    #[schema(value_type = String)]
    pub message: JsonValue,
    pub path: String,
    pub timestamp: String,
}

/// Middleware that rewrites every API response into the uniform envelope.
///
/// Successful bodies are wrapped as-is under `data`. Error bodies are reduced
/// to their `message` (falling back to the raw body text, or the status
/// reason for empty bodies, which covers panics and framework-generated
/// rejections). Informational and redirect responses pass through untouched.
pub async fn wrap_response(request: Request, next: Next) -> Response {
    let path = request.uri().path().to_owned();

    let response = next.run(request).await;
    let status = response.status();

    if !status.is_success() && !status.is_client_error() && !status.is_server_error() {
        return response;
    }

    let (mut parts, body) = response.into_parts();
    let bytes = match axum::body::to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(err) => {
            tracing::error!("failed to buffer response body for {}: {}", path, err);
            parts.status = StatusCode::INTERNAL_SERVER_ERROR;
            return rebuild(
                parts,
                error_envelope(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!("Internal Server Error"),
                    &path,
                ),
            );
        }
    };

    let envelope = if status.is_success() {
        json!({
            "success": true,
            "statusCode": status.as_u16(),
            "data": body_as_value(&bytes),
        })
    } else {
        error_envelope(status, extract_message(&bytes, status), &path)
    };

    rebuild(parts, envelope)
}

fn error_envelope(status: StatusCode, message: JsonValue, path: &str) -> JsonValue {
    json!({
        "success": false,
        "statusCode": status.as_u16(),
        "message": message,
        "path": path,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    })
}

/// Empty bodies become `null`; non-JSON bodies are carried as strings.
fn body_as_value(bytes: &[u8]) -> JsonValue {
    if bytes.is_empty() {
        return JsonValue::Null;
    }
    serde_json::from_slice(bytes)
        .unwrap_or_else(|_| JsonValue::String(String::from_utf8_lossy(bytes).into_owned()))
}

/// Pulls a human-readable message out of whatever body the error carried.
fn extract_message(bytes: &[u8], status: StatusCode) -> JsonValue {
    if bytes.is_empty() {
        return JsonValue::String(status.canonical_reason().unwrap_or("Error").to_string());
    }

    match serde_json::from_slice::<JsonValue>(bytes) {
        Ok(JsonValue::Object(map)) => map
            .get("message")
            .or_else(|| map.get("error"))
            .cloned()
            .unwrap_or(JsonValue::Object(map)),
        Ok(other) => other,
        Err(_) => JsonValue::String(String::from_utf8_lossy(bytes).into_owned()),
    }
}

fn rebuild(mut parts: axum::http::response::Parts, envelope: JsonValue) -> Response {
    let body = serde_json::to_vec(&envelope).unwrap_or_else(|_| b"{}".to_vec());
    parts.headers.remove(header::CONTENT_LENGTH);
    parts.headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    Response::from_parts(parts, Body::from(body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_message_from_json_body() {
        let body = br#"{"message": "boom"}"#;
        assert_eq!(
            extract_message(body, StatusCode::BAD_REQUEST),
            json!("boom")
        );
    }

    #[test]
    fn test_extract_message_array_preserved() {
        let body = br#"{"message": ["a is required", "b: expected an integer"]}"#;
        let message = extract_message(body, StatusCode::BAD_REQUEST);
        assert_eq!(message.as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_extract_message_falls_back_to_reason() {
        assert_eq!(
            extract_message(b"", StatusCode::NOT_FOUND),
            json!("Not Found")
        );
    }

    #[test]
    fn test_extract_message_plain_text_body() {
        assert_eq!(
            extract_message(b"something went wrong", StatusCode::INTERNAL_SERVER_ERROR),
            json!("something went wrong")
        );
    }

    #[test]
    fn test_empty_success_body_is_null_data() {
        assert_eq!(body_as_value(b""), JsonValue::Null);
    }

    #[test]
    fn test_non_json_success_body_kept_as_string() {
        assert_eq!(body_as_value(b"pong"), json!("pong"));
    }
}
