use serde::{Deserialize, Serialize};

use crate::validate::{Field, FieldType, Schema};

/// Declared input shape for the echo endpoint.
///
/// Raw bodies are validated against this before deserialization: undeclared
/// keys are stripped and declared fields coerced to these types.
pub const ECHO_SCHEMA: Schema = Schema {
    name: "EchoRequest",
    fields: &[
        Field {
            name: "message",
            ty: FieldType::String,
            required: true,
        },
        Field {
            name: "count",
            ty: FieldType::Integer,
            required: false,
        },
    ],
};

/// Request body for the echo endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct EchoRequest {
    pub message: String,
    pub count: Option<i64>,
}

/// Response body for the echo endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct EchoResponse {
    pub message: String,
    pub count: Option<i64>,
}
