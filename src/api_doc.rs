use utoipa::OpenApi;

use crate::envelope::{ErrorEnvelope, SuccessEnvelope};
use crate::error::HealthResponse;
use crate::handlers;
use crate::models::{EchoRequest, EchoResponse};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "rust-api-starter API",
        version = "1.0.0",
        description = "Versioned HTTP API with uniform response envelopes and schema-validated input"
    ),
    paths(
        handlers::health::health_handler,
        handlers::echo::echo_handler
    ),
    components(
        schemas(
            HealthResponse,
            EchoRequest,
            EchoResponse,
            SuccessEnvelope,
            ErrorEnvelope
        )
    ),
    tags(
        (name = "health", description = "Liveness operations"),
        (name = "echo", description = "Validated echo operations")
    )
)]
pub struct ApiDoc;
