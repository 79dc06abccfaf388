use axum::{
    body::Body,
    http::Request,
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::{DefaultOnResponse, TraceLayer};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::ApiDoc;
use crate::config::Config;
use crate::envelope;
use crate::handlers;
use crate::routes;
use crate::state::AppState;

/// Version 1 route table. New API versions get their own table and a new
/// entry in the version list handed to [`build_app`].
pub fn v1_routes() -> Router<AppState> {
    Router::new()
        .route(routes::HEALTH, get(handlers::health_handler))
        .route(routes::ECHO, post(handlers::echo_handler))
}

/// Assembles the complete application from explicitly supplied collaborators.
///
/// Each `(version, router)` pair is nested under `/v<version>`, and the whole
/// versioned tree under `/<API_PATH>`, so a route `R` of version `N` is
/// reachable at exactly `/<API_PATH>/v<N>/R`. The API subtree gets panic
/// containment and the uniform response envelope; Swagger UI is merged in at
/// `/<DOC_PATH>` outside the envelope; permissive CORS and request tracing
/// cover everything. The trace span takes the client address from
/// `X-Forwarded-For`, trusting a fronting reverse proxy.
pub fn build_app(
    config: &Config,
    versions: Vec<(u16, Router<AppState>)>,
    state: AppState,
) -> Router {
    let mut versioned = Router::new();
    for (version, router) in versions {
        versioned = versioned.nest(&format!("/v{version}"), router);
    }

    let api = Router::new()
        .nest(&format!("/{}", config.api_path.trim_matches('/')), versioned)
        .with_state(state)
        .layer(CatchPanicLayer::new())
        .layer(middleware::from_fn(envelope::wrap_response));

    let swagger = SwaggerUi::new(format!("/{}", config.doc_path.trim_matches('/')))
        .url("/api-docs/openapi.json", ApiDoc::openapi());

    Router::new()
        .merge(api)
        .merge(swagger)
        .layer(CorsLayer::permissive())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let client = request
                        .headers()
                        .get("x-forwarded-for")
                        .and_then(|value| value.to_str().ok())
                        .unwrap_or("-");
                    tracing::info_span!(
                        "http",
                        method = %request.method(),
                        uri = %request.uri(),
                        client = %client,
                    )
                })
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}
