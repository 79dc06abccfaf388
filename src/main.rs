mod api_doc;
mod app;
mod config;
mod envelope;
mod error;
mod handlers;
mod models;
mod routes;
mod state;
mod validate;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use config::Config;
use state::AppState;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("rust-api-starter starting");

    let config = Config::from_env()?;
    config.log_startup();

    let state = AppState {
        config: Arc::new(config.clone()),
    };
    let app = app::build_app(&config, vec![(1, app::v1_routes())], state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!("Docs: http://0.0.0.0:{}/{}", config.port, config.doc_path);
    tracing::info!("API:  http://0.0.0.0:{}/{}", config.port, config.api_path);
    tracing::debug!("Running ...");

    axum::serve(listener, app)
        .await
        .context("server terminated unexpectedly")?;

    Ok(())
}
