use std::env;
use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub api_path: String,
    pub doc_path: String,
    pub port: u16,
}

impl Config {
    /// Reads the three required startup values from the environment.
    ///
    /// All of them are mandatory: there is no defaulting, and a missing or
    /// unparsable value fails the whole bootstrap before any socket is opened.
    pub fn from_env() -> Result<Self> {
        let api_path = require("API_PATH")?;
        let doc_path = require("DOC_PATH")?;

        let port = require("PORT")?
            .parse::<u16>()
            .context("PORT must be a valid port number (0-65535)")?;

        Ok(Config {
            api_path,
            doc_path,
            port,
        })
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  API prefix: /{}", self.api_path);
        tracing::info!("  Docs mounted at: /{}", self.doc_path);
        tracing::info!("  Listening on: 0.0.0.0:{}", self.port);
    }
}

/// Empty values are treated as missing.
fn require(key: &str) -> Result<String> {
    let value =
        env::var(key).with_context(|| format!("{key} environment variable is required"))?;
    anyhow::ensure!(
        !value.trim().is_empty(),
        "{key} environment variable must not be empty"
    );
    Ok(value)
}
