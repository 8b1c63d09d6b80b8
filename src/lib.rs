//! fitlog - a minimal exercise-tracking HTTP API
//!
//! Users and exercises live in a pluggable document store; the HTTP
//! surface is a thin translation layer between requests and store
//! queries.

pub mod api;
pub mod config;
pub mod model;
pub mod store;

use config::AppConfig;

/// Runs the service: read configuration, open the store, serve.
///
/// Errors are rendered as strings so the entry point can print them and
/// exit; each subsystem keeps its own typed error internally.
pub async fn run() -> Result<(), String> {
    let config = AppConfig::from_env().map_err(|e| e.to_string())?;

    let store = store::open(&config.store_uri).map_err(|e| e.to_string())?;
    tracing::info!(store = ?config.store_uri, "store opened");

    let server = api::ApiServer::new(config, store);
    server.start().await.map_err(|e| e.to_string())
}
