//! # HTTP Server
//!
//! Router assembly and serving: the JSON API under `/api`, the static
//! landing page at `/`, permissive CORS, and per-request tracing.

use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::store::DynStore;

use super::routes::{api_routes, AppState};

/// Directory holding the landing page and its static assets
const ASSETS_DIR: &str = "assets";

/// The exercise-tracker HTTP server.
pub struct ApiServer {
    config: AppConfig,
    router: Router,
}

impl ApiServer {
    /// Assembles the server around an already-opened store.
    pub fn new(config: AppConfig, store: DynStore) -> Self {
        let router = Self::build_router(store);
        Self { config, router }
    }

    /// Builds the full router.
    fn build_router(store: DynStore) -> Router {
        let state = AppState::new(store);

        // The API is fully open to cross-origin callers.
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        Router::new()
            .route_service(
                "/",
                ServeFile::new(format!("{ASSETS_DIR}/index.html")),
            )
            .nest_service("/assets", ServeDir::new(ASSETS_DIR))
            .nest("/api", api_routes(state))
            .layer(TraceLayer::new_for_http())
            .layer(cors)
    }

    /// The socket address the server will bind
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Consumes the server, returning its router (for in-process tests)
    pub fn router(self) -> Router {
        self.router
    }

    /// Binds and serves until the process exits.
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self
            .socket_addr()
            .parse()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

        let listener = TcpListener::bind(addr).await?;
        tracing::info!(%addr, "listening");

        axum::serve(listener, self.router).await
    }
}
