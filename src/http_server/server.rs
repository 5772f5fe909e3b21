//! HTTP server
//!
//! Combines the query, table-listing and health routes into one axum
//! server over a shared registry and snapshot.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::observability::Logger;

use super::config::HttpServerConfig;
use super::query_routes::{health_routes, query_routes, QueryState};

/// HTTP server for the query engine
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Creates a server over the given state with custom configuration
    pub fn with_config(config: HttpServerConfig, state: Arc<QueryState>) -> Self {
        let router = Self::build_router(&config, state);
        Self { config, router }
    }

    /// Creates a server over the given state with default configuration
    pub fn new(state: Arc<QueryState>) -> Self {
        Self::with_config(HttpServerConfig::default(), state)
    }

    /// Builds the combined router
    fn build_router(config: &HttpServerConfig, state: Arc<QueryState>) -> Router {
        let cors = if config.cors_origins.is_empty() {
            // No origins configured: permissive, for development setups
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .merge(health_routes())
            .merge(query_routes(state))
            .layer(cors)
    }

    /// Returns the configured socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Returns the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Starts the server and blocks until it exits
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("invalid socket address '{}': {e}", self.config.socket_addr()),
            )
        })?;

        Logger::info("SERVER_LISTENING", &[("addr", &addr.to_string())]);

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitor::{standard_registry, Snapshot};

    fn state() -> Arc<QueryState> {
        Arc::new(QueryState::new(standard_registry(), Snapshot::default()))
    }

    #[test]
    fn test_server_creation() {
        let server = HttpServer::new(state());
        assert_eq!(server.socket_addr(), "127.0.0.1:6557");
    }

    #[test]
    fn test_server_with_custom_port() {
        let config = HttpServerConfig::with_port(8080);
        let server = HttpServer::with_config(config, state());
        assert_eq!(server.socket_addr(), "127.0.0.1:8080");
    }

    #[test]
    fn test_router_builds() {
        let server = HttpServer::new(state());
        let _router = server.router();
    }
}
