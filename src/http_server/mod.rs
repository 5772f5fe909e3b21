//! HTTP server module for livequery
//!
//! Serves the query engine over HTTP.
//!
//! # Endpoints
//!
//! - `POST /query` - Execute a query (query text in the body)
//! - `GET /tables` - Table and column listing
//! - `GET /health` - Health check

pub mod config;
pub mod query_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use query_routes::QueryState;
pub use server::HttpServer;
