//! Query HTTP routes
//!
//! The query endpoint accepts raw query text and answers with the
//! rendered execution result. Parse and plan failures are client errors.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

use crate::executor::QueryExecutor;
use crate::monitor::Snapshot;
use crate::query::{PlannerError, QueryError, QueryParser, QueryPlanner};
use crate::table::TableRegistry;

/// Shared state of the query endpoint
pub struct QueryState {
    /// Table registry queries are planned against
    pub registry: TableRegistry,
    /// The snapshot all queries of this server run against
    pub snapshot: Snapshot,
}

impl QueryState {
    /// Creates the state from a registry and a snapshot
    pub fn new(registry: TableRegistry, snapshot: Snapshot) -> Self {
        Self { registry, snapshot }
    }
}

/// Errors answered to HTTP clients
#[derive(Debug, Error)]
pub enum ApiError {
    /// Query text did not parse
    #[error("{0}")]
    Parse(#[from] QueryError),

    /// Query did not plan against the registry
    #[error("{0}")]
    Plan(#[from] PlannerError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = json!({
            "error": match self {
                ApiError::Parse(_) => "parse_error",
                ApiError::Plan(_) => "plan_error",
            },
            "message": self.to_string(),
        });
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Creates the query routes
pub fn query_routes(state: Arc<QueryState>) -> Router {
    Router::new()
        .route("/query", post(query_handler))
        .route("/tables", get(tables_handler))
        .with_state(state)
}

/// Creates the health route
pub fn health_routes() -> Router {
    Router::new().route("/health", get(health_handler))
}

/// Health check handler
async fn health_handler() -> impl IntoResponse {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };
    (StatusCode::OK, Json(response))
}

/// Query handler: body is the raw query text
async fn query_handler(
    State(state): State<Arc<QueryState>>,
    body: String,
) -> Result<impl IntoResponse, ApiError> {
    let query = QueryParser::parse(&body)?;
    let plan = QueryPlanner::new(&state.registry).plan(&query)?;
    let result = QueryExecutor::execute(&plan, &state.snapshot);
    Ok((StatusCode::OK, Json(result.to_json())))
}

/// Table listing handler
async fn tables_handler(State(state): State<Arc<QueryState>>) -> impl IntoResponse {
    let tables: Vec<_> = state
        .registry
        .tables()
        .iter()
        .map(|table| {
            json!({
                "name": table.name(),
                "description": table.description(),
                "columns": table
                    .columns()
                    .iter()
                    .map(|c| json!({
                        "name": c.name(),
                        "type": c.column_type().type_name(),
                        "description": c.description(),
                    }))
                    .collect::<Vec<_>>(),
            })
        })
        .collect();

    (StatusCode::OK, Json(json!({ "tables": tables })))
}
