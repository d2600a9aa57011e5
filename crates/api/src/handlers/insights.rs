//! Handlers for server health insights.
//!
//! These are read-only inspections against a server's admin database; they
//! do not create run-ledger rows.

use axum::extract::{Path, State};
use axum::Json;
use tokio_util::sync::CancellationToken;

use sqlhub_core::error::CoreError;
use sqlhub_core::results::QueryResults;
use sqlhub_core::types::DbId;
use sqlhub_db::models::server::Server;
use sqlhub_db::repositories::ServerRepo;

use crate::error::AppResult;
use crate::state::AppState;

async fn load_server(state: &AppState, id: DbId) -> AppResult<Server> {
    Ok(ServerRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "server",
            id,
        })?)
}

/// GET /api/v1/servers/{id}/insights/blocking-sessions
pub async fn blocking_sessions(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<QueryResults>> {
    let server = load_server(&state, id).await?;
    let cancel = CancellationToken::new();
    let results = state.insights.blocking_sessions(&server, &cancel).await?;
    Ok(Json(results))
}

/// GET /api/v1/servers/{id}/insights/database-sizes
pub async fn database_sizes(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<QueryResults>> {
    let server = load_server(&state, id).await?;
    let cancel = CancellationToken::new();
    let results = state.insights.database_sizes(&server, &cancel).await?;
    Ok(Json(results))
}

/// GET /api/v1/servers/{id}/insights/top-queries
pub async fn top_queries(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<QueryResults>> {
    let server = load_server(&state, id).await?;
    let cancel = CancellationToken::new();
    let results = state.insights.top_queries(&server, &cancel).await?;
    Ok(Json(results))
}
