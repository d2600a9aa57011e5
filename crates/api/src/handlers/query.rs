//! Handlers for ad-hoc query execution and history.

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

use sqlhub_core::error::CoreError;
use sqlhub_core::results::QueryResults;
use sqlhub_core::types::DbId;
use sqlhub_db::models::query_run::QueryRun;
use sqlhub_db::repositories::{QueryRunRepo, ServerRepo, TargetRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

const DEFAULT_HISTORY_LIMIT: i64 = 50;

#[derive(Debug, Deserialize)]
pub struct ExecuteQueryRequest {
    pub server_id: DbId,
    pub target_id: DbId,
    pub sql: String,
    pub saved_query_id: Option<DbId>,
}

#[derive(Debug, Serialize)]
pub struct ExecuteQueryResponse {
    pub results: QueryResults,
    pub entry: QueryRun,
}

#[derive(Debug, Deserialize)]
pub struct HistoryParams {
    pub limit: Option<i64>,
}

/// POST /api/v1/query
///
/// Statements rejected by safe mode come back as 409 without touching the
/// target or the history log.
pub async fn execute(
    State(state): State<AppState>,
    Json(input): Json<ExecuteQueryRequest>,
) -> AppResult<Json<ExecuteQueryResponse>> {
    let server = ServerRepo::find_by_id(&state.pool, input.server_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "server",
            id: input.server_id,
        })?;
    let target = TargetRepo::find_by_id(&state.pool, input.target_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "target",
            id: input.target_id,
        })?;
    if target.server_id != server.id {
        return Err(AppError::BadRequest(format!(
            "target {} does not belong to server {}",
            input.target_id, input.server_id
        )));
    }

    let safe_mode = state.settings.read().await.safe_mode;
    let cancel = CancellationToken::new();

    let (results, entry) = state
        .query
        .execute_query(
            &server,
            &target,
            &input.sql,
            input.saved_query_id,
            safe_mode,
            &cancel,
        )
        .await?;

    Ok(Json(ExecuteQueryResponse { results, entry }))
}

/// GET /api/v1/query-runs
pub async fn list_history(
    State(state): State<AppState>,
    Query(params): Query<HistoryParams>,
) -> AppResult<Json<Vec<QueryRun>>> {
    let limit = params.limit.unwrap_or(DEFAULT_HISTORY_LIMIT);
    let entries = QueryRunRepo::list_recent(&state.pool, limit).await?;
    Ok(Json(entries))
}
