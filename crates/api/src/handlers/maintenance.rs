//! Handlers for maintenance runs and run history.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

use sqlhub_core::error::CoreError;
use sqlhub_core::run_types::RunKind;
use sqlhub_core::types::DbId;
use sqlhub_db::models::run::Run;
use sqlhub_db::models::run_step::RunStep;
use sqlhub_db::models::server::Server;
use sqlhub_db::models::target::Target;
use sqlhub_db::repositories::{RunRepo, RunStepRepo, ServerRepo, TargetRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

const DEFAULT_HISTORY_LIMIT: i64 = 50;

#[derive(Debug, Deserialize)]
pub struct StartMaintenanceRequest {
    pub server_id: DbId,
    pub target_id: DbId,
}

#[derive(Debug, Deserialize)]
pub struct HistoryParams {
    pub limit: Option<i64>,
}

/// A run joined with its steps for the detail view.
#[derive(Debug, Serialize)]
pub struct RunDetail {
    #[serde(flatten)]
    pub run: Run,
    pub steps: Vec<RunStep>,
}

async fn resolve_pair(
    state: &AppState,
    server_id: DbId,
    target_id: DbId,
) -> AppResult<(Server, Target)> {
    let server = ServerRepo::find_by_id(&state.pool, server_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "server",
            id: server_id,
        })?;
    let target = TargetRepo::find_by_id(&state.pool, target_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "target",
            id: target_id,
        })?;
    if target.server_id != server.id {
        return Err(AppError::BadRequest(format!(
            "target {target_id} does not belong to server {server_id}"
        )));
    }
    Ok((server, target))
}

/// POST /api/v1/maintenance/{kind}
///
/// Dispatches on the run kind from the path; the run completes (or fails)
/// before the response is returned, and the response body is the finished
/// run row either way. If the request is abandoned first (client timeout
/// or disconnect), the run still finishes and shows up in run history.
pub async fn start(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    Json(input): Json<StartMaintenanceRequest>,
) -> AppResult<(StatusCode, Json<Run>)> {
    let kind = RunKind::from_str(&kind)?;
    let (server, target) = resolve_pair(&state, input.server_id, input.target_id).await?;
    let cancel = CancellationToken::new();

    let run = match kind {
        RunKind::IndexRebuild => {
            state
                .maintenance
                .rebuild_indexes(&server, &target, &cancel)
                .await?
        }
        RunKind::UpdateStatistics => {
            state
                .maintenance
                .update_statistics(&server, &target, &cancel)
                .await?
        }
        RunKind::CheckDb => {
            state
                .maintenance
                .run_check_db(&server, &target, &cancel)
                .await?
        }
        RunKind::AdHocQuery => {
            return Err(AppError::BadRequest(
                "ad-hoc queries are executed via POST /query".into(),
            ))
        }
    };

    Ok((StatusCode::CREATED, Json(run)))
}

/// GET /api/v1/runs
pub async fn list_runs(
    State(state): State<AppState>,
    Query(params): Query<HistoryParams>,
) -> AppResult<Json<Vec<Run>>> {
    let limit = params.limit.unwrap_or(DEFAULT_HISTORY_LIMIT);
    let runs = RunRepo::list_recent(&state.pool, limit).await?;
    Ok(Json(runs))
}

/// GET /api/v1/runs/{id}
pub async fn get_run(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<RunDetail>> {
    let run = RunRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound { entity: "run", id })?;
    let steps = RunStepRepo::list_by_run(&state.pool, id).await?;
    Ok(Json(RunDetail { run, steps }))
}
