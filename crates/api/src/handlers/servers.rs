//! Handlers for the `/servers` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use validator::Validate;

use sqlhub_core::error::CoreError;
use sqlhub_core::types::DbId;
use sqlhub_db::models::server::{CreateServer, Server, UpdateServer};
use sqlhub_db::models::target::Target;
use sqlhub_db::repositories::{ServerRepo, TargetRepo};

use crate::error::AppResult;
use crate::state::AppState;

/// POST /api/v1/servers
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateServer>,
) -> AppResult<(StatusCode, Json<Server>)> {
    input.validate()?;
    let server = ServerRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(server)))
}

/// GET /api/v1/servers
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Server>>> {
    let servers = ServerRepo::list(&state.pool).await?;
    Ok(Json(servers))
}

/// GET /api/v1/servers/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Server>> {
    let server = ServerRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "server",
            id,
        })?;
    Ok(Json(server))
}

/// PUT /api/v1/servers/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateServer>,
) -> AppResult<Json<Server>> {
    input.validate()?;
    let server = ServerRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "server",
            id,
        })?;
    Ok(Json(server))
}

/// DELETE /api/v1/servers/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ServerRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(CoreError::NotFound {
            entity: "server",
            id,
        }
        .into());
    }
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/servers/{id}/targets
pub async fn list_targets(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<Target>>> {
    // 404 for unknown servers rather than an empty list.
    ServerRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "server",
            id,
        })?;
    let targets = TargetRepo::list_by_server(&state.pool, id).await?;
    Ok(Json(targets))
}
