//! Handlers for the `/targets` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use validator::Validate;

use sqlhub_core::error::CoreError;
use sqlhub_core::types::DbId;
use sqlhub_db::models::target::{CreateTarget, Target, UpdateTarget};
use sqlhub_db::repositories::{ServerRepo, TargetRepo};

use crate::error::AppResult;
use crate::state::AppState;

/// POST /api/v1/targets
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateTarget>,
) -> AppResult<(StatusCode, Json<Target>)> {
    input.validate()?;
    ServerRepo::find_by_id(&state.pool, input.server_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "server",
            id: input.server_id,
        })?;
    let target = TargetRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(target)))
}

/// GET /api/v1/targets
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Target>>> {
    let targets = TargetRepo::list(&state.pool).await?;
    Ok(Json(targets))
}

/// GET /api/v1/targets/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Target>> {
    let target = TargetRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "target",
            id,
        })?;
    Ok(Json(target))
}

/// PUT /api/v1/targets/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTarget>,
) -> AppResult<Json<Target>> {
    input.validate()?;
    let target = TargetRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "target",
            id,
        })?;
    Ok(Json(target))
}

/// DELETE /api/v1/targets/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = TargetRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(CoreError::NotFound {
            entity: "target",
            id,
        }
        .into());
    }
    Ok(StatusCode::NO_CONTENT)
}
