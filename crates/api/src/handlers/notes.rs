//! Handlers for operator notes.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use validator::Validate;

use sqlhub_core::error::CoreError;
use sqlhub_core::types::DbId;
use sqlhub_db::models::note::{CreateNote, Note, UpdateNote};
use sqlhub_db::repositories::NoteRepo;

use crate::error::AppResult;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub server_id: Option<DbId>,
}

/// POST /api/v1/notes
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateNote>,
) -> AppResult<(StatusCode, Json<Note>)> {
    input.validate()?;
    let note = NoteRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(note)))
}

/// GET /api/v1/notes?server_id=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Vec<Note>>> {
    let notes = match params.server_id {
        Some(server_id) => NoteRepo::list_for_server(&state.pool, server_id).await?,
        None => NoteRepo::list(&state.pool).await?,
    };
    Ok(Json(notes))
}

/// GET /api/v1/notes/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Note>> {
    let note = NoteRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound { entity: "note", id })?;
    Ok(Json(note))
}

/// PUT /api/v1/notes/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateNote>,
) -> AppResult<Json<Note>> {
    input.validate()?;
    let note = NoteRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound { entity: "note", id })?;
    Ok(Json(note))
}

/// DELETE /api/v1/notes/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = NoteRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(CoreError::NotFound { entity: "note", id }.into());
    }
    Ok(StatusCode::NO_CONTENT)
}
