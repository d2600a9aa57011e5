//! Handlers for saved queries, folders, and the JSON export/import surface.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use validator::Validate;

use sqlhub_core::error::CoreError;
use sqlhub_core::types::DbId;
use sqlhub_db::models::query_folder::{CreateQueryFolder, QueryFolder};
use sqlhub_db::models::saved_query::{CreateSavedQuery, SavedQuery, UpdateSavedQuery};
use sqlhub_db::repositories::{QueryFolderRepo, SavedQueryRepo};

use crate::error::AppResult;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub search: Option<String>,
}

/// Export/import interchange payload.
#[derive(Debug, Serialize, Deserialize)]
pub struct QueryBundle {
    pub queries: Vec<CreateSavedQuery>,
}

#[derive(Debug, Deserialize)]
pub struct ImportRequest {
    pub queries: Vec<CreateSavedQuery>,
    /// When true, existing saved queries are removed first.
    #[serde(default)]
    pub replace: bool,
}

#[derive(Debug, Serialize)]
pub struct ImportResponse {
    pub imported: usize,
    pub removed: u64,
}

/// POST /api/v1/saved-queries
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateSavedQuery>,
) -> AppResult<(StatusCode, Json<SavedQuery>)> {
    input.validate()?;
    let query = SavedQueryRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(query)))
}

/// GET /api/v1/saved-queries?search=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Vec<SavedQuery>>> {
    let queries = SavedQueryRepo::list(&state.pool, params.search.as_deref()).await?;
    Ok(Json(queries))
}

/// GET /api/v1/saved-queries/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<SavedQuery>> {
    let query = SavedQueryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "saved query",
            id,
        })?;
    Ok(Json(query))
}

/// PUT /api/v1/saved-queries/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateSavedQuery>,
) -> AppResult<Json<SavedQuery>> {
    input.validate()?;
    let query = SavedQueryRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "saved query",
            id,
        })?;
    Ok(Json(query))
}

/// DELETE /api/v1/saved-queries/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = SavedQueryRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(CoreError::NotFound {
            entity: "saved query",
            id,
        }
        .into());
    }
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/saved-queries/export
///
/// Folder membership is intentionally dropped: bundles are portable across
/// hubs whose folder ids differ.
pub async fn export(State(state): State<AppState>) -> AppResult<Json<QueryBundle>> {
    let queries = SavedQueryRepo::list(&state.pool, None)
        .await?
        .into_iter()
        .map(|q| CreateSavedQuery {
            folder_id: None,
            name: q.name,
            sql_text: q.sql_text,
            description: q.description,
            is_favorite: Some(q.is_favorite),
        })
        .collect();
    Ok(Json(QueryBundle { queries }))
}

/// POST /api/v1/saved-queries/import
pub async fn import(
    State(state): State<AppState>,
    Json(input): Json<ImportRequest>,
) -> AppResult<Json<ImportResponse>> {
    for query in &input.queries {
        query.validate()?;
    }

    let removed = if input.replace {
        SavedQueryRepo::delete_all(&state.pool).await?
    } else {
        0
    };

    for query in &input.queries {
        SavedQueryRepo::create(&state.pool, query).await?;
    }

    tracing::info!(
        imported = input.queries.len(),
        removed,
        "Saved query bundle imported"
    );
    Ok(Json(ImportResponse {
        imported: input.queries.len(),
        removed,
    }))
}

// ---------------------------------------------------------------------------
// Folders
// ---------------------------------------------------------------------------

/// POST /api/v1/query-folders
pub async fn create_folder(
    State(state): State<AppState>,
    Json(input): Json<CreateQueryFolder>,
) -> AppResult<(StatusCode, Json<QueryFolder>)> {
    input.validate()?;
    let folder = QueryFolderRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(folder)))
}

/// GET /api/v1/query-folders
pub async fn list_folders(State(state): State<AppState>) -> AppResult<Json<Vec<QueryFolder>>> {
    let folders = QueryFolderRepo::list(&state.pool).await?;
    Ok(Json(folders))
}

/// PUT /api/v1/query-folders/{id}
pub async fn rename_folder(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<CreateQueryFolder>,
) -> AppResult<Json<QueryFolder>> {
    input.validate()?;
    let folder = QueryFolderRepo::rename(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "query folder",
            id,
        })?;
    Ok(Json(folder))
}

/// DELETE /api/v1/query-folders/{id}
pub async fn delete_folder(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = QueryFolderRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(CoreError::NotFound {
            entity: "query folder",
            id,
        }
        .into());
    }
    Ok(StatusCode::NO_CONTENT)
}
