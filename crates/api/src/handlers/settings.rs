//! Handlers for operator settings.
//!
//! Settings are held in state and written back to the settings file on
//! every change, so a restart picks up where the operator left off.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use sqlhub_core::settings::AppSettings;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/v1/settings
pub async fn get(State(state): State<AppState>) -> AppResult<Json<AppSettings>> {
    let settings = state.settings.read().await.clone();
    Ok(Json(settings))
}

/// PUT /api/v1/settings
///
/// Persists to disk before the in-memory copy is swapped; a failed write
/// leaves the previous settings in effect.
pub async fn put(
    State(state): State<AppState>,
    Json(input): Json<AppSettings>,
) -> AppResult<Json<AppSettings>> {
    // File I/O stays off the async workers.
    let store = Arc::clone(&state.settings_store);
    let to_save = input.clone();
    tokio::task::spawn_blocking(move || store.save(&to_save))
        .await
        .map_err(|e| AppError::InternalError(format!("settings write task failed: {e}")))??;
    let mut settings = state.settings.write().await;
    *settings = input;
    tracing::info!(safe_mode = settings.safe_mode, "Settings updated");
    Ok(Json(settings.clone()))
}
