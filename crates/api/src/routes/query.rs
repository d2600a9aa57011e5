//! Route definitions for ad-hoc query execution.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::query;
use crate::state::AppState;

/// Query execution and history routes.
///
/// ```text
/// POST   /query         -> execute
/// GET    /query-runs    -> list_history
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/query", post(query::execute))
        .route("/query-runs", get(query::list_history))
}
