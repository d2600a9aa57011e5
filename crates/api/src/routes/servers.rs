//! Route definitions for the server registry and per-server insights.

use axum::routing::get;
use axum::Router;

use crate::handlers::{insights, servers};
use crate::state::AppState;

/// Routes mounted at `/servers`.
///
/// ```text
/// GET    /                                   -> list
/// POST   /                                   -> create
/// GET    /{id}                               -> get_by_id
/// PUT    /{id}                               -> update
/// DELETE /{id}                               -> delete
/// GET    /{id}/targets                       -> list_targets
/// GET    /{id}/insights/blocking-sessions    -> blocking_sessions
/// GET    /{id}/insights/database-sizes       -> database_sizes
/// GET    /{id}/insights/top-queries          -> top_queries
/// ```
pub fn router() -> Router<AppState> {
    Router::new().nest(
        "/servers",
        Router::new()
            .route("/", get(servers::list).post(servers::create))
            .route(
                "/{id}",
                get(servers::get_by_id)
                    .put(servers::update)
                    .delete(servers::delete),
            )
            .route("/{id}/targets", get(servers::list_targets))
            .route(
                "/{id}/insights/blocking-sessions",
                get(insights::blocking_sessions),
            )
            .route(
                "/{id}/insights/database-sizes",
                get(insights::database_sizes),
            )
            .route("/{id}/insights/top-queries", get(insights::top_queries)),
    )
}
