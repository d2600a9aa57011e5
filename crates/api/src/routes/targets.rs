//! Route definitions for registered targets.

use axum::routing::get;
use axum::Router;

use crate::handlers::targets;
use crate::state::AppState;

/// Routes mounted at `/targets`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new().nest(
        "/targets",
        Router::new()
            .route("/", get(targets::list).post(targets::create))
            .route(
                "/{id}",
                get(targets::get_by_id)
                    .put(targets::update)
                    .delete(targets::delete),
            ),
    )
}
