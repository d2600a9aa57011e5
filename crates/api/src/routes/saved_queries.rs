//! Route definitions for the saved-query library.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::saved_queries;
use crate::state::AppState;

/// Saved-query and folder routes.
///
/// ```text
/// GET    /saved-queries           -> list (?search=)
/// POST   /saved-queries           -> create
/// GET    /saved-queries/export    -> export bundle
/// POST   /saved-queries/import    -> import bundle
/// GET    /saved-queries/{id}      -> get_by_id
/// PUT    /saved-queries/{id}      -> update
/// DELETE /saved-queries/{id}      -> delete
/// GET    /query-folders           -> list_folders
/// POST   /query-folders           -> create_folder
/// PUT    /query-folders/{id}      -> rename_folder
/// DELETE /query-folders/{id}      -> delete_folder
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .nest(
            "/saved-queries",
            Router::new()
                .route(
                    "/",
                    get(saved_queries::list).post(saved_queries::create),
                )
                // Static segments must be registered before `{id}`.
                .route("/export", get(saved_queries::export))
                .route("/import", post(saved_queries::import))
                .route(
                    "/{id}",
                    get(saved_queries::get_by_id)
                        .put(saved_queries::update)
                        .delete(saved_queries::delete),
                ),
        )
        .nest(
            "/query-folders",
            Router::new()
                .route(
                    "/",
                    get(saved_queries::list_folders).post(saved_queries::create_folder),
                )
                .route(
                    "/{id}",
                    axum::routing::put(saved_queries::rename_folder)
                        .delete(saved_queries::delete_folder),
                ),
        )
}
