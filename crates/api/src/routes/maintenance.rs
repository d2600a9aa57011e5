//! Route definitions for maintenance runs and run history.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::maintenance;
use crate::state::AppState;

/// Maintenance and run-history routes.
///
/// ```text
/// POST   /maintenance/{kind}    -> start (index_rebuild | update_statistics | check_db)
/// GET    /runs                  -> list_runs
/// GET    /runs/{id}             -> get_run (run + steps)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/maintenance/{kind}", post(maintenance::start))
        .route("/runs", get(maintenance::list_runs))
        .route("/runs/{id}", get(maintenance::get_run))
}
