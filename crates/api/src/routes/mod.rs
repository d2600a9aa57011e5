pub mod health;
pub mod maintenance;
pub mod notes;
pub mod query;
pub mod saved_queries;
pub mod servers;
pub mod settings;
pub mod targets;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /servers                                   registry CRUD
/// /servers/{id}/targets                      targets of one server
/// /servers/{id}/insights/...                 health inspections
/// /targets                                   target CRUD
/// /maintenance/{kind}                        start a maintenance run
/// /runs, /runs/{id}                          run history
/// /query, /query-runs                        ad-hoc execution + history
/// /saved-queries, /query-folders             query library
/// /notes                                     operator notes
/// /settings                                  operator settings
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(servers::router())
        .merge(targets::router())
        .merge(maintenance::router())
        .merge(query::router())
        .merge(saved_queries::router())
        .merge(notes::router())
        .merge(settings::router())
}
