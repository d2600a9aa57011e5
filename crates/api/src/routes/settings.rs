//! Route definitions for operator settings.

use axum::routing::get;
use axum::Router;

use crate::handlers::settings;
use crate::state::AppState;

/// Routes mounted at `/settings`.
///
/// ```text
/// GET    /    -> get
/// PUT    /    -> put
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/settings", get(settings::get).put(settings::put))
}
