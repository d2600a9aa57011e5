//! Ad-hoc query history model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use sqlhub_core::types::{DbId, Timestamp};

/// A row from the `query_runs` table: one tracked ad-hoc execution.
///
/// `row_count` is 0 and `error` is set when the statement failed.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct QueryRun {
    pub id: DbId,
    pub saved_query_id: Option<DbId>,
    pub target_id: Option<DbId>,
    pub executed_at: Timestamp,
    pub duration_ms: i32,
    pub row_count: i32,
    pub error: Option<String>,
}

/// DTO for logging a query execution.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateQueryRun {
    pub saved_query_id: Option<DbId>,
    pub target_id: Option<DbId>,
    pub duration_ms: i32,
    pub row_count: i32,
    pub error: Option<String>,
}
