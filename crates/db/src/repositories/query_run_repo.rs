//! Repository for the `query_runs` table.

use sqlx::PgPool;

use crate::models::query_run::{CreateQueryRun, QueryRun};

/// Column list for `query_runs` queries.
const COLUMNS: &str =
    "id, saved_query_id, target_id, executed_at, duration_ms, row_count, error";

/// Provides append/list operations for the ad-hoc query history.
pub struct QueryRunRepo;

impl QueryRunRepo {
    /// Log one query execution, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateQueryRun) -> Result<QueryRun, sqlx::Error> {
        let query = format!(
            "INSERT INTO query_runs (saved_query_id, target_id, duration_ms, row_count, error) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, QueryRun>(&query)
            .bind(input.saved_query_id)
            .bind(input.target_id)
            .bind(input.duration_ms)
            .bind(input.row_count)
            .bind(&input.error)
            .fetch_one(pool)
            .await
    }

    /// List recent query executions, newest first.
    pub async fn list_recent(pool: &PgPool, limit: i64) -> Result<Vec<QueryRun>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM query_runs ORDER BY executed_at DESC LIMIT $1");
        sqlx::query_as::<_, QueryRun>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }
}
